//! Shared helpers for the integration tests.

#![allow(dead_code)]

use crazy_eights::{Actor, Card, Game, GameOptions, Rank, Suit, Table, build_deck};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a test log subscriber once.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Every card of the deck except `used`, in canonical order.
pub fn rest_of_deck(used: &[Card]) -> Vec<Card> {
    build_deck()
        .into_iter()
        .filter(|card| !used.contains(card))
        .collect()
}

/// A table where the leftover cards form the draw pile beneath `draw_top`.
///
/// `draw_top` is listed in draw order: its first card is drawn first.
pub fn layout(
    human: &[Card],
    computer: &[Card],
    top: Card,
    draw_top: &[Card],
    turn: Actor,
) -> Table {
    let mut used: Vec<Card> = human.iter().chain(computer).chain(draw_top).copied().collect();
    used.push(top);

    let mut draw_pile = rest_of_deck(&used);
    draw_pile.extend(draw_top.iter().rev());

    Table::from_piles(
        human.to_vec(),
        computer.to_vec(),
        draw_pile,
        vec![top],
        top.suit,
        turn,
    )
    .unwrap()
}

/// A table with an empty draw pile; the leftover cards sit under `top`.
pub fn layout_empty_draw(human: &[Card], computer: &[Card], top: Card, turn: Actor) -> Table {
    let mut used: Vec<Card> = human.iter().chain(computer).copied().collect();
    used.push(top);

    let mut discard_pile = rest_of_deck(&used);
    discard_pile.push(top);

    Table::from_piles(
        human.to_vec(),
        computer.to_vec(),
        Vec::new(),
        discard_pile,
        top.suit,
        turn,
    )
    .unwrap()
}

pub fn game_from(table: Table) -> Game {
    init_logging();
    Game::from_table(GameOptions::default(), 1, table)
}
