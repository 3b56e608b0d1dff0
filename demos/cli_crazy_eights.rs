//! CLI Crazy Eights example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use crazy_eights::{
    Actor, ComputerMove, Controller, DrawOutcome, GameOptions, GamePhase, GameState, PlayOutcome,
    Suit,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Crazy Eights CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut controller = Controller::new(GameOptions::default(), seed);
    controller.start_game();

    loop {
        if let Some(ticket) = controller.pending() {
            println!("Computer is thinking...");
            thread::sleep(ticket.delay());
            match controller.fire(ticket) {
                Ok(Some(dispatch)) => describe_computer(dispatch.transition.outcome),
                Ok(None) => {}
                Err(err) => println!("Computer error: {err}"),
            }
            continue;
        }

        let state = controller.state();
        if let Some(winner) = state.winner() {
            match winner {
                Actor::Human => println!("You emptied your hand. You win!"),
                Actor::Computer => println!("The computer emptied its hand. You lose."),
            }
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    controller.start_game();
                    continue;
                }
                _ => break,
            }
        }

        print_table(&state);

        if state.phase == GamePhase::AwaitingSuitChoice {
            let Some(suit) = prompt_suit() else {
                return;
            };
            if let Err(err) = controller.choose_suit(suit) {
                println!("Suit error: {err}");
            }
            continue;
        }

        let action = prompt_line("Card number to play, 'd' to draw, 'n' for a new game: ");
        match action.as_str() {
            "q" | "quit" => return,
            "n" | "new" => {
                controller.start_game();
            }
            "d" | "draw" => match controller.draw() {
                Ok(dispatch) => describe_draw(dispatch.transition.outcome),
                Err(err) => println!("Draw error: {err}"),
            },
            other => {
                let Some(card) = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| state.human_hand.get(i).copied())
                else {
                    println!("Unknown action.");
                    continue;
                };
                match controller.play(card) {
                    Ok(dispatch) => {
                        if dispatch.transition.outcome == PlayOutcome::WildPendingSuit {
                            println!("Wild! Name the next suit.");
                        }
                    }
                    Err(err) => println!("Play error: {err}"),
                }
            }
        }
    }
}

fn print_table(state: &GameState) {
    println!();
    if let (Some(top), Some(suit)) = (state.top_discard, state.active_suit) {
        println!("Top card: {top}  (active suit: {suit})");
    }
    println!(
        "Draw pile: {}  Computer holds: {}",
        state.draw_pile_len,
        state.computer_hand.len()
    );

    let playable = state.playable_cards(Actor::Human);
    let hand: Vec<String> = state
        .human_hand
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let marker = if playable.contains(card) { "*" } else { "" };
            format!("{}:{card}{marker}", i + 1)
        })
        .collect();
    println!("Your hand: {}", hand.join("  "));
}

fn describe_draw(outcome: DrawOutcome) {
    match outcome {
        DrawOutcome::DrawnPlayable(card) => println!("You drew {card}. You may play it."),
        DrawOutcome::DrawnUnplayable(card) => println!("You drew {card}. Turn passes."),
        DrawOutcome::DrawPileEmptyTurnSkipped => println!("The draw pile is empty. Turn passes."),
        DrawOutcome::DrawnAndPlayed { card, .. } => println!("Drew and played {card}."),
    }
}

fn describe_computer(outcome: ComputerMove) {
    match outcome {
        ComputerMove::Played { card, outcome } => match outcome {
            PlayOutcome::WildSuitChosen(suit) => {
                println!("Computer plays {card} and names {suit}.");
            }
            _ => println!("Computer plays {card}."),
        },
        ComputerMove::Drew(DrawOutcome::DrawnAndPlayed { card, play }) => match play {
            PlayOutcome::WildSuitChosen(suit) => {
                println!("Computer draws and plays {card}, naming {suit}.");
            }
            _ => println!("Computer draws and plays {card}."),
        },
        ComputerMove::Drew(DrawOutcome::DrawPileEmptyTurnSkipped) => {
            println!("Computer cannot draw. Turn passes.");
        }
        ComputerMove::Drew(_) => println!("Computer draws a card."),
    }
}

fn prompt_suit() -> Option<Suit> {
    loop {
        let answer = prompt_line("Suit (h/d/c/s): ");
        let suit = match answer.as_str() {
            "h" | "hearts" => Suit::Hearts,
            "d" | "diamonds" => Suit::Diamonds,
            "c" | "clubs" => Suit::Clubs,
            "s" | "spades" => Suit::Spades,
            "q" | "quit" => return None,
            _ => continue,
        };
        return Some(suit);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return "q".to_string();
    }
    if line.is_empty() {
        return "q".to_string();
    }
    line.trim().to_lowercase()
}
