//! Game configuration options.

use core::time::Duration;

/// Configuration options for a Crazy Eights game.
///
/// The rules themselves are fixed; options only cover how the game is run.
///
/// ```
/// use core::time::Duration;
///
/// use crazy_eights::GameOptions;
///
/// let options = GameOptions::default().with_computer_delay(Duration::from_millis(250));
/// assert_eq!(options.computer_delay, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Pause before the computer acts, so its turn is perceptible.
    pub computer_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            computer_delay: Duration::from_secs(1),
        }
    }
}

impl GameOptions {
    /// Sets the pause before the computer acts.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    ///
    /// use crazy_eights::GameOptions;
    ///
    /// let options = GameOptions::default().with_computer_delay(Duration::ZERO);
    /// assert!(options.computer_delay.is_zero());
    /// ```
    #[must_use]
    pub const fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay = delay;
        self
    }
}
