//! Game configuration.

use std::time::Duration;

use thiserror::Error;

/// Default pause after each submitted guess.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(600);

/// Default timer refresh period.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A zero tick interval would refresh the display in a busy loop.
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Tunables for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed grid column count. `None` derives it from the terminal width.
    ///
    /// Clamped to `MIN_COLUMNS..=MAX_COLUMNS` when applied.
    pub columns: Option<usize>,
    /// Pause after each judged guess during which Enter is ignored.
    pub feedback_delay: Duration,
    /// Timer refresh period.
    pub tick_interval: Duration,
    /// Whether to run and display the elapsed-time timer.
    pub show_timer: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: None,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            tick_interval: DEFAULT_TICK_INTERVAL,
            show_timer: true,
        }
    }
}

impl GameConfig {
    /// Check values the runtime cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}
