//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use std::time::Duration;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Arm the periodic display-refresh timer.
    StartTimer {
        /// Interval between [`crate::AppEvent::Tick`] events.
        period: Duration,
    },

    /// Disarm the periodic display-refresh timer.
    StopTimer,

    /// Deliver [`crate::AppEvent::Wake`] once this much time has passed.
    WakeAfter(Duration),
}
