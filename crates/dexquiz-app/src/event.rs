//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (keyboard, resize) reported by the driver.
//! - Deadlines armed by the runtime schedule (timer ticks, pause wake-ups).

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic timer tick.
    Tick,

    /// The post-guess pause has elapsed.
    Wake,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// The input source is gone; no more keys will arrive.
    InputClosed,
}
