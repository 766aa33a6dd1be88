//! Application layer for dexquiz
//!
//! Pure state machine and generic runtime for the guessing loop, so
//! deterministic simulation tests run the same code as the terminal game.
//!
//! # Components
//!
//! - [`App`]: game state machine (input editing, guess submission, phases)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver, owning the
//!   timer and post-guess pause schedule

#![forbid(unsafe_code)]

mod action;
mod app;
mod config;
mod driver;
mod event;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use config::{ConfigError, GameConfig};
pub use driver::Driver;
pub use event::AppEvent;
pub use input::{InputBuffer, KeyInput};
pub use runtime::Runtime;
pub use state::{Feedback, FeedbackKind, Phase, Summary};
