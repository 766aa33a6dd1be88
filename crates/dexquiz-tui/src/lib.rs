//! Terminal UI for dexquiz
//!
//! A thin shell over [`dexquiz_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`dexquiz_app::Runtime`]
//!
//! This crate only handles terminal input and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use dexquiz_app::{App, AppAction, AppEvent, Driver, GameConfig, KeyInput, Runtime, Summary};
pub use terminal::{TerminalDriver, TerminalError};
