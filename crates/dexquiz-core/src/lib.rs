//! Core game logic for dexquiz.
//!
//! Everything in this crate is pure: no terminal, no clock source, no I/O.
//! Time is injected by the caller so the same code runs against real and
//! virtual instants.
//!
//! # Components
//!
//! - [`Roster`]: the fixed, ordered list of guessable entries
//! - [`RevealedSet`]: entries found so far, in the order they were found
//! - [`matcher`]: guess normalization and judging
//! - [`Session`]: roster plus reveal state, mutated only through guesses
//! - [`SessionClock`]: elapsed-time tracking for display
//! - [`Grid`]: column-major layout of the roster for rendering

#![forbid(unsafe_code)]

mod clock;
mod data;
mod error;
pub mod grid;
pub mod matcher;
mod revealed;
mod roster;
mod session;

pub use clock::{SessionClock, format_elapsed};
pub use error::{GuessError, RosterError};
pub use grid::{Cell, Grid};
pub use matcher::GuessOutcome;
pub use revealed::RevealedSet;
pub use roster::{Entry, EntryId, Roster};
pub use session::Session;
