//! Deterministic simulation harness for dexquiz.
//!
//! [`SimDriver`] implements the [`dexquiz_app::Driver`] trait with scripted
//! key presses and a virtual clock, so the production
//! [`dexquiz_app::Runtime`] runs unchanged in tests without a terminal and
//! without real sleeps.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the session
//! invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod sim_driver;
pub mod sim_instant;

pub use invariants::{
    ClockStoppedWhenComplete, CompleteIffAllRevealed, Invariant, InvariantKind, InvariantRegistry,
    InvariantResult, RevealedBounded, RevealedMonotonic, RevealedSubsetOfRoster, SessionSnapshot,
    Violation,
};
pub use sim_driver::{PollRecord, RenderedFrame, SimDriver, SimDriverError, SimHandle, Step};
pub use sim_instant::SimInstant;
