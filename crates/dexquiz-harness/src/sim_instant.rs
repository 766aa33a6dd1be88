//! Virtual time for simulation.

use std::{
    ops::{Add, Sub},
    time::Duration,
};

/// Virtual instant: time since the start of the simulation.
///
/// Only moves when a script step advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SimInstant(Duration);

impl SimInstant {
    /// Simulation start.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Instant `offset` after simulation start.
    pub fn from_start(offset: Duration) -> Self {
        Self(offset)
    }

    /// Time since simulation start.
    pub fn since_start(self) -> Duration {
        self.0
    }
}

impl Add<Duration> for SimInstant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

impl Sub for SimInstant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}
