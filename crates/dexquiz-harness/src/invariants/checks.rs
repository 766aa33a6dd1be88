//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use std::collections::HashSet;

use dexquiz_app::Phase;

use super::{Invariant, InvariantKind, InvariantResult, SessionSnapshot, Violation};

/// Every revealed id must exist in the roster.
pub struct RevealedSubsetOfRoster;

impl Invariant for RevealedSubsetOfRoster {
    fn kind(&self) -> InvariantKind {
        InvariantKind::RevealedSubsetOfRoster
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        match state.revealed.iter().find(|id| !state.roster.contains(*id)) {
            Some(id) => Err(Violation {
                invariant: self.kind(),
                message: format!("revealed id {id} is not in the roster"),
            }),
            None => Ok(()),
        }
    }
}

/// Revealed ids are unique and never outnumber the roster.
pub struct RevealedBounded;

impl Invariant for RevealedBounded {
    fn kind(&self) -> InvariantKind {
        InvariantKind::RevealedBounded
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        let mut seen = HashSet::with_capacity(state.revealed.len());
        if let Some(dup) = state.revealed.iter().find(|id| !seen.insert(**id)) {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("id {dup} revealed twice"),
            });
        }

        if state.revealed.len() > state.roster.len() {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "{} revealed but roster has {}",
                    state.revealed.len(),
                    state.roster.len()
                ),
            });
        }
        Ok(())
    }
}

/// Revealed count never decreases and grows by at most one per observation.
///
/// Each observation follows a single event, and a single guess reveals at
/// most one entry.
pub struct RevealedMonotonic;

impl Invariant for RevealedMonotonic {
    fn kind(&self) -> InvariantKind {
        InvariantKind::RevealedMonotonic
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        let counts = state.revealed_history.iter().copied().chain([state.revealed.len()]);
        let mut previous: Option<usize> = None;

        for count in counts {
            if let Some(prev) = previous
                && (count < prev || count > prev + 1)
            {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!("revealed count jumped {prev} → {count}"),
                });
            }
            previous = Some(count);
        }
        Ok(())
    }
}

/// The session is complete exactly when every roster entry is revealed.
pub struct CompleteIffAllRevealed;

impl Invariant for CompleteIffAllRevealed {
    fn kind(&self) -> InvariantKind {
        InvariantKind::CompleteIffAllRevealed
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        let all_revealed = state.revealed.len() == state.roster.len();
        let complete = state.phase == Phase::Complete;

        if all_revealed == complete {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "phase {:?} with {}/{} revealed",
                    state.phase,
                    state.revealed.len(),
                    state.roster.len()
                ),
            })
        }
    }
}

/// The clock is frozen once the session is complete.
pub struct ClockStoppedWhenComplete;

impl Invariant for ClockStoppedWhenComplete {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ClockStoppedWhenComplete
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        if state.phase == Phase::Complete && state.clock_running {
            return Err(Violation {
                invariant: self.kind(),
                message: "clock still running after completion".to_string(),
            });
        }
        Ok(())
    }
}
