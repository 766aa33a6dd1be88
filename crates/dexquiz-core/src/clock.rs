//! Elapsed-time tracking for display.

use std::{ops::Sub, time::Duration};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;

/// Session stopwatch, generic over the instant type.
///
/// Display only; gameplay never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClock<I> {
    started: I,
    stopped: Option<I>,
}

impl<I> SessionClock<I>
where
    I: Copy + Sub<Output = Duration>,
{
    /// Start the clock at `now`.
    pub fn start(now: I) -> Self {
        Self { started: now, stopped: None }
    }

    /// Freeze the clock. Later calls keep the first stop instant.
    pub fn stop(&mut self, now: I) {
        if self.stopped.is_none() {
            self.stopped = Some(now);
        }
    }

    /// Whether the clock is still running.
    pub fn is_running(&self) -> bool {
        self.stopped.is_none()
    }

    /// Time between start and `now`, or between start and stop once stopped.
    pub fn elapsed(&self, now: I) -> Duration {
        self.stopped.unwrap_or(now) - self.started
    }
}

/// Format elapsed time as `Ss`, `Mm Ss` or `Hh Mm Ss`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_by_magnitude() {
        assert_eq!(format_elapsed(Duration::ZERO), "0s");
        assert_eq!(format_elapsed(Duration::from_millis(59_999)), "59s");
        assert_eq!(format_elapsed(Duration::from_secs(60)), "1m 0s");
        assert_eq!(format_elapsed(Duration::from_secs(3599)), "59m 59s");
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "1h 0m 0s");
        assert_eq!(format_elapsed(Duration::from_secs(3 * 3600 + 25 * 60 + 7)), "3h 25m 7s");
    }

    #[test]
    fn stopped_clock_is_frozen() {
        let mut clock = SessionClock::start(Duration::from_secs(10));
        assert!(clock.is_running());
        assert_eq!(clock.elapsed(Duration::from_secs(15)), Duration::from_secs(5));

        clock.stop(Duration::from_secs(20));
        clock.stop(Duration::from_secs(30));
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(Duration::from_secs(99)), Duration::from_secs(10));
    }
}
