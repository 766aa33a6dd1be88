//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: game state machine
//! - [`Driver`]: Platform-specific I/O
//! - [`Schedule`]: the timer and post-guess pause deadlines

use std::{ops::Add, time::Duration};

use dexquiz_core::{Roster, grid};

use crate::{App, AppAction, AppEvent, Driver, GameConfig, Summary};

const DEFAULT_TERMINAL_HEIGHT: u16 = 24;

/// Armed periodic timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer<I> {
    next: I,
    period: Duration,
}

/// Deadlines armed by [`AppAction`]s.
///
/// The periodic timer exists only between `StartTimer` and `StopTimer`; the
/// wake deadline is one-shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Schedule<I> {
    timer: Option<Timer<I>>,
    wake: Option<I>,
}

impl<I> Default for Schedule<I> {
    fn default() -> Self {
        Self { timer: None, wake: None }
    }
}

impl<I> Schedule<I>
where
    I: Copy + Ord + Add<Duration, Output = I>,
{
    fn start_timer(&mut self, now: I, period: Duration) {
        self.timer = Some(Timer { next: now + period, period });
    }

    fn stop_timer(&mut self) {
        self.timer = None;
    }

    fn wake_at(&mut self, at: I) {
        self.wake = Some(at);
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    /// Earliest armed deadline.
    fn next_deadline(&self) -> Option<I> {
        let tick = self.timer.map(|timer| timer.next);
        match (tick, self.wake) {
            (Some(tick), Some(wake)) => Some(tick.min(wake)),
            (tick, wake) => tick.or(wake),
        }
    }

    /// Events whose deadline has passed. Re-arms the timer, disarms the wake.
    ///
    /// Missed ticks collapse into one; the next tick is a full period away.
    fn take_due(&mut self, now: I) -> Vec<AppEvent> {
        let mut due = Vec::new();

        if let Some(at) = self.wake
            && at <= now
        {
            self.wake = None;
            due.push(AppEvent::Wake);
        }

        if let Some(timer) = &mut self.timer
            && timer.next <= now
        {
            timer.next = now + timer.period;
            due.push(AppEvent::Tick);
        }

        due
    }
}

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App<D::Instant>,
    schedule: Schedule<D::Instant>,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime for `roster` with the given driver and config.
    pub fn new(driver: D, roster: Roster, config: GameConfig) -> Self {
        Self { driver, app: App::new(roster, config), schedule: Schedule::default() }
    }

    /// Run the main event loop until the player quits.
    ///
    /// This is the core orchestration loop that:
    /// 1. Starts the session and renders the first frame
    /// 2. Waits for input from the driver until the next armed deadline
    /// 3. Feeds input or due timer/wake events to the App
    /// 4. Executes the actions the App returns
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error. A failed
    /// render once every entry is revealed is logged and ends the run with
    /// the completed summary instead.
    pub async fn run(mut self) -> Result<Summary, D::Error> {
        let (cols, rows) = self
            .driver
            .terminal_size()
            .unwrap_or((grid::DEFAULT_TERMINAL_WIDTH, DEFAULT_TERMINAL_HEIGHT));
        let now = self.driver.now();
        let _ = self.app.handle(AppEvent::Resize(cols, rows), now);

        let actions = self.app.start(now);
        let mut should_quit = self.process_actions(actions)?;

        while !should_quit {
            should_quit = self.process_cycle().await?;
        }

        self.schedule.clear();
        self.driver.stop();

        let summary = self.app.summary();
        tracing::info!(%summary, "session ended");
        Ok(summary)
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let deadline = self.schedule.next_deadline();
        let events = match self.driver.poll_event(deadline).await? {
            Some(event) => vec![event],
            None => self.schedule.take_due(self.driver.now()),
        };

        for event in events {
            let now = self.driver.now();
            let actions = self.app.handle(event, now);
            if self.process_actions(actions)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => {
                    self.app.refresh_layout();
                    if let Err(error) = self.driver.render(&self.app) {
                        // Completed runs still return their summary
                        if self.app.is_complete() {
                            tracing::warn!(%error, "render after completion failed");
                            return Ok(true);
                        }
                        return Err(error);
                    }
                },
                AppAction::Quit => return Ok(true),
                AppAction::StartTimer { period } => {
                    let now = self.driver.now();
                    self.schedule.start_timer(now, period);
                },
                AppAction::StopTimer => self.schedule.stop_timer(),
                AppAction::WakeAfter(delay) => {
                    let at = self.driver.now() + delay;
                    self.schedule.wake_at(at);
                },
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App<D::Instant> {
        &self.app
    }
}
