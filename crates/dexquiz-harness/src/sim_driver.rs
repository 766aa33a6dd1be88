//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as `TerminalDriver` but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`dexquiz_app::Runtime`] orchestration code runs in both the terminal
//! game and simulation.
//!
//! Input comes from a script of [`Step`]s. Time only moves on
//! [`Step::Advance`], and an advance stops early at the runtime's deadline so
//! timer ticks and pause wake-ups fire at exact virtual instants.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use dexquiz_app::{App, AppEvent, Driver, Feedback, KeyInput, Phase};
use thiserror::Error;

use crate::{InvariantRegistry, SessionSnapshot, SimInstant};

/// Error type for simulation driver.
#[derive(Debug, Clone, Error)]
#[error("SimDriverError: {0}")]
pub struct SimDriverError(pub String);

/// One scripted input step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Deliver a key press.
    Key(KeyInput),
    /// Deliver a terminal resize.
    Resize(u16, u16),
    /// Let virtual time pass with no input.
    Advance(Duration),
}

/// What the App looked like at one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Virtual time of the render.
    pub at: SimInstant,
    /// Header line.
    pub header: String,
    /// Grid rows as plain text.
    pub grid: Vec<String>,
    /// Grid column count.
    pub columns: usize,
    /// First grid row on screen.
    pub grid_scroll: usize,
    /// Feedback line, if any.
    pub feedback: Option<Feedback>,
    /// Text in the prompt.
    pub input: String,
    /// Session phase.
    pub phase: Phase,
    /// Revealed count.
    pub revealed: usize,
    /// Whether submissions were paused.
    pub paused: bool,
}

/// One call to [`Driver::poll_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollRecord {
    /// Virtual time the poll started.
    pub at: SimInstant,
    /// Deadline the runtime passed in.
    pub deadline: Option<SimInstant>,
}

/// Shared state between the driver and its handles.
#[derive(Debug)]
struct SharedState {
    script: VecDeque<Step>,
    now: SimInstant,
    terminal_size: Option<(u16, u16)>,
    frames: Vec<RenderedFrame>,
    polls: Vec<PollRecord>,
    revealed_history: Vec<usize>,
    /// Failure message, and the phase it waits for (`None` for any).
    render_failure: Option<(Option<Phase>, String)>,
    stopped: bool,
}

impl Default for SharedState {
    fn default() -> Self {
        Self {
            script: VecDeque::new(),
            now: SimInstant::ZERO,
            terminal_size: Some((80, 24)),
            frames: Vec::new(),
            polls: Vec::new(),
            revealed_history: Vec::new(),
            render_failure: None,
            stopped: false,
        }
    }
}

fn lock(state: &Mutex<SharedState>) -> MutexGuard<'_, SharedState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read-only view of a [`SimDriver`] that stays usable after the driver has
/// been moved into a runtime.
#[derive(Clone)]
pub struct SimHandle {
    state: Arc<Mutex<SharedState>>,
}

impl SimHandle {
    /// All frames rendered so far.
    pub fn frames(&self) -> Vec<RenderedFrame> {
        lock(&self.state).frames.clone()
    }

    /// Most recent frame.
    pub fn last_frame(&self) -> Option<RenderedFrame> {
        lock(&self.state).frames.last().cloned()
    }

    /// All polls so far.
    pub fn polls(&self) -> Vec<PollRecord> {
        lock(&self.state).polls.clone()
    }

    /// Current virtual time.
    pub fn now(&self) -> SimInstant {
        lock(&self.state).now
    }

    /// Whether [`Driver::stop`] was called.
    pub fn is_stopped(&self) -> bool {
        lock(&self.state).stopped
    }

    /// Script steps not yet consumed.
    pub fn pending_steps(&self) -> usize {
        lock(&self.state).script.len()
    }
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] trait so the same [`dexquiz_app::Runtime`]
/// orchestration code runs in both production TUI and simulation tests.
/// When the script runs out, the driver reports [`AppEvent::InputClosed`].
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    invariants: Option<InvariantRegistry>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a new simulation driver with an 80x24 terminal.
    pub fn new() -> Self {
        Self { state: Arc::new(Mutex::new(SharedState::default())), invariants: None }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    /// Report the given terminal size, or `None` for an unknown size.
    #[must_use]
    pub fn with_terminal_size(self, size: Option<(u16, u16)>) -> Self {
        lock(&self.state).terminal_size = size;
        self
    }

    /// Handle for inspecting the driver after it moves into a runtime.
    pub fn handle(&self) -> SimHandle {
        SimHandle { state: Arc::clone(&self.state) }
    }

    /// Append a step to the script.
    pub fn push(&self, step: Step) {
        lock(&self.state).script.push_back(step);
    }

    /// Press a single key.
    pub fn press(&self, key: KeyInput) {
        self.push(Step::Key(key));
    }

    /// Type text without submitting it.
    pub fn type_text(&self, text: &str) {
        let mut state = lock(&self.state);
        state.script.extend(text.chars().map(|c| Step::Key(KeyInput::Char(c))));
    }

    /// Type text, press Enter, then wait out `pause`.
    pub fn guess(&self, text: &str, pause: Duration) {
        self.type_text(text);
        self.press(KeyInput::Enter);
        self.advance(pause);
    }

    /// Let virtual time pass.
    pub fn advance(&self, duration: Duration) {
        self.push(Step::Advance(duration));
    }

    /// Resize the virtual terminal.
    pub fn resize(&self, cols: u16, rows: u16) {
        self.push(Step::Resize(cols, rows));
    }

    /// Make the next render fail with `message`.
    pub fn fail_next_render(&self, message: impl Into<String>) {
        lock(&self.state).render_failure = Some((None, message.into()));
    }

    /// Make the first render in `phase` fail with `message`.
    pub fn fail_render_in(&self, phase: Phase, message: impl Into<String>) {
        lock(&self.state).render_failure = Some((Some(phase), message.into()));
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;
    type Instant = SimInstant;

    async fn poll_event(
        &mut self,
        deadline: Option<SimInstant>,
    ) -> Result<Option<AppEvent>, Self::Error> {
        let mut state = lock(&self.state);
        let at = state.now;
        state.polls.push(PollRecord { at, deadline });

        loop {
            if let Some(deadline) = deadline
                && deadline <= state.now
            {
                return Ok(None);
            }

            let Some(step) = state.script.pop_front() else {
                return Ok(Some(AppEvent::InputClosed));
            };

            match step {
                Step::Key(key) => return Ok(Some(AppEvent::Key(key))),
                Step::Resize(cols, rows) => {
                    state.terminal_size = Some((cols, rows));
                    return Ok(Some(AppEvent::Resize(cols, rows)));
                },
                Step::Advance(duration) => {
                    let target = state.now + duration;
                    match deadline {
                        Some(deadline) if deadline <= target => {
                            let remaining = target - deadline;
                            state.now = deadline;
                            if !remaining.is_zero() {
                                state.script.push_front(Step::Advance(remaining));
                            }
                            return Ok(None);
                        },
                        _ => state.now = target,
                    }
                },
            }
        }
    }

    fn now(&self) -> SimInstant {
        lock(&self.state).now
    }

    fn terminal_size(&self) -> Option<(u16, u16)> {
        lock(&self.state).terminal_size
    }

    fn render(&mut self, app: &App<SimInstant>) -> Result<(), Self::Error> {
        let mut state = lock(&self.state);
        let due = state
            .render_failure
            .as_ref()
            .is_some_and(|(phase, _)| phase.is_none_or(|phase| phase == app.phase()));
        if due && let Some((_, message)) = state.render_failure.take() {
            return Err(SimDriverError(message));
        }

        if let Some(registry) = &self.invariants {
            let snapshot = SessionSnapshot::from_app(app, &state.revealed_history);
            let context = format!("at {:?}", state.now.since_start());
            registry.assert_all(&snapshot, &context);
        }

        let revealed = app.session().revealed().len();
        state.revealed_history.push(revealed);

        let frame = RenderedFrame {
            at: state.now,
            header: app.header(),
            grid: app.grid().lines(),
            columns: app.columns(),
            grid_scroll: app.grid_scroll(),
            feedback: app.feedback().cloned(),
            input: app.input().text().to_string(),
            phase: app.phase(),
            revealed,
            paused: app.is_paused(),
        };
        tracing::trace!(header = %frame.header, "sim render");
        state.frames.push(frame);
        Ok(())
    }

    fn stop(&mut self) {
        lock(&self.state).stopped = true;
    }
}
