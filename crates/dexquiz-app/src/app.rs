//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the game completely decoupled from terminal I/O and
//! real time.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs
//! (stamped with the current instant) and produces [`crate::AppAction`]
//! instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Owns the [`Session`] and the line editor for the guess prompt.
//! - Produces feedback for every submitted guess and gates submissions
//!   during the post-guess pause.
//! - Tracks terminal dimensions and a layout-dirty flag for resize handling.
//! - Owns the grid scroll offset: scroll keys move it, a new reveal brings
//!   the revealed row into view.
//! - Starts and stops the session clock on phase transitions.

use std::{ops::Sub, time::Duration};

use dexquiz_core::{
    EntryId, Grid, GuessError, GuessOutcome, Roster, Session, SessionClock, format_elapsed, grid,
};

use crate::{
    AppAction, AppEvent, Feedback, FeedbackKind, GameConfig, InputBuffer, KeyInput, Phase, Summary,
};

const DEFAULT_TERMINAL_HEIGHT: u16 = 24;
/// Rows outside the grid: header, feedback line and the bordered input box.
const GRID_CHROME_ROWS: u16 = 5;
const EMPTY_GUESS_MESSAGE: &str = "Please enter a Pokémon name.";

/// Application state machine.
///
/// Generic over the instant type so simulation can drive it with virtual
/// time. No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App<I> {
    /// Roster and reveal state.
    session: Session,
    /// Session tunables.
    config: GameConfig,
    /// Current phase.
    phase: Phase,
    /// Started by [`App::start`]. `None` before that.
    clock: Option<SessionClock<I>>,
    /// Elapsed time as of the last handled event.
    elapsed: Duration,
    /// Guess being typed.
    input: InputBuffer,
    /// Feedback for the last turn. `None` before the first guess.
    feedback: Option<Feedback>,
    /// Set after a judged guess until [`AppEvent::Wake`].
    paused: bool,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Grid column count as of the last layout refresh.
    columns: usize,
    /// Set by resize, cleared by [`App::refresh_layout`].
    layout_dirty: bool,
    /// First grid row on screen.
    grid_scroll: usize,
}

impl<I> App<I>
where
    I: Copy + Sub<Output = Duration>,
{
    /// Create an App for `roster`. Call [`App::start`] before feeding events.
    pub fn new(roster: Roster, config: GameConfig) -> Self {
        let terminal_size = (grid::DEFAULT_TERMINAL_WIDTH, DEFAULT_TERMINAL_HEIGHT);
        let columns = Self::columns_for(&config, terminal_size.0);
        Self {
            session: Session::new(roster),
            config,
            phase: Phase::Playing,
            clock: None,
            elapsed: Duration::ZERO,
            input: InputBuffer::new(),
            feedback: None,
            paused: false,
            terminal_size,
            columns,
            layout_dirty: true,
            grid_scroll: 0,
        }
    }

    /// Start the session clock and request the first render.
    pub fn start(&mut self, now: I) -> Vec<AppAction> {
        self.clock = Some(SessionClock::start(now));
        self.elapsed = Duration::ZERO;
        tracing::info!(total = self.session.roster().len(), "session started");

        let mut actions = Vec::with_capacity(2);
        if self.config.show_timer {
            actions.push(AppAction::StartTimer { period: self.config.tick_interval });
        }
        actions.push(AppAction::Render);
        actions
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent, now: I) -> Vec<AppAction> {
        if let Some(clock) = &self.clock {
            self.elapsed = clock.elapsed(now);
        }

        match event {
            AppEvent::Key(key) => self.handle_key(key, now),
            AppEvent::Tick => match self.phase {
                Phase::Playing => vec![AppAction::Render],
                Phase::Complete => vec![],
            },
            AppEvent::Wake => {
                self.paused = false;
                vec![AppAction::Render]
            },
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                self.layout_dirty = true;
                vec![AppAction::Render]
            },
            AppEvent::InputClosed => self.quit(),
        }
    }

    fn handle_key(&mut self, key: KeyInput, now: I) -> Vec<AppAction> {
        if self.phase == Phase::Complete {
            return self.quit();
        }

        match key {
            KeyInput::Esc => self.quit(),
            KeyInput::Enter => self.submit(now),
            KeyInput::Up | KeyInput::Down | KeyInput::PageUp | KeyInput::PageDown => {
                self.scroll_grid(key)
            },
            _ => {
                if self.input.edit(key) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
        }
    }

    /// Judge the typed guess.
    fn submit(&mut self, now: I) -> Vec<AppAction> {
        if self.paused {
            return vec![];
        }

        let raw = self.input.take();
        let outcome = match self.session.submit(&raw) {
            Ok(outcome) => outcome,
            Err(GuessError::Empty) => {
                self.feedback = Some(Feedback::new(FeedbackKind::Invalid, EMPTY_GUESS_MESSAGE));
                return vec![AppAction::Render];
            },
        };

        if let GuessOutcome::Correct(id) = outcome {
            self.scroll_to_entry(id);
        }
        self.feedback = Some(self.describe(outcome, &raw));

        if self.session.is_complete() {
            return self.complete(now);
        }

        self.paused = true;
        vec![AppAction::Render, AppAction::WakeAfter(self.config.feedback_delay)]
    }

    /// Feedback text for a judged guess.
    fn describe(&self, outcome: GuessOutcome, raw: &str) -> Feedback {
        let name = |id| self.session.roster().get(id).map_or("?", |entry| entry.name.as_str());
        match outcome {
            GuessOutcome::Correct(id) => {
                Feedback::new(FeedbackKind::Correct, format!("Correct: {}", name(id)))
            },
            GuessOutcome::AlreadyGuessed(id) => {
                Feedback::new(FeedbackKind::AlreadyGuessed, format!("Already guessed: {}", name(id)))
            },
            GuessOutcome::Incorrect => {
                Feedback::new(FeedbackKind::Incorrect, format!("Incorrect: {raw}"))
            },
        }
    }

    /// Move the grid viewport by one row or one screen.
    fn scroll_grid(&mut self, key: KeyInput) -> Vec<AppAction> {
        let page = self.grid_height();
        let target = match key {
            KeyInput::Up => self.grid_scroll.saturating_sub(1),
            KeyInput::Down => self.grid_scroll.saturating_add(1),
            KeyInput::PageUp => self.grid_scroll.saturating_sub(page),
            KeyInput::PageDown => self.grid_scroll.saturating_add(page),
            _ => self.grid_scroll,
        }
        .min(self.max_grid_scroll());

        if target == self.grid_scroll {
            return vec![];
        }
        self.grid_scroll = target;
        vec![AppAction::Render]
    }

    /// Scroll as little as needed to bring the row holding `id` on screen.
    fn scroll_to_entry(&mut self, id: EntryId) {
        let Some(index) = self.session.roster().entries().iter().position(|e| e.id == id) else {
            return;
        };
        let rows = grid::rows_for(self.session.roster().len(), self.columns).max(1);
        let row = index % rows;
        let height = self.grid_height();

        if row < self.grid_scroll {
            self.grid_scroll = row;
        } else if row >= self.grid_scroll + height {
            self.grid_scroll = row + 1 - height;
        }
    }

    /// Enter [`Phase::Complete`]: freeze the clock and stop the timer.
    fn complete(&mut self, now: I) -> Vec<AppAction> {
        self.phase = Phase::Complete;
        self.paused = false;
        if let Some(clock) = &mut self.clock {
            clock.stop(now);
            self.elapsed = clock.elapsed(now);
        }

        tracing::info!(
            total = self.session.roster().len(),
            elapsed = %format_elapsed(self.elapsed),
            "all entries revealed"
        );
        vec![AppAction::StopTimer, AppAction::Render]
    }

    /// Whether the session clock has started and not yet stopped.
    pub fn is_clock_running(&self) -> bool {
        self.clock.as_ref().is_some_and(SessionClock::is_running)
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Recompute the column count if the layout is dirty.
    ///
    /// Called once per render cycle. Returns `true` if the layout changed.
    pub fn refresh_layout(&mut self) -> bool {
        if !self.layout_dirty {
            return false;
        }
        self.layout_dirty = false;

        let columns = Self::columns_for(&self.config, self.terminal_size.0);
        let changed = columns != self.columns;
        self.columns = columns;
        self.grid_scroll = self.grid_scroll.min(self.max_grid_scroll());
        tracing::debug!(columns, width = self.terminal_size.0, changed, "layout refreshed");
        changed
    }

    fn columns_for(config: &GameConfig, width: u16) -> usize {
        config.columns.map_or_else(|| grid::columns_for_width(width), grid::clamp_columns)
    }
}

impl<I> App<I> {
    /// Roster and reveal state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Session tunables.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether every entry has been revealed.
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Guess being typed.
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// Feedback for the last turn. `None` before the first guess.
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Whether submissions are held back by the post-guess pause.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Elapsed time as of the last handled event.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Grid column count as of the last layout refresh.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// First grid row on screen.
    pub fn grid_scroll(&self) -> usize {
        self.grid_scroll
    }

    /// Grid rows that fit on screen below the header and above the prompt.
    pub fn grid_height(&self) -> usize {
        usize::from(self.terminal_size.1.saturating_sub(GRID_CHROME_ROWS).max(1))
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_grid_scroll(&self) -> usize {
        grid::rows_for(self.session.roster().len(), self.columns)
            .saturating_sub(self.grid_height())
    }

    /// Whether a resize is waiting for [`App::refresh_layout`].
    pub fn is_layout_dirty(&self) -> bool {
        self.layout_dirty
    }

    /// Header line: `Guessed n/total`, plus the timer when enabled.
    pub fn header(&self) -> String {
        let revealed = self.session.revealed().len();
        let total = self.session.roster().len();
        if self.config.show_timer {
            format!("Guessed {revealed}/{total} | Time: {}", format_elapsed(self.elapsed))
        } else {
            format!("Guessed {revealed}/{total}")
        }
    }

    /// Grid for the current reveal state and column count.
    pub fn grid(&self) -> Grid<'_> {
        Grid::layout(self.session.roster(), self.session.revealed(), self.columns)
    }

    /// Summary of the run so far.
    pub fn summary(&self) -> Summary {
        Summary {
            revealed: self.session.revealed().len(),
            total: self.session.roster().len(),
            elapsed: self.elapsed,
            completed: self.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use dexquiz_core::Entry;

    use super::*;

    /// Virtual instants: seconds since an arbitrary origin.
    type Secs = Duration;

    fn at(secs: u64) -> Secs {
        Duration::from_secs(secs)
    }

    fn tiny_roster() -> Roster {
        let entries = vec![Entry::new(1, "Bulbasaur"), Entry::new(2, "Ivysaur")];
        Roster::new(entries).unwrap_or_else(|e| panic!("invalid test roster: {e}"))
    }

    fn started(roster: Roster) -> App<Secs> {
        let mut app = App::new(roster, GameConfig::default());
        let _ = app.start(at(0));
        app
    }

    fn type_and_submit(app: &mut App<Secs>, text: &str, now: Secs) -> Vec<AppAction> {
        for c in text.chars() {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(c)), now);
        }
        app.handle(AppEvent::Key(KeyInput::Enter), now)
    }

    #[test]
    fn start_arms_timer_and_renders() {
        let mut app: App<Secs> = App::new(tiny_roster(), GameConfig::default());
        let actions = app.start(at(0));

        assert_eq!(actions, vec![
            AppAction::StartTimer { period: Duration::from_secs(1) },
            AppAction::Render
        ]);
        assert!(app.is_clock_running());
    }

    #[test]
    fn start_without_timer_only_renders() {
        let config = GameConfig { show_timer: false, ..GameConfig::default() };
        let mut app: App<Secs> = App::new(tiny_roster(), config);

        assert_eq!(app.start(at(0)), vec![AppAction::Render]);
        assert_eq!(app.header(), "Guessed 0/2");
    }

    #[test]
    fn correct_guess_reveals_and_pauses() {
        let mut app = started(Roster::kanto());
        let actions = type_and_submit(&mut app, "  bulbasaur ", at(3));

        assert!(matches!(actions.as_slice(), [AppAction::Render, AppAction::WakeAfter(_)]));
        assert!(app.session().revealed().contains(1));
        assert!(app.is_paused());
        assert!(app.input().is_empty());
        assert_eq!(
            app.feedback(),
            Some(&Feedback::new(FeedbackKind::Correct, "Correct: Bulbasaur"))
        );
        assert_eq!(app.header(), "Guessed 1/151 | Time: 3s");
    }

    #[test]
    fn enter_is_ignored_while_paused() {
        let mut app = started(Roster::kanto());
        let _ = type_and_submit(&mut app, "ivysaur", at(1));

        let actions = type_and_submit(&mut app, "venusaur", at(1));
        assert!(actions.is_empty());
        assert_eq!(app.session().revealed().len(), 1);
        assert_eq!(app.input().text(), "venusaur", "typing is kept during the pause");

        let _ = app.handle(AppEvent::Wake, at(2));
        assert!(!app.is_paused());
        let _ = app.handle(AppEvent::Key(KeyInput::Enter), at(2));
        assert_eq!(app.session().revealed().len(), 2);
    }

    #[test]
    fn already_guessed_and_incorrect_feedback() {
        let mut app = started(Roster::kanto());
        let _ = type_and_submit(&mut app, "bulbasaur", at(1));
        let _ = app.handle(AppEvent::Wake, at(1));

        let _ = type_and_submit(&mut app, "BULBASAUR", at(2));
        assert_eq!(
            app.feedback(),
            Some(&Feedback::new(FeedbackKind::AlreadyGuessed, "Already guessed: Bulbasaur"))
        );
        let _ = app.handle(AppEvent::Wake, at(2));

        let _ = type_and_submit(&mut app, "pikachu99", at(3));
        assert_eq!(
            app.feedback(),
            Some(&Feedback::new(FeedbackKind::Incorrect, "Incorrect: pikachu99"))
        );
        assert_eq!(app.session().revealed().len(), 1);
    }

    #[test]
    fn incorrect_feedback_echoes_raw_input() {
        let mut app = started(Roster::kanto());
        let _ = type_and_submit(&mut app, "  pikachu99 ", at(1));
        assert_eq!(
            app.feedback(),
            Some(&Feedback::new(FeedbackKind::Incorrect, "Incorrect:   pikachu99 "))
        );
    }

    #[test]
    fn blank_guess_reprompts_without_pause() {
        let mut app = started(Roster::kanto());
        let actions = type_and_submit(&mut app, "   ", at(1));

        assert_eq!(actions, vec![AppAction::Render]);
        assert!(!app.is_paused());
        assert_eq!(app.feedback().map(|f| f.kind), Some(FeedbackKind::Invalid));
        assert!(app.session().revealed().is_empty());
    }

    #[test]
    fn last_guess_completes_and_stops_timer() {
        let mut app = started(tiny_roster());
        let _ = type_and_submit(&mut app, "bulbasaur", at(5));
        let _ = app.handle(AppEvent::Wake, at(6));

        let actions = type_and_submit(&mut app, "ivysaur", at(10));
        assert_eq!(actions, vec![AppAction::StopTimer, AppAction::Render]);
        assert_eq!(app.phase(), Phase::Complete);

        // Clock is frozen at completion
        assert!(!app.is_clock_running());
        let _ = app.handle(AppEvent::Tick, at(100));
        assert_eq!(app.elapsed(), Duration::from_secs(10));
        assert_eq!(app.summary(), Summary {
            revealed: 2,
            total: 2,
            elapsed: Duration::from_secs(10),
            completed: true,
        });
    }

    #[test]
    fn any_key_quits_after_completion() {
        let mut app = started(tiny_roster());
        let _ = type_and_submit(&mut app, "bulbasaur", at(1));
        let _ = app.handle(AppEvent::Wake, at(1));
        let _ = type_and_submit(&mut app, "ivysaur", at(2));

        let actions = app.handle(AppEvent::Key(KeyInput::Char('x')), at(3));
        assert_eq!(actions, vec![AppAction::Quit]);
    }

    #[test]
    fn tick_renders_only_while_playing() {
        let mut app = started(tiny_roster());
        assert_eq!(app.handle(AppEvent::Tick, at(1)), vec![AppAction::Render]);
        assert_eq!(app.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn esc_and_closed_input_quit() {
        let mut app = started(tiny_roster());
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Esc), at(1)), vec![AppAction::Quit]);
        assert_eq!(app.handle(AppEvent::InputClosed, at(1)), vec![AppAction::Quit]);
        assert!(!app.summary().completed);
    }

    #[test]
    fn resize_marks_layout_dirty_until_refreshed() {
        let mut app = started(Roster::kanto());
        let _ = app.refresh_layout();
        assert!(!app.is_layout_dirty());
        assert_eq!(app.columns(), 3);

        let actions = app.handle(AppEvent::Resize(200, 50), at(1));
        assert_eq!(actions, vec![AppAction::Render]);
        assert!(app.is_layout_dirty());
        assert_eq!(app.columns(), 3, "columns change only on refresh");

        assert!(app.refresh_layout());
        assert_eq!(app.columns(), 8);
        assert!(!app.refresh_layout());
    }

    /// Kanto at 80x24: 51 grid rows, 19 on screen.
    fn kanto_80x24() -> App<Secs> {
        let mut app = started(Roster::kanto());
        let _ = app.handle(AppEvent::Resize(80, 24), at(0));
        let _ = app.refresh_layout();
        app
    }

    fn press(app: &mut App<Secs>, key: KeyInput) -> Vec<AppAction> {
        app.handle(AppEvent::Key(key), at(1))
    }

    #[test]
    fn scroll_keys_move_the_grid() {
        let mut app = kanto_80x24();
        assert_eq!(app.grid_height(), 19);
        assert_eq!(app.max_grid_scroll(), 32);

        assert_eq!(press(&mut app, KeyInput::Down), vec![AppAction::Render]);
        assert_eq!(app.grid_scroll(), 1);
        let _ = press(&mut app, KeyInput::PageDown);
        assert_eq!(app.grid_scroll(), 20);
        let _ = press(&mut app, KeyInput::PageDown);
        assert_eq!(app.grid_scroll(), 32, "clamped to the last full page");
        assert!(press(&mut app, KeyInput::Down).is_empty());

        let _ = press(&mut app, KeyInput::PageUp);
        assert_eq!(app.grid_scroll(), 13);
        let _ = press(&mut app, KeyInput::Up);
        assert_eq!(app.grid_scroll(), 12);
        let _ = press(&mut app, KeyInput::PageUp);
        assert_eq!(app.grid_scroll(), 0);
        assert!(press(&mut app, KeyInput::Up).is_empty());
        assert!(app.input().is_empty(), "scroll keys never edit the guess");
    }

    #[test]
    fn reveal_brings_its_row_into_view() {
        let mut app = kanto_80x24();

        // Dugtrio (#51) is on the last row
        let _ = type_and_submit(&mut app, "dugtrio", at(1));
        assert_eq!(app.grid_scroll(), 32);
        let _ = app.handle(AppEvent::Wake, at(2));

        // Ivysaur (#2) is above the viewport
        let _ = type_and_submit(&mut app, "ivysaur", at(3));
        assert_eq!(app.grid_scroll(), 1);
        let _ = app.handle(AppEvent::Wake, at(4));

        // Already on screen: no movement
        let _ = type_and_submit(&mut app, "pidgey", at(5));
        assert_eq!(app.grid_scroll(), 1);
    }

    #[test]
    fn taller_terminal_clamps_scroll() {
        let mut app = kanto_80x24();
        let _ = press(&mut app, KeyInput::PageDown);
        assert_eq!(app.grid_scroll(), 19);

        let _ = app.handle(AppEvent::Resize(80, 60), at(2));
        let _ = app.refresh_layout();
        assert_eq!(app.max_grid_scroll(), 0);
        assert_eq!(app.grid_scroll(), 0);
    }

    #[test]
    fn fixed_columns_ignore_terminal_width() {
        let config = GameConfig { columns: Some(50), ..GameConfig::default() };
        let mut app: App<Secs> = App::new(Roster::kanto(), config);
        let _ = app.handle(AppEvent::Resize(40, 10), at(0));
        let _ = app.refresh_layout();

        assert_eq!(app.columns(), grid::MAX_COLUMNS);
        assert_eq!(app.grid().columns(), grid::MAX_COLUMNS);
    }
}
