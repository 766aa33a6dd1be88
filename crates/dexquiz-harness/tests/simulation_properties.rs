//! Property-based tests for the full game loop under simulation.
//!
//! Random scripts of keys, resizes and waits are run through the production
//! Runtime. The standard invariants are asserted on every render, so any
//! script that breaks one fails inside the driver.

use std::time::Duration;

use dexquiz_app::{GameConfig, KeyInput, Phase, Runtime, Summary};
use dexquiz_core::Roster;
use dexquiz_harness::{InvariantRegistry, SimDriver, SimHandle, Step};
use proptest::prelude::*;

/// Seven roster names plus two guesses that match nothing.
const VOCABULARY: &[&str] =
    &["bulbasaur", "Ivysaur", "VENUSAUR", "mew", "mewtwo", "mr. mime", "pikachu99", "ditto", " "];

fn step_strategy() -> impl Strategy<Value = Vec<Step>> {
    let guess = prop::sample::select(VOCABULARY).prop_map(|word| {
        let mut steps: Vec<Step> = word.chars().map(|c| Step::Key(KeyInput::Char(c))).collect();
        steps.push(Step::Key(KeyInput::Enter));
        steps
    });
    let edit = prop::sample::select(vec![
        KeyInput::Backspace,
        KeyInput::Delete,
        KeyInput::Left,
        KeyInput::Right,
        KeyInput::Home,
        KeyInput::End,
        KeyInput::Up,
        KeyInput::Down,
        KeyInput::PageUp,
        KeyInput::PageDown,
        KeyInput::Enter,
    ])
    .prop_map(|key| vec![Step::Key(key)]);
    let resize = (0u16..300, 1u16..80).prop_map(|(cols, rows)| vec![Step::Resize(cols, rows)]);
    let wait = (0u64..2500).prop_map(|ms| vec![Step::Advance(Duration::from_millis(ms))]);

    prop_oneof![4 => guess, 2 => edit, 1 => resize, 3 => wait]
}

fn run_script(scripts: Vec<Vec<Step>>, show_timer: bool) -> (Summary, SimHandle) {
    let driver = SimDriver::new().with_invariants(InvariantRegistry::standard());
    for step in scripts.into_iter().flatten() {
        driver.push(step);
    }
    let handle = driver.handle();

    let config = GameConfig { show_timer, ..GameConfig::default() };
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap_or_else(|e| panic!("failed to build runtime: {e}"));
    let summary = runtime
        .block_on(Runtime::new(driver, Roster::kanto(), config).run())
        .unwrap_or_else(|e| panic!("runtime failed: {e}"));
    (summary, handle)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_play_holds_invariants(
        scripts in prop::collection::vec(step_strategy(), 0..60),
        show_timer in any::<bool>(),
    ) {
        let (summary, handle) = run_script(scripts, show_timer);

        prop_assert!(handle.is_stopped());
        prop_assert!(!summary.completed);
        prop_assert!(summary.revealed <= 7);

        let frames = handle.frames();
        prop_assert!(!frames.is_empty());
        prop_assert!(frames.iter().all(|f| f.phase == Phase::Playing));
        prop_assert!(frames.windows(2).all(|w| w[0].at <= w[1].at), "virtual time went back");
        prop_assert!(frames.iter().all(|f| (2..=10).contains(&f.columns)));
        prop_assert_eq!(frames.last().map(|f| f.revealed), Some(summary.revealed));
    }

    #[test]
    fn prop_deadlines_never_in_the_past(
        scripts in prop::collection::vec(step_strategy(), 0..40),
    ) {
        let (_, handle) = run_script(scripts, true);

        for poll in handle.polls() {
            if let Some(deadline) = poll.deadline {
                prop_assert!(deadline >= poll.at, "{:?}", poll);
            }
        }
    }
}
