//! Property-based tests for guess judging and grid layout.
//!
//! Tests verify that reveal invariants hold under arbitrary guess sequences,
//! not just the hand-picked turns in the unit tests.

use dexquiz_core::{Grid, GuessError, GuessOutcome, RevealedSet, Roster, Session, grid};
use proptest::prelude::*;

/// A guess as the player might type it.
#[derive(Debug, Clone)]
enum Guess {
    /// Roster name at `index`, optionally shouted, with surrounding padding.
    Name { index: usize, upper: bool, pad: usize },
    /// Arbitrary text, usually not a roster name.
    Noise(String),
    /// Whitespace only.
    Blank(usize),
}

impl Guess {
    fn render(&self, roster: &Roster) -> String {
        match self {
            Self::Name { index, upper, pad } => {
                let name = roster.entries()[*index % roster.len()].name.clone();
                let name = if *upper { name.to_uppercase() } else { name };
                format!("{}{name}{}", " ".repeat(*pad), "\t".repeat(*pad))
            },
            Self::Noise(text) => text.clone(),
            Self::Blank(width) => " ".repeat(*width),
        }
    }
}

fn guess_strategy() -> impl Strategy<Value = Guess> {
    prop_oneof![
        4 => (0usize..151, any::<bool>(), 0usize..3)
            .prop_map(|(index, upper, pad)| Guess::Name { index, upper, pad }),
        2 => "[a-z0-9]{1,12}".prop_map(Guess::Noise),
        1 => (0usize..4).prop_map(Guess::Blank),
    ]
}

proptest! {
    #[test]
    fn prop_revealed_grows_by_one_only_on_correct(
        guesses in prop::collection::vec(guess_strategy(), 0..200)
    ) {
        let mut session = Session::new(Roster::kanto());

        for guess in guesses {
            let raw = guess.render(session.roster());
            let before = session.revealed().clone();

            match session.submit(&raw) {
                Ok(GuessOutcome::Correct(id)) => {
                    prop_assert!(!before.contains(id));
                    prop_assert!(session.revealed().contains(id));
                    prop_assert_eq!(session.revealed().len(), before.len() + 1);
                    prop_assert_eq!(session.revealed().last(), Some(id));
                },
                Ok(GuessOutcome::AlreadyGuessed(id)) => {
                    prop_assert!(before.contains(id));
                    prop_assert_eq!(session.revealed(), &before);
                },
                Ok(GuessOutcome::Incorrect) | Err(GuessError::Empty) => {
                    prop_assert_eq!(session.revealed(), &before);
                },
            }

            prop_assert!(session.revealed().len() <= session.roster().len());
            prop_assert!(session.revealed().iter().all(|id| session.roster().get(id).is_some()));
        }
    }

    #[test]
    fn prop_any_order_of_all_names_completes(
        order in Just((0usize..151).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let mut session = Session::new(Roster::kanto());

        for (turn, index) in order.iter().enumerate() {
            prop_assert!(!session.is_complete());
            let name = session.roster().entries()[*index].name.to_lowercase();
            let outcome = session.submit(&name);
            prop_assert!(matches!(outcome, Ok(GuessOutcome::Correct(_))));
            prop_assert_eq!(session.revealed().len(), turn + 1);
        }

        prop_assert!(session.is_complete());
    }

    #[test]
    fn prop_layout_is_idempotent(
        ids in prop::collection::hash_set(1u16..=151, 0..151),
        width in 0u16..400,
    ) {
        let roster = Roster::kanto();
        let mut revealed = RevealedSet::new();
        for id in ids {
            revealed.insert(id);
        }

        let columns = grid::columns_for_width(width);
        let first = Grid::layout(&roster, &revealed, columns).lines();
        let second = Grid::layout(&roster, &revealed, columns).lines();
        prop_assert_eq!(&first, &second);

        let max_line = columns * grid::ENTRY_WIDTH + (columns - 1) * grid::COLUMN_SPACING;
        prop_assert!(first.iter().all(|line| line.chars().count() <= max_line));
        prop_assert_eq!(first.len(), roster.len().div_ceil(columns));
    }
}

#[test]
fn example_from_the_rules() {
    let mut session = Session::new(Roster::kanto());

    assert_eq!(session.submit("bulbasaur"), Ok(GuessOutcome::Correct(1)));
    assert_eq!(session.submit("BULBASAUR"), Ok(GuessOutcome::AlreadyGuessed(1)));
    assert_eq!(session.submit("pikachu99"), Ok(GuessOutcome::Incorrect));
    assert_eq!(session.revealed().iter().collect::<Vec<_>>(), vec![1]);
}
