//! The fixed roster of guessable entries.
//!
//! A [`Roster`] is built once at startup and never changes. It keeps entries
//! in display order and indexes every normalized name and alias so a guess
//! resolves in a single lookup.

use std::collections::{HashMap, hash_map};

use crate::{
    RosterError,
    data::{KANTO_ALIASES, KANTO_NAMES},
    matcher::normalize,
};

/// Stable entry identifier (the Pokédex number for the built-in roster).
pub type EntryId = u16;

/// A single guessable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Stable identifier, unique within a roster.
    pub id: EntryId,
    /// Display name. Also accepted as a guess, case-insensitively.
    pub name: String,
    /// Extra spellings accepted as a guess.
    pub aliases: Vec<String>,
}

impl Entry {
    /// Create an entry without aliases.
    pub fn new(id: EntryId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), aliases: Vec::new() }
    }

    /// Attach alternative spellings.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }
}

/// Ordered, immutable list of entries with a normalized-name index.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<Entry>,
    by_id: HashMap<EntryId, usize>,
    by_name: HashMap<String, usize>,
}

impl Roster {
    /// Build a roster from entries, validating ids and names.
    ///
    /// Entries keep the order given here; that order is the display order.
    pub fn new(entries: Vec<Entry>) -> Result<Self, RosterError> {
        if entries.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut by_id = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            if entry.id == 0 {
                return Err(RosterError::ZeroId { name: entry.name.clone() });
            }
            if by_id.insert(entry.id, index).is_some() {
                return Err(RosterError::DuplicateId(entry.id));
            }

            for spelling in std::iter::once(&entry.name).chain(&entry.aliases) {
                let key = normalize(spelling).ok_or(RosterError::EmptyName(entry.id))?;
                match by_name.entry(key) {
                    hash_map::Entry::Occupied(slot) if *slot.get() != index => {
                        return Err(RosterError::DuplicateName {
                            name: slot.key().clone(),
                            id: entry.id,
                        });
                    },
                    hash_map::Entry::Occupied(_) => {},
                    hash_map::Entry::Vacant(slot) => {
                        slot.insert(index);
                    },
                }
            }
        }

        Ok(Self { entries, by_id, by_name })
    }

    /// The built-in 151-entry Kanto roster.
    pub fn kanto() -> Self {
        Self::indexed(kanto_entries())
    }

    /// Index entries without validation. Later duplicates lose to earlier ones.
    fn indexed(entries: Vec<Entry>) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            by_id.entry(entry.id).or_insert(index);
            for spelling in std::iter::once(&entry.name).chain(&entry.aliases) {
                if let Some(key) = normalize(spelling) {
                    by_name.entry(key).or_insert(index);
                }
            }
        }

        Self { entries, by_id, by_name }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a validated roster.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry with the given id.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.by_id.get(&id).and_then(|&index| self.entries.get(index))
    }

    /// Entry whose name or alias equals an already-normalized guess.
    pub fn lookup(&self, normalized: &str) -> Option<&Entry> {
        self.by_name.get(normalized).and_then(|&index| self.entries.get(index))
    }
}

/// Entries of the built-in roster, in Pokédex order.
pub(crate) fn kanto_entries() -> Vec<Entry> {
    KANTO_NAMES
        .iter()
        .zip(1..)
        .map(|(name, id)| {
            let aliases = KANTO_ALIASES
                .iter()
                .find(|(alias_id, _)| *alias_id == id)
                .map_or(&[][..], |(_, aliases)| *aliases);
            Entry::new(id, *name).with_aliases(aliases.iter().copied())
        })
        .collect()
}
