//! Column-major grid layout.
//!
//! The grid fills each column top to bottom before moving right. Cells are a
//! fixed [`ENTRY_WIDTH`] wide and separated by [`COLUMN_SPACING`] spaces.
//! Layout is a pure function of the roster, the revealed set and the column
//! count, so rendering the same state twice yields the same text.

use crate::{EntryId, RevealedSet, Roster};

/// Width every cell is padded to.
pub const ENTRY_WIDTH: usize = 20;

/// Spaces between adjacent columns.
pub const COLUMN_SPACING: usize = 4;

/// Fewest columns the grid is laid out with.
pub const MIN_COLUMNS: usize = 2;

/// Most columns the grid is laid out with.
pub const MAX_COLUMNS: usize = 10;

/// Terminal width assumed when the real width is unknown.
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Column count that fits a terminal `width` characters wide.
///
/// The last column needs no trailing spacing, hence the `+ COLUMN_SPACING`.
pub fn columns_for_width(width: u16) -> usize {
    let fitting = (usize::from(width) + COLUMN_SPACING) / (ENTRY_WIDTH + COLUMN_SPACING);
    clamp_columns(fitting)
}

/// Row count of a grid holding `len` entries in `columns` columns.
pub fn rows_for(len: usize, columns: usize) -> usize {
    len.div_ceil(columns.max(1))
}

/// Clamp a requested column count to the supported range.
pub fn clamp_columns(columns: usize) -> usize {
    columns.clamp(MIN_COLUMNS, MAX_COLUMNS)
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    /// Entry id, always shown.
    pub id: EntryId,
    /// Display name, `None` while hidden.
    pub name: Option<&'a str>,
}

impl Cell<'_> {
    /// Whether the entry has been guessed.
    pub fn is_revealed(&self) -> bool {
        self.name.is_some()
    }

    /// `"<id>: <name>"` when revealed, `"<id>:"` otherwise. Unpadded.
    pub fn label(&self) -> String {
        match self.name {
            Some(name) => format!("{}: {name}", self.id),
            None => format!("{}:", self.id),
        }
    }

    /// Label padded to [`ENTRY_WIDTH`].
    pub fn text(&self) -> String {
        format!("{:<ENTRY_WIDTH$}", self.label())
    }
}

/// Roster laid out in rows and columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<'a> {
    cells: Vec<Cell<'a>>,
    columns: usize,
    rows: usize,
}

impl<'a> Grid<'a> {
    /// Lay out `roster` with `columns` columns (at least one).
    pub fn layout(roster: &'a Roster, revealed: &RevealedSet, columns: usize) -> Self {
        let columns = columns.max(1);
        let cells: Vec<Cell<'a>> = roster
            .entries()
            .iter()
            .map(|entry| Cell {
                id: entry.id,
                name: revealed.contains(entry.id).then_some(entry.name.as_str()),
            })
            .collect();
        let rows = rows_for(cells.len(), columns);

        Self { cells, columns, rows }
    }

    /// Column count.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cell at `(row, column)`. `None` past the end of the roster.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell<'a>> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(column * self.rows + row)
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell<'a>> {
        (0..self.columns).filter_map(move |column| self.cell(row, column))
    }

    /// Plain-text rows with trailing padding trimmed.
    pub fn lines(&self) -> Vec<String> {
        let spacer = " ".repeat(COLUMN_SPACING);
        (0..self.rows)
            .map(|row| {
                let cells: Vec<String> = self.row(row).map(Cell::text).collect();
                cells.join(&spacer).trim_end().to_string()
            })
            .collect()
    }
}
