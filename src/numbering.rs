//! Cell numbering and word extraction.
//!
//! One row-major pass over the grid (top to bottom, left to right) finds every
//! position that starts an across word, a down word, or both. Each such
//! position becomes a [`Cell`] with the next number, starting at 1. Positions
//! that start nothing consume no number.
//!
//! The result is a [`NumberedCells`]: an ordered sequence whose order is both
//! scan order and number order. Renderers rely on that to place numbers in the
//! grid with a single synchronized walk, so the sequence is never reordered.

use crate::direction::Direction;
use crate::grid::Grid;
use log::debug;

/// A numbered grid position that starts at least one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Zero-based column.
    pub x: usize,
    /// Zero-based row.
    pub y: usize,
    pub number: usize,
    pub across_word: Option<String>,
    pub down_word: Option<String>,
    pub across_clue: Option<String>,
    pub down_clue: Option<String>,
}

impl Cell {
    /// The word starting here in `direction`, if any.
    #[must_use]
    pub fn word(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Across => self.across_word.as_deref(),
            Direction::Down => self.down_word.as_deref(),
        }
    }

    /// The resolved clue for the word starting here in `direction`, if any.
    #[must_use]
    pub fn clue(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Across => self.across_clue.as_deref(),
            Direction::Down => self.down_clue.as_deref(),
        }
    }

    pub(crate) fn clue_mut(&mut self, direction: Direction) -> &mut Option<String> {
        match direction {
            Direction::Across => &mut self.across_clue,
            Direction::Down => &mut self.down_clue,
        }
    }
}

/// The numbered cells of a grid, in scan order (equivalently, number order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberedCells {
    cells: Vec<Cell>,
}

impl NumberedCells {
    /// Return an iterator over the cells in number order
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell carrying `number`, if any.
    #[must_use]
    pub fn get(&self, number: usize) -> Option<&Cell> {
        // numbers are dense from 1, so the index is implied
        number.checked_sub(1).and_then(|i| self.cells.get(i))
    }

    /// `(cell, word)` for every word running in `direction`, in number order.
    pub fn words(&self, direction: Direction) -> impl Iterator<Item = (&Cell, &str)> {
        self.cells
            .iter()
            .filter_map(move |cell| cell.word(direction).map(|word| (cell, word)))
    }

    /// Apply `f` to every cell, keeping the order.
    pub(crate) fn map_cells(self, f: impl FnMut(Cell) -> Cell) -> NumberedCells {
        NumberedCells { cells: self.cells.into_iter().map(f).collect() }
    }
}

// Enable `for cell in &numbered_cells { ... }`
impl<'a> IntoIterator for &'a NumberedCells {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter { self.cells.iter() }
}

impl IntoIterator for NumberedCells {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;
    fn into_iter(self) -> Self::IntoIter { self.cells.into_iter() }
}

/// Number the grid and extract the words starting at each numbered cell.
///
/// Clue fields are left unset; see [`crate::clue_map::ClueMap::resolve`].
#[must_use]
pub fn number_cells(grid: &Grid) -> NumberedCells {
    let mut cells = Vec::new();

    for (x, y) in grid.positions() {
        let across_word = grid.across_word_at(x, y);
        let down_word = grid.down_word_at(x, y);
        if across_word.is_none() && down_word.is_none() {
            continue;
        }

        cells.push(Cell {
            x,
            y,
            number: cells.len() + 1,
            across_word,
            down_word,
            across_clue: None,
            down_clue: None,
        });
    }

    debug!(
        "numbered {} cells in a {}x{} grid",
        cells.len(),
        grid.col_count(),
        grid.row_count()
    );

    NumberedCells { cells }
}
