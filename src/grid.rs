//! The grid model: a rectangular layout of letters and blanks.
//!
//! A grid is an ordered list of rows, top to bottom. Its width is the length of
//! the longest row; shorter rows behave as if padded with blanks on the right.
//!
//! [`Grid::cell_at`] is the only place that decides whether a position is filled.
//! Word scans, numbering and rendering all go through it, so out-of-bounds and
//! short-row positions are blank everywhere.

use crate::direction::Direction;
use crate::document::content_lines;
use crate::grid_char::GridChar;

/// Words shorter than this are not numbered and get no clue.
pub const MIN_WORD_LEN: usize = 2;

/// An immutable character grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    col_count: usize,
}

impl Grid {
    /// Build a grid from raw rows, used verbatim.
    pub fn from_rows<I, S>(rows: I) -> Grid
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();
        let col_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        Grid { rows, col_count }
    }

    /// Parse a grid document: comment lines, blank lines and trailing
    /// whitespace are stripped before the remaining lines become rows.
    #[must_use]
    pub fn parse(contents: &str) -> Grid {
        Self::from_rows(content_lines(contents))
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The letter at `(x, y)`, or `None` if the position is blank.
    ///
    /// Positions past the end of a short row are blank even when `x < col_count()`.
    #[must_use]
    pub fn cell_at(&self, x: usize, y: usize) -> Option<char> {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .filter(|c| c.is_filled())
    }

    /// The word starting at `(x, y)` in `direction`, if any.
    ///
    /// A word starts where the previous position in that direction is blank or
    /// off-grid; it runs until the next blank. Runs shorter than
    /// [`MIN_WORD_LEN`] are not words.
    #[must_use]
    pub fn word_at(&self, x: usize, y: usize, direction: Direction) -> Option<String> {
        let continues_previous = direction
            .predecessor(x, y)
            .is_some_and(|(px, py)| self.cell_at(px, py).is_some());
        if continues_previous {
            return None;
        }

        let mut word = String::new();
        let (mut cx, mut cy) = (x, y);
        while cx < self.col_count && cy < self.row_count() {
            let Some(letter) = self.cell_at(cx, cy) else { break };
            word.push(letter);
            (cx, cy) = direction.successor(cx, cy);
        }

        (word.len() >= MIN_WORD_LEN).then_some(word)
    }

    #[must_use]
    pub fn across_word_at(&self, x: usize, y: usize) -> Option<String> {
        self.word_at(x, y, Direction::Across)
    }

    #[must_use]
    pub fn down_word_at(&self, x: usize, y: usize) -> Option<String> {
        self.word_at(x, y, Direction::Down)
    }

    /// All positions in scan order: row by row, left to right within a row.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let col_count = self.col_count;
        (0..self.row_count()).flat_map(move |y| (0..col_count).map(move |x| (x, y)))
    }
}
