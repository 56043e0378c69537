use std::fmt;

/// The two directions a crossword entry can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    /// The section marker that introduces clues for this direction in a word list.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Direction::Across => "ACROSS",
            Direction::Down => "DOWN",
        }
    }

    /// Recognize a section marker line. The match is exact and case-sensitive.
    #[must_use]
    pub fn from_marker(line: &str) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.marker() == line)
    }

    /// Heading used for the clue lists of a rendered puzzle.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Direction::Across => "Across",
            Direction::Down => "Down",
        }
    }

    /// The position before `(x, y)` in this direction, or `None` when that is off-grid.
    #[inline]
    pub(crate) fn predecessor(self, x: usize, y: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Across => x.checked_sub(1).map(|px| (px, y)),
            Direction::Down => y.checked_sub(1).map(|py| (x, py)),
        }
    }

    /// The position after `(x, y)` in this direction.
    #[inline]
    pub(crate) fn successor(self, x: usize, y: usize) -> (usize, usize) {
        match self {
            Direction::Across => (x + 1, y),
            Direction::Down => (x, y + 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}
