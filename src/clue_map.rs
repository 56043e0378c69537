//! Two-tier clue lookup.
//!
//! Every clue is stored twice:
//! - under its exact `(cell number, direction, word)` key, and
//! - under the word alone (last write wins across the whole word list).
//!
//! Lookups try the exact key first and fall back to the word. When a grid edit
//! renumbers a word, its clue is still found through the word-only tier; when
//! the same word needs different clues in different places, the exact key wins
//! where it applies.

use crate::direction::Direction;
use crate::numbering::{Cell, NumberedCells};
use log::debug;
use std::collections::HashMap;

/// Exact key of a clue in a word list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClueKey {
    pub number: usize,
    pub direction: Direction,
    pub word: String,
}

impl ClueKey {
    pub fn new(number: usize, direction: Direction, word: impl Into<String>) -> ClueKey {
        ClueKey { number, direction, word: word.into() }
    }
}

/// Clues parsed from one pass over a word list.
///
/// A map is built fresh for each resolution; it carries nothing between runs.
#[derive(Debug, Clone, Default)]
pub struct ClueMap {
    by_key: HashMap<ClueKey, String>,
    by_word: HashMap<String, String>,
}

impl ClueMap {
    #[must_use]
    pub fn new() -> ClueMap {
        ClueMap::default()
    }

    /// Record a clue under both tiers. A later clue for the same key (or word) replaces the earlier one.
    pub fn add(&mut self, number: usize, direction: Direction, word: &str, clue: &str) {
        self.by_key.insert(ClueKey::new(number, direction, word), clue.to_string());
        self.by_word.insert(word.to_string(), clue.to_string());
    }

    /// Find the clue for a word: exact key first, then the word alone.
    #[must_use]
    pub fn lookup(&self, number: usize, direction: Direction, word: &str) -> Option<&str> {
        self.by_key
            .get(&ClueKey::new(number, direction, word))
            .or_else(|| self.by_word.get(word))
            .map(String::as_str)
    }

    /// Number of distinct exact keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Fill in the clues of one cell.
    ///
    /// A clue that is not found leaves the existing value alone; resolution never
    /// clears a clue.
    #[must_use]
    pub fn resolve_cell(&self, mut cell: Cell) -> Cell {
        for direction in Direction::ALL {
            let found = cell
                .word(direction)
                .and_then(|word| self.lookup(cell.number, direction, word))
                .map(str::to_string);
            if let Some(clue) = found {
                *cell.clue_mut(direction) = Some(clue);
            }
        }
        cell
    }

    /// Fill in the clues of every cell, keeping the cell order.
    #[must_use]
    pub fn resolve(&self, cells: NumberedCells) -> NumberedCells {
        let resolved = cells.map_cells(|cell| self.resolve_cell(cell));
        let missing: usize = resolved
            .iter()
            .map(|cell| {
                Direction::ALL
                    .into_iter()
                    .filter(|&d| cell.word(d).is_some() && cell.clue(d).is_none())
                    .count()
            })
            .sum();
        debug!("resolved clues for {} cells ({missing} words without a clue)", resolved.len());
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::numbering::number_cells;

    #[test]
    fn test_add_populates_both_tiers() {
        let mut clues = ClueMap::new();
        clues.add(1, Direction::Across, "CAT", "Feline pet");
        assert_eq!(clues.lookup(1, Direction::Across, "CAT"), Some("Feline pet"));
        // word-only tier
        assert_eq!(clues.lookup(5, Direction::Down, "CAT"), Some("Feline pet"));
    }

    #[test]
    fn test_exact_key_takes_precedence() {
        let mut clues = ClueMap::new();
        clues.add(1, Direction::Across, "CAT", "Feline pet");
        clues.add(7, Direction::Down, "CAT", "Heavy machine");

        assert_eq!(clues.lookup(1, Direction::Across, "CAT"), Some("Feline pet"));
        assert_eq!(clues.lookup(7, Direction::Down, "CAT"), Some("Heavy machine"));
        // an unlisted occurrence gets whichever was added last
        assert_eq!(clues.lookup(9, Direction::Across, "CAT"), Some("Heavy machine"));
    }

    #[test]
    fn test_direction_is_part_of_the_key() {
        let mut clues = ClueMap::new();
        clues.add(1, Direction::Across, "CAT", "Feline pet");
        clues.add(1, Direction::Down, "CAT", "Heavy machine");
        assert_eq!(clues.lookup(1, Direction::Across, "CAT"), Some("Feline pet"));
        assert_eq!(clues.lookup(1, Direction::Down, "CAT"), Some("Heavy machine"));
    }

    #[test]
    fn test_later_entry_overwrites() {
        let mut clues = ClueMap::new();
        clues.add(1, Direction::Across, "CAT", "first");
        clues.add(1, Direction::Across, "CAT", "second");
        assert_eq!(clues.len(), 1);
        assert_eq!(clues.lookup(1, Direction::Across, "CAT"), Some("second"));
    }

    #[test]
    fn test_missing_word() {
        let mut clues = ClueMap::new();
        assert_eq!(clues.lookup(1, Direction::Across, "CAT"), None);
        clues.add(1, Direction::Across, "CAT", "Feline pet");
        assert_eq!(clues.lookup(1, Direction::Across, "DOG"), None);
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let mut clues = ClueMap::new();
        clues.add(3, Direction::Down, "OWL", "Night bird");
        let first = clues.lookup(3, Direction::Down, "OWL").map(str::to_string);
        let second = clues.lookup(3, Direction::Down, "OWL").map(str::to_string);
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_fills_both_directions() {
        let cells = number_cells(&Grid::from_rows(["AB", "CD"]));
        let mut clues = ClueMap::new();
        clues.add(1, Direction::Across, "AB", "first across");
        clues.add(1, Direction::Down, "AC", "first down");
        clues.add(2, Direction::Down, "BD", "second down");

        let resolved = clues.resolve(cells);
        let first = resolved.get(1).unwrap();
        assert_eq!(first.across_clue.as_deref(), Some("first across"));
        assert_eq!(first.down_clue.as_deref(), Some("first down"));
        assert_eq!(resolved.get(2).unwrap().down_clue.as_deref(), Some("second down"));
        assert_eq!(resolved.get(3).unwrap().across_clue, None);
    }

    #[test]
    fn test_resolve_keeps_existing_clue_when_not_found() {
        let cells = number_cells(&Grid::from_rows(["AB"]));
        let mut clues = ClueMap::new();
        clues.add(1, Direction::Across, "AB", "kept");
        let resolved = clues.resolve(cells);

        let resolved_again = ClueMap::new().resolve(resolved.clone());
        assert_eq!(resolved_again, resolved);
        assert_eq!(resolved_again.get(1).unwrap().across_clue.as_deref(), Some("kept"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let cells = number_cells(&Grid::from_rows(["AB", "CD"]));
        let mut clues = ClueMap::new();
        clues.add(1, Direction::Across, "AB", "x");
        clues.add(3, Direction::Across, "CD", "y");

        let once = clues.resolve(cells);
        let twice = clues.resolve(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_resolve_after_renumbering_uses_word_fallback() {
        let mut clues = ClueMap::new();
        clues.add(1, Direction::Across, "CD", "moved word");

        // "CD" is now numbered 3
        let resolved = clues.resolve(number_cells(&Grid::from_rows(["AB", "CD"])));
        assert_eq!(resolved.get(3).unwrap().across_clue.as_deref(), Some("moved word"));
        assert_eq!(resolved.get(1).unwrap().across_clue, None);
    }
}
