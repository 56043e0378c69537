//! The full pipeline, from documents in to documents out.
//!
//! # Examples
//!
//! ```
//! use crossgrid::puzzle::Puzzle;
//!
//! let grid = "# a tiny puzzle\nCAT\nA O\nBOW\n";
//! let words = "ACROSS\n 1. CAT: Feline pet\nDOWN\n 1. CAB: Taxi\n";
//!
//! let puzzle = Puzzle::from_documents(grid, Some(words));
//! assert_eq!(puzzle.cells().len(), 3);
//! assert_eq!(puzzle.cells().get(1).unwrap().across_clue.as_deref(), Some("Feline pet"));
//!
//! let html = puzzle.puzzle_html("Tiny");
//! assert!(html.contains("Feline pet"));
//! ```

use crate::clue_map::ClueMap;
use crate::grid::Grid;
use crate::numbering::{number_cells, NumberedCells};
use crate::render::{render_html, RenderMode};
use crate::word_list::{parse_word_list, word_list_template};
use instant::Instant;
use log::debug;

/// A numbered grid together with its resolved clues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    cells: NumberedCells,
}

impl Puzzle {
    /// Number `grid`; no clues are resolved yet.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Puzzle {
        let cells = number_cells(&grid);
        Puzzle { grid, cells }
    }

    /// Parse a grid document and, if given, resolve clues from a word-list document.
    #[must_use]
    pub fn from_documents(grid_document: &str, word_list_document: Option<&str>) -> Puzzle {
        let t_start = Instant::now();
        let puzzle = Self::from_grid(Grid::parse(grid_document));
        let puzzle = match word_list_document {
            Some(document) => puzzle.with_clues(&parse_word_list(document)),
            None => puzzle,
        };
        debug!(
            "analyzed {}x{} grid in {:.3}s",
            puzzle.grid.col_count(),
            puzzle.grid.row_count(),
            t_start.elapsed().as_secs_f64()
        );
        puzzle
    }

    /// Resolve clues from `clues` into the cells.
    #[must_use]
    pub fn with_clues(self, clues: &ClueMap) -> Puzzle {
        let Puzzle { grid, cells } = self;
        Puzzle { grid, cells: clues.resolve(cells) }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn cells(&self) -> &NumberedCells {
        &self.cells
    }

    /// A word list listing every word, with resolved clues or placeholders.
    #[must_use]
    pub fn word_list(&self) -> String {
        word_list_template(&self.cells)
    }

    /// The blank grid with its clue lists.
    #[must_use]
    pub fn puzzle_html(&self, title: &str) -> String {
        render_html(&self.grid, &self.cells, RenderMode::Puzzle, title)
    }

    /// The filled grid.
    #[must_use]
    pub fn answer_key_html(&self, title: &str) -> String {
        render_html(&self.grid, &self.cells, RenderMode::AnswerKey, title)
    }
}
