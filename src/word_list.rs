//! `word_list` — reading and writing the clue document that goes with a grid.
//!
//! The format is line oriented:
//!
//! ```text
//! # comments start with '#'
//! ACROSS
//!   1. CAT: Feline pet
//!   4. OWL: Night bird
//! DOWN
//!   1. CAB: Taxi
//! ```
//!
//! - Comment lines and blank lines are dropped (see [`crate::document`]).
//! - A line reading exactly `ACROSS` or `DOWN` switches the current direction.
//! - A clue line is: optional spaces, a cell number, `". "`, the word in
//!   uppercase A–Z, `": "`, then the clue text to the end of the line.
//! - Anything else is skipped without failing the parse.
//!
//! [`word_list_template`] writes the same format back out, listing every word of
//! a grid with its resolved clue or [`CLUE_PLACEHOLDER`].

use crate::clue_map::ClueMap;
use crate::direction::Direction;
use crate::document::content_lines;
use crate::errors::ParseError;
use crate::numbering::NumberedCells;
use log::debug;
use nom::{
    bytes::complete::{tag, take_while, take_while1},
    character::complete::digit1,
    combinator::{map_res, rest},
    IResult,
    Parser,
};
use std::fmt::Write;

/// Parser result type: input, output, with our custom `ParseError`
pub type PResult<'a, O> = IResult<&'a str, O, Box<ParseError>>;

/// Clue text written for words that have no clue yet. Reading it back means "no clue".
pub const CLUE_PLACEHOLDER: &str = "???";

/// One parsed clue line, borrowing from the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClueLine<'a> {
    pub number: usize,
    pub word: &'a str,
    pub clue: &'a str,
}

fn clue_line(input: &str) -> PResult<'_, ClueLine<'_>> {
    let (remaining, (_, number, _, word, _, clue)) = (
        take_while(|c: char| c == ' '),
        map_res(digit1, str::parse::<usize>),
        tag(". "),
        take_while1(|c: char| c.is_ascii_uppercase()),
        tag(": "),
        rest,
    )
        .parse(input)?;

    Ok((remaining, ClueLine { number, word, clue }))
}

/// Parse a single clue line such as `" 12. OWL: Night bird"`.
///
/// # Errors
///
/// Returns `InvalidCellNumber` when the number overflows, and `NotAClueLine`
/// for anything else that does not have the clue-line shape.
pub fn parse_clue_line(line: &str) -> Result<ClueLine<'_>, Box<ParseError>> {
    match clue_line(line) {
        Ok((_, parsed)) => Ok(parsed),
        Err(nom::Err::Error(e) | nom::Err::Failure(e))
            if matches!(*e, ParseError::InvalidCellNumber(_)) => Err(e),
        Err(_) => Err(Box::new(ParseError::NotAClueLine { line: line.to_string() })),
    }
}

/// Build a fresh [`ClueMap`] from the contents of a word list.
///
/// Never fails: unrecognized lines, clue lines outside a section and
/// placeholder clues are skipped (and logged at debug level).
#[must_use]
pub fn parse_word_list(contents: &str) -> ClueMap {
    let mut clues = ClueMap::new();
    let mut direction = None;

    for line in content_lines(contents) {
        if let Some(marker) = Direction::from_marker(line) {
            direction = Some(marker);
            continue;
        }

        let parsed = match parse_clue_line(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("skipping word-list line: {}", e.display_detailed());
                continue;
            }
        };

        let Some(current) = direction else {
            let e = ParseError::ClueOutsideSection { line: line.to_string() };
            debug!("skipping word-list line: {}", e.display_detailed());
            continue;
        };

        if parsed.clue == CLUE_PLACEHOLDER {
            continue;
        }

        clues.add(parsed.number, current, parsed.word, parsed.clue);
    }

    debug!("parsed {} clues from word list", clues.len());
    clues
}

/// Write a word list for `cells`: every word once per direction, in number order,
/// with its resolved clue or [`CLUE_PLACEHOLDER`].
#[must_use]
pub fn word_list_template(cells: &NumberedCells) -> String {
    let mut out = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(out, "# Clues, one per line: \"<number>. <WORD>: <clue>\"");
    let _ = writeln!(out, "# Replace {CLUE_PLACEHOLDER} with your clue. Lines starting with # are ignored.");

    for direction in Direction::ALL {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", direction.marker());
        for (cell, word) in cells.words(direction) {
            let clue = cell.clue(direction).unwrap_or(CLUE_PLACEHOLDER);
            let _ = writeln!(out, "{:>3}. {word}: {clue}", cell.number);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::numbering::number_cells;

    #[test]
    fn test_parse_clue_line() {
        let line = parse_clue_line(" 1. CAT: Feline pet").unwrap();
        assert_eq!(line, ClueLine { number: 1, word: "CAT", clue: "Feline pet" });
    }

    #[test]
    fn test_parse_clue_line_without_leading_spaces() {
        let line = parse_clue_line("12. OWL: Night bird").unwrap();
        assert_eq!(line.number, 12);
        assert_eq!(line.word, "OWL");
    }

    #[test]
    fn test_clue_text_is_taken_verbatim() {
        let line = parse_clue_line("3. AB:   spaced: with colon. ").unwrap();
        assert_eq!(line.clue, "  spaced: with colon. ");
    }

    #[test]
    fn test_lowercase_word_is_not_a_clue_line() {
        let err = parse_clue_line("1. cat: x").unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_malformed_lines() {
        for line in [
            "CAT: no number",
            "1 CAT: missing period",
            "1.CAT: missing space",
            "1. CAT:missing space",
            "1. CAT",
            "1. CAT:",
            "1. : no word",
            "\t1. CAT: tab indent",
            "-1. CAT: negative",
            "1. CaT: mixed case",
        ] {
            assert!(parse_clue_line(line).is_err(), "{line:?} should not parse");
        }
    }

    #[test]
    fn test_overflowing_number() {
        let err = parse_clue_line("99999999999999999999999. AB: x").unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn test_parse_word_list_sections() {
        let clues = parse_word_list("ACROSS\n 1. CAT: Feline pet\nDOWN\n 1. CAB: Taxi\n");
        assert_eq!(clues.lookup(1, Direction::Across, "CAT"), Some("Feline pet"));
        assert_eq!(clues.lookup(1, Direction::Down, "CAB"), Some("Taxi"));
        assert_eq!(clues.len(), 2);
    }

    #[test]
    fn test_word_only_key_from_parse() {
        let clues = parse_word_list("ACROSS\n 1. CAT: Feline pet\n");
        assert_eq!(clues.lookup(4, Direction::Down, "CAT"), Some("Feline pet"));
    }

    #[test]
    fn test_same_word_in_two_sections() {
        let clues = parse_word_list("ACROSS\n1. CAT: Feline pet\nDOWN\n7. CAT: Heavy machine\n");
        assert_eq!(clues.lookup(1, Direction::Across, "CAT"), Some("Feline pet"));
        assert_eq!(clues.lookup(7, Direction::Down, "CAT"), Some("Heavy machine"));
        assert_eq!(clues.lookup(9, Direction::Across, "CAT"), Some("Heavy machine"));
    }

    #[test]
    fn test_ignores_comments_junk_and_lowercase() {
        let input = "# comment\nACROSS\n  # another\n1. cat: x\nrandom text\n\n2. DOG: Barker\n";
        let clues = parse_word_list(input);
        assert_eq!(clues.len(), 1);
        assert_eq!(clues.lookup(2, Direction::Across, "DOG"), Some("Barker"));
        assert_eq!(clues.lookup(1, Direction::Across, "CAT"), None);
    }

    #[test]
    fn test_markers_are_exact() {
        let clues = parse_word_list("Across\n1. CAT: x\n ACROSS\n2. DOG: y\n");
        assert!(clues.is_empty());
    }

    #[test]
    fn test_clue_before_marker_is_skipped() {
        let clues = parse_word_list("1. CAT: x\nDOWN\n2. DOG: y\n");
        assert_eq!(clues.len(), 1);
        assert_eq!(clues.lookup(1, Direction::Across, "CAT"), None);
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        let clues = parse_word_list("ACROSS   \n1. CAT: Feline pet   \n");
        assert_eq!(clues.lookup(1, Direction::Across, "CAT"), Some("Feline pet"));
    }

    #[test]
    fn test_placeholder_is_not_a_clue() {
        let clues = parse_word_list(&format!("ACROSS\n1. CAT: {CLUE_PLACEHOLDER}\n"));
        assert!(clues.is_empty());
    }

    #[test]
    fn test_later_line_overwrites() {
        let clues = parse_word_list("ACROSS\n1. CAT: first\n1. CAT: second\n");
        assert_eq!(clues.lookup(1, Direction::Across, "CAT"), Some("second"));
    }

    #[test]
    fn test_template_lists_every_word_once() {
        let cells = number_cells(&Grid::from_rows(["AB", "CD"]));
        let template = word_list_template(&cells);
        let lines: Vec<&str> = content_lines(&template).collect();
        assert_eq!(
            lines,
            vec![
                "ACROSS",
                "  1. AB: ???",
                "  3. CD: ???",
                "DOWN",
                "  1. AC: ???",
                "  2. BD: ???",
            ]
        );
    }

    #[test]
    fn test_template_round_trip_without_clues() {
        let cells = number_cells(&Grid::from_rows(["CAT", "A O", "BOW"]));
        let clues = parse_word_list(&word_list_template(&cells));
        assert!(clues.is_empty());
        for cell in &clues.resolve(cells) {
            assert_eq!(cell.across_clue, None);
            assert_eq!(cell.down_clue, None);
        }
    }

    #[test]
    fn test_template_keeps_resolved_clues() {
        let cells = number_cells(&Grid::from_rows(["AB", "CD"]));
        let clues = parse_word_list("ACROSS\n1. AB: first\nDOWN\n2. BD: second\n");
        let resolved = clues.resolve(cells);

        let template = word_list_template(&resolved);
        assert!(template.contains("  1. AB: first\n"));
        assert!(template.contains("  2. BD: second\n"));
        assert!(template.contains("  3. CD: ???\n"));

        // feeding the template back resolves to the same clues
        let reparsed = parse_word_list(&template);
        let again = reparsed.resolve(number_cells(&Grid::from_rows(["AB", "CD"])));
        assert_eq!(again, resolved);
    }
}
