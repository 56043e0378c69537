//! Error types for word-list parsing, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E004) for documentation lookup:
//!
//! - E001: `NotAClueLine` (Line does not have the `N. WORD: clue` shape)
//! - E002: `InvalidCellNumber` (Cell number is not a valid integer)
//! - E003: `ClueOutsideSection` (Clue line before any `ACROSS`/`DOWN` marker)
//! - E004: `NomError` (Low-level nom parser error)
//!
//! None of these are fatal: the word-list reader skips the offending line and
//! logs the error at debug level, so a half-edited word list never blocks a build.
//!
//! # Examples
//!
//! ```
//! use crossgrid::word_list::parse_clue_line;
//!
//! match parse_clue_line("1. cat: lowercase words are not clue lines") {
//!     Ok(line) => println!("clue for {}", line.word),
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//! }
//! ```

use nom::error::{ErrorKind, FromExternalError, ParseError as NomParseError};
use std::num::ParseIntError;

/// Custom error type for word-list parsing
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Not a clue line: \"{line}\"")]
    NotAClueLine { line: String },

    #[error("Invalid cell number: {0}")]
    InvalidCellNumber(#[source] ParseIntError),

    #[error("Clue line \"{line}\" appears before any ACROSS or DOWN marker")]
    ClueOutsideSection { line: String },

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl<'a> NomParseError<&'a str> for Box<ParseError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(ParseError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> FromExternalError<&'a str, ParseIntError> for Box<ParseError> {
    fn from_external_error(_input: &'a str, _kind: ErrorKind, e: ParseIntError) -> Self {
        Box::new(ParseError::InvalidCellNumber(e))
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::NotAClueLine { .. } => "E001",
            ParseError::InvalidCellNumber(_) => "E002",
            ParseError::ClueOutsideSection { .. } => "E003",
            ParseError::NomError(_) => "E004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::NotAClueLine { .. } => "Line is neither a section marker nor a clue line",
            ParseError::InvalidCellNumber(_) => "Cell number could not be read",
            ParseError::ClueOutsideSection { .. } => "Clue line has no direction",
            ParseError::NomError(_) => "Low-level parser error",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::NotAClueLine { .. } => "Clue lines look like ` 12. WORD: clue text`: optional leading spaces, a cell number, a period and a space, the word in uppercase A-Z, a colon and a space, then the clue. The line is skipped.",
            ParseError::InvalidCellNumber(_) => "The digits before the period do not fit in a cell number. The line is skipped.",
            ParseError::ClueOutsideSection { .. } => "Clue lines are attributed to the most recent `ACROSS` or `DOWN` marker line. Lines before the first marker are skipped.",
            ParseError::NomError(_) => "The clue-line grammar failed at a specific token. The line is skipped.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::NotAClueLine { .. } => Some("Example: ' 1. CAT: Feline pet' (the word must be uppercase)"),
            ParseError::InvalidCellNumber(_) => Some("Use the cell number shown in the generated word list"),
            ParseError::ClueOutsideSection { .. } => Some("Put a line reading exactly 'ACROSS' or 'DOWN' above your clues"),
            ParseError::NomError(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
