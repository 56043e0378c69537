//! `workspace` — the files around one puzzle, and the native-only I/O on them.
//!
//! Given a grid path such as `puzzles/sunday.grid`, the workspace is:
//! - the grid document itself,
//! - the word list, by default `puzzles/sunday.words`,
//! - the rendered puzzle `sunday.html` and answer key `sunday-key.html`,
//!   written to the output directory (by default, the grid's directory).
//!
//! Nothing in here is compiled for `wasm32`; the browser build feeds documents
//! straight into [`crate::puzzle::Puzzle`].
//!
//! # Error Handling
//!
//! - W001: `ReadFailure` (A document could not be read)
//! - W002: `WriteFailure` (A document could not be written)
//! - W003: `EditorLaunch` (The editor could not be started)
//! - W004: `EditorExit` (The editor exited unsuccessfully)
//! - W005: `OutputIsInput` (A generated file would replace an input document)

use crate::errors::format_error_with_code_and_help;
use crate::puzzle::Puzzle;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Word-list extension used when no explicit path is given.
pub const WORD_LIST_EXTENSION: &str = "words";
/// Suffix appended to the grid's stem for the answer-key file.
pub const ANSWER_KEY_SUFFIX: &str = "-key";
/// Editor used when neither `$VISUAL` nor `$EDITOR` is set.
pub const FALLBACK_EDITOR: &str = "vi";

/// Written when the grid file does not exist yet.
pub const STARTER_GRID: &str = "\
# Crossword grid: one row per line.
# Uppercase letters A-Z are filled squares; spaces are black squares.
# Lines starting with '#' are ignored, as are blank lines.
CAT
A O
BOW
";

/// Errors from reading, writing or editing workspace files.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("failed to read '{}': {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        #[source]
        source: io::Error,
    },

    #[error("editor '{editor}' exited with {status}")]
    EditorExit { editor: String, status: ExitStatus },

    #[error("refusing to overwrite '{}' with the generated {output}", path.display())]
    OutputIsInput { path: PathBuf, output: &'static str },
}

impl WorkspaceError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WorkspaceError::ReadFailure { .. } => "W001",
            WorkspaceError::WriteFailure { .. } => "W002",
            WorkspaceError::EditorLaunch { .. } => "W003",
            WorkspaceError::EditorExit { .. } => "W004",
            WorkspaceError::OutputIsInput { .. } => "W005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            WorkspaceError::ReadFailure { .. } => "A document could not be read",
            WorkspaceError::WriteFailure { .. } => "A document could not be written",
            WorkspaceError::EditorLaunch { .. } => "The editor could not be started",
            WorkspaceError::EditorExit { .. } => "The editor exited unsuccessfully",
            WorkspaceError::OutputIsInput { .. } => "A generated file would replace an input document",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            WorkspaceError::ReadFailure { .. } => "The grid or word-list file exists but could not be read, for example because of permissions or invalid UTF-8.",
            WorkspaceError::WriteFailure { .. } => "One of the generated files (starter grid, word list, puzzle or answer key) could not be written.",
            WorkspaceError::EditorLaunch { .. } => "The editor command was not found or could not be executed.",
            WorkspaceError::EditorExit { .. } => "The editor ran but reported failure, so the puzzle was not rebuilt.",
            WorkspaceError::OutputIsInput { .. } => "The word list, puzzle or answer key path names the grid file (or the HTML path names the word list). Nothing was written.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            WorkspaceError::ReadFailure { .. } => Some("Check that the file is readable UTF-8 text"),
            WorkspaceError::WriteFailure { .. } => Some("Check that the output directory exists and is writable"),
            WorkspaceError::EditorLaunch { .. } => Some("Set $EDITOR (or pass --editor) to an installed editor, e.g. 'nano' or 'code --wait'"),
            WorkspaceError::EditorExit { .. } => None,
            WorkspaceError::OutputIsInput { .. } => Some("Give the grid a distinct extension such as '.grid', or pass --word-list / --out-dir"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// The editor to launch: `$VISUAL`, then `$EDITOR`, then [`FALLBACK_EDITOR`].
#[must_use]
pub fn default_editor() -> String {
    ["VISUAL", "EDITOR"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Paths of the documents that make up one puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub grid_path: PathBuf,
    pub word_list_path: PathBuf,
    pub puzzle_path: PathBuf,
    pub answer_key_path: PathBuf,
}

impl Workspace {
    /// Derive the workspace paths from the grid path.
    pub fn for_grid(
        grid_path: impl Into<PathBuf>,
        word_list_path: Option<PathBuf>,
        out_dir: Option<PathBuf>,
    ) -> Workspace {
        let grid_path = grid_path.into();
        let stem = grid_path
            .file_stem()
            .map_or_else(|| "puzzle".to_string(), |s| s.to_string_lossy().into_owned());
        let grid_dir = grid_path.parent().map(Path::to_path_buf).unwrap_or_default();
        let out_dir = out_dir.unwrap_or_else(|| grid_dir.clone());

        let word_list_path = word_list_path
            .unwrap_or_else(|| grid_dir.join(format!("{stem}.{WORD_LIST_EXTENSION}")));

        Workspace {
            puzzle_path: out_dir.join(format!("{stem}.html")),
            answer_key_path: out_dir.join(format!("{stem}{ANSWER_KEY_SUFFIX}.html")),
            grid_path,
            word_list_path,
        }
    }

    /// Title derived from the grid's file name.
    #[must_use]
    pub fn title(&self) -> String {
        self.grid_path
            .file_stem()
            .map_or_else(|| "Crossword".to_string(), |s| s.to_string_lossy().into_owned())
    }

    /// Write [`STARTER_GRID`] if the grid file does not exist. Returns whether it was created.
    ///
    /// # Errors
    ///
    /// Will return `WriteFailure` if the starter grid cannot be written.
    pub fn ensure_grid(&self) -> Result<bool, WorkspaceError> {
        if self.grid_path.exists() {
            return Ok(false);
        }
        write_file(&self.grid_path, STARTER_GRID)?;
        info!("Created starter grid at {}", self.grid_path.display());
        Ok(true)
    }

    /// Open the grid and word list in `editor` and wait for it to exit.
    ///
    /// `editor` may carry arguments (e.g. `"code --wait"`); they come before the file paths.
    ///
    /// # Errors
    ///
    /// Will return `EditorLaunch` if the command cannot be run and `EditorExit`
    /// if it exits unsuccessfully.
    pub fn edit(&self, editor: &str) -> Result<(), WorkspaceError> {
        let mut parts = editor.split_whitespace();
        let program = parts.next().unwrap_or(FALLBACK_EDITOR);

        info!("Opening {} and {} in {program}", self.grid_path.display(), self.word_list_path.display());
        let status = Command::new(program)
            .args(parts)
            .arg(&self.grid_path)
            .arg(&self.word_list_path)
            .status()
            .map_err(|source| WorkspaceError::EditorLaunch { editor: editor.to_string(), source })?;

        if status.success() {
            Ok(())
        } else {
            Err(WorkspaceError::EditorExit { editor: editor.to_string(), status })
        }
    }

    /// Read the grid and word list (if present) and resolve the puzzle.
    ///
    /// # Errors
    ///
    /// Will return `ReadFailure` if a document exists but cannot be read.
    pub fn load(&self) -> Result<Puzzle, WorkspaceError> {
        let grid_document = read_file(&self.grid_path)?;
        let word_list_document = if self.word_list_path.exists() {
            Some(read_file(&self.word_list_path)?)
        } else {
            info!("No word list at {}; starting without clues", self.word_list_path.display());
            None
        };

        let puzzle = Puzzle::from_documents(&grid_document, word_list_document.as_deref());
        if puzzle.grid().is_empty() {
            warn!("Grid {} has no rows", self.grid_path.display());
        }
        Ok(puzzle)
    }

    /// Fail if a generated file would replace the grid, or an HTML file the word list.
    ///
    /// # Errors
    ///
    /// Will return `OutputIsInput` naming the first clash.
    pub fn check_outputs(&self) -> Result<(), WorkspaceError> {
        let clashes = [
            (&self.word_list_path, &self.grid_path, "word list"),
            (&self.puzzle_path, &self.grid_path, "puzzle"),
            (&self.answer_key_path, &self.grid_path, "answer key"),
            (&self.puzzle_path, &self.word_list_path, "puzzle"),
            (&self.answer_key_path, &self.word_list_path, "answer key"),
        ];
        match clashes.into_iter().find(|(output, input, _)| same_file(output, input)) {
            Some((_, input, output)) => Err(WorkspaceError::OutputIsInput { path: input.clone(), output }),
            None => Ok(()),
        }
    }

    /// Regenerate the word list and write both HTML documents.
    ///
    /// # Errors
    ///
    /// Will return `OutputIsInput` (before writing anything) if an output path
    /// names an input, and `WriteFailure` if any output cannot be written.
    pub fn write_outputs(&self, puzzle: &Puzzle, title: &str) -> Result<(), WorkspaceError> {
        self.check_outputs()?;
        write_file(&self.word_list_path, &puzzle.word_list())?;
        write_file(&self.puzzle_path, &puzzle.puzzle_html(title))?;
        write_file(&self.answer_key_path, &puzzle.answer_key_html(title))?;
        Ok(())
    }

    /// Load, then write every output. Returns the resolved puzzle.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Workspace::load`] and [`Workspace::write_outputs`].
    pub fn build(&self, title: &str) -> Result<Puzzle, WorkspaceError> {
        let puzzle = self.load()?;
        self.write_outputs(&puzzle, title)?;
        Ok(puzzle)
    }
}

/// Equal paths, or two existing paths that resolve to the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    a == b
        || matches!(
            (fs::canonicalize(a), fs::canonicalize(b)),
            (Ok(a), Ok(b)) if a == b
        )
}

fn read_file(path: &Path) -> Result<String, WorkspaceError> {
    fs::read_to_string(path).map_err(|source| WorkspaceError::ReadFailure { path: path.to_path_buf(), source })
}

fn write_file(path: &Path, contents: &str) -> Result<(), WorkspaceError> {
    fs::write(path, contents).map_err(|source| WorkspaceError::WriteFailure { path: path.to_path_buf(), source })
}
