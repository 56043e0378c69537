use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;

use crossgrid::workspace::{self, Workspace, WorkspaceError};
use crossgrid::Direction;

/// Build a crossword puzzle and answer key from a letter grid and a word list
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Path to the grid file (created with a starter grid if missing)
    grid: PathBuf,

    /// Path to the word list (default: the grid path with a `.words` extension)
    #[arg(short, long)]
    word_list: Option<PathBuf>,

    /// Directory for the generated HTML files (default: the grid's directory)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Open the grid and word list in an editor before building
    #[arg(short, long)]
    edit: bool,

    /// Editor command to use with --edit (default: $VISUAL, then $EDITOR, then vi)
    #[arg(long)]
    editor: Option<String>,

    /// Title for the generated documents (default: the grid's file name)
    #[arg(short, long)]
    title: Option<String>,

    /// Log debug details, such as skipped word-list lines (also: CROSSGRID_DEBUG=1)
    #[arg(short, long)]
    debug: bool,
}

/// Entry point of the crossgrid CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();
    crossgrid::log::init_logger(cli.debug);

    if let Err(e) = try_main(cli) {
        if let Some(workspace_err) = e.downcast_ref::<WorkspaceError>() {
            eprintln!("Error: {}", workspace_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Derive the workspace paths from the CLI arguments.
/// 2. Refuse output paths that would replace an input, then create a
///    starter grid if the grid file does not exist.
/// 3. Optionally open the grid and word list in an editor.
/// 4. Number the grid and resolve clues from the word list.
/// 5. Rewrite the word list and write the puzzle and answer key.
/// 6. Print a summary on stderr.
fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::for_grid(cli.grid, cli.word_list, cli.out_dir);
    ws.check_outputs()?;
    ws.ensure_grid()?;

    if cli.edit {
        let editor = cli.editor.unwrap_or_else(workspace::default_editor);
        ws.edit(&editor)?;
    }

    let title = cli.title.unwrap_or_else(|| ws.title());
    let puzzle = ws.build(&title)?;

    let cells = puzzle.cells();
    let missing: usize = Direction::ALL
        .into_iter()
        .map(|d| cells.words(d).filter(|(cell, _)| cell.clue(d).is_none()).count())
        .sum();
    let total: usize = Direction::ALL.into_iter().map(|d| cells.words(d).count()).sum();

    eprintln!(
        "{} numbered cells, {} words ({} without a clue).",
        cells.len(),
        total,
        missing
    );
    eprintln!("Puzzle:     {}", ws.puzzle_path.display());
    eprintln!("Answer key: {}", ws.answer_key_path.display());
    eprintln!("Word list:  {}", ws.word_list_path.display());

    Ok(())
}
