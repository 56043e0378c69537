//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ParseError` and `WorkspaceError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use std::path::PathBuf;
use std::process::Command;

use crossgrid::errors::ParseError;
use crossgrid::workspace::WorkspaceError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// Helper to create all `ParseError` variants for documentation
fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::NotAClueLine { line: "1. cat: Feline pet".to_string() },
        // InvalidCellNumber--create by parsing an oversized number
        ParseError::InvalidCellNumber("99999999999999999999999".parse::<usize>().unwrap_err()),
        ParseError::ClueOutsideSection { line: "1. CAT: Feline pet".to_string() },
        ParseError::NomError(nom::error::ErrorKind::Tag),
    ]
}

/// Helper to create all `WorkspaceError` variants for documentation
fn all_workspace_error_variants() -> Vec<WorkspaceError> {
    // a real unsuccessful status, so the example text is what users see
    let failed_status = Command::new("false").status().ok().filter(|s| !s.success());

    let mut errors = vec![
        WorkspaceError::ReadFailure {
            path: PathBuf::from("sunday.grid"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        },
        WorkspaceError::WriteFailure {
            path: PathBuf::from("out/sunday.html"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
        },
        WorkspaceError::EditorLaunch {
            editor: "nosuchedit".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
        },
    ];
    if let Some(status) = failed_status {
        errors.push(WorkspaceError::EditorExit { editor: "vi".to_string(), status });
    }
    errors.push(WorkspaceError::OutputIsInput { path: PathBuf::from("sunday.words"), output: "word list" });
    errors
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Workspace Errors (W001–W005)](#workspace-errors)");
    println!("- [Word-List Errors (E001–E004)](#word-list-errors)\n");

    generate_workspace_error_docs();
    generate_parse_error_docs();

    println!("## Error Display Formats\n");
    println!("Errors are displayed as:\n");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}

fn generate_workspace_error_docs() {
    println!("## Workspace Errors\n");
    println!("Errors reading or writing puzzle files, or running the editor. These stop the build.\n");
    generate_error_docs!(all_workspace_error_variants());
}

fn generate_parse_error_docs() {
    println!("## Word-List Errors\n");
    println!("Problems with individual word-list lines. These never stop the build: the line is skipped and the error is logged at debug level (set CROSSGRID_DEBUG=1 to see them).\n");
    generate_error_docs!(all_parse_error_variants());
}
