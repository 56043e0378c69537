use crate::log::init_logger;
use crate::numbering::Cell;
use crate::puzzle::Puzzle;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.description.is_empty() {
            msg.push_str(&format!("\n\n{}", e.description));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmCell {
    x: usize,
    y: usize,
    number: usize,
    across_word: Option<String>,
    down_word: Option<String>,
    across_clue: Option<String>,
    down_clue: Option<String>,
}

impl From<&Cell> for WasmCell {
    fn from(cell: &Cell) -> Self {
        WasmCell {
            x: cell.x,
            y: cell.y,
            number: cell.number,
            across_word: cell.across_word.clone(),
            down_word: cell.down_word.clone(),
            across_clue: cell.across_clue.clone(),
            down_clue: cell.down_clue.clone(),
        }
    }
}

#[derive(serde::Serialize)]
struct WasmPuzzle {
    cells: Vec<WasmCell>,
    word_list: String,
    puzzle_html: String,
    answer_key_html: String,
}

/// JS entry: (grid: string, word_list: string | undefined, title: string)
/// returns `{ cells, word_list, puzzle_html, answer_key_html }`
#[wasm_bindgen]
pub fn build_puzzle_wasm(
    grid: &str,
    word_list: Option<String>,
    title: &str,
) -> Result<JsValue, JsValue> {
    let puzzle = Puzzle::from_documents(grid, word_list.as_deref());

    let result = WasmPuzzle {
        cells: puzzle.cells().iter().map(WasmCell::from).collect(),
        word_list: puzzle.word_list(),
        puzzle_html: puzzle.puzzle_html(title),
        answer_key_html: puzzle.answer_key_html(title),
    };

    serde_wasm_bindgen::to_value(&result).map_err(|e| {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("serialization failed: {e}"),
            description: "The puzzle could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}
