//! HTML output: the blank puzzle with its clue lists, and the filled answer key.
//!
//! Numbers are placed by walking the grid in scan order alongside the ordered
//! [`NumberedCells`]: whenever the next cell's position comes up, its number is
//! written and the cell iterator advances. This only works because numbering
//! produced the cells in that same order.

use crate::direction::Direction;
use crate::grid::Grid;
use crate::numbering::NumberedCells;
use std::fmt::Write;

/// Which document to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Empty grid plus Across and Down clue lists.
    Puzzle,
    /// Filled grid, no clues.
    AnswerKey,
}

const STYLE: &str = "\
table.grid { border-collapse: collapse; }
table.grid td { border: 1px solid #000; width: 2em; height: 2em; position: relative; text-align: center; vertical-align: middle; font-family: sans-serif; }
table.grid td.blank { background: #000; }
table.grid td span.number { position: absolute; top: 1px; left: 2px; font-size: 0.55em; }
table.grid td span.letter { font-size: 1.2em; }
div.clues { display: flex; gap: 3em; font-family: sans-serif; }
div.clues ol { list-style: none; padding-left: 0; }
div.clues li span.number { font-weight: bold; margin-right: 0.5em; }";

/// Render a complete HTML document for `grid` and its (resolved) `cells`.
#[must_use]
pub fn render_html(grid: &Grid, cells: &NumberedCells, mode: RenderMode, title: &str) -> String {
    let mut out = String::new();
    let title = escape_html(title);

    // NB: writing to a String never fails
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html>");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{title}</title>");
    let _ = writeln!(out, "<style>\n{STYLE}\n</style>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<h1>{title}</h1>");

    render_grid(&mut out, grid, cells, mode);
    if mode == RenderMode::Puzzle {
        render_clues(&mut out, cells);
    }

    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

fn render_grid(out: &mut String, grid: &Grid, cells: &NumberedCells, mode: RenderMode) {
    let mut numbered = cells.iter().peekable();

    let _ = writeln!(out, "<table class=\"grid\">");
    for y in 0..grid.row_count() {
        let _ = write!(out, "<tr>");
        for x in 0..grid.col_count() {
            let Some(letter) = grid.cell_at(x, y) else {
                let _ = write!(out, "<td class=\"blank\"></td>");
                continue;
            };

            let _ = write!(out, "<td>");
            if let Some(cell) = numbered.next_if(|cell| (cell.x, cell.y) == (x, y)) {
                let _ = write!(out, "<span class=\"number\">{}</span>", cell.number);
            }
            if mode == RenderMode::AnswerKey {
                let _ = write!(out, "<span class=\"letter\">{letter}</span>");
            }
            let _ = write!(out, "</td>");
        }
        let _ = writeln!(out, "</tr>");
    }
    let _ = writeln!(out, "</table>");
}

fn render_clues(out: &mut String, cells: &NumberedCells) {
    let _ = writeln!(out, "<div class=\"clues\">");
    for direction in Direction::ALL {
        let _ = writeln!(out, "<div class=\"{}\">", direction.heading().to_lowercase());
        let _ = writeln!(out, "<h2>{}</h2>", direction.heading());
        let _ = writeln!(out, "<ol>");
        for (cell, _) in cells.words(direction) {
            let clue = escape_html(cell.clue(direction).unwrap_or_default());
            let _ = writeln!(out, "<li><span class=\"number\">{}</span>{clue}</li>", cell.number);
        }
        let _ = writeln!(out, "</ol>");
        let _ = writeln!(out, "</div>");
    }
    let _ = writeln!(out, "</div>");
}

/// Escape text for use in HTML element content and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue_map::ClueMap;
    use crate::numbering::number_cells;

    fn corner() -> (Grid, NumberedCells) {
        let grid = Grid::from_rows(["AB", "C "]);
        let cells = number_cells(&grid);
        (grid, cells)
    }

    #[test]
    fn test_puzzle_grid_has_numbers_but_no_letters() {
        let (grid, cells) = corner();
        let html = render_html(&grid, &cells, RenderMode::Puzzle, "Test");
        assert!(html.contains(
            "<tr><td><span class=\"number\">1</span></td><td></td></tr>\n\
             <tr><td></td><td class=\"blank\"></td></tr>"
        ));
        assert!(!html.contains("class=\"letter\""));
    }

    #[test]
    fn test_answer_key_has_letters_and_no_clues() {
        let (grid, cells) = corner();
        let html = render_html(&grid, &cells, RenderMode::AnswerKey, "Test");
        assert!(html.contains(
            "<td><span class=\"number\">1</span><span class=\"letter\">A</span></td>"
        ));
        assert!(html.contains("<td><span class=\"letter\">B</span></td>"));
        assert!(html.contains("<td><span class=\"letter\">C</span></td>"));
        assert!(!html.contains("<h2>"));
    }

    #[test]
    fn test_numbers_follow_scan_order() {
        let grid = Grid::from_rows(["AB", "CD"]);
        let cells = number_cells(&grid);
        let html = render_html(&grid, &cells, RenderMode::Puzzle, "Test");
        let one = html.find(">1<").unwrap();
        let two = html.find(">2<").unwrap();
        let three = html.find(">3<").unwrap();
        assert!(one < two && two < three);
    }

    #[test]
    fn test_short_rows_render_blanks() {
        let grid = Grid::from_rows(["ABC", "D"]);
        let cells = number_cells(&grid);
        let html = render_html(&grid, &cells, RenderMode::AnswerKey, "Test");
        assert!(html.contains(
            "<tr><td><span class=\"letter\">D</span></td><td class=\"blank\"></td><td class=\"blank\"></td></tr>"
        ));
    }

    #[test]
    fn test_clue_lists() {
        let (grid, cells) = corner();
        let mut clues = ClueMap::new();
        clues.add(1, Direction::Across, "AB", "Fish & <chips>");
        let cells = clues.resolve(cells);

        let html = render_html(&grid, &cells, RenderMode::Puzzle, "Test");
        assert!(html.contains("<h2>Across</h2>\n<ol>\n<li><span class=\"number\">1</span>Fish &amp; &lt;chips&gt;</li>\n</ol>"));
        // missing clue renders empty
        assert!(html.contains("<h2>Down</h2>\n<ol>\n<li><span class=\"number\">1</span></li>\n</ol>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let (grid, cells) = corner();
        let html = render_html(&grid, &cells, RenderMode::Puzzle, "A \"quoted\" <title>");
        assert!(html.contains("<title>A &quot;quoted&quot; &lt;title&gt;</title>"));
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::default();
        let html = render_html(&grid, &number_cells(&grid), RenderMode::Puzzle, "Empty");
        assert!(html.contains("<table class=\"grid\">\n</table>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("a<b>&'c'\""), "a&lt;b&gt;&amp;&#39;c&#39;&quot;");
    }
}
