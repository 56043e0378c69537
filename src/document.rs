//! Line preprocessing shared by the grid and word-list readers.
//!
//! Both documents are plain text with the same conventions:
//! - trailing whitespace is removed from every line,
//! - a line whose first non-space character is `#` is a comment and is dropped,
//! - blank lines are dropped,
//! - a leading UTF-8 byte-order mark is ignored.
//!
//! Leading whitespace is preserved, since it is meaningful in grid rows.

use crate::grid_char::COMMENT_CHAR;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Iterate over the content lines of a document.
pub fn content_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(contents)
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !is_comment(line))
}

#[inline]
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_CHAR)
}
