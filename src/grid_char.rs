use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const FILLED_CHARS: RangeInclusive<char> = 'A'..='Z';
pub(crate) const COMMENT_CHAR: char = '#';
#[cfg(test)]
pub(crate) const BLANK_CHAR: char = ' ';

/// Classification of grid characters.
///
/// Only uppercase ASCII letters count as filled cells; everything else
/// (spaces, punctuation, lowercase, non-ASCII) is blank.
pub(crate) trait GridChar {
    fn is_filled(&self) -> bool;
}

impl GridChar for char {
    fn is_filled(&self) -> bool {
        FILLED_CHARS.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_filled() {
        assert!('A'.is_filled());
        assert!('M'.is_filled());
        assert!('Z'.is_filled());
    }

    #[test]
    fn test_is_not_filled() {
        assert!(!'a'.is_filled()); // lowercase
        assert!(!'z'.is_filled());
        assert!(!BLANK_CHAR.is_filled());
        assert!(!COMMENT_CHAR.is_filled());
        assert!(!'1'.is_filled());
        assert!(!'.'.is_filled());
        assert!(!'@'.is_filled()); // one before 'A'
        assert!(!'['.is_filled()); // one after 'Z'
    }

    #[test]
    fn test_non_ascii_letters_are_blank() {
        assert!(!'É'.is_filled());
        assert!(!'Ж'.is_filled());
        assert!(!'ß'.is_filled());
    }

    #[test]
    fn test_alphabet_constants() {
        assert_eq!(FILLED_CHARS.count(), 26);
    }
}
