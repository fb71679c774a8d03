//! Parenthesis balance checking.

use crate::error::UnbalancedError;

pub const OPEN: char = '(';
pub const CLOSE: char = ')';

/// Checks that every `)` closes a pending `(` and that nothing stays open.
///
/// Scanning stops at the first `)` without a partner, so `")A("` reports
/// [`UnbalancedError::NoOpening`] rather than an unclosed group.
pub fn validate(s: &str) -> Result<(), UnbalancedError> {
    let mut open: Vec<usize> = Vec::new();
    for (index, ch) in s.char_indices() {
        match ch {
            OPEN => open.push(index),
            CLOSE => {
                if open.pop().is_none() {
                    return Err(UnbalancedError::NoOpening { index });
                }
            }
            _ => {}
        }
    }
    match open.pop() {
        Some(index) => Err(UnbalancedError::NoClosing { index }),
        None => Ok(()),
    }
}

/// Returns `true` if `s` has balanced parentheses.
pub fn is_balanced(s: &str) -> bool {
    validate(s).is_ok()
}

/// Deepest parenthesis nesting anywhere in `s`; stray `)` are ignored.
pub fn max_nesting(s: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0;
    for ch in s.chars() {
        match ch {
            OPEN => {
                depth += 1;
                max = max.max(depth);
            }
            CLOSE => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_balanced() {
        assert_eq!(validate(""), Ok(()));
        assert_eq!(validate("A"), Ok(()));
        assert_eq!(validate("(A∧B)"), Ok(()));
        assert_eq!(validate("((A)∨(¬B))→C"), Ok(()));
    }

    #[test]
    fn test_no_closing() {
        assert_eq!(validate("(A"), Err(UnbalancedError::NoClosing { index: 0 }));
        // innermost unmatched group is reported
        assert_eq!(validate("((A)∧(B"), Err(UnbalancedError::NoClosing { index: 7 }));
    }

    #[test]
    fn test_no_opening() {
        assert_eq!(validate("A)"), Err(UnbalancedError::NoOpening { index: 1 }));
        assert_eq!(validate(")A("), Err(UnbalancedError::NoOpening { index: 0 }));
        assert_eq!(validate("(A))("), Err(UnbalancedError::NoOpening { index: 3 }));
    }

    #[test]
    fn test_offsets_are_bytes() {
        // '∧' is three bytes wide
        assert_eq!(validate("A∧)"), Err(UnbalancedError::NoOpening { index: 4 }));
        assert!(!is_balanced("¬("));
    }

    #[test]
    fn test_max_nesting() {
        assert_eq!(max_nesting("A∧B"), 0);
        assert_eq!(max_nesting("(A)∧(B)"), 1);
        assert_eq!(max_nesting("((A∨(B))∧C)"), 3);
        assert_eq!(max_nesting(")(A"), 1);
    }
}
