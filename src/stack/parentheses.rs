//! Balanced-parenthesis checking.
//!
//! Only round parentheses take part: every other character, square and curly
//! brackets included, is skipped. A string is balanced when each `)` closes an
//! earlier unmatched `(` and no `(` is left open at the end. In other words,
//! the string restricted to `(` and `)` is a Dyck word.
//!
//! # Examples
//!
//! ```rust
//! use classic_structures::stack::{Balance, check, is_balanced};
//!
//! assert!(is_balanced("(a (b) c)"));
//! assert!(!is_balanced(")("));
//! assert_eq!(check("(()"), Balance::UnmatchedOpen { count: 1 });
//! assert_eq!(check("())("), Balance::UnmatchedClose { position: 2 });
//! ```

use std::fmt;

use super::Stack;

/// Outcome of scanning a string for parenthesis balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Balance {
    /// Every `(` is closed and no `)` is unmatched.
    Balanced,
    /// A `)` appeared with no open `(` to close. The scan stops there.
    UnmatchedClose {
        /// Character index of the offending `)`.
        position: usize,
    },
    /// The input ended with `(` still open.
    UnmatchedOpen {
        /// Number of `(` left open.
        count: usize,
    },
}

impl Balance {
    /// Returns `true` for [`Balance::Balanced`].
    #[inline]
    #[must_use]
    pub const fn is_balanced(self) -> bool {
        matches!(self, Self::Balanced)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balanced => write!(formatter, "The parentheses are balanced."),
            Self::UnmatchedClose { position } => write!(
                formatter,
                "The parentheses are not balanced: unmatched ')' at {position}."
            ),
            Self::UnmatchedOpen { count } => write!(
                formatter,
                "The parentheses are not balanced: {count} unclosed '('."
            ),
        }
    }
}

/// Classifies `input`, reporting why it is unbalanced when it is.
///
/// An unmatched `)` ends the scan immediately; the rest of the input is not
/// examined.
#[must_use]
pub fn check(input: &str) -> Balance {
    let mut open = Stack::new();
    for (position, character) in input.chars().enumerate() {
        match character {
            '(' => open.push(position),
            ')' => {
                if open.pop().is_none() {
                    return Balance::UnmatchedClose { position };
                }
            }
            _ => {}
        }
    }
    if open.is_empty() {
        Balance::Balanced
    } else {
        Balance::UnmatchedOpen { count: open.len() }
    }
}

/// Returns `true` if the round parentheses in `input` are balanced.
#[inline]
#[must_use]
pub fn is_balanced(input: &str) -> bool {
    check(input).is_balanced()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("()", true)]
    #[case("()()", true)]
    #[case("(())", true)]
    #[case("(()", false)]
    #[case(")(", false)]
    #[case("())", false)]
    #[case("no parentheses here", true)]
    #[case("[{(}])", true)]
    #[case("][", true)]
    fn test_is_balanced(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_balanced(input), expected);
    }

    #[rstest]
    fn test_unmatched_close_short_circuits() {
        assert_eq!(check("a)((((("), Balance::UnmatchedClose { position: 1 });
    }

    #[rstest]
    fn test_positions_count_characters_not_bytes() {
        assert_eq!(check("é)"), Balance::UnmatchedClose { position: 1 });
    }

    #[rstest]
    fn test_unmatched_open_counts_leftovers() {
        assert_eq!(check("((x)(("), Balance::UnmatchedOpen { count: 3 });
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Balance::Balanced.to_string(), "The parentheses are balanced.");
    }

    /// Reference definition: every prefix has at least as many `(` as `)`,
    /// and the totals match.
    fn is_dyck_word(input: &str) -> bool {
        let mut depth: i64 = 0;
        for character in input.chars() {
            match character {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }

    /// Expands a walk of opens (`true`) and closes (`false`) into a balanced
    /// string. A close at depth zero becomes an open; open parentheses are
    /// closed at the end.
    fn dyck_word(moves: &[bool]) -> String {
        let mut word = String::with_capacity(moves.len() * 2);
        let mut depth = 0usize;
        for &open in moves {
            if open || depth == 0 {
                word.push('(');
                depth += 1;
            } else {
                word.push(')');
                depth -= 1;
            }
        }
        word.extend(std::iter::repeat_n(')', depth));
        word
    }

    #[rstest]
    #[case(&[], "")]
    #[case(&[false, false], "()")]
    #[case(&[true, true, false], "(())")]
    fn test_dyck_word_expansion(#[case] moves: &[bool], #[case] expected: &str) {
        assert_eq!(dyck_word(moves), expected);
    }

    proptest! {
        #[test]
        fn prop_matches_dyck_definition(input in "[()a\\[\\]]{0,24}") {
            prop_assert_eq!(is_balanced(&input), is_dyck_word(&input));
        }

        #[test]
        fn prop_wrapping_balanced_input_stays_balanced(moves in prop::collection::vec(any::<bool>(), 0..16)) {
            let input = dyck_word(&moves);
            prop_assert!(is_balanced(&input));
            let wrapped = format!("({input})");
            prop_assert!(is_balanced(&wrapped));
        }
    }
}
