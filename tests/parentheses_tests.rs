//! Integration tests for the parenthesis balance checker.

use classic_structures::stack::{Balance, Stack, check, is_balanced};
use rstest::rstest;

#[rstest]
#[case("(()", false)]
#[case("()()", true)]
#[case("", true)]
#[case(")(", false)]
#[case("((a + b) * (c - d))", true)]
#[case("f(x))", false)]
#[case("{[()]}", true)]
#[case("{[(])}", true)]
fn test_is_balanced(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_balanced(input), expected);
}

#[rstest]
#[case("(()", Balance::UnmatchedOpen { count: 1 })]
#[case(")(", Balance::UnmatchedClose { position: 0 })]
#[case("(x))(", Balance::UnmatchedClose { position: 3 })]
#[case("text", Balance::Balanced)]
fn test_check_explains_result(#[case] input: &str, #[case] expected: Balance) {
    assert_eq!(check(input), expected);
}

#[rstest]
#[case(Balance::Balanced, "The parentheses are balanced.")]
#[case(
    Balance::UnmatchedOpen { count: 2 },
    "The parentheses are not balanced: 2 unclosed '('."
)]
#[case(
    Balance::UnmatchedClose { position: 4 },
    "The parentheses are not balanced: unmatched ')' at 4."
)]
fn test_balance_display(#[case] balance: Balance, #[case] expected: &str) {
    assert_eq!(balance.to_string(), expected);
}

#[rstest]
fn test_deep_nesting() {
    let depth = 10_000;
    let input = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    assert!(is_balanced(&input));
    assert_eq!(
        check(&input[1..]),
        Balance::UnmatchedClose {
            position: 2 * depth - 2
        }
    );
}

#[rstest]
fn test_stack_push_pop_len() {
    let mut stack = Stack::new();
    stack.push('(');
    stack.push('(');
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pop(), Some('('));
    assert_eq!(stack.len(), 1);
    assert!(!stack.is_empty());
}
