use super::*;
use crate::expression::classify::classify;
use crate::expression::lexer::tokenize;

fn rpn(src: &str) -> Vec<String> {
    let tokens = tokenize(src).unwrap();
    let elements = classify(&tokens).unwrap();
    to_postfix(&elements)
        .unwrap()
        .iter()
        .map(|e| e.lexeme().to_owned())
        .collect()
}

fn rpn_err(src: &str) -> ExprError {
    let tokens = tokenize(src).unwrap();
    let elements = classify(&tokens).unwrap();
    to_postfix(&elements).unwrap_err()
}

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(rpn("2 + 3 * 4"), ["2", "3", "4", "*", "+"]);
    assert_eq!(rpn("(2 + 3) * 4"), ["2", "3", "+", "4", "*"]);
}

#[test]
fn left_associativity() {
    assert_eq!(rpn("8 - 4 - 2"), ["8", "4", "-", "2", "-"]);
}

#[test]
fn right_associativity() {
    assert_eq!(rpn("a = b = 1"), ["a", "b", "1", "=", "="]);
    assert_eq!(rpn("- - x"), ["x", "-", "-"]);
}

#[test]
fn precedence_ladder() {
    assert_eq!(
        rpn("x = a || b && c == 1 + 2 * -d"),
        ["x", "a", "b", "c", "1", "2", "d", "-", "*", "+", "==", "&&", "||", "="]
    );
    assert_eq!(rpn("a = 1; b = 2"), ["a", "1", "=", "b", "2", "=", ";"]);
}

#[test]
fn function_marker_follows_arguments() {
    assert_eq!(rpn("max(1, 2 + 3)"), ["1", "2", "3", "+", "max"]);
    assert_eq!(rpn("f(g(x), y) * 2"), ["x", "g", "y", "f", "2", "*"]);
}

#[test]
fn function_elements_carry_argument_count() {
    let tokens = tokenize("f(g(x), y, h())").unwrap();
    let elements = classify(&tokens).unwrap();
    let out = to_postfix(&elements).unwrap();
    let calls: Vec<(&str, usize)> = out
        .iter()
        .filter(|e| e.ty == ElementType::Function)
        .map(|e| (e.lexeme(), e.argc))
        .collect();
    assert_eq!(calls, [("g", 1), ("h", 0), ("f", 3)]);
}

#[test]
fn unbalanced_parentheses() {
    assert!(rpn_err("(1 + 2").is_syntax());
    assert!(rpn_err("1 + 2)").is_syntax());
    assert!(rpn_err("max(1, 2").is_syntax());
}

#[test]
fn misplaced_commas() {
    assert!(rpn_err("1, 2").is_syntax());
    assert!(rpn_err("f((1, 2))").is_syntax());
    assert!(rpn_err("f(1,)").is_syntax());
}
