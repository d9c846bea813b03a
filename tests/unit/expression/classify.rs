use super::*;
use crate::expression::lexer::tokenize;

fn types(src: &str) -> Vec<ElementType> {
    let tokens = tokenize(src).unwrap();
    classify(&tokens).unwrap().into_iter().map(|e| e.ty).collect()
}

fn fails(src: &str) -> ExprError {
    let tokens = tokenize(src).unwrap();
    classify(&tokens).unwrap_err()
}

#[test]
fn leading_minus_is_unary() {
    use ElementType::*;
    assert_eq!(types("-2 + 3"), vec![Negative, IntegerLiteral, Add, IntegerLiteral]);
}

#[test]
fn minus_after_operand_is_binary() {
    use ElementType::*;
    assert_eq!(types("2 - 3"), vec![IntegerLiteral, Subtract, IntegerLiteral]);
    assert_eq!(types("(2) - 3"), vec![
        LeftParenthesis,
        IntegerLiteral,
        RightParenthesis,
        Subtract,
        IntegerLiteral
    ]);
}

#[test]
fn sign_after_operator_parenthesis_comma_or_semicolon_is_unary() {
    use ElementType::*;
    assert_eq!(types("2 * -x")[2], Negative);
    assert_eq!(types("(+x)")[1], Positive);
    assert_eq!(types("f(1, -2)")[4], Negative);
    assert_eq!(types("x = 1; -x")[4], Negative);
}

#[test]
fn identifier_before_parenthesis_is_function() {
    use ElementType::*;
    assert_eq!(
        types("max(a, b)"),
        vec![Function, FunctionStartParenthesis, Variable, Comma, Variable, RightParenthesis]
    );
    assert_eq!(types("a * (b)")[2], LeftParenthesis);
}

#[test]
fn keywords_become_literals() {
    use ElementType::*;
    assert_eq!(
        types("true || false == null"),
        vec![BooleanLiteral, Or, BooleanLiteral, Equal, NullLiteral]
    );
}

#[test]
fn binary_operator_without_left_operand_fails() {
    let e = fails("* 2");
    assert!(e.is_syntax());
    assert!(fails("1 + && 2").is_syntax());
    assert!(fails("(== 1)").is_syntax());
}

#[test]
fn adjacent_operands_fail() {
    match fails("1 2") {
        ExprError::Syntax { lexeme, .. } => assert_eq!(lexeme, "2"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(fails("(1) (2)").is_syntax());
}

#[test]
fn not_after_operand_fails() {
    assert!(fails("a ! b").is_syntax());
}
