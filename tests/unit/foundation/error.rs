use super::*;
use crate::expression::lexer::{Token, TokenKind};

fn tok(lexeme: &str, line: u32) -> Token<'_> {
    Token {
        lexeme,
        kind: TokenKind::Operator,
        line,
    }
}

#[test]
fn syntax_error_carries_token_and_line() {
    let e = ExprError::syntax(&tok(")", 3), "unbalanced parenthesis");
    assert_eq!(
        e,
        ExprError::Syntax {
            line: 3,
            lexeme: ")".to_owned(),
            message: "unbalanced parenthesis".to_owned(),
        }
    );
    assert_eq!(
        e.to_string(),
        "syntax error at line 3 near ')': unbalanced parenthesis"
    );
}

#[test]
fn overflow_counts_as_syntax_category() {
    let e = ExprError::overflow(&tok("2147483648", 1), "does not fit in a 32-bit integer");
    assert!(e.is_syntax());
    assert!(!e.is_type());
    assert!(!e.is_runtime());
    assert!(e.to_string().contains("2147483648"));
}

#[test]
fn category_predicates() {
    assert!(ExprError::type_error("x").is_type());
    assert!(ExprError::runtime("x").is_runtime());
    let cfg = ExprError::config("x");
    assert!(!cfg.is_syntax() && !cfg.is_type() && !cfg.is_runtime());
    assert_eq!(cfg.to_string(), "config error: x");
}
