//! Resolution of raw tokens into semantic elements.
//!
//! Two ambiguities are settled here with one token of lookbehind and one of lookahead:
//! `+`/`-` are unary when no left operand can precede them, and an identifier is a
//! function call when the very next token is `(`.

use crate::expression::element::{Element, ElementType};
use crate::expression::lexer::{Token, TokenKind};
use crate::foundation::error::{ExprError, ExprResult};

/// Classify a whole token stream.
pub fn classify<'a>(tokens: &[Token<'a>]) -> ExprResult<Vec<Element<'a>>> {
    let mut out: Vec<Element<'a>> = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let prior = out.last().map(|e| e.ty);
        let ty = classify_token(prior, token, tokens.get(i + 1))?;
        out.push(Element::new(*token, ty));
    }
    Ok(out)
}

/// True when the element before the current position cannot serve as a left operand.
fn expects_operand(prior: Option<ElementType>) -> bool {
    match prior {
        None => true,
        Some(ty) => ty.is_operator() || ty.is_open_parenthesis(),
    }
}

/// Role of `token` given the previous element and the following raw token.
pub fn classify_token(
    prior: Option<ElementType>,
    token: &Token<'_>,
    next: Option<&Token<'_>>,
) -> ExprResult<ElementType> {
    let operand_position = expects_operand(prior);

    let ty = match token.kind {
        TokenKind::Integer => ElementType::IntegerLiteral,
        TokenKind::Float => ElementType::FloatLiteral,
        TokenKind::String => ElementType::StringLiteral,
        TokenKind::Identifier => match token.lexeme {
            "true" | "false" => ElementType::BooleanLiteral,
            "null" => ElementType::NullLiteral,
            _ if next.is_some_and(|t| t.kind == TokenKind::LeftParen) => ElementType::Function,
            _ => ElementType::Variable,
        },
        TokenKind::LeftParen => {
            if prior == Some(ElementType::Function) {
                ElementType::FunctionStartParenthesis
            } else {
                ElementType::LeftParenthesis
            }
        }
        TokenKind::RightParen => ElementType::RightParenthesis,
        TokenKind::Comma => ElementType::Comma,
        TokenKind::Semicolon => ElementType::Semicolon,
        TokenKind::Operator => return classify_operator(token, operand_position),
    };

    let starts_operand =
        ty.is_value() || ty == ElementType::Function || ty == ElementType::LeftParenthesis;
    if starts_operand && !operand_position {
        return Err(ExprError::syntax(token, "missing operator before operand"));
    }
    Ok(ty)
}

fn classify_operator(token: &Token<'_>, operand_position: bool) -> ExprResult<ElementType> {
    let ty = match (token.lexeme, operand_position) {
        ("+", true) => ElementType::Positive,
        ("+", false) => ElementType::Add,
        ("-", true) => ElementType::Negative,
        ("-", false) => ElementType::Subtract,
        ("!", true) => ElementType::Not,
        ("!", false) => {
            return Err(ExprError::syntax(token, "'!' cannot follow an operand"));
        }
        (_, true) => {
            return Err(ExprError::syntax(
                token,
                format!("operator '{}' is missing its left operand", token.lexeme),
            ));
        }
        ("*", false) => ElementType::Multiply,
        ("/", false) => ElementType::Divide,
        ("%", false) => ElementType::Modulo,
        ("==", false) => ElementType::Equal,
        ("!=", false) => ElementType::NotEqual,
        ("<", false) => ElementType::Less,
        (">", false) => ElementType::Greater,
        ("<=", false) => ElementType::LessEqual,
        (">=", false) => ElementType::GreaterEqual,
        ("&&", false) => ElementType::And,
        ("||", false) => ElementType::Or,
        ("=", false) => ElementType::Assign,
        ("+=", false) => ElementType::AddAssign,
        ("-=", false) => ElementType::SubtractAssign,
        ("*=", false) => ElementType::MultiplyAssign,
        ("/=", false) => ElementType::DivideAssign,
        (other, false) => {
            return Err(ExprError::syntax(token, format!("unknown operator '{other}'")));
        }
    };
    Ok(ty)
}

#[cfg(test)]
#[path = "../../tests/unit/expression/classify.rs"]
mod tests;
