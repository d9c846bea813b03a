use crate::foundation::error::{ExprError, ExprResult};
use std::hash::{Hash, Hasher};

/// Coarse token kind produced by [`tokenize`]. Role resolution happens in the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Decimal digits only.
    Integer,
    /// Digits with a fraction and/or exponent.
    Float,
    /// Quoted string, lexeme includes the quotes.
    String,
    /// Identifier or keyword (`true`, `false`, `null`).
    Identifier,
    /// Any operator symbol.
    Operator,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
}

/// Raw token: a slice of the source plus its coarse kind and line.
///
/// Equality and hashing look at the lexeme and kind only; the line is diagnostic metadata.
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    /// Source text of the token.
    pub lexeme: &'a str,
    /// Coarse kind.
    pub kind: TokenKind,
    /// 1-based source line.
    pub line: u32,
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.lexeme == other.lexeme && self.kind == other.kind
    }
}

impl Eq for Token<'_> {}

impl Hash for Token<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lexeme.hash(state);
        self.kind.hash(state);
    }
}

const TWO_CHAR_OPERATORS: [&str; 10] = ["&&", "||", "==", "!=", "<=", ">=", "+=", "-=", "*=", "/="];

/// Split `input` into raw tokens.
pub fn tokenize(input: &str) -> ExprResult<Vec<Token<'_>>> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;
    let mut line = 1u32;

    while i < bytes.len() {
        let c = bytes[i] as char;
        if c == '\n' {
            line += 1;
            i += 1;
            continue;
        }
        if bytes[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let start = i;
        macro_rules! push {
            ($kind:expr, $end:expr) => {
                out.push(Token {
                    lexeme: &input[start..$end],
                    kind: $kind,
                    line,
                })
            };
        }

        // Number: [0-9]+(.[0-9]+)?([eE][+-]?[0-9]+)? or .[0-9]+([eE][+-]?[0-9]+)?
        if c.is_ascii_digit()
            || (c == '.' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit())
        {
            let mut kind = TokenKind::Integer;
            if c == '.' {
                kind = TokenKind::Float;
                i += 1;
            } else {
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
                    kind = TokenKind::Float;
                    i += 1;
                }
            }
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }

            if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
                kind = TokenKind::Float;
                i += 1;
                if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
                    i += 1;
                }
                let exp_start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                if exp_start == i {
                    return Err(ExprError::syntax_at(
                        line,
                        &input[start..i],
                        "invalid number exponent (expected digits)",
                    ));
                }
            }
            push!(kind, i);
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            i += 1;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            push!(TokenKind::Identifier, i);
            continue;
        }

        if c == '"' || c == '\'' {
            let quote = bytes[i];
            let start_line = line;
            i += 1;
            loop {
                match bytes.get(i) {
                    None => {
                        return Err(ExprError::syntax_at(
                            start_line,
                            &input[start..],
                            "unterminated string literal",
                        ));
                    }
                    Some(b'\\') => i += 2,
                    Some(b'\n') => {
                        line += 1;
                        i += 1;
                    }
                    Some(&b) if b == quote => {
                        i += 1;
                        break;
                    }
                    Some(_) => i += 1,
                }
            }
            let end = i.min(bytes.len());
            out.push(Token {
                lexeme: &input[start..end],
                kind: TokenKind::String,
                line: start_line,
            });
            continue;
        }

        if i + 1 < bytes.len() && input.is_char_boundary(i + 2) {
            let two = &input[i..i + 2];
            if TWO_CHAR_OPERATORS.contains(&two) {
                i += 2;
                push!(TokenKind::Operator, i);
                continue;
            }
        }

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '+' | '-' | '*' | '/' | '%' | '!' | '<' | '>' | '=' => TokenKind::Operator,
            _ => {
                let ch = input[start..].chars().next().unwrap_or(c);
                return Err(ExprError::syntax_at(
                    line,
                    &input[start..start + ch.len_utf8()],
                    format!("unexpected character '{ch}'"),
                ));
            }
        };
        i += 1;
        push!(kind, i);
    }

    Ok(out)
}

/// Decode the body of a quoted string lexeme.
pub(crate) fn unescape(token: &Token<'_>) -> ExprResult<String> {
    let body = &token.lexeme[1..token.lexeme.len() - 1];
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(c @ ('\\' | '"' | '\'')) => out.push(c),
            Some(other) => {
                return Err(ExprError::syntax(
                    token,
                    format!("unknown escape sequence '\\{other}'"),
                ));
            }
            None => return Err(ExprError::syntax(token, "dangling '\\' in string literal")),
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/expression/lexer.rs"]
mod tests;
