use super::*;

fn kinds(src: &str) -> Vec<(&str, TokenKind)> {
    tokenize(src)
        .unwrap()
        .into_iter()
        .map(|t| (t.lexeme, t.kind))
        .collect()
}

#[test]
fn numbers_identifiers_and_operators() {
    assert_eq!(
        kinds("x1 += 2.5e3 * .5 - 7"),
        vec![
            ("x1", TokenKind::Identifier),
            ("+=", TokenKind::Operator),
            ("2.5e3", TokenKind::Float),
            ("*", TokenKind::Operator),
            (".5", TokenKind::Float),
            ("-", TokenKind::Operator),
            ("7", TokenKind::Integer),
        ]
    );
}

#[test]
fn punctuation() {
    assert_eq!(
        kinds("f(a, b); !c"),
        vec![
            ("f", TokenKind::Identifier),
            ("(", TokenKind::LeftParen),
            ("a", TokenKind::Identifier),
            (",", TokenKind::Comma),
            ("b", TokenKind::Identifier),
            (")", TokenKind::RightParen),
            (";", TokenKind::Semicolon),
            ("!", TokenKind::Operator),
            ("c", TokenKind::Identifier),
        ]
    );
}

#[test]
fn two_char_operators_win_over_single() {
    let ops: Vec<&str> = tokenize("a<=b&&c!=d||e==f")
        .unwrap()
        .iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.lexeme)
        .collect();
    assert_eq!(ops, vec!["<=", "&&", "!=", "||", "=="]);
}

#[test]
fn newlines_advance_line_numbers() {
    let toks = tokenize("a\n+\n\nb").unwrap();
    let lines: Vec<u32> = toks.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4]);
}

#[test]
fn token_equality_ignores_line() {
    let a = Token {
        lexeme: "x",
        kind: TokenKind::Identifier,
        line: 1,
    };
    let b = Token { line: 9, ..a };
    assert_eq!(a, b);
    let mut set = std::collections::HashSet::new();
    set.insert(a);
    assert!(set.contains(&b));
}

#[test]
fn strings_keep_quotes_and_unescape() {
    let toks = tokenize(r#"'it\'s' "a\tb""#).unwrap();
    assert_eq!(toks[0].lexeme, r"'it\'s'");
    assert_eq!(unescape(&toks[0]).unwrap(), "it's");
    assert_eq!(unescape(&toks[1]).unwrap(), "a\tb");
}

#[test]
fn unterminated_string_is_syntax_error() {
    let e = tokenize("\"abc").unwrap_err();
    assert!(e.is_syntax());
}

#[test]
fn bad_escape_is_syntax_error() {
    let toks = tokenize(r#""\q""#).unwrap();
    assert!(unescape(&toks[0]).unwrap_err().is_syntax());
}

#[test]
fn unknown_character_is_syntax_error() {
    match tokenize("1 # 2").unwrap_err() {
        ExprError::Syntax { lexeme, line, .. } => {
            assert_eq!(lexeme, "#");
            assert_eq!(line, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn exponent_without_digits_is_rejected() {
    assert!(tokenize("1e+").unwrap_err().is_syntax());
}
