use pretty_assertions::assert_eq;

use eqrec::parse::token::TokenValue;
use eqrec::parse::{tokenize, LexerErrorKind};
use eqrec::position::Span;

fn values(line: &str) -> Vec<TokenValue<'_>> {
    tokenize(line.as_bytes())
        .expect("the line should tokenize")
        .into_iter()
        .map(|token| token.value)
        .collect()
}

#[test]
fn tokenizes_a_simple_equation() {
    assert_eq!(
        values("x + 3 = 7"),
        vec![
            TokenValue::Ident(b"x"),
            TokenValue::Symbol(b'+'),
            TokenValue::Number(3),
            TokenValue::Symbol(b'='),
            TokenValue::Number(7),
        ],
    );
}

#[test]
fn splits_token_classes_without_spaces() {
    assert_eq!(
        values("2x^3"),
        vec![
            TokenValue::Number(2),
            TokenValue::Ident(b"x"),
            TokenValue::Symbol(b'^'),
            TokenValue::Number(3),
        ],
    );
}

#[test]
fn idents_take_trailing_digits() {
    assert_eq!(
        values("x3 + 2"),
        vec![
            TokenValue::Ident(b"x3"),
            TokenValue::Symbol(b'+'),
            TokenValue::Number(2),
        ],
    );
}

#[test]
fn unknown_bytes_become_symbol_tokens() {
    assert_eq!(
        values("#~"),
        vec![TokenValue::Symbol(b'#'), TokenValue::Symbol(b'~')],
    );
}

#[test]
fn blank_lines_lex_to_nothing() {
    assert_eq!(values(""), vec![]);
    assert_eq!(values(" \t  "), vec![]);
}

#[test]
fn spans_cover_the_lexed_bytes() {
    let tokens = tokenize(b"12 + xy").expect("the line should tokenize");
    let spans: Vec<Span> = tokens.iter().map(|token| token.span).collect();

    assert_eq!(
        spans,
        vec![
            Span { start: 0, end: 2 },
            Span { start: 3, end: 4 },
            Span { start: 5, end: 7 },
        ],
    );
}

#[test]
fn accepts_the_largest_number_literal() {
    assert_eq!(values("2147483647"), vec![TokenValue::Number(i32::MAX)]);
}

#[test]
fn rejects_oversized_number_literals() {
    let err = tokenize(b"99999999999 = x").unwrap_err();

    assert_eq!(err.kind(), LexerErrorKind::NumberTooLarge);
    assert_eq!(err.span(), Span { start: 0, end: 11 });
}
