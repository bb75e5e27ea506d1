use std::error::Error;
use std::fmt::{self, Display};
use std::iter::FusedIterator;
use std::num::{IntErrorKind, ParseIntError};

use crate::parse::token::{Token, TokenValue};
use crate::position::Span;

fn is_whitespace(c: u8) -> bool {
    const FORM_FEED: u8 = 12;
    const VERTICAL_TAB: u8 = 11;

    matches!(c, b' ' | b'\n' | FORM_FEED | b'\r' | b'\t' | VERTICAL_TAB)
}

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

fn is_ident_continuation(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LexerErrorKind {
    NumberTooLarge,
}

impl From<ParseIntError> for LexerErrorKind {
    fn from(err: ParseIntError) -> Self {
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Self::NumberTooLarge,
            _ => unimplemented!(),
        }
    }
}

impl Display for LexerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberTooLarge => write!(f, "the number literal is too large"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LexerError {
    span: Span,
    kind: LexerErrorKind,
}

impl LexerError {
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn kind(&self) -> LexerErrorKind {
        self.kind
    }
}

impl Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lexical analysis failed: {}", self.kind)
    }
}

impl Error for LexerError {}

/// A tokenizer for one line of input.
///
/// Digit runs become numbers, letter-led runs become identifiers and every
/// other non-whitespace byte becomes a one-byte symbol token, so lexing only
/// ever fails on an oversized number literal.
#[derive(Debug, Clone)]
pub struct Lexer<'buf> {
    buf: &'buf [u8],
    pos: usize,
}

impl<'buf> Lexer<'buf> {
    pub fn new(buf: &'buf [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn consume_while(&mut self, predicate: impl Fn(u8) -> bool) -> &'buf [u8] {
        let start = self.pos;

        while matches!(self.peek(), Some(c) if predicate(c)) {
            self.pos += 1;
        }

        &self.buf[start..self.pos]
    }

    fn scan_number(&mut self) -> Result<TokenValue<'buf>, LexerErrorKind> {
        let digits = self.consume_while(|c| c.is_ascii_digit());
        let value = std::str::from_utf8(digits)
            .unwrap()
            .parse::<i32>()
            .map_err(LexerErrorKind::from)?;

        Ok(TokenValue::Number(value))
    }

    fn scan_ident(&mut self) -> TokenValue<'buf> {
        TokenValue::Ident(self.consume_while(is_ident_continuation))
    }

    fn skip_whitespace(&mut self) {
        self.consume_while(is_whitespace);
    }
}

impl<'buf> Iterator for Lexer<'buf> {
    type Item = Result<Token<'buf>, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let start = self.pos;
        let c = self.peek()?;

        let scanned = if c.is_ascii_digit() {
            self.scan_number()
        } else if is_ident_start(c) {
            Ok(self.scan_ident())
        } else {
            self.pos += 1;

            Ok(TokenValue::Symbol(c))
        };

        let span = Span {
            start,
            end: self.pos,
        };

        Some(match scanned {
            Ok(value) => Ok(Token { span, value }),
            Err(kind) => Err(LexerError { span, kind }),
        })
    }
}

impl FusedIterator for Lexer<'_> {}

/// Lexes a whole line into an owned token buffer.
pub fn tokenize(line: &[u8]) -> Result<Vec<Token<'_>>, LexerError> {
    Lexer::new(line).collect()
}
