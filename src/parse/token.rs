use std::fmt;

use byte_string::ByteStr;

use crate::position::Span;

/// One lexical unit of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'buf> {
    pub span: Span,
    pub value: TokenValue<'buf>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TokenValue<'buf> {
    /// A run of ASCII digits. Never negative: a leading sign lexes as its own
    /// `Symbol` token.
    Number(i32),

    /// An ASCII letter followed by letters and digits.
    Ident(&'buf [u8]),

    /// Any other non-whitespace byte.
    Symbol(u8),
}

impl fmt::Debug for TokenValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.debug_tuple("Number").field(value).finish(),
            Self::Ident(name) => f.debug_tuple("Ident").field(&ByteStr::new(name)).finish(),
            Self::Symbol(c) => f.debug_tuple("Symbol").field(&char::from(*c)).finish(),
        }
    }
}
