use crate::parse::token::{Token, TokenValue};

/// A read position within a lexed line.
///
/// Cursors are cheap values over a shared token buffer: cloning one yields an
/// independent position, which is how each full-stream pass gets its own view
/// without disturbing anyone else's. The buffer itself is never mutated.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the index of the token `peek` would return.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.pos)
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.tokens.len()
    }

    /// Consumes a number token. On anything else the cursor does not move.
    pub fn accept_number(&mut self) -> Option<i32> {
        match self.peek()?.value {
            TokenValue::Number(value) => {
                self.pos += 1;

                Some(value)
            }

            _ => None,
        }
    }

    /// Consumes an identifier token. On anything else the cursor does not
    /// move.
    pub fn accept_ident(&mut self) -> Option<&'a [u8]> {
        match self.peek()?.value {
            TokenValue::Ident(name) => {
                self.pos += 1;

                Some(name)
            }

            _ => None,
        }
    }

    /// Consumes the given symbol token. On anything else the cursor does not
    /// move.
    pub fn accept_symbol(&mut self, symbol: u8) -> bool {
        match self.peek() {
            Some(token) if token.value == TokenValue::Symbol(symbol) => {
                self.pos += 1;

                true
            }

            _ => false,
        }
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.peek()?;
        self.pos += 1;

        Some(token)
    }
}
