mod cursor;
mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use lexer::{tokenize, Lexer, LexerError, LexerErrorKind};
