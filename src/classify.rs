use std::fmt::{self, Display};

use tracing::{debug, instrument};

use crate::parse::token::Token;
use crate::parse::{self, Cursor};
use crate::recognize;

/// The verdict for one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    NotAnEquation,
    NotInOneVariable,
    InOneVariable { degree: i32 },
}

impl Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnEquation => write!(f, "this is not an equation"),
            Self::NotInOneVariable => write!(f, "this is an equation, but not in 1 variable"),

            Self::InOneVariable { degree } => {
                write!(f, "this is an equation in 1 variable of degree {}", degree)
            }
        }
    }
}

/// Classifies a lexed line.
///
/// Every pass walks its cursor destructively, so each one gets a fresh cursor
/// over the same buffer. The buffer itself is never touched: classifying a
/// token buffer twice yields the same verdict.
#[instrument(level = "debug", ret, skip(tokens), fields(len = tokens.len()))]
pub fn classify(tokens: &[Token<'_>]) -> Classification {
    if !recognize::accept_equation(&mut Cursor::new(tokens)) {
        return Classification::NotAnEquation;
    }

    if !recognize::validate_exponents(&mut Cursor::new(tokens)) {
        return Classification::NotAnEquation;
    }

    if !recognize::accept_single_variable(&mut Cursor::new(tokens)) {
        return Classification::NotInOneVariable;
    }

    let degree = recognize::compute_degree(&mut Cursor::new(tokens));

    Classification::InOneVariable { degree }
}

/// Tokenizes and classifies a raw line. A line that does not even lex is no
/// equation either.
pub fn classify_line(line: &[u8]) -> Classification {
    match parse::tokenize(line) {
        Ok(tokens) => classify(&tokens),

        Err(err) => {
            debug!(%err, "discarding a line that failed to tokenize");

            Classification::NotAnEquation
        }
    }
}
