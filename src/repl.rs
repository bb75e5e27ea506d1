use std::io::{self, BufRead, Write};

use itertools::Itertools;
use tracing::debug;

use crate::classify::{self, Classification};
use crate::parse;
use crate::parse::token::{Token, TokenValue};

pub const PROMPT: &str = "give an equation: ";

/// The interactive classification loop.
#[derive(Debug, Clone, Default)]
pub struct Repl {
    dump_tokens: bool,
}

impl Repl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints the token list of every line before its verdict.
    pub fn with_dump_tokens(mut self, dump_tokens: bool) -> Self {
        self.dump_tokens = dump_tokens;

        self
    }

    /// Drives the prompt/read/classify loop until a sentinel line or the end
    /// of the input. All surface text goes to `out`; diagnostics stay on the
    /// tracing subscriber.
    pub fn run(&self, mut input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        let mut line = Vec::new();

        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            line.clear();

            if input.read_until(b'\n', &mut line)? == 0 {
                // out of input; only the sentinel earns a farewell
                return Ok(());
            }

            let line = trim_line_ending(&line);

            if line.first() == Some(&b'!') {
                writeln!(out, "good bye")?;

                return Ok(());
            }

            self.classify_and_report(line, &mut out)?;
        }
    }

    fn classify_and_report(&self, line: &[u8], out: &mut impl Write) -> io::Result<()> {
        let verdict = match parse::tokenize(line) {
            Ok(tokens) => {
                if self.dump_tokens {
                    writeln!(out, "{}", render_tokens(&tokens))?;
                }

                classify::classify(&tokens)
            }

            Err(err) => {
                debug!(%err, "discarding a line that failed to tokenize");

                Classification::NotAnEquation
            }
        };

        writeln!(out, "{}", verdict)
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);

    line.strip_suffix(b"\r").unwrap_or(line)
}

fn render_tokens(tokens: &[Token<'_>]) -> String {
    let rendered = tokens
        .iter()
        .map(|token| match token.value {
            TokenValue::Number(value) => format!("Number({})", value),
            TokenValue::Ident(name) => format!("Ident({})", String::from_utf8_lossy(name)),
            TokenValue::Symbol(c) => format!("Symbol({})", char::from(c)),
        })
        .join(", ");

    format!("[{}]", rendered)
}
