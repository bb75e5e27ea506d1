use std::io;

use clap::Parser as ClapParser;

use crate::repl::Repl;

/// Reads lines of mathematical input and reports which ones are equations,
/// whether they use a single variable and what their degree is.
#[derive(ClapParser, Debug, Clone)]
#[command(version)]
pub struct EqrecCli {
    /// Print the token list of every line before classifying it
    #[arg(long)]
    pub dump_tokens: bool,
}

impl EqrecCli {
    pub fn run(self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();

        Repl::new()
            .with_dump_tokens(self.dump_tokens)
            .run(stdin.lock(), stdout.lock())
    }
}
