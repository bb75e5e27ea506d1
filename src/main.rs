use std::io;

use clap::Parser as ClapParser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;

use eqrec::cli::EqrecCli;

const LOG_ENV_NAME: &str = "EQREC_LOG";

pub fn main() -> io::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_ENV_NAME)
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    EqrecCli::parse().run()
}
