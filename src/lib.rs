pub mod classify;
pub mod cli;
pub mod parse;
pub mod position;
pub mod recognize;
pub mod repl;
