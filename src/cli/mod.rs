//! CLI module - argument parsing, interactive prompts and the transfer wizard

mod args;
pub mod events;
mod prompts;
pub mod runner;
pub mod screen;
pub mod theme;
pub mod wizard;

pub use args::Cli;
pub use prompts::*;
