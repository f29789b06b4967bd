//! Library exports for seatbook-cli.
//!
//! Exposes the CLI structure so tools such as completion generators can
//! inspect it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod utils;

pub use cli::Cli;
