//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, CleanupCommand, CompletionsCommand, DeleteCommand, ExportCommand, ImportCommand,
    ListCommand, ShowCommand, UpdateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing table reservations.
#[derive(Parser)]
#[command(name = "seatbook")]
#[command(version, about = "Manage dated table reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SEATBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the reservations file location
    #[arg(long, value_name = "PATH", global = true, env = "SEATBOOK_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List reservations, one page at a time
    List(ListCommand),

    /// Show a single reservation
    Show(ShowCommand),

    /// Add a reservation
    Add(AddCommand),

    /// Replace the details of a reservation
    Update(UpdateCommand),

    /// Delete a reservation
    Delete(DeleteCommand),

    /// Import reservations from record lines
    Import(ImportCommand),

    /// Export all reservations as CSV
    Export(ExportCommand),

    /// Remove reservations whose time has passed
    Cleanup(CleanupCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
