//! Import command implementation.
//!
//! Reads record lines (`id,name,time,party_size,seats`) from a file or stdin
//! and merges them into the store. Bad lines are reported, not fatal.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use seatbook::{ImportReport, SkipReason};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Import reservations from record lines.
#[derive(Args)]
pub struct ImportCommand {
    /// File to read, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

impl ImportCommand {
    /// Execute the import command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let report = if self.input.as_os_str() == "-" {
            store.import(io::stdin().lock())?
        } else {
            let file = File::open(&self.input).map_err(|e| {
                CliError::Io(io::Error::new(
                    e.kind(),
                    format!("cannot open {}: {e}", self.input.display()),
                ))
            })?;
            store.import(BufReader::new(file))?
        };
        store.flush()?;

        print_report(&report, global);
        Ok(())
    }
}

fn print_report(report: &ImportReport, global: &GlobalOptions) {
    println!(
        "Imported {} reservation(s), skipped {} line(s)",
        report.imported_count(),
        report.skipped_count()
    );

    if global.verbose {
        for skipped in &report.skipped {
            let kind = match skipped.reason {
                SkipReason::Invalid { .. } => "invalid",
                SkipReason::ExistingId { .. } | SkipReason::Duplicate { .. } => "already present",
            };
            eprintln!(
                "  - line {} ({kind}): {}",
                skipped.line_number, skipped.reason
            );
        }
    }
}
