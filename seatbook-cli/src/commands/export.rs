//! Export command implementation.

use crate::error::CliError;
use crate::output::write_export;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Export all reservations as CSV.
#[derive(Args)]
pub struct ExportCommand {
    /// Write to this file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;
        let reservations = store.list_all();

        match &self.output {
            Some(path) => {
                let file = File::create(path)?;
                write_export(BufWriter::new(file), &reservations)?;
                if !global.quiet {
                    eprintln!(
                        "Exported {} reservation(s) to {}",
                        reservations.len(),
                        path.display()
                    );
                }
            }
            None => {
                let stdout = std::io::stdout();
                write_export(stdout.lock(), &reservations)?;
            }
        }

        Ok(())
    }
}
