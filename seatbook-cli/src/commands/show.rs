//! Show command implementation.

use crate::error::CliError;
use crate::output::write_reservations;
use crate::utils::{load_configuration, not_found, open_store, GlobalOptions};
use clap::Args;
use seatbook::OutputFormat;

/// Show a single reservation.
#[derive(Args)]
pub struct ShowCommand {
    /// Reservation id
    pub id: u32,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let reservation = store.get(self.id).ok_or_else(|| not_found(Some(self.id)))?;
        let format = self.format.unwrap_or_else(|| config.output_format());

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_reservations(&mut handle, &[reservation], format)
    }
}
