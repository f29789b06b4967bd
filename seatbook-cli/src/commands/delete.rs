//! Delete command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, store_error, GlobalOptions};
use clap::Args;

/// Delete a reservation.
#[derive(Args)]
pub struct DeleteCommand {
    /// Reservation id
    pub id: u32,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let removed = store
            .delete(self.id)
            .map_err(|e| store_error(e, Some(self.id)))?;
        store.flush()?;

        if !global.quiet {
            eprintln!("Deleted reservation {removed}");
        }

        Ok(())
    }
}
