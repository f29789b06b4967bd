//! Update command implementation.

use crate::commands::add::ReservationFields;
use crate::error::CliError;
use crate::utils::{form_error, load_configuration, now, open_store, store_error, GlobalOptions};
use clap::Args;

/// Replace the details of a reservation.
#[derive(Args)]
pub struct UpdateCommand {
    /// Reservation id
    pub id: u32,

    #[command(flatten)]
    pub fields: ReservationFields,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let draft = self.fields.into_form().validate(now()).map_err(form_error)?;

        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let reservation = store
            .update(self.id, draft)
            .map_err(|e| store_error(e, Some(self.id)))?;
        store.flush()?;

        if !global.quiet {
            eprintln!("Updated reservation {reservation}");
        }

        Ok(())
    }
}
