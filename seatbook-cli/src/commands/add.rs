//! Add command implementation.

use crate::error::CliError;
use crate::utils::{form_error, load_configuration, now, open_store, store_error, GlobalOptions};
use clap::Args;
use seatbook::ReservationForm;

/// Reservation details as typed on the command line.
///
/// All fields are optional here so that missing ones are reported with the
/// same messages as any other invalid input.
#[derive(Args, Debug, Clone)]
pub struct ReservationFields {
    /// Name the reservation is held under
    #[arg(long)]
    pub name: Option<String>,

    /// Date and time, e.g. 2030-04-01T19:00
    #[arg(long, value_name = "DATETIME")]
    pub time: Option<String>,

    /// Number of guests
    #[arg(long, value_name = "N")]
    pub party_size: Option<String>,

    /// Seat label
    #[arg(long)]
    pub seats: Option<String>,
}

impl ReservationFields {
    /// Convert to a form for validation.
    pub fn into_form(self) -> ReservationForm {
        ReservationForm {
            name: self.name,
            reservation_time: self.time,
            party_size: self.party_size,
            seats: self.seats,
        }
    }
}

/// Add a reservation.
#[derive(Args)]
pub struct AddCommand {
    #[command(flatten)]
    pub fields: ReservationFields,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let draft = self.fields.into_form().validate(now()).map_err(form_error)?;

        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let reservation = store.add(draft).map_err(|e| store_error(e, None))?;
        store.flush()?;

        println!("{}", reservation.id());
        if !global.quiet {
            eprintln!("Added reservation {reservation}");
        }

        Ok(())
    }
}
