//! List command implementation.
//!
//! This module implements the `list` command, which searches, sorts and
//! pages through reservations and prints one page in the chosen format.

use crate::error::CliError;
use crate::output::write_reservations;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use seatbook::{paginate, Error as LibError, OutputFormat, SearchQuery};

/// List reservations, one page at a time.
#[derive(Args)]
pub struct ListCommand {
    /// Show only reservations whose name or time contains this text
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Sort by `name` or `time` (anything else keeps insertion order)
    #[arg(long, value_name = "FIELD")]
    pub sort_by: Option<String>,

    /// Sort order: `desc` for descending, anything else ascending
    #[arg(long, value_name = "ORDER")]
    pub order: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Reservations per page (defaults to the configured page size)
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;

        let query = SearchQuery::from_params(
            self.search.as_deref(),
            self.sort_by.as_deref(),
            self.order.as_deref(),
        );
        let matches = store.search_and_sort(&query);

        let page_size = self.page_size.unwrap_or_else(|| config.page_size());
        let page = paginate(matches, self.page, page_size).map_err(|e| match e {
            LibError::Validation { message, .. } => CliError::InvalidArguments(message),
            other => CliError::from(other),
        })?;

        let format = self.format.unwrap_or_else(|| config.output_format());
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_reservations(&mut handle, &page.items, format)?;

        if !global.quiet {
            eprintln!(
                "Page {} of {} ({} reservations)",
                page.page,
                page.page_count.max(1),
                page.total
            );
        }

        Ok(())
    }
}
