//! Cleanup command implementation.
//!
//! Removes reservations whose time is before now.

use crate::error::CliError;
use crate::utils::{load_configuration, now, open_store, GlobalOptions};
use clap::Args;

/// Remove reservations whose time has passed.
#[derive(Args)]
pub struct CleanupCommand {
    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanupCommand {
    /// Execute the cleanup command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(global, &config)?;
        let now = now();

        let removed = if self.dry_run {
            store.past_reservations_at(now)
        } else {
            let result = store.cleanup_past_at(now);
            if result.removed_count > 0 {
                store.flush()?;
            }
            result.removed_reservations
        };

        if global.quiet {
            if !removed.is_empty() {
                println!("{}", removed.len());
            }
            return Ok(());
        }

        if self.dry_run {
            eprintln!("[DRY RUN] Would remove {} past reservation(s)", removed.len());
        } else {
            eprintln!("Removed {} past reservation(s)", removed.len());
        }

        if global.verbose {
            for reservation in &removed {
                eprintln!("  - {reservation}");
            }
        }

        Ok(())
    }
}
