//! Utility functions for CLI operations.
//!
//! Data directory resolution, configuration loading, opening the store and
//! mapping library results to user-facing messages.

use crate::error::CliError;
use chrono::{Local, NaiveDateTime};
use seatbook::config::default_data_dir;
use seatbook::validation::DUPLICATE;
use seatbook::{Config, ConfigBuilder, Error as LibError, ReservationStore, ValidationError};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the backing file location.
    pub data_file: Option<PathBuf>,
}

/// Resolve the data directory: `--data-dir` if given, else `~/.seatbook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load configuration from defaults, `{data_dir}/config.yaml` and the
/// environment.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the backing file: `--data-file` wins over configuration.
pub fn resolve_data_file(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    if let Some(file) = &global.data_file {
        return Ok(file.clone());
    }
    let data_dir = resolve_data_dir(global)?;
    Ok(config.resolve_data_file(&data_dir))
}

/// Open the reservation store.
pub fn open_store(global: &GlobalOptions, config: &Config) -> Result<ReservationStore, CliError> {
    let path = resolve_data_file(global, config)?;
    if global.verbose {
        eprintln!("Using data file {}", path.display());
    }
    Ok(ReservationStore::open(path))
}

/// The current local date and time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Turn a form validation failure into a user-facing error.
pub fn form_error(err: ValidationError) -> CliError {
    CliError::SemanticFailure(err.message)
}

/// Turn a store mutation failure into a user-facing error.
pub fn store_error(err: LibError, id: Option<u32>) -> CliError {
    match err {
        LibError::DuplicateReservation { .. } => CliError::SemanticFailure(DUPLICATE.to_string()),
        LibError::NotFound { .. } => not_found(id),
        other => CliError::from(other),
    }
}

/// The error for an unknown reservation id.
pub fn not_found(id: Option<u32>) -> CliError {
    match id {
        Some(id) => CliError::SemanticFailure(format!("reservation {id} not found")),
        None => CliError::SemanticFailure("reservation not found".to_string()),
    }
}
