//! Environment variable overrides.

use std::env;
use std::path::PathBuf;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Overrides the backing file path.
pub const DATA_FILE_ENV: &str = "SEATBOOK_DATA_FILE";
/// Overrides the listing page size.
pub const PAGE_SIZE_ENV: &str = "SEATBOOK_PAGE_SIZE";
/// Overrides the listing output format.
pub const OUTPUT_FORMAT_ENV: &str = "SEATBOOK_OUTPUT_FORMAT";

/// Handles `SEATBOOK_*` environment variable overrides.
///
/// # Examples
///
/// ```no_run
/// use seatbook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Applies any set `SEATBOOK_*` variables to `config`.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if a page size is not a number or an
    /// output format is unknown.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(file) = Self::var(DATA_FILE_ENV) {
            config.data_file = Some(PathBuf::from(file));
        }

        if let Some(size) = Self::var(PAGE_SIZE_ENV) {
            config.page_size = Some(size.trim().parse().map_err(|_| Error::Validation {
                field: PAGE_SIZE_ENV.into(),
                message: "must be a positive integer".into(),
            })?);
        }

        if let Some(format) = Self::var(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(OutputFormat::parse(&format).ok_or_else(|| Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message: format!("unknown output format '{format}'"),
                })?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }
}
