//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Checks a merged configuration.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the page size is zero or the data
    /// file path is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::config::{Config, ConfigValidator};
    ///
    /// let bad = Config { page_size: Some(0), ..Default::default() };
    /// assert!(ConfigValidator::validate(&bad).is_err());
    /// assert!(ConfigValidator::validate(&Config::with_defaults()).is_ok());
    /// ```
    pub fn validate(config: &Config) -> Result<()> {
        if config.page_size == Some(0) {
            return Err(Error::Validation {
                field: "page_size".into(),
                message: "must be at least 1".into(),
            });
        }

        if config
            .data_file
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(Error::Validation {
                field: "data_file".into(),
                message: "cannot be empty".into(),
            });
        }

        Ok(())
    }
}
