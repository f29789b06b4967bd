//! Configuration schema definitions.
//!
//! Every field is optional so that partial configurations from different
//! sources can be layered on top of each other.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::page::DEFAULT_PAGE_SIZE;

/// Name of the backing file inside the data directory when none is
/// configured.
pub const DEFAULT_DATA_FILE: &str = "reservations.dat";

/// Complete seatbook configuration.
///
/// # Examples
///
/// ```
/// use seatbook::config::{Config, OutputFormat};
///
/// let yaml = r#"
/// page_size: 10
/// output_format: json
/// "#;
/// let config: Config = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.page_size, Some(10));
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Backing file path. Relative paths are taken from the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Number of reservations per listing page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// Default output format for listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the built-in defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            data_file: None,
            page_size: Some(DEFAULT_PAGE_SIZE),
            output_format: Some(OutputFormat::Table),
        }
    }

    /// Returns the configured page size, or the default.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Returns the configured output format, or `table`.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or(OutputFormat::Table)
    }

    /// Resolves the backing file against `data_dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::config::Config;
    /// use std::path::{Path, PathBuf};
    ///
    /// let config = Config::default();
    /// assert_eq!(
    ///     config.resolve_data_file(Path::new("/srv/seatbook")),
    ///     PathBuf::from("/srv/seatbook/reservations.dat")
    /// );
    ///
    /// let config = Config { data_file: Some("/tmp/other.dat".into()), ..Config::default() };
    /// assert_eq!(
    ///     config.resolve_data_file(Path::new("/srv/seatbook")),
    ///     PathBuf::from("/tmp/other.dat")
    /// );
    /// ```
    #[must_use]
    pub fn resolve_data_file(&self, data_dir: &Path) -> PathBuf {
        match &self.data_file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => data_dir.join(file),
            None => data_dir.join(DEFAULT_DATA_FILE),
        }
    }
}

/// Output format for listings.
///
/// # Examples
///
/// ```
/// use seatbook::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// assert_eq!(OutputFormat::parse("TSV"), Some(OutputFormat::Tsv));
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
    /// Comma-separated values with a header row.
    Csv,
    /// Tab-separated values with a header row.
    Tsv,
}

impl OutputFormat {
    /// Parses a format name (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}
