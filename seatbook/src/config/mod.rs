//! Configuration system for seatbook.
//!
//! Configuration comes from these sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SEATBOOK_*`)
//! 3. The config file, `{data_dir}/config.yaml`
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use seatbook::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir(Path::new("/var/lib/seatbook"))
//!     .build()
//!     .unwrap();
//!
//! println!("page size: {}", config.page_size());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, DEFAULT_DATA_FILE};
pub use validator::ConfigValidator;
