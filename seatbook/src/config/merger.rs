//! Configuration merging.

use crate::config::schema::Config;

/// Layers configurations on top of each other.
///
/// # Examples
///
/// ```
/// use seatbook::config::{Config, ConfigMerger};
///
/// let mut result = Config { page_size: Some(5), ..Default::default() };
/// let high = Config { page_size: Some(20), ..Default::default() };
///
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.page_size, Some(20));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merges `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.data_file.is_some() {
            target.data_file.clone_from(&source.data_file);
        }

        if source.page_size.is_some() {
            target.page_size = source.page_size;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
