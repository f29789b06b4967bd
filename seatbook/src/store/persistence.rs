//! Backing-file load and save.
//!
//! Loading is tolerant: malformed lines are skipped with a warning and an
//! unreadable file yields an empty collection. Saving rewrites the whole file
//! through a sibling temporary file that is renamed into place.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::record;
use crate::Reservation;

/// Summary of a load from the backing file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResult {
    /// Reservations read from the file, in file order.
    pub reservations: Vec<Reservation>,
    /// Number of non-blank lines that could not be parsed.
    pub skipped_lines: usize,
    /// Highest id seen, or 0 for an empty or missing file.
    pub max_id: u32,
}

/// Loads reservations from `path`.
///
/// A missing file is an empty store. Read failures are logged and whatever
/// was read before the failure is kept.
pub fn load(path: &Path) -> LoadResult {
    let mut result = LoadResult::default();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no data file at {}, starting empty", path.display());
            return result;
        }
        Err(e) => {
            log::error!("error loading reservations from {}: {e}", path.display());
            return result;
        }
    };

    for (index, raw) in BufReader::new(file).split(b'\n').enumerate() {
        let raw = match raw {
            Ok(raw) => record::strip_carriage_return(raw),
            Err(e) => {
                log::error!("error loading reservations from {}: {e}", path.display());
                break;
            }
        };

        let line = String::from_utf8_lossy(&raw);
        if line.trim().is_empty() {
            continue;
        }

        match record::decode_line(&raw).and_then(record::parse_line) {
            Ok(reservation) => {
                result.max_id = result.max_id.max(reservation.id());
                result.reservations.push(reservation);
            }
            Err(e) => {
                log::warn!(
                    "skipping invalid data file line {}: {line} - {e}",
                    index + 1
                );
                result.skipped_lines += 1;
            }
        }
    }

    log::info!(
        "loaded {} reservation(s) from {}",
        result.reservations.len(),
        path.display()
    );
    result
}

/// Writes all reservations to `path`, replacing its contents.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns any I/O error from creating, writing or renaming the file.
pub fn save(path: &Path, reservations: &[Reservation]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path_for(path);
    {
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        for reservation in reservations {
            writeln!(writer, "{}", record::format_line(reservation))?;
        }
        writer.flush()?;
    }
    fs::rename(&temp_path, path)?;

    log::debug!(
        "saved {} reservation(s) to {}",
        reservations.len(),
        path.display()
    );
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
