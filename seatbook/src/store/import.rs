//! Bulk import of record lines.
//!
//! Lines use the same format as the backing file. Each line is tried on its
//! own: malformed lines, lines whose id already exists and lines that collide
//! with an existing reservation on the duplicate key are skipped without
//! failing the batch.

use std::collections::HashSet;
use std::fmt;

use crate::record;
use crate::reservation::DuplicateKey;
use crate::Reservation;

/// Why an import line was not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The line did not parse as a record.
    Invalid {
        /// Parser message.
        reason: String,
    },
    /// A reservation with this id is already present.
    ExistingId {
        /// The conflicting id.
        id: u32,
    },
    /// A reservation with the same name, time and seats is already present.
    Duplicate {
        /// The conflicting key.
        key: DuplicateKey,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { reason } => write!(f, "{reason}"),
            Self::ExistingId { id } => write!(f, "id {id} already exists"),
            Self::Duplicate { key } => write!(f, "duplicate of existing reservation {key}"),
        }
    }
}

/// A line that was left out of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// One-based line number in the input.
    pub line_number: usize,
    /// The raw line.
    pub content: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Reservations added, in input order.
    pub imported: Vec<Reservation>,
    /// Lines that were skipped, in input order.
    pub skipped: Vec<SkippedLine>,
}

impl ImportReport {
    /// Number of reservations added.
    #[must_use]
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }

    /// Number of lines skipped for any reason.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Number of lines skipped because they did not parse.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::Invalid { .. }))
            .count()
    }
}

/// Applies `lines` on top of `current`.
///
/// Returns the new collection, the report and the highest id imported (0 if
/// none). Blank lines are ignored without being reported.
pub(crate) fn merge_lines(
    current: &[Reservation],
    lines: &[Vec<u8>],
) -> (Vec<Reservation>, ImportReport, u32) {
    let mut ids: HashSet<u32> = current.iter().map(Reservation::id).collect();
    let mut keys: HashSet<DuplicateKey> = current.iter().map(Reservation::duplicate_key).collect();
    let mut next = current.to_vec();
    let mut report = ImportReport::default();
    let mut max_id = 0;

    for (index, raw) in lines.iter().enumerate() {
        let line_number = index + 1;
        let line = String::from_utf8_lossy(raw);
        if line.trim().is_empty() {
            continue;
        }

        let reason = match record::decode_line(raw).and_then(record::parse_line) {
            Err(e) => {
                log::warn!("skipping invalid import line {line_number}: {line} - {e}");
                SkipReason::Invalid {
                    reason: e.to_string(),
                }
            }
            Ok(reservation) => {
                let key = reservation.duplicate_key();
                if keys.contains(&key) {
                    log::debug!("skipping duplicate import line {line_number}: {key}");
                    SkipReason::Duplicate { key }
                } else if ids.contains(&reservation.id()) {
                    log::debug!(
                        "skipping import line {line_number}: id {} already exists",
                        reservation.id()
                    );
                    SkipReason::ExistingId {
                        id: reservation.id(),
                    }
                } else {
                    ids.insert(reservation.id());
                    keys.insert(key);
                    max_id = max_id.max(reservation.id());
                    next.push(reservation.clone());
                    report.imported.push(reservation);
                    continue;
                }
            }
        };

        report.skipped.push(SkippedLine {
            line_number,
            content: line.into_owned(),
            reason,
        });
    }

    (next, report, max_id)
}
