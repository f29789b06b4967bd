//! Common test utilities for integration tests.

use std::path::PathBuf;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use tempfile::TempDir;

use seatbook::{ReservationDraft, ReservationStore};

/// A store backed by a file in a temporary directory.
///
/// The directory is removed when the value is dropped.
#[allow(dead_code)]
pub struct TempStore {
    pub dir: TempDir,
    pub path: PathBuf,
    pub store: ReservationStore,
}

#[allow(dead_code)]
impl TempStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temporary directory");
        let path = dir.path().join("reservations.dat");
        let store = ReservationStore::open(&path);
        Self { dir, path, store }
    }

    /// Opens a second store on the same backing file.
    pub fn reopen(&self) -> ReservationStore {
        ReservationStore::open(&self.path)
    }
}

/// A fixed date-time in 2030.
#[allow(dead_code)]
pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 4, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// The current local time shifted by `hours`, truncated to whole seconds.
#[allow(dead_code)]
pub fn hours_from_now(hours: i64) -> NaiveDateTime {
    let time = Local::now().naive_local() + Duration::hours(hours);
    time.with_nanosecond(0).unwrap_or(time)
}

/// Builder for test drafts with sensible defaults.
#[allow(dead_code)]
pub struct DraftFixture {
    name: String,
    time: NaiveDateTime,
    party_size: u32,
    seats: String,
}

#[allow(dead_code)]
impl DraftFixture {
    pub fn new() -> Self {
        Self {
            name: "Tanaka".to_string(),
            time: at(1, 19, 0),
            party_size: 2,
            seats: "A1".to_string(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn time(mut self, time: NaiveDateTime) -> Self {
        self.time = time;
        self
    }

    pub fn party_size(mut self, party_size: u32) -> Self {
        self.party_size = party_size;
        self
    }

    pub fn seats(mut self, seats: &str) -> Self {
        self.seats = seats.to_string();
        self
    }

    pub fn build(self) -> ReservationDraft {
        ReservationDraft::new(self.name, self.time, self.party_size, self.seats)
    }
}
