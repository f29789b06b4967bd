//! The reservation store.
//!
//! [`ReservationStore`] keeps every reservation in memory and mirrors the
//! collection to a line-oriented backing file after each mutation.
//!
//! ## Concurrency
//!
//! Readers take a cheap clone of an `Arc` snapshot and never block on
//! writers. Mutations are serialised by a writer lock: each one builds a new
//! collection from the current snapshot, publishes it, and rewrites the
//! backing file while still holding the lock, so saves never interleave.
//! Ids come from an atomic counter that only moves forward.
//!
//! ## Persistence failures
//!
//! A failed save is logged and the in-memory change stands; the next
//! successful save writes it out. Use [`ReservationStore::flush`] to surface
//! save errors to the caller.

mod import;
mod persistence;
mod query;

pub use import::{ImportReport, SkipReason, SkippedLine};
pub use persistence::{load, save, LoadResult};
pub use query::{SearchQuery, SortField, SortOrder};

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use chrono::{Local, NaiveDateTime};

use crate::error::{Error, Result};
use crate::record;
use crate::{Reservation, ReservationDraft};

/// Result of a cleanup of past reservations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupResult {
    /// Number of reservations removed.
    pub removed_count: usize,
    /// Reservations that were removed, in store order.
    pub removed_reservations: Vec<Reservation>,
}

/// Thread-safe reservation store backed by a flat file.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use seatbook::{ReservationDraft, ReservationStore};
///
/// let store = ReservationStore::in_memory();
/// let time = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap().and_hms_opt(18, 0, 0).unwrap();
///
/// let added = store.add(ReservationDraft::new("Tanaka", time, 4, "A1")).unwrap();
/// assert_eq!(added.id(), 1);
///
/// // Same name, time and seats in a different case is a duplicate
/// assert!(store.add(ReservationDraft::new("TANAKA", time, 2, "a1")).is_err());
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug)]
pub struct ReservationStore {
    path: Option<PathBuf>,
    snapshot: RwLock<Arc<Vec<Reservation>>>,
    writer: Mutex<()>,
    id_counter: AtomicU32,
}

impl ReservationStore {
    /// Opens a store backed by the file at `path`, loading whatever it holds.
    ///
    /// The file is created on the first mutation if it does not exist.
    /// Unreadable files and malformed lines are logged and skipped, so
    /// opening never fails.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let loaded = persistence::load(&path);
        if loaded.skipped_lines > 0 {
            log::warn!(
                "{} line(s) in {} could not be read and were skipped",
                loaded.skipped_lines,
                path.display()
            );
        }

        Self {
            path: Some(path),
            snapshot: RwLock::new(Arc::new(loaded.reservations)),
            writer: Mutex::new(()),
            id_counter: AtomicU32::new(loaded.max_id),
        }
    }

    /// Creates an empty store with no backing file.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            snapshot: RwLock::new(Arc::new(Vec::new())),
            writer: Mutex::new(()),
            id_counter: AtomicU32::new(0),
        }
    }

    /// Returns the backing file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Adds a reservation, assigning it the next id.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateReservation` if a reservation with the same
    /// name, time and seats (ignoring case) already exists, or
    /// `Error::IdsExhausted` once an id of `u32::MAX` has been handed out or
    /// imported.
    pub fn add(&self, draft: ReservationDraft) -> Result<Reservation> {
        let _writer = self.lock_writer();
        let current = self.snapshot();

        Self::check_duplicate(&current, &draft, None)?;

        let previous = self
            .id_counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|last| Error::IdsExhausted { last })?;
        let id = previous + 1;
        let reservation = Reservation::new(id, draft);

        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(reservation.clone());
        self.publish(next);

        log::info!("added reservation {reservation}");
        Ok(reservation)
    }

    /// Replaces the fields of reservation `id`, keeping its id and position.
    ///
    /// The duplicate check ignores the reservation being updated.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateReservation` if another reservation shares
    /// the new duplicate key, or `Error::NotFound` if `id` does not exist.
    /// The duplicate check runs first.
    pub fn update(&self, id: u32, draft: ReservationDraft) -> Result<Reservation> {
        let _writer = self.lock_writer();
        let current = self.snapshot();

        Self::check_duplicate(&current, &draft, Some(id))?;

        let index = current
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| not_found(id))?;

        let reservation = Reservation::new(id, draft);
        let mut next = current.as_ref().clone();
        next[index] = reservation.clone();
        self.publish(next);

        log::info!("updated reservation {reservation}");
        Ok(reservation)
    }

    /// Removes reservation `id`, returning it.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if `id` does not exist.
    pub fn delete(&self, id: u32) -> Result<Reservation> {
        let _writer = self.lock_writer();
        let current = self.snapshot();

        let index = current
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| not_found(id))?;

        let mut next = current.as_ref().clone();
        let removed = next.remove(index);
        self.publish(next);

        log::info!("deleted reservation {removed}");
        Ok(removed)
    }

    /// Removes every reservation whose time is before the current local time.
    pub fn cleanup_past(&self) -> CleanupResult {
        self.cleanup_past_at(Local::now().naive_local())
    }

    /// Removes every reservation whose time is strictly before `now`.
    ///
    /// The backing file is only rewritten when something was removed.
    pub fn cleanup_past_at(&self, now: NaiveDateTime) -> CleanupResult {
        let _writer = self.lock_writer();
        let current = self.snapshot();

        let (removed, kept): (Vec<Reservation>, Vec<Reservation>) =
            current.iter().cloned().partition(|r| r.is_past(now));

        if !removed.is_empty() {
            self.publish(kept);
            log::info!("removed {} past reservation(s)", removed.len());
        }

        CleanupResult {
            removed_count: removed.len(),
            removed_reservations: removed,
        }
    }

    /// Returns the reservations a cleanup at `now` would remove, without
    /// removing them.
    #[must_use]
    pub fn past_reservations_at(&self, now: NaiveDateTime) -> Vec<Reservation> {
        self.snapshot()
            .iter()
            .filter(|r| r.is_past(now))
            .cloned()
            .collect()
    }

    /// Returns the reservations matching `query`, sorted as it asks.
    #[must_use]
    pub fn search_and_sort(&self, query: &SearchQuery) -> Vec<Reservation> {
        query.apply(&self.snapshot())
    }

    /// Imports record lines from `reader`.
    ///
    /// Every line is read before the store changes, so a read error leaves
    /// it untouched. Lines are then applied one by one (see [`SkipReason`]
    /// for what is skipped; a line that is not UTF-8 counts as invalid) and
    /// the backing file is rewritten once at the end. The id counter is
    /// raised past the highest imported id.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading from `reader` fails.
    pub fn import<R: BufRead>(&self, reader: R) -> Result<ImportReport> {
        let lines = record::read_lines(reader)?;

        let _writer = self.lock_writer();
        let current = self.snapshot();

        let (next, report, max_id) = import::merge_lines(&current, &lines);
        self.id_counter.fetch_max(max_id, Ordering::SeqCst);
        self.publish(next);

        log::info!(
            "imported {} reservation(s), skipped {} line(s)",
            report.imported_count(),
            report.skipped_count()
        );
        Ok(report)
    }

    /// Returns every reservation in store order.
    #[must_use]
    pub fn list_all(&self) -> Vec<Reservation> {
        self.snapshot().as_ref().clone()
    }

    /// Returns reservation `id`, if present.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<Reservation> {
        self.snapshot().iter().find(|r| r.id() == id).cloned()
    }

    /// Returns the number of reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Returns whether the store holds no reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Writes the current collection to the backing file.
    ///
    /// Does nothing for an in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be written.
    pub fn flush(&self) -> Result<()> {
        let _writer = self.lock_writer();
        if let Some(path) = &self.path {
            persistence::save(path, &self.snapshot())?;
        }
        Ok(())
    }

    fn snapshot(&self) -> Arc<Vec<Reservation>> {
        let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Caller must hold the writer lock.
    fn publish(&self, next: Vec<Reservation>) {
        let next = Arc::new(next);
        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::clone(&next);

        if let Some(path) = &self.path {
            if let Err(e) = persistence::save(path, &next) {
                log::error!("error saving reservations to {}: {e}", path.display());
            }
        }
    }

    fn check_duplicate(
        current: &[Reservation],
        draft: &ReservationDraft,
        exclude_id: Option<u32>,
    ) -> Result<()> {
        let key = draft.duplicate_key();
        match current
            .iter()
            .filter(|r| Some(r.id()) != exclude_id)
            .find(|r| r.duplicate_key() == key)
        {
            Some(existing) => Err(Error::DuplicateReservation {
                details: format!("{key} is already held by reservation #{}", existing.id()),
            }),
            None => Ok(()),
        }
    }
}

fn not_found(id: u32) -> Error {
    Error::NotFound {
        resource: format!("reservation #{id}"),
    }
}
