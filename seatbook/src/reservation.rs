//! Reservation types for tracking table bookings.
//!
//! This module provides the reservation record itself, the draft used to
//! create or replace one, and the duplicate key that keeps two bookings for
//! the same party, time and seats out of the store.

use chrono::NaiveDateTime;

use crate::record;

/// The user-supplied part of a reservation, before the store assigns an id.
///
/// A draft is what `add` and `update` accept. It carries no id: the store
/// assigns one on `add` and keeps the existing one on `update`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use seatbook::ReservationDraft;
///
/// let time = NaiveDate::from_ymd_opt(2030, 4, 1)
///     .unwrap()
///     .and_hms_opt(19, 0, 0)
///     .unwrap();
/// let draft = ReservationDraft::new("Tanaka", time, 4, "A1");
/// assert_eq!(draft.party_size, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReservationDraft {
    /// Name the booking is held under.
    pub name: String,
    /// Local date and time of the booking.
    pub reservation_time: NaiveDateTime,
    /// Number of guests.
    pub party_size: u32,
    /// Free-form seat label.
    pub seats: String,
}

impl ReservationDraft {
    /// Creates a new draft.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        reservation_time: NaiveDateTime,
        party_size: u32,
        seats: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            reservation_time,
            party_size,
            seats: seats.into(),
        }
    }

    /// Returns the duplicate key for this draft.
    #[must_use]
    pub fn duplicate_key(&self) -> DuplicateKey {
        DuplicateKey::new(&self.name, self.reservation_time, &self.seats)
    }
}

/// A stored reservation.
///
/// Reservations are immutable values; the store replaces them wholesale on
/// update and hands out clones to callers.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use seatbook::{Reservation, ReservationDraft};
///
/// let time = NaiveDate::from_ymd_opt(2030, 4, 1)
///     .unwrap()
///     .and_hms_opt(19, 0, 0)
///     .unwrap();
/// let reservation = Reservation::new(7, ReservationDraft::new("Tanaka", time, 4, "A1"));
///
/// assert_eq!(reservation.id(), 7);
/// assert_eq!(reservation.formatted_time(), "2030-04-01T19:00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    id: u32,
    name: String,
    reservation_time: NaiveDateTime,
    party_size: u32,
    seats: String,
}

impl Reservation {
    /// Creates a reservation with the given id from a draft.
    #[must_use]
    pub fn new(id: u32, draft: ReservationDraft) -> Self {
        Self {
            id,
            name: draft.name,
            reservation_time: draft.reservation_time,
            party_size: draft.party_size,
            seats: draft.seats,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the name the booking is held under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the local date and time of the booking.
    #[must_use]
    pub const fn reservation_time(&self) -> NaiveDateTime {
        self.reservation_time
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn party_size(&self) -> u32 {
        self.party_size
    }

    /// Returns the seat label.
    #[must_use]
    pub fn seats(&self) -> &str {
        &self.seats
    }

    /// Returns the reservation time in ISO-8601 local date-time form.
    ///
    /// This is the representation used by the backing file and matched
    /// against search terms.
    #[must_use]
    pub fn formatted_time(&self) -> String {
        record::format_time(self.reservation_time)
    }

    /// Returns the duplicate key for this reservation.
    #[must_use]
    pub fn duplicate_key(&self) -> DuplicateKey {
        DuplicateKey::new(&self.name, self.reservation_time, &self.seats)
    }

    /// Returns whether the booking time is strictly before `now`.
    #[must_use]
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.reservation_time < now
    }

    /// Returns the user-supplied fields as a draft.
    #[must_use]
    pub fn to_draft(&self) -> ReservationDraft {
        ReservationDraft {
            name: self.name.clone(),
            reservation_time: self.reservation_time,
            party_size: self.party_size,
            seats: self.seats.clone(),
        }
    }
}

impl std::fmt::Display for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} at {} ({} guests, seats {})",
            self.id,
            self.name,
            self.formatted_time(),
            self.party_size,
            self.seats
        )
    }
}

/// The uniqueness key for reservations.
///
/// Two reservations collide when their names match ignoring case, their
/// times are identical, and their seat labels match ignoring case. The id is
/// not part of the key.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use seatbook::DuplicateKey;
///
/// let time = NaiveDate::from_ymd_opt(2030, 4, 1)
///     .unwrap()
///     .and_hms_opt(19, 0, 0)
///     .unwrap();
/// let a = DuplicateKey::new("Tanaka", time, "a1");
/// let b = DuplicateKey::new("TANAKA", time, "A1");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateKey {
    name: String,
    reservation_time: NaiveDateTime,
    seats: String,
}

impl DuplicateKey {
    /// Creates a key, folding name and seats to lowercase.
    #[must_use]
    pub fn new(name: &str, reservation_time: NaiveDateTime, seats: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            reservation_time,
            seats: seats.to_lowercase(),
        }
    }
}

impl std::fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {} (seats {})",
            self.name,
            record::format_time(self.reservation_time),
            self.seats
        )
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for `field`.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod proptests;
