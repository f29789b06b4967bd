//! Validation of raw reservation input.
//!
//! Callers that take reservations from people (the CLI, a web form) hand the
//! raw strings to [`ReservationForm::validate`] and get back either a draft
//! ready for the store or the first problem found, with a message fit to
//! show the user.

use chrono::NaiveDateTime;

use crate::record;
use crate::reservation::{ReservationDraft, ValidationError};

/// Message for a missing or non-numeric party size.
pub const PARTY_SIZE_REQUIRED: &str = "party size is required";
/// Message for a party size of zero.
pub const PARTY_SIZE_POSITIVE: &str = "party size must be at least 1";
/// Message for a missing name.
pub const NAME_REQUIRED: &str = "name is required";
/// Message for a missing reservation time.
pub const TIME_REQUIRED: &str = "reservation time is required";
/// Message for a missing seat label.
pub const SEATS_REQUIRED: &str = "seats are required";
/// Message for a reservation time that does not parse.
pub const TIME_INVALID: &str = "enter a valid date and time";
/// Message for a reservation time before now.
pub const TIME_IN_PAST: &str = "past dates and times cannot be selected";
/// Message shown when the store rejects a duplicate.
pub const DUPLICATE: &str = "a reservation with the same name, time and seats already exists";

/// Raw, unvalidated reservation input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationForm {
    /// Name the booking is held under.
    pub name: Option<String>,
    /// Date and time as typed, `YYYY-MM-DDTHH:MM[:SS]`.
    pub reservation_time: Option<String>,
    /// Party size as typed.
    pub party_size: Option<String>,
    /// Seat label.
    pub seats: Option<String>,
}

impl ReservationForm {
    /// Validates the form against the current time `now`.
    ///
    /// Checks run in a fixed order and the first failure wins: party size,
    /// name, time present, seats, time parses, time not in the past. Name
    /// and seats are trimmed.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the offending field.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use seatbook::validation::{ReservationForm, TIME_IN_PAST};
    ///
    /// let now = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
    /// let form = ReservationForm {
    ///     name: Some("Tanaka".into()),
    ///     reservation_time: Some("2029-12-31T19:00".into()),
    ///     party_size: Some("4".into()),
    ///     seats: Some("A1".into()),
    /// };
    ///
    /// let err = form.validate(now).unwrap_err();
    /// assert_eq!(err.message, TIME_IN_PAST);
    /// ```
    pub fn validate(&self, now: NaiveDateTime) -> Result<ReservationDraft, ValidationError> {
        let party_size = match non_blank(self.party_size.as_deref()).map(str::parse::<u32>) {
            Some(Ok(size)) => size,
            _ => return Err(ValidationError::new("party_size", PARTY_SIZE_REQUIRED)),
        };
        if party_size == 0 {
            return Err(ValidationError::new("party_size", PARTY_SIZE_POSITIVE));
        }

        let name = non_blank(self.name.as_deref())
            .ok_or_else(|| ValidationError::new("name", NAME_REQUIRED))?;
        let time = non_blank(self.reservation_time.as_deref())
            .ok_or_else(|| ValidationError::new("reservation_time", TIME_REQUIRED))?;
        let seats = non_blank(self.seats.as_deref())
            .ok_or_else(|| ValidationError::new("seats", SEATS_REQUIRED))?;

        let reservation_time = record::parse_time(time)
            .map_err(|_| ValidationError::new("reservation_time", TIME_INVALID))?;
        if reservation_time < now {
            return Err(ValidationError::new("reservation_time", TIME_IN_PAST));
        }

        Ok(ReservationDraft::new(name, reservation_time, party_size, seats))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
