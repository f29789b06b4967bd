//! Search and sort over a reservation list.

use std::cmp::Ordering;

use crate::Reservation;

/// Field a query sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Sort by name (plain string order, case-sensitive).
    ///
    /// Names compare by Unicode scalar value. This differs from UTF-16
    /// code unit order only between characters above U+FFFF and those in
    /// U+E000..=U+FFFF.
    Name,
    /// Sort by reservation time.
    Time,
}

impl SortField {
    /// Parses a sort field name.
    ///
    /// Only the exact strings `name` and `time` are recognised; anything
    /// else means "leave the order alone".
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::store::SortField;
    ///
    /// assert_eq!(SortField::parse("name"), Some(SortField::Name));
    /// assert_eq!(SortField::parse("time"), Some(SortField::Time));
    /// assert_eq!(SortField::parse("Name"), None);
    /// assert_eq!(SortField::parse("party"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "time" => Some(Self::Time),
            _ => None,
        }
    }

    fn compare(self, a: &Reservation, b: &Reservation) -> Ordering {
        match self {
            Self::Name => a.name().cmp(b.name()),
            Self::Time => a.reservation_time().cmp(&b.reservation_time()),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Parses a sort direction: exactly `desc` is descending, anything else
    /// ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::store::SortOrder;
    ///
    /// assert_eq!(SortOrder::parse("desc"), SortOrder::Descending);
    /// assert_eq!(SortOrder::parse("asc"), SortOrder::Ascending);
    /// assert_eq!(SortOrder::parse("DESC"), SortOrder::Ascending);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "desc" {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// A search term plus an optional sort.
///
/// # Examples
///
/// ```
/// use seatbook::store::{SearchQuery, SortField, SortOrder};
///
/// let query = SearchQuery::from_params(Some("tan"), Some("time"), Some("desc"));
/// assert_eq!(query.term.as_deref(), Some("tan"));
/// assert_eq!(query.sort_field, Some(SortField::Time));
/// assert_eq!(query.sort_order, SortOrder::Descending);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Substring to look for in names (case-insensitive) and formatted times.
    pub term: Option<String>,
    /// Field to sort on, or `None` to keep insertion order.
    pub sort_field: Option<SortField>,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl SearchQuery {
    /// A query that matches everything and keeps insertion order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a query from raw request-style parameters.
    #[must_use]
    pub fn from_params(term: Option<&str>, sort_by: Option<&str>, order: Option<&str>) -> Self {
        Self {
            term: term.map(str::to_string),
            sort_field: sort_by.and_then(SortField::parse),
            sort_order: order.map(SortOrder::parse).unwrap_or_default(),
        }
    }

    /// Sets the search term.
    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Sets the sort field and direction.
    #[must_use]
    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = Some(field);
        self.sort_order = order;
        self
    }

    /// Returns whether `reservation` passes the search filter.
    ///
    /// A missing or blank term matches everything. Otherwise the name is
    /// matched case-insensitively and the formatted time as-is.
    #[must_use]
    pub fn matches(&self, reservation: &Reservation) -> bool {
        let Some(term) = self.term.as_deref() else {
            return true;
        };
        if term.trim().is_empty() {
            return true;
        }

        reservation
            .name()
            .to_lowercase()
            .contains(&term.to_lowercase())
            || reservation.formatted_time().contains(term)
    }

    /// Filters and sorts `reservations`, returning the result.
    ///
    /// Sorting is stable: ties keep their relative input order in both
    /// directions.
    #[must_use]
    pub fn apply(&self, reservations: &[Reservation]) -> Vec<Reservation> {
        let mut result: Vec<Reservation> = reservations
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();

        if let Some(field) = self.sort_field {
            match self.sort_order {
                SortOrder::Ascending => result.sort_by(|a, b| field.compare(a, b)),
                SortOrder::Descending => result.sort_by(|a, b| field.compare(b, a)),
            }
        }

        result
    }
}
