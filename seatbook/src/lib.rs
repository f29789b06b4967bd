#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # seatbook
//!
//! A library for keeping dated table reservations in a flat-file store.
//!
//! Reservations live in memory and are mirrored to a line-oriented backing
//! file after every change. The store rejects duplicates (same name, time
//! and seats, ignoring case), searches and sorts, imports record lines in
//! bulk and removes reservations whose time has passed.
//!
//! ## Core Types
//!
//! - [`ReservationStore`]: the thread-safe store
//! - [`Reservation`], [`ReservationDraft`] and [`DuplicateKey`]: records
//! - [`SearchQuery`]: filtering and sorting
//! - [`ReservationForm`]: validation of raw user input
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use seatbook::{ReservationDraft, ReservationStore, SearchQuery, SortField, SortOrder};
//!
//! let store = ReservationStore::in_memory();
//! let time = NaiveDate::from_ymd_opt(2099, 6, 1).unwrap().and_hms_opt(19, 0, 0).unwrap();
//!
//! store.add(ReservationDraft::new("Suzuki", time, 2, "B2")).unwrap();
//! store.add(ReservationDraft::new("Abe", time, 4, "A1")).unwrap();
//!
//! let sorted = store.search_and_sort(
//!     &SearchQuery::new().sorted_by(SortField::Name, SortOrder::Ascending),
//! );
//! assert_eq!(sorted[0].name(), "Abe");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod page;
pub mod record;
pub mod reservation;
pub mod store;
pub mod validation;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use page::{paginate, Page, DEFAULT_PAGE_SIZE};
pub use reservation::{DuplicateKey, Reservation, ReservationDraft, ValidationError};
pub use store::{
    CleanupResult, ImportReport, ReservationStore, SearchQuery, SkipReason, SkippedLine,
    SortField, SortOrder,
};
pub use validation::ReservationForm;
