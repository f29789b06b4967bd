//! Property-based tests for `Reservation`, `DuplicateKey` and the line codec.

use super::{DuplicateKey, Reservation, ReservationDraft};
use crate::record::{format_line, parse_line};
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

// Comma-free labels, so rows survive the unescaped line format
fn label_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,15}"
}

fn time_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (2000i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap()
        },
    )
}

fn draft_strategy() -> impl Strategy<Value = ReservationDraft> {
    (label_strategy(), time_strategy(), 1u32..100, label_strategy())
        .prop_map(|(name, time, party, seats)| ReservationDraft::new(name, time, party, seats))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Changing the case of name or seats never changes the key
    #[test]
    fn duplicate_key_case_insensitive(draft in draft_strategy()) {
        let upper = ReservationDraft::new(
            draft.name.to_uppercase(),
            draft.reservation_time,
            draft.party_size,
            draft.seats.to_uppercase(),
        );
        prop_assert_eq!(draft.duplicate_key(), upper.duplicate_key());
    }

    // Keys are equal exactly when the folded fields are equal
    #[test]
    fn duplicate_key_equality(a in draft_strategy(), b in draft_strategy()) {
        let same = a.name.to_lowercase() == b.name.to_lowercase()
            && a.reservation_time == b.reservation_time
            && a.seats.to_lowercase() == b.seats.to_lowercase();
        prop_assert_eq!(a.duplicate_key() == b.duplicate_key(), same);
    }

    // A reservation's key matches the key of its draft
    #[test]
    fn reservation_key_matches_draft(id in 1u32..10_000, draft in draft_strategy()) {
        let key: DuplicateKey = draft.duplicate_key();
        let reservation = Reservation::new(id, draft);
        prop_assert_eq!(reservation.duplicate_key(), key);
    }

    // Comma-free records survive a format/parse cycle unchanged
    #[test]
    fn line_round_trip(id in 0u32..u32::MAX, draft in draft_strategy()) {
        let reservation = Reservation::new(id, draft);
        let parsed = parse_line(&format_line(&reservation)).unwrap();
        prop_assert_eq!(parsed, reservation);
    }

    // Parsing arbitrary text never panics
    #[test]
    fn parse_line_never_panics(line in ".{0,80}") {
        let _ = parse_line(&line);
    }
}
