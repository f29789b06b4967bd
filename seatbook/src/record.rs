//! Line format shared by the backing file and imports.
//!
//! Each reservation is one line of five comma-separated fields:
//!
//! ```text
//! id,name,reservation_time,party_size,seats
//! 12,Tanaka,2030-04-01T19:00:00,4,A1
//! ```
//!
//! Fields are joined with raw commas and never quoted. A name or seat label
//! that itself contains a comma shifts every following field, so such a row
//! either fails to parse or reloads with truncated values. Splitting drops
//! trailing empty fields before counting, and anything past the fifth field
//! is ignored.

use std::io::{self, BufRead};

use chrono::{NaiveDateTime, ParseResult};

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationDraft};

/// Minimum number of fields in a record line.
pub const FIELD_COUNT: usize = 5;

/// Format used when writing reservation times.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Accepted input format that omits seconds (as sent by date-time pickers).
const TIME_FORMAT_NO_SECONDS: &str = "%Y-%m-%dT%H:%M";

/// Formats a reservation time as an ISO-8601 local date-time.
///
/// Seconds are always written; fractional seconds only when non-zero.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use seatbook::record::format_time;
///
/// let t = NaiveDate::from_ymd_opt(2030, 4, 1).unwrap().and_hms_opt(19, 5, 0).unwrap();
/// assert_eq!(format_time(t), "2030-04-01T19:05:00");
/// ```
#[must_use]
pub fn format_time(time: NaiveDateTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Parses an ISO-8601 local date-time, with or without seconds.
///
/// # Errors
///
/// Returns the chrono parse error if neither accepted form matches.
///
/// # Examples
///
/// ```
/// use seatbook::record::parse_time;
///
/// assert!(parse_time("2030-04-01T19:05:00").is_ok());
/// assert!(parse_time("2030-04-01T19:05").is_ok());
/// assert!(parse_time("2030-04-01 19:05").is_err());
/// ```
pub fn parse_time(input: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, TIME_FORMAT_NO_SECONDS))
}

/// Formats a reservation as a record line (without a line terminator).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use seatbook::record::format_line;
/// use seatbook::{Reservation, ReservationDraft};
///
/// let t = NaiveDate::from_ymd_opt(2030, 4, 1).unwrap().and_hms_opt(19, 0, 0).unwrap();
/// let r = Reservation::new(12, ReservationDraft::new("Tanaka", t, 4, "A1"));
/// assert_eq!(format_line(&r), "12,Tanaka,2030-04-01T19:00:00,4,A1");
/// ```
#[must_use]
pub fn format_line(reservation: &Reservation) -> String {
    format!(
        "{},{},{},{},{}",
        reservation.id(),
        reservation.name(),
        reservation.formatted_time(),
        reservation.party_size(),
        reservation.seats()
    )
}

/// Parses a record line into a reservation.
///
/// # Errors
///
/// Returns `Error::InvalidRecord` when the line has fewer than
/// [`FIELD_COUNT`] non-trailing fields, when the id or party size is not an
/// unsigned integer, or when the time does not parse.
pub fn parse_line(line: &str) -> Result<Reservation> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    if fields.len() < FIELD_COUNT {
        return Err(invalid(format!(
            "expected at least {FIELD_COUNT} fields, found {}",
            fields.len()
        )));
    }

    let id: u32 = fields[0]
        .parse()
        .map_err(|e| invalid(format!("invalid id '{}': {e}", fields[0])))?;
    let reservation_time = parse_time(fields[2])
        .map_err(|e| invalid(format!("invalid reservation time '{}': {e}", fields[2])))?;
    let party_size: u32 = fields[3]
        .parse()
        .map_err(|e| invalid(format!("invalid party size '{}': {e}", fields[3])))?;

    Ok(Reservation::new(
        id,
        ReservationDraft::new(fields[1], reservation_time, party_size, fields[4]),
    ))
}

/// Reads `reader` to the end as raw lines, without the `\n` or `\r\n`
/// terminator.
///
/// Nothing is decoded here, so a line that is not UTF-8 does not stop the
/// lines after it from being read. Use [`decode_line`] on each one.
///
/// # Errors
///
/// Returns any I/O error from `reader`.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<Vec<u8>>> {
    reader
        .split(b'\n')
        .map(|line| line.map(strip_carriage_return))
        .collect()
}

/// Decodes one raw line.
///
/// # Errors
///
/// Returns `Error::InvalidRecord` if the line is not valid UTF-8.
pub fn decode_line(raw: &[u8]) -> Result<&str> {
    std::str::from_utf8(raw).map_err(|e| invalid(format!("line is not valid UTF-8: {e}")))
}

pub(crate) fn strip_carriage_return(mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    line
}

fn invalid(reason: String) -> Error {
    Error::InvalidRecord { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 4, 1)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_format_time_always_writes_seconds() {
        assert_eq!(format_time(sample_time()), "2030-04-01T19:00:00");
    }

    #[test]
    fn test_format_time_writes_fraction_when_present() {
        let t = NaiveDate::from_ymd_opt(2030, 4, 1)
            .unwrap()
            .and_hms_milli_opt(19, 0, 0, 250)
            .unwrap();
        let formatted = format_time(t);
        assert!(formatted.starts_with("2030-04-01T19:00:00."));
        assert_eq!(parse_time(&formatted).unwrap(), t);
    }

    #[test]
    fn test_parse_time_without_seconds() {
        assert_eq!(parse_time("2030-04-01T19:00").unwrap(), sample_time());
    }

    #[test]
    fn test_parse_time_rejects_other_shapes() {
        assert!(parse_time("2030/04/01 19:00").is_err());
        assert!(parse_time("tomorrow").is_err());
        assert!(parse_time("").is_err());
    }

    #[test]
    fn test_parse_line() {
        let r = parse_line("12,Tanaka,2030-04-01T19:00:00,4,A1").unwrap();
        assert_eq!(r.id(), 12);
        assert_eq!(r.name(), "Tanaka");
        assert_eq!(r.reservation_time(), sample_time());
        assert_eq!(r.party_size(), 4);
        assert_eq!(r.seats(), "A1");
    }

    #[test]
    fn test_parse_line_ignores_extra_fields() {
        let r = parse_line("12,Tanaka,2030-04-01T19:00:00,4,A1,window,extra").unwrap();
        assert_eq!(r.seats(), "A1");
    }

    #[test]
    fn test_parse_line_too_few_fields() {
        let err = parse_line("12,Tanaka,2030-04-01T19:00:00,4").unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { .. }));
        assert!(err.to_string().contains("found 4"));
    }

    #[test]
    fn test_parse_line_trailing_empty_fields_are_dropped() {
        // An empty seat label leaves only four fields once trailing empties go.
        assert!(parse_line("12,Tanaka,2030-04-01T19:00:00,4,").is_err());
        assert!(parse_line("12,Tanaka,2030-04-01T19:00:00,4,A1,,").is_ok());
    }

    #[test]
    fn test_parse_line_non_numeric_id() {
        let err = parse_line("abc,Tanaka,2030-04-01T19:00:00,4,A1").unwrap_err();
        assert!(err.to_string().contains("invalid id 'abc'"));
    }

    #[test]
    fn test_parse_line_negative_id() {
        assert!(parse_line("-1,Tanaka,2030-04-01T19:00:00,4,A1").is_err());
    }

    #[test]
    fn test_parse_line_bad_party_size() {
        let err = parse_line("1,Tanaka,2030-04-01T19:00:00,four,A1").unwrap_err();
        assert!(err.to_string().contains("invalid party size"));
    }

    #[test]
    fn test_parse_line_bad_time() {
        let err = parse_line("1,Tanaka,2030-13-01T19:00:00,4,A1").unwrap_err();
        assert!(err.to_string().contains("invalid reservation time"));
    }

    #[test]
    fn test_parse_line_header_row_is_rejected() {
        assert!(parse_line("ID,Name,ReservationTime,PartyCount,Seats").is_err());
    }

    #[test]
    fn test_comma_in_name_corrupts_row() {
        let r = Reservation::new(
            1,
            ReservationDraft::new("Tanaka, Jiro", sample_time(), 4, "A1"),
        );
        // The name splits in two, so the time field no longer parses.
        assert!(parse_line(&format_line(&r)).is_err());
    }

    #[test]
    fn test_read_lines_keeps_going_past_bad_utf8() {
        let input: &[u8] = b"1,Abe,2030-04-01T19:00:00,2,A1\r\n2,B\xff,x,2,A2\n3,Chiba,2030-04-01T19:00:00,2,A3";
        let lines = read_lines(input).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(decode_line(&lines[0]).unwrap(), "1,Abe,2030-04-01T19:00:00,2,A1");
        assert!(matches!(
            decode_line(&lines[1]),
            Err(Error::InvalidRecord { .. })
        ));
        assert_eq!(parse_line(decode_line(&lines[2]).unwrap()).unwrap().id(), 3);
    }

    #[test]
    fn test_line_round_trip() {
        let r = Reservation::new(
            42,
            ReservationDraft::new("Suzuki", sample_time(), 6, "Counter 3"),
        );
        assert_eq!(parse_line(&format_line(&r)).unwrap(), r);
    }
}
