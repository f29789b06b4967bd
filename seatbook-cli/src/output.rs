//! Rendering reservations for the terminal and for export.

use crate::error::CliError;
use seatbook::{OutputFormat, Reservation};
use std::io::Write;

/// Column headers for CSV/TSV listings and exports.
pub const COLUMN_HEADERS: [&str; 5] = ["ID", "Name", "ReservationTime", "PartyCount", "Seats"];

/// Write reservations in the given format.
pub fn write_reservations<W: Write>(
    out: &mut W,
    reservations: &[Reservation],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => write_table(out, reservations),
        OutputFormat::Json => write_json(out, reservations),
        OutputFormat::Csv => write_delimited(out, reservations, b','),
        OutputFormat::Tsv => write_delimited(out, reservations, b'\t'),
    }
}

/// Write the CSV export document.
///
/// Fields are written raw: a comma inside a name or seat label is not
/// quoted, matching the backing file.
pub fn write_export<W: Write>(out: W, reservations: &[Reservation]) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS)?;
    for res in reservations {
        writer.write_record(fields(res))?;
    }
    writer.flush()?;

    Ok(())
}

fn fields(res: &Reservation) -> [String; 5] {
    [
        res.id().to_string(),
        res.name().to_string(),
        res.formatted_time(),
        res.party_size().to_string(),
        res.seats().to_string(),
    ]
}

fn write_table<W: Write>(out: &mut W, reservations: &[Reservation]) -> Result<(), CliError> {
    writeln!(out, "ID\tNAME\tTIME\tPARTY\tSEATS")?;
    for res in reservations {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            res.id(),
            res.name(),
            res.reservation_time().format("%Y-%m-%d %H:%M"),
            res.party_size(),
            res.seats(),
        )?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, reservations: &[Reservation]) -> Result<(), CliError> {
    let json_data: Vec<serde_json::Value> = reservations
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id(),
                "name": r.name(),
                "reservation_time": r.formatted_time(),
                "party_size": r.party_size(),
                "seats": r.seats(),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &json_data)?;
    writeln!(out)?;
    Ok(())
}

fn write_delimited<W: Write>(
    out: &mut W,
    reservations: &[Reservation],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS)?;
    for res in reservations {
        writer.write_record(fields(res))?;
    }
    writer.flush()?;

    Ok(())
}
