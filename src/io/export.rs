//! CSV export for computed charging rows.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::circuit::ChargeRow;

/// Column header for CSV charging-table export.
const HEADER: &str = "current_a,voltage_v,phase,power_kw,time_h";

/// Exports charging rows to a CSV file at the given path.
///
/// Writes a header row followed by one data row per scenario, in plan
/// order. Produces deterministic output for identical inputs.
///
/// # Arguments
///
/// * `rows` - Computed charging rows
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(rows: &[ChargeRow], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(rows, buf)
}

/// Writes charging rows as CSV to any writer.
///
/// Current and voltage print with 1 decimal place, power and time with 2,
/// matching the table's precision; phase prints as `single` or `three`.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(rows: &[ChargeRow], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // Data rows
    for r in rows {
        wtr.write_record(&[
            format!("{:.1}", r.scenario.current_a),
            format!("{:.1}", r.scenario.voltage_v),
            r.scenario.phase.name().to_string(),
            format!("{:.2}", r.power_kw),
            format!("{:.2}", r.time_h),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
