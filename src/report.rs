//! Fixed-width table rendering for computed charging rows.

use std::fmt;

use crate::circuit::ChargeRow;

/// Charging table: battery header plus one row per scenario.
///
/// Rendering goes through `Display`, so the table can be printed directly
/// or collected into a `String` without touching an output stream. Columns
/// are left-aligned at widths 12/12/22/22; current and voltage print with
/// 1 decimal place, power and time with 2.
#[derive(Debug, Clone)]
pub struct TableReport {
    /// Battery capacity shown in the header (kWh).
    pub battery_kwh: f64,
    /// Computed rows, in plan order.
    pub rows: Vec<ChargeRow>,
}

impl TableReport {
    /// Creates a report over already-computed rows.
    pub fn new(battery_kwh: f64, rows: Vec<ChargeRow>) -> Self {
        Self { battery_kwh, rows }
    }
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Battery: {:.1} (kwh)", self.battery_kwh)?;
        writeln!(
            f,
            "{:<12}{:<12}{:<22}{:<22}",
            "Current(A)", "Voltage(V)", "Charging Power(kW)", "Charging Time(h)"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<12.1}{:<12.1}{:<22.2}{:<22.2}",
                row.scenario.current_a, row.scenario.voltage_v, row.power_kw, row.time_h
            )?;
        }
        Ok(())
    }
}

/// Renders the table to a `String`: header lines plus one line per row.
pub fn render_table(battery_kwh: f64, rows: &[ChargeRow]) -> String {
    TableReport::new(battery_kwh, rows.to_vec()).to_string()
}
