//! Charging power and time arithmetic for fixed supply circuits.

use std::fmt;

/// Conversion factor from watts to kilowatts.
const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Electrical supply phase type.
///
/// Selects the power formula: a single-phase circuit delivers
/// `current * voltage` watts, a three-phase circuit delivers
/// `current * voltage * sqrt(3)` watts across its three conductors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// One live conductor.
    Single,
    /// Three live conductors at 120° offset.
    Three,
}

impl Phase {
    /// Multiplier applied to `current * voltage` for this phase type.
    pub fn power_factor(self) -> f64 {
        match self {
            Phase::Single => 1.0,
            Phase::Three => 3.0_f64.sqrt(),
        }
    }

    /// Lowercase name used in plan files and CSV output.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Single => "single",
            Phase::Three => "three",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One supply circuit to evaluate: a (current, voltage, phase) triple.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Charging current in amperes.
    pub current_a: f64,
    /// Supply voltage in volts.
    pub voltage_v: f64,
    /// Phase type of the circuit.
    pub phase: Phase,
}

impl Scenario {
    /// Creates a new charging scenario.
    ///
    /// # Arguments
    ///
    /// * `current_a` - Charging current in A (must be > 0)
    /// * `voltage_v` - Supply voltage in V (must be > 0)
    /// * `phase` - Phase type of the circuit
    ///
    /// # Panics
    ///
    /// Panics if `current_a` or `voltage_v` is not strictly positive.
    pub fn new(current_a: f64, voltage_v: f64, phase: Phase) -> Self {
        assert!(current_a > 0.0, "current_a must be > 0");
        assert!(voltage_v > 0.0, "voltage_v must be > 0");
        Self {
            current_a,
            voltage_v,
            phase,
        }
    }

    /// Unrounded charging power in kilowatts for this circuit.
    ///
    /// Always strictly positive, so dividing a battery capacity by it is
    /// well-defined.
    pub fn power_kw(&self) -> f64 {
        self.current_a * self.voltage_v * self.phase.power_factor() / WATTS_PER_KILOWATT
    }
}

/// Computed charging figures for one scenario, rounded for presentation.
#[derive(Debug, Clone, Copy)]
pub struct ChargeRow {
    /// The scenario this row was computed from.
    pub scenario: Scenario,
    /// Charging power in kW, rounded to 2 decimal places.
    pub power_kw: f64,
    /// Time to full charge in hours, rounded to 2 decimal places.
    pub time_h: f64,
}

/// Rounds to 2 decimal places on the scaled value: `round(v * 100) / 100`.
///
/// `f64::round` maps ties away from zero. Idempotent: re-rounding a
/// rounded value leaves it unchanged.
///
/// # Examples
///
/// ```
/// use ev_charge_calc::circuit::round2;
///
/// assert_eq!(round2(15.565217391304348), 15.57);
/// assert_eq!(round2(round2(15.565217391304348)), 15.57);
/// ```
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Computes charging power and time to full charge for one scenario.
///
/// The charging time divides the battery capacity by the *unrounded*
/// power; both figures are rounded to 2 decimal places afterwards.
///
/// # Arguments
///
/// * `battery_kwh` - Battery capacity in kWh
/// * `scenario` - Supply circuit to evaluate
pub fn compute_row(battery_kwh: f64, scenario: Scenario) -> ChargeRow {
    let raw_power_kw = scenario.power_kw();
    let raw_time_h = battery_kwh / raw_power_kw;
    ChargeRow {
        scenario,
        power_kw: round2(raw_power_kw),
        time_h: round2(raw_time_h),
    }
}

/// Computes a row for every scenario, preserving plan order.
pub fn compute_rows(battery_kwh: f64, scenarios: &[Scenario]) -> Vec<ChargeRow> {
    scenarios
        .iter()
        .map(|&s| compute_row(battery_kwh, s))
        .collect()
}
