//! Shared test fixtures for integration tests.

use ev_charge_calc::circuit::{compute_rows, ChargeRow};
use ev_charge_calc::config::PlanConfig;

/// Battery capacity of the standard plan (kWh).
pub const STANDARD_CAPACITY_KWH: f64 = 35.8;

/// Expected (current_a, voltage_v, power_kw, time_h) per standard row,
/// in plan order.
pub const EXPECTED_STANDARD: [(f64, f64, f64, f64); 6] = [
    (10.0, 230.0, 2.30, 15.57),
    (16.0, 230.0, 3.68, 9.73),
    (32.0, 230.0, 7.36, 4.86),
    (10.0, 400.0, 6.93, 5.17),
    (16.0, 400.0, 11.09, 3.23),
    (32.0, 400.0, 22.17, 1.61),
];

/// Standard plan used across integration tests.
pub fn standard_plan() -> PlanConfig {
    PlanConfig::standard()
}

/// Computed rows for the standard plan, in plan order.
pub fn standard_rows() -> Vec<ChargeRow> {
    let plan = standard_plan();
    compute_rows(plan.battery.capacity_kwh, &plan.to_scenarios())
}
