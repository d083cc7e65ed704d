//! Charging table entry point — compute the standard plan and print it.

use std::io::{self, Write};
use std::process;

use ev_charge_calc::circuit::compute_rows;
use ev_charge_calc::config::PlanConfig;
use ev_charge_calc::report::render_table;

fn main() {
    let plan = PlanConfig::standard();
    let rows = compute_rows(plan.battery.capacity_kwh, &plan.to_scenarios());
    let table = render_table(plan.battery.capacity_kwh, &rows);

    // The table is rendered in full before any byte reaches stdout, so a
    // write failure is the only runtime error this program can hit.
    let mut stdout = io::stdout();
    if let Err(e) = stdout
        .write_all(table.as_bytes())
        .and_then(|()| stdout.flush())
    {
        eprintln!("error: failed to write table: {e}");
        process::exit(1);
    }
}
