//! EV charging power and time calculator over a fixed charging plan.

pub mod circuit;
pub mod config;
/// CSV export of computed tables.
pub mod io;
pub mod report;
