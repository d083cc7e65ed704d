//! Output helpers for computed charging tables.

pub mod export;
