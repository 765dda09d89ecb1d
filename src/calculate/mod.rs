//! Derived views over the loaded statistics.
//!
//! Everything here is a pure function of the loaded tables plus the
//! user's current selections:
//! - Map catalog: distinct maps grouped by game mode
//! - Per-map ranking: dedup by peak pick rate, top-N split, type filter, sort
//! - Map overview: every record of a map in pick-rate order

mod collate;
mod maps;
mod ranking;

pub use collate::locale_compare;
pub use maps::*;
pub use ranking::*;
