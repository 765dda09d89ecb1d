//! Core data models for the draft simulator.

mod brawler;
mod mode;
mod names;
mod team;

pub use brawler::*;
pub use mode::*;
pub use names::*;
pub use team::*;
