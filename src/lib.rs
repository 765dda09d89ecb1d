//! # Brawl Draft
//!
//! Per-map brawler statistics browser and draft simulator.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (stat records, types, game modes, teams)
//! - **loader**: Retrieval and parsing of the two static JSON tables
//! - **calculate**: Map catalog and per-map ranking/filtering
//! - **draft**: Draft session state and its reducer
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod draft;
pub mod loader;
pub mod models;

pub use models::*;

/// Format a fraction as a percentage with two decimals ("12.34%").
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.1234), "12.34%");
        assert_eq!(format_rate(0.0), "0.00%");
        assert_eq!(format_rate(1.0), "100.00%");
    }

    #[test]
    fn test_format_rate_rounds() {
        assert_eq!(format_rate(0.123456), "12.35%");
    }
}
