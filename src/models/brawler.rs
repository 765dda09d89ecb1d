//! Brawler statistics and type classification records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BrawlerKey, BrawlerType};

/// Why a record was rejected at the load boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidRecord {
    #[error("empty brawler name")]
    EmptyBrawler,

    #[error("empty map name")]
    EmptyMap,

    #[error("empty type")]
    EmptyType,

    #[error("{field} out of range: {value}")]
    RateOutOfRange { field: &'static str, value: f64 },
}

fn check_rate(field: &'static str, value: f64) -> Result<(), InvalidRecord> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(InvalidRecord::RateOutOfRange { field, value })
    }
}

/// One measurement of a brawler's performance on one map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrawlerStatRecord {
    /// Brawler name as spelled in the source
    #[serde(rename = "Brawler")]
    pub brawler: String,

    /// Map name, prefixed with its game mode (e.g. "gem_grab_Hard_Rock_Mine")
    #[serde(rename = "Map")]
    pub map: String,

    /// Pick rate (0.0 to 1.0)
    #[serde(rename = "Pick Rate")]
    pub pick_rate: f64,

    /// Win rate (0.0 to 1.0)
    #[serde(rename = "Win Rate")]
    pub win_rate: f64,
}

impl BrawlerStatRecord {
    pub fn new(
        brawler: impl Into<String>,
        map: impl Into<String>,
        pick_rate: f64,
        win_rate: f64,
    ) -> Self {
        Self {
            brawler: brawler.into(),
            map: map.into(),
            pick_rate,
            win_rate,
        }
    }

    /// Canonical key for type lookups.
    pub fn key(&self) -> BrawlerKey {
        BrawlerKey::new(&self.brawler)
    }

    /// Check the record against the data model's constraints.
    pub fn validate(&self) -> Result<(), InvalidRecord> {
        if self.brawler.trim().is_empty() {
            return Err(InvalidRecord::EmptyBrawler);
        }
        if self.map.trim().is_empty() {
            return Err(InvalidRecord::EmptyMap);
        }
        check_rate("Pick Rate", self.pick_rate)?;
        check_rate("Win Rate", self.win_rate)?;
        Ok(())
    }
}

/// Static classification of a brawler into a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrawlerTypeEntry {
    #[serde(rename = "Brawler")]
    pub brawler: String,

    #[serde(rename = "Type")]
    pub brawler_type: String,
}

impl BrawlerTypeEntry {
    pub fn new(brawler: impl Into<String>, brawler_type: impl Into<String>) -> Self {
        Self {
            brawler: brawler.into(),
            brawler_type: brawler_type.into(),
        }
    }

    pub fn key(&self) -> BrawlerKey {
        BrawlerKey::new(&self.brawler)
    }

    pub fn normalized_type(&self) -> BrawlerType {
        BrawlerType::new(&self.brawler_type)
    }

    pub fn validate(&self) -> Result<(), InvalidRecord> {
        if self.brawler.trim().is_empty() {
            return Err(InvalidRecord::EmptyBrawler);
        }
        if self.brawler_type.trim().is_empty() {
            return Err(InvalidRecord::EmptyType);
        }
        Ok(())
    }
}
