//! Parsing of the two source documents into typed records.
//!
//! Each document must be a JSON array. Elements are decoded one at a time
//! so a single bad row is skipped (and logged) instead of failing the load.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::LoadError;
use crate::models::{BrawlerStatRecord, BrawlerTypeEntry, InvalidRecord};

fn parse_records<T, F>(bytes: &[u8], what: &'static str, validate: F) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    F: Fn(&T) -> Result<(), InvalidRecord>,
{
    let items = match serde_json::from_slice::<Value>(bytes)? {
        Value::Array(items) => items,
        _ => return Err(LoadError::NotAnArray(what)),
    };

    let total = items.len();
    let mut records = Vec::with_capacity(total);

    for (idx, item) in items.into_iter().enumerate() {
        let record = match serde_json::from_value::<T>(item) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping {} entry {}: {}", what, idx, e);
                continue;
            }
        };
        match validate(&record) {
            Ok(()) => records.push(record),
            Err(e) => warn!("Skipping {} entry {}: {}", what, idx, e),
        }
    }

    debug!("Parsed {}/{} {} entries", records.len(), total, what);
    Ok(records)
}

/// Parse the per-map statistics document.
pub fn parse_stats(bytes: &[u8]) -> Result<Vec<BrawlerStatRecord>, LoadError> {
    parse_records(bytes, "statistics", BrawlerStatRecord::validate)
}

/// Parse the brawler type document.
pub fn parse_types(bytes: &[u8]) -> Result<Vec<BrawlerTypeEntry>, LoadError> {
    parse_records(bytes, "type", BrawlerTypeEntry::validate)
}
