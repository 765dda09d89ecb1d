//! Map catalog: which maps exist and in what order they are offered.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::models::{BrawlerStatRecord, GameMode};

/// A map together with the game mode it was grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderedMap {
    pub name: String,
    pub mode: GameMode,
}

/// Distinct map names, in the order they first appear in the statistics.
pub fn distinct_maps(stats: &[BrawlerStatRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    stats
        .iter()
        .filter(|r| seen.insert(r.map.as_str()))
        .map(|r| r.map.clone())
        .collect()
}

/// Group maps by game mode, in mode priority order.
///
/// Within a mode, maps keep their input order. Maps whose name starts with
/// no known mode prefix are not part of the result.
pub fn order_maps(maps: &[String]) -> Vec<OrderedMap> {
    GameMode::ALL
        .iter()
        .flat_map(|mode| {
            maps.iter()
                .filter(move |m| mode.matches_map(m))
                .map(move |m| OrderedMap {
                    name: m.clone(),
                    mode: *mode,
                })
        })
        .collect()
}

/// Ordered maps derived from one statistics table.
///
/// Built once per loaded table; the first map is the default selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MapCatalog {
    maps: Vec<OrderedMap>,
    /// Maps present in the statistics but matching no mode prefix
    unmatched: Vec<String>,
}

impl MapCatalog {
    pub fn from_stats(stats: &[BrawlerStatRecord]) -> Self {
        let raw = distinct_maps(stats);
        let maps = order_maps(&raw);
        let unmatched: Vec<String> = raw
            .into_iter()
            .filter(|m| GameMode::from_map_name(m).is_none())
            .collect();

        if !unmatched.is_empty() {
            debug!(
                "{} maps match no game mode and are left out of the catalog: {:?}",
                unmatched.len(),
                unmatched
            );
        }

        Self { maps, unmatched }
    }

    /// First ordered map, the one selected before the user picks any.
    pub fn default_map(&self) -> Option<&str> {
        self.maps.first().map(|m| m.name.as_str())
    }

    pub fn maps(&self) -> &[OrderedMap] {
        &self.maps
    }

    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
