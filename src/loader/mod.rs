//! Loading of the static statistics and type tables.
//!
//! Both documents are fetched concurrently and published together. If
//! either retrieval fails the shared state stays `Loading` for good: the
//! data ships with the application, so a failure means a broken deploy,
//! and consumers simply keep showing the loading state.

mod parse;
mod source;
mod type_index;

pub use parse::{parse_stats, parse_types};
pub use source::*;
pub use type_index::TypeIndex;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::calculate::{map_overview, rank_map, MapCatalog, RankedBrawler, RankedView, RankingQuery};
use crate::config::DataConfig;
use crate::models::{BrawlerStatRecord, BrawlerTypeEntry};

/// Errors that can occur while loading the tables.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The {0} document is not a JSON array")]
    NotAnArray(&'static str),
}

/// The loaded, immutable tables plus the map catalog derived from them.
#[derive(Debug, Clone)]
pub struct BrawlerTables {
    pub stats: Vec<BrawlerStatRecord>,
    pub types: TypeIndex,
    pub maps: MapCatalog,
    /// Number of type entries in the source, before folding duplicates
    pub type_entries: usize,
    pub loaded_at: DateTime<Utc>,
}

impl BrawlerTables {
    pub fn new(stats: Vec<BrawlerStatRecord>, type_entries: &[BrawlerTypeEntry]) -> Self {
        let maps = MapCatalog::from_stats(&stats);
        Self {
            types: TypeIndex::from_entries(type_entries),
            type_entries: type_entries.len(),
            maps,
            stats,
            loaded_at: Utc::now(),
        }
    }

    /// Whether any statistics record was measured on `map`.
    pub fn has_map(&self, map: &str) -> bool {
        self.stats.iter().any(|r| r.map == map)
    }

    pub fn rank(&self, query: &RankingQuery) -> RankedView {
        rank_map(&self.stats, &self.types, query)
    }

    pub fn overview(&self, map: &str) -> Vec<RankedBrawler> {
        map_overview(&self.stats, &self.types, map)
    }
}

/// Loading flag plus, once loaded, the tables.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Arc<BrawlerTables>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn tables(&self) -> Option<Arc<BrawlerTables>> {
        match self {
            LoadState::Loading => None,
            LoadState::Ready(tables) => Some(Arc::clone(tables)),
        }
    }
}

pub type SharedLoadState = Arc<RwLock<LoadState>>;

/// Fetches and parses both source documents.
pub struct DataLoader {
    stats: Box<dyn TableSource>,
    types: Box<dyn TableSource>,
}

impl DataLoader {
    pub fn new(stats: Box<dyn TableSource>, types: Box<dyn TableSource>) -> Self {
        Self { stats, types }
    }

    /// Build a loader for the configured sources.
    pub fn from_config(config: &DataConfig) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self::new(
            config.stats_source.clone().into_source(&client),
            config.types_source.clone().into_source(&client),
        ))
    }

    /// Retrieve both documents concurrently and build the tables.
    pub async fn load(&self) -> Result<BrawlerTables, LoadError> {
        let (stats_bytes, types_bytes) = tokio::join!(self.stats.fetch(), self.types.fetch());

        let stats = parse_stats(&stats_bytes?)?;
        let type_entries = parse_types(&types_bytes?)?;
        let tables = BrawlerTables::new(stats, &type_entries);

        info!(
            "Loaded {} statistics records from {} and {} type entries from {} ({} maps)",
            tables.stats.len(),
            self.stats.describe(),
            tables.type_entries,
            self.types.describe(),
            tables.maps.len()
        );

        Ok(tables)
    }

    /// Load and publish into `state`. On failure the error is logged and
    /// `state` is left untouched.
    pub async fn load_into(&self, state: &RwLock<LoadState>) {
        match self.load().await {
            Ok(tables) => {
                *state.write().await = LoadState::Ready(Arc::new(tables));
            }
            Err(e) => {
                error!("Failed to load brawler data, staying in loading state: {}", e);
            }
        }
    }
}
