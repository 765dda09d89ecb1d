use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub loading: bool,
    pub stat_records: usize,
    pub type_entries: usize,
    pub brawler_types: usize,
    pub map_count: usize,
    /// Maps in the statistics that no game mode claims
    pub unmatched_maps: Vec<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let tables = state.data.read().await.tables();

    let response = match tables {
        Some(t) => StatusResponse {
            loading: false,
            stat_records: t.stats.len(),
            type_entries: t.type_entries,
            brawler_types: t.types.all_types().len(),
            map_count: t.maps.len(),
            unmatched_maps: t.maps.unmatched().to_vec(),
            loaded_at: Some(t.loaded_at),
        },
        None => StatusResponse {
            loading: true,
            stat_records: 0,
            type_entries: 0,
            brawler_types: 0,
            map_count: 0,
            unmatched_maps: Vec::new(),
            loaded_at: None,
        },
    };

    Json(response)
}
