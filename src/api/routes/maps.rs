use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{ready_tables, ApiError};
use crate::calculate::{OrderedMap, RankedBrawler, RankedView, RankingQuery, SortMode, TypeFilter};
use crate::models::BrawlerType;

#[derive(Debug, Deserialize)]
pub struct BrawlerListParams {
    /// Type filter; "all" or absent means no filter
    #[serde(rename = "type")]
    pub filter_type: Option<String>,
    /// "pick" (default) or "alpha"
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MapsResponse {
    pub maps: Vec<OrderedMap>,
    pub default_map: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TypesResponse {
    pub types: Vec<BrawlerType>,
}

#[derive(Debug, Serialize)]
pub struct MapStatsResponse {
    pub map: String,
    pub brawlers: Vec<RankedBrawler>,
}

pub async fn list_maps(State(state): State<AppState>) -> Result<Json<MapsResponse>, ApiError> {
    let tables = ready_tables(&state).await?;

    Ok(Json(MapsResponse {
        maps: tables.maps.maps().to_vec(),
        default_map: tables.maps.default_map().map(str::to_string),
    }))
}

pub async fn list_types(State(state): State<AppState>) -> Result<Json<TypesResponse>, ApiError> {
    let tables = ready_tables(&state).await?;

    Ok(Json(TypesResponse {
        types: tables.types.all_types(),
    }))
}

pub async fn map_brawlers(
    State(state): State<AppState>,
    Path(map): Path<String>,
    Query(params): Query<BrawlerListParams>,
) -> Result<Json<RankedView>, ApiError> {
    let tables = ready_tables(&state).await?;

    if !tables.has_map(&map) {
        return Err(ApiError::NotFound(format!("map {}", map)));
    }

    let sort = match params.sort.as_deref() {
        Some(s) => s.parse::<SortMode>().map_err(ApiError::BadRequest)?,
        None => SortMode::default(),
    };
    let filter = params
        .filter_type
        .as_deref()
        .map(TypeFilter::from)
        .unwrap_or_default();

    let query = RankingQuery::new(map)
        .with_filter(filter)
        .with_sort(sort)
        .with_top_size(state.top_size);

    Ok(Json(tables.rank(&query)))
}

pub async fn map_stats(
    State(state): State<AppState>,
    Path(map): Path<String>,
) -> Result<Json<MapStatsResponse>, ApiError> {
    let tables = ready_tables(&state).await?;

    if !tables.has_map(&map) {
        return Err(ApiError::NotFound(format!("map {}", map)));
    }

    Ok(Json(MapStatsResponse {
        brawlers: tables.overview(&map),
        map,
    }))
}
