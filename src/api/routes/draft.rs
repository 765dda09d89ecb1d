//! Stateless draft endpoint: the client sends its current state and one
//! event, and gets back the next state plus the ranking it implies.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::{ready_tables, ApiError};
use crate::calculate::RankedView;
use crate::draft::{reduce, DraftEvent, DraftState};

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    /// Current state; a fresh session on the default map when absent
    #[serde(default)]
    pub state: Option<DraftState>,
    pub event: DraftEvent,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub state: DraftState,
    pub view: Option<RankedView>,
}

pub async fn apply_event(
    State(app): State<AppState>,
    Json(request): Json<DraftRequest>,
) -> Result<Json<DraftResponse>, ApiError> {
    let tables = ready_tables(&app).await?;

    let current = request
        .state
        .unwrap_or_else(|| DraftState::initial(&tables.maps));
    debug!("Draft event {:?}", request.event);
    let next = reduce(current, request.event);

    // Covers both a select_map event and a stale map in the client's state
    if let Some(map) = next.selected_map.as_deref() {
        if !tables.has_map(map) {
            return Err(ApiError::NotFound(format!("map {}", map)));
        }
    }

    let view = next.view(&tables, app.top_size);

    Ok(Json(DraftResponse { state: next, view }))
}
