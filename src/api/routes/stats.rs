//! Stats Routes
//!
//! Derived-view endpoint: filter the session's table by track and compute
//! the grouped counts behind the dashboard charts. Pure recomputation on
//! every call - no cached aggregate state anywhere.
//!
//! - GET /api/v1/sessions/:session/stats?tracks=KAFKA,MQ

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::analytics::compute_stats;
use crate::api::dto::{StatsParams, StatsResponse};
use crate::api::error::ApiResult;
use crate::api::routes::tickets::parse_track;
use crate::api::state::AppState;
use crate::ticket::Track;

/// Fixed first-response display metric, in hours
const FIRST_RESPONSE_HOURS: f64 = 5.2;

/// Fixed average-resolution display metric, in hours
const AVG_RESOLUTION_HOURS: f64 = 16.0;

/// GET /api/v1/sessions/:session/stats
///
/// `tracks` absent selects every track; `tracks=` (empty value) selects
/// none, which yields an empty view and all-zero aggregates.
pub async fn session_stats(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
    Query(params): Query<StatsParams>,
) -> ApiResult<Json<StatsResponse>> {
    let selection = parse_selection(params.tracks.as_deref())?;

    let table = state.session(&session).await;
    let table = table.lock().await;

    let stats = compute_stats(table.tickets(), &selection);
    let all_tracks_selected = Track::all().iter().all(|t| selection.contains(t));

    Ok(Json(StatsResponse {
        filtered_total: stats.filtered_total,
        open_count: stats.open_count,
        first_response_hours: FIRST_RESPONSE_HOURS,
        avg_resolution_hours: AVG_RESOLUTION_HOURS,
        status_by_month: stats.status_by_month,
        priorities: stats.priorities,
        tracks: stats.tracks,
        all_tracks_selected,
    }))
}

/// Parse the comma-separated track selection
fn parse_selection(tracks: Option<&str>) -> ApiResult<Vec<Track>> {
    match tracks {
        None => Ok(Track::all().to_vec()),
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(parse_track)
            .collect(),
    }
}
