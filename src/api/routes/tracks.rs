//! Track Catalog Routes
//!
//! The closed track set with its display colors, for the external form,
//! multiselect, and chart widgets.
//!
//! - GET /api/v1/tracks

use axum::Json;

use crate::api::dto::{TrackInfo, TrackListResponse};
use crate::ticket::Track;

/// GET /api/v1/tracks
///
/// List the track catalog in fixed order with the stable color encoding.
pub async fn list_tracks() -> Json<TrackListResponse> {
    let tracks: Vec<TrackInfo> = Track::all()
        .iter()
        .map(|&track| TrackInfo {
            name: track,
            color: track.color(),
        })
        .collect();

    Json(TrackListResponse {
        total: tracks.len(),
        tracks,
    })
}
