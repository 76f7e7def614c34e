//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::analytics::{PriorityCount, StatusMonthCount, TrackCount};
use crate::ticket::{Priority, Status, Ticket, Track};

// ============================================
// TICKET DTOs
// ============================================

/// New ticket submission request
///
/// Enum-valued fields arrive as their widget strings and are parsed at the
/// boundary; issue text is free-form and may be empty.
#[derive(Debug, Deserialize)]
pub struct SubmitTicketRequest {
    /// Free-text issue description (empty accepted)
    #[serde(default)]
    pub issue: String,
    /// Priority: High, Medium, Low
    pub priority: String,
    /// Track name, e.g. KAFKA
    pub track: String,
}

/// A single ticket row on the wire
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: String,
    pub issue: String,
    pub status: Status,
    pub priority: Priority,
    /// ISO 8601 calendar date
    pub date_submitted: String,
    pub track: Track,
}

impl From<&Ticket> for TicketResponse {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            issue: ticket.issue.clone(),
            status: ticket.status,
            priority: ticket.priority,
            date_submitted: ticket.date_submitted.to_string(),
            track: ticket.track,
        }
    }
}

/// Full table listing response
#[derive(Debug, Serialize)]
pub struct TableResponse {
    /// Rows in table order (newest submission first)
    pub tickets: Vec<TicketResponse>,
    /// Total row count
    pub total: usize,
}

// ============================================
// EDIT DTOs
// ============================================

/// Edit batch request
#[derive(Debug, Deserialize)]
pub struct EditTicketsRequest {
    /// Per-row edits; later entries win over earlier ones for the same cell
    pub edits: Vec<TicketEditDto>,
}

/// Edit to one row; omitted fields leave cells untouched
///
/// `id` only names the row and `date_submitted` is not expressible, so
/// neither column can change through this request.
#[derive(Debug, Deserialize)]
pub struct TicketEditDto {
    pub id: String,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub track: Option<String>,
}

/// Edit batch response
#[derive(Debug, Serialize)]
pub struct EditTicketsResponse {
    /// Edits merged into the table
    pub applied: usize,
    /// Edits naming unknown ids, skipped
    pub skipped: usize,
    /// Table length after the batch (edits never change it)
    pub total: usize,
}

// ============================================
// STATS DTOs
// ============================================

/// Stats query parameters
#[derive(Debug, Deserialize)]
pub struct StatsParams {
    /// Comma-separated track names; absent = all tracks, empty = none
    #[serde(default)]
    pub tracks: Option<String>,
}

/// Aggregate response for the dashboard charts and metric tiles
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Rows surviving the track filter
    pub filtered_total: usize,
    /// Open tickets in the filtered view
    pub open_count: usize,
    /// Fixed display metric: first response time in hours
    pub first_response_hours: f64,
    /// Fixed display metric: average resolution time in hours
    pub avg_resolution_hours: f64,
    /// Grouped counts for the status-per-month chart
    pub status_by_month: Vec<StatusMonthCount>,
    /// Grouped counts for the priority chart
    pub priorities: Vec<PriorityCount>,
    /// Grouped counts for the track chart, with color encoding
    pub tracks: Vec<TrackCount>,
    /// Whether the selection covers the whole track catalog
    pub all_tracks_selected: bool,
}

// ============================================
// TRACK CATALOG DTOs
// ============================================

/// One track catalog entry
#[derive(Debug, Serialize)]
pub struct TrackInfo {
    pub name: Track,
    /// Fixed display color
    pub color: &'static str,
}

/// Track catalog response
#[derive(Debug, Serialize)]
pub struct TrackListResponse {
    pub tracks: Vec<TrackInfo>,
    pub total: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Number of live sessions
    pub sessions: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
