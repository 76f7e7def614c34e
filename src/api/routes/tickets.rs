//! Ticket Routes
//!
//! Endpoints for one session's ticket table.
//!
//! - GET /api/v1/sessions/:session/tickets - List the table
//! - POST /api/v1/sessions/:session/tickets - Submit a new ticket
//! - PATCH /api/v1/sessions/:session/tickets - Reconcile grid edits

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    EditTicketsRequest, EditTicketsResponse, SubmitTicketRequest, TableResponse, TicketEditDto,
    TicketResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::ticket::{Priority, Status, TicketEdit, Track};

/// GET /api/v1/sessions/:session/tickets
///
/// List the session's table, newest submission first. Accessing an unknown
/// session seeds it.
pub async fn list_tickets(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
) -> ApiResult<Json<TableResponse>> {
    let table = state.session(&session).await;
    let table = table.lock().await;

    let tickets: Vec<TicketResponse> = table.tickets().iter().map(TicketResponse::from).collect();

    Ok(Json(TableResponse {
        total: tickets.len(),
        tickets,
    }))
}

/// POST /api/v1/sessions/:session/tickets
///
/// Submit a new ticket from the form widget. The new row is echoed back so
/// the frontend can confirm the submission details.
pub async fn submit_ticket(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
    Json(req): Json<SubmitTicketRequest>,
) -> ApiResult<(StatusCode, Json<TicketResponse>)> {
    let priority = parse_priority(&req.priority)?;
    let track = parse_track(&req.track)?;

    let table = state.session(&session).await;
    let mut table = table.lock().await;

    let ticket = table.submit(req.issue, priority, track)?;
    let response = TicketResponse::from(ticket);

    tracing::info!(
        session_id = %session,
        ticket_id = %response.id,
        track = %track,
        "Submitted ticket"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH /api/v1/sessions/:session/tickets
///
/// Merge a batch of grid edits into the table. Unknown ids are skipped and
/// counted; the table length never changes here.
pub async fn edit_tickets(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
    Json(req): Json<EditTicketsRequest>,
) -> ApiResult<Json<EditTicketsResponse>> {
    if req.edits.is_empty() {
        return Err(ApiError::Validation("Empty edit batch".to_string()));
    }

    let edits = req
        .edits
        .iter()
        .map(parse_edit)
        .collect::<ApiResult<Vec<_>>>()?;

    let table = state.session(&session).await;
    let mut table = table.lock().await;

    let outcome = table.apply_edits(&edits);

    tracing::info!(
        session_id = %session,
        applied = outcome.applied,
        skipped = outcome.skipped,
        "Reconciled ticket edits"
    );

    Ok(Json(EditTicketsResponse {
        applied: outcome.applied,
        skipped: outcome.skipped,
        total: table.len(),
    }))
}

/// Parse an edit DTO into a domain edit
fn parse_edit(dto: &TicketEditDto) -> ApiResult<TicketEdit> {
    if dto.id.is_empty() {
        return Err(ApiError::Validation("Edit is missing a ticket id".to_string()));
    }

    Ok(TicketEdit {
        id: dto.id.clone(),
        issue: dto.issue.clone(),
        status: dto.status.as_deref().map(parse_status).transpose()?,
        priority: dto.priority.as_deref().map(parse_priority).transpose()?,
        track: dto.track.as_deref().map(parse_track).transpose()?,
    })
}

/// Parse status string
fn parse_status(s: &str) -> ApiResult<Status> {
    Status::from_name(s).ok_or_else(|| {
        ApiError::Validation(format!(
            "Invalid status: {}. Use Open, In Progress, or Closed",
            s
        ))
    })
}

/// Parse priority string
fn parse_priority(s: &str) -> ApiResult<Priority> {
    Priority::from_name(s).ok_or_else(|| {
        ApiError::Validation(format!("Invalid priority: {}. Use High, Medium, or Low", s))
    })
}

/// Parse track string
pub(crate) fn parse_track(s: &str) -> ApiResult<Track> {
    Track::from_name(s).ok_or_else(|| {
        ApiError::Validation(format!(
            "Invalid track: {}. Use TIBCO, KAFKA, MQ, SOLACE, ABINITIO, or DATASTAGE",
            s
        ))
    })
}
