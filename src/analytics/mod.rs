//! Derived views over the ticket table
//!
//! Pure recomputation: given the current table and a track selection, produce
//! the filtered view and the grouped counts the dashboard charts consume.
//! Nothing here holds state, so recomputing on equal inputs always yields
//! equal results.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::ticket::{Priority, Status, Ticket, Track};

/// Aggregates for one (table, selection) pair
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TicketStats {
    /// Rows surviving the track filter
    pub filtered_total: usize,
    /// Filtered rows with status `Open`
    pub open_count: usize,
    /// Counts grouped by (month of submission, status), for the status chart
    pub status_by_month: Vec<StatusMonthCount>,
    /// Counts by priority, fixed High/Medium/Low order, zeros included
    pub priorities: Vec<PriorityCount>,
    /// Counts by track with the stable color encoding, catalog order, zeros included
    pub tracks: Vec<TrackCount>,
}

/// One bar group of the status-per-month chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusMonthCount {
    /// Calendar month number, 1-12
    pub month: u32,
    pub status: Status,
    pub count: usize,
}

/// One slice of the priority chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: usize,
}

/// One bar of the per-track chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrackCount {
    pub track: Track,
    pub count: usize,
    /// Display color, fixed per track
    pub color: &'static str,
}

/// Rows whose track is in the selection, in table order
///
/// An empty selection yields an empty view.
pub fn filter_by_track<'a>(tickets: &'a [Ticket], selected: &[Track]) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|t| selected.contains(&t.track))
        .collect()
}

/// Compute the full aggregate set for the dashboard charts
pub fn compute_stats(tickets: &[Ticket], selected: &[Track]) -> TicketStats {
    let filtered = filter_by_track(tickets, selected);

    let open_count = filtered
        .iter()
        .filter(|t| t.status == Status::Open)
        .count();

    // BTreeMap keeps the chart groups in stable (month, status) order
    let mut by_month: BTreeMap<(u32, Status), usize> = BTreeMap::new();
    for ticket in &filtered {
        *by_month
            .entry((ticket.date_submitted.month(), ticket.status))
            .or_insert(0) += 1;
    }
    let status_by_month = by_month
        .into_iter()
        .map(|((month, status), count)| StatusMonthCount {
            month,
            status,
            count,
        })
        .collect();

    let priorities = Priority::all()
        .iter()
        .map(|&priority| PriorityCount {
            priority,
            count: filtered.iter().filter(|t| t.priority == priority).count(),
        })
        .collect();

    let tracks = Track::all()
        .iter()
        .map(|&track| TrackCount {
            track,
            count: filtered.iter().filter(|t| t.track == track).count(),
            color: track.color(),
        })
        .collect();

    TicketStats {
        filtered_total: filtered.len(),
        open_count,
        status_by_month,
        priorities,
        tracks,
    }
}
