//! Core data types for the Trackdesk ticket table
//!
//! This module defines the fundamental types used throughout the service:
//! - `Ticket`: a single row of the in-memory ticket table
//! - `Status`, `Priority`, `Track`: the closed enum sets for the editable columns

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single ticket record
///
/// Rows are owned by one session's `TicketTable` and ordered newest-first
/// after a submission. `id` and `date_submitted` are fixed at creation time;
/// the remaining fields are editable through the reconciler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    /// Unique identifier, `PREFIX-<integer>` (e.g. `INC-1100`, `TICKET-1101`)
    pub id: String,
    /// Free-text description of the issue
    pub issue: String,
    /// Workflow state
    pub status: Status,
    /// Triage priority
    pub priority: Priority,
    /// Calendar date the ticket was filed
    pub date_submitted: NaiveDate,
    /// Technology track the ticket belongs to
    pub track: Track,
}

impl Ticket {
    pub fn new(
        id: impl Into<String>,
        issue: impl Into<String>,
        status: Status,
        priority: Priority,
        date_submitted: NaiveDate,
        track: Track,
    ) -> Self {
        Self {
            id: id.into(),
            issue: issue.into(),
            status,
            priority,
            date_submitted,
            track,
        }
    }
}

/// Workflow status of a ticket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
}

impl Status {
    /// Get all statuses for iteration
    pub fn all() -> &'static [Status] {
        &[Status::Open, Status::InProgress, Status::Closed]
    }

    /// Parse a wire-format status name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Status> {
        match s.to_lowercase().as_str() {
            "open" => Some(Status::Open),
            "in progress" | "in_progress" => Some(Status::InProgress),
            "closed" => Some(Status::Closed),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Open => write!(f, "Open"),
            Status::InProgress => write!(f, "In Progress"),
            Status::Closed => write!(f, "Closed"),
        }
    }
}

/// Triage priority of a ticket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Get all priorities for iteration, highest first
    pub fn all() -> &'static [Priority] {
        &[Priority::High, Priority::Medium, Priority::Low]
    }

    /// Parse a wire-format priority name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Priority> {
        match s.to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// Technology track a ticket is filed against
///
/// A closed set; each track carries a fixed display color used by the
/// track chart so the encoding is stable across recomputations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Track {
    Tibco,
    Kafka,
    Mq,
    Solace,
    Abinitio,
    Datastage,
}

impl Track {
    /// Get all tracks for iteration, in catalog order
    pub fn all() -> &'static [Track] {
        &[
            Track::Tibco,
            Track::Kafka,
            Track::Mq,
            Track::Solace,
            Track::Abinitio,
            Track::Datastage,
        ]
    }

    /// Parse a wire-format track name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Track> {
        match s.to_lowercase().as_str() {
            "tibco" => Some(Track::Tibco),
            "kafka" => Some(Track::Kafka),
            "mq" => Some(Track::Mq),
            "solace" => Some(Track::Solace),
            "abinitio" => Some(Track::Abinitio),
            "datastage" => Some(Track::Datastage),
            _ => None,
        }
    }

    /// Fixed display color for this track's chart encoding
    pub fn color(&self) -> &'static str {
        match self {
            Track::Tibco => "#FF4136",
            Track::Kafka => "#FF851B",
            Track::Mq => "#FFDC00",
            Track::Solace => "#2ECC40",
            Track::Abinitio => "#0074D9",
            Track::Datastage => "#B10DC9",
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Track::Tibco => write!(f, "TIBCO"),
            Track::Kafka => write!(f, "KAFKA"),
            Track::Mq => write!(f, "MQ"),
            Track::Solace => write!(f, "SOLACE"),
            Track::Abinitio => write!(f, "ABINITIO"),
            Track::Datastage => write!(f, "DATASTAGE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_name() {
        assert_eq!(Status::from_name("open"), Some(Status::Open));
        assert_eq!(Status::from_name("In Progress"), Some(Status::InProgress));
        assert_eq!(Status::from_name("CLOSED"), Some(Status::Closed));
        assert_eq!(Status::from_name("done"), None);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let back: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Status::InProgress);
    }

    #[test]
    fn test_track_wire_format() {
        let json = serde_json::to_string(&Track::Datastage).unwrap();
        assert_eq!(json, "\"DATASTAGE\"");
        assert_eq!(Track::from_name("datastage"), Some(Track::Datastage));
        assert_eq!(Track::from_name("ORACLE"), None);
    }

    #[test]
    fn test_track_colors_are_distinct() {
        let colors: std::collections::HashSet<_> =
            Track::all().iter().map(|t| t.color()).collect();
        assert_eq!(colors.len(), Track::all().len());
    }

    #[test]
    fn test_display_matches_wire_names() {
        for track in Track::all() {
            let wire = serde_json::to_string(track).unwrap();
            assert_eq!(wire, format!("\"{}\"", track));
        }
        for status in Status::all() {
            let wire = serde_json::to_string(status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status));
        }
    }
}
