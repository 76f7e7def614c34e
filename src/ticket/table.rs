//! The session-owned ticket table
//!
//! One `TicketTable` exists per session, created by the generator on first
//! access and mutated only through [`TicketTable::submit`] and
//! [`TicketTable::apply_edits`]. There is no delete operation.

use chrono::Utc;

use crate::ticket::error::{TicketError, TicketResult};
use crate::ticket::generator::generate_tickets;
use crate::ticket::types::{Priority, Status, Ticket, Track};

/// Id prefix for user-submitted tickets
pub const SUBMITTED_PREFIX: &str = "TICKET";

/// The in-memory ticket table for one session
///
/// Rows keep insertion order; submissions prepend, so the newest ticket is
/// always at index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketTable {
    tickets: Vec<Ticket>,
}

/// An edit to one existing row
///
/// Only the editable columns are expressible; `id` names the row and
/// `date_submitted` has no field here, so neither can change through
/// reconciliation. `None` leaves a cell untouched.
#[derive(Debug, Clone, Default)]
pub struct TicketEdit {
    pub id: String,
    pub issue: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub track: Option<Track>,
}

/// Result of reconciling an edit batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    /// Edits that matched a row and were merged
    pub applied: usize,
    /// Edits naming an id not present in the table
    pub skipped: usize,
}

impl TicketTable {
    /// Create a table from existing rows
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// Create a table populated by the synthetic generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(generate_tickets(seed))
    }

    /// Current rows, newest-first after any submission
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Submit a new ticket
    ///
    /// The id number is derived from the *lexicographic* maximum of the id
    /// column, matching the behavior this table models: after the first
    /// submission the maximum flips from the `INC-` population to the new
    /// `TICKET-` row, since `T` sorts after `I`. Status is always `Open`,
    /// the date is today (UTC), and the row is prepended. Empty issue text
    /// is accepted as-is.
    pub fn submit(
        &mut self,
        issue: impl Into<String>,
        priority: Priority,
        track: Track,
    ) -> TicketResult<&Ticket> {
        let number = self.lexical_max_id_number()?;

        let ticket = Ticket::new(
            format!("{}-{}", SUBMITTED_PREFIX, number + 1),
            issue,
            Status::Open,
            priority,
            Utc::now().date_naive(),
            track,
        );

        self.tickets.insert(0, ticket);
        Ok(&self.tickets[0])
    }

    /// Merge a batch of edits into the table
    ///
    /// Edits merge by row id, last writer wins per cell within the batch.
    /// An edit naming an unknown id is skipped and counted, not an error:
    /// the single-user grid this reconciles from cannot invent rows, so a
    /// miss is a stale snapshot rather than a fault.
    pub fn apply_edits(&mut self, edits: &[TicketEdit]) -> EditOutcome {
        let mut outcome = EditOutcome {
            applied: 0,
            skipped: 0,
        };

        for edit in edits {
            match self.tickets.iter_mut().find(|t| t.id == edit.id) {
                Some(row) => {
                    if let Some(issue) = &edit.issue {
                        row.issue = issue.clone();
                    }
                    if let Some(status) = edit.status {
                        row.status = status;
                    }
                    if let Some(priority) = edit.priority {
                        row.priority = priority;
                    }
                    if let Some(track) = edit.track {
                        row.track = track;
                    }
                    outcome.applied += 1;
                }
                None => {
                    tracing::warn!(ticket_id = %edit.id, "Edit names unknown ticket, skipping");
                    outcome.skipped += 1;
                }
            }
        }

        outcome
    }

    /// Numeric suffix of the lexicographically greatest id, 0 for an empty table
    fn lexical_max_id_number(&self) -> TicketResult<u32> {
        let Some(max_id) = self.tickets.iter().map(|t| t.id.as_str()).max() else {
            return Ok(0);
        };

        max_id
            .rsplit_once('-')
            .and_then(|(_, suffix)| suffix.parse().ok())
            .ok_or_else(|| TicketError::MalformedId(max_id.to_string()))
    }
}
