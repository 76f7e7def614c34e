//! Ticket domain: table state, synthetic generation, submission, reconciliation
//!
//! This is the core of the service. Everything here is synchronous and
//! in-memory; the API layer owns the session boundaries and locking.

pub mod error;
pub mod generator;
pub mod table;
pub mod types;

pub use error::{TicketError, TicketResult};
pub use generator::{generate_tickets, GENERATED_COUNT, GENERATED_PREFIX};
pub use table::{EditOutcome, TicketEdit, TicketTable, SUBMITTED_PREFIX};
pub use types::{Priority, Status, Ticket, Track};
