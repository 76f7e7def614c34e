//! Error types for the ticket table

use thiserror::Error;

/// Errors from ticket table operations
#[derive(Error, Debug)]
pub enum TicketError {
    /// A ticket id did not have the expected `PREFIX-<integer>` shape
    #[error("Malformed ticket id: '{0}' (expected PREFIX-<integer>)")]
    MalformedId(String),
}

/// Result type for ticket table operations
pub type TicketResult<T> = Result<T, TicketError>;
