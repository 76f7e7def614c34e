//! # Trackdesk
//!
//! Session-scoped IT ticketing workflow service: generate a synthetic ticket
//! table per session, accept submissions and grid edits, and serve the
//! derived aggregates an external dashboard renders as charts.
//!
//! ## Modules
//!
//! - [`ticket`]: the in-memory ticket table, synthetic generator, submission
//!   and edit reconciliation
//! - [`analytics`]: pure derived views (track filter, grouped counts)
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use trackdesk::analytics::compute_stats;
//! use trackdesk::ticket::{Priority, TicketTable, Track};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // One table per session, seeded once
//!     let mut table = TicketTable::seeded(42);
//!
//!     // Submit a ticket from a form event
//!     let ticket = table.submit("Broker unreachable", Priority::High, Track::Kafka)?;
//!     println!("Filed {}", ticket.id);
//!
//!     // Recompute the chart aggregates
//!     let stats = compute_stats(table.tickets(), &[Track::Kafka]);
//!     println!("{} open KAFKA tickets", stats.open_count);
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod config;
pub mod ticket;

// Re-export top-level types for convenience
pub use ticket::{
    generate_tickets, EditOutcome, Priority, Status, Ticket, TicketEdit, TicketError,
    TicketResult, TicketTable, Track,
};

pub use analytics::{compute_stats, filter_by_track, TicketStats};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    ApiConfig as ConfigApiConfig, Config, ConfigError, GeneratorConfig, LoggingConfig,
};
