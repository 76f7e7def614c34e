//! API route handlers

pub mod health;
pub mod stats;
pub mod tickets;
pub mod tracks;
