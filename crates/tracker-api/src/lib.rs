//! Purchase Tracker — HTTP boundary layer.
//!
//! Parses requests into commands and queries for the purchases context and
//! maps the results back to JSON responses.

pub mod client_ip;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod uptime;
