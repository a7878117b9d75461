//! Purchase Tracker — purchases bounded context.
//!
//! Responsible for turning a validated purchase request into a timestamped
//! event in the log, and for reporting windowed purchase counts.

pub mod application;
pub mod domain;
