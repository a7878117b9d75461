//! Purchase Tracker Core — shared domain abstractions.
//!
//! This crate defines the purchase event, the event log contract, and the
//! clock and error types that the other crates depend on. It contains no
//! infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod log;
pub mod window;
