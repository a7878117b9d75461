//! Application layer for the purchases context.

pub mod command_handlers;
pub mod query_handlers;
