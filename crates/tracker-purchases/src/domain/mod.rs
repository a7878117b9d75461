//! Domain layer for the purchases context.

pub mod commands;
pub mod signals;
pub mod timestamp;
