//! Event log implementations for the purchase tracker.

pub mod in_memory_event_log;

pub use in_memory_event_log::InMemoryEventLog;
