//! Utility modules.

/// Timestamp formatting and serde helpers for the Monasca wire format.
pub mod datetime;

/// Log sanitization utilities to keep tokens and large bodies out of logs.
pub(crate) mod log_sanitizer;
