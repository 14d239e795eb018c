//! Earth-resources filter API service library.
//!
//! Dispatches filtered mine, mineral occurrence, and mining activity
//! queries to a caller-named WFS backend and normalizes every outcome
//! into one response envelope.

pub mod backend;
pub mod diagnostics;
pub mod dispatch;
pub mod envelope;
pub mod handlers;
pub mod metrics;
pub mod state;
