//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Per-request spans come from tower-http's TraceLayer
//! - Filter overridable at runtime through RUST_LOG

pub mod logging;
