//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Init logging → Bind listener → Serve
//!
//! Shutdown:
//!     Ctrl+C (or test trigger) → broadcast → drain in-flight → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Shutdown is cooperative via a broadcast channel

pub mod shutdown;

pub use shutdown::Shutdown;
