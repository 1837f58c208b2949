//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → handlers.rs (greeting / echo validation)
//!     → JSON response to client
//! ```

pub mod handlers;
pub mod server;

pub use server::HttpServer;
