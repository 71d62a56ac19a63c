//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace span, metrics)
//!     → handlers.rs (form parsing, reshaping)
//!     → [backend client makes the one outbound call]
//!     → handlers.rs (relay body / empty 200 / HTML fragment)
//!     → error.rs (any failure → generic 500)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ProxyError, ProxyResult, GENERIC_FAILURE_MESSAGE};
pub use server::{AppState, HttpServer};
