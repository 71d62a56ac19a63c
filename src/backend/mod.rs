//! Outbound access to the to-do backend.
//!
//! # Data Flow
//! ```text
//! handler (reshaped request)
//!     → client.rs (URL from config, one reqwest call)
//!     → backend service
//!     → client.rs (status / body classification)
//!     → handler (relay or ProxyError)
//! ```

pub mod client;

pub use client::{BackendClient, ClientBuildError};
