//! Server-rendered front end for a to-do list application.
//!
//! Every route is a thin proxy onto an external to-do REST backend: the
//! inbound request is reshaped, forwarded to a fixed backend path, and the
//! answer (or a generic failure) is relayed back as JSON or an HTML fragment.
//!
//! ```text
//!   Browser / htmx ──▶ http::server ──▶ http::handlers ──▶ backend::client ──▶ to-do backend
//!                          │                  │
//!                          │                  ├─ todo   (form → Todo, timestamps)
//!                          │                  └─ render (HTML fragments)
//!                          └─ observability / lifecycle
//! ```

pub mod backend;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod todo;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
