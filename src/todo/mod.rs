//! To-do data model shared by the handlers and the backend client.

pub mod time;
pub mod types;

pub use time::{normalize_time, normalize_time_in, TimeError};
pub use types::{Todo, TodoForm, Todos};
