//! To-do records as the backend understands them.

use serde::{Deserialize, Serialize};

use crate::todo::time::normalize_time;
use crate::todo::TimeError;

/// A single task record.
///
/// Field names follow the backend's JSON schema exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Todo {
    /// Backend-assigned identifier; 0 until created.
    pub id: i64,
    pub description: String,
    /// ISO-8601 UTC timestamp, or empty.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub completed: bool,
}

/// Ordered collection of to-dos. The backend is authoritative for uniqueness.
pub type Todos = Vec<Todo>;

/// Fields submitted by the create and edit forms.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TodoForm {
    pub description: Option<String>,
    pub time: Option<String>,
}

impl TodoForm {
    /// Build the backend record for this submission.
    ///
    /// New and edited records always go out as not completed.
    pub fn into_todo(self, id: i64) -> Result<Todo, TimeError> {
        let time = normalize_time(self.time.as_deref().unwrap_or_default())?;
        Ok(Todo {
            id,
            description: self.description.unwrap_or_default(),
            time,
            completed: false,
        })
    }
}
