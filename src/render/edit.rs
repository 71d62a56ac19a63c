//! In-place edit form for a single to-do.

use crate::render::{escape_html, Template};

/// Earliest value the time picker offers.
const TIME_MIN: &str = "2018-06-07T00:00";

/// `<li>` that replaces a to-do row while it is being edited.
///
/// Saving posts the form to `/api/todo/{id}` and removes the button's row.
#[derive(Debug, Clone)]
pub struct EditTodoFragment {
    id: String,
}

impl EditTodoFragment {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Template for EditTodoFragment {
    fn render(&self) -> String {
        let id = escape_html(&self.id);
        format!(
            r#"<li id="todo-{id}">
  <form class="todo" action="submit" method="update">
    <div>
      <label for="description">Description:</label>
      <textarea id="description" name="description" rows="1" cols="50" required></textarea>
    </div>
    <div>
      <label for="time">Time:</label>
      <input type="datetime-local" id="time" name="time" min="{min}" />
    </div>
    <button id="save-{id}" hx-post="/api/todo/{id}" hx-swap="delete" hx-target="this">
      Save
    </button>
  </form>
</li>"#,
            id = id,
            min = TIME_MIN,
        )
    }
}
