//! HTML fragments returned to htmx-driven pages.
//!
//! Markup lives here, away from the HTTP plumbing, so it can be tested on its
//! own. Handlers only pick a template and wrap the rendered string.

pub mod edit;

pub use edit::EditTodoFragment;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

/// Something that renders to a complete response body.
pub trait Template {
    fn render(&self) -> String;

    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }
}

/// Response wrapper for any template.
pub struct Rendered<T>(pub T);

impl<T: Template> IntoResponse for Rendered<T> {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, self.0.content_type())], self.0.render()).into_response()
    }
}

/// Escape text for use inside HTML attributes and element content.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("42"), "42");
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[tokio::test]
    async fn test_rendered_sets_content_type() {
        let response = Rendered(EditTodoFragment::new("9")).into_response();
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }
}
