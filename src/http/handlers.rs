//! Route handlers.
//!
//! Each handler reshapes the inbound request, makes at most one backend
//! call through `BackendClient`, and reshapes the answer. Failures surface
//! as `ProxyError`, which renders the generic 500.

use axum::{
    body::{Body, Bytes},
    extract::{rejection::FormRejection, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Serialize;

use crate::http::error::{ProxyError, ProxyResult};
use crate::http::server::AppState;
use crate::render::{EditTodoFragment, Rendered};
use crate::todo::TodoForm;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

/// `GET /api/todos`
pub async fn list_todos(State(state): State<AppState>) -> ProxyResult<Response> {
    let body = state.backend.list().await?;
    Ok(json_body(body))
}

/// `GET /api/todo/{id}`
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ProxyResult<Response> {
    let body = state.backend.get(&id).await?;
    Ok(json_body(body))
}

/// `POST /api/todo/{id}`
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<TodoForm>, FormRejection>,
) -> ProxyResult<StatusCode> {
    update(&state, Some(&id), form).await
}

/// `POST /api/todo/` — the edit form submitted without an id.
pub async fn update_todo_without_id(
    State(state): State<AppState>,
    form: Result<Form<TodoForm>, FormRejection>,
) -> ProxyResult<StatusCode> {
    update(&state, None, form).await
}

async fn update(
    state: &AppState,
    id: Option<&str>,
    form: Result<Form<TodoForm>, FormRejection>,
) -> ProxyResult<StatusCode> {
    let id = id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ProxyError::Validation("Id is required".into()))?;
    let numeric_id: i64 = id
        .parse()
        .map_err(|_| ProxyError::Validation(format!("Id '{}' is not an integer", id)))?;

    let todo = read_form(form)?.into_todo(numeric_id)?;
    state.backend.update(id, &todo).await?;
    Ok(StatusCode::OK)
}

/// `DELETE /api/todo/{id}`
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ProxyResult<StatusCode> {
    state.backend.delete(&id).await?;
    Ok(StatusCode::OK)
}

/// `POST /api/todo`
///
/// The backend's answer is streamed through with status 200.
pub async fn create_todo(
    State(state): State<AppState>,
    form: Result<Form<TodoForm>, FormRejection>,
) -> ProxyResult<Response> {
    tracing::debug!("POST /api/todo");
    let todo = read_form(form)?.into_todo(0)?;
    let upstream = state.backend.create(&todo).await?;

    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let mut response = Body::from_stream(upstream.bytes_stream()).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

/// `POST /api/todo/toggle/{id}`
pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ProxyResult<StatusCode> {
    state.backend.toggle(&id).await?;
    Ok(StatusCode::OK)
}

/// `GET /api/todo/edit/{id}`
pub async fn edit_fragment(Path(id): Path<String>) -> Rendered<EditTodoFragment> {
    Rendered(EditTodoFragment::new(id))
}

fn read_form(form: Result<Form<TodoForm>, FormRejection>) -> ProxyResult<TodoForm> {
    form.map(|Form(form)| form)
        .map_err(|e| ProxyError::Validation(e.body_text()))
}

fn json_body(body: Bytes) -> Response {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response()
}
