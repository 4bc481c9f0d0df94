use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Form, Router,
};
use daypage_tasks::{AddOutcome, EditOutcome, TaskId};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::render;
use crate::state::AppState;

const PAGE_CSS: &str = include_str!("../static/page.css");

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/page.css", get(stylesheet))
        .route("/health", get(health))
        .route("/tasks", post(add_task))
        .route("/tasks/:id/edit", post(begin_edit))
        .route("/tasks/:id/delete", post(delete_task))
        .route("/edit/save", post(save_edit))
        .route("/edit/cancel", post(cancel_edit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveEditForm {
    #[serde(default)]
    pub text: String,
    pub via: Option<String>,
}

/// Which interaction committed an inline edit. All of them save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTrigger {
    Button,
    Blur,
    ConfirmKey,
}

impl EditTrigger {
    pub fn from_form(via: Option<&str>) -> Self {
        match via {
            Some("blur") => Self::Blur,
            Some("enter") => Self::ConfirmKey,
            _ => Self::Button,
        }
    }
}

// GET / - render the whole page; weather is fetched once per render
async fn index(State(state): State<AppState>) -> Html<String> {
    let panel = state.load_weather_panel().await;
    let weather_html = render::render_weather_panel(&panel);

    let tasks_html = {
        let editor = state.editor.lock();
        render::render_task_section(&editor)
    };

    Html(render::render_page(&state.page, &weather_html, &tasks_html))
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], PAGE_CSS)
}

async fn health() -> &'static str {
    "ok"
}

// POST /tasks
async fn add_task(State(state): State<AppState>, Form(form): Form<TaskForm>) -> Redirect {
    if let AddOutcome::Added(id) = state.editor.lock().add(&form.text) {
        tracing::info!(task_id = %id, "Task created");
    }
    Redirect::to("/")
}

// POST /tasks/:id/edit
async fn begin_edit(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    if let Some(id) = parse_task_id(&id) {
        state.editor.lock().begin_edit(id);
    }
    Redirect::to("/")
}

// POST /tasks/:id/delete
async fn delete_task(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    if let Some(id) = parse_task_id(&id) {
        if state.editor.lock().delete(id) {
            tracing::info!(task_id = %id, "Task deleted");
        }
    }
    Redirect::to("/")
}

// POST /edit/save
async fn save_edit(State(state): State<AppState>, Form(form): Form<SaveEditForm>) -> Redirect {
    // Every trigger commits through the same save; the trigger is only logged.
    let trigger = EditTrigger::from_form(form.via.as_deref());
    tracing::debug!(?trigger, "Committing task edit");

    let outcome = {
        let mut editor = state.editor.lock();
        editor.set_edit_buffer(form.text);
        editor.save_edit()
    };

    if let EditOutcome::Saved(id) = outcome {
        tracing::info!(task_id = %id, "Task updated");
    }
    Redirect::to("/")
}

// POST /edit/cancel
async fn cancel_edit(State(state): State<AppState>) -> Redirect {
    state.editor.lock().cancel_edit();
    Redirect::to("/")
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    match raw.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!("Ignoring malformed task id {:?}", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_trigger_from_form() {
        assert_eq!(EditTrigger::from_form(Some("blur")), EditTrigger::Blur);
        assert_eq!(EditTrigger::from_form(Some("enter")), EditTrigger::ConfirmKey);
        assert_eq!(EditTrigger::from_form(Some("button")), EditTrigger::Button);
        assert_eq!(EditTrigger::from_form(Some("whatever")), EditTrigger::Button);
        assert_eq!(EditTrigger::from_form(None), EditTrigger::Button);
    }

    #[test]
    fn test_parse_task_id() {
        let id = TaskId::new();
        assert_eq!(parse_task_id(&id.to_string()), Some(id));
        assert_eq!(parse_task_id("nope"), None);
    }
}
