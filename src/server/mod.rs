use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::model::StyleConfiguration;
use crate::session::{EditorSession, FieldEdit};

mod css;
mod inline_js;
mod page;
mod panels;

use panels::Visibility;

struct EditorState {
    /// Configuration `/reset` returns to.
    initial: StyleConfiguration,
    session: EditorSession,
}

type SharedState = Arc<Mutex<EditorState>>;

/// Build the editor app around `session`. Exposed for in-process testing.
pub fn editor_router(session: EditorSession) -> Router {
    let state = Arc::new(Mutex::new(EditorState {
        initial: session.config().clone(),
        session,
    }));

    Router::new()
        .route("/", get(serve_editor))
        .route("/state", get(serve_state))
        .route("/edit", post(serve_edit))
        .route("/generate", post(serve_generate))
        .route("/reset", post(serve_reset))
        .route("/preview.html", get(serve_preview_page))
        .route("/export/css", get(serve_export_css))
        .with_state(state)
}

/// Start the local editor on `127.0.0.1:<port>`.
pub async fn run_editor_server(
    session: EditorSession,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = editor_router(session);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    tracing::info!(%addr, "textbox styler editor listening");
    eprintln!("Textbox Styler");
    eprintln!("  editor:  http://localhost:{port}/");
    eprintln!("  preview: http://localhost:{port}/preview.html");
    eprintln!("  export:  http://localhost:{port}/export/css");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// ── Snapshot ──────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    config: StyleConfiguration,
    output: Option<String>,
    error: Option<String>,
    preview: PreviewSnapshot,
    visible: Visibility,
}

#[derive(Serialize)]
struct PreviewSnapshot {
    header: String,
    content: String,
    container: String,
    html: String,
}

impl Snapshot {
    fn of(session: &EditorSession) -> Self {
        let config = session.config();
        let preview = session.preview();
        Self {
            preview: PreviewSnapshot {
                header: preview.header.to_css(),
                content: preview.content.to_css(),
                container: preview.container.to_css(),
                html: preview.to_html(&config.title, &config.content),
            },
            visible: Visibility::of(config),
            config: config.clone(),
            output: session.output().map(str::to_string),
            error: session.error().map(str::to_string),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, error: impl ToString) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

fn lock(state: &SharedState) -> Result<MutexGuard<'_, EditorState>, Response> {
    state
        .lock()
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Lock error: {e}")))
}

// ── Route handlers ────────────────────────────────────────────────────

/// Serve the form page.
async fn serve_editor(State(state): State<SharedState>) -> Html<String> {
    match state.lock() {
        Ok(s) => {
            let snapshot = Snapshot::of(&s.session);
            match serde_json::to_string(&snapshot) {
                Ok(json) => Html(page::build_editor_page(&s.session, &json)),
                Err(e) => Html(page::build_error_page(&format!("Snapshot error: {e}"))),
            }
        }
        Err(e) => Html(page::build_error_page(&format!("Lock error: {e}"))),
    }
}

async fn serve_state(State(state): State<SharedState>) -> Response {
    match lock(&state) {
        Ok(s) => Json(Snapshot::of(&s.session)).into_response(),
        Err(resp) => resp,
    }
}

// ── POST /edit: one control changed ───────────────────────────────────

async fn serve_edit(State(state): State<SharedState>, Json(edit): Json<FieldEdit>) -> Response {
    let mut s = match lock(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    if let Err(e) = s.session.apply(edit) {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, e);
    }
    Json(Snapshot::of(&s.session)).into_response()
}

// ── POST /generate: validate and render ───────────────────────────────

async fn serve_generate(State(state): State<SharedState>) -> Response {
    let mut s = match lock(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    s.session.generate();
    Json(Snapshot::of(&s.session)).into_response()
}

async fn serve_reset(State(state): State<SharedState>) -> Response {
    let mut s = match lock(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    s.session = EditorSession::from_saved(s.initial.clone());
    Json(Snapshot::of(&s.session)).into_response()
}

/// Standalone preview of the current configuration (no editor chrome).
async fn serve_preview_page(State(state): State<SharedState>) -> Response {
    match lock(&state) {
        Ok(s) => Html(crate::runtime::preview_page(
            s.session.config(),
            s.session.output(),
        ))
        .into_response(),
        Err(resp) => resp,
    }
}

// ── Export ────────────────────────────────────────────────────────────

async fn serve_export_css(State(state): State<SharedState>) -> Response {
    let s = match lock(&state) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    match crate::export_stylesheet(s.session.config()) {
        Ok(css) => (
            [
                (header::CONTENT_TYPE, "text/css; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"textbox.scss\"",
                ),
            ],
            css,
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            e.to_string(),
        )
            .into_response(),
    }
}
