use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{Value, json};

/// In-memory stand-in for the notes API. Ids are integers handed out in
/// order; the list endpoint returns notes in insertion order.
#[derive(Debug, Default)]
pub struct StubState {
    pub notes: Vec<Value>,
    pub next_id: i64,
    /// When set, every request answers with this status and raw body.
    pub fail: Option<(StatusCode, String)>,
    /// Handlers sleep this long before answering.
    pub delay: Option<Duration>,
    /// (method, path, body) for every request received.
    pub requests: Vec<(String, String, Value)>,
    /// `User-Agent` of every request received, in order.
    pub user_agents: Vec<String>,
}

pub struct ServerGuard {
    pub base_url: String,
    pub state: Arc<Mutex<StubState>>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl ServerGuard {
    #[allow(dead_code)]
    pub fn fail_with(&self, status: StatusCode, body: &str) {
        self.state.lock().unwrap().fail = Some((status, body.to_string()));
    }

    #[allow(dead_code)]
    pub fn delay_responses(&self, delay: Duration) {
        self.state.lock().unwrap().delay = Some(delay);
    }

    /// Stores a note as-is, keeping whatever id it carries.
    #[allow(dead_code)]
    pub fn seed(&self, note: Value) {
        self.state.lock().unwrap().notes.push(note);
    }

    #[allow(dead_code)]
    pub fn user_agents(&self) -> Vec<String> {
        self.state.lock().unwrap().user_agents.clone()
    }

    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<(String, String, Value)> {
        self.state.lock().unwrap().requests.clone()
    }
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(t) = self.thread.take() {
            let _ = t.join();
        }
    }
}

type Shared = Arc<Mutex<StubState>>;

async fn record(
    state: &Shared,
    headers: &HeaderMap,
    method: &str,
    path: String,
    body: Value,
) -> Option<Response> {
    let delay = {
        let mut s = state.lock().unwrap();
        s.requests.push((method.to_string(), path, body));
        let agent = headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        s.user_agents.push(agent.to_string());
        s.delay
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    let s = state.lock().unwrap();
    s.fail
        .clone()
        .map(|(status, body)| (status, body).into_response())
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"message": "note not found"})),
    )
        .into_response()
}

/// Integer ids match their decimal form, string ids match verbatim.
fn id_matches(note: &Value, id: &str) -> bool {
    match &note["id"] {
        Value::String(s) => s == id,
        other => other.to_string() == id,
    }
}

async fn list_notes(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Some(resp) = record(&state, &headers, "GET", "/notes".to_string(), Value::Null).await {
        return resp;
    }
    let notes = state.lock().unwrap().notes.clone();
    Json(notes).into_response()
}

async fn create_note(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(resp) = record(&state, &headers, "POST", "/notes".to_string(), body.clone()).await {
        return resp;
    }
    let mut s = state.lock().unwrap();
    s.next_id += 1;
    let note = json!({
        "id": s.next_id,
        "title": body["title"],
        "content": body["content"],
    });
    s.notes.push(note.clone());
    (StatusCode::CREATED, Json(note)).into_response()
}

async fn update_note(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let path = format!("/notes/{}", id);
    if let Some(resp) = record(&state, &headers, "PUT", path, body.clone()).await {
        return resp;
    }
    let mut s = state.lock().unwrap();
    let Some(note) = s.notes.iter_mut().find(|n| id_matches(n, &id)) else {
        return not_found();
    };
    note["title"] = body["title"].clone();
    note["content"] = body["content"].clone();
    Json(note.clone()).into_response()
}

async fn delete_note(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let path = format!("/notes/{}", id);
    if let Some(resp) = record(&state, &headers, "DELETE", path, Value::Null).await {
        return resp;
    }
    let mut s = state.lock().unwrap();
    let before = s.notes.len();
    s.notes.retain(|n| !id_matches(n, &id));
    if s.notes.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

pub fn spawn_server() -> Result<ServerGuard> {
    let state: Shared = Arc::new(Mutex::new(StubState::default()));
    let app = Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/:id", put(update_note).delete(delete_note))
        .with_state(Arc::clone(&state));

    let (addr_tx, addr_rx) = std::sync::mpsc::channel();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let thread = thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(err) => {
                let _ = addr_tx.send(Err(anyhow::anyhow!("build runtime: {}", err)));
                return;
            }
        };
        rt.block_on(async move {
            let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
                Ok(l) => l,
                Err(err) => {
                    let _ = addr_tx.send(Err(anyhow::anyhow!("bind stub server: {}", err)));
                    return;
                }
            };
            let _ = addr_tx.send(listener.local_addr().map_err(anyhow::Error::from));
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });
    });

    let addr = addr_rx
        .recv_timeout(Duration::from_secs(5))
        .context("wait for stub server address")??;

    Ok(ServerGuard {
        base_url: format!("http://{}", addr),
        state,
        shutdown: Some(shutdown_tx),
        thread: Some(thread),
    })
}

/// A base URL nothing is listening on.
#[allow(dead_code)]
pub fn dead_base_url() -> Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").context("bind unused port")?;
    let addr = listener.local_addr().context("unused port addr")?;
    drop(listener);
    Ok(format!("http://{}", addr))
}
