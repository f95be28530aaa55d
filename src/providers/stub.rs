//! Local stand-in for external providers, used by tests.
//!
//! Serves canned JSON per path on an ephemeral port and records every request.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};

/// A request received by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub user_agent: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Clone, Default)]
struct StubState {
    responses: Arc<Mutex<HashMap<String, (StatusCode, serde_json::Value)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct StubServer {
    addr: SocketAddr,
    state: StubState,
}

impl StubServer {
    /// Bind to an ephemeral port and start serving.
    pub async fn start() -> Self {
        let state = StubState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    /// Register the response for a path. Unregistered paths answer 404.
    pub fn respond(self, path: &str, status: StatusCode, body: serde_json::Value) -> Self {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body));
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn handle(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let query = uri
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        query,
        user_agent: header_str(header::USER_AGENT),
        authorization: header_str(header::AUTHORIZATION),
        body: serde_json::from_slice(&body).ok(),
    });

    let canned = state.responses.lock().unwrap().get(uri.path()).cloned();
    match canned {
        Some((status, json)) => (status, Json(json)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
