//! HTTP stub server for client tests

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Request as seen by the stub
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl CapturedRequest {
    /// Header value by name, case-insensitive
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

pub struct StubServer {
    pub base_url: String,
    captured: oneshot::Receiver<CapturedRequest>,
}

impl StubServer {
    /// Wait for the first request the stub answered
    pub async fn request(self) -> CapturedRequest {
        self.captured.await.expect("stub server did not receive a request")
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Option<oneshot::Sender<CapturedRequest>>>>,
}

async fn capture(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let request = CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    if let Some(tx) = state.captured.lock().unwrap().take() {
        let _ = tx.send(request);
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Answer every request with `status` and a JSON `body`, capturing the first
pub async fn serve_json(status: u16, body: &str) -> StubServer {
    let (tx, rx) = oneshot::channel();
    let state = StubState {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
        captured: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new().fallback(capture).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        base_url: format!("http://{}", addr),
        captured: rx,
    }
}

/// Base URL of a port with nothing listening on it
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
