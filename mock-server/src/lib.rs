//! Recording HTTP server for fetch-wrapper tests.
//!
//! Every request that arrives — any method, any path — is captured into a
//! shared log (method, path, headers, body) and answered with a small
//! canned JSON body, so client tests can assert exactly what went over the
//! wire. `/_status/{code}` additionally answers with the named status code
//! for exercising non-2xx handling.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::any,
    Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};

/// One request as observed by the server.
#[derive(Clone, Debug, Serialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub type RequestLog = Arc<RwLock<Vec<RecordedRequest>>>;

/// Port the standalone binary binds when `MOCK_PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Loopback bind address for the server, honoring a port override.
pub fn bind_addr(port: Option<String>) -> String {
    let port = port.unwrap_or_else(|| DEFAULT_PORT.to_string());
    format!("127.0.0.1:{port}")
}

pub fn app() -> Router {
    app_with_log(RequestLog::default())
}

/// Build the router around an externally owned log so tests can inspect
/// what was recorded after driving requests through it.
pub fn app_with_log(log: RequestLog) -> Router {
    Router::new()
        .route("/_status/{code}", any(canned_status))
        .fallback(record)
        .with_state(log)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_log(listener: TcpListener, log: RequestLog) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_log(log)).await
}

async fn record(
    State(log): State<RequestLog>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Json<serde_json::Value> {
    push(&log, &method, &uri, &headers, &body).await;
    Json(serde_json::json!({ "recorded": true }))
}

/// Record the request, then answer with the status code named in the path.
async fn canned_status(
    State(log): State<RequestLog>,
    Path(code): Path<u16>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    push(&log, &method, &uri, &headers, &body).await;
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

async fn push(log: &RequestLog, method: &Method, uri: &Uri, headers: &HeaderMap, body: &Bytes) {
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect(),
        body: body.to_vec(),
    };
    log.write().await.push(recorded);
}
