//! Plain-data HTTP request and response types.
//!
//! # Design
//! `compose_request` builds `HttpRequest` values from a `RequestConfig`;
//! `execute` runs them and produces `HttpResponse` values. Keeping both
//! sides as plain data makes header merging and body serialization
//! verifiable without touching the network. All fields use owned types.

use serde::Serialize;

use crate::error::FetchError;

/// HTTP method for a request. Defaults to `Get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Request body, resolved explicitly by the caller.
///
/// `Json` values are serialized to their canonical text encoding before
/// transmission; `Raw` payloads are sent verbatim with no re-encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(serde_json::Value),
    Raw(Vec<u8>),
}

impl Body {
    /// Build a `Json` body from any serializable value.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, FetchError> {
        serde_json::to_value(value)
            .map(Body::Json)
            .map_err(|e| FetchError::Serialization(e.to_string()))
    }
}

/// Per-call request configuration. Every field has a documented default:
/// GET, no extra headers, no body.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
}

/// A fully composed request, ready to execute.
///
/// Produced by `compose_request`: headers are merged and deduplicated,
/// and any JSON body is already serialized to bytes.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// A response as returned by the server, untouched by the wrapper.
///
/// Error statuses are not converted into `Err`; inspecting `status` and
/// decoding `body` is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body decoded as UTF-8, with invalid sequences replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
