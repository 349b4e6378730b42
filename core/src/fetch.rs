//! Fetch wrapper: compose a request, execute it, hand back the raw response.
//!
//! # Design
//! `compose_request` is pure — it merges headers, applies the bearer token,
//! and serializes a JSON body, producing an `HttpRequest` value. `execute`
//! performs the single HTTP round-trip with ureq. `perform_request` chains
//! the two; it is the whole public contract. One call maps to one request:
//! no retry, no caching, no shared state between calls. Status codes are
//! never interpreted here — 4xx/5xx resolve as ordinary responses.

use crate::error::FetchError;
use crate::http::{Body, HttpRequest, HttpResponse, Method, RequestConfig};

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";

/// Build the fully composed request for `target`.
///
/// Headers are seeded with `Content-Type: application/json`, then caller
/// headers are overlaid (last write wins, so caller values take precedence
/// over the default), and finally `Authorization: Bearer {token}` is set
/// when a token is supplied. `Body::Json` is serialized to its canonical
/// text encoding; `Body::Raw` passes through verbatim.
///
/// The target is not validated for well-formedness; a bad URL surfaces
/// later as a transport error.
pub fn compose_request(
    target: &str,
    config: RequestConfig,
    token: Option<&str>,
) -> Result<HttpRequest, FetchError> {
    let mut headers = vec![(CONTENT_TYPE.to_string(), "application/json".to_string())];
    for (name, value) in config.headers {
        set_header(&mut headers, name, value);
    }
    if let Some(token) = token {
        set_header(&mut headers, AUTHORIZATION.to_string(), format!("Bearer {token}"));
    }

    let body = match config.body {
        Some(Body::Json(value)) => {
            Some(serde_json::to_vec(&value).map_err(|e| FetchError::Serialization(e.to_string()))?)
        }
        // Pre-formed payloads are sent verbatim. The default content type
        // is deliberately not corrected for them, even when it is wrong
        // for the payload.
        Some(Body::Raw(bytes)) => Some(bytes),
        None => None,
    };

    Ok(HttpRequest {
        method: config.method,
        target: target.to_string(),
        headers,
        body,
    })
}

/// Execute a composed request and return the response as data.
///
/// The agent is configured with `http_status_as_error(false)` so error
/// statuses come back as responses rather than `Err`; only transport
/// failures map to `FetchError::Transport`. GET and DELETE never carry
/// a body.
pub fn execute(request: HttpRequest) -> Result<HttpResponse, FetchError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let headers = &request.headers;
    let target = &request.target;
    let result = match (request.method, request.body) {
        (Method::Get, _) => with_headers(agent.get(target), headers).call(),
        (Method::Delete, _) => with_headers(agent.delete(target), headers).call(),
        (Method::Post, Some(body)) => with_headers(agent.post(target), headers).send(&body[..]),
        (Method::Post, None) => with_headers(agent.post(target), headers).send_empty(),
        (Method::Put, Some(body)) => with_headers(agent.put(target), headers).send(&body[..]),
        (Method::Put, None) => with_headers(agent.put(target), headers).send_empty(),
        (Method::Patch, Some(body)) => with_headers(agent.patch(target), headers).send(&body[..]),
        (Method::Patch, None) => with_headers(agent.patch(target), headers).send_empty(),
    };
    let mut response = result.map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let response_headers: Vec<(String, String)> = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_vec()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: response_headers,
        body,
    })
}

/// Compose and execute in one call.
///
/// `config` defaults to GET with no headers and no body; `token` is
/// optional and owned entirely by the caller (no refresh on 401 — a
/// deliberate gap for now).
pub fn perform_request(
    target: &str,
    config: RequestConfig,
    token: Option<&str>,
) -> Result<HttpResponse, FetchError> {
    let request = compose_request(target, config, token)?;
    execute(request)
}

/// Apply composed headers to a ureq request builder.
fn with_headers<Any>(
    builder: ureq::RequestBuilder<Any>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<Any> {
    headers
        .iter()
        .fold(builder, |b, (name, value)| b.header(name.as_str(), value.as_str()))
}

/// Insert or replace a header, matching names case-insensitively so the
/// composed request never carries duplicate keys.
fn set_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    match headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
    {
        Some(entry) => entry.1 = value,
        None => headers.push((name, value)),
    }
}
