//! API client core for the storefront service.
//!
//! # Overview
//! Two pieces: a registry of endpoint path constants for the storefront API
//! (store catalog, users/auth, orders/cart/checkout) and a fetch wrapper
//! that composes headers and body, then executes the request over HTTP.
//!
//! # Design
//! - `endpoints` exposes fixed path constants assembled from the `/api`
//!   base; callers append dynamic segments (e.g. a resource id) themselves.
//! - `perform_request` is split into a pure `compose_request` step that
//!   produces an `HttpRequest` value and an `execute` step that runs it,
//!   so header merging and body serialization stay deterministic and
//!   testable without a network.
//! - The wrapper never inspects status codes or parses response bodies;
//!   4xx/5xx come back as ordinary `HttpResponse` values and interpretation
//!   is the caller's job.
//! - Token refresh on 401 is deliberately out of scope for now; the caller
//!   owns the token lifecycle.

pub mod endpoints;
pub mod error;
pub mod fetch;
pub mod http;
pub mod types;

pub use error::FetchError;
pub use fetch::{compose_request, execute, perform_request};
pub use http::{Body, HttpRequest, HttpResponse, Method, RequestConfig};
