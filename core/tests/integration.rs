//! Wrapper behavior over real HTTP against the recording mock server.
//!
//! # Design
//! Each test starts the mock server on a random port, drives a request
//! through `perform_request`, then inspects the server-side log to verify
//! exactly what went over the wire: method, headers, and body bytes.

use mock_server::RequestLog;
use storefront_core::types::LoginRequest;
use storefront_core::{endpoints, perform_request, Body, Method, RequestConfig};

/// Start the recording server on a random port and return its address
/// together with a handle to the request log.
fn start_server() -> (std::net::SocketAddr, RequestLog) {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let log = RequestLog::default();
    let server_log = log.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with_log(listener, server_log).await
        })
        .unwrap();
    });

    (addr, log)
}

#[test]
fn get_products_with_token_sends_expected_metadata() {
    let (addr, log) = start_server();
    let target = format!("http://{addr}{}", endpoints::PRODUCTS);

    let config = RequestConfig {
        method: Method::Get,
        ..Default::default()
    };
    let response = perform_request(&target, config, Some("tok")).unwrap();
    assert!(response.is_success());

    let recorded = log.blocking_read();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].method, "GET");
    assert_eq!(recorded[0].path, "/api/store/products/");
    assert_eq!(recorded[0].header("Authorization"), Some("Bearer tok"));
    assert_eq!(recorded[0].header("Content-Type"), Some("application/json"));
    assert!(recorded[0].body.is_empty());
}

#[test]
fn request_without_token_carries_no_authorization_header() {
    let (addr, log) = start_server();
    let target = format!("http://{addr}{}", endpoints::CATEGORIES);

    perform_request(&target, RequestConfig::default(), None).unwrap();

    let recorded = log.blocking_read();
    assert!(recorded[0].header("Authorization").is_none());
    assert_eq!(recorded[0].header("Content-Type"), Some("application/json"));
}

#[test]
fn json_body_arrives_as_canonical_text() {
    let (addr, log) = start_server();
    let target = format!("http://{addr}{}", endpoints::LOGIN);

    let input = LoginRequest {
        username: "ada".to_string(),
        password: "pw".to_string(),
    };
    let config = RequestConfig {
        method: Method::Post,
        body: Some(Body::json(&input).unwrap()),
        ..Default::default()
    };
    perform_request(&target, config, None).unwrap();

    let recorded = log.blocking_read();
    assert_eq!(recorded[0].method, "POST");
    let body: serde_json::Value = serde_json::from_slice(&recorded[0].body).unwrap();
    assert_eq!(body, serde_json::json!({"username": "ada", "password": "pw"}));
}

#[test]
fn raw_body_arrives_unchanged() {
    let (addr, log) = start_server();
    let target = format!("http://{addr}{}", endpoints::STRIPE_WEBHOOK);

    let payload = b"--boundary\r\nraw payload\r\n--boundary--".to_vec();
    let config = RequestConfig {
        method: Method::Post,
        body: Some(Body::Raw(payload.clone())),
        ..Default::default()
    };
    perform_request(&target, config, None).unwrap();

    let recorded = log.blocking_read();
    assert_eq!(recorded[0].body, payload);
    // Known limitation: the default content type is not corrected for
    // pre-formed payloads.
    assert_eq!(recorded[0].header("Content-Type"), Some("application/json"));
}

#[test]
fn caller_header_reaches_the_wire_alongside_the_default() {
    let (addr, log) = start_server();
    let target = format!("http://{addr}{}", endpoints::PROFILE);

    let config = RequestConfig {
        headers: vec![("X-Custom".to_string(), "v".to_string())],
        ..Default::default()
    };
    perform_request(&target, config, None).unwrap();

    let recorded = log.blocking_read();
    assert_eq!(recorded[0].header("X-Custom"), Some("v"));
    assert_eq!(recorded[0].header("Content-Type"), Some("application/json"));
}

#[test]
fn checkout_posts_without_a_body() {
    let (addr, log) = start_server();
    let target = format!("http://{addr}{}", endpoints::CHECKOUT);

    // The backend reads the user's cart server-side; checkout sends no
    // payload of its own.
    let config = RequestConfig {
        method: Method::Post,
        ..Default::default()
    };
    perform_request(&target, config, Some("tok")).unwrap();

    let recorded = log.blocking_read();
    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].path, "/api/orders/checkout/");
    assert!(recorded[0].body.is_empty());
}

#[test]
fn error_status_resolves_as_ordinary_response() {
    let (addr, _log) = start_server();
    let target = format!("http://{addr}/_status/404");

    let response = perform_request(&target, RequestConfig::default(), None).unwrap();
    assert_eq!(response.status, 404);
    assert!(!response.is_success());
}

#[test]
fn response_body_and_status_pass_through_untouched() {
    let (addr, _log) = start_server();
    let target = format!("http://{addr}{}", endpoints::ORDERS);

    let response = perform_request(&target, RequestConfig::default(), None).unwrap();
    assert_eq!(response.status, 200);
    let body: serde_json::Value = serde_json::from_str(&response.body_text()).unwrap();
    assert_eq!(body, serde_json::json!({ "recorded": true }));
}

#[test]
fn delete_request_uses_the_delete_verb() {
    let (addr, log) = start_server();
    // Item endpoints take the id as a caller-appended segment.
    let target = format!("http://{addr}{}42/", endpoints::CART_ITEMS);

    let config = RequestConfig {
        method: Method::Delete,
        ..Default::default()
    };
    perform_request(&target, config, Some("tok")).unwrap();

    let recorded = log.blocking_read();
    assert_eq!(recorded[0].method, "DELETE");
    assert_eq!(recorded[0].path, "/api/orders/cart-items/42/");
}
