mod common;

use axum::Router;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use bookmark_classifier::config::Config;
use bookmark_classifier::routes::app_router;
use std::net::SocketAddr;
use tower::{Service, ServiceExt};
use tower_http::normalize_path::NormalizePath;

fn test_config(per_second: u64, burst: u32) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        tables_path: None,
        rate_limit_per_second: per_second,
        rate_limit_burst: burst,
        max_batch_size: 100,
    }
}

fn request(
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    peer: [u8; 4],
) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let mut request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from((peer, 40000))));
    request
}

fn classify_body() -> serde_json::Value {
    serde_json::json!({ "url": "https://github.com/foo/bar", "title": "Awesome Python Tutorial" })
}

async fn send(app: &mut NormalizePath<Router>, request: Request<Body>) -> Response {
    ServiceExt::<Request<Body>>::ready(app)
        .await
        .unwrap()
        .call(request)
        .await
        .unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_is_routed() {
    let mut app = app_router(common::create_test_state(), &test_config(50, 100)).unwrap();

    let response = send(
        &mut app,
        request(Method::POST, "/classify/", Some(classify_body()), [10, 0, 0, 1]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["category"], "technology");
}

#[tokio::test]
async fn test_burst_exhaustion_returns_too_many_requests() {
    let burst = 2;
    let mut app = app_router(common::create_test_state(), &test_config(1, burst)).unwrap();

    for _ in 0..burst {
        let response = send(
            &mut app,
            request(Method::POST, "/classify", Some(classify_body()), [10, 0, 0, 2]),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = send(
        &mut app,
        request(Method::POST, "/classify", Some(classify_body()), [10, 0, 0, 2]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_rate_limit_is_per_client() {
    let mut app = app_router(common::create_test_state(), &test_config(1, 1)).unwrap();

    let first = send(
        &mut app,
        request(Method::POST, "/classify", Some(classify_body()), [10, 0, 0, 3]),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let other_client = send(
        &mut app,
        request(Method::POST, "/classify", Some(classify_body()), [10, 0, 0, 4]),
    )
    .await;
    assert_eq!(other_client.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_not_rate_limited() {
    let mut app = app_router(common::create_test_state(), &test_config(1, 1)).unwrap();

    for _ in 0..3 {
        let response = send(
            &mut app,
            request(Method::GET, "/health", None, [10, 0, 0, 5]),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_unknown_route_returns_error_body() {
    let app = app_router(common::create_test_state(), &test_config(50, 100)).unwrap();

    let response = app
        .oneshot(request(Method::GET, "/nope", None, [10, 0, 0, 6]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_cors_header_on_full_router() {
    let app = app_router(common::create_test_state(), &test_config(50, 100)).unwrap();

    let mut request = request(Method::GET, "/health", None, [10, 0, 0, 7]);
    request.headers_mut().insert(
        header::ORIGIN,
        "https://bookmarks.example".parse().unwrap(),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[test]
fn test_invalid_rate_limit_rejected() {
    assert!(app_router(common::create_test_state(), &test_config(0, 100)).is_err());
}
