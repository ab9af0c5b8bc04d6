// Tests for the fetch-website endpoint

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pagepeek_server::config::ServerConfig;
use pagepeek_server::routes;
use pagepeek_server::state::AppState;

fn test_app() -> Router {
    let config = ServerConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        log_level: "warn".to_string(),
        resolve_timeout: Duration::from_secs(5),
        max_redirects: 10,
    };
    routes::router(Arc::new(AppState::from_config(&config)))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_missing_url_param_is_bad_request() {
    let (status, body) = get_json(test_app(), "/api/fetch-website").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn test_empty_url_param_is_bad_request() {
    let (status, body) = get_json(test_app(), "/api/fetch-website?url=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn test_malformed_url_is_bad_request() {
    let (status, body) = get_json(test_app(), "/api/fetch-website?url=http://exa%20mple.com").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid URL format"));
}

#[tokio::test]
async fn test_reachable_target_returns_metadata() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(
                    r#"<html><head>
                        <title>Acme Widgets</title>
                        <meta name="description" content="The finest widgets">
                        <link rel="icon" href="/icon.png">
                    </head></html>"#,
                ),
        )
        .mount(&upstream)
        .await;

    let uri = format!("/api/fetch-website?url={}", upstream.uri());
    let (status, body) = get_json(test_app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Acme Widgets");
    assert_eq!(body["description"], "The finest widgets");
    assert_eq!(body["favicon"], format!("{}/icon.png", upstream.uri()));
}

#[tokio::test]
async fn test_unreachable_target_returns_fallback_with_ok_status() {
    let (status, body) = get_json(
        test_app(),
        "/api/fetch-website?url=https://www.acme.invalid/page",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Acme Project");
    assert_eq!(body["description"], "A project hosted at acme.invalid");
    assert_eq!(body["favicon"], "https://www.acme.invalid/favicon.ico");
}
