//! End-to-end smoke tests for the themenavd HTTP stack.
//!
//! Each test lays out a small built site in a temporary directory, builds the
//! real axum router over it and exercises it via `tower::ServiceExt::oneshot`,
//! so no TCP port is bound.

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use themenav_adapter_http_axum::router;
use tower::ServiceExt;

const SHELL: &str = r#"<!DOCTYPE html><html lang="en"><head><title>themenav</title></head><body></body></html>"#;

/// Write a minimal built site and return its directory.
fn built_site(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("themenavd-it-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir should be writable");
    std::fs::write(dir.join("index.html"), SHELL).unwrap();
    std::fs::write(dir.join("logo.svg"), "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
    std::fs::write(dir.join("compass.svg"), "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
    dir
}

async fn get(dir: &Path, uri: &str) -> (StatusCode, String) {
    let resp = router::build(dir)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let dir = built_site("health");
    let (status, body) = get(&dir, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_shell_for_home_page() {
    let dir = built_site("home");
    let (status, body) = get(&dir, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>themenav</title>"));
}

#[tokio::test]
async fn should_render_shell_for_about_page() {
    let dir = built_site("about");
    let (status, body) = get(&dir, "/about").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SHELL);
}

#[tokio::test]
async fn should_render_shell_for_explore_page() {
    let dir = built_site("explore");
    let (status, body) = get(&dir, "/explore").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SHELL);
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_logo_and_compass() {
    let dir = built_site("assets");

    let (logo, _) = get(&dir, "/logo.svg").await;
    let (compass, _) = get(&dir, "/compass.svg").await;

    assert_eq!(logo, StatusCode::OK);
    assert_eq!(compass, StatusCode::OK);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_asset() {
    let dir = built_site("unknown");
    let (status, _) = get(&dir, "/nope.wasm").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_for_pages_when_site_not_built() {
    let dir = std::env::temp_dir().join(format!("themenavd-it-empty-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let (status, _) = get(&dir, "/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
