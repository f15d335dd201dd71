//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Build the top-level axum [`Router`].
///
/// Merges `/health` with the static site served from `assets_dir`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(assets_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::site::routes(assets_dir))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn site_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "themenav-router-{name}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html><body></body></html>").unwrap();
        std::fs::write(dir.join("logo.svg"), "<svg/>").unwrap();
        dir
    }

    async fn status_of(dir: &Path, uri: &str) -> StatusCode {
        build(dir)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let dir = site_dir("health");
        assert_eq!(status_of(&dir, "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_shell_as_html_for_home() {
        let dir = site_dir("home");
        let response = build(&dir)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn should_serve_shell_for_nav_links() {
        let dir = site_dir("links");
        assert_eq!(status_of(&dir, "/about").await, StatusCode::OK);
        assert_eq!(status_of(&dir, "/explore").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_static_asset() {
        let dir = site_dir("asset");
        assert_eq!(status_of(&dir, "/logo.svg").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_file() {
        let dir = site_dir("missing");
        assert_eq!(status_of(&dir, "/missing.js").await, StatusCode::NOT_FOUND);
    }
}
