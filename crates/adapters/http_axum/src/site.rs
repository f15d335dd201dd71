//! Static site routes.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use themenav_domain::nav::page_paths;

/// Shell document every page path resolves to.
pub const INDEX_FILE: &str = "index.html";

/// Build the sub-router serving the site from `assets_dir`.
///
/// Page paths get the shell document; anything else is looked up as a file
/// and answers `404` when missing.
pub fn routes<S>(assets_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let index = assets_dir.join(INDEX_FILE);
    tracing::debug!(assets = %assets_dir.display(), "serving site assets");

    page_paths()
        .into_iter()
        .fold(Router::new(), |router, path| {
            router.route_service(path, ServeFile::new(&index))
        })
        .fallback_service(ServeDir::new(assets_dir))
}
