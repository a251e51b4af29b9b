//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod courses;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(courses::list))
        .route("/courses/{index}", get(courses::get))
}
