//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api`, dashboard routes at `/` and the card
/// stylesheet under `/assets`. When the state carries a Leptos build
/// directory it is served under `/app`, falling back to its `index.html` so
/// client-side routes resolve. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .route(
            "/assets/course_card.css",
            get(crate::assets::course_card_css),
        )
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes());

    if let Some(dir) = state.dashboard_dir() {
        tracing::info!(dir = %dir.display(), "serving leptos dashboard under /app");
        let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        router = router.nest_service("/app", spa);
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
