//! Static assets embedded in the binary.

use axum::http::header;
use axum::response::IntoResponse;

/// Stylesheet shared by the server-rendered and the Leptos course cards.
pub const COURSE_CARD_CSS: &str = include_str!("../assets/course_card.css");

/// `GET /assets/course_card.css`
pub async fn course_card_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        COURSE_CARD_CSS,
    )
}
