//! Server-side rendered HTML dashboard (no JavaScript).

pub mod course_card;
#[allow(clippy::missing_errors_doc)]
pub mod courses;
pub mod home;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use coursecard_domain::error::CourseCardError;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/courses/{index}", get(courses::detail))
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}

/// Maps [`CourseCardError`] to an HTML error page.
#[derive(Debug)]
pub struct DashboardError(CourseCardError);

impl From<CourseCardError> for DashboardError {
    fn from(err: CourseCardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = crate::error::status_of(&self.0);
        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render error page");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
