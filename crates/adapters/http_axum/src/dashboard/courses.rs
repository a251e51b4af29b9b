//! Dashboard page for a single course.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};

use super::DashboardError;
use super::course_card::CourseCardTemplate;
use crate::state::AppState;

/// Single course page template.
#[derive(Template)]
#[template(path = "course_detail.html")]
pub struct CourseDetailTemplate {
    index: usize,
    card: CourseCardTemplate,
}

impl IntoResponse for CourseDetailTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /courses/{index}`: one card on its own.
pub async fn detail(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<CourseDetailTemplate, DashboardError> {
    let course = state.course(index)?;
    Ok(CourseDetailTemplate {
        index,
        card: course.into(),
    })
}
