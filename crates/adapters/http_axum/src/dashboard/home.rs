//! Dashboard home page: every configured course as a card grid.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use super::course_card::CourseCardTemplate;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    cards: Vec<CourseCardTemplate>,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /`: course grid.
pub async fn index(State(state): State<AppState>) -> HomeTemplate {
    HomeTemplate {
        cards: state.courses().iter().map(CourseCardTemplate::from).collect(),
    }
}
