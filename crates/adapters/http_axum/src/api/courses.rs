//! JSON REST handlers for the course catalog.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use coursecard_domain::course::CourseDisplayAttributes;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<CourseDisplayAttributes>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<CourseDisplayAttributes>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/courses`
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(state.courses().to_vec()))
}

/// `GET /api/courses/{index}`
pub async fn get(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<GetResponse, ApiError> {
    let course = state.course(index)?;
    Ok(GetResponse::Ok(Json(course.clone())))
}
