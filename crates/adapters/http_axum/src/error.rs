//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use coursecard_domain::error::CourseCardError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Status code and public message for a domain error.
pub(crate) fn status_of(err: &CourseCardError) -> (StatusCode, String) {
    match err {
        CourseCardError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        CourseCardError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
    }
}

/// Maps [`CourseCardError`] to a JSON response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(CourseCardError);

impl From<CourseCardError> for ApiError {
    fn from(err: CourseCardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_of(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursecard_domain::error::{NotFoundError, ValidationError};

    #[test]
    fn should_map_not_found_to_404() {
        let response = ApiError::from(CourseCardError::from(NotFoundError { index: 2 }))
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_validation_to_400() {
        let response = ApiError::from(CourseCardError::from(ValidationError::MissingField(
            "title",
        )))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
