//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use coursecard_domain::course::CourseDisplayAttributes;
use gloo_net::http::{Request, Response};
use serde::Deserialize;

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// Fetch the whole catalog from the API.
pub async fn fetch_courses() -> Result<Vec<CourseDisplayAttributes>, ApiError> {
    let resp = check_response(Request::get("/api/courses").send().await?).await?;
    let courses: Vec<CourseDisplayAttributes> = resp.json().await?;
    Ok(courses)
}

/// Fetch a single course by catalog position.
pub async fn fetch_course(index: usize) -> Result<CourseDisplayAttributes, ApiError> {
    let url = format!("/api/courses/{index}");
    let resp = check_response(Request::get(&url).send().await?).await?;
    let course: CourseDisplayAttributes = resp.json().await?;
    Ok(course)
}
