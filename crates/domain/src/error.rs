//! Common error types used across the workspace.
//!
//! Each failure kind is its own typed error and converts into
//! [`CourseCardError`] via `#[from]`.

/// Top-level error for everything built on the domain crate.
#[derive(Debug, thiserror::Error)]
pub enum CourseCardError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("course not found")]
    NotFound(#[from] NotFoundError),
}

/// Raised while assembling a value object from its parts.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was never provided to the builder.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// A course lookup by catalog position did not match anything.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("no course at index {index}")]
pub struct NotFoundError {
    pub index: usize,
}
