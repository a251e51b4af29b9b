//! Course display attributes: everything a course card shows.

use serde::{Deserialize, Serialize};

use crate::error::{CourseCardError, ValidationError};
use crate::progress::Progress;

/// Student count shown when the caller does not provide one.
pub const DEFAULT_STUDENTS: u32 = 24;

const fn default_students() -> u32 {
    DEFAULT_STUDENTS
}

/// Immutable snapshot of what a course card renders.
///
/// There is no identity: a value is built for each render and dropped when
/// the caller stops rendering it. Text fields are displayed verbatim, so an
/// empty `title` simply renders as empty text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDisplayAttributes {
    pub title: String,
    pub instructor: String,
    pub progress: Progress,
    /// Free-form label for the next session, e.g. `Mon 10:00`.
    pub next_class: String,
    /// Thumbnail URI. Reachability and format are left to the browser.
    pub image: String,
    #[serde(default = "default_students")]
    pub students: u32,
}

impl CourseDisplayAttributes {
    /// Create a builder for constructing [`CourseDisplayAttributes`].
    #[must_use]
    pub fn builder() -> CourseDisplayAttributesBuilder {
        CourseDisplayAttributesBuilder::default()
    }
}

/// Step-by-step builder for [`CourseDisplayAttributes`].
#[derive(Debug, Default)]
pub struct CourseDisplayAttributesBuilder {
    title: Option<String>,
    instructor: Option<String>,
    progress: Option<Progress>,
    next_class: Option<String>,
    image: Option<String>,
    students: Option<u32>,
}

impl CourseDisplayAttributesBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    #[must_use]
    pub fn progress(mut self, progress: impl Into<Progress>) -> Self {
        self.progress = Some(progress.into());
        self
    }

    #[must_use]
    pub fn next_class(mut self, next_class: impl Into<String>) -> Self {
        self.next_class = Some(next_class.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn students(mut self, students: u32) -> Self {
        self.students = Some(students);
        self
    }

    /// Consume the builder and return [`CourseDisplayAttributes`].
    ///
    /// Only presence is checked; content is taken as given.
    ///
    /// # Errors
    ///
    /// Returns [`CourseCardError::Validation`] if a required field was never set.
    pub fn build(self) -> Result<CourseDisplayAttributes, CourseCardError> {
        Ok(CourseDisplayAttributes {
            title: self.title.ok_or(ValidationError::MissingField("title"))?,
            instructor: self
                .instructor
                .ok_or(ValidationError::MissingField("instructor"))?,
            progress: self
                .progress
                .ok_or(ValidationError::MissingField("progress"))?,
            next_class: self
                .next_class
                .ok_or(ValidationError::MissingField("next_class"))?,
            image: self.image.ok_or(ValidationError::MissingField("image"))?,
            students: self.students.unwrap_or(DEFAULT_STUDENTS),
        })
    }
}
