//! Course card fragment.
//!
//! Produces the card markup only: image layer, bottom overlay (progress
//! track, title, instructor, meta row), hover badge and category icon. All
//! hover behaviour lives in `assets/course_card.css`, keyed on the
//! `course-card` class, so the fragment carries no state.

use askama::Template;

use coursecard_domain::course::CourseDisplayAttributes;

/// Server-rendered course card.
#[derive(Template)]
#[template(path = "course_card.html")]
pub struct CourseCardTemplate {
    course: CourseDisplayAttributes,
}

impl CourseCardTemplate {
    #[must_use]
    pub fn new(course: CourseDisplayAttributes) -> Self {
        Self { course }
    }
}

impl From<&CourseDisplayAttributes> for CourseCardTemplate {
    fn from(course: &CourseDisplayAttributes) -> Self {
        Self::new(course.clone())
    }
}
