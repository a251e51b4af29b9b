//! Shared application state for axum handlers.

use std::path::PathBuf;
use std::sync::Arc;

use coursecard_domain::course::CourseDisplayAttributes;
use coursecard_domain::error::{CourseCardError, NotFoundError};

/// Application state shared across all axum handlers.
///
/// The catalog is fixed at startup, so handlers only ever read it.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    catalog: Arc<[CourseDisplayAttributes]>,
    dashboard_dir: Option<Arc<PathBuf>>,
}

impl AppState {
    /// Create a new application state serving the given courses, in order.
    pub fn new(catalog: impl Into<Arc<[CourseDisplayAttributes]>>) -> Self {
        Self {
            catalog: catalog.into(),
            dashboard_dir: None,
        }
    }

    /// Serve a built Leptos dashboard (trunk `dist/` output) under `/app`.
    #[must_use]
    pub fn with_dashboard_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dashboard_dir = Some(Arc::new(dir.into()));
        self
    }

    /// Every course, in catalog order.
    #[must_use]
    pub fn courses(&self) -> &[CourseDisplayAttributes] {
        &self.catalog
    }

    /// Look up a course by its position in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CourseCardError::NotFound`] when `index` is past the end.
    pub fn course(&self, index: usize) -> Result<&CourseDisplayAttributes, CourseCardError> {
        match self.catalog.get(index) {
            Some(course) => {
                tracing::debug!(index, title = %course.title, "course found");
                Ok(course)
            }
            None => {
                tracing::warn!(index, size = self.catalog.len(), "course index out of range");
                Err(NotFoundError { index }.into())
            }
        }
    }

    pub(crate) fn dashboard_dir(&self) -> Option<&PathBuf> {
        self.dashboard_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(title: &str) -> CourseDisplayAttributes {
        CourseDisplayAttributes::builder()
            .title(title)
            .instructor("J. Doe")
            .progress(10_u8)
            .next_class("Mon 10:00")
            .image("/img/a.jpg")
            .build()
            .unwrap()
    }

    #[test]
    fn should_keep_catalog_order() {
        let state = AppState::new(vec![course("First"), course("Second")]);
        let titles: Vec<_> = state.courses().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn should_find_course_by_index() {
        let state = AppState::new(vec![course("First"), course("Second")]);
        assert_eq!(state.course(1).unwrap().title, "Second");
    }

    #[test]
    fn should_return_not_found_when_index_out_of_range() {
        let state = AppState::new(vec![course("First")]);
        assert!(matches!(
            state.course(3),
            Err(CourseCardError::NotFound(NotFoundError { index: 3 }))
        ));
    }

    #[test]
    fn should_default_to_empty_catalog_without_dashboard() {
        let state = AppState::default();
        assert!(state.courses().is_empty());
        assert!(state.dashboard_dir().is_none());
    }
}
