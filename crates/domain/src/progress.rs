//! Completion percentage of a course.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Percentage of a course that has been completed.
///
/// The intended range is `0..=100` but the value is carried as-is: it is
/// never clamped, so `150` renders as a bar overflowing its track.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    #[must_use]
    pub const fn new(percent: f64) -> Self {
        Self(percent)
    }

    /// The raw percentage.
    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }

    /// Inline style giving the progress fill its width, e.g. `width: 42%`.
    #[must_use]
    pub fn fill_style(self) -> String {
        format!("width: {self}%")
    }
}

impl From<f64> for Progress {
    fn from(percent: f64) -> Self {
        Self(percent)
    }
}

impl From<u8> for Progress {
    fn from(percent: u8) -> Self {
        Self(f64::from(percent))
    }
}

/// Shortest decimal form without the `%` sign: `42`, `42.5`, `150`.
impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
