//! Built-in demo catalog, served when the config lists no courses.

use coursecard_domain::course::{CourseDisplayAttributes, DEFAULT_STUDENTS};
use coursecard_domain::progress::Progress;

fn course(
    title: &str,
    instructor: &str,
    progress: f64,
    next_class: &str,
    seed: &str,
    students: u32,
) -> CourseDisplayAttributes {
    CourseDisplayAttributes {
        title: title.to_string(),
        instructor: instructor.to_string(),
        progress: Progress::new(progress),
        next_class: next_class.to_string(),
        image: format!("https://picsum.photos/seed/{seed}/640/480"),
        students,
    }
}

/// A handful of courses covering the interesting cases: untouched, partial,
/// complete and the default student count.
#[must_use]
pub fn demo() -> Vec<CourseDisplayAttributes> {
    vec![
        course("Intro to Design", "J. Doe", 42.0, "Wed 14:00", "design", DEFAULT_STUDENTS),
        course("Rust for Beginners", "F. Ferris", 75.5, "Fri 09:30", "rust", 57),
        course("Color Theory", "M. Albers", 0.0, "Mon 10:00", "color", 18),
        course("Typography Basics", "A. Frutiger", 100.0, "Tue 16:15", "type", 31),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_demo_progress_within_bounds() {
        assert!(
            demo()
                .iter()
                .all(|course| (0.0..=100.0).contains(&course.progress.percent()))
        );
    }

    #[test]
    fn should_include_a_course_with_default_students() {
        assert!(demo().iter().any(|course| course.students == DEFAULT_STUDENTS));
    }
}
