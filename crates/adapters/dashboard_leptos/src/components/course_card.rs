//! Course card component.

use coursecard_domain::course::CourseDisplayAttributes;
use leptos::prelude::*;

use super::icons::{BookIcon, ClockIcon, TrendingUpIcon, UsersIcon};

/// A hoverable card showing a course's thumbnail, progress and schedule.
///
/// Renders the same markup as the server-side card, so `course_card.css`
/// drives the image zoom, the title colour shift and the badge fade-in from
/// `.course-card:hover` alone. No signals, no click handler: wrap the card if
/// it needs to navigate somewhere.
#[component]
pub fn CourseCard(course: CourseDisplayAttributes) -> impl IntoView {
    let CourseDisplayAttributes {
        title,
        instructor,
        progress,
        next_class,
        image,
        students,
    } = course;

    view! {
        <div class="course-card">
            <img class="course-card-image" src=image alt=title.clone() loading="lazy"/>
            <span class="course-card-category" aria-hidden="true">
                <BookIcon/>
            </span>
            <span class="course-card-badge">
                <TrendingUpIcon/>
                <span class="course-card-badge-label">{format!("{progress}%")}</span>
            </span>
            <div class="course-card-overlay">
                <div class="course-card-track">
                    <div class="course-card-fill" style=progress.fill_style()></div>
                </div>
                <h3 class="course-card-title">{title}</h3>
                <p class="course-card-instructor">{instructor}</p>
                <div class="course-card-meta">
                    <span class="course-card-meta-item">
                        <ClockIcon/>
                        <span class="course-card-next-class">{next_class}</span>
                    </span>
                    <span class="course-card-meta-item">
                        <UsersIcon/>
                        <span class="course-card-students">{students}</span>
                    </span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intro_to_design() -> CourseDisplayAttributes {
        CourseDisplayAttributes::builder()
            .title("Intro to Design")
            .instructor("J. Doe")
            .progress(42_u8)
            .next_class("Wed 14:00")
            .image("/img/a.jpg")
            .build()
            .unwrap()
    }

    fn render(course: CourseDisplayAttributes) -> String {
        view! { <CourseCard course/> }.to_html()
    }

    #[test]
    fn should_render_example_course() {
        let html = render(intro_to_design());
        assert!(html.contains("class=\"course-card-title\">Intro to Design<"));
        assert!(html.contains("class=\"course-card-instructor\">J. Doe<"));
        assert!(html.contains("class=\"course-card-next-class\">Wed 14:00<"));
        assert!(html.contains("class=\"course-card-students\">24<"));
        assert!(html.contains("class=\"course-card-badge-label\">42%<"));
        assert!(html.contains("width: 42%"));
        assert!(html.contains("course-card-icon-clock"));
        assert!(html.contains("course-card-icon-users"));
        assert!(html.contains("course-card-icon-book"));
        assert!(html.contains("course-card-icon-trend"));
    }

    #[test]
    fn should_render_lazy_image_with_title_as_alt() {
        let html = render(intro_to_design());
        assert!(html.contains("class=\"course-card-image\""));
        assert!(html.contains("loading=\"lazy\""));
        assert!(html.contains("alt=\"Intro to Design\""));
    }

    #[test]
    fn should_render_provided_student_count() {
        let course = CourseDisplayAttributes {
            students: 57,
            ..intro_to_design()
        };
        assert!(render(course).contains("class=\"course-card-students\">57<"));
    }

    #[test]
    fn should_not_clamp_progress() {
        let course = CourseDisplayAttributes {
            progress: 150_u8.into(),
            ..intro_to_design()
        };
        let html = render(course);
        assert!(html.contains("width: 150%"));
        assert!(html.contains("class=\"course-card-badge-label\">150%<"));
    }
}
