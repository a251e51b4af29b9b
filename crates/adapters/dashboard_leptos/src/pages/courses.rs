use leptos::prelude::*;

use crate::api;
use crate::components::{CourseCard, Loading};

/// Catalog page laying every course out as a card grid.
#[component]
pub fn Courses() -> impl IntoView {
    let courses = LocalResource::new(api::fetch_courses);

    view! {
        <div>
            <h1>"Courses"</h1>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    courses.read().as_ref().map(|result| match result {
                        Ok(list) if list.is_empty() => view! {
                            <p class="empty">"No courses configured."</p>
                        }.into_any(),
                        Ok(list) => view! {
                            <div class="course-grid">
                                {list
                                    .iter()
                                    .cloned()
                                    .map(|course| view! { <CourseCard course/> })
                                    .collect_view()}
                            </div>
                        }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load courses: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
