//! Single course page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::{self, ApiError};
use crate::components::{CourseCard, Loading};

/// Course detail page: one card on its own, looked up by catalog index.
#[component]
pub fn CourseDetail() -> impl IntoView {
    let params = use_params_map();
    let index = move || params.read().get("index").unwrap_or_default();

    let course = LocalResource::new(move || {
        let raw = index();
        async move {
            let index: usize = raw.parse().map_err(|_| ApiError {
                message: format!("invalid course index `{raw}`"),
            })?;
            api::fetch_course(index).await
        }
    });

    view! {
        <div>
            <p><a href="/app/">"All courses"</a></p>
            <Suspense fallback=move || view! { <Loading message="Loading course\u{2026}"/> }>
                {move || {
                    course.read().as_ref().map(|result| match result {
                        Ok(course) => view! {
                            <div class="course-single">
                                <CourseCard course=course.clone()/>
                            </div>
                        }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load course: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
