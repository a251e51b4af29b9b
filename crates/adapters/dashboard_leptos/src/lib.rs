use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod pages;

pub use components::CourseCard;
use pages::{CourseDetail, Courses, NotFound};

/// Root application component, mounted under `/app` by the server.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router base="/app">
            <main class="page">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Courses/>
                    <Route path=path!("courses/:index") view=CourseDetail/>
                </Routes>
            </main>
        </Router>
    }
}
