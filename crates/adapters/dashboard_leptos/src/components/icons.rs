//! Inline SVG glyphs used by the course card (Feather icon paths).

use leptos::prelude::*;

/// Outline icon frame; `name` becomes the `course-card-icon-{name}` class.
#[component]
fn Icon(name: &'static str, #[prop(default = 14)] size: u32, children: Children) -> impl IntoView {
    view! {
        <svg
            class=format!("course-card-icon course-card-icon-{name}")
            viewBox="0 0 24 24"
            width=size.to_string()
            height=size.to_string()
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn BookIcon() -> impl IntoView {
    view! {
        <Icon name="book" size=20>
            <path d="M4 19.5A2.5 2.5 0 0 1 6.5 17H20"></path>
            <path d="M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z"></path>
        </Icon>
    }
}

#[component]
pub fn ClockIcon() -> impl IntoView {
    view! {
        <Icon name="clock">
            <circle cx="12" cy="12" r="10"></circle>
            <polyline points="12 6 12 12 16 14"></polyline>
        </Icon>
    }
}

#[component]
pub fn UsersIcon() -> impl IntoView {
    view! {
        <Icon name="users">
            <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"></path>
            <circle cx="9" cy="7" r="4"></circle>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"></path>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"></path>
        </Icon>
    }
}

#[component]
pub fn TrendingUpIcon() -> impl IntoView {
    view! {
        <Icon name="trend">
            <polyline points="23 6 13.5 15.5 8.5 10.5 1 18"></polyline>
            <polyline points="17 6 23 6 23 12"></polyline>
        </Icon>
    }
}
