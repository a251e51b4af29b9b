//! # coursecard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Render the **course card** server-side with askama, so it works with
//!   zero JavaScript: hover transitions are pure CSS
//! - Serve a demo catalog page (`/`) and a single-card page
//!   (`/courses/{index}`) for the host-owned catalog
//! - Serve the catalog as JSON (`/api/courses`) for the Leptos dashboard
//! - Serve the shared card stylesheet (`/assets/course_card.css`)
//!
//! ## Dependency rule
//! Depends on `coursecard-domain` only. Never leaks axum types into the
//! domain.

pub mod api;
pub mod assets;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
