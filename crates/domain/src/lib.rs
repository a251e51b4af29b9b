//! # coursecard-domain
//!
//! Pure domain model for the course card.
//!
//! ## Responsibilities
//! - Define [`course::CourseDisplayAttributes`], the immutable value object a
//!   course card is rendered from
//! - Define [`progress::Progress`], the completion percentage shown in the
//!   progress bar and hover badge
//! - Error conventions shared by the adapters
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from adapters or IO crates. Rendering lives
//! in the adapters; this crate only describes what gets rendered.

pub mod course;
pub mod error;
pub mod progress;
