mod course_card;
mod icons;
mod loading;

pub use course_card::CourseCard;
pub use loading::Loading;
