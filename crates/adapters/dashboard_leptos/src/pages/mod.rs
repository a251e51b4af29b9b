mod course_detail;
mod courses;
mod not_found;

pub use course_detail::CourseDetail;
pub use courses::Courses;
pub use not_found::NotFound;
