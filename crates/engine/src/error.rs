//! Enrollment errors

use thiserror::Error;

/// Why an enrollment attempt was rejected
///
/// A full course is not an error; it yields a waitlisted enrollment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrollError {
    #[error("student not found: {0}")]
    StudentNotFound(String),

    #[error("course not found: {0}")]
    CourseNotFound(String),

    #[error("student {student_id} already enrolled or waitlisted in {course_id}")]
    AlreadyEnrolled {
        student_id: String,
        course_id: String,
    },
}

/// Result type alias using EnrollError
pub type Result<T> = std::result::Result<T, EnrollError>;
