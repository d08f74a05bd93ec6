//! Domain records
//!
//! Every record is plain data. The store hands out clones, so mutating a
//! returned value never affects stored state.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub full_name: String,
    pub email: String,
}

impl Student {
    pub fn new(id: impl Into<String>, full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
        }
    }
}

/// Instructor record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: String,
    pub name: String,
}

impl Instructor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Course record
///
/// `capacity` bounds the number of `ENROLLED` records for the course at any
/// instant. Waitlisted and dropped records do not count against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub title: String,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<String>,
}

/// Mutable fields of a course, used for both create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub code: String,
    pub title: String,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<String>,
}

impl CourseDraft {
    pub fn new(code: impl Into<String>, title: impl Into<String>, capacity: u32) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            capacity,
            instructor_id: None,
        }
    }

    /// Set instructor reference
    pub fn with_instructor(mut self, instructor_id: impl Into<String>) -> Self {
        self.instructor_id = Some(instructor_id.into());
        self
    }

    /// Materialize into a course with the given id
    pub fn into_course(self, id: impl Into<String>) -> Course {
        Course {
            id: id.into(),
            code: self.code,
            title: self.title,
            capacity: self.capacity,
            instructor_id: self.instructor_id,
        }
    }
}

/// Enrollment status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Enrolled,
    Waitlisted,
    Dropped,
}

/// Enrollment record, one per (student, course) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub status: EnrollmentStatus,
}

impl Enrollment {
    pub fn new(
        id: impl Into<String>,
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        status: EnrollmentStatus,
    ) -> Self {
        Self {
            id: id.into(),
            student_id: student_id.into(),
            course_id: course_id.into(),
            status,
        }
    }
}
