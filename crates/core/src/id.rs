//! Entity ID prefixes

use strum::{Display, EnumString};

/// Human-readable prefix attached to every generated ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum IdPrefix {
    #[strum(serialize = "stu")]
    Student,
    #[strum(serialize = "ins")]
    Instructor,
    #[strum(serialize = "crs")]
    Course,
    #[strum(serialize = "enr")]
    Enrollment,
}

impl IdPrefix {
    /// Render `<prefix>-<n>`
    pub fn format(self, n: u64) -> String {
        format!("{}-{}", self, n)
    }
}
