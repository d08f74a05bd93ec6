//! Audit event records

use chrono::{DateTime, Utc};
use registrar_core::EnrollmentStatus;
use serde::{Deserialize, Serialize};
use strum::Display;

/// What was attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Enroll,
}

/// How the attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditResult {
    Enrolled,
    Waitlisted,
    Dropped,
    DuplicateBlocked,
}

impl From<EnrollmentStatus> for AuditResult {
    fn from(status: EnrollmentStatus) -> Self {
        match status {
            EnrollmentStatus::Enrolled => Self::Enrolled,
            EnrollmentStatus::Waitlisted => Self::Waitlisted,
            EnrollmentStatus::Dropped => Self::Dropped,
        }
    }
}

/// One entry of the audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub time: DateTime<Utc>,
    pub action: AuditAction,
    pub student_id: String,
    pub course_id: String,
    pub result: AuditResult,
}

impl AuditEvent {
    /// Create an ENROLL event stamped with the current time
    pub fn enroll(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        result: impl Into<AuditResult>,
    ) -> Self {
        Self {
            time: Utc::now(),
            action: AuditAction::Enroll,
            student_id: student_id.into(),
            course_id: course_id.into(),
            result: result.into(),
        }
    }
}
