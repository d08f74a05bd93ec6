//! Enrollment decision policy

use std::sync::Arc;

use registrar_audit::{AuditEvent, AuditResult, AuditSink};
use registrar_core::{Enrollment, EnrollmentStatus};
use registrar_store::Store;
use tracing::{info, warn};

use crate::error::{EnrollError, Result};

/// Stateless enrollment service over a shared store
#[derive(Clone)]
pub struct EnrollmentEngine {
    store: Arc<Store>,
    audit: Arc<dyn AuditSink>,
}

impl EnrollmentEngine {
    pub fn new(store: Arc<Store>, audit: Arc<dyn AuditSink>) -> Self {
        Self { store, audit }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Enroll a student into a course.
    ///
    /// The existence checks, the duplicate check, the capacity count and the
    /// insert all run under one exclusive store lock, so concurrent calls for
    /// the same course can neither overfill it nor create two records for the
    /// same pair. The audit event is published after the lock is released.
    pub fn enroll(&self, student_id: &str, course_id: &str) -> Result<Enrollment> {
        let decision = self.decide_and_insert(student_id, course_id);

        match &decision {
            Ok(enrollment) => {
                info!(
                    id = %enrollment.id,
                    student_id,
                    course_id,
                    status = %enrollment.status,
                    "enrollment accepted"
                );
                self.audit
                    .publish(AuditEvent::enroll(student_id, course_id, enrollment.status));
            }
            Err(EnrollError::AlreadyEnrolled { .. }) => {
                warn!(student_id, course_id, "duplicate enrollment blocked");
                self.audit.publish(AuditEvent::enroll(
                    student_id,
                    course_id,
                    AuditResult::DuplicateBlocked,
                ));
            }
            Err(e) => {
                warn!(student_id, course_id, "enrollment rejected: {}", e);
            }
        }

        decision
    }

    fn decide_and_insert(&self, student_id: &str, course_id: &str) -> Result<Enrollment> {
        let mut txn = self.store.write();

        if !txn.student_exists(student_id) {
            return Err(EnrollError::StudentNotFound(student_id.to_string()));
        }

        let course = txn
            .get_course(course_id)
            .ok_or_else(|| EnrollError::CourseNotFound(course_id.to_string()))?;

        // Any existing record blocks, including DROPPED ones
        if txn.has_enrollment(student_id, course_id) {
            return Err(EnrollError::AlreadyEnrolled {
                student_id: student_id.to_string(),
                course_id: course_id.to_string(),
            });
        }

        let enrolled = txn.count_enrolled(course_id);
        let status = if enrolled < course.capacity as usize {
            EnrollmentStatus::Enrolled
        } else {
            EnrollmentStatus::Waitlisted
        };

        Ok(txn.create_enrollment(student_id, course_id, status))
    }
}
