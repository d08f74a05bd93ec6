//! Exclusive section for enrollment decisions

use parking_lot::RwLockWriteGuard;
use registrar_core::{Course, Enrollment, EnrollmentStatus, IdPrefix};
use tracing::debug;

use crate::id::IdGenerator;
use crate::store::Tables;

/// Holds the store's write lock until dropped
///
/// Every read and write made through one `EnrollmentTxn` observes the same
/// state; no other reader or writer can interleave. Keep it short-lived and
/// never publish or await while holding it.
pub struct EnrollmentTxn<'a> {
    tables: RwLockWriteGuard<'a, Tables>,
    ids: &'a IdGenerator,
}

impl<'a> EnrollmentTxn<'a> {
    pub(crate) fn new(tables: RwLockWriteGuard<'a, Tables>, ids: &'a IdGenerator) -> Self {
        Self { tables, ids }
    }

    pub fn student_exists(&self, student_id: &str) -> bool {
        self.tables.students.contains_key(student_id)
    }

    pub fn get_course(&self, course_id: &str) -> Option<Course> {
        self.tables.courses.get(course_id).cloned()
    }

    pub fn has_enrollment(&self, student_id: &str, course_id: &str) -> bool {
        self.tables.has_enrollment(student_id, course_id)
    }

    pub fn count_enrolled(&self, course_id: &str) -> usize {
        self.tables.count_enrolled(course_id)
    }

    /// Insert the record and its index entry
    pub fn create_enrollment(
        &mut self,
        student_id: &str,
        course_id: &str,
        status: EnrollmentStatus,
    ) -> Enrollment {
        let enrollment = Enrollment::new(
            self.ids.next(IdPrefix::Enrollment),
            student_id,
            course_id,
            status,
        );
        self.tables.insert_enrollment(enrollment.clone());

        debug!(id = %enrollment.id, %status, "enrollment created");
        enrollment
    }
}

#[cfg(test)]
mod tests {
    use crate::Store;
    use registrar_core::{CourseDraft, EnrollmentStatus};

    #[test]
    fn test_txn_sees_own_writes() {
        let store = Store::new();
        let student = store.create_student("Alice", "alice@example.com");
        let course = store.create_course(CourseDraft::new("CS101", "Intro", 1));

        let mut txn = store.write();
        assert!(txn.student_exists(&student.id));
        assert_eq!(txn.get_course(&course.id).unwrap().capacity, 1);
        assert!(!txn.has_enrollment(&student.id, &course.id));

        txn.create_enrollment(&student.id, &course.id, EnrollmentStatus::Enrolled);
        assert!(txn.has_enrollment(&student.id, &course.id));
        assert_eq!(txn.count_enrolled(&course.id), 1);
        drop(txn);

        assert_eq!(store.count_enrolled(&course.id), 1);
    }

    #[test]
    fn test_txn_blocks_readers_until_dropped() {
        let store = Store::new();
        let course = store.create_course(CourseDraft::new("CS101", "Intro", 1));

        std::thread::scope(|s| {
            let mut txn = store.write();
            let reader = s.spawn(|| store.count_enrolled(&course.id));

            std::thread::sleep(std::time::Duration::from_millis(50));
            txn.create_enrollment("stu-1", &course.id, EnrollmentStatus::Enrolled);
            drop(txn);

            // The reader could only run after the insert was committed
            assert_eq!(reader.join().unwrap(), 1);
        });
    }
}
