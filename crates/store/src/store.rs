//! In-memory repository

use std::collections::HashMap;

use parking_lot::RwLock;
use registrar_core::{
    Course, CourseDraft, Enrollment, EnrollmentStatus, IdPrefix, Instructor, Student,
};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::id::IdGenerator;
use crate::txn::EnrollmentTxn;

/// Key of the duplicate-pair index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct PairKey {
    student_id: String,
    course_id: String,
}

impl PairKey {
    pub(crate) fn new(student_id: &str, course_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            course_id: course_id.to_string(),
        }
    }
}

/// Everything guarded by the store lock
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) students: HashMap<String, Student>,
    pub(crate) instructors: HashMap<String, Instructor>,
    pub(crate) courses: HashMap<String, Course>,
    pub(crate) enrollments: HashMap<String, Enrollment>,
    /// (student, course) -> enrollment id
    pub(crate) enrollment_index: HashMap<PairKey, String>,
}

impl Tables {
    pub(crate) fn has_enrollment(&self, student_id: &str, course_id: &str) -> bool {
        self.enrollment_index
            .contains_key(&PairKey::new(student_id, course_id))
    }

    pub(crate) fn count_enrolled(&self, course_id: &str) -> usize {
        self.enrollments
            .values()
            .filter(|e| e.course_id == course_id && e.status == EnrollmentStatus::Enrolled)
            .count()
    }

    /// Insert record and index entry together
    pub(crate) fn insert_enrollment(&mut self, enrollment: Enrollment) {
        self.enrollment_index.insert(
            PairKey::new(&enrollment.student_id, &enrollment.course_id),
            enrollment.id.clone(),
        );
        self.enrollments.insert(enrollment.id.clone(), enrollment);
    }
}

/// Thread-safe in-memory store
///
/// Construct one per process (or per test) and share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct Store {
    tables: RwLock<Tables>,
    ids: IdGenerator,
}

impl Store {
    /// Tạo store rỗng
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the exclusive lock for a multi-step enrollment decision
    pub fn write(&self) -> EnrollmentTxn<'_> {
        EnrollmentTxn::new(self.tables.write(), &self.ids)
    }

    // ============ Students ============

    pub fn create_student(&self, full_name: impl Into<String>, email: impl Into<String>) -> Student {
        let student = Student::new(self.ids.next(IdPrefix::Student), full_name, email);

        self.tables
            .write()
            .students
            .insert(student.id.clone(), student.clone());

        debug!(id = %student.id, "student created");
        student
    }

    pub fn get_student(&self, id: &str) -> Option<Student> {
        self.tables.read().students.get(id).cloned()
    }

    pub fn list_students(&self) -> Vec<Student> {
        self.tables.read().students.values().cloned().collect()
    }

    // ============ Instructors ============

    pub fn create_instructor(&self, name: impl Into<String>) -> Instructor {
        let instructor = Instructor::new(self.ids.next(IdPrefix::Instructor), name);

        self.tables
            .write()
            .instructors
            .insert(instructor.id.clone(), instructor.clone());

        debug!(id = %instructor.id, "instructor created");
        instructor
    }

    pub fn get_instructor(&self, id: &str) -> Option<Instructor> {
        self.tables.read().instructors.get(id).cloned()
    }

    pub fn list_instructors(&self) -> Vec<Instructor> {
        self.tables.read().instructors.values().cloned().collect()
    }

    // ============ Courses ============

    /// Create a course. The instructor reference is stored as given.
    pub fn create_course(&self, draft: CourseDraft) -> Course {
        let course = draft.into_course(self.ids.next(IdPrefix::Course));

        self.tables
            .write()
            .courses
            .insert(course.id.clone(), course.clone());

        debug!(id = %course.id, capacity = course.capacity, "course created");
        course
    }

    pub fn get_course(&self, id: &str) -> Option<Course> {
        self.tables.read().courses.get(id).cloned()
    }

    pub fn list_courses(&self) -> Vec<Course> {
        self.tables.read().courses.values().cloned().collect()
    }

    /// Overwrite every mutable field of an existing course
    pub fn update_course(&self, id: &str, draft: CourseDraft) -> Result<Course> {
        let mut tables = self.tables.write();
        let slot = tables
            .courses
            .get_mut(id)
            .ok_or_else(|| StoreError::course_not_found(id))?;

        *slot = draft.into_course(id);
        debug!(id, "course updated");
        Ok(slot.clone())
    }

    /// Remove a course. Its enrollments stay in place.
    pub fn delete_course(&self, id: &str) -> Result<()> {
        let removed = self.tables.write().courses.remove(id);
        match removed {
            Some(_) => {
                debug!(id, "course deleted");
                Ok(())
            }
            None => Err(StoreError::course_not_found(id)),
        }
    }

    // ============ Enrollments ============

    /// True if any record exists for the pair, whatever its status
    pub fn has_enrollment(&self, student_id: &str, course_id: &str) -> bool {
        self.tables.read().has_enrollment(student_id, course_id)
    }

    /// Number of `ENROLLED` records for the course
    pub fn count_enrolled(&self, course_id: &str) -> usize {
        self.tables.read().count_enrolled(course_id)
    }

    /// Insert an enrollment and its index entry in one step.
    ///
    /// This does not check capacity or duplicates; use [`Store::write`] when
    /// the decision and the insert must be atomic.
    pub fn create_enrollment(
        &self,
        student_id: &str,
        course_id: &str,
        status: EnrollmentStatus,
    ) -> Enrollment {
        self.write().create_enrollment(student_id, course_id, status)
    }

    pub fn list_enrollments(&self) -> Vec<Enrollment> {
        self.tables.read().enrollments.values().cloned().collect()
    }
}
