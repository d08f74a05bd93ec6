//! Concurrent enrollment behaviour against a shared store

use std::sync::Arc;

use registrar_audit::{AuditResult, AuditWorker, NoopSink};
use registrar_core::{CourseDraft, EnrollmentStatus};
use registrar_engine::{EnrollError, EnrollmentEngine};
use registrar_store::Store;

fn engine_with_noop() -> EnrollmentEngine {
    EnrollmentEngine::new(Arc::new(Store::new()), Arc::new(NoopSink))
}

#[test]
fn concurrent_enrollments_never_exceed_capacity() {
    const CAPACITY: u32 = 7;
    const STUDENTS: usize = 64;

    for _ in 0..20 {
        let engine = engine_with_noop();
        let store = engine.store().clone();
        let course = store.create_course(CourseDraft::new("CS101", "Intro", CAPACITY));
        let students: Vec<_> = (0..STUDENTS)
            .map(|i| store.create_student(format!("S{i}"), format!("s{i}@example.com")))
            .collect();

        let statuses: Vec<EnrollmentStatus> = std::thread::scope(|s| {
            let handles: Vec<_> = students
                .iter()
                .map(|student| {
                    let engine = engine.clone();
                    let course_id = course.id.clone();
                    s.spawn(move || engine.enroll(&student.id, &course_id).unwrap().status)
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let enrolled = statuses
            .iter()
            .filter(|s| **s == EnrollmentStatus::Enrolled)
            .count();
        let waitlisted = statuses
            .iter()
            .filter(|s| **s == EnrollmentStatus::Waitlisted)
            .count();

        assert_eq!(enrolled, CAPACITY as usize);
        assert_eq!(waitlisted, STUDENTS - CAPACITY as usize);
        assert_eq!(store.count_enrolled(&course.id), CAPACITY as usize);
    }
}

#[test]
fn concurrent_duplicate_attempts_create_one_record() {
    let engine = engine_with_noop();
    let store = engine.store().clone();
    let course = store.create_course(CourseDraft::new("CS101", "Intro", 10));
    let student = store.create_student("Alice", "alice@example.com");

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..32)
            .map(|_| {
                let engine = engine.clone();
                let (student_id, course_id) = (student.id.clone(), course.id.clone());
                s.spawn(move || engine.enroll(&student_id, &course_id))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let accepted = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(EnrollError::AlreadyEnrolled { .. })))
        .count();

    assert_eq!(accepted, 1);
    assert_eq!(duplicates, 31);
    assert_eq!(store.list_enrollments().len(), 1);
}

#[test]
fn parallel_courses_are_independent() {
    let engine = engine_with_noop();
    let store = engine.store().clone();
    let courses: Vec<_> = (0..4)
        .map(|i| store.create_course(CourseDraft::new(format!("C{i}"), "Course", 3)))
        .collect();
    let students: Vec<_> = (0..10)
        .map(|i| store.create_student(format!("S{i}"), "s@example.com"))
        .collect();

    std::thread::scope(|s| {
        for course in &courses {
            for student in &students {
                let engine = engine.clone();
                s.spawn(move || engine.enroll(&student.id, &course.id).unwrap());
            }
        }
    });

    for course in &courses {
        assert_eq!(store.count_enrolled(&course.id), 3);
    }
    assert_eq!(store.list_enrollments().len(), 40);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn audit_trail_matches_attempts() -> anyhow::Result<()> {
    let store = Arc::new(Store::new());
    let audit = Arc::new(AuditWorker::new(1_000));
    audit.start();
    let engine = EnrollmentEngine::new(store.clone(), audit.clone());

    let course = store.create_course(CourseDraft::new("CS101", "Intro", 2));
    let students: Vec<_> = (0..5)
        .map(|i| store.create_student(format!("S{i}"), "s@example.com"))
        .collect();

    let mut returned = Vec::new();
    for student in &students {
        returned.push(engine.enroll(&student.id, &course.id)?.status);
    }
    assert!(engine.enroll(&students[0].id, &course.id).is_err());
    // Unknown student: rejected without an audit event
    assert!(engine.enroll("stu-404", &course.id).is_err());

    for _ in 0..400 {
        if audit.len() >= 6 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let events = audit.list();
    assert_eq!(events.len(), 6);
    for (event, status) in events.iter().zip(&returned) {
        assert_eq!(event.result, AuditResult::from(*status));
    }
    assert_eq!(events[5].result, AuditResult::DuplicateBlocked);
    assert_eq!(events[5].student_id, students[0].id);
    assert_eq!(audit.dropped(), 0);

    audit.shutdown().await;
    Ok(())
}

#[test]
fn full_audit_queue_does_not_affect_enrollment() {
    let store = Arc::new(Store::new());
    // Never started, so the queue fills after one event
    let audit = Arc::new(AuditWorker::new(1));
    let engine = EnrollmentEngine::new(store.clone(), audit.clone());

    let course = store.create_course(CourseDraft::new("CS101", "Intro", 50));
    for i in 0..100 {
        let student = store.create_student(format!("S{i}"), "s@example.com");
        engine.enroll(&student.id, &course.id).unwrap();
    }

    assert_eq!(store.count_enrolled(&course.id), 50);
    assert_eq!(store.list_enrollments().len(), 100);
    assert_eq!(audit.dropped(), 99);
}
