//! Integration tests for the enrollment engine (enroll, drop, complete).

#[path = "../support/mod.rs"]
mod support;


use campus_records::{EnrollmentError, EnrollmentStatus, EntityKind, ServiceError};
use support::{add_courses, add_students, course, seeded_campus};

#[test]
fn enroll_drop_and_reenroll_keeps_history() {
    let campus = seeded_campus();
    let engine = &campus.enrollments;

    let first = engine.enroll("s1", "c1").unwrap();
    assert_eq!(first.status, EnrollmentStatus::Enrolled);
    assert_eq!(first.grade, None);

    let again = engine.enroll("s1", "c1").unwrap_err();
    assert_eq!(
        again.as_enrollment_error(),
        Some(&EnrollmentError::AlreadyEnrolled {
            course_id: "c1".into()
        })
    );

    let dropped = engine.drop("s1", "c1").unwrap();
    assert_eq!(dropped.id, first.id);
    assert_eq!(dropped.status, EnrollmentStatus::Dropped);

    let history = engine.student_enrollments("s1").unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, EnrollmentStatus::Dropped);

    let second = engine.enroll("s1", "c1").unwrap();
    assert_ne!(second.id, first.id);
    assert_eq!(second.status, EnrollmentStatus::Enrolled);

    let history = engine.student_enrollments("s1").unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, first.id);
    assert_eq!(history[1].id, second.id);
}

#[test]
fn full_course_rejects_new_student_and_keeps_existing_enrollment() {
    let campus = seeded_campus();
    add_courses(&campus, [course("tiny").with_capacity(1)]);

    let seated = campus.enrollments.enroll("s1", "tiny").unwrap();
    let err = campus.enrollments.enroll("s2", "tiny").unwrap_err();
    assert_eq!(
        err.as_enrollment_error(),
        Some(&EnrollmentError::CourseFull {
            course_id: "tiny".into()
        })
    );

    let enrollments = campus.enrollments.course_enrollments("tiny").unwrap();
    assert_eq!(enrollments, vec![seated]);
    assert!(campus.courses.get_course("tiny").unwrap().is_full());
}

#[test]
fn dropped_and_completed_seats_are_released() {
    let campus = seeded_campus();
    add_students(&campus, &["s3"]);
    add_courses(&campus, [course("tiny").with_capacity(1)]);

    campus.enrollments.enroll("s1", "tiny").unwrap();
    campus.enrollments.drop("s1", "tiny").unwrap();
    campus.enrollments.enroll("s2", "tiny").unwrap();
    campus.enrollments.complete("s2", "tiny", "B").unwrap();
    campus.enrollments.enroll("s3", "tiny").unwrap();

    let course = campus.courses.get_course("tiny").unwrap();
    assert_eq!(course.enrolled_students_ids, vec!["s3"]);
    assert_eq!(campus.enrollments.course_enrollments("tiny").unwrap().len(), 3);
}

#[test]
fn zero_capacity_course_is_always_full() {
    let campus = seeded_campus();
    add_courses(&campus, [course("closed").with_capacity(0)]);

    let err = campus.enrollments.enroll("s1", "closed").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Enrollment(EnrollmentError::CourseFull { .. })
    ));
}

#[test]
fn complete_records_grade_and_shows_in_views() {
    let campus = seeded_campus();
    campus.enrollments.enroll("s1", "c1").unwrap();
    campus.enrollments.enroll("s1", "c2").unwrap();

    let completed = campus.enrollments.complete("s1", "c1", "A").unwrap();
    assert_eq!(completed.status, EnrollmentStatus::Completed);
    assert_eq!(completed.grade.as_deref(), Some("A"));

    let student = campus.students.get_student("s1").unwrap();
    assert_eq!(student.enrolled_courses_ids, vec!["c2"]);
    assert_eq!(student.grade("c1"), Some("A"));
    assert!(!student.is_enrolled_in("c1"));
}

#[test]
fn drop_leaves_grade_absent() {
    let campus = seeded_campus();
    campus.enrollments.enroll("s1", "c1").unwrap();
    let dropped = campus.enrollments.drop("s1", "c1").unwrap();
    assert_eq!(dropped.grade, None);
    assert!(campus.students.get_transcript("s1").unwrap().is_empty());
}

#[test]
fn transitions_require_an_active_enrollment() {
    let campus = seeded_campus();
    let not_enrolled = |err: ServiceError| {
        matches!(
            err,
            ServiceError::NotEnrolled { ref student_id, ref course_id }
                if student_id == "s1" && course_id == "c1"
        )
    };

    assert!(not_enrolled(campus.enrollments.drop("s1", "c1").unwrap_err()));
    assert!(not_enrolled(campus.enrollments.complete("s1", "c1", "A").unwrap_err()));

    campus.enrollments.enroll("s1", "c1").unwrap();
    campus.enrollments.complete("s1", "c1", "A").unwrap();
    assert!(not_enrolled(campus.enrollments.drop("s1", "c1").unwrap_err()));
    assert!(not_enrolled(campus.enrollments.complete("s1", "c1", "B").unwrap_err()));

    let student = campus.students.get_student("s1").unwrap();
    assert_eq!(student.grade("c1"), Some("A"));
}

#[test]
fn enroll_reports_missing_student_before_missing_course() {
    let campus = seeded_campus();

    let err = campus.enrollments.enroll("ghost", "nowhere").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound { kind: EntityKind::Student, ref id } if id == "ghost"
    ));

    let err = campus.enrollments.enroll("s1", "nowhere").unwrap_err();
    assert!(err.is_enrollment_error());
    assert_eq!(err.as_enrollment_error().unwrap().course_id(), "nowhere");
    assert!(matches!(
        err,
        ServiceError::Enrollment(EnrollmentError::CourseNotFound { .. })
    ));
}

#[test]
fn drop_checks_existence_but_complete_does_not() {
    let campus = seeded_campus();
    campus.enrollments.enroll("s1", "c1").unwrap();

    let err = campus.enrollments.drop("ghost", "c1").unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { kind: EntityKind::Student, .. }));
    let err = campus.enrollments.drop("s1", "nowhere").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Enrollment(EnrollmentError::CourseNotFound { .. })
    ));

    // An orphaned enrollment can still be completed.
    campus.system.courses().delete("c1").unwrap();
    let completed = campus.enrollments.complete("s1", "c1", "C").unwrap();
    assert_eq!(completed.status, EnrollmentStatus::Completed);
}

#[test]
fn listing_enrollments_requires_the_owner() {
    let campus = seeded_campus();
    assert!(matches!(
        campus.enrollments.student_enrollments("ghost").unwrap_err(),
        ServiceError::NotFound { kind: EntityKind::Student, .. }
    ));
    assert!(matches!(
        campus.enrollments.course_enrollments("nowhere").unwrap_err(),
        ServiceError::NotFound { kind: EntityKind::Course, .. }
    ));
    assert!(campus.enrollments.course_enrollments("c1").unwrap().is_empty());
}
