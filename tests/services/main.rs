//! Integration tests for the student, staff and course services.

#[path = "../support/mod.rs"]
mod support;

use campus_records::{
    CourseRecord, EnrollmentRecord, EntityKind, RecordError, ServiceError, StaffRecord,
    StudentRecord,
};
use support::{add_students, course, scheduled_course, seeded_campus};

#[test]
fn added_records_read_back_unchanged() {
    let campus = seeded_campus();

    let student = StudentRecord::new("s9", "Ada Lovelace");
    campus.students.add_student(student.clone()).unwrap();
    assert_eq!(campus.system.students().get("s9").unwrap(), Some(student));

    let staff = StaffRecord::new("t9", "Alan Turing", "Mathematics");
    campus.staff.add_staff(staff.clone()).unwrap();
    assert_eq!(campus.system.staff().get("t9").unwrap(), Some(staff));

    let course = scheduled_course("c9", 4, "13:15", 2700)
        .with_capacity(12)
        .with_instructor("t9");
    campus.courses.add_course(course.clone()).unwrap();
    assert_eq!(campus.system.courses().get("c9").unwrap(), Some(course));

    let enrollment = campus.enrollments.enroll("s9", "c9").unwrap();
    assert_eq!(
        campus.system.enrollments().get(&enrollment.id).unwrap(),
        Some(enrollment)
    );
}

#[test]
fn second_add_is_rejected_and_first_record_kept() {
    let campus = seeded_campus();

    let err = campus
        .students
        .add_student(StudentRecord::new("s1", "Impostor"))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::AlreadyExists { kind: EntityKind::Student, ref id } if id == "s1"
    ));
    assert_eq!(campus.students.get_student("s1").unwrap().name, "Student s1");

    let err = campus
        .staff
        .add_staff(StaffRecord::new("t1", "Impostor", "Nowhere"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyExists { kind: EntityKind::Staff, .. }));
    assert_eq!(campus.staff.get_staff("t1").unwrap().department, "Computer Science");

    let err = campus
        .courses
        .add_course(CourseRecord::new("c1", "Impostor"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyExists { kind: EntityKind::Course, .. }));
    assert_eq!(campus.courses.get_course("c1").unwrap().name, "Course c1");
}

#[test]
fn store_level_duplicate_uses_collection_message() {
    let campus = seeded_campus();

    let err = campus.system.courses().add(&course("c1")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to add course. Course with id 'c1' already exists."
    );

    let err = campus
        .system
        .students()
        .add(&StudentRecord::new("s1", "Again"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Entity with user_id 's1' already exists.");

    let enrollment = campus.enrollments.enroll("s1", "c1").unwrap();
    let err = campus.system.enrollments().add(&enrollment).unwrap_err();
    assert!(matches!(
        err,
        RecordError::Duplicate { ref collection, .. } if collection == "enrollments"
    ));
}

#[test]
fn removing_student_cascades_to_enrollments() {
    let campus = seeded_campus();
    campus.enrollments.enroll("s1", "c1").unwrap();
    campus.enrollments.enroll("s1", "c2").unwrap();
    campus.enrollments.drop("s1", "c2").unwrap();
    campus.enrollments.enroll("s2", "c1").unwrap();

    campus.students.remove_student("s1").unwrap();

    assert!(!campus.students.student_exists("s1").unwrap());
    let remaining: Vec<EnrollmentRecord> = campus.system.enrollments().all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|e| e.student_id != "s1"));
    assert_eq!(
        campus.courses.get_course("c1").unwrap().enrolled_students_ids,
        vec!["s2"]
    );
}

#[test]
fn removing_course_cascades_to_enrollments() {
    let campus = seeded_campus();
    campus.enrollments.enroll("s1", "c1").unwrap();
    campus.enrollments.enroll("s2", "c1").unwrap();
    campus.enrollments.enroll("s2", "c2").unwrap();

    campus.courses.remove_course("c1").unwrap();

    assert!(!campus.courses.course_exists("c1").unwrap());
    assert!(campus.system.enrollments().by_course("c1").unwrap().is_empty());
    assert_eq!(
        campus.students.get_student("s2").unwrap().enrolled_courses_ids,
        vec!["c2"]
    );
    assert_eq!(campus.staff.get_staff("t1").unwrap().assigned_courses_ids, vec!["c2"]);
}

#[test]
fn removing_staff_leaves_courses_pointing_at_them() {
    let campus = seeded_campus();
    campus.staff.remove_staff("t1").unwrap();

    assert!(!campus.staff.staff_exists("t1").unwrap());
    assert_eq!(
        campus.courses.get_course("c1").unwrap().instructor_id.as_deref(),
        Some("t1")
    );
}

#[test]
fn missing_entities_are_not_found() {
    let campus = seeded_campus();

    for err in [
        campus.students.get_student("ghost").unwrap_err(),
        campus.students.remove_student("ghost").unwrap_err(),
        campus.students.get_transcript("ghost").unwrap_err(),
        campus.staff.get_staff("ghost").unwrap_err(),
        campus.staff.remove_staff("ghost").unwrap_err(),
        campus.courses.get_course("ghost").unwrap_err(),
        campus.courses.remove_course("ghost").unwrap_err(),
    ] {
        assert!(matches!(err, ServiceError::NotFound { ref id, .. } if id == "ghost"), "{}", err);
    }

    assert!(!campus.students.student_exists("ghost").unwrap());
    assert!(!campus.staff.staff_exists("ghost").unwrap());
    assert!(!campus.courses.course_exists("ghost").unwrap());
}

#[test]
fn get_all_follows_insertion_order() {
    let campus = seeded_campus();
    add_students(&campus, &["s0"]);

    let ids: Vec<String> = campus
        .students
        .get_all_students()
        .unwrap()
        .into_iter()
        .map(|s| s.user_id)
        .collect();
    assert_eq!(ids, vec!["s1", "s2", "s0"]);
    assert_eq!(campus.staff.get_all_staff().unwrap().len(), 1);
    assert_eq!(campus.courses.get_all_courses().unwrap().len(), 2);
}

#[test]
fn transcript_lists_completed_courses_only() {
    let campus = seeded_campus();
    campus.enrollments.enroll("s1", "c1").unwrap();
    campus.enrollments.enroll("s1", "c2").unwrap();
    campus.enrollments.complete("s1", "c1", "A-").unwrap();

    let transcript = campus.students.get_transcript("s1").unwrap();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript["c1"].as_deref(), Some("A-"));
}

#[test]
fn ungraded_completion_appears_without_grade() {
    let campus = seeded_campus();
    let mut record = EnrollmentRecord::enrolled("s1", "c1");
    record.status = campus_records::EnrollmentStatus::Completed;
    campus.system.enrollments().add(&record).unwrap();

    let transcript = campus.students.get_transcript("s1").unwrap();
    assert_eq!(transcript.get("c1"), Some(&None));
    assert!(!campus.students.get_student("s1").unwrap().has_completed("c1"));
}
