//! Integration tests for a campus persisted as JSON documents.

#[path = "../support/mod.rs"]
mod support;

use std::fs;

use campus_records::{Campus, Config, CourseRecord, EnrollmentStatus, StudentRecord};
use serde_json::{json, Value};
use support::scheduled_course;
use tempfile::TempDir;

fn config_for(dir: &TempDir) -> Config {
    Config {
        data_dir: dir.path().join("data"),
        debug: false,
    }
}

fn read_document(config: &Config, collection: &str) -> Value {
    let text = fs::read_to_string(config.data_dir.join(format!("{}.json", collection))).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn open_creates_all_four_documents() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    Campus::open(&config).unwrap();

    for collection in ["students", "staff", "courses", "enrollments"] {
        assert_eq!(read_document(&config, collection), json!([]), "{}", collection);
    }
}

#[test]
fn state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);

    let enrollment_id = {
        let campus = Campus::open(&config).unwrap();
        campus.students.add_student(StudentRecord::new("s1", "Ada")).unwrap();
        campus
            .courses
            .add_course(scheduled_course("c1", 1, "09:00", 5400))
            .unwrap();
        campus.enrollments.enroll("s1", "c1").unwrap().id
    };

    let campus = Campus::open(&config).unwrap();
    let student = campus.students.get_student("s1").unwrap();
    assert_eq!(student.enrolled_courses_ids, vec!["c1"]);

    let completed = campus.enrollments.complete("s1", "c1", "A").unwrap();
    assert_eq!(completed.id, enrollment_id);
    assert_eq!(completed.status, EnrollmentStatus::Completed);
}

#[test]
fn documents_hold_flat_records() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let campus = Campus::open(&config).unwrap();

    campus.students.add_student(StudentRecord::new("s1", "Ada")).unwrap();
    campus
        .courses
        .add_course(scheduled_course("c1", 2, "10:00", 3600).with_instructor("t1"))
        .unwrap();
    campus.courses.add_course(CourseRecord::new("c2", "Plain")).unwrap();
    let enrollment = campus.enrollments.enroll("s1", "c1").unwrap();

    assert_eq!(
        read_document(&config, "students"),
        json!([{ "user_id": "s1", "name": "Ada" }])
    );
    assert_eq!(
        read_document(&config, "courses"),
        json!([
            {
                "id": "c1",
                "name": "Course c1",
                "capacity": 30,
                "instructor_id": "t1",
                "time_slot": { "weekday": 2, "start_time": "10:00:00", "duration": 3600 }
            },
            {
                "id": "c2",
                "name": "Plain",
                "capacity": 30,
                "instructor_id": null,
                "time_slot": null
            }
        ])
    );
    assert_eq!(
        read_document(&config, "enrollments"),
        json!([{
            "id": enrollment.id,
            "student_id": "s1",
            "course_id": "c1",
            "status": "enrolled",
            "grade": null
        }])
    );
}

#[test]
fn cascade_is_visible_on_disk() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    let campus = Campus::open(&config).unwrap();
    campus.students.add_student(StudentRecord::new("s1", "Ada")).unwrap();
    campus.students.add_student(StudentRecord::new("s2", "Bo")).unwrap();
    campus.courses.add_course(CourseRecord::new("c1", "One")).unwrap();
    campus.enrollments.enroll("s1", "c1").unwrap();
    campus.enrollments.enroll("s2", "c1").unwrap();

    campus.students.remove_student("s1").unwrap();

    let enrollments = read_document(&config, "enrollments");
    let owners: Vec<&str> = enrollments
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["student_id"].as_str().unwrap())
        .collect();
    assert_eq!(owners, vec!["s2"]);
    assert_eq!(read_document(&config, "students").as_array().unwrap().len(), 1);
}

#[test]
fn hand_edited_documents_are_read() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    fs::create_dir_all(&config.data_dir).unwrap();
    fs::write(
        config.data_dir.join("courses.json"),
        r#"[{
            "id": "c1",
            "name": "Legacy",
            "time_slot": {"weekday": 5, "start_time": "14:00", "duration": 1800}
        }]"#,
    )
    .unwrap();

    let campus = Campus::open(&config).unwrap();
    let course = campus.courses.get_course("c1").unwrap();
    assert_eq!(course.capacity, 30);
    assert_eq!(course.instructor_id, None);
    let slot = course.time_slot.unwrap();
    assert_eq!(slot.start_time.to_string(), "14:00:00");
    assert_eq!(slot.end_secs(), 14 * 3600 + 1800);
}

#[test]
fn corrupt_document_reads_as_empty_collection() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir);
    fs::create_dir_all(&config.data_dir).unwrap();
    fs::write(config.data_dir.join("students.json"), "{ not json").unwrap();

    let campus = Campus::open(&config).unwrap();
    assert!(campus.students.get_all_students().unwrap().is_empty());

    campus.students.add_student(StudentRecord::new("s1", "Ada")).unwrap();
    assert_eq!(read_document(&config, "students").as_array().unwrap().len(), 1);
}
