//! `campus` command-line interface.
//!
//! Each subcommand maps to one service operation. Views and records are
//! written to the output as pretty JSON; failures surface as [`CliError`].

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::campus::Campus;
use crate::collections::{CourseRecord, StaffRecord, StudentRecord, DEFAULT_CAPACITY};
use crate::config::{Config, ConfigError};
use crate::record::{RecordError, RecordStore};
use crate::schedule::{ScheduleError, TimeSlot};
use crate::service::ServiceError;

/// University records from the command line.
#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(version)]
#[command(about = "Manage students, staff, courses and enrollments")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Directory holding the JSON documents. Overrides config and environment.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// YAML configuration file.
    #[arg(long, env = "CAMPUS_CONFIG_FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Log at debug level when RUST_LOG is unset.
    #[arg(long, global = true)]
    pub debug: bool,
}

impl GlobalOptions {
    /// Resolve configuration, then apply explicit command-line overrides.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load(self.config_file.as_deref())?;
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if self.debug {
            config.debug = true;
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Student records.
    #[command(subcommand)]
    Student(StudentCommand),

    /// Staff records.
    #[command(subcommand)]
    Staff(StaffCommand),

    /// Course records.
    #[command(subcommand)]
    Course(CourseCommand),

    /// Enroll, drop and complete courses.
    #[command(subcommand)]
    Enrollment(EnrollmentCommand),
}

#[derive(Subcommand, Debug)]
pub enum StudentCommand {
    Add { id: String, name: String },
    Get { id: String },
    Exists { id: String },
    /// Delete a student and its enrollments.
    Delete { id: String },
    GetAll,
    /// Grades of completed courses.
    Transcript { id: String },
}

#[derive(Subcommand, Debug)]
pub enum StaffCommand {
    Add {
        id: String,
        name: String,
        department: String,
    },
    Get { id: String },
    Exists { id: String },
    Delete { id: String },
    GetAll,
}

#[derive(Subcommand, Debug)]
pub enum CourseCommand {
    Add(AddCourseArgs),
    Get { id: String },
    Exists { id: String },
    /// Delete a course and its enrollments.
    Delete { id: String },
    GetAll,
}

#[derive(Args, Debug)]
pub struct AddCourseArgs {
    pub id: String,
    pub name: String,

    /// Day of the week, 1 (Monday) to 7 (Sunday).
    #[arg(long)]
    pub weekday: Option<u8>,

    /// Start time, HH:MM or HH:MM:SS.
    #[arg(long)]
    pub start_time: Option<String>,

    /// Length of the session in seconds.
    #[arg(long, default_value_t = 3600)]
    pub duration: u32,

    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: u32,

    #[arg(long)]
    pub instructor_id: Option<String>,
}

impl AddCourseArgs {
    /// A time slot is attached only when both weekday and start time are given.
    pub fn to_record(&self) -> Result<CourseRecord, ScheduleError> {
        let mut record = CourseRecord::new(&self.id, &self.name).with_capacity(self.capacity);
        if let Some(instructor_id) = &self.instructor_id {
            record = record.with_instructor(instructor_id);
        }
        if let (Some(weekday), Some(start_time)) = (self.weekday, &self.start_time) {
            record = record.with_time_slot(TimeSlot::new(weekday, start_time, self.duration)?);
        }
        Ok(record)
    }
}

#[derive(Subcommand, Debug)]
pub enum EnrollmentCommand {
    /// Enroll a student in a course.
    Add {
        student_id: String,
        course_id: String,
    },
    /// Drop an active enrollment.
    Drop {
        student_id: String,
        course_id: String,
    },
    /// Complete an active enrollment with a grade.
    Complete {
        student_id: String,
        course_id: String,
        grade: String,
    },
    /// Every enrollment of a student.
    Student { student_id: String },
    /// Every enrollment in a course.
    Course { course_id: String },
}

/// Error returned by a CLI invocation.
#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Service(ServiceError),
    Schedule(ScheduleError),
    Output(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Service(e) => write!(f, "{}", e),
            CliError::Schedule(e) => write!(f, "{}", e),
            CliError::Output(e) => write!(f, "output error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Service(e) => Some(e),
            CliError::Schedule(e) => Some(e),
            CliError::Output(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<ServiceError> for CliError {
    fn from(err: ServiceError) -> Self {
        CliError::Service(err)
    }
}

impl From<RecordError> for CliError {
    fn from(err: RecordError) -> Self {
        CliError::Service(err.into())
    }
}

impl From<ScheduleError> for CliError {
    fn from(err: ScheduleError) -> Self {
        CliError::Schedule(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Output(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.into())
    }
}

/// Run one command against a campus, writing results to `out`.
pub fn run<S, W>(command: &Command, campus: &Campus<S>, out: &mut W) -> Result<(), CliError>
where
    S: RecordStore + Clone,
    W: Write,
{
    match command {
        Command::Student(cmd) => run_student(cmd, campus, out),
        Command::Staff(cmd) => run_staff(cmd, campus, out),
        Command::Course(cmd) => run_course(cmd, campus, out),
        Command::Enrollment(cmd) => run_enrollment(cmd, campus, out),
    }
}

fn run_student<S, W>(cmd: &StudentCommand, campus: &Campus<S>, out: &mut W) -> Result<(), CliError>
where
    S: RecordStore + Clone,
    W: Write,
{
    let students = &campus.students;
    match cmd {
        StudentCommand::Add { id, name } => {
            print_json(out, &students.add_student(StudentRecord::new(id, name))?)
        }
        StudentCommand::Get { id } => print_json(out, &students.get_student(id)?),
        StudentCommand::Exists { id } => print_line(out, students.student_exists(id)?),
        StudentCommand::Delete { id } => {
            students.remove_student(id)?;
            print_line(out, format_args!("Student {} removed", id))
        }
        StudentCommand::GetAll => print_json(out, &students.get_all_students()?),
        StudentCommand::Transcript { id } => print_json(out, &students.get_transcript(id)?),
    }
}

fn run_staff<S, W>(cmd: &StaffCommand, campus: &Campus<S>, out: &mut W) -> Result<(), CliError>
where
    S: RecordStore + Clone,
    W: Write,
{
    let staff = &campus.staff;
    match cmd {
        StaffCommand::Add {
            id,
            name,
            department,
        } => print_json(out, &staff.add_staff(StaffRecord::new(id, name, department))?),
        StaffCommand::Get { id } => print_json(out, &staff.get_staff(id)?),
        StaffCommand::Exists { id } => print_line(out, staff.staff_exists(id)?),
        StaffCommand::Delete { id } => {
            staff.remove_staff(id)?;
            print_line(out, format_args!("Staff {} removed", id))
        }
        StaffCommand::GetAll => print_json(out, &staff.get_all_staff()?),
    }
}

fn run_course<S, W>(cmd: &CourseCommand, campus: &Campus<S>, out: &mut W) -> Result<(), CliError>
where
    S: RecordStore + Clone,
    W: Write,
{
    let courses = &campus.courses;
    match cmd {
        CourseCommand::Add(args) => print_json(out, &courses.add_course(args.to_record()?)?),
        CourseCommand::Get { id } => print_json(out, &courses.get_course(id)?),
        CourseCommand::Exists { id } => print_line(out, courses.course_exists(id)?),
        CourseCommand::Delete { id } => {
            courses.remove_course(id)?;
            print_line(out, format_args!("Course {} removed", id))
        }
        CourseCommand::GetAll => print_json(out, &courses.get_all_courses()?),
    }
}

fn run_enrollment<S, W>(
    cmd: &EnrollmentCommand,
    campus: &Campus<S>,
    out: &mut W,
) -> Result<(), CliError>
where
    S: RecordStore + Clone,
    W: Write,
{
    let engine = &campus.enrollments;
    match cmd {
        EnrollmentCommand::Add {
            student_id,
            course_id,
        } => print_json(out, &engine.enroll(student_id, course_id)?),
        EnrollmentCommand::Drop {
            student_id,
            course_id,
        } => print_json(out, &engine.drop(student_id, course_id)?),
        EnrollmentCommand::Complete {
            student_id,
            course_id,
            grade,
        } => print_json(out, &engine.complete(student_id, course_id, grade)?),
        EnrollmentCommand::Student { student_id } => {
            print_json(out, &engine.student_enrollments(student_id)?)
        }
        EnrollmentCommand::Course { course_id } => {
            print_json(out, &engine.course_enrollments(course_id)?)
        }
    }
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn print_line<W: Write>(out: &mut W, value: impl fmt::Display) -> Result<(), CliError> {
    writeln!(out, "{}", value)?;
    Ok(())
}
