#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use timetabling_checker::check_schedule;
use timetabling_checker::validate_schedule;
use timetabling_checker::ScheduleViolation;
use timetabling_core::problem::Problem;
use timetabling_core::problem::Room;
use timetabling_core::problem::Student;
use timetabling_core::solution::ScheduledExam;
use timetabling_core::Schedule;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Three courses over three days in two rooms. The physics students also take maths, and the
/// chemists also take physics.
fn faculty() -> Problem {
    let students = (0..20)
        .map(|index| Student::new(format!("math{index}"), ["Maths"]))
        .chain((0..8).map(|index| Student::new(format!("phys{index}"), ["Maths", "Physics"])))
        .chain((0..4).map(|index| Student::new(format!("chem{index}"), ["Physics", "Chemistry"])));

    Problem::new(
        ["Mon".into(), "Tue".into(), "Wed".into()],
        ["Maths".into(), "Physics".into(), "Chemistry".into()],
        [Room::new("Hall", 40), Room::new("Lab", 12)],
        students,
    )
    .expect("valid problem")
}

fn exams(exams: &[(&str, &str, &str)]) -> Schedule {
    exams
        .iter()
        .map(|&(course, day, room)| ScheduledExam::new(course, day, room))
        .collect()
}

#[test]
fn valid_timetable_passes() {
    init_logging();

    let schedule = exams(&[
        ("Maths", "Mon", "Hall"),
        ("Physics", "Tue", "Lab"),
        ("Chemistry", "Mon", "Lab"),
    ]);

    assert!(check_schedule(&schedule, &faculty()));
}

#[test]
fn order_of_exams_does_not_matter() {
    init_logging();

    let schedule = exams(&[
        ("Chemistry", "Wed", "Hall"),
        ("Maths", "Mon", "Hall"),
        ("Physics", "Tue", "Hall"),
    ]);

    assert_eq!(Ok(()), validate_schedule(&schedule, &faculty()));
}

#[test]
fn chained_enrollments_conflict_on_shared_day() {
    init_logging();

    let schedule = exams(&[
        ("Maths", "Mon", "Hall"),
        ("Physics", "Wed", "Lab"),
        ("Chemistry", "Wed", "Hall"),
    ]);

    let violation = validate_schedule(&schedule, &faculty()).unwrap_err();
    assert!(matches!(
        violation,
        ScheduleViolation::StudentConflict { ref student, ref first, ref second, .. }
            if student.as_str() == "chem0" && first.as_str() == "Physics" && second.as_str() == "Chemistry"
    ));
    assert!(!check_schedule(&schedule, &faculty()));
}

#[test]
fn large_course_in_lab_exceeds_capacity() {
    init_logging();

    let schedule = exams(&[
        ("Maths", "Mon", "Lab"),
        ("Physics", "Tue", "Hall"),
        ("Chemistry", "Wed", "Hall"),
    ]);

    assert_eq!(
        "course Maths has 28 students, but room Lab only seats 12",
        validate_schedule(&schedule, &faculty())
            .unwrap_err()
            .to_string()
    );
}
