//! Builders for the problems and schedules used in the checker tests.

use timetabling_core::problem::Problem;
use timetabling_core::problem::Room;
use timetabling_core::problem::Student;
use timetabling_core::solution::ScheduledExam;
use timetabling_core::Schedule;

/// Build a problem from plain names. Panics if the problem is rejected.
pub(crate) fn problem(
    days: &[&str],
    courses: &[&str],
    rooms: &[(&str, u32)],
    students: &[(&str, &[&str])],
) -> Problem {
    Problem::new(
        days.iter().map(|&day| day.into()),
        courses.iter().map(|&course| course.into()),
        rooms.iter().map(|&(id, capacity)| Room::new(id, capacity)),
        students
            .iter()
            .map(|&(id, courses)| Student::new(id, courses.iter().copied())),
    )
    .expect("valid test problem")
}

/// Two days (Mon, Tue), two rooms (A seats 30, B seats 10), Math with 25 students and Art with 5
/// other students.
pub(crate) fn math_and_art() -> Problem {
    let math = (0..25).map(|index| Student::new(format!("m{index}"), ["Math"]));
    let art = (0..5).map(|index| Student::new(format!("a{index}"), ["Art"]));

    Problem::new(
        ["Mon".into(), "Tue".into()],
        ["Math".into(), "Art".into()],
        [Room::new("A", 30), Room::new("B", 10)],
        math.chain(art),
    )
    .expect("valid test problem")
}

/// A schedule of (course, day, room) triples.
pub(crate) fn schedule(exams: &[(&str, &str, &str)]) -> Schedule {
    exams
        .iter()
        .map(|&(course, day, room)| ScheduledExam::new(course, day, room))
        .collect()
}
