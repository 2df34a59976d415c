//! An independent checker for exam timetables.
//!
//! The checker only trusts the problem data. It accepts any [`Schedule`], whether it was decoded
//! from a solver model or written by hand, and re-verifies every scheduling rule from scratch.

use itertools::Itertools;
use log::warn;
use timetabling_core::containers::HashMap;
use timetabling_core::containers::HashSet;
use timetabling_core::problem::CourseId;
use timetabling_core::problem::DayId;
use timetabling_core::problem::Problem;
use timetabling_core::problem::RoomId;
use timetabling_core::problem::StudentId;
use timetabling_core::Schedule;

#[cfg(test)]
mod test_utils;

/// The first scheduling rule a schedule was found to break.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleViolation {
    #[error("course {0} is scheduled more than once")]
    DuplicateCourse(CourseId),

    #[error(
        "the scheduled courses do not match the problem (missing: [{}], unexpected: [{}])",
        .missing.iter().join(", "),
        .unexpected.iter().join(", ")
    )]
    IncompleteSchedule {
        /// Courses of the problem which are not scheduled, in problem order.
        missing: Vec<CourseId>,
        /// Scheduled courses which are not part of the problem, in schedule order.
        unexpected: Vec<CourseId>,
    },

    #[error("course {course} is scheduled on unknown day {day}")]
    UnknownDay { course: CourseId, day: DayId },

    #[error("room {room} hosts both {first} and {second} on {day}")]
    RoomDoubleBooked {
        room: RoomId,
        day: DayId,
        first: CourseId,
        second: CourseId,
    },

    #[error("student {student} has exams for both {first} and {second} on {day}")]
    StudentConflict {
        student: StudentId,
        day: DayId,
        first: CourseId,
        second: CourseId,
    },

    #[error("course {course} is scheduled in unknown room {room}")]
    UnknownRoom { course: CourseId, room: RoomId },

    #[error(
        "course {course} has {enrollment} students, but room {room} only seats {capacity}"
    )]
    CapacityExceeded {
        course: CourseId,
        room: RoomId,
        enrollment: u32,
        capacity: u32,
    },
}

/// Verify that `schedule` solves `problem`.
///
/// The rules are checked in a fixed order, and the first violation is returned:
///  1. no course is scheduled twice;
///  2. exactly the courses of the problem are scheduled;
///  3. every exam is on a day of the problem;
///  4. no room hosts two exams on the same day;
///  5. no student has two exams on the same day;
///  6. every room can seat the students of the course held there.
///
/// The check has no side effects, so repeating it gives the same result.
pub fn validate_schedule(schedule: &Schedule, problem: &Problem) -> Result<(), ScheduleViolation> {
    check_unique_courses(schedule)?;
    check_completeness(schedule, problem)?;
    check_days(schedule, problem)?;
    check_room_exclusivity(schedule)?;
    check_student_conflicts(schedule, problem)?;
    check_capacities(schedule, problem)?;

    Ok(())
}

/// The boolean verdict of [`validate_schedule`]. A violation is logged as a warning.
pub fn check_schedule(schedule: &Schedule, problem: &Problem) -> bool {
    match validate_schedule(schedule, problem) {
        Ok(()) => true,
        Err(violation) => {
            warn!("Invalid schedule: {violation}");
            false
        }
    }
}

fn check_unique_courses(schedule: &Schedule) -> Result<(), ScheduleViolation> {
    let mut seen: HashSet<&CourseId> = HashSet::default();

    for exam in schedule {
        if !seen.insert(&exam.course) {
            return Err(ScheduleViolation::DuplicateCourse(exam.course.clone()));
        }
    }

    Ok(())
}

fn check_completeness(schedule: &Schedule, problem: &Problem) -> Result<(), ScheduleViolation> {
    let scheduled: HashSet<&CourseId> = schedule.iter().map(|exam| &exam.course).collect();
    let required: HashSet<&CourseId> = problem.courses().iter().collect();

    let missing = problem
        .courses()
        .iter()
        .filter(|course| !scheduled.contains(course))
        .cloned()
        .collect::<Vec<_>>();
    let unexpected = schedule
        .iter()
        .map(|exam| &exam.course)
        .filter(|course| !required.contains(course))
        .cloned()
        .collect::<Vec<_>>();

    if missing.is_empty() && unexpected.is_empty() {
        Ok(())
    } else {
        Err(ScheduleViolation::IncompleteSchedule {
            missing,
            unexpected,
        })
    }
}

fn check_days(schedule: &Schedule, problem: &Problem) -> Result<(), ScheduleViolation> {
    match schedule.iter().find(|exam| !problem.has_day(&exam.day)) {
        Some(exam) => Err(ScheduleViolation::UnknownDay {
            course: exam.course.clone(),
            day: exam.day.clone(),
        }),
        None => Ok(()),
    }
}

fn check_room_exclusivity(schedule: &Schedule) -> Result<(), ScheduleViolation> {
    let mut occupied: HashMap<(&RoomId, &DayId), &CourseId> = HashMap::default();

    for exam in schedule {
        if let Some(first) = occupied.insert((&exam.room, &exam.day), &exam.course) {
            return Err(ScheduleViolation::RoomDoubleBooked {
                room: exam.room.clone(),
                day: exam.day.clone(),
                first: first.clone(),
                second: exam.course.clone(),
            });
        }
    }

    Ok(())
}

fn check_student_conflicts(schedule: &Schedule, problem: &Problem) -> Result<(), ScheduleViolation> {
    for student in problem.students() {
        let mut exam_days: HashMap<&DayId, &CourseId> = HashMap::default();

        // Enrollments in courses outside the problem have no exam.
        for exam in student
            .courses
            .iter()
            .filter_map(|course| schedule.get(course))
        {
            if let Some(first) = exam_days.insert(&exam.day, &exam.course) {
                return Err(ScheduleViolation::StudentConflict {
                    student: student.id.clone(),
                    day: exam.day.clone(),
                    first: first.clone(),
                    second: exam.course.clone(),
                });
            }
        }
    }

    Ok(())
}

fn check_capacities(schedule: &Schedule, problem: &Problem) -> Result<(), ScheduleViolation> {
    for exam in schedule {
        let Some(room) = problem.room(&exam.room) else {
            return Err(ScheduleViolation::UnknownRoom {
                course: exam.course.clone(),
                room: exam.room.clone(),
            });
        };

        let enrollment = problem.enrollment(&exam.course);
        if enrollment > room.capacity {
            return Err(ScheduleViolation::CapacityExceeded {
                course: exam.course.clone(),
                room: exam.room.clone(),
                enrollment,
                capacity: room.capacity,
            });
        }
    }

    Ok(())
}
