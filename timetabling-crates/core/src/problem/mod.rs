//! The input data of an exam timetabling problem.
//!
//! A [`Problem`] is validated once on construction; every other part of the crate relies on its
//! days, courses and rooms being free of duplicates.

mod identifiers;

pub use identifiers::*;
use log::debug;

use crate::containers::HashMap;
use crate::containers::HashSet;

/// A room in which exams can be held.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id: RoomId,
    /// The maximum number of students that can sit an exam in this room simultaneously.
    pub capacity: u32,
}

impl Room {
    pub fn new(id: impl Into<RoomId>, capacity: u32) -> Self {
        Room {
            id: id.into(),
            capacity,
        }
    }
}

/// A student together with the courses they are enrolled in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    pub id: StudentId,
    pub courses: Vec<CourseId>,
}

impl Student {
    pub fn new<Course: Into<CourseId>>(
        id: impl Into<StudentId>,
        courses: impl IntoIterator<Item = Course>,
    ) -> Self {
        Student {
            id: id.into(),
            courses: courses.into_iter().map(Into::into).collect(),
        }
    }
}

/// The reasons a [`Problem`] can be rejected.
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    #[error("day {0} is listed more than once")]
    DuplicateDay(DayId),

    #[error("course {0} is listed more than once")]
    DuplicateCourse(CourseId),

    #[error("room {0} is listed more than once")]
    DuplicateRoom(RoomId),

    #[error("student {0} is listed more than once")]
    DuplicateStudent(StudentId),

    #[error("student {student} is enrolled in course {course} more than once")]
    DuplicateEnrollment { student: StudentId, course: CourseId },
}

/// An exam timetabling problem: every course has to be given exactly one (day, room) slot.
#[derive(Clone, Debug)]
pub struct Problem {
    days: Vec<DayId>,
    courses: Vec<CourseId>,
    rooms: Vec<Room>,
    students: Vec<Student>,
    /// The number of students enrolled in each course of `courses`.
    enrollment: HashMap<CourseId, u32>,
}

impl Problem {
    /// Create a new problem.
    ///
    /// The order of `days`, `courses` and `rooms` determines the numbering of the encoding
    /// variables. Enrollments in courses which are not listed in `courses` are kept, but they do
    /// not count towards any enrollment.
    pub fn new(
        days: impl IntoIterator<Item = DayId>,
        courses: impl IntoIterator<Item = CourseId>,
        rooms: impl IntoIterator<Item = Room>,
        students: impl IntoIterator<Item = Student>,
    ) -> Result<Problem, ProblemError> {
        let days = collect_unique(days, |day| day, ProblemError::DuplicateDay)?;
        let courses = collect_unique(courses, |course| course, ProblemError::DuplicateCourse)?;
        let rooms = collect_unique(rooms, |room| &room.id, |room| {
            ProblemError::DuplicateRoom(room.id)
        })?;
        let students = collect_unique(students, |student| &student.id, |student| {
            ProblemError::DuplicateStudent(student.id)
        })?;

        let mut enrollment: HashMap<CourseId, u32> =
            courses.iter().map(|course| (course.clone(), 0)).collect();

        for student in students.iter() {
            let mut seen: HashSet<&CourseId> = HashSet::default();

            for course in student.courses.iter() {
                if !seen.insert(course) {
                    return Err(ProblemError::DuplicateEnrollment {
                        student: student.id.clone(),
                        course: course.clone(),
                    });
                }

                match enrollment.get_mut(course) {
                    Some(count) => *count += 1,
                    None => debug!(
                        "Student {} is enrolled in unknown course {course}, ignoring it",
                        student.id
                    ),
                }
            }
        }

        Ok(Problem {
            days,
            courses,
            rooms,
            students,
            enrollment,
        })
    }

    pub fn days(&self) -> &[DayId] {
        &self.days
    }

    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn has_day(&self, day: &DayId) -> bool {
        self.days.contains(day)
    }

    /// Get the room with the given id, if it is part of the problem.
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| &room.id == id)
    }

    /// The number of students enrolled in `course`. Zero for courses that are not part of the
    /// problem.
    pub fn enrollment(&self, course: &CourseId) -> u32 {
        self.enrollment.get(course).copied().unwrap_or(0)
    }
}

/// Collect `items` into a vector, failing on the first item whose key was already seen.
fn collect_unique<Item, Key: std::hash::Hash + Eq + Clone>(
    items: impl IntoIterator<Item = Item>,
    key: impl Fn(&Item) -> &Key,
    duplicate: impl FnOnce(Item) -> ProblemError,
) -> Result<Vec<Item>, ProblemError> {
    let mut seen: HashSet<Key> = HashSet::default();
    let mut collected = Vec::new();

    for item in items {
        if !seen.insert(key(&item).clone()) {
            return Err(duplicate(item));
        }

        collected.push(item);
    }

    Ok(collected)
}
