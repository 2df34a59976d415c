use std::fmt::Display;
use std::fmt::Formatter;

use crate::problem::CourseId;
use crate::problem::DayId;
use crate::problem::RoomId;

/// The exam of `course` takes place on `day` in `room`.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledExam {
    pub course: CourseId,
    pub day: DayId,
    pub room: RoomId,
}

impl ScheduledExam {
    pub fn new(
        course: impl Into<CourseId>,
        day: impl Into<DayId>,
        room: impl Into<RoomId>,
    ) -> ScheduledExam {
        ScheduledExam {
            course: course.into(),
            day: day.into(),
            room: room.into(),
        }
    }
}

impl Display for ScheduledExam {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.course, self.day, self.room)
    }
}

/// A candidate timetable: a sequence of exams.
///
/// A schedule is not necessarily valid. It may list a course twice or miss one entirely, which
/// is what decoding a malformed model produces. Use the schedule checker to find out whether it
/// solves a problem.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schedule {
    exams: Vec<ScheduledExam>,
}

impl Schedule {
    pub fn new() -> Schedule {
        Schedule::default()
    }

    pub fn push(&mut self, exam: ScheduledExam) {
        self.exams.push(exam);
    }

    /// The first exam scheduled for `course`.
    pub fn get(&self, course: &CourseId) -> Option<&ScheduledExam> {
        self.exams.iter().find(|exam| &exam.course == course)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledExam> + '_ {
        self.exams.iter()
    }

    pub fn len(&self) -> usize {
        self.exams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exams.is_empty()
    }
}

impl FromIterator<ScheduledExam> for Schedule {
    fn from_iter<T: IntoIterator<Item = ScheduledExam>>(iter: T) -> Self {
        Schedule {
            exams: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduledExam;
    type IntoIter = std::slice::Iter<'a, ScheduledExam>;

    fn into_iter(self) -> Self::IntoIter {
        self.exams.iter()
    }
}

impl IntoIterator for Schedule {
    type Item = ScheduledExam;
    type IntoIter = std::vec::IntoIter<ScheduledExam>;

    fn into_iter(self) -> Self::IntoIter {
        self.exams.into_iter()
    }
}
