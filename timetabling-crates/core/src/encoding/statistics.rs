use std::fmt::Display;
use std::fmt::Formatter;

use log::debug;

/// Counts gathered while encoding a problem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodingStatistics {
    pub num_variables: usize,
    /// Clauses forcing every course into exactly one placement, including the empty clauses of
    /// infeasible courses.
    pub exactly_one_clauses: usize,
    /// Clauses forbidding two exams in the same room on the same day.
    pub room_exclusivity_clauses: usize,
    /// Clauses forbidding a student two exams on the same day.
    pub student_conflict_clauses: usize,
    /// Student conflict clauses which were skipped because they were already emitted.
    pub skipped_duplicate_clauses: usize,
    /// Courses without a single feasible placement.
    pub infeasible_courses: usize,
}

impl EncodingStatistics {
    pub fn num_clauses(&self) -> usize {
        self.exactly_one_clauses + self.room_exclusivity_clauses + self.student_conflict_clauses
    }

    pub(crate) fn log(&self) {
        debug!("encoding statistic numVariables={}", self.num_variables);
        debug!("encoding statistic numExactlyOneClauses={}", self.exactly_one_clauses);
        debug!(
            "encoding statistic numRoomExclusivityClauses={}",
            self.room_exclusivity_clauses
        );
        debug!(
            "encoding statistic numStudentConflictClauses={}",
            self.student_conflict_clauses
        );
        debug!(
            "encoding statistic numSkippedDuplicateClauses={}",
            self.skipped_duplicate_clauses
        );
        debug!("encoding statistic numInfeasibleCourses={}", self.infeasible_courses);
    }
}

impl Display for EncodingStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} variables, {} clauses ({} exactly-one, {} room, {} student)",
            self.num_variables,
            self.num_clauses(),
            self.exactly_one_clauses,
            self.room_exclusivity_clauses,
            self.student_conflict_clauses
        )
    }
}
