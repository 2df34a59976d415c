use itertools::Itertools;
use log::trace;
use log::warn;

use super::Clause;
use super::EncodingError;
use super::EncodingStatistics;
use super::Formula;
use super::Variable;
use super::VariableRegistry;
use crate::containers::HashSet;
use crate::options::EncodingOptions;
use crate::options::InfeasibleCoursePolicy;
use crate::problem::Problem;

/// Translates the scheduling constraints of a [`Problem`] into clauses over the variables of a
/// [`VariableRegistry`].
///
/// The encoding consists of three families:
///  1. every course is placed exactly once: one at-least-one clause over all its variables, plus
///     a binary at-most-one clause for every pair of them;
///  2. a room hosts at most one exam per day: a binary clause for every pair of variables sharing
///     a (day, room);
///  3. a student sits at most one exam per day: a binary clause for every pair of variables of
///     two of their courses on the same day, regardless of the rooms.
///
/// Room capacities need no clauses, as the registry only contains feasible placements.
pub(crate) struct ScheduleEncoder<'a> {
    problem: &'a Problem,
    registry: &'a VariableRegistry,
    options: EncodingOptions,
    formula: Formula,
    statistics: EncodingStatistics,
    /// The student conflicts which have been emitted, as (smallest, largest) variable pairs. Only
    /// filled when conflict clauses are deduplicated.
    emitted_conflicts: HashSet<(Variable, Variable)>,
}

impl<'a> ScheduleEncoder<'a> {
    pub(crate) fn new(
        problem: &'a Problem,
        registry: &'a VariableRegistry,
        options: EncodingOptions,
    ) -> ScheduleEncoder<'a> {
        ScheduleEncoder {
            problem,
            registry,
            options,
            formula: Formula::new(registry.num_variables()),
            statistics: EncodingStatistics {
                num_variables: registry.num_variables(),
                ..Default::default()
            },
            emitted_conflicts: HashSet::default(),
        }
    }

    /// Family 1. For `k` variables of a course this adds `1 + k(k-1)/2` clauses.
    pub(crate) fn encode_exactly_one_placement(&mut self) -> Result<(), EncodingError> {
        for course in self.problem.courses() {
            let variables = self.registry.variables_for_course(course);

            if variables.is_empty() {
                let enrollment = self.problem.enrollment(course);

                match self.options.infeasible_courses {
                    InfeasibleCoursePolicy::Reject => {
                        return Err(EncodingError::InfeasibleCourse {
                            course: course.clone(),
                            enrollment,
                        });
                    }
                    InfeasibleCoursePolicy::EmptyClause => {
                        warn!(
                            "No room can seat the {enrollment} students of course {course}, \
                             the formula is unsatisfiable"
                        );
                        self.statistics.infeasible_courses += 1;
                    }
                }
            }

            self.formula.add_clause(Clause::new(
                variables.iter().map(|variable| variable.positive()),
            ));
            self.statistics.exactly_one_clauses += 1;

            for (&first, &second) in variables.iter().tuple_combinations() {
                self.formula
                    .add_clause(Clause::not_both(first.positive(), second.positive()));
                self.statistics.exactly_one_clauses += 1;
            }
        }

        Ok(())
    }

    /// Family 2. For `m` variables sharing a (day, room) this adds `m(m-1)/2` clauses.
    pub(crate) fn encode_room_exclusivity(&mut self) {
        for day in self.problem.days() {
            for room in self.problem.rooms() {
                let variables = self.registry.variables_for_room_on_day(day, &room.id);

                for (&first, &second) in variables.iter().tuple_combinations() {
                    self.formula
                        .add_clause(Clause::not_both(first.positive(), second.positive()));
                    self.statistics.room_exclusivity_clauses += 1;
                }
            }
        }
    }

    /// Family 3. For every student, every pair of their courses and every day, this adds one
    /// clause per pair of variables of the two courses on that day.
    ///
    /// Students sharing a pair of courses produce the same clauses; those are only skipped when
    /// [`EncodingOptions::deduplicate_conflict_clauses`] is set.
    pub(crate) fn encode_student_conflicts(&mut self) {
        for student in self.problem.students() {
            for (first_course, second_course) in student.courses.iter().tuple_combinations() {
                trace!(
                    "Encoding conflicts of student {} between {first_course} and {second_course}",
                    student.id
                );

                for day in self.problem.days() {
                    let first_variables =
                        self.registry.variables_for_course_on_day(first_course, day);
                    let second_variables =
                        self.registry.variables_for_course_on_day(second_course, day);

                    for &first in first_variables {
                        for &second in second_variables {
                            self.add_conflict(first, second);
                        }
                    }
                }
            }
        }
    }

    fn add_conflict(&mut self, first: Variable, second: Variable) {
        if self.options.deduplicate_conflict_clauses {
            let key = (first.min(second), first.max(second));

            if !self.emitted_conflicts.insert(key) {
                self.statistics.skipped_duplicate_clauses += 1;
                return;
            }
        }

        self.formula
            .add_clause(Clause::not_both(first.positive(), second.positive()));
        self.statistics.student_conflict_clauses += 1;
    }

    pub(crate) fn finish(self) -> (Formula, EncodingStatistics) {
        (self.formula, self.statistics)
    }
}
