//! Shared code of the integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use timetabling::encoding::Formula;
use timetabling::problem::Room;
use timetabling::problem::Student;
use timetabling::solution::Model;
use timetabling::Problem;
use timetabling::SatResult;
use timetabling::SatSolver;
use timetabling::SolverError;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A plain DPLL solver with unit propagation, enough for the small formulas of the tests.
#[derive(Debug, Default)]
pub(crate) struct Dpll {
    pub(crate) calls: usize,
}

impl SatSolver for Dpll {
    fn solve(&mut self, formula: &Formula) -> Result<SatResult, SolverError> {
        self.calls += 1;

        let clauses = formula.to_dimacs();
        let mut assignment = vec![None; formula.num_variables() + 1];

        if !search(&clauses, &mut assignment) {
            return Ok(SatResult::Unsatisfiable);
        }

        let model = Model::from_dimacs((1..assignment.len()).map(|variable| {
            let code = i32::try_from(variable).expect("small formula");
            if assignment[variable] == Some(true) {
                code
            } else {
                -code
            }
        }));

        Ok(SatResult::Satisfiable(model))
    }
}

fn search(clauses: &[Vec<i32>], assignment: &mut [Option<bool>]) -> bool {
    let mut propagated = vec![];

    loop {
        let mut changed = false;

        for clause in clauses {
            let mut satisfied = false;
            let mut unassigned = vec![];

            for &literal in clause {
                match assignment[literal.unsigned_abs() as usize] {
                    Some(value) if value == (literal > 0) => {
                        satisfied = true;
                        break;
                    }
                    Some(_) => {}
                    None => unassigned.push(literal),
                }
            }

            if satisfied {
                continue;
            }

            match unassigned.as_slice() {
                [] => {
                    undo(&propagated, assignment);
                    return false;
                }
                [unit] => {
                    let variable = unit.unsigned_abs() as usize;
                    assignment[variable] = Some(*unit > 0);
                    propagated.push(variable);
                    changed = true;
                }
                _ => {}
            }
        }

        if !changed {
            break;
        }
    }

    let Some(variable) = (1..assignment.len()).find(|&variable| assignment[variable].is_none())
    else {
        return true;
    };

    for value in [true, false] {
        assignment[variable] = Some(value);
        if search(clauses, assignment) {
            return true;
        }
    }

    assignment[variable] = None;
    undo(&propagated, assignment);
    false
}

fn undo(variables: &[usize], assignment: &mut [Option<bool>]) {
    for &variable in variables {
        assignment[variable] = None;
    }
}

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

/// `count` students named `{prefix}0`, `{prefix}1`, ... enrolled in `courses`.
pub(crate) fn cohort(prefix: &str, courses: &[&str], count: usize) -> Vec<Student> {
    (0..count)
        .map(|index| Student::new(format!("{prefix}{index}"), courses.iter().copied()))
        .collect()
}
