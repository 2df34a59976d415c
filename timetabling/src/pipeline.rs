use log::info;
use log::warn;
use timetabling_checker::validate_schedule;
use timetabling_checker::ScheduleViolation;
use timetabling_core::encode;
use timetabling_core::options::EncodingOptions;
use timetabling_core::EncodingError;
use timetabling_core::Problem;
use timetabling_core::Schedule;

use crate::solver::SatResult;
use crate::solver::SatSolver;
use crate::solver::SolverError;
use crate::solution::decode_model;

/// The result of [`solve_timetable`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(
    variant_size_differences,
    reason = "an outcome is produced once per problem, its size does not matter"
)]
pub enum TimetableOutcome {
    /// A schedule which passed the checker.
    Scheduled(Schedule),
    /// The problem has no schedule.
    Unsatisfiable,
    /// The solver reported a model, but its schedule breaks a rule. This points at a broken
    /// solver, as every model of the encoding decodes to a valid schedule.
    InvalidModel {
        schedule: Schedule,
        violation: ScheduleViolation,
    },
}

/// The errors that prevent [`solve_timetable`] from reaching an outcome.
#[derive(Debug, thiserror::Error)]
pub enum TimetablingError {
    #[error("failed to encode the problem: {0}")]
    Encoding(#[from] EncodingError),

    #[error("failed to solve the encoding: {0}")]
    Solver(#[from] SolverError),
}

/// Find a schedule for `problem` with `solver`.
///
/// The problem is encoded, solved, decoded, and the resulting schedule is checked before it is
/// returned. A formula which already contains an empty clause is reported as unsatisfiable
/// without running the solver.
pub fn solve_timetable(
    problem: &Problem,
    mut solver: impl SatSolver,
    options: &EncodingOptions,
) -> Result<TimetableOutcome, TimetablingError> {
    let encoding = encode(problem, options)?;

    if encoding.formula().is_trivially_unsatisfiable() {
        info!("The encoding contains an empty clause, skipping the solver");
        return Ok(TimetableOutcome::Unsatisfiable);
    }

    let model = match solver.solve(encoding.formula())? {
        SatResult::Satisfiable(model) => model,
        SatResult::Unsatisfiable => {
            info!("The solver found the encoding unsatisfiable");
            return Ok(TimetableOutcome::Unsatisfiable);
        }
    };

    let schedule = decode_model(&model, encoding.registry());

    match validate_schedule(&schedule, problem) {
        Ok(()) => {
            info!("Found a schedule for {} courses", schedule.len());
            Ok(TimetableOutcome::Scheduled(schedule))
        }
        Err(violation) => {
            warn!("The model of the solver decodes to an invalid schedule: {violation}");
            Ok(TimetableOutcome::InvalidModel {
                schedule,
                violation,
            })
        }
    }
}
