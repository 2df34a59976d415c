//! The boundary towards SAT solvers.

mod dimacs_command;

use std::time::Duration;

pub use dimacs_command::DimacsSolverCommand;
use dimacs_format::SolverOutputError;
use timetabling_core::solution::Model;
use timetabling_core::Formula;

/// The answer of a SAT solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatResult {
    /// The formula has a model, with one literal for every variable the solver knows about.
    Satisfiable(Model),
    Unsatisfiable,
}

/// The reasons a solver can fail to answer.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("failed to start the solver: {0}")]
    Spawn(std::io::Error),

    #[error("failed to communicate with the solver: {0}")]
    Io(#[from] std::io::Error),

    #[error("the solver did not finish within {} ms", .0.as_millis())]
    Timeout(Duration),

    #[error("the solver could not decide the formula")]
    Unknown,

    #[error("failed to read the solver output: {0}")]
    Output(#[from] SolverOutputError),

    #[error("the solver failed with {0}")]
    Failed(std::process::ExitStatus),
}

/// A SAT solver: given a formula, it either finds a model or proves that there is none.
///
/// Solving is a blocking call. Implementations which can take long should offer a way to bound
/// the time they take, as [`DimacsSolverCommand::timeout`] does.
pub trait SatSolver {
    fn solve(&mut self, formula: &Formula) -> Result<SatResult, SolverError>;
}

impl<Solver: SatSolver + ?Sized> SatSolver for &mut Solver {
    fn solve(&mut self, formula: &Formula) -> Result<SatResult, SolverError> {
        (**self).solve(formula)
    }
}
