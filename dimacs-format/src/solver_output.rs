use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::num::NonZeroI32;

use log::trace;

/// The answer of a SAT solver, as reported in its output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverOutput {
    /// The formula is satisfiable. Contains the reported assignment as DIMACS literals, in the
    /// order the solver printed them.
    Satisfiable(Vec<NonZeroI32>),
    /// The formula is unsatisfiable.
    Unsatisfiable,
    /// The solver gave up without an answer.
    Unknown,
}

/// The errors that can be encountered by [`parse_solver_output`].
#[derive(Debug, thiserror::Error)]
pub enum SolverOutputError {
    #[error("failed to read solver output: {0}")]
    Io(#[from] std::io::Error),

    #[error("the solver output contains no status line")]
    MissingStatus,

    #[error("'{0}' is not a known solver status")]
    UnknownStatus(String),

    #[error("the solver output contains more than one status line")]
    DuplicateStatus,

    #[error("'{0}' is an invalid value in the solver output")]
    InvalidValue(String),

    #[error("the solver reported values without reporting the formula as satisfiable")]
    UnexpectedValues,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Satisfiable,
    Unsatisfiable,
    Unknown,
}

/// Parse the output of a SAT solver.
///
/// Two layouts are understood:
///  - the SAT competition layout, with `c` comment lines, one `s <STATUS>` line and any number of
///    `v <literals>` lines, the last of which is terminated by `0`;
///  - the result-file layout of MiniSat-like solvers, with a bare `SAT`, `UNSAT` or `INDET` line
///    followed by a bare line of literals terminated by `0`.
///
/// Literals after the terminating `0` are ignored.
pub fn parse_solver_output(source: impl Read) -> Result<SolverOutput, SolverOutputError> {
    let reader = BufReader::new(source);

    let mut status = None;
    let mut values = Vec::new();
    let mut values_terminated = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        let (status_text, value_text) = if line.is_empty() || line.starts_with('c') {
            continue;
        } else if let Some(rest) = line.strip_prefix("s ") {
            (Some(rest.trim()), None)
        } else if let Some(rest) = line.strip_prefix('v') {
            (None, Some(rest))
        } else if line.starts_with(|c: char| c.is_ascii_alphabetic()) {
            (Some(line), None)
        } else {
            (None, Some(line))
        };

        if let Some(text) = status_text {
            if status.is_some() {
                return Err(SolverOutputError::DuplicateStatus);
            }

            status = Some(parse_status(text)?);
        }

        if let Some(text) = value_text {
            if values_terminated {
                continue;
            }

            for code in text.split_whitespace() {
                let code = code
                    .parse::<i32>()
                    .map_err(|_| SolverOutputError::InvalidValue(code.to_owned()))?;

                match NonZeroI32::new(code) {
                    Some(literal) => values.push(literal),
                    None => {
                        values_terminated = true;
                        break;
                    }
                }
            }
        }
    }

    trace!("Solver reported status {status:?} with {} values", values.len());

    match status {
        None => Err(SolverOutputError::MissingStatus),
        Some(Status::Satisfiable) => Ok(SolverOutput::Satisfiable(values)),
        Some(_) if !values.is_empty() => Err(SolverOutputError::UnexpectedValues),
        Some(Status::Unsatisfiable) => Ok(SolverOutput::Unsatisfiable),
        Some(Status::Unknown) => Ok(SolverOutput::Unknown),
    }
}

fn parse_status(text: &str) -> Result<Status, SolverOutputError> {
    match text {
        "SATISFIABLE" | "SAT" => Ok(Status::Satisfiable),
        "UNSATISFIABLE" | "UNSAT" => Ok(Status::Unsatisfiable),
        "UNKNOWN" | "INDET" | "INDETERMINATE" => Ok(Status::Unknown),
        other => Err(SolverOutputError::UnknownStatus(other.to_owned())),
    }
}
