use std::ffi::OsString;
use std::io::Read;
use std::io::Write;
use std::num::NonZeroI32;
use std::path::PathBuf;
use std::process::Child;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use dimacs_format::parse_solver_output;
use dimacs_format::SolverOutput;
use dimacs_format::SolverOutputError;
use log::debug;
use timetabling_core::solution::Model;
use timetabling_core::Formula;
use wait_timeout::ChildExt;

use super::SatResult;
use super::SatSolver;
use super::SolverError;

/// Runs an external SAT solver which reads a DIMACS CNF formula from its standard input and
/// reports in the SAT competition format on its standard output, such as minisat, kissat or
/// cadical.
///
/// The exit code of the solver is only looked at when its output cannot be understood, since
/// solvers conventionally exit with 10 or 20 after a successful run.
#[derive(Clone, Debug)]
pub struct DimacsSolverCommand {
    program: PathBuf,
    args: Vec<OsString>,
    timeout: Option<Duration>,
}

impl DimacsSolverCommand {
    pub fn new(program: impl Into<PathBuf>) -> DimacsSolverCommand {
        DimacsSolverCommand {
            program: program.into(),
            args: vec![],
            timeout: None,
        }
    }

    /// Pass an extra command line argument to the solver.
    pub fn arg(mut self, arg: impl Into<OsString>) -> DimacsSolverCommand {
        self.args.push(arg.into());
        self
    }

    /// Kill the solver if it has not finished after `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> DimacsSolverCommand {
        self.timeout = Some(timeout);
        self
    }

    fn spawn(&self) -> Result<Child, SolverError> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(SolverError::Spawn)
    }

    fn wait(&self, child: &mut Child) -> Result<ExitStatus, SolverError> {
        let Some(timeout) = self.timeout else {
            return Ok(child.wait()?);
        };

        match child.wait_timeout(timeout)? {
            Some(status) => Ok(status),
            None => {
                child.kill()?;
                let _ = child.wait()?;
                Err(SolverError::Timeout(timeout))
            }
        }
    }
}

impl SatSolver for DimacsSolverCommand {
    fn solve(&mut self, formula: &Formula) -> Result<SatResult, SolverError> {
        let mut input = Vec::new();
        formula.write_dimacs(&mut input, Some("exam timetable"))?;

        let time_start = Instant::now();
        let mut child = self.spawn()?;

        // Both pipes are served by their own thread, so the timeout runs even while a solver
        // refuses to read its input. After a timeout the threads are left to finish on their own
        // once the killed solver's pipes close.
        let stdin = child.stdin.take();
        let input_writer = thread::spawn(move || -> std::io::Result<()> {
            if let Some(mut stdin) = stdin {
                stdin.write_all(&input)?;
            }
            Ok(())
        });

        let stdout = child.stdout.take();
        let output_reader = thread::spawn(move || -> std::io::Result<Vec<u8>> {
            let mut output = Vec::new();
            if let Some(mut stdout) = stdout {
                let _ = stdout.read_to_end(&mut output)?;
            }
            Ok(output)
        });

        let status = self.wait(&mut child)?;
        let output = output_reader
            .join()
            .map_err(|_| std::io::Error::other("the output reader panicked"))??;
        let written = input_writer
            .join()
            .map_err(|_| std::io::Error::other("the input writer panicked"))?;

        debug!(
            "Solver {} finished with {status} after {} ms",
            self.program.display(),
            time_start.elapsed().as_millis()
        );

        let parsed = match parse_solver_output(output.as_slice()) {
            Ok(parsed) => parsed,
            // Without a status line, a failure to pass the formula explains more than the output.
            Err(SolverOutputError::MissingStatus) => {
                written?;
                return Err(SolverError::Failed(status));
            }
            Err(error) => return Err(error.into()),
        };

        match parsed {
            SolverOutput::Satisfiable(literals) => Ok(SatResult::Satisfiable(Model::from_dimacs(
                literals.into_iter().map(NonZeroI32::get),
            ))),
            SolverOutput::Unsatisfiable => Ok(SatResult::Unsatisfiable),
            SolverOutput::Unknown => Err(SolverError::Unknown),
        }
    }
}
