//! # Timetabling
//! Exam timetabling through SAT.
//!
//! A [`Problem`] lists the exam days, the courses which need an exam, the rooms with their
//! capacities, and the enrollments of the students. [`solve_timetable`] finds a [`Schedule`] in
//! which every course has its exam in exactly one (day, room) slot, such that no room is used
//! twice on a day, no student has two exams on a day, and every room fits its exam.
//!
//! The work is split over three crates which are re-exported here:
//!  - [`timetabling_core`] encodes a problem as a CNF formula and decodes models back into
//!    schedules,
//!  - [`timetabling_checker`] checks any schedule against a problem,
//!  - [`dimacs_format`] writes formulas for, and reads the answers of, external solvers.
//!
//! Any SAT solver can be plugged in through the [`SatSolver`] trait. [`DimacsSolverCommand`] runs
//! a solver executable such as minisat or kissat.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use timetabling::options::EncodingOptions;
//! use timetabling::problem::Room;
//! use timetabling::problem::Student;
//! use timetabling::solve_timetable;
//! use timetabling::DimacsSolverCommand;
//! use timetabling::Problem;
//! use timetabling::TimetableOutcome;
//!
//! let problem = Problem::new(
//!     ["Mon".into(), "Tue".into()],
//!     ["Math".into(), "Art".into()],
//!     [Room::new("A", 30), Room::new("B", 10)],
//!     [Student::new("alice", ["Math", "Art"])],
//! )?;
//!
//! let solver = DimacsSolverCommand::new("kissat").timeout(Duration::from_secs(10));
//!
//! match solve_timetable(&problem, solver, &EncodingOptions::default())? {
//!     TimetableOutcome::Scheduled(schedule) => {
//!         for exam in schedule.iter() {
//!             println!("{exam}");
//!         }
//!     }
//!     TimetableOutcome::Unsatisfiable => println!("no timetable exists"),
//!     TimetableOutcome::InvalidModel { violation, .. } => println!("solver error: {violation}"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod pipeline;
pub mod solver;

pub use dimacs_format;
pub use pipeline::*;
pub use solver::DimacsSolverCommand;
pub use solver::SatResult;
pub use solver::SatSolver;
pub use solver::SolverError;
pub use timetabling_checker;
pub use timetabling_checker::check_schedule;
pub use timetabling_checker::validate_schedule;
pub use timetabling_checker::ScheduleViolation;
pub use timetabling_core;
pub use timetabling_core::encode;
pub use timetabling_core::encoding;
pub use timetabling_core::options;
pub use timetabling_core::problem;
pub use timetabling_core::solution;
pub use timetabling_core::Problem;
pub use timetabling_core::Schedule;
