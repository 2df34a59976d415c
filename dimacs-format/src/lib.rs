//! This crate contains the plain-text formats used to talk to off-the-shelf SAT solvers: the
//! DIMACS CNF format for formulas, and the SAT competition output format for their answers.
//!
//! To write DIMACS files see [`writer::DimacsWriter`]. Solver answers can be read with
//! [`parse_solver_output`].
//!
//! The crate is deliberately independent of any particular clause representation; literals are
//! exchanged as [`std::num::NonZeroI32`] DIMACS codes.

mod solver_output;

pub mod writer;

pub use solver_output::*;
