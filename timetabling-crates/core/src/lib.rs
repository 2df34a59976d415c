//! # Timetabling core
//! The core of a SAT-based exam timetabler.
//!
//! An exam timetabling [`Problem`] asks for a (day, room) slot for the exam of every course,
//! such that
//!  - no room hosts two exams on the same day,
//!  - no student has two exams on the same day,
//!  - every room can seat all students enrolled in the course held there.
//!
//! [`encode`] translates a problem into a CNF [`Formula`], which is satisfiable exactly when the
//! problem has a schedule. A model of the formula found by any SAT solver is turned back into a
//! [`Schedule`] by [`decode_model`].
//!
//! ```
//! use timetabling_core::encode;
//! use timetabling_core::decode_model;
//! use timetabling_core::options::EncodingOptions;
//! use timetabling_core::problem::Problem;
//! use timetabling_core::problem::Room;
//! use timetabling_core::problem::Student;
//! use timetabling_core::solution::Model;
//!
//! let problem = Problem::new(
//!     ["Mon".into()],
//!     ["Math".into()],
//!     [Room::new("A", 30)],
//!     [Student::new("alice", ["Math"])],
//! )?;
//!
//! let encoding = encode(&problem, &EncodingOptions::default())?;
//! assert_eq!(vec![vec![1]], encoding.formula().to_dimacs());
//!
//! let schedule = decode_model(&Model::from_dimacs([1]), encoding.registry());
//! assert_eq!("A", schedule.get(&"Math".into()).unwrap().room.as_str());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[doc(hidden)]
pub mod asserts;
pub mod containers;
pub mod encoding;
pub mod options;
pub mod problem;
pub mod solution;
#[cfg(test)]
mod test_utils;

pub use encoding::encode;
pub use encoding::Encoding;
pub use encoding::EncodingError;
pub use encoding::Formula;
pub use problem::Problem;
pub use solution::decode_model;
pub use solution::Schedule;
