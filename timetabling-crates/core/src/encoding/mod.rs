//! Encoding of an exam timetabling [`Problem`] as a CNF formula.
//!
//! The entry point is [`encode`], which numbers the feasible placements in a
//! [`VariableRegistry`] and builds the [`Formula`] over them. The registry is needed again to
//! turn a model of the formula back into a schedule, see
//! [`decode_model`](crate::solution::decode_model).

mod encoder;
mod formula;
mod registry;
mod statistics;
mod variables;

use std::time::Instant;

pub use formula::*;
use log::debug;
pub use registry::*;
pub use statistics::*;
pub use variables::*;

use self::encoder::ScheduleEncoder;
use crate::options::EncodingOptions;
use crate::problem::CourseId;
use crate::problem::Problem;

/// The errors that can be encountered by [`encode`].
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("no room can seat the {enrollment} students of course {course}")]
    InfeasibleCourse { course: CourseId, enrollment: u32 },
}

/// The result of encoding a problem. The registry and formula belong together: the variables of
/// the formula are only meaningful through the registry that numbered them.
#[derive(Clone, Debug)]
pub struct Encoding {
    registry: VariableRegistry,
    formula: Formula,
    statistics: EncodingStatistics,
}

impl Encoding {
    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn statistics(&self) -> EncodingStatistics {
        self.statistics
    }
}

/// Encode `problem` as a formula which is satisfiable if and only if the problem has a schedule.
///
/// Courses for which no room is large enough are handled according to
/// [`EncodingOptions::infeasible_courses`]; they are never left out.
pub fn encode(problem: &Problem, options: &EncodingOptions) -> Result<Encoding, EncodingError> {
    let time_start = Instant::now();

    let registry = VariableRegistry::build(problem);

    let mut encoder = ScheduleEncoder::new(problem, &registry, *options);
    encoder.encode_exactly_one_placement()?;
    encoder.encode_room_exclusivity();
    encoder.encode_student_conflicts();
    let (formula, statistics) = encoder.finish();

    debug!(
        "Encoding took {} ms: {statistics}",
        time_start.elapsed().as_millis()
    );
    statistics.log();

    Ok(Encoding {
        registry,
        formula,
        statistics,
    })
}
