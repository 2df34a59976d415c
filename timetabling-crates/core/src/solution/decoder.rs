use log::trace;

use super::Model;
use super::Schedule;
use super::ScheduledExam;
use crate::encoding::VariableRegistry;

/// Project the true literals of `model` onto the placements they stand for, in model order.
///
/// Negative literals and variables unknown to `registry` are skipped. The decoder does not check
/// that every course ends up exactly once in the schedule: a model which sets two variables of a
/// course yields a schedule listing that course twice.
pub fn decode_model(model: &Model, registry: &VariableRegistry) -> Schedule {
    let mut schedule = Schedule::new();

    for &literal in model.literals() {
        if !literal.is_positive() {
            continue;
        }

        match registry.placement_of(literal) {
            Some(placement) => schedule.push(ScheduledExam {
                course: placement.course.clone(),
                day: placement.day.clone(),
                room: placement.room.clone(),
            }),
            None => trace!("Ignoring unknown variable {} in model", literal.variable()),
        }
    }

    schedule
}
