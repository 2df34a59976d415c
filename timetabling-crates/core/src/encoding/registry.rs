use log::debug;

use super::Literal;
use super::Variable;
use crate::containers::HashMap;
use crate::problem::CourseId;
use crate::problem::DayId;
use crate::problem::Problem;
use crate::problem::RoomId;
use crate::timetabling_assert_moderate;
use crate::timetabling_assert_simple;

/// The meaning of a variable: `course` has its exam on `day` in `room`.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Placement {
    pub course: CourseId,
    pub day: DayId,
    pub room: RoomId,
}

/// The bijection between variables and feasible placements, together with the indexes the
/// encoder needs.
///
/// A placement is feasible if the room can seat every student enrolled in the course. Only
/// feasible placements get a variable, so a model can never put a course in a room that is too
/// small.
///
/// Variables are created by [`VariableRegistry::build`] with the courses as the outer loop, then
/// the days, then the rooms, each in the order of the [`Problem`]. The first feasible placement
/// is variable 1, and every next one gets the next number. Test fixtures rely on this order.
///
/// The registry is never mutated after it is built.
#[derive(Clone, Debug, Default)]
pub struct VariableRegistry {
    /// The placement of every variable, indexed by [`Variable::index`].
    placements: Vec<Placement>,
    by_course: HashMap<CourseId, Vec<Variable>>,
    by_course_day: HashMap<(CourseId, DayId), Vec<Variable>>,
    by_day_room: HashMap<(DayId, RoomId), Vec<Variable>>,
}

impl VariableRegistry {
    /// Create a variable for every feasible placement of `problem`.
    pub fn build(problem: &Problem) -> VariableRegistry {
        let mut registry = VariableRegistry::default();

        for course in problem.courses() {
            let enrollment = problem.enrollment(course);
            let _ = registry.by_course.entry(course.clone()).or_default();

            for day in problem.days() {
                for room in problem.rooms() {
                    if room.capacity >= enrollment {
                        let _ = registry.register(Placement {
                            course: course.clone(),
                            day: day.clone(),
                            room: room.id.clone(),
                        });
                    }
                }
            }
        }

        debug!(
            "Registered {} variables for {} courses, {} days and {} rooms",
            registry.num_variables(),
            problem.courses().len(),
            problem.days().len(),
            problem.rooms().len()
        );

        registry
    }

    /// Give `placement` the next variable.
    ///
    /// Registering the same placement twice corrupts the registry; [`Problem`] rules this out by
    /// rejecting duplicate days, courses and rooms.
    fn register(&mut self, placement: Placement) -> Variable {
        timetabling_assert_moderate!(
            !self.placements.contains(&placement),
            "placement {placement:?} is registered twice"
        );

        let number = u32::try_from(self.placements.len() + 1).ok();
        let variable = number
            .and_then(Variable::new)
            .expect("the number of placements exceeds the DIMACS variable range");
        timetabling_assert_simple!(variable.index() == self.placements.len());

        self.by_course
            .entry(placement.course.clone())
            .or_default()
            .push(variable);
        self.by_course_day
            .entry((placement.course.clone(), placement.day.clone()))
            .or_default()
            .push(variable);
        self.by_day_room
            .entry((placement.day.clone(), placement.room.clone()))
            .or_default()
            .push(variable);

        self.placements.push(placement);

        variable
    }

    /// The number of variables, which is also the largest variable number.
    pub fn num_variables(&self) -> usize {
        self.placements.len()
    }

    /// The placement a variable stands for, or `None` if the variable is unknown.
    pub fn placement(&self, variable: Variable) -> Option<&Placement> {
        self.placements.get(variable.index())
    }

    /// The placement the variable of `literal` stands for, regardless of its polarity.
    pub fn placement_of(&self, literal: Literal) -> Option<&Placement> {
        self.placement(literal.variable())
    }

    /// All variables of `course`, over every day and room.
    pub fn variables_for_course(&self, course: &CourseId) -> &[Variable] {
        self.by_course.get(course).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The variables of `course` on `day`, over every room.
    pub fn variables_for_course_on_day(&self, course: &CourseId, day: &DayId) -> &[Variable] {
        self.by_course_day
            .get(&(course.clone(), day.clone()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The variables of every course which could be held in `room` on `day`.
    pub fn variables_for_room_on_day(&self, day: &DayId, room: &RoomId) -> &[Variable] {
        self.by_day_room
            .get(&(day.clone(), room.clone()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over all variables in increasing order, together with their placement.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &Placement)> + '_ {
        self.placements.iter().enumerate().map(|(index, placement)| {
            let variable = u32::try_from(index + 1)
                .ok()
                .and_then(Variable::new)
                .expect("registered variables are in range");
            (variable, placement)
        })
    }
}
