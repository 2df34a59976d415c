//! Builders for the problems used throughout the unit tests.

use crate::encoding::Formula;
use crate::encoding::Variable;
use crate::problem::Problem;
use crate::problem::Room;
use crate::problem::Student;
use crate::solution::Model;

/// Build a problem from plain names. Panics if the problem is rejected.
pub(crate) fn problem(
    days: &[&str],
    courses: &[&str],
    rooms: &[(&str, u32)],
    students: &[(&str, &[&str])],
) -> Problem {
    problem_with_students(
        days,
        courses,
        rooms,
        students
            .iter()
            .map(|&(id, courses)| Student::new(id, courses.iter().copied()))
            .collect(),
    )
}

pub(crate) fn problem_with_students(
    days: &[&str],
    courses: &[&str],
    rooms: &[(&str, u32)],
    students: Vec<Student>,
) -> Problem {
    Problem::new(
        days.iter().map(|&day| day.into()),
        courses.iter().map(|&course| course.into()),
        rooms.iter().map(|&(id, capacity)| Room::new(id, capacity)),
        students,
    )
    .expect("valid test problem")
}

/// `count` students named `{prefix}0`, `{prefix}1`, ... which are only enrolled in `course`.
pub(crate) fn enrolled(prefix: &str, course: &str, count: usize) -> Vec<Student> {
    (0..count)
        .map(|index| Student::new(format!("{prefix}{index}"), [course]))
        .collect()
}

/// Two days (Mon, Tue), two rooms (A with capacity 30, B with capacity 10), and the courses Math
/// with 25 students and Art with 5 students. No student takes both courses.
pub(crate) fn math_and_art() -> Problem {
    let mut students = enrolled("m", "Math", 25);
    students.extend(enrolled("a", "Art", 5));

    problem_with_students(
        &["Mon", "Tue"],
        &["Math", "Art"],
        &[("A", 30), ("B", 10)],
        students,
    )
}

pub(crate) fn variables(numbers: &[u32]) -> Vec<Variable> {
    numbers
        .iter()
        .map(|&number| Variable::new(number).expect("valid variable number"))
        .collect()
}

/// Every total assignment satisfying `formula`, by exhaustive enumeration.
pub(crate) fn satisfying_models(formula: &Formula) -> Vec<Model> {
    let num_variables = formula.num_variables();
    assert!(
        num_variables <= 20,
        "too many variables to enumerate: {num_variables}"
    );

    (0..1_u32 << num_variables)
        .map(|assignment| {
            Model::from_dimacs((0..num_variables).map(|index| {
                let code = index as i32 + 1;
                if assignment & (1 << index) != 0 {
                    code
                } else {
                    -code
                }
            }))
        })
        .filter(|model| formula.is_satisfied_by(model))
        .collect()
}
