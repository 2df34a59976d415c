#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::cohort;
use helpers::init_logging;
use helpers::problem;
use helpers::Dpll;
use timetabling::check_schedule;
use timetabling::encode;
use timetabling::options::EncodingOptions;
use timetabling::problem::Room;
use timetabling::solution::decode_model;
use timetabling::solve_timetable;
use timetabling::Problem;
use timetabling::SatResult;
use timetabling::SatSolver;
use timetabling::TimetableOutcome;

fn assert_scheduled(problem: &Problem, options: &EncodingOptions) {
    let mut solver = Dpll::default();

    match solve_timetable(problem, &mut solver, options).expect("no errors") {
        TimetableOutcome::Scheduled(schedule) => {
            assert_eq!(problem.courses().len(), schedule.len());
            assert!(check_schedule(&schedule, problem));
        }
        other => panic!("expected a schedule, got {other:?}"),
    }

    assert_eq!(1, solver.calls);
}

fn university() -> Problem {
    let students = cohort("cs", &["Algorithms", "Databases", "Logic"], 18)
        .into_iter()
        .chain(cohort("math", &["Analysis", "Algebra", "Logic"], 12))
        .chain(cohort("phil", &["Logic", "Ethics"], 6))
        .chain(cohort("dual", &["Algebra", "Algorithms"], 3));

    Problem::new(
        ["Mon".into(), "Tue".into(), "Wed".into(), "Thu".into()],
        [
            "Algorithms".into(),
            "Databases".into(),
            "Logic".into(),
            "Analysis".into(),
            "Algebra".into(),
            "Ethics".into(),
        ],
        [
            Room::new("Aula", 40),
            Room::new("Seminar", 16),
            Room::new("Office", 6),
        ],
        students,
    )
    .expect("valid problem")
}

#[test]
fn math_and_art_round_trip() {
    init_logging();

    let mut students = cohort("m", &["Math"], 25);
    students.extend(cohort("a", &["Art"], 5));
    let problem = Problem::new(
        ["Mon".into(), "Tue".into()],
        ["Math".into(), "Art".into()],
        [Room::new("A", 30), Room::new("B", 10)],
        students,
    )
    .expect("valid problem");

    assert_scheduled(&problem, &EncodingOptions::default());
}

#[test]
fn university_round_trip() {
    init_logging();

    assert_scheduled(&university(), &EncodingOptions::default());
    assert_scheduled(
        &university(),
        &EncodingOptions {
            deduplicate_conflict_clauses: true,
            ..Default::default()
        },
    );
}

#[test]
fn model_satisfies_the_formula_it_was_found_for() {
    init_logging();

    let problem = university();
    let encoding = encode(&problem, &EncodingOptions::default()).expect("encodable");

    let SatResult::Satisfiable(model) = Dpll::default()
        .solve(encoding.formula())
        .expect("no errors")
    else {
        panic!("the university problem has a schedule");
    };

    assert!(encoding.formula().is_satisfied_by(&model));
    assert!(check_schedule(
        &decode_model(&model, encoding.registry()),
        &problem
    ));
}

#[test]
fn too_many_exams_for_one_student() {
    init_logging();

    let problem = problem(
        &["Mon", "Tue"],
        &["Math", "Art", "Music"],
        &[("A", 30), ("B", 30)],
        &[("alice", &["Math", "Art", "Music"])],
    );
    let mut solver = Dpll::default();

    let outcome = solve_timetable(&problem, &mut solver, &EncodingOptions::default());

    assert_eq!(TimetableOutcome::Unsatisfiable, outcome.expect("no errors"));
    assert_eq!(1, solver.calls);
}

#[test]
fn too_many_exams_for_the_rooms() {
    init_logging();

    let problem = problem(
        &["Mon", "Tue"],
        &["Math", "Art", "Music"],
        &[("A", 30)],
        &[],
    );

    let outcome = solve_timetable(&problem, Dpll::default(), &EncodingOptions::default());

    assert_eq!(TimetableOutcome::Unsatisfiable, outcome.expect("no errors"));
}

#[test]
fn course_too_large_for_every_room() {
    init_logging();

    let students = cohort("s", &["Math"], 31);
    let problem = Problem::new(
        ["Mon".into(), "Tue".into()],
        ["Math".into(), "Art".into()],
        [Room::new("A", 30), Room::new("B", 10)],
        students,
    )
    .expect("valid problem");
    let mut solver = Dpll::default();

    let outcome = solve_timetable(&problem, &mut solver, &EncodingOptions::default());

    assert_eq!(TimetableOutcome::Unsatisfiable, outcome.expect("no errors"));
    assert_eq!(0, solver.calls);
}

#[test]
fn dimacs_file_describes_the_encoding() {
    init_logging();

    let problem = university();
    let encoding = encode(&problem, &EncodingOptions::default()).expect("encodable");
    let formula = encoding.formula();

    let mut dimacs = Vec::new();
    formula
        .write_dimacs(&mut dimacs, Some("university"))
        .expect("writing to a vector succeeds");
    let text = String::from_utf8(dimacs).expect("dimacs is ascii");
    let mut lines = text.lines();

    assert_eq!(Some("c university"), lines.next());
    assert_eq!(
        Some(format!(
            "p cnf {} {}",
            formula.num_variables(),
            formula.num_clauses()
        ))
        .as_deref(),
        lines.next()
    );

    let clauses = lines
        .map(|line| {
            line.split_whitespace()
                .map(|code| code.parse::<i32>().expect("integer literal"))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let expected = formula
        .to_dimacs()
        .into_iter()
        .map(|mut clause| {
            clause.push(0);
            clause
        })
        .collect::<Vec<_>>();

    assert_eq!(expected, clauses);
}
