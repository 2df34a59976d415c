use std::io::Write;

use dimacs_format::writer::DimacsWriter;

use super::Literal;
use crate::solution::Model;

/// A disjunction of literals. The empty clause is unsatisfiable.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Clause(Vec<Literal>);

impl Clause {
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Clause {
        Clause(literals.into_iter().collect())
    }

    /// The clause `~a \/ ~b`: `a` and `b` are not both true.
    pub fn not_both(a: Literal, b: Literal) -> Clause {
        Clause(vec![!a, !b])
    }

    pub fn literals(&self) -> &[Literal] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether at least one literal is true in `model`. Unassigned variables count as false.
    pub fn is_satisfied_by(&self, model: &Model) -> bool {
        self.0
            .iter()
            .any(|&literal| model.value(literal.variable()) == Some(literal.is_positive()))
    }

    /// The literals as DIMACS codes.
    pub fn to_dimacs(&self) -> Vec<i32> {
        self.0.iter().map(|literal| literal.to_dimacs().get()).collect()
    }
}

/// A conjunction of clauses over the variables `1..=num_variables`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    num_variables: usize,
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(num_variables: usize) -> Formula {
        Formula {
            num_variables,
            clauses: vec![],
        }
    }

    pub(crate) fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.clauses.iter()
    }

    /// Whether the formula contains the empty clause, in which case no solver needs to be asked.
    pub fn is_trivially_unsatisfiable(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    /// Whether every clause is satisfied by `model`.
    pub fn is_satisfied_by(&self, model: &Model) -> bool {
        self.clauses.iter().all(|clause| clause.is_satisfied_by(model))
    }

    /// The clauses as DIMACS codes, in order.
    pub fn to_dimacs(&self) -> Vec<Vec<i32>> {
        self.clauses.iter().map(Clause::to_dimacs).collect()
    }

    /// Write the formula in the DIMACS CNF format, preceded by the given comment lines.
    pub fn write_dimacs(&self, writer: impl Write, comment: Option<&str>) -> std::io::Result<()> {
        let mut writer = DimacsWriter::new(writer);

        if let Some(comment) = comment {
            writer.comment(comment)?;
        }

        writer.header(self.num_variables, self.clauses.len())?;

        for clause in self.clauses.iter() {
            writer.clause(clause.literals().iter().map(|literal| literal.to_dimacs()))?;
        }

        writer.flush()
    }
}

impl<'a> IntoIterator for &'a Formula {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}
