use std::num::NonZeroI32;

use log::trace;

use crate::containers::HashMap;
use crate::encoding::Literal;
use crate::encoding::Variable;

/// A truth assignment as reported by a SAT solver: the literals which are true, in the order the
/// solver gave them.
///
/// A well-formed model contains one literal for every variable of the formula. Nothing stops a
/// solver from reporting a model that mentions a variable twice or not at all; in that case the
/// first literal of a variable determines its value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    literals: Vec<Literal>,
    /// The value of every mentioned variable. Solvers may report arbitrarily large variable
    /// numbers, so this is not indexed densely.
    values: HashMap<Variable, bool>,
}

impl Model {
    pub fn from_literals(literals: impl IntoIterator<Item = Literal>) -> Model {
        let literals: Vec<Literal> = literals.into_iter().collect();
        let mut values: HashMap<Variable, bool> = HashMap::default();

        for literal in literals.iter() {
            let _ = values
                .entry(literal.variable())
                .or_insert(literal.is_positive());
        }

        Model { literals, values }
    }

    /// Create a model from DIMACS literal codes. Zeros, such as the terminator of a `v` line, are
    /// skipped, and so is `i32::MIN`, which does not name a variable.
    pub fn from_dimacs(codes: impl IntoIterator<Item = i32>) -> Model {
        Model::from_literals(
            codes
                .into_iter()
                .filter_map(NonZeroI32::new)
                .filter_map(|code| {
                    let literal = Literal::from_dimacs(code);
                    if literal.is_none() {
                        trace!("Skipping literal code {code} without a variable");
                    }
                    literal
                }),
        )
    }

    /// The value the model gives `variable`, or `None` if it does not mention it.
    pub fn value(&self, variable: Variable) -> Option<bool> {
        self.values.get(&variable).copied()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl FromIterator<Literal> for Model {
    fn from_iter<T: IntoIterator<Item = Literal>>(iter: T) -> Self {
        Model::from_literals(iter)
    }
}
