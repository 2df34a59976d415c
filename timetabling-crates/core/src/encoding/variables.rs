use std::fmt::Display;
use std::fmt::Formatter;
use std::num::NonZeroI32;
use std::num::NonZeroU32;
use std::ops::Not;

/// A propositional variable of the encoding. Variables are numbered densely from 1, which makes
/// their number directly usable as a DIMACS variable code.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variable(NonZeroU32);

impl Variable {
    /// Create a variable from its 1-based number. Returns `None` for 0 and for numbers which do
    /// not fit a DIMACS literal.
    pub fn new(number: u32) -> Option<Variable> {
        if number > i32::MAX as u32 {
            return None;
        }

        NonZeroU32::new(number).map(Variable)
    }

    /// The 1-based number of this variable.
    pub fn number(self) -> u32 {
        self.0.get()
    }

    /// The zero-based index of this variable, e.g. into a vector of per-variable data.
    pub fn index(self) -> usize {
        self.0.get() as usize - 1
    }

    pub fn positive(self) -> Literal {
        Literal::new(self, true)
    }

    pub fn negative(self) -> Literal {
        Literal::new(self, false)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// A variable or its negation. The code is never `i32::MIN`, so it can always be negated.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Literal(NonZeroI32);

impl Literal {
    pub fn new(variable: Variable, is_positive: bool) -> Literal {
        // Variable numbers are at most `i32::MAX`.
        let code = variable.number() as i32;
        let code = if is_positive { code } else { -code };

        Literal(NonZeroI32::new(code).expect("variable numbers are non-zero"))
    }

    /// Interpret a DIMACS literal code. Returns `None` for `i32::MIN`, which has no variable.
    pub fn from_dimacs(code: NonZeroI32) -> Option<Literal> {
        (code != NonZeroI32::MIN).then_some(Literal(code))
    }

    pub fn to_dimacs(self) -> NonZeroI32 {
        self.0
    }

    pub fn variable(self) -> Variable {
        Variable(self.0.unsigned_abs())
    }

    pub fn is_positive(self) -> bool {
        self.0.is_positive()
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal(-self.0)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_positive() {
            write!(f, "{}", self.variable())
        } else {
            write!(f, "~{}", self.variable())
        }
    }
}
