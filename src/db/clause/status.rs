use crate::structures::{
    clause::Clause,
    literal::{CLiteral, Literal},
};

/// The status of a clause on some valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is true.
    True,

    /// Every literal of the clause is false.
    False,

    /// Exactly one literal has no value, and no literal is true.
    Unit,

    /// At least two literals have no value, and no literal is true.
    Undef,
}

impl std::fmt::Display for ClauseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Unit => write!(f, "unit"),
            Self::Undef => write!(f, "undef"),
        }
    }
}

impl ClauseStatus {
    /// The status of a clause with `unassigned` literals without a value, none of which are true.
    pub fn from_unassigned(unassigned: usize) -> Self {
        match unassigned {
            0 => ClauseStatus::False,
            1 => ClauseStatus::Unit,
            _ => ClauseStatus::Undef,
        }
    }
}

/// The status of a clause on the given valuation, together with a count of literals whose atom has no value.
///
/// Every literal is inspected, as the count is always required.
pub fn evaluate(clause: &[CLiteral], valuation: &[Option<bool>]) -> (ClauseStatus, usize) {
    let mut unassigned = 0;
    let mut satisfied = false;

    for literal in clause.literals() {
        match literal.value_on(valuation[literal.atom() as usize]) {
            Some(true) => satisfied = true,
            Some(false) => {}
            None => unassigned += 1,
        }
    }

    match satisfied {
        true => (ClauseStatus::True, unassigned),
        false => (ClauseStatus::from_unassigned(unassigned), unassigned),
    }
}
