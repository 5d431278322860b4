//! Error types used in the library.
//!
//! - None of these arise during a solve. An unsatisfiable formula is a result, not an error.
//! - Build and parse errors arise when a formula is given to a context.
//! - A model error arises when a model is requested without a satisfiable verdict.
//!
//! Violations of internal invariants (e.g. unassigning an atom other than the tail of the trail) are not represented here, and panic instead.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Model(ModelError),
    Parse(ParseError),
    State(StateError),
}

/// Noted errors when building a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// Zero was given as a literal.
    /// Zero is reserved as a clause terminator in DIMACS, and names no atom.
    ZeroLiteral,

    /// A literal names an atom beyond the supported range.
    AtomOverflow,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors when requesting a model.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModelError {
    /// A model was requested, though no solve has found the formula to be satisfiable.
    NoModel,
}

impl From<ModelError> for ErrorKind {
    fn from(e: ModelError) -> Self {
        ErrorKind::Model(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A token which is not an integer was found on the given line.
    Literal(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors due to the state of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// A solve has begun, and the formula may no longer be extended.
    SolveInProgress,

    /// A solve has completed, and the formula may no longer be extended.
    Solved,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(BuildError::ZeroLiteral) => write!(f, "zero is not a literal"),
            Self::Build(BuildError::AtomOverflow) => write!(f, "atom out of range"),
            Self::Model(ModelError::NoModel) => write!(f, "no model is available"),
            Self::Parse(ParseError::ProblemSpecification) => {
                write!(f, "malformed problem specification")
            }
            Self::Parse(ParseError::Line(line)) => write!(f, "failed to read line {line}"),
            Self::Parse(ParseError::Literal(line)) => write!(f, "invalid literal on line {line}"),
            Self::State(StateError::SolveInProgress) => write!(f, "a solve is in progress"),
            Self::State(StateError::Solved) => write!(f, "the formula has been solved"),
        }
    }
}

impl std::error::Error for ErrorKind {}
