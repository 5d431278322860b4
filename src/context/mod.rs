/*!
The context --- to which formulas are added and within which solves take place, etc.

A context owns every structure used during a solve, and a solve is a sequence of mutations of these structures by the [procedures](crate::procedures).
Nothing is shared between contexts.

# Example
```rust
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause([1, 2]).is_ok());
assert!(the_context.add_clause([-1]).is_ok());

assert_eq!(the_context.solve(), Report::Satisfiable);

let model = the_context.model().unwrap();
assert_eq!(model.value_of(1), Some(false));
assert_eq!(model.value_of(2), Some(true));
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{
        atom::AtomDB, clause::ClauseDB, implication::ImplicationDB, occurrences::OccurrenceDB,
        trail::Trail,
    },
    reports::Report,
    structures::model::Model,
    types::err::{self, ErrorKind},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// The consistency of the formula is being determined.
    Solving,

    /// The formula is known to be satisfiable, on the current valuation.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The occurrence database.
    /// See [db::occurrences](crate::db::occurrences) for details.
    pub occurrence_db: OccurrenceDB,

    /// Implication records, kept only when backjumping.
    /// See [db::implication](crate::db::implication) for details.
    pub implication_db: ImplicationDB,

    /// The trail, and decision stack.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            occurrence_db: OccurrenceDB::default(),
            implication_db: ImplicationDB::default(),
            trail: Trail::default(),
            state: ContextState::Input,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The count of atoms in the context.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count()
    }

    /// A model of the formula, if the formula has been found to be satisfiable.
    ///
    /// Atoms without a value are given the [configured](crate::config::Config::unassigned_value) value.
    ///
    /// Requesting a model without a satisfiable verdict is an error.
    pub fn model(&self) -> Result<Model, ErrorKind> {
        match self.state {
            ContextState::Satisfiable => {
                let values = self
                    .atom_db
                    .valuation()
                    .iter()
                    .skip(1)
                    .map(|value| value.unwrap_or(self.config.unassigned_value))
                    .collect::<Vec<_>>();
                Ok(Model::from(values))
            }
            _ => Err(ErrorKind::from(err::ModelError::NoModel)),
        }
    }
}
