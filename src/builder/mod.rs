/*!
Methods for building a formula in a context.

A formula may be given as a whole, with [from_formula](Context::from_formula), a clause at a time with [add_clause](Context::add_clause), or through [DIMACS](Context::read_dimacs).

Atoms are positive integers, and the atoms of a context are always `1..=n` for the largest atom *n* named by some clause (or declared with [ensure_atoms](Context::ensure_atoms)).

```rust
# use dpll_sat::config::Config;
# use dpll_sat::context::Context;
# use dpll_sat::types::err::{BuildError, ErrorKind};
let mut the_context = Context::from_config(Config::default());

assert_eq!(the_context.add_clause([1, -3]), Ok(0));
assert_eq!(the_context.atom_count(), 3);

assert_eq!(
    the_context.add_clause([2, 0]),
    Err(ErrorKind::Build(BuildError::ZeroLiteral))
);
```
*/

pub mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    context::{Context, ContextState},
    db::{clause::ClauseSource, ClauseKey},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Formula},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl Context {
    /// Creates a context from some given configuration and formula.
    pub fn from_formula(config: crate::config::Config, formula: Formula) -> Result<Self, ErrorKind> {
        let mut the_context = Context::from_config(config);
        for clause in formula {
            the_context.add_clause(clause)?;
        }
        Ok(the_context)
    }

    /// Adds a clause to the formula of the context, and returns the key of the clause.
    ///
    /// Clauses may only be added before a solve.
    /// Duplicate literals are removed, and atoms are declared as required.
    pub fn add_clause(
        &mut self,
        clause: impl IntoIterator<Item = CLiteral>,
    ) -> Result<ClauseKey, ErrorKind> {
        match self.state {
            ContextState::Input => {}
            ContextState::Solving => return Err(ErrorKind::from(err::StateError::SolveInProgress)),
            ContextState::Satisfiable | ContextState::Unsatisfiable => {
                return Err(ErrorKind::from(err::StateError::Solved));
            }
        }

        let clause = clause.into_iter().collect::<CClause>();

        let mut max_atom = 0;
        for literal in &clause {
            if *literal == 0 {
                return Err(ErrorKind::from(err::BuildError::ZeroLiteral));
            }
            if literal.atom() > ATOM_MAX {
                return Err(ErrorKind::from(err::BuildError::AtomOverflow));
            }
            max_atom = std::cmp::max(max_atom, literal.atom());
        }
        self.ensure_atoms(max_atom);

        let key = self.clause_db.store(
            clause,
            ClauseSource::Original,
            self.atom_db.valuation(),
            &mut self.occurrence_db,
        );
        Ok(key)
    }

    /// Ensures each atom `1..=atom` is part of the context.
    ///
    /// Any atom part of the context is valued by a model, regardless of whether the atom occurs in some clause.
    pub fn ensure_atoms(&mut self, atom: Atom) {
        self.atom_db.ensure_atom(atom);
        self.occurrence_db.ensure_atom(atom);
        self.implication_db.ensure_atom(atom);
    }
}
