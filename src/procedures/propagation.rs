/*!
Unit propagation.

# Overview

A clause is unit on a valuation when no literal of the clause is true and exactly one literal has an atom without a value.
For the clause to be true, that literal must be true, and so the atom of the literal is valued to make the literal true.

Propagation repeatedly takes the lowest indexed unit clause from the [clause database](crate::db::clause) and values the remaining literal, until either:
- No clause is unit, and propagation is exhausted.
- Some clause is made false, and there is a conflict.

Propagation is only ever forward.
Resolving a conflict is left to [backjumping](crate::procedures::backjump) or [backtracking](crate::procedures::backtrack).

The valuation reached by exhausting propagation does not depend on the order in which unit clauses are taken, so long as no conflict is found.
Taking the lowest indexed unit clause only fixes which conflict is found first.

# Example

```rust,ignore
while let PropagationOk::Implied(literal) = self.propagate() {
    log::trace!("Propagated {literal}");
}
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    procedures::{assignment::AssignmentSource, conflict::Conflict},
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
    },
};

/// Possible 'Ok' results from a single step of propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationOk {
    /// No clause is unit.
    Exhausted,

    /// The literal was made true by propagation, without conflict.
    Implied(CLiteral),

    /// The literal was made true by propagation, and the valuation conflicts with some clause.
    Conflict(Conflict),
}

impl Context {
    /// Propagates the lowest indexed unit clause, if any.
    ///
    /// # Panics
    /// If the cached status of a clause is unit, though no literal of the clause is without a value.
    pub fn propagate(&mut self) -> PropagationOk {
        let Some(key) = self.clause_db.first_unit() else {
            return PropagationOk::Exhausted;
        };

        let literal = match self.clause_db.get(key).and_then(|clause| {
            clause
                .literals()
                .find(|literal| self.atom_db.value_of(literal.atom()).is_none())
                .copied()
        }) {
            Some(literal) => literal,
            None => panic!("! Unit clause {key} has no literal without a value"),
        };

        log::trace!(target: targets::PROPAGATION, "{literal} from clause {key}");
        self.counters.total_propagations += 1;

        match self.assign(literal, AssignmentSource::Propagation(key)) {
            None => PropagationOk::Implied(literal),
            Some(falsified) => {
                log::debug!(target: targets::PROPAGATION, "Conflict on clause {falsified} from {literal}");
                PropagationOk::Conflict(Conflict {
                    key: falsified,
                    atom: Some(literal.atom()),
                })
            }
        }
    }

    /// Propagates until either propagation is exhausted or a conflict is found, and returns the conflict, if any.
    ///
    /// Any clause already false is a conflict, and is returned before any propagation is made.
    pub fn propagate_all(&mut self) -> Option<Conflict> {
        if let Some(key) = self.clause_db.first_falsified() {
            log::debug!(target: targets::PROPAGATION, "Conflict on clause {key}");
            return Some(Conflict { key, atom: None });
        }

        loop {
            match self.propagate() {
                PropagationOk::Exhausted => return None,
                PropagationOk::Implied(_) => {}
                PropagationOk::Conflict(conflict) => return Some(conflict),
            }
        }
    }
}
