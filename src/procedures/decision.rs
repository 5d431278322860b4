/*!
Methods for choosing the value of an atom.

# Overview

The decision procedure is fixed:
- Take the lowest atom without a value which is greater than the atom of the most recent decision, and value the atom true.

As decisions are made in increasing atom order, every atom below the most recent decision has a value.
For, each such atom either has a value from before the decision was made, or was valued after the decision and retracting the value would also retract the decision.
So, if there is no atom to decide on, every atom has a value.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.
Here, as *v* is always true, the literal is always the atom itself.

```rust,ignore
let atom = self.choose_atom()?;
let decision_as_literal = CLiteral::new(atom, true);
```
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    procedures::{assignment::AssignmentSource, conflict::Conflict},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was assigned to some atom.
    Literal(CLiteral),

    /// Some truth value was assigned to some atom, and the valuation conflicts with some clause.
    Conflict(Conflict),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

impl Context {
    /// The lowest atom without a value greater than the atom of the most recent decision, if any.
    pub fn choose_atom(&self) -> Option<Atom> {
        let last_decision = self.trail.last_decision();
        self.atom_db
            .valuation()
            .unvalued_atoms()
            .find(|atom| *atom > last_decision)
    }

    /// Makes a decision, if some atom is without a value.
    ///
    /// ```rust, ignore
    /// match self.make_decision() {
    ///     DecisionOk::Literal(_) => continue,
    ///     DecisionOk::Conflict(conflict) => self.resolve(conflict),
    ///     DecisionOk::Exhausted => break,
    /// }
    /// ```
    pub fn make_decision(&mut self) -> DecisionOk {
        match self.choose_atom() {
            Some(chosen_atom) => {
                self.counters.total_decisions += 1;

                let decision_literal = CLiteral::new(chosen_atom, true);
                log::trace!(target: targets::DECISION, "Decision {decision_literal} at level {}", self.trail.level() + 1);

                match self.assign(decision_literal, AssignmentSource::Decision) {
                    None => DecisionOk::Literal(decision_literal),
                    Some(key) => DecisionOk::Conflict(Conflict {
                        key,
                        atom: Some(chosen_atom),
                    }),
                }
            }
            None => DecisionOk::Exhausted,
        }
    }
}
