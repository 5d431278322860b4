/*!
Analysis of a conflict.

Takes the witnesses to a conflict and returns either a learned clause together with a level to backjump to, or the observation that the formula is unsatisfiable.

# Overview

The [implication database](crate::db::implication) records, for each valued atom, the decisions the value of the atom depends on.
Each atom of a false clause has a value, and the clause is false because of the decisions the values depend on.

So, with *D* the union of the dependencies of the atoms of the clause:
- If *D* is empty, the clause is false regardless of any decision, and the formula is unsatisfiable.
- Otherwise, the decisions of *D* can not all be made together, and the clause which contains the negation of each decision of *D* is a consequence of the formula.

The learned clause is stored in the [clause database](crate::db::clause), and the backjump level is the second highest decision level of the decisions of *D* (or 0 if *D* contains a single decision).
After a backjump to that level the learned clause is unit, and asserts the negation of the decision of highest level.

Note, *D* is a union of cached dependencies, and so a learned clause is sound though not minimal.
In particular, no search for a unique implication point is made.

# Example

```rust, ignore
match self.conflict_analysis(&conflict) {
    AnalysisOk::FundamentalConflict => {
        self.state = ContextState::Unsatisfiable;
    }

    AnalysisOk::LearnedClause { key, reverse, target } => {
        self.backjump(target, reverse, key);
    }
}
```
*/

use std::collections::BTreeSet;

use crate::{
    context::Context,
    db::{clause::ClauseSource, ClauseKey, LevelIndex},
    misc::log::targets::{self},
    procedures::conflict::Conflict,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
};

/// Possible 'Ok' results from conflict analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisOk {
    /// The conflict depends on no decision, and so the formula is unsatisfiable.
    FundamentalConflict,

    /// A clause was learned.
    LearnedClause {
        /// The key of the learned clause.
        key: ClauseKey,

        /// The decision of highest level the conflict depends on, to be reversed.
        reverse: Atom,

        /// The level to backjump to.
        target: LevelIndex,
    },
}

impl Context {
    /// The decisions the conflict depends on.
    ///
    /// # Panics
    /// If the conflict atom is not an atom of the conflict clause, or some atom of the clause has no implication record.
    pub fn conflict_dependencies(&self, conflict: &Conflict) -> BTreeSet<Atom> {
        let Some(clause) = self.clause_db.get(conflict.key) else {
            panic!("! Conflict on missing clause {}", conflict.key);
        };

        if let Some(atom) = conflict.atom {
            assert!(
                clause.atoms().any(|clause_atom| clause_atom == atom),
                "! Conflict atom {atom} is not part of clause {}",
                conflict.key
            );
        }

        let mut dependencies = BTreeSet::default();
        for atom in clause.atoms() {
            match self.implication_db.dependencies_of(atom) {
                Some(atom_dependencies) => dependencies.extend(atom_dependencies.iter().copied()),
                None => panic!("! Atom {atom} of conflict clause has no implication record"),
            }
        }
        dependencies
    }

    /// Analyses a conflict, and stores a learned clause if the conflict depends on some decision.
    ///
    /// For documentation, see [procedures::analysis](crate::procedures::analysis).
    pub fn conflict_analysis(&mut self, conflict: &Conflict) -> AnalysisOk {
        let dependencies = self.conflict_dependencies(conflict);

        if dependencies.is_empty() {
            log::info!(target: targets::ANALYSIS, "Conflict on clause {} depends on no decision", conflict.key);
            return AnalysisOk::FundamentalConflict;
        }

        // Levels of the dependencies, highest first.
        let mut levels = dependencies
            .iter()
            .map(|atom| {
                let is_decision = self
                    .implication_db
                    .record(*atom)
                    .is_some_and(|record| record.decision);
                match self.implication_db.level_of(*atom) {
                    Some(level) if is_decision => (level, *atom),
                    _ => panic!("! Dependency {atom} is not a decision"),
                }
            })
            .collect::<Vec<_>>();
        levels.sort_unstable_by(|a, b| b.cmp(a));

        let (_, reverse) = levels[0];
        let target = levels.get(1).map(|(level, _)| *level).unwrap_or(0);

        let learned_clause = dependencies
            .iter()
            .map(|atom| CLiteral::new(*atom, false))
            .collect::<CClause>();

        log::info!(target: targets::ANALYSIS, "Learned {}", learned_clause.as_dimacs(true));

        let key = self.clause_db.store(
            learned_clause,
            ClauseSource::Learned,
            self.atom_db.valuation(),
            &mut self.occurrence_db,
        );
        self.counters.learned_clauses += 1;

        AnalysisOk::LearnedClause {
            key,
            reverse,
            target,
        }
    }
}
