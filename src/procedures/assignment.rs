/*!
Valuing atoms, and retracting values.

# Overview

Every change to the valuation of a context passes through the methods here, as each change must be mirrored:
- On the [trail](crate::db::trail), so the change can be undone.
- In the [clause database](crate::db::clause), so the status of each clause matches the valuation.
- In the [implication database](crate::db::implication), when backjumping, so the dependencies of each value are known.

# Assignment

An [assignment](Context::assign) values an atom which has no value.
Each clause in which the atom occurs is updated incrementally, and the key of the lowest indexed clause made false by the assignment (if any) is returned.

The source of an assignment determines the implication record of the atom:
- A decision depends on itself.
- A propagated atom depends on the dependencies of the other atoms of the clause propagated.
- A decision flipped by a chronological backtrack depends on every decision below it.

# Retraction

Values are only ever retracted from the tail of the trail.
As the status of a true clause can not be revised without knowing which literal made the clause true, each clause touched by a retraction is re-derived from the valuation.
When a number of values are retracted together, each touched clause is re-derived once, after all values have been retracted.
*/

use std::collections::BTreeSet;

use crate::{
    config::Retraction,
    context::Context,
    db::{clause::ClauseStatus, trail::TrailEntry, ClauseKey},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::Clause,
        literal::{CLiteral, Literal},
    },
};

/// The reason an atom was valued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentSource {
    /// A decision, which opens a new decision level.
    Decision,

    /// Propagation of the clause at the given key.
    Propagation(ClauseKey),

    /// The flip of a decision by a chronological backtrack.
    Backtrack,
}

impl Context {
    /// Values the atom of `literal` so that `literal` is true, and returns the key of the lowest indexed clause falsified as a result, if any.
    ///
    /// # Panics
    /// If the atom of the literal already has a value.
    pub fn assign(&mut self, literal: CLiteral, source: AssignmentSource) -> Option<ClauseKey> {
        let atom = literal.atom();
        let value = literal.polarity();

        self.atom_db.set_value(literal);
        self.trail.push(TrailEntry {
            atom,
            decision: source == AssignmentSource::Decision,
            value,
        });

        match self.config.retraction {
            Retraction::Backjump => self.note_implication(atom, source),
            Retraction::Backtrack => {}
        }

        for occurrence in self.occurrence_db.occurrences_of(atom) {
            self.clause_db
                .note_assignment(occurrence.key, occurrence.polarity, value);
        }

        // Occurrences are in key order.
        // And, a clause with repeated atoms may pass through several statuses, so only the final status is inspected.
        let falsified = self
            .occurrence_db
            .occurrences_of(atom)
            .iter()
            .map(|occurrence| occurrence.key)
            .find(|key| self.clause_db.status(*key) == ClauseStatus::False);

        if let Some(key) = falsified {
            log::trace!(target: targets::VALUATION, "{literal} falsified clause {key}");
        }

        falsified
    }

    fn note_implication(&mut self, atom: Atom, source: AssignmentSource) {
        let level = self.trail.level();
        match source {
            AssignmentSource::Decision => self.implication_db.note_decision(atom, level),

            AssignmentSource::Propagation(key) => {
                let parents = match self.clause_db.get(key) {
                    Some(clause) => clause.atoms().filter(|other| *other != atom).collect(),
                    None => panic!("! Propagation from missing clause {key}"),
                };
                self.implication_db.note_implication(atom, level, parents);
            }

            AssignmentSource::Backtrack => {
                let parents = self.trail.decisions().collect();
                self.implication_db.note_implication(atom, level, parents);
            }
        }
    }

    /// Removes the value of `atom`, which must be the most recently valued atom.
    ///
    /// # Panics
    /// If `atom` is not the atom at the tail of the trail.
    pub fn unassign(&mut self, atom: Atom) {
        match self.trail.tail() {
            Some(entry) if entry.atom == atom => {}
            Some(entry) => panic!("! Unassign of {atom}, though {} is the tail", entry.atom),
            None => panic!("! Unassign of {atom} from an empty trail"),
        }

        self.retract_tail();

        let valuation = self.atom_db.valuation();
        for occurrence in self.occurrence_db.occurrences_of(atom) {
            self.clause_db.refresh(occurrence.key, valuation);
        }
    }

    /// Retracts entries from the tail of the trail until the trail has `length` entries.
    ///
    /// Each clause containing a retracted atom is refreshed once every entry has been retracted.
    pub fn unwind_trail(&mut self, length: usize) {
        let mut touched: BTreeSet<ClauseKey> = BTreeSet::default();

        while self.trail.len() > length {
            let Some(entry) = self.retract_tail() else {
                break;
            };
            touched.extend(
                self.occurrence_db
                    .occurrences_of(entry.atom)
                    .iter()
                    .map(|occurrence| occurrence.key),
            );
        }

        let valuation = self.atom_db.valuation();
        for key in touched {
            self.clause_db.refresh(key, valuation);
        }

        debug_assert!(
            self.clause_db.cache_is_consistent(self.atom_db.valuation()),
            "! Clause cache out of sync after unwinding to {length}"
        );
    }

    /// Removes the tail entry of the trail, the value of the atom of the entry, and any implication record of the atom.
    ///
    /// The status of clauses is left untouched.
    fn retract_tail(&mut self) -> Option<TrailEntry> {
        let entry = self.trail.pop()?;
        self.atom_db.drop_value(entry.atom);
        self.implication_db.forget(entry.atom);
        Some(entry)
    }
}
