/*!
A database of clause related things, and in particular of the status of each clause on the current valuation.

# Overview

Clauses are stored in sequence, and accessed through [keys](ClauseKey), which are indicies into the sequence.
Original clauses are stored when building a context, and learned clauses are appended during a solve.
No clause is ever removed, so a key is stable.

Alongside each clause the database caches:
- A [status](ClauseStatus) of the clause on the current valuation.
- A count of the literals of the clause whose atom has no value.

# The cache

The cache is maintained incrementally as atoms are valued, and is re-derived as atoms lose their value.

When an atom is valued, each occurrence of the atom is [noted](ClauseDB::note_assignment):
- The count of literals without a value drops by one.
- If the clause was not true, and the literal is true, the clause is now true.
- Otherwise, if the clause was unit, the last literal without a value is false, and the clause is false.
- Otherwise, if the clause was undetermined and one literal without a value remains, the clause is unit.

When an atom loses its value, a clause which was true may no longer be true, and this can not be decided without knowing which other literal (if any) is true.
So, the status is [refreshed](ClauseDB::refresh) by a scan of the clause.

For the cache to be exact, duplicate literals are removed from each clause as the clause is stored.

# Example

```rust
# use dpll_sat::db::clause::{ClauseDB, ClauseSource, ClauseStatus};
# use dpll_sat::db::occurrences::OccurrenceDB;
let mut clause_db = ClauseDB::default();
let mut occurrence_db = OccurrenceDB::default();
occurrence_db.ensure_atom(2);

let valuation = vec![None; 3];
let key = clause_db.store(vec![1, -2, 1], ClauseSource::Original, &valuation, &mut occurrence_db);

assert_eq!(clause_db.get(key), Some([1, -2].as_slice()));
assert_eq!(clause_db.status(key), ClauseStatus::Undef);

assert_eq!(clause_db.note_assignment(key, false, true), ClauseStatus::Unit);
assert_eq!(clause_db.unassigned_count(key), 1);
assert_eq!(clause_db.first_unit(), Some(key));
```
*/

mod status;
pub use status::{evaluate, ClauseStatus};

use crate::{
    db::{occurrences::OccurrenceDB, ClauseKey},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
};

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause of the formula whose satisfiability is to be determined.
    Original,

    /// A clause learned from a conflict.
    Learned,
}

/// A database of clauses and their status.
#[derive(Default)]
pub struct ClauseDB {
    /// The clauses, original then learned.
    clauses: Vec<CClause>,

    /// The status of each clause, indexed by key.
    status: Vec<ClauseStatus>,

    /// The count of literals without a value of each clause, indexed by key.
    unassigned: Vec<usize>,

    /// The count of original clauses.
    original_count: usize,
}

impl ClauseDB {
    /// Stores a clause, and returns the key to the clause.
    ///
    /// Duplicate literals are removed, keeping the first occurrence.
    /// The status of the clause is derived from the given valuation, and every literal of the clause is noted in the occurrence database.
    ///
    /// All original clauses must be stored before any learned clause.
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
        valuation: &[Option<bool>],
        occurrence_db: &mut OccurrenceDB,
    ) -> ClauseKey {
        let mut the_clause = CClause::with_capacity(clause.len());
        for literal in clause {
            if !the_clause.contains(&literal) {
                the_clause.push(literal);
            }
        }

        let key = self.clauses.len();
        let (status, unassigned) = evaluate(&the_clause, valuation);
        occurrence_db.note_clause(key, &the_clause);

        match source {
            ClauseSource::Original => {
                assert_eq!(
                    key, self.original_count,
                    "! Original clause stored after a learned clause"
                );
                self.original_count += 1;
            }
            ClauseSource::Learned => {}
        }

        log::trace!(target: targets::CLAUSE_DB, "Stored {source:?} clause {key}: {} ({status})", the_clause.as_dimacs(false));

        self.clauses.push(the_clause);
        self.status.push(status);
        self.unassigned.push(unassigned);

        key
    }

    /// The clause at the given key, if it exists.
    pub fn get(&self, key: ClauseKey) -> Option<&[CLiteral]> {
        self.clauses.get(key).map(|clause| clause.as_slice())
    }

    /// The cached status of the clause at the given key.
    ///
    /// # Panics
    /// If there is no clause at the key.
    pub fn status(&self, key: ClauseKey) -> ClauseStatus {
        self.status[key]
    }

    /// The cached count of literals without a value in the clause at the given key.
    ///
    /// # Panics
    /// If there is no clause at the key.
    pub fn unassigned_count(&self, key: ClauseKey) -> usize {
        self.unassigned[key]
    }

    /// Updates the cache of the clause at `key` on the valuing of an atom which occurs in the clause with `polarity`, by `value`.
    ///
    /// Returns the revised status of the clause.
    pub fn note_assignment(&mut self, key: ClauseKey, polarity: bool, value: bool) -> ClauseStatus {
        let count = &mut self.unassigned[key];
        assert!(*count > 0, "! Valued an atom of clause {key} without a literal lacking a value");
        *count -= 1;

        let status = &mut self.status[key];
        *status = match *status {
            ClauseStatus::Undef | ClauseStatus::Unit if polarity == value => ClauseStatus::True,
            ClauseStatus::Unit => ClauseStatus::False,
            ClauseStatus::Undef if *count == 1 => ClauseStatus::Unit,
            other => other,
        };

        *status
    }

    /// Re-derives the cache of the clause at `key` from the given valuation.
    pub fn refresh(&mut self, key: ClauseKey, valuation: &[Option<bool>]) {
        let (status, unassigned) = evaluate(&self.clauses[key], valuation);
        self.status[key] = status;
        self.unassigned[key] = unassigned;
    }

    /// The key of the lowest indexed unit clause, if any.
    pub fn first_unit(&self) -> Option<ClauseKey> {
        self.status
            .iter()
            .position(|status| *status == ClauseStatus::Unit)
    }

    /// The key of the lowest indexed false clause, if any.
    pub fn first_falsified(&self) -> Option<ClauseKey> {
        self.status
            .iter()
            .position(|status| *status == ClauseStatus::False)
    }

    /// True if every clause is true, and false otherwise.
    pub fn all_satisfied(&self) -> bool {
        self.status
            .iter()
            .all(|status| *status == ClauseStatus::True)
    }

    /// A count of all clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of original clauses.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// An iterator over the original clauses.
    pub fn original_clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter().take(self.original_count)
    }

    /// An iterator over the learned clauses, in the order learned.
    pub fn learned_clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter().skip(self.original_count)
    }

    /// The cached (status, count) pair of each clause, in key order.
    pub fn cache(&self) -> Vec<(ClauseStatus, usize)> {
        self.status
            .iter()
            .copied()
            .zip(self.unassigned.iter().copied())
            .collect()
    }

    /// True if the cache of every clause agrees with a fresh evaluation on the given valuation.
    pub fn cache_is_consistent(&self, valuation: &[Option<bool>]) -> bool {
        self.clauses.iter().enumerate().all(|(key, clause)| {
            let fresh = evaluate(clause, valuation);
            let cached = (self.status[key], self.unassigned[key]);
            if fresh != cached {
                log::error!(target: targets::CLAUSE_DB, "Clause {key} cached as {cached:?}, evaluates to {fresh:?}");
            }
            fresh == cached
        })
    }
}
