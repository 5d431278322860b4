/*!
A record, for each valued atom, of which decisions the value of the atom depends on.

# Overview

Each valued atom has an [ImplicationRecord], noting:
- Whether the atom is a decision, and the decision level at which the atom was valued.
- The atoms whose values directly forced the value of the atom (its parents), and the atoms whose values it directly forced (its children).
- The decisions the value of the atom depends on.

For a decision, the dependencies are the decision itself.
For an atom valued by propagation of some clause, the dependencies are the union of the dependencies of each other atom in the clause.

The records are a cache of dependencies, rather than a graph to be traversed.
In particular, the dependencies of a conflict are found by a union over the atoms of the conflict clause, and not by searching for a unique implication point.
So, clauses learned from the dependencies are sound, though not minimal.

A record is created when an atom is valued and dropped when the atom loses its value.

# Example

```rust
# use dpll_sat::db::implication::ImplicationDB;
let mut implication_db = ImplicationDB::default();
implication_db.ensure_atom(3);

implication_db.note_decision(1, 1);
implication_db.note_decision(2, 2);
implication_db.note_implication(3, 2, vec![1, 2]);

let dependencies = implication_db.dependencies_of(3).unwrap();
assert_eq!(dependencies.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
assert_eq!(implication_db.record(1).unwrap().children, vec![3]);
assert_eq!(implication_db.level_of(3), Some(2));

implication_db.forget(3);
assert!(implication_db.record(3).is_none());
assert_eq!(implication_db.level_of(3), None);
assert!(implication_db.record(1).unwrap().children.is_empty());
```
*/

use std::collections::BTreeSet;

use crate::{db::LevelIndex, structures::atom::Atom};

/// The implication record of a valued atom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImplicationRecord {
    /// Whether the atom is (currently) a decision.
    pub decision: bool,

    /// The decision level at which the atom was valued.
    pub level: LevelIndex,

    /// Atoms whose value was directly forced by the value of this atom.
    pub children: Vec<Atom>,

    /// Atoms whose values directly forced the value of this atom.
    pub parents: Vec<Atom>,

    /// The decisions the value of this atom depends on.
    pub dependencies: BTreeSet<Atom>,
}

/// Implication records, indexed by atom.
#[derive(Default)]
pub struct ImplicationDB {
    records: Vec<Option<ImplicationRecord>>,
}

impl ImplicationDB {
    /// Ensures there is space for a record of every atom up to (and including) `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let required = atom as usize + 1;
        if self.records.len() < required {
            self.records.resize(required, None);
        }
    }

    /// The record of `atom`, if the atom has a value.
    pub fn record(&self, atom: Atom) -> Option<&ImplicationRecord> {
        self.records.get(atom as usize).and_then(|record| record.as_ref())
    }

    /// The decisions the value of `atom` depends on, if the atom has a value.
    pub fn dependencies_of(&self, atom: Atom) -> Option<&BTreeSet<Atom>> {
        self.record(atom).map(|record| &record.dependencies)
    }

    /// The decision level of `atom`, if the atom has a value.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.record(atom).map(|record| record.level)
    }

    /// Records `atom` as the decision of `level`.
    pub fn note_decision(&mut self, atom: Atom, level: LevelIndex) {
        self.records[atom as usize] = Some(ImplicationRecord {
            decision: true,
            level,
            children: Vec::default(),
            parents: Vec::default(),
            dependencies: BTreeSet::from([atom]),
        });
    }

    /// Records `atom` as valued at `level`, forced by the values of `parents`.
    ///
    /// # Panics
    /// If some parent has no record.
    pub fn note_implication(&mut self, atom: Atom, level: LevelIndex, parents: Vec<Atom>) {
        let mut dependencies = BTreeSet::default();

        for parent in &parents {
            let Some(parent_record) = self.records[*parent as usize].as_mut() else {
                panic!("! Parent {parent} of {atom} has no implication record");
            };
            dependencies.extend(parent_record.dependencies.iter().copied());
            parent_record.children.push(atom);
        }

        self.records[atom as usize] = Some(ImplicationRecord {
            decision: false,
            level,
            children: Vec::default(),
            parents,
            dependencies,
        });
    }

    /// Drops the record of `atom`, and removes the atom from the children of each parent.
    pub fn forget(&mut self, atom: Atom) {
        let Some(record) = self.records[atom as usize].take() else {
            return;
        };

        for parent in record.parents {
            if let Some(parent_record) = self.records[parent as usize].as_mut() {
                parent_record.children.retain(|child| *child != atom);
            }
        }
    }

    /// True if no atom has a record.
    pub fn is_empty(&self) -> bool {
        self.records.iter().all(|record| record.is_none())
    }
}
