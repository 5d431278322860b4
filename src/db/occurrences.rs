/*!
For each atom, the clauses in which the atom occurs.

Each occurrence pairs the polarity of the literal with the key of the clause containing the literal.
The occurrences of an atom are used to find every clause affected when the atom is valued, or loses its value.

Occurrence lists are scanned in full on each update.
*/

use crate::{
    db::ClauseKey,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// An occurrence of an atom in a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occurrence {
    /// The polarity of the atom in the clause.
    pub polarity: bool,

    /// The key of the clause.
    pub key: ClauseKey,
}

/// Occurrence lists, indexed by atom.
#[derive(Default)]
pub struct OccurrenceDB {
    lists: Vec<Vec<Occurrence>>,
}

impl OccurrenceDB {
    /// Ensures there is an occurrence list for every atom up to (and including) `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let required = atom as usize + 1;
        if self.lists.len() < required {
            self.lists.resize_with(required, Vec::default);
        }
    }

    /// Notes each literal of the clause at `key`.
    pub fn note_clause(&mut self, key: ClauseKey, clause: &[CLiteral]) {
        for literal in clause {
            self.lists[literal.atom() as usize].push(Occurrence {
                polarity: literal.polarity(),
                key,
            });
        }
    }

    /// The occurrences of an atom, in the order the clauses were stored.
    pub fn occurrences_of(&self, atom: Atom) -> &[Occurrence] {
        &self.lists[atom as usize]
    }
}
