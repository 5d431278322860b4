/*!
Witnesses to a conflict.

A conflict is witnessed by a clause which is false on the current valuation and, when the conflict was found by valuing an atom, by that atom.

Witnesses are values passed from the procedure which finds a conflict to the procedure which resolves it, and are dropped once the conflict is resolved.

The clause is authoritative.
Whenever an atom is given, the atom occurs in the clause, and so the decisions the value of the atom depends on are already part of the decisions the clause depends on.
*/

use crate::db::ClauseKey;
use crate::structures::atom::Atom;

/// The witnesses to a conflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conflict {
    /// The key of a clause false on the current valuation.
    pub key: ClauseKey,

    /// The atom whose valuation made the clause false, if known.
    pub atom: Option<Atom>,
}
