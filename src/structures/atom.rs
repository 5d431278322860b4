/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

Atom 0 names no variable of a formula, and is used only to pad structures indexed by atoms, so that the atoms of a formula with *n* atoms are exactly `1..=n`.
This representation allows atoms to be used as the indicies of a structure, e.g. `valuation[a]`, without any offset.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bound by the magnitude of an [integer literal](crate::structures::literal::CLiteral).
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
