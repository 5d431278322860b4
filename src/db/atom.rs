/*!
A database of atom related things, and in particular the current valuation.

The valuation is stored in its canonical form, as a [CValuation], and so the zero index is padding.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
};

/// The atom database.
pub struct AtomDB {
    /// The current valuation, indexed by atom.
    valuation: CValuation,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB {
            valuation: vec![None],
        }
    }
}

impl AtomDB {
    /// Ensures every atom up to (and including) `atom` is part of the valuation.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let required = atom as usize + 1;
        if self.valuation.len() < required {
            self.valuation.resize(required, None);
        }
    }

    /// A count of the atoms in the database.
    pub fn count(&self) -> usize {
        self.valuation.len() - 1
    }

    /// The current valuation, in canonical form.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// The value of `atom` on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// Values the atom of `literal` so that `literal` is true.
    ///
    /// # Panics
    /// If the atom already has a value, as any previous value must first be retracted.
    pub fn set_value(&mut self, literal: CLiteral) {
        let atom = literal.atom();
        let slot = &mut self.valuation[atom as usize];
        if let Some(value) = slot {
            panic!("! Attempt to value {atom}, which has value {value}");
        }
        log::trace!(target: targets::VALUATION, "Set {literal}");
        *slot = Some(literal.polarity());
    }

    /// Clears the value of `atom`.
    pub fn drop_value(&mut self, atom: Atom) {
        log::trace!(target: targets::VALUATION, "Cleared {atom}");
        self.valuation[atom as usize] = None;
    }
}
