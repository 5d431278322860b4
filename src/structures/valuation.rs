/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is padding, as no atom is zero.
- Each non-zero index of the vector is interpreted as an atom, though most interaction is through the valuation trait.

In other words, the canonical representation of a valuation 𝐯 is a vector *v* whose length is one more than the number of atoms such that:
-  *v*\[a\] = Some(true) *if and only if* 𝐯(a) = true.
-  *v*\[a\] = Some(false) *if and only if* 𝐯(a) = false.
-  *v*\[a\] = None *if and only if* 𝐯(a) is undefined.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use dpll_sat::structures::valuation::Valuation;
let valuation = vec![None, None, Some(true), Some(false)];

assert_eq!(valuation.value_of(1), None);
assert_eq!(valuation.value_of(2), Some(true));
assert_eq!(valuation.unvalued_atoms().collect::<Vec<_>>(), vec![1]);
assert_eq!(valuation.as_dimacs(), "2 -3");
```
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom under the valuation, if any.
    ///
    /// An atom outside of the valuation has no value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// An iterator through all (Atom, Value) pairs, in atom order.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)>;

    /// An iterator through atoms which have some value.
    fn valued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.atom_value_pairs()
            .filter_map(|(atom, value)| value.map(|_| atom))
    }

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.atom_value_pairs().filter_map(|(atom, value)| match value {
            None => Some(atom),
            Some(_) => None,
        })
    }

    /// The valued atoms, as literals in DIMACS form, without a terminating `0`.
    fn as_dimacs(&self) -> String {
        self.atom_value_pairs()
            .filter_map(|(atom, value)| value.map(|v| CLiteral::new(atom, v).to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)> {
        self.iter()
            .enumerate()
            .skip(1)
            .map(|(atom, value)| (atom as Atom, *value))
    }
}
