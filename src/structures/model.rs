/*!
A model of a formula: a total function from atoms to truth values, on which each clause of the formula is true.

A model is produced by a [context](crate::context::Context) only after the formula of the context has been found to be satisfiable.

```rust
# use dpll_sat::structures::model::Model;
let model = Model::from(vec![true, false, true]);

assert_eq!(model.atom_count(), 3);
assert_eq!(model.value_of(2), Some(false));
assert_eq!(model.value_of(4), None);
assert!(model.satisfies(&vec![vec![1, 2], vec![-2, 3]]));
assert!(!model.satisfies(&vec![vec![-1, 2]]));
assert_eq!(model.to_string(), "1 -2 3");
```
*/

use crate::structures::{
    atom::Atom,
    clause::CClause,
    literal::{CLiteral, Literal},
};

/// A total assignment of truth values to atoms `1..=n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    /// The value of atom `a` is at index `a - 1`.
    values: Vec<bool>,
}

impl From<Vec<bool>> for Model {
    fn from(values: Vec<bool>) -> Self {
        Model { values }
    }
}

impl Model {
    /// The value of an atom on the model, or nothing if the atom is not part of the model.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        match atom {
            0 => None,
            _ => self.values.get(atom as usize - 1).copied(),
        }
    }

    /// The number of atoms valued by the model.
    pub fn atom_count(&self) -> usize {
        self.values.len()
    }

    /// An iterator over (atom, value) pairs, in atom order.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, bool)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, value)| (index as Atom + 1, *value))
    }

    /// The model as a sequence of literals, one for each atom.
    pub fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.iter().map(|(atom, value)| CLiteral::new(atom, value))
    }

    /// True if some literal of each clause is true on the model.
    pub fn satisfies(&self, formula: &[CClause]) -> bool {
        formula.iter().all(|clause| {
            clause
                .iter()
                .any(|literal| self.value_of(literal.atom()) == Some(literal.polarity()))
        })
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literals = self
            .literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", literals.join(" "))
    }
}
