/*!
Clauses are disjunctions of literals, and formulas are conjunctions of clauses.

The canonical representation of a clause is a vector of [literals](crate::structures::literal).
The order of literals carries no meaning, though it does decide which literal is found first when a clause is scanned.

```rust
# use dpll_sat::structures::clause::Clause;
let clause = vec![1, -2, 3];

assert_eq!(clause.size(), 3);
assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
assert!(clause.satisfied_by(&[None, Some(true), None, None]));
assert!(!clause.satisfied_by(&[Some(true), Some(false), Some(true), Some(false)]));
```
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// The canonical representation of a formula, as a sequence of clauses.
pub type Formula = Vec<CClause>;

/// Something which has methods for iterating over the literals of a clause, etc.
pub trait Clause {
    /// An iterator over all literals in the clause, in the order they are stored.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over the atoms of the clause, in the order they are stored.
    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.literals().map(|literal| literal.atom())
    }

    /// A string of the clause in DIMACS form, optionally terminated with a `0`.
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    /// Whether some literal of the clause is true on the given valuation, indexed by atom.
    fn satisfied_by(&self, valuation: &[Option<bool>]) -> bool {
        self.literals().any(|literal| {
            let value = valuation.get(literal.atom() as usize).copied().flatten();
            literal.value_on(value) == Some(true)
        })
    }
}

impl Clause for [CLiteral] {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Clause for CClause {
    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}
