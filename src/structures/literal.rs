//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity.
//!
//! The canonical representation of a literal is a (non-zero) integer, with the magnitude of the integer being the atom and the sign the polarity.
//! This is also the representation used by DIMACS.
//!
//! ```rust
//! # use dpll_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, false);
//!
//! assert_eq!(literal, -79);
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.polarity());
//! assert!(literal.negate().polarity());
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// Whether the literal is true, false, or undetermined, given some (optional) value of its atom.
    fn value_on(&self, value: Option<bool>) -> Option<bool> {
        value.map(|v| v == self.polarity())
    }
}

/// The canonical representation of a literal.
pub type CLiteral = i32;

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as CLiteral,
            false => -(atom as CLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}
