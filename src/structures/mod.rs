//! The abstract elements of a solve and their representation.
//!
//! - [Atoms](atom), aka. variables.
//! - [Literals](literal), atoms paired with a polarity.
//! - [Clauses](clause), disjunctions of literals, and formulas, conjunctions of clauses.
//! - [Valuations](valuation), partial functions from atoms to truth values.
//! - [Models](model), total functions from atoms to truth values which satisfy a formula.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod model;
pub mod valuation;
