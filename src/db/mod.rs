//! Databases for holding information relevant to a solve.
//!
//!   - [The clause database](crate::db::clause)
//!     + A collection of clauses, each indexed by a [ClauseKey], together with the status of each clause on the current valuation.
//!       From an external perspective there are two kinds of clause:
//!       * Original clauses \
//!         Clauses added to the context from some external source (e.g. directly or through some DIMACS file).
//!       * Learned clauses \
//!         Clauses added to the context by [conflict analysis](crate::procedures::analysis).
//!         Every learned clause is a consequence of the original clauses.
//!   - [The occurrence database](crate::db::occurrences)
//!     + For each atom, the clauses in which the atom occurs, and with which polarity.
//!   - [The atom database](crate::db::atom)
//!     + The current valuation.
//!   - [The implication database](crate::db::implication)
//!     + For each valued atom, the decisions the value of the atom depends on.
//!   - [The trail](crate::db::trail)
//!     + Each assignment, in the order made, and the decision stack.

pub mod atom;
pub mod clause;
pub mod implication;
pub mod occurrences;
pub mod trail;

/// The key to a clause.
///
/// Keys are indicies into the sequence of clauses, with original clauses first and learned clauses after.
/// As no clause is ever removed, a key identifies the same clause for the lifetime of a context.
pub type ClauseKey = usize;

/// The index of a decision level.
///
/// Level 0 is the level before any decision has been made, and level *n* is the level of the *n*th decision on the decision stack.
pub type LevelIndex = u32;
