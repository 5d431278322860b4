//! Various procedures for mutating a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.
//!
//! A sketch of how the procedures fit together, as a single step of a [solve](crate::procedures::solve):
//!
//! ```rust,ignore
//! match self.propagate_all() {
//!     Some(conflict) => match self.config.retraction {
//!         Retraction::Backjump => match self.conflict_analysis(&conflict) {
//!             AnalysisOk::FundamentalConflict => return Report::Unsatisfiable,
//!             AnalysisOk::LearnedClause { key, reverse, target } => self.backjump(target, reverse, key),
//!         },
//!         Retraction::Backtrack => self.backtrack(),
//!     },
//!     None => self.make_decision(),
//! }
//! ```

pub mod analysis;
pub mod assignment;
pub mod backjump;
pub mod backtrack;
pub mod conflict;
pub mod decision;
pub mod propagation;
pub mod solve;
