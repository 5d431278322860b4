//! Recovery from a conflict, by a non-chronological backjump.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Here, a backjump follows [conflict analysis](crate::procedures::analysis), which returns a learned clause, the decision to reverse, and a target level.
//! The target level is the second highest level of the decisions the conflict depends on, and so may be much lower than the current level.
//!
//! A backjump to level *t*:
//! - Retracts every entry of the trail from the decision of level *t + 1* onwards, and so every decision above level *t* together with every consequence of those decisions.
//! - Values the reversed decision with the opposite value, as an implied (rather than decided) value.
//!
//! The reversed value is exactly the value asserted by the learned clause, which is unit after the retraction.
//! So, the reversed value is recorded as a propagation from the learned clause, and depends on the remaining decisions of the clause.
//!
//! Any intermediate decision levels are skipped over, as the conflict did not depend on the decisions of those levels.
//!
//! # Example
//!
//! ```rust,ignore
//! if let AnalysisOk::LearnedClause { key, reverse, target } = result {
//!     self.backjump(target, reverse, key);
//! }
//! ```
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backjumping.

use crate::{
    context::Context,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    procedures::assignment::AssignmentSource,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

impl Context {
    /// Backjumps to the given target level, and values `reverse` false as a consequence of the clause at `key`.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    ///
    /// # Panics
    /// If the target level is not below the current level.
    pub fn backjump(&mut self, target: LevelIndex, reverse: Atom, key: ClauseKey) {
        let Some(position) = self.trail.level_position(target + 1) else {
            panic!(
                "! Backjump to level {target} from level {}",
                self.trail.level()
            );
        };

        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}, reversing {reverse}", self.trail.level());

        self.unwind_trail(position);
        self.counters.backjumps += 1;

        let reversed = CLiteral::new(reverse, false);
        if let Some(falsified) = self.assign(reversed, AssignmentSource::Propagation(key)) {
            // Found again by the scan for false clauses before propagation.
            log::trace!(target: targets::BACKJUMP, "{reversed} falsified clause {falsified}");
        }
    }
}
