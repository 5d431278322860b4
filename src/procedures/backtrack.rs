/*!
Recovery from a conflict, by a chronological backtrack.

When backtracking, no clause is learned.
Instead, the most recent decision is undone, together with every consequence of the decision, and the atom of the decision is valued with the opposite value.

The opposite value is implied rather than decided, as both values of the atom have then been tried below the decisions which remain.
So, each decision is flipped at most once.
And, as an implied value is undone like any other consequence, a later backtrack passes over the flipped atom to the next decision down, which allows a backtrack through a number of levels.

If no decision remains to be flipped, the formula is unsatisfiable.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    procedures::assignment::AssignmentSource,
    structures::literal::{CLiteral, Literal},
};

impl Context {
    /// Undoes the most recent decision and its consequences, and values the atom of the decision with the opposite value.
    ///
    /// Returns the flipped literal, or None if no decision had been made.
    pub fn backtrack(&mut self) -> Option<CLiteral> {
        let position = self.trail.level_position(self.trail.level())?;
        let decision = self.trail.entries()[position];

        self.unwind_trail(position);
        self.counters.backtracks += 1;

        let flipped = CLiteral::new(decision.atom, !decision.value);
        log::trace!(target: targets::BACKTRACK, "Flipped {flipped} at level {}", self.trail.level());

        if let Some(falsified) = self.assign(flipped, AssignmentSource::Backtrack) {
            log::trace!(target: targets::BACKTRACK, "{flipped} falsified clause {falsified}");
        }

        Some(flipped)
    }
}
