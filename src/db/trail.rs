/*!
The trail: every assignment, in the order made.

Both decisions and consequences of decisions are recorded, so that any suffix of the trail can be undone exactly.

The positions of decisions on the trail are also recorded, and these form the decision stack.
The length of the decision stack is the current decision level, and the decision of level *n* (counting from 1) is the entry at the *n - 1*th recorded position.

```rust
# use dpll_sat::db::trail::{Trail, TrailEntry};
let mut trail = Trail::default();

trail.push(TrailEntry { atom: 2, decision: false, value: true });
trail.push(TrailEntry { atom: 1, decision: true, value: true });
trail.push(TrailEntry { atom: 3, decision: false, value: false });

assert_eq!(trail.level(), 1);
assert_eq!(trail.decision_at(1), Some(1));
assert_eq!(trail.level_position(1), Some(1));

assert_eq!(trail.pop().map(|entry| entry.atom), Some(3));
assert_eq!(trail.pop().map(|entry| entry.atom), Some(1));
assert_eq!(trail.level(), 0);
```
*/

use crate::{db::LevelIndex, structures::atom::Atom};

/// An entry on the trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailEntry {
    /// The atom valued.
    pub atom: Atom,

    /// Whether the value was a decision.
    pub decision: bool,

    /// The value given to the atom.
    pub value: bool,
}

/// The values given to atoms, in order, together with the position of each decision.
///
/// The decision level of the trail is the count of decisions on the trail, and level *n* begins at the position of the *n*th decision.
#[derive(Default)]
pub struct Trail {
    /// Every entry, in order of assignment.
    entries: Vec<TrailEntry>,

    /// The position on the trail of each decision, in order of decision.
    level_indicies: Vec<usize>,
}

impl Trail {
    /// Appends an entry to the trail, and opens a new decision level if the entry is a decision.
    pub fn push(&mut self, entry: TrailEntry) {
        if entry.decision {
            self.level_indicies.push(self.entries.len());
        }
        self.entries.push(entry);
    }

    /// Removes the most recent entry from the trail, and closes the top decision level if the entry is a decision.
    pub fn pop(&mut self) -> Option<TrailEntry> {
        let entry = self.entries.pop()?;
        if entry.decision {
            let position = self.level_indicies.pop();
            assert_eq!(
                position,
                Some(self.entries.len()),
                "! Decision stack out of sync with the trail"
            );
        }
        Some(entry)
    }

    /// The most recent entry, if any.
    pub fn tail(&self) -> Option<&TrailEntry> {
        self.entries.last()
    }

    /// Every entry, in order of assignment.
    pub fn entries(&self) -> &[TrailEntry] {
        &self.entries
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Returns true if some decision is active, false otherwise.
    pub fn decision_is_made(&self) -> bool {
        !self.level_indicies.is_empty()
    }

    /// The position on the trail of the decision of `level`, if the level exists.
    pub fn level_position(&self, level: LevelIndex) -> Option<usize> {
        match level {
            0 => None,
            _ => self.level_indicies.get(level as usize - 1).copied(),
        }
    }

    /// The atom decided at `level`, if the level exists.
    pub fn decision_at(&self, level: LevelIndex) -> Option<Atom> {
        self.level_position(level)
            .map(|position| self.entries[position].atom)
    }

    /// The atom of the most recent decision, or 0 if no decision has been made.
    pub fn last_decision(&self) -> Atom {
        self.decision_at(self.level()).unwrap_or(0)
    }

    /// The decision stack, as atoms, from level 1 upwards.
    pub fn decisions(&self) -> impl Iterator<Item = Atom> + '_ {
        self.level_indicies
            .iter()
            .map(|position| self.entries[*position].atom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(atom: Atom, decision: bool) -> TrailEntry {
        TrailEntry {
            atom,
            decision,
            value: true,
        }
    }

    #[test]
    fn levels_follow_decisions() {
        let mut trail = Trail::default();
        assert_eq!(trail.last_decision(), 0);

        trail.push(entry(4, false));
        trail.push(entry(1, true));
        trail.push(entry(5, false));
        trail.push(entry(2, true));

        assert_eq!(trail.level(), 2);
        assert_eq!(trail.last_decision(), 2);
        assert_eq!(trail.decisions().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(trail.level_position(2), Some(3));
        assert_eq!(trail.level_position(0), None);
        assert_eq!(trail.level_position(3), None);

        trail.pop();
        assert_eq!(trail.level(), 1);
        assert_eq!(trail.last_decision(), 1);
        assert_eq!(trail.tail(), Some(&entry(5, false)));
    }

    #[test]
    fn pop_everything() {
        let mut trail = Trail::default();
        trail.push(entry(1, true));
        trail.push(entry(2, false));

        while trail.pop().is_some() {}

        assert!(trail.is_empty());
        assert!(!trail.decision_is_made());
        assert!(trail.pop().is_none());
    }
}
