use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of all atoms valued by propagation.
    pub total_propagations: usize,

    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of clauses learned from conflicts.
    pub learned_clauses: usize,

    /// A count of backjumps made.
    pub backjumps: usize,

    /// A count of chronological backtracks made.
    pub backtracks: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_decisions: 0,
            total_propagations: 0,
            total_conflicts: 0,

            learned_clauses: 0,
            backjumps: 0,
            backtracks: 0,

            total_iterations: 0,
            time: Duration::from_secs(0),
        }
    }
}

impl Counters {
    /// The total count of retractions, of either kind.
    pub fn retractions(&self) -> usize {
        self.backjumps + self.backtracks
    }
}
