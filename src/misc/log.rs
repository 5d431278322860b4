/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [propagation](crate::procedures::propagation)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [chronological backtracking](crate::procedures::backtrack)
    pub const BACKTRACK: &str = "backtrack";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to the [solve loop](crate::procedures::solve)
    pub const SOLVE: &str = "solve";
}
