/// Strategies for retracting assignments after a conflict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Retraction {
    #[default]
    /// Learn a clause from the decisions blamed for a conflict and jump back to the second highest level of those decisions
    Backjump,

    /// Flip the most recent untried decision, one level at a time, without learning
    Backtrack,
}

impl std::fmt::Display for Retraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backjump => write!(f, "backjump"),
            Self::Backtrack => write!(f, "backtrack"),
        }
    }
}
