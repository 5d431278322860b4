use clap::Parser;
use dpll_sat::config::{Config, Retraction};

/// Determines whether a formula is satisfiable or unsatisfiable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The DIMACS form CNF file to parse
    pub formula: std::path::PathBuf,

    /// How to recover from a conflict
    #[arg(long, default_value_t, value_enum)]
    pub retraction: Retraction,

    /// Display a satisfying valuation, if possible
    #[arg(short, long, default_value_t = false)]
    pub model: bool,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config::with_retraction(self.retraction)
    }
}
