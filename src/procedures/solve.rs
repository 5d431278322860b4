//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! A solve is a depth-first search through partial valuations, cast as a machine with three states:
//!
//! - Searching
//!   + Propagation is exhausted. If some clause is false, the machine moves to the conflict state.
//!   + Otherwise, a decision is made. If every clause is then true, the formula is satisfiable.
//! - Conflict
//!   + If no decision has been made, the conflict does not depend on any decision and the formula is unsatisfiable.
//!   + Otherwise, the conflict is resolved by a [backjump](crate::procedures::backjump) (after [analysis](crate::procedures::analysis)) or a [backtrack](crate::procedures::backtrack), and the machine returns to searching.
//! - Done, with a report.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!                    +---------------+
//!          +-------->| make_decision |-----> satisfiable, if every clause is true
//!          |         +---------------+
//!          | no conflict     |
//!          |                 |
//!   +---------------+        |
//! ->| propagate_all |<-------+
//!   +---------------+
//!          | conflict
//!          ⌄
//!   +--------------------------+
//!   | analysis and backjump,   |-----> unsatisfiable, if no decision has been made
//!   | or backtrack             |
//!   +--------------------------+
//!          |
//!          +-----> propagate_all
//! ```
//!
//! A conflict is always resolved before a decision is made.
//! In particular, propagation stops at the first conflict found, and any clause false on the current valuation is found before further propagation.
//!
//! # Example
//!
//! ```rust
//! # use dpll_sat::config::{Config, Retraction};
//! # use dpll_sat::context::Context;
//! # use dpll_sat::reports::Report;
//! let formula = vec![vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]];
//!
//! let mut the_context = Context::from_formula(Config::default(), formula.clone()).unwrap();
//! assert_eq!(the_context.solve(), Report::Unsatisfiable);
//! assert!(the_context.counters.learned_clauses > 0);
//!
//! let config = Config::with_retraction(Retraction::Backtrack);
//! let mut the_context = Context::from_formula(config, formula).unwrap();
//! assert!(!the_context.check_sat());
//! assert_eq!(the_context.counters.learned_clauses, 0);
//! ```

use crate::{
    config::Retraction,
    context::{Context, ContextState},
    misc::log::targets::{self},
    procedures::{analysis::AnalysisOk, conflict::Conflict, decision::DecisionOk},
    reports::Report,
};

/// The states of the search machine.
enum SearchState {
    /// No conflict is known.
    Searching,

    /// A conflict has been found, and is yet to be resolved.
    Conflict(Conflict),

    /// The search is complete.
    Done(Report),
}

impl Context {
    /// Determines the satisfiability of the formula in the context, and returns a report.
    ///
    /// A solve which has completed is not repeated, and the same report is returned.
    pub fn solve(&mut self) -> Report {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => return self.report(),
            ContextState::Input | ContextState::Solving => {}
        }

        let total_time = std::time::Instant::now();
        self.state = ContextState::Solving;

        log::info!(target: targets::SOLVE, "Solve with {} atoms and {} clauses, by {}", self.atom_count(), self.clause_db.clause_count(), self.config.retraction);

        let mut state = SearchState::Searching;
        let report = 'solve_loop: loop {
            self.counters.total_iterations += 1;

            state = match state {
                SearchState::Searching => self.search_step(),
                SearchState::Conflict(conflict) => self.resolve_conflict(conflict),
                SearchState::Done(report) => break 'solve_loop report,
            };
        };

        self.counters.time = total_time.elapsed();
        self.state = match report {
            Report::Satisfiable => ContextState::Satisfiable,
            Report::Unsatisfiable => ContextState::Unsatisfiable,
            Report::Unknown => ContextState::Input,
        };

        log::info!(target: targets::SOLVE, "{report} after {} conflicts and {} decisions", self.counters.total_conflicts, self.counters.total_decisions);

        report
    }

    /// True if the formula of the context is satisfiable, and false otherwise.
    ///
    /// Solves the formula, if required.
    pub fn check_sat(&mut self) -> bool {
        self.solve() == Report::Satisfiable
    }

    fn search_step(&mut self) -> SearchState {
        if let Some(conflict) = self.propagate_all() {
            return SearchState::Conflict(conflict);
        }

        match self.make_decision() {
            DecisionOk::Conflict(conflict) => return SearchState::Conflict(conflict),
            DecisionOk::Literal(_) | DecisionOk::Exhausted => {}
        }

        if self.clause_db.all_satisfied() {
            return SearchState::Done(Report::Satisfiable);
        }

        SearchState::Searching
    }

    fn resolve_conflict(&mut self, conflict: Conflict) -> SearchState {
        self.counters.total_conflicts += 1;
        log::debug!(target: targets::SOLVE, "Conflict {} at level {}", self.counters.total_conflicts, self.trail.level());

        if !self.trail.decision_is_made() {
            return SearchState::Done(Report::Unsatisfiable);
        }

        match self.config.retraction {
            Retraction::Backjump => match self.conflict_analysis(&conflict) {
                AnalysisOk::FundamentalConflict => SearchState::Done(Report::Unsatisfiable),

                AnalysisOk::LearnedClause {
                    key,
                    reverse,
                    target,
                } => {
                    self.backjump(target, reverse, key);
                    SearchState::Searching
                }
            },

            Retraction::Backtrack => match self.backtrack() {
                Some(_) => SearchState::Searching,
                None => SearchState::Done(Report::Unsatisfiable),
            },
        }
    }
}
