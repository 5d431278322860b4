//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! dpll_sat implements the DPLL decision procedure, extended with conflict-driven clause learning and non-chronological backjumping.
//! The search is a backtracking search over partial valuations, accelerated by unit propagation.
//!
//! The solver is deliberately minimal.
//! There are no restarts, no clause deletion, no activity based choice of atoms (decisions are made in increasing atom order), no watched literals, and no preprocessing.
//! What remains is a small, complete, and (hopefully) readable CDCL loop.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built from a [configuration](crate::config) and clauses are added either [programatically](crate::context::Context::add_clause), [all at once](crate::context::Context::from_formula), or through the [DIMACS](crate::context::Context::read_dimacs) representation of a formula.
//!
//! Internally a solve is viewed in terms of a handful of databases:
//! - A formula is stored in a [clause database](crate::db::clause), alongside a cached status of each clause on the current valuation.
//! - Which clauses an atom occurs in is stored in an [occurrence database](crate::db::occurrences).
//! - A valuation is stored in an [atom database](crate::db::atom).
//! - The decisions each value depends on are stored in an [implication database](crate::db::implication).
//! - The order in which atoms were valued is stored on a [trail](crate::db::trail).
//!
//! And, the algorithm is factored into a collection of [procedures].
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve).
//! - The [clause status cache](crate::db::clause), which is what propagation inspects.
//! - The [backjump](crate::procedures::backjump) procedure, which is where learning pays off.
//!
//! # Examples
//!
//! ```rust
//! # use dpll_sat::config::Config;
//! # use dpll_sat::context::Context;
//! # use dpll_sat::reports::Report;
//! let formula = vec![vec![1, 2], vec![-1, 2], vec![1, -2]];
//! let mut the_context = Context::from_formula(Config::default(), formula).unwrap();
//!
//! assert_eq!(the_context.solve(), Report::Satisfiable);
//!
//! let model = the_context.model().unwrap();
//! assert_eq!(model.value_of(1), Some(true));
//! assert_eq!(model.value_of(2), Some(true));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use dpll_sat::config::Config;
//! # use dpll_sat::context::Context;
//! # use dpll_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Report::Unsatisfiable);
//! assert!(the_context.model().is_err());
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is installed by the library.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to backjumping can be filtered with `RUST_LOG=backjump …` or,
//! - Logs of learnt clauses without any detail of propagation with `RUST_LOG=analysis=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
