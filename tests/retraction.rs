mod common;

use common::{context_with, random_formula, RETRACTIONS};
use dpll_sat::{
    config::{Config, Retraction},
    context::Context,
    procedures::{
        analysis::AnalysisOk, conflict::Conflict, decision::DecisionOk,
        propagation::PropagationOk,
    },
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A formula whose first conflict depends on the decisions of 1 and 3, but not 2.
fn skipped_level() -> Context {
    let formula = vec![vec![-1, -3, 4], vec![-1, -3, -4], vec![1, 2]];
    context_with(Config::default(), 4, &formula)
}

fn decide_three(ctx: &mut Context) -> Conflict {
    for expected in [1, 2, 3] {
        assert_eq!(ctx.propagate_all(), None);
        assert_eq!(ctx.make_decision(), DecisionOk::Literal(expected));
    }
    match ctx.propagate_all() {
        Some(conflict) => conflict,
        None => panic!("Expected a conflict"),
    }
}

mod backjump {
    use super::*;

    #[test]
    fn learned_clause_and_target() {
        let mut ctx = skipped_level();
        let conflict = decide_three(&mut ctx);

        assert_eq!(conflict, Conflict { key: 1, atom: Some(4) });
        assert_eq!(
            ctx.conflict_dependencies(&conflict).into_iter().collect::<Vec<_>>(),
            vec![1, 3]
        );

        let analysis = ctx.conflict_analysis(&conflict);
        assert_eq!(
            analysis,
            AnalysisOk::LearnedClause {
                key: 3,
                reverse: 3,
                target: 1,
            }
        );
        assert_eq!(ctx.clause_db.get(3), Some([-1, -3].as_slice()));
    }

    #[test]
    fn intermediate_level_skipped() {
        let mut ctx = skipped_level();
        let conflict = decide_three(&mut ctx);

        let AnalysisOk::LearnedClause {
            key,
            reverse,
            target,
        } = ctx.conflict_analysis(&conflict)
        else {
            panic!("Expected a learned clause");
        };
        ctx.backjump(target, reverse, key);

        assert_eq!(ctx.trail.level(), 1);
        assert_eq!(ctx.trail.decisions().collect::<Vec<_>>(), vec![1]);
        assert_eq!(ctx.atom_db.value_of(1), Some(true));
        assert_eq!(ctx.atom_db.value_of(2), None);
        assert_eq!(ctx.atom_db.value_of(3), Some(false));
        assert_eq!(ctx.atom_db.value_of(4), None);

        // The reversed decision is implied, and depends on the remaining decision of the learned clause.
        let record = ctx.implication_db.record(3).unwrap();
        assert!(!record.decision);
        assert_eq!(record.level, 1);
        assert_eq!(record.dependencies.iter().copied().collect::<Vec<_>>(), vec![1]);

        assert!(ctx.implication_db.record(2).is_none());
        assert_eq!(ctx.implication_db.level_of(1), Some(1));
        assert_eq!(ctx.implication_db.level_of(2), None);
        assert!(ctx.clause_db.cache_is_consistent(ctx.atom_db.valuation()));
        assert_eq!(ctx.counters.backjumps, 1);
    }

    #[test]
    fn single_dependency_to_level_zero() {
        let formula = vec![vec![-1, 2], vec![-1, -2]];
        let mut ctx = context_with(Config::default(), 2, &formula);

        assert_eq!(ctx.propagate_all(), None);
        assert_eq!(ctx.make_decision(), DecisionOk::Literal(1));
        let conflict = ctx.propagate_all().unwrap();

        let analysis = ctx.conflict_analysis(&conflict);
        assert_eq!(
            analysis,
            AnalysisOk::LearnedClause {
                key: 2,
                reverse: 1,
                target: 0,
            }
        );

        ctx.backjump(0, 1, 2);
        assert!(!ctx.trail.decision_is_made());
        assert_eq!(ctx.atom_db.value_of(1), Some(false));
        assert!(ctx.implication_db.dependencies_of(1).unwrap().is_empty());
    }

    #[test]
    fn fundamental_conflict() {
        let formula = vec![vec![1], vec![-1, 2], vec![-1, -2]];
        let mut ctx = context_with(Config::default(), 2, &formula);

        let conflict = ctx.propagate_all().unwrap();
        assert!(!ctx.trail.decision_is_made());
        assert_eq!(ctx.conflict_analysis(&conflict), AnalysisOk::FundamentalConflict);
        assert_eq!(ctx.clause_db.clause_count(), 3);
    }
}

mod backtrack {
    use super::*;

    #[test]
    fn flip_most_recent() {
        let formula = vec![vec![-1, -3, 4], vec![-1, -3, -4], vec![1, 2]];
        let mut ctx = context_with(Config::with_retraction(Retraction::Backtrack), 4, &formula);
        decide_three(&mut ctx);

        assert_eq!(ctx.backtrack(), Some(-3));
        assert_eq!(ctx.trail.level(), 2);
        assert_eq!(ctx.atom_db.value_of(2), Some(true));
        assert_eq!(ctx.atom_db.value_of(3), Some(false));
        assert_eq!(ctx.atom_db.value_of(4), None);
        assert!(ctx.implication_db.is_empty());
        assert_eq!(ctx.clause_db.clause_count(), 3);
    }

    #[test]
    fn flipped_decisions_are_passed_over() {
        let formula = vec![vec![1, 2]];
        let mut ctx = context_with(Config::with_retraction(Retraction::Backtrack), 2, &formula);

        assert_eq!(ctx.make_decision(), DecisionOk::Literal(1));
        assert_eq!(ctx.make_decision(), DecisionOk::Literal(2));

        assert_eq!(ctx.backtrack(), Some(-2));
        assert_eq!(ctx.trail.level(), 1);

        // The flip of 2 is undone with the decision of 1.
        assert_eq!(ctx.backtrack(), Some(-1));
        assert_eq!(ctx.trail.level(), 0);
        assert_eq!(ctx.atom_db.value_of(2), None);

        assert_eq!(ctx.backtrack(), None);
    }
}

mod inverse {
    use super::*;

    #[test]
    fn full_unwind_restores_fresh_state() {
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..200 {
            let atoms = rng.gen_range(1..=8);
            let clauses = rng.gen_range(1..=24);
            let formula = random_formula(&mut rng, atoms, clauses, 3);

            for retraction in RETRACTIONS {
                let mut ctx = context_with(Config::with_retraction(retraction), atoms, &formula);

                let fresh_cache = ctx.clause_db.cache();
                let fresh_valuation = ctx.atom_db.valuation().to_vec();

                'search: loop {
                    if ctx.propagate_all().is_some() {
                        break 'search;
                    }
                    match ctx.make_decision() {
                        DecisionOk::Literal(_) => {}
                        DecisionOk::Conflict(_) | DecisionOk::Exhausted => break 'search,
                    }
                }

                ctx.unwind_trail(0);

                assert_eq!(ctx.clause_db.cache(), fresh_cache);
                assert_eq!(ctx.atom_db.valuation(), fresh_valuation.as_slice());
                assert!(ctx.trail.is_empty());
                assert!(!ctx.trail.decision_is_made());
                assert!(ctx.implication_db.is_empty());
            }
        }
    }

    #[test]
    fn unassign_tail() {
        let formula = vec![vec![1, 2], vec![-2, 3]];
        let mut ctx = context_with(Config::default(), 3, &formula);
        let fresh_cache = ctx.clause_db.cache();

        assert_eq!(ctx.make_decision(), DecisionOk::Literal(1));
        assert_eq!(ctx.make_decision(), DecisionOk::Literal(2));
        assert_eq!(ctx.propagate(), PropagationOk::Implied(3));

        ctx.unassign(3);
        ctx.unassign(2);
        ctx.unassign(1);

        assert_eq!(ctx.clause_db.cache(), fresh_cache);
        assert!(ctx.trail.is_empty());
    }

    #[test]
    #[should_panic]
    fn unassign_other_than_tail() {
        let formula = vec![vec![1, 2]];
        let mut ctx = context_with(Config::default(), 2, &formula);

        let _ = ctx.make_decision();
        let _ = ctx.make_decision();
        ctx.unassign(1);
    }
}

mod confluence {
    use super::*;

    #[test]
    fn reversed_clause_order() {
        let mut rng = StdRng::seed_from_u64(29);

        for _ in 0..300 {
            let atoms = rng.gen_range(2..=10);
            let clauses = rng.gen_range(1..=30);
            let formula = random_formula(&mut rng, atoms, clauses, 3);
            let mut reversed = formula.clone();
            reversed.reverse();

            let mut ctx = context_with(Config::default(), atoms, &formula);
            let mut reversed_ctx = context_with(Config::default(), atoms, &reversed);

            // Propagation from the same valuations, before and after each decision.
            loop {
                let conflict = ctx.propagate_all();
                let reversed_conflict = reversed_ctx.propagate_all();

                assert_eq!(conflict.is_some(), reversed_conflict.is_some(), "{formula:?}");
                if conflict.is_some() {
                    break;
                }
                assert_eq!(ctx.atom_db.valuation(), reversed_ctx.atom_db.valuation());

                let decision = ctx.make_decision();
                assert_eq!(decision, reversed_ctx.make_decision());
                match decision {
                    DecisionOk::Literal(_) => {}
                    DecisionOk::Conflict(_) | DecisionOk::Exhausted => break,
                }
            }
        }
    }
}
