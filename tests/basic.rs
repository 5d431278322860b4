use dpll_sat::{
    config::Config,
    context::Context,
    reports::Report,
    types::err::{BuildError, ErrorKind, ModelError, StateError},
};

mod basic {
    use dpll_sat::structures::clause::Clause;

    use super::*;

    #[test]
    fn one_literal() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1]).is_ok());
        assert_eq!(the_context.solve(), Report::Satisfiable);
        assert_eq!(the_context.report(), Report::Satisfiable);
    }

    #[test]
    fn conflict() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1, 2]).is_ok());
        assert!(the_context.add_clause([-1, -2]).is_ok());
        assert!(the_context.add_clause([1, -2]).is_ok());
        assert!(the_context.add_clause([-1, 2]).is_ok());

        assert_eq!(the_context.solve(), Report::Unsatisfiable);
        assert!(matches!(the_context.report(), Report::Unsatisfiable));
    }

    #[test]
    fn propagated_value() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1, 2]).is_ok());
        assert!(the_context.add_clause([-1]).is_ok());

        assert!(the_context.check_sat());
        assert_eq!(the_context.counters.total_decisions, 0);

        let model = the_context.model().unwrap();
        assert_eq!(model.value_of(1), Some(false));
        assert_eq!(model.value_of(2), Some(true));
    }

    #[test]
    fn duplicates() {
        let mut the_context = Context::from_config(Config::default());
        let key = the_context.add_clause([1, 2, 2, 1]).unwrap();

        let the_clause = the_context.clause_db.get(key).unwrap();
        assert_eq!(the_clause.as_dimacs(true), "1 2 0");
    }

    #[test]
    fn tautology_kept() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1, -1]).is_ok());
        assert!(the_context.add_clause([-1, 2]).is_ok());

        assert_eq!(the_context.clause_db.clause_count(), 2);
        assert!(the_context.check_sat());
        assert!(the_context.model().unwrap().satisfies(&[vec![1, -1], vec![-1, 2]]));
    }

    #[test]
    fn empty_clause() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1, 2]).is_ok());
        assert!(the_context.add_clause(Vec::<i32>::default()).is_ok());

        assert_eq!(the_context.solve(), Report::Unsatisfiable);
        assert_eq!(the_context.counters.total_decisions, 0);
    }

    #[test]
    fn empty_formula() {
        let mut the_context = Context::from_config(Config::default());
        the_context.ensure_atoms(3);

        assert!(the_context.check_sat());
        let model = the_context.model().unwrap();
        assert_eq!(model.atom_count(), 3);
    }

    #[test]
    fn unassigned_value() {
        for unassigned_value in [true, false] {
            let config = Config {
                unassigned_value,
                ..Config::default()
            };
            let mut the_context = Context::from_config(config);
            assert!(the_context.add_clause([1]).is_ok());
            the_context.ensure_atoms(3);

            // The formula is satisfied after a single decision, on 2.
            assert!(the_context.check_sat());
            assert_eq!(the_context.counters.total_decisions, 1);

            let model = the_context.model().unwrap();
            assert_eq!(model.value_of(1), Some(true));
            assert_eq!(model.value_of(2), Some(true));
            assert_eq!(model.value_of(3), Some(unassigned_value));
        }
    }
}

mod errors {
    use super::*;

    #[test]
    fn zero_literal() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.add_clause([1, 0, 2]),
            Err(ErrorKind::Build(BuildError::ZeroLiteral))
        );
        assert_eq!(the_context.clause_db.clause_count(), 0);
    }

    #[test]
    fn atom_overflow() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.add_clause([i32::MIN]),
            Err(ErrorKind::Build(BuildError::AtomOverflow))
        );
    }

    #[test]
    fn model_before_solve() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1]).is_ok());

        assert_eq!(
            the_context.model(),
            Err(ErrorKind::Model(ModelError::NoModel))
        );
    }

    #[test]
    fn model_of_unsatisfiable() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1]).is_ok());
        assert!(the_context.add_clause([-1]).is_ok());

        assert!(!the_context.check_sat());
        assert_eq!(
            the_context.model(),
            Err(ErrorKind::Model(ModelError::NoModel))
        );
    }

    #[test]
    fn clause_after_solve() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1, 2]).is_ok());
        assert!(the_context.check_sat());

        assert_eq!(
            the_context.add_clause([-1]),
            Err(ErrorKind::State(StateError::Solved))
        );
    }

    #[test]
    fn repeat_solve() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause([1, 2]).is_ok());
        assert!(the_context.add_clause([-1, 2]).is_ok());

        assert_eq!(the_context.solve(), Report::Satisfiable);
        let decisions = the_context.counters.total_decisions;
        let model = the_context.model().unwrap();

        assert_eq!(the_context.solve(), Report::Satisfiable);
        assert_eq!(the_context.counters.total_decisions, decisions);
        assert_eq!(the_context.model().unwrap(), model);
    }
}
