mod common;

use common::{load_dimacs, silent_formula_report, RETRACTIONS};
use dpll_sat::{config::Config, context::Context, reports::Report, structures::clause::Formula};

fn cnf_files(prefix: &str) -> Vec<std::path::PathBuf> {
    let pattern = format!("{}/tests/cnf/{prefix}_*.cnf", env!("CARGO_MANIFEST_DIR"));
    let paths = glob::glob(&pattern)
        .expect("Failed to read glob pattern")
        .flatten()
        .collect::<Vec<_>>();
    assert!(!paths.is_empty(), "No formulas match {pattern}");
    paths
}

mod dimacs {
    use super::*;

    #[test]
    fn satisfiable() {
        for path in cnf_files("sat") {
            for retraction in RETRACTIONS {
                let mut ctx = Context::from_config(Config::with_retraction(retraction));
                assert!(load_dimacs(&mut ctx, &path).is_ok());

                assert_eq!(ctx.solve(), Report::Satisfiable, "{retraction} on {path:?}");

                let formula = ctx.clause_db.original_clauses().cloned().collect::<Formula>();
                let model = ctx.model().unwrap();
                assert!(model.satisfies(&formula), "{retraction} on {path:?}");
                assert_eq!(model.atom_count(), ctx.atom_count());
            }
        }
    }

    #[test]
    fn unsatisfiable() {
        for path in cnf_files("unsat") {
            for retraction in RETRACTIONS {
                assert_eq!(
                    silent_formula_report(&path, &Config::with_retraction(retraction)),
                    Report::Unsatisfiable,
                    "{retraction} on {path:?}"
                );
            }
        }
    }

    #[test]
    fn satlib_terminator() {
        let path =
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/cnf/sat_satlib_style.cnf");
        let mut ctx = Context::from_config(Config::default());
        assert!(load_dimacs(&mut ctx, &path).is_ok());

        assert_eq!(ctx.atom_count(), 5);
        assert_eq!(ctx.clause_db.clause_count(), 4);
        assert_eq!(ctx.clause_db.get(3), Some([2, -3].as_slice()));
    }
}
