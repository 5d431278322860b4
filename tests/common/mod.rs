#![allow(dead_code)]

use std::{fs::File, io::BufReader, path::Path};

use dpll_sat::{
    config::{Config, Retraction},
    context::Context,
    reports::Report,
    structures::{
        atom::Atom,
        clause::{CClause, Clause, Formula},
        literal::{CLiteral, Literal},
    },
    types::err,
};
use rand::{rngs::StdRng, Rng};

pub const RETRACTIONS: [Retraction; 2] = [Retraction::Backjump, Retraction::Backtrack];

pub fn load_dimacs(context: &mut Context, path: &Path) -> Result<(), err::ErrorKind> {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };
    context.read_dimacs(BufReader::new(&file))?;
    Ok(())
}

pub fn silent_formula_report(path: &Path, config: &Config) -> Report {
    let mut ctx = Context::from_config(config.clone());
    if let Err(e) = load_dimacs(&mut ctx, path) {
        panic!("Error loading {path:?}: {e}");
    }
    ctx.solve()
}

/// A context with atoms `1..=atoms` and the given formula.
pub fn context_with(config: Config, atoms: Atom, formula: &Formula) -> Context {
    let mut ctx = Context::from_config(config);
    ctx.ensure_atoms(atoms);
    for clause in formula {
        if let Err(e) = ctx.add_clause(clause.clone()) {
            panic!("Failed to add {clause:?}: {e}");
        }
    }
    ctx
}

/// A random formula over atoms `1..=atoms`, with clauses of between one and `max_width` literals.
pub fn random_formula(rng: &mut StdRng, atoms: Atom, clauses: usize, max_width: usize) -> Formula {
    (0..clauses)
        .map(|_| {
            let width = rng.gen_range(1..=max_width);
            (0..width)
                .map(|_| CLiteral::new(rng.gen_range(1..=atoms), rng.gen_bool(0.5)))
                .collect::<CClause>()
        })
        .collect()
}

/// Each full valuation over atoms `1..=atoms`, in canonical form.
pub fn all_valuations(atoms: Atom) -> impl Iterator<Item = Vec<Option<bool>>> {
    (0..(1_u64 << atoms)).map(move |bits| {
        std::iter::once(None)
            .chain((0..atoms).map(|index| Some(bits & (1 << index) != 0)))
            .collect()
    })
}

pub fn satisfies(valuation: &[Option<bool>], formula: &Formula) -> bool {
    formula.iter().all(|clause| clause.satisfied_by(valuation))
}

/// Every full valuation which satisfies the formula.
pub fn models(atoms: Atom, formula: &Formula) -> Vec<Vec<Option<bool>>> {
    all_valuations(atoms)
        .filter(|valuation| satisfies(valuation, formula))
        .collect()
}

/// Satisfiability of the formula, by a search through every valuation.
pub fn brute_force(atoms: Atom, formula: &Formula) -> bool {
    all_valuations(atoms).any(|valuation| satisfies(&valuation, formula))
}

/// As [brute_force], though with each valuation as a bitmask, so formulas over twenty or so atoms remain quick.
pub fn brute_force_bits(atoms: Atom, formula: &Formula) -> bool {
    let masks = formula
        .iter()
        .map(|clause| {
            clause.iter().fold((0_u64, 0_u64), |(positive, negative), literal| {
                let bit = 1_u64 << (literal.atom() - 1);
                match literal.polarity() {
                    true => (positive | bit, negative),
                    false => (positive, negative | bit),
                }
            })
        })
        .collect::<Vec<_>>();

    (0..(1_u64 << atoms)).any(|bits| {
        masks
            .iter()
            .all(|(positive, negative)| bits & positive != 0 || !bits & negative != 0)
    })
}

/// True if each of the given models satisfies the clause.
pub fn entailed_by(models: &[Vec<Option<bool>>], clause: &CClause) -> bool {
    models.iter().all(|model| clause.satisfied_by(model))
}

/// The pigeonhole formula for `pigeons` pigeons and `holes` holes.
///
/// The atom for pigeon *p* being in hole *h* is `p * holes + h + 1`.
pub fn pigeonhole(pigeons: Atom, holes: Atom) -> Formula {
    let atom = |pigeon: Atom, hole: Atom| (pigeon * holes + hole + 1) as CLiteral;

    let mut formula: Formula = Vec::default();
    for pigeon in 0..pigeons {
        formula.push((0..holes).map(|hole| atom(pigeon, hole)).collect());
    }
    for hole in 0..holes {
        for pigeon in 0..pigeons {
            for other in (pigeon + 1)..pigeons {
                formula.push(vec![-atom(pigeon, hole), -atom(other, hole)]);
            }
        }
    }
    formula
}
