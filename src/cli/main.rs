#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;
use dpll_sat::{builder::ParserInfo, context::Context, reports::Report};

mod args;
mod formula;

use args::Args;
use formula::{open_formula, FormulaError};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let mut the_context = Context::from_config(args.config());

    println!("c Reading DIMACS file from {:?}", args.formula);
    let parsed = open_formula(&args.formula).and_then(|reader| {
        the_context
            .read_dimacs(reader)
            .map_err(FormulaError::Parse)
    });

    match parsed {
        Ok(info) => print_parser_info(&info, &the_context),
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    }

    let report = the_context.solve();

    if args.stats {
        print_stats(&the_context);
    }

    println!("s {report}");

    match report {
        Report::Satisfiable => {
            if args.model {
                match the_context.model() {
                    Ok(model) => println!("v {model} 0"),
                    Err(e) => println!("c Model error: {e}"),
                }
            }
            std::process::exit(10)
        }

        Report::Unsatisfiable => std::process::exit(20),

        Report::Unknown => std::process::exit(30),
    }
}

fn print_parser_info(info: &ParserInfo, context: &Context) {
    match (info.expected_atoms, info.expected_clauses) {
        (Some(atoms), Some(clauses)) => println!("c Declared:         {atoms} atoms, {clauses} clauses"),
        _ => println!("c No problem line"),
    }
    println!("c Read:             {} atoms, {} clauses", context.atom_count(), info.added_clauses);
}

fn print_stats(context: &Context) {
    let counters = &context.counters;
    println!("c Retraction:       {}", context.config.retraction);
    println!("c Decisions:        {}", counters.total_decisions);
    println!("c Propagations:     {}", counters.total_propagations);
    println!("c Conflicts:        {}", counters.total_conflicts);
    println!("c Learned clauses:  {}", counters.learned_clauses);
    println!("c Backjumps:        {}", counters.backjumps);
    println!("c Backtracks:       {}", counters.backtracks);
    println!("c Iterations:       {}", counters.total_iterations);
    println!("c Time:             {:.2?}", counters.time);
}
