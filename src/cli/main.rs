#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::io::BufReader;

use propkb::{
    kb::{AtomOrigin, KnowledgeBase, Model, Report},
    symbols::Session,
};

mod parse;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli().get_matches();

    let config = match parse::config_from_args(&matches) {
        Ok(config) => config,
        Err(message) => {
            println!("c {message}");
            std::process::exit(1);
        }
    };
    let options = parse::options_from_args(&matches);

    println!("c Reading DIMACS file from {:?}", options.path);

    let file = match std::fs::File::open(&options.path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file");
            std::process::exit(1);
        }
    };

    let session = Session::default();
    let mut kb = KnowledgeBase::from_config(config);

    match kb.read_dimacs(&session, BufReader::new(&file)) {
        Ok(info) => {
            if let Some((atoms, clauses)) = info.expected {
                println!("c Expected {atoms} atoms and {clauses} clauses");
            }
            println!("c Read {} clauses", info.clauses);
        }
        Err(e) => {
            println!("c Parse error: {e}");
            std::process::exit(1);
        }
    }

    if options.models || options.count {
        let mut count = 0;
        for model in kb.models() {
            count += 1;
            if options.models {
                println!("v {}", valuation_string(&kb, &model));
            }
        }
        if options.count {
            println!("c {count} models");
        }
        report_and_exit(match count {
            0 => Report::Unsatisfiable,
            _ => Report::Satisfiable,
        });
    }

    let outcome = match kb.solve() {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(2);
        }
    };

    println!(
        "c {} decisions, {} propagations, {} conflicts, {} resolvents",
        outcome.counters.decisions,
        outcome.counters.propagations,
        outcome.counters.conflicts,
        outcome.counters.resolvents
    );

    if outcome.report == Report::Satisfiable && options.model {
        if let Some(model) = kb.models().next() {
            println!("v {}", valuation_string(&kb, &model));
        }
    }

    report_and_exit(outcome.report);
}

/// The model as a DIMACS valuation line, over the atoms read from the formula.
fn valuation_string(kb: &KnowledgeBase, model: &Model) -> String {
    let mut literals = Vec::default();
    for (atom, value) in model.valuation().iter().enumerate() {
        if let Some(AtomOrigin::Boolean(symbol)) = kb.atom_origin(atom as u32) {
            match value {
                true => literals.push(symbol.name().to_string()),
                false => literals.push(format!("-{}", symbol.name())),
            }
        }
    }
    literals.push("0".to_string());
    literals.join(" ")
}

/// Writes the report, and exits with the conventional SAT solver code.
fn report_and_exit(report: Report) -> ! {
    match report {
        Report::Satisfiable => {
            println!("s SATISFIABLE");
            std::process::exit(10)
        }
        Report::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            std::process::exit(20)
        }
    }
}
