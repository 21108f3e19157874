use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use propkb::config::{Config, Procedure};

/// Options of the CLI which are not part of the configuration of a knowledge base.
#[derive(Debug, Default)]
pub struct CliOptions {
    pub path: PathBuf,
    pub model: bool,
    pub models: bool,
    pub count: bool,
}

pub fn cli() -> Command {
    Command::new("propkb_cli")
        .about("Reads a DIMACS CNF formula into a knowledge base, and reports on satisfiability or models.")

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to read."))

        .arg(Arg::new("model")
            .long("model")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Write a model, if one exists."))

        .arg(Arg::new("models")
            .long("models")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Write every model."))

        .arg(Arg::new("count")
            .long("count")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Write the count of models."))

        .arg(Arg::new("procedure")
            .long("procedure")
            .num_args(1)
            .value_parser(["backtracking", "resolution"])
            .required(false)
            .help("The procedure used to determine satisfiability.")
            .long_help("The procedure used to determine satisfiability.
Default: backtracking

Enumeration of models always uses backtracking."))

        .arg(Arg::new("seed")
            .long("seed")
            .num_args(1)
            .value_parser(value_parser!(u64))
            .required(false)
            .help("The seed for decisions."))

        .arg(Arg::new("polarity_lean")
            .long("polarity-lean")
            .num_args(1)
            .value_parser(value_parser!(f64))
            .required(false)
            .help("The probability of valuing a decision true, between 0 and 1."))

        .arg(Arg::new("random_decision_bias")
            .long("random-decision-bias")
            .num_args(1)
            .value_parser(value_parser!(f64))
            .required(false)
            .help("The probability of deciding on a random atom, between 0 and 1."))

        .arg(Arg::new("no_pure")
            .long("no-pure")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Do not assume pure literals when determining satisfiability."))
}

/// A configuration from the given matches, or a message on some invalid value.
pub fn config_from_args(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = Config::default();

    if let Some(name) = matches.get_one::<String>("procedure") {
        match name.parse::<Procedure>() {
            Ok(procedure) => config.procedure.value = procedure,
            Err(_) => return Err(format!("Unknown procedure: {name}")),
        }
    }

    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = *seed;
    }

    if let Some(lean) = matches.get_one::<f64>("polarity_lean") {
        if config.polarity_lean.set(*lean).is_err() {
            let (min, max) = config.polarity_lean.min_max();
            return Err(format!("polarity_lean requires a value between {min} and {max}"));
        }
    }

    if let Some(bias) = matches.get_one::<f64>("random_decision_bias") {
        if config.random_decision_bias.set(*bias).is_err() {
            let (min, max) = config.random_decision_bias.min_max();
            return Err(format!("random_decision_bias requires a value between {min} and {max}"));
        }
    }

    if matches.get_flag("no_pure") {
        config.pure_literals.value = false;
    }

    Ok(config)
}

pub fn options_from_args(matches: &ArgMatches) -> CliOptions {
    CliOptions {
        path: matches.get_one::<PathBuf>("path").cloned().unwrap_or_default(),
        model: matches.get_flag("model"),
        models: matches.get_flag("models"),
        count: matches.get_flag("count"),
    }
}
