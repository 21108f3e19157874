/*!
Configuration of a knowledge base.

All configuration for a knowledge base is contained within [Config], which is cloned into each knowledge base on creation.
Most options are [ConfigOption]s, carrying the bounds within which the option may be [set](ConfigOption::set).
*/

mod aggregation;
pub use aggregation::Aggregation;

mod config_option;
pub use config_option::ConfigOption;

mod procedure;
pub use procedure::Procedure;

use crate::{structures::atom::ATOM_MAX, symbols::Domain};

/// Representation for the probability of choosing `true` when branching.
pub type PolarityLean = f64;

/// Representation for the probability of branching on a random atom, rather than the least atom without a value.
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which procedure to use when determining satisfiability.
    pub procedure: ConfigOption<Procedure>,

    /// Assign pure literals before searching, when determining satisfiability.
    ///
    /// Never used during enumeration, as pure literals may be valued either way in some model.
    pub pure_literals: ConfigOption<bool>,

    /// The probability of branching first on `true` when choosing the value of an atom.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of branching on a random atom without a value.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// The seed for the source of randomness used when branching.
    pub seed: u64,

    /// The domain given to integer symbols declared without a domain.
    ///
    /// If none, compiling such a symbol is an error.
    pub default_domain: Option<Domain>,

    /// The largest domain an integer expression may have.
    pub domain_limit: ConfigOption<usize>,

    /// The most atoms a knowledge base may contain.
    pub atom_limit: ConfigOption<usize>,

    /// The most clauses retained while saturating a formula under resolution.
    pub resolution_limit: ConfigOption<usize>,

    /// How the values of fuzzy symbols are combined.
    pub fuzzy_aggregation: ConfigOption<Aggregation>,
}

impl Default for Config {
    /// The default configuration gives quick, deterministic, results for small knowledge bases.
    fn default() -> Self {
        Config {
            procedure: ConfigOption {
                name: "procedure",
                min: Procedure::MIN,
                max: Procedure::MAX,
                value: Procedure::Backtracking,
            },

            pure_literals: ConfigOption {
                name: "pure_literals",
                min: false,
                max: true,
                value: true,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            seed: 0,

            default_domain: None,

            domain_limit: ConfigOption {
                name: "domain_limit",
                min: 1,
                max: 1 << 16,
                value: 256,
            },

            atom_limit: ConfigOption {
                name: "atom_limit",
                min: 1,
                max: ATOM_MAX as usize,
                value: 1 << 20,
            },

            resolution_limit: ConfigOption {
                name: "resolution_limit",
                min: 1,
                max: usize::MAX,
                value: 100_000,
            },

            fuzzy_aggregation: ConfigOption {
                name: "fuzzy_aggregation",
                min: Aggregation::MIN,
                max: Aggregation::MAX,
                value: Aggregation::Product,
            },
        }
    }
}
