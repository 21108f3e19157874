/*!
A fuzzy knowledge base, of named symbols with a degree of confidence.

Each [FuzzySymbol] pairs a name with a value in [0, 1].
A [FuzzyKB] records fuzzy symbols, and [aggregates](crate::config::Aggregation) the recorded values into a single value for the knowledge base.

Fuzzy symbols are independent of the [symbols](crate::symbols) of the propositional layer, and no clauses are involved.

```rust
# use propkb::{config::Config, fuzzy::{FuzzyKB, FuzzySymbol}};
let mut fuzzy_kb = FuzzyKB::from_config(&Config::default());
assert_eq!(fuzzy_kb.fuzzy_value(), 0.0);

fuzzy_kb.add_clause(FuzzySymbol::new("strong_hand", 0.5).unwrap());
fuzzy_kb.add_clause(FuzzySymbol::new("trump_lead", 0.5).unwrap());
assert_eq!(fuzzy_kb.fuzzy_value(), 0.25);

// A symbol with a recorded name replaces the recorded value.
fuzzy_kb.add_clause(FuzzySymbol::new("trump_lead", 1.0).unwrap());
assert_eq!(fuzzy_kb.fuzzy_value(), 0.5);

assert!(FuzzySymbol::new("overconfident", 1.5).is_err());
```
*/

use crate::{
    config::{Aggregation, Config},
    misc::log::targets,
    types::err::{ErrorKind, FuzzyError},
};

/// A named value in [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzySymbol {
    name: String,
    value: f64,
}

impl FuzzySymbol {
    /// A fuzzy symbol, if `value` is in [0, 1].
    pub fn new(name: &str, value: f64) -> Result<Self, ErrorKind> {
        match (0.0..=1.0).contains(&value) {
            true => Ok(FuzzySymbol {
                name: name.to_string(),
                value,
            }),
            false => {
                log::error!(target: targets::FUZZY, "Value {value} for {name} is outside [0, 1]");
                Err(ErrorKind::from(FuzzyError::OutOfRange(value)))
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// A collection of fuzzy symbols, at most one for each name.
#[derive(Clone, Debug)]
pub struct FuzzyKB {
    aggregation: Aggregation,
    symbols: Vec<FuzzySymbol>,
}

impl FuzzyKB {
    /// An empty fuzzy knowledge base, aggregating as configured.
    pub fn from_config(config: &Config) -> Self {
        FuzzyKB {
            aggregation: config.fuzzy_aggregation.value,
            symbols: Vec::default(),
        }
    }

    /// Records a fuzzy symbol, replacing any symbol with the same name.
    pub fn add_clause(&mut self, symbol: FuzzySymbol) {
        match self.symbols.iter_mut().find(|s| s.name == symbol.name) {
            Some(existing) => {
                log::trace!(target: targets::FUZZY, "{} from {} to {}", symbol.name, existing.value, symbol.value);
                existing.value = symbol.value;
            }
            None => {
                log::trace!(target: targets::FUZZY, "{} at {}", symbol.name, symbol.value);
                self.symbols.push(symbol)
            }
        }
    }

    /// The value of a recorded symbol.
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.symbols.iter().find(|s| s.name == name).map(|s| s.value)
    }

    /// The recorded symbols, in order of first record.
    pub fn symbols(&self) -> &[FuzzySymbol] {
        &self.symbols
    }

    /// The aggregate of every recorded value, or 0 if no symbol is recorded.
    pub fn fuzzy_value(&self) -> f64 {
        if self.symbols.is_empty() {
            return 0.0;
        }

        let values = self.symbols.iter().map(|symbol| symbol.value);
        match self.aggregation {
            Aggregation::Product => values.product::<f64>(),
            Aggregation::Minimum => values.fold(1.0, f64::min),
            Aggregation::Mean => values.sum::<f64>() / self.symbols.len() as f64,
        }
    }
}

#[cfg(test)]
mod fuzzy_tests {
    use super::*;

    fn fuzzy_kb(aggregation: Aggregation) -> FuzzyKB {
        let mut config = Config::default();
        config.fuzzy_aggregation.set(aggregation).unwrap();
        let mut fuzzy_kb = FuzzyKB::from_config(&config);
        for (name, value) in [("a", 0.5), ("b", 0.25), ("c", 1.0)] {
            fuzzy_kb.add_clause(FuzzySymbol::new(name, value).unwrap());
        }
        fuzzy_kb
    }

    #[test]
    fn aggregations() {
        assert_eq!(fuzzy_kb(Aggregation::Product).fuzzy_value(), 0.125);
        assert_eq!(fuzzy_kb(Aggregation::Minimum).fuzzy_value(), 0.25);
        let mean = fuzzy_kb(Aggregation::Mean).fuzzy_value();
        assert!((mean - 1.75 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bounds() {
        assert!(FuzzySymbol::new("zero", 0.0).is_ok());
        assert!(FuzzySymbol::new("one", 1.0).is_ok());
        assert_eq!(
            FuzzySymbol::new("negative", -0.1),
            Err(ErrorKind::Fuzzy(FuzzyError::OutOfRange(-0.1)))
        );
        assert!(FuzzySymbol::new("nan", f64::NAN).is_err());
    }
}
