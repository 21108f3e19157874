use std::str::FromStr;

/// Ways to combine the values of fuzzy symbols into the value of a [fuzzy knowledge base](crate::fuzzy::FuzzyKB).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Aggregation {
    /// The product of all values (the probabilistic t-norm).
    Product = 0,

    /// The least of all values (the Gödel t-norm).
    Minimum,

    /// The arithmetic mean of all values.
    Mean,
}

impl std::fmt::Display for Aggregation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Product => write!(f, "product"),
            Self::Minimum => write!(f, "minimum"),
            Self::Mean => write!(f, "mean"),
        }
    }
}

impl Aggregation {
    /// The minimum Aggregation type.
    pub const MIN: Aggregation = Aggregation::Product;

    /// The maximum Aggregation type.
    pub const MAX: Aggregation = Aggregation::Mean;
}

impl FromStr for Aggregation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(Self::Product),

            "minimum" => Ok(Self::Minimum),

            "mean" => Ok(Self::Mean),

            _unknown_string => Err(()),
        }
    }
}
