use std::str::FromStr;

/// Procedures for determining satisfiability.
///
/// The procedures agree on every formula, though differ greatly in cost.
/// Enumeration of models always uses backtracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Procedure {
    /// Search through valuations, propagating unit clauses and backtracking on a falsified clause.
    Backtracking = 0,

    /// Saturate the formula under resolution, until either the empty clause is derived or no new clause follows.
    Resolution,
}

impl std::fmt::Display for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backtracking => write!(f, "backtracking"),
            Self::Resolution => write!(f, "resolution"),
        }
    }
}

impl Procedure {
    /// The minimum Procedure type.
    pub const MIN: Procedure = Procedure::Backtracking;

    /// The maximum Procedure type.
    pub const MAX: Procedure = Procedure::Resolution;
}

impl FromStr for Procedure {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backtracking" => Ok(Self::Backtracking),

            "resolution" => Ok(Self::Resolution),

            _unknown_string => Err(()),
        }
    }
}
