/// Counts for various things which count, from a single query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every decision made during a search.
    pub decisions: usize,

    /// A count of literals assigned by unit propagation.
    pub propagations: usize,

    /// A count of falsified clauses found during a search.
    pub conflicts: usize,

    /// A count of models found.
    pub models: usize,

    /// A count of resolvents retained during resolution.
    pub resolvents: usize,
}
