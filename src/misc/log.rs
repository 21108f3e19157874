/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [interning](crate::symbols::Session)
    pub const SYMBOLS: &str = "symbols";

    /// Logs related to [compilation](crate::compile)
    pub const COMPILE: &str = "compile";

    /// Logs related to the clauses of a [knowledge base](crate::kb)
    pub const KB: &str = "kb";

    /// Logs related to [unit propagation](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [the search](crate::procedures::search)
    pub const SEARCH: &str = "search";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [pure literals](crate::procedures::pure)
    pub const PURE: &str = "pure";

    /// Logs related to [fuzzy evaluation](crate::fuzzy)
    pub const FUZZY: &str = "fuzzy";

    /// Logs related to [strategies](crate::strategy)
    pub const STRATEGY: &str = "strategy";

    /// Logs related to parsing
    pub const PARSE: &str = "parse";
}
