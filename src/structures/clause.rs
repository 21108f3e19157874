//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use propkb::structures::literal::{CLiteral, Literal};
//! # use propkb::structures::clause::Clause;
//! let clause = vec![CLiteral::new(3, true),
//!                   CLiteral::new(1, false),
//!                   CLiteral::new(2, false)];
//!
//! assert_eq!(clause.size(), 3);
//!
//! let mut some_valuation = vec![Some(true); 4];
//!
//! some_valuation[3] = Some(false);
//! some_valuation[1] = None;
//! assert_eq!(clause.asserts(&some_valuation), Some(CLiteral::new(1, false)));
//!
//! some_valuation[1] = Some(true);
//! assert!(clause.unsatisfiable_on(&some_valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
//! - A clause containing some literal and its negation is a tautology, and is never stored.

use crate::structures::{
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// The literal asserted by the clause on a given valuation, if one such literal exists. \
    /// In detail, returns:
    /// - Some(*l*), if *l* has no value on the given valuation and for every other literal *l'* in the clause the polarity of *l'* conflicts with the value of the atom of *l'*.
    /// - None, otherwise.
    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral>;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// Returns whether every literal in the clause conflicts with the given valuation.
    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for CClause {
    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        let mut asserted_literal = None;
        for literal in self.iter() {
            match valuation.literal_value(*literal) {
                Some(true) => return None,
                Some(false) => continue,
                None if asserted_literal.is_none() => asserted_literal = Some(*literal),
                None => return None,
            }
        }
        asserted_literal
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .all(|literal| valuation.literal_value(*literal) == Some(false))
    }
}

/// The clause sorted, with duplicate literals removed, or none if the clause is a tautology.
///
/// ```rust
/// # use propkb::structures::literal::{CLiteral, Literal};
/// # use propkb::structures::clause::normalise;
/// let p = CLiteral::new(1, true);
/// let q = CLiteral::new(2, false);
///
/// assert_eq!(normalise(vec![q, p, q, p]), Some(vec![p, q]));
/// assert_eq!(normalise(vec![p, q, -p]), None);
/// assert_eq!(normalise(vec![]), Some(vec![]));
/// ```
pub fn normalise(mut clause: CClause) -> Option<CClause> {
    clause.sort_unstable();
    clause.dedup();
    // Sorted by atom, so complementary literals are adjacent.
    match clause.windows(2).any(|pair| pair[0].complements(&pair[1])) {
        true => None,
        false => Some(clause),
    }
}
