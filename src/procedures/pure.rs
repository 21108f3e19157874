//! Procedures to identify pure literals.
//!
//! A literal is pure with respect to a formula if the atom of the literal occurs in the formula only with the polarity of the literal.
//! Valuing a pure literal true never falsifies a clause, so if a formula has a model it has a model in which every pure literal is true.
//!
//! Pure literals are only used when determining satisfiability, as valuing a pure literal may exclude some models.
use std::collections::BTreeSet;

use crate::{
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
};

use super::search::Search;

// General order for pairs related to booleans is 0 is false, 1 is true
/// Given an iterator over clauses returns a pair of vectors of the atoms of pure literals relative to those clauses.
///
/// In other words, returns a pair where the first element contains all the atoms which occur only with negative polarity and the second element contains all the atoms which occur only with positive polarity.
pub fn pure_literals<'c>(clauses: impl Iterator<Item = &'c CClause>) -> (Vec<Atom>, Vec<Atom>) {
    let mut the_true: BTreeSet<Atom> = BTreeSet::new();
    let mut the_false: BTreeSet<Atom> = BTreeSet::new();

    for clause in clauses {
        for literal in clause.literals() {
            match literal.polarity() {
                true => the_true.insert(literal.atom()),
                false => the_false.insert(literal.atom()),
            };
        }
    }

    let pure_false: Vec<_> = the_false.difference(&the_true).copied().collect();
    let pure_true: Vec<_> = the_true.difference(&the_false).copied().collect();
    (pure_false, pure_true)
}

impl Search<'_> {
    /// Assumes every pure literal of the formula of the search.
    ///
    /// Only effective on a fresh search.
    pub fn assume_pure_literals(&mut self) {
        let (pure_false, pure_true) = pure_literals(self.clauses.iter());
        log::debug!(target: targets::PURE, "{} pure literals", pure_false.len() + pure_true.len());

        let negative = pure_false.into_iter().map(|atom| CLiteral::new(atom, false));
        let positive = pure_true.into_iter().map(|atom| CLiteral::new(atom, true));
        self.assumptions.extend(negative.chain(positive));
    }
}
