//! Models of a knowledge base, and the iterator through them.

use std::collections::BTreeMap;

use crate::{
    procedures::search::Search,
    structures::literal::Literal,
    symbols::{Symbol, SymbolKind},
};

use super::{Counters, KnowledgeBase};

/// A total assignment to the atoms of a knowledge base, satisfying every clause.
///
/// Values are read back in terms of symbols.
/// Auxiliary atoms are part of the model, though are only visible through the [valuation](Model::valuation).
pub struct Model<'kb> {
    kb: &'kb KnowledgeBase,
    valuation: Vec<bool>,
}

impl<'kb> Model<'kb> {
    /// The value of a boolean symbol, if the symbol is part of the knowledge base.
    pub fn value_of(&self, symbol: &Symbol) -> Option<bool> {
        let atom = self.kb.atom_of(symbol)?;
        self.valuation.get(atom as usize).copied()
    }

    /// The value of an integer symbol, decoded from the indicators of the symbol.
    ///
    /// None if the symbol is not part of the knowledge base.
    pub fn integer_value_of(&self, symbol: &Symbol) -> Option<i64> {
        let encoding = self.kb.encodings.get(&symbol.expr())?;
        let index = encoding.indicators.iter().position(|literal| {
            self.valuation.get(literal.atom() as usize).copied() == Some(literal.polarity())
        })?;
        encoding.domain.values().nth(index)
    }

    /// The value of every atom, indexed by atom.
    pub fn valuation(&self) -> &[bool] {
        &self.valuation
    }
}

impl std::ops::Index<&Symbol> for Model<'_> {
    type Output = bool;

    /// # Panics
    /// If the symbol is not a boolean symbol of the knowledge base.
    fn index(&self, symbol: &Symbol) -> &Self::Output {
        match self.value_of(symbol) {
            Some(true) => &true,
            Some(false) => &false,
            None => panic!("{symbol} is not a boolean symbol of the knowledge base"),
        }
    }
}

impl std::fmt::Display for Model<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut named = BTreeMap::new();

        for symbol in self.kb.boolean_atoms.keys() {
            if let Some(value) = self.value_of(symbol) {
                named.insert(symbol.name(), value.to_string());
            }
        }

        for expr in self.kb.encodings.keys() {
            if let crate::symbols::Expr::Symbol(symbol) = expr {
                if let SymbolKind::Integer(_) = symbol.kind() {
                    if let Some(value) = self.integer_value_of(symbol) {
                        named.insert(symbol.name(), value.to_string());
                    }
                }
            }
        }

        write!(f, "{{")?;
        for (index, (name, value)) in named.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// An iterator over the models of a knowledge base.
pub struct Models<'kb> {
    kb: &'kb KnowledgeBase,
    search: Search<'kb>,
}

impl<'kb> Models<'kb> {
    pub(super) fn new(kb: &'kb KnowledgeBase) -> Self {
        Models {
            kb,
            search: Search::new(&kb.clauses, kb.atom_count(), &kb.config),
        }
    }

    /// Counts from the search, so far.
    pub fn counters(&self) -> &Counters {
        &self.search.counters
    }
}

impl<'kb> Iterator for Models<'kb> {
    type Item = Model<'kb>;

    fn next(&mut self) -> Option<Self::Item> {
        let valuation = self.search.next_model()?;
        Some(Model {
            kb: self.kb,
            valuation,
        })
    }
}
