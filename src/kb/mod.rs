/*!
The knowledge base, an accumulating conjunction of clauses.

Expressions given to a knowledge base are [compiled](crate::compile) to clauses over the atoms of the knowledge base.
Atoms are allocated as needed, and the [origin](AtomOrigin) of each atom is recorded so models may be read back in terms of symbols.

Queries never modify the knowledge base:
- [satisfiable](KnowledgeBase::satisfiable) determines whether the clauses have some model, using the configured [procedure](crate::config::Procedure).
- [models](KnowledgeBase::models) enumerates every model.
- [entails](KnowledgeBase::entails) checks whether some expression holds in every model, by refutation on a copy.

A knowledge base is monotone: adding a clause never turns an unsatisfiable knowledge base satisfiable.

```rust
# use propkb::{config::Config, kb::{ClauseOk, KnowledgeBase}, symbols::Session};
let session = Session::default();
let p = session.boolean("p").unwrap();

let mut kb = KnowledgeBase::from_config(Config::default());
assert_eq!(kb.add_clause([p.expr(), !&p]), Ok(ClauseOk::Tautology));
assert_eq!(kb.satisfiable(), Ok(true));

kb.add_clause([&p]).unwrap();
kb.add_clause([!&p]).unwrap();
assert_eq!(kb.satisfiable(), Ok(false));
```

# Snapshots

For repeated refutation checks against a common base, a [snapshot](KnowledgeBase::snapshot) may be taken before trial clauses are added, and [restored](KnowledgeBase::restore) after.
Knowledge bases are also [Clone], and distinct instances share nothing.
*/

mod counters;
pub use counters::Counters;

pub mod dimacs;

mod model;
pub use model::{Model, Models};

use std::collections::HashMap;

use crate::{
    compile::Encoding,
    config::{Config, Procedure},
    misc::log::targets,
    procedures::{resolution, search::Search},
    structures::{
        atom::{Atom, TOP_ATOM},
        clause::{normalise, CClause},
        literal::{CLiteral, Literal},
    },
    symbols::{Expr, Symbol, SymbolKind},
    types::err::{self, ErrorKind},
};

/// What an atom stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AtomOrigin {
    /// The atom fixed to true.
    Top,

    /// A boolean symbol.
    Boolean(Symbol),

    /// An integer symbol taking a value.
    Indicator(Symbol, i64),

    /// Some fresh atom introduced during compilation.
    Auxiliary,
}

/// Ok results of adding a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added.
    Added,

    /// The clause was a tautology, and so was not added.
    Tautology,
}

/// The answer to a satisfiability query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    Satisfiable,
    Unsatisfiable,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A report, together with counts from the query which produced the report.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub report: Report,
    pub counters: Counters,
}

/// A knowledge base.
#[derive(Clone)]
pub struct KnowledgeBase {
    /// The configuration of the knowledge base.
    pub config: Config,

    /// The origin of each atom, indexed by atom.
    pub(crate) atoms: Vec<AtomOrigin>,

    /// The atom of each boolean symbol.
    pub(crate) boolean_atoms: HashMap<Symbol, Atom>,

    /// Indicator encodings of integer expressions.
    pub(crate) encodings: HashMap<Expr, Encoding>,

    /// The result atom of each comparison.
    pub(crate) comparisons: HashMap<Expr, Atom>,

    /// Keys of `encodings`, in order of insertion.
    encoded: Vec<Expr>,

    /// Keys of `comparisons`, in order of insertion.
    compared: Vec<Expr>,

    /// The clauses, each normalised.
    pub(crate) clauses: Vec<CClause>,
}

/// The extent of a knowledge base before some addition, to roll back to if the addition fails.
struct Marks {
    atoms: usize,
    clauses: usize,
    encoded: usize,
    compared: usize,
}

/// A copy of the state of a knowledge base, to be [restored](KnowledgeBase::restore).
#[derive(Clone)]
pub struct Snapshot {
    kb: KnowledgeBase,
}

impl KnowledgeBase {
    /// A fresh knowledge base, containing only the atom fixed to true.
    pub fn from_config(config: Config) -> Self {
        KnowledgeBase {
            config,
            atoms: vec![AtomOrigin::Top],
            boolean_atoms: HashMap::default(),
            encodings: HashMap::default(),
            comparisons: HashMap::default(),
            encoded: Vec::default(),
            compared: Vec::default(),
            clauses: vec![vec![CLiteral::new(TOP_ATOM, true)]],
        }
    }

    /// Adds the disjunction of some boolean expressions as a clause.
    ///
    /// A single expression is a fact, and no expressions is the empty clause (so the knowledge base becomes unsatisfiable).
    ///
    /// If an error is returned the knowledge base is unchanged.
    pub fn add_clause<E: Into<Expr>>(
        &mut self,
        expressions: impl IntoIterator<Item = E>,
    ) -> Result<ClauseOk, ErrorKind> {
        let expressions = expressions.into_iter().map(|e| e.into()).collect::<Vec<_>>();

        let marks = self.marks();

        match self.compile_clause(&expressions) {
            Ok(clause) => {
                let result = self.store_clause(clause);
                log::info!(target: targets::KB, "{result:?} clause from {} expressions", expressions.len());
                Ok(result)
            }
            Err(e) => {
                self.rollback(marks);
                log::error!(target: targets::KB, "Failed to add clause: {e}");
                Err(e)
            }
        }
    }

    /// Registers a symbol with the knowledge base, without adding any clause about the symbol beyond those which define its atoms.
    ///
    /// Useful to ensure a symbol takes part in model enumeration even if no clause mentions the symbol.
    pub fn declare(&mut self, symbol: &Symbol) -> Result<(), ErrorKind> {
        let marks = self.marks();

        let result = match symbol.kind() {
            SymbolKind::Boolean => self.boolean_atom(symbol).map(|_| ()),
            SymbolKind::Integer(_) => self.encoding_of(&symbol.expr()).map(|_| ()),
        };

        if result.is_err() {
            self.rollback(marks);
        }
        result
    }

    /// Whether the knowledge base has some model.
    pub fn satisfiable(&self) -> Result<bool, ErrorKind> {
        let outcome = self.solve()?;
        Ok(outcome.report == Report::Satisfiable)
    }

    /// Determines satisfiability with the configured procedure, and returns the report together with counts from the procedure.
    pub fn solve(&self) -> Result<Outcome, ErrorKind> {
        let outcome = match self.config.procedure.value {
            Procedure::Backtracking => {
                let mut search = Search::new(&self.clauses, self.atom_count(), &self.config);
                if self.config.pure_literals.value {
                    search.assume_pure_literals();
                }
                let report = match search.next_model() {
                    Some(_) => Report::Satisfiable,
                    None => Report::Unsatisfiable,
                };
                Outcome {
                    report,
                    counters: search.counters,
                }
            }

            Procedure::Resolution => {
                let mut counters = Counters::default();
                let satisfiable = resolution::saturate(
                    &self.clauses,
                    self.config.resolution_limit.value,
                    &mut counters,
                )?;
                let report = match satisfiable {
                    true => Report::Satisfiable,
                    false => Report::Unsatisfiable,
                };
                Outcome { report, counters }
            }
        };

        log::info!(target: targets::KB, "{} by {} with {:?}", outcome.report, self.config.procedure.value, outcome.counters);
        Ok(outcome)
    }

    /// An iterator over every model of the knowledge base.
    ///
    /// Each call starts a fresh search, and models are found as the iterator is advanced.
    pub fn models(&self) -> Models<'_> {
        Models::new(self)
    }

    /// Whether every model of the knowledge base is a model of `expression`.
    ///
    /// Checked by refutation on a copy of the knowledge base, which is not modified.
    pub fn entails(&self, expression: impl Into<Expr>) -> Result<bool, ErrorKind> {
        let expression = expression.into();
        let mut trial = self.clone();
        trial.add_clause([!expression])?;
        Ok(!trial.satisfiable()?)
    }

    /// A copy of the present state of the knowledge base.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { kb: self.clone() }
    }

    /// Returns the knowledge base to the state of a snapshot.
    pub fn restore(&mut self, snapshot: Snapshot) {
        *self = snapshot.kb;
    }

    /// The clauses of the knowledge base.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// What an atom stands for, if the atom is part of the knowledge base.
    pub fn atom_origin(&self, atom: Atom) -> Option<&AtomOrigin> {
        self.atoms.get(atom as usize)
    }

    /// The atom of a boolean symbol, if the symbol has been compiled or declared.
    pub fn atom_of(&self, symbol: &Symbol) -> Option<Atom> {
        self.boolean_atoms.get(symbol).copied()
    }

    /// A fresh atom with the given origin, if the atom limit permits.
    pub(crate) fn fresh_atom(&mut self, origin: AtomOrigin) -> Result<Atom, ErrorKind> {
        let limit = self.config.atom_limit.value;
        if self.atoms.len() >= limit {
            log::error!(target: targets::KB, "Atom limit of {limit} reached");
            return Err(ErrorKind::from(err::Capacity::Atoms(limit)));
        }
        let atom = self.atoms.len() as Atom;
        self.atoms.push(origin);
        Ok(atom)
    }

    /// The atom of a boolean symbol, allocated if required.
    pub(crate) fn boolean_atom(&mut self, symbol: &Symbol) -> Result<Atom, ErrorKind> {
        if let Some(atom) = self.boolean_atoms.get(symbol) {
            return Ok(*atom);
        }
        let atom = self.fresh_atom(AtomOrigin::Boolean(symbol.clone()))?;
        self.boolean_atoms.insert(symbol.clone(), atom);
        Ok(atom)
    }

    /// Stores a clause, after simplifying with respect to the atom fixed to true.
    pub(crate) fn store_clause(&mut self, clause: CClause) -> ClauseOk {
        let top = CLiteral::new(TOP_ATOM, true);
        if clause.contains(&top) {
            return ClauseOk::Tautology;
        }
        let clause = clause.into_iter().filter(|literal| *literal != -top).collect();

        match normalise(clause) {
            None => ClauseOk::Tautology,
            Some(clause) => {
                if clause.is_empty() {
                    log::info!(target: targets::KB, "Empty clause added");
                }
                log::trace!(target: targets::KB, "Stored clause {clause:?}");
                self.clauses.push(clause);
                ClauseOk::Added
            }
        }
    }

    /// Caches the encoding of an integer expression.
    pub(crate) fn cache_encoding(&mut self, expression: &Expr, encoding: Encoding) {
        self.encoded.push(expression.clone());
        self.encodings.insert(expression.clone(), encoding);
    }

    /// Caches the result atom of a comparison.
    pub(crate) fn cache_comparison(&mut self, expression: &Expr, atom: Atom) {
        self.compared.push(expression.clone());
        self.comparisons.insert(expression.clone(), atom);
    }

    fn marks(&self) -> Marks {
        Marks {
            atoms: self.atoms.len(),
            clauses: self.clauses.len(),
            encoded: self.encoded.len(),
            compared: self.compared.len(),
        }
    }

    /// Removes every atom, clause, and cached compilation added after the marks.
    fn rollback(&mut self, marks: Marks) {
        self.atoms.truncate(marks.atoms);
        self.clauses.truncate(marks.clauses);

        let atom_mark = marks.atoms as Atom;
        self.boolean_atoms.retain(|_, atom| *atom < atom_mark);

        for expression in self.encoded.drain(marks.encoded..) {
            self.encodings.remove(&expression);
        }
        for expression in self.compared.drain(marks.compared..) {
            self.comparisons.remove(&expression);
        }
    }
}

#[cfg(test)]
mod kb_tests {
    use super::*;
    use crate::symbols::{Domain, Session};

    #[test]
    fn top_is_fixed() {
        let kb = KnowledgeBase::from_config(Config::default());
        assert_eq!(kb.atom_count(), 1);
        assert_eq!(kb.clause_count(), 1);
        assert_eq!(kb.atom_origin(TOP_ATOM), Some(&AtomOrigin::Top));
        assert_eq!(kb.satisfiable(), Ok(true));
    }

    #[test]
    fn failure_leaves_kb_unchanged() {
        let session = Session::default();
        let p = session.boolean("p").unwrap();
        let x = session.integer("x", None).unwrap();

        let mut kb = KnowledgeBase::from_config(Config::default());
        kb.add_clause([&p]).unwrap();

        let atoms = kb.atom_count();
        let clauses = kb.clause_count();

        // The boolean is allocated before the unbound integer is found.
        let q = session.boolean("q").unwrap();
        assert_eq!(
            kb.add_clause([q.expr(), x.gt(1)]),
            Err(ErrorKind::UnboundDomain("x".to_string()))
        );
        assert_eq!(kb.atom_count(), atoms);
        assert_eq!(kb.clause_count(), clauses);
        assert_eq!(kb.atom_of(&q), None);
    }

    #[test]
    fn atom_limit() {
        let session = Session::default();
        let x = session.integer("x", Some(Domain::new(0, 9))).unwrap();

        let mut config = Config::default();
        config.atom_limit.set(8).unwrap();
        let mut kb = KnowledgeBase::from_config(config);

        assert_eq!(
            kb.declare(&x),
            Err(ErrorKind::CapacityExceeded(err::Capacity::Atoms(8)))
        );
        assert_eq!(kb.atom_count(), 1);
        assert!(kb.encodings.is_empty());
    }
}
