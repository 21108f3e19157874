/*!
A backtracking search through the valuations of a formula.

# Overview

The search maintains a partial valuation, and a trail recording the order in which atoms were valued.
Some literals on the trail are decisions, and the remainder are consequences of unit propagation on earlier literals.

In outline:
- Propagate [unit](crate::procedures::bcp) consequences of the trail.
- If some clause is falsified, backtrack: undo the trail to the most recent decision which has not been flipped, and flip it.
  If every decision has been flipped the search is exhausted.
- Otherwise, if some atom has no value, [decide](crate::procedures::decision) on a value for the atom.
- Otherwise, the valuation is a model.

After a model is found, the search may be resumed by backtracking, as if the model were a conflict.
So, by repeated calls to [next_model](Search::next_model) every model of the formula is found, each exactly once.

Backtracking is chronological, and no clauses are learnt, so the search is best suited to small formulas.

```rust
# use propkb::config::Config;
# use propkb::procedures::search::Search;
# use propkb::structures::literal::{CLiteral, Literal};
let p = CLiteral::new(1, true);
let q = CLiteral::new(2, true);

// (p ∨ q) ∧ (¬p ∨ ¬q), over atoms 0, 1, and 2.
let clauses = vec![vec![p, q], vec![-p, -q]];
let mut search = Search::new(&clauses, 3, &Config::default());

let mut count = 0;
while let Some(model) = search.next_model() {
    assert!(model[1] != model[2]);
    count += 1;
}
// Atom 0 is free, so is valued either way.
assert_eq!(count, 4);
```
*/

use rand::SeedableRng;

use crate::{
    config::Config,
    generic::minimal_pcg::MinimalPCG32,
    kb::Counters,
    misc::log::targets,
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
};

/// A decision, and the length of the trail when the decision was made.
#[derive(Clone, Copy, Debug)]
pub(super) struct Decision {
    pub trail_index: usize,
    pub literal: CLiteral,

    /// Whether the decision is the flip of some earlier decision, and so has no alternative.
    pub flipped: bool,
}

/// The state of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// No valuation has been examined.
    Fresh,

    /// The valuation is a model, and the search may be resumed.
    Model,

    /// Every valuation has been examined.
    Exhausted,
}

/// A backtracking search.
pub struct Search<'f> {
    /// The formula.
    pub(super) clauses: &'f [CClause],

    /// For each literal, the indicies of clauses containing the literal.
    pub(super) occurrences: Vec<Vec<usize>>,

    pub(super) valuation: CValuation,

    /// Valued literals, in order of valuation.
    pub(super) trail: Vec<CLiteral>,

    /// The index of the first literal on the trail which has not been propagated.
    pub(super) head: usize,

    pub(super) decisions: Vec<Decision>,

    /// Literals valued before any decision, beyond those of unit clauses.
    pub(super) assumptions: Vec<CLiteral>,

    pub(super) rng: MinimalPCG32,

    pub(super) polarity_lean: f64,

    pub(super) random_decision_bias: f64,

    pub state: SearchState,

    pub counters: Counters,
}

/// The index of a literal in a structure with an entry for each literal.
pub(super) fn literal_index(literal: CLiteral) -> usize {
    2 * literal.atom() as usize + literal.polarity() as usize
}

/// A probability, or zero if the value is not a probability.
fn probability(value: f64) -> f64 {
    match (0.0..=1.0).contains(&value) {
        true => value,
        false => 0.0,
    }
}

impl<'f> Search<'f> {
    /// A fresh search through valuations of `atom_count` atoms for models of `clauses`.
    ///
    /// Every atom of every clause must be less than `atom_count`.
    pub fn new(clauses: &'f [CClause], atom_count: usize, config: &Config) -> Self {
        let mut occurrences = vec![Vec::default(); 2 * atom_count];
        for (index, clause) in clauses.iter().enumerate() {
            for literal in clause {
                occurrences[literal_index(*literal)].push(index);
            }
        }

        Search {
            clauses,
            occurrences,
            valuation: vec![None; atom_count],
            trail: Vec::with_capacity(atom_count),
            head: 0,
            decisions: Vec::default(),
            assumptions: Vec::default(),
            rng: MinimalPCG32::seed_from_u64(config.seed),
            polarity_lean: probability(config.polarity_lean.value),
            random_decision_bias: probability(config.random_decision_bias.value),
            state: SearchState::Fresh,
            counters: Counters::default(),
        }
    }

    /// The next model of the formula, as the value of each atom, if some model remains.
    pub fn next_model(&mut self) -> Option<Vec<bool>> {
        match self.state {
            SearchState::Exhausted => return None,

            SearchState::Model => {
                if !self.backtrack() {
                    return self.exhaust();
                }
            }

            SearchState::Fresh => {
                if !self.value_root() {
                    return self.exhaust();
                }
            }
        }

        loop {
            match self.propagate() {
                Err(clause_index) => {
                    self.counters.conflicts += 1;
                    log::trace!(target: targets::SEARCH, "Conflict on clause {clause_index}");
                    if !self.backtrack() {
                        return self.exhaust();
                    }
                }

                Ok(()) => match self.decide() {
                    Some(literal) => {
                        self.counters.decisions += 1;
                        log::trace!(target: targets::SEARCH, "Decision {literal}");
                        self.decisions.push(Decision {
                            trail_index: self.trail.len(),
                            literal,
                            flipped: false,
                        });
                        self.assign(literal);
                    }

                    None => {
                        self.state = SearchState::Model;
                        self.counters.models += 1;
                        log::debug!(target: targets::SEARCH, "Model {} found", self.counters.models);
                        let model = self
                            .valuation
                            .iter()
                            .map(|value| value.unwrap_or(false))
                            .collect();
                        return Some(model);
                    }
                },
            }
        }
    }

    fn exhaust(&mut self) -> Option<Vec<bool>> {
        log::debug!(target: targets::SEARCH, "Exhausted after {} models", self.counters.models);
        self.state = SearchState::Exhausted;
        None
    }

    /// Values the literals of unit clauses, and any assumptions.
    ///
    /// Returns false if the formula contains the empty clause, or some literal conflicts with another.
    fn value_root(&mut self) -> bool {
        let clauses = self.clauses;
        for clause in clauses {
            match clause.as_slice() {
                [] => {
                    log::debug!(target: targets::SEARCH, "Empty clause in formula");
                    return false;
                }
                [literal] => {
                    if !self.assign(*literal) {
                        return false;
                    }
                }
                _ => {}
            }
        }

        let assumptions = std::mem::take(&mut self.assumptions);
        for literal in assumptions {
            if !self.assign(literal) {
                return false;
            }
        }
        true
    }

    /// Values the atom of `literal` to match the polarity of `literal`.
    ///
    /// Returns false if the atom already has the opposite value.
    pub(super) fn assign(&mut self, literal: CLiteral) -> bool {
        let atom = literal.atom() as usize;
        match self.valuation[atom] {
            Some(value) => value == literal.polarity(),
            None => {
                self.valuation[atom] = Some(literal.polarity());
                self.trail.push(literal);
                true
            }
        }
    }

    /// Undoes the trail to the most recent decision with an alternative, and takes the alternative.
    ///
    /// Returns false if no decision has an alternative.
    fn backtrack(&mut self) -> bool {
        while let Some(decision) = self.decisions.pop() {
            self.undo_to(decision.trail_index);

            if !decision.flipped {
                let flip = -decision.literal;
                self.decisions.push(Decision {
                    trail_index: decision.trail_index,
                    literal: flip,
                    flipped: true,
                });
                self.assign(flip);
                return true;
            }
        }
        false
    }

    /// Removes every literal on the trail from `index` onwards, and the values of those literals.
    fn undo_to(&mut self, index: usize) {
        for literal in self.trail.drain(index..) {
            self.valuation[literal.atom() as usize] = None;
        }
        self.head = index;
    }
}
