/*!
Boolean constraint propagation, aka. unit propagation.

For each literal *l* on the trail which has not been propagated, each clause containing ¬*l* is examined, as only those clauses may have become unit or falsified by the valuation of *l*:
- If the clause is satisfied, or has at least two literals without a value, nothing follows.
- If every literal of the clause conflicts with the valuation, the clause is falsified.
- Otherwise, the clause asserts its single literal without a value, and that literal is valued.

Propagation continues until either every literal on the trail has been propagated, or some clause is falsified.
*/

use crate::{misc::log::targets, structures::clause::Clause};

use super::search::{literal_index, Search};

impl Search<'_> {
    /// Propagates every literal on the trail from the head onwards.
    ///
    /// Returns the index of a falsified clause, if one is found.
    pub fn propagate(&mut self) -> Result<(), usize> {
        let clauses = self.clauses;

        while let Some(literal) = self.trail.get(self.head).copied() {
            self.head += 1;

            let occurrences = literal_index(-literal);
            for position in 0..self.occurrences[occurrences].len() {
                let clause_index = self.occurrences[occurrences][position];
                let clause = &clauses[clause_index];

                match clause.asserts(&self.valuation) {
                    Some(consequence) => {
                        log::trace!(target: targets::PROPAGATION, "{consequence} from clause {clause_index}");
                        self.counters.propagations += 1;
                        self.assign(consequence);
                    }

                    None => {
                        if clause.unsatisfiable_on(&self.valuation) {
                            return Err(clause_index);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod bcp_tests {
    use crate::{
        config::Config,
        procedures::search::Search,
        structures::literal::{CLiteral, Literal},
    };

    #[test]
    fn chain() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);
        let r = CLiteral::new(2, true);

        let clauses = vec![vec![-p, q], vec![-q, r]];
        let mut search = Search::new(&clauses, 3, &Config::default());

        search.assign(p);
        assert_eq!(search.propagate(), Ok(()));
        assert_eq!(search.valuation, vec![Some(true); 3]);
        assert_eq!(search.counters.propagations, 2);
    }

    #[test]
    fn conflict() {
        let p = CLiteral::new(0, true);
        let q = CLiteral::new(1, true);

        let clauses = vec![vec![-p, q], vec![-p, -q]];
        let mut search = Search::new(&clauses, 2, &Config::default());

        search.assign(p);
        assert_eq!(search.propagate(), Err(1));
    }
}
