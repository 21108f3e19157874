/*!
Methods for choosing the value of an atom.

The core decision procedure is straightforward:
- Find an atom which is not assigned a value, and assign either true or false.

By default the least atom without a value is chosen, and valued false.
With some [probability](crate::config::Config::random_decision_bias) a random atom without a value is chosen instead, and with some [probability](crate::config::Config::polarity_lean) the atom is valued true.

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.

As the source of randomness is seeded from the configuration, a search is deterministic for a given configuration.
*/

use rand::{seq::IteratorRandom, Rng};

use crate::structures::{
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

use super::search::Search;

impl Search<'_> {
    /// A literal to value, or none if every atom has a value.
    pub fn decide(&mut self) -> Option<CLiteral> {
        let atom = match self.rng.gen_bool(self.random_decision_bias) {
            true => self.valuation.unvalued_atoms().choose(&mut self.rng),
            false => self.valuation.unvalued_atoms().next(),
        }?;

        let polarity = self.rng.gen_bool(self.polarity_lean);
        Some(CLiteral::new(atom, polarity))
    }
}

#[cfg(test)]
mod decision_tests {
    use crate::{config::Config, procedures::search::Search, structures::clause::CClause};

    use super::*;

    #[test]
    fn least_atom_false() {
        let clauses: Vec<CClause> = vec![];
        let mut search = Search::new(&clauses, 3, &Config::default());

        search.assign(CLiteral::new(0, true));
        assert_eq!(search.decide(), Some(CLiteral::new(1, false)));

        search.assign(CLiteral::new(1, true));
        search.assign(CLiteral::new(2, true));
        assert_eq!(search.decide(), None);
    }

    #[test]
    fn lean_true() {
        let clauses: Vec<CClause> = vec![];
        let mut config = Config::default();
        config.polarity_lean.set(1.0).unwrap();
        let mut search = Search::new(&clauses, 2, &config);

        assert_eq!(search.decide(), Some(CLiteral::new(0, true)));
    }
}
