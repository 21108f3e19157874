/*!
Compilation of expressions to clauses.

Each boolean expression is compiled to a single literal, together with some number of definitional clauses for any fresh atoms introduced:
- A boolean symbol is the positive literal of the atom of the symbol.
- A negation is the negation of the literal of the negated expression, so double negations cancel.
- A comparison `L op R` is the literal of a fresh *result* atom.

Integer expressions are compiled to an [Encoding]: one *indicator* literal for each value in the domain of the expression, exactly one of which is true in any model.
See [integer](self::integer) for details.

A result atom is defined by a clause for each pair of values `a` and `b` of `L` and `R`:
- `L = a ∧ R = b → Res`, if `a op b` holds.
- `L = a ∧ R = b → ¬Res`, otherwise.

As exactly one indicator of each side is true, the result atom has exactly the value of the comparison in every model.

Every encoding (and every result atom) is cached by the knowledge base, keyed by the structure of the expression.
So, if the same comparison or sum appears in multiple clauses it is compiled once.

Before any atom is allocated every expression is checked to be boolean, so a [type mismatch](crate::types::err::TypeMismatch) never leaves any trace.
Other failures are rolled back by the [knowledge base](crate::kb::KnowledgeBase::add_clause).
*/

pub mod integer;
pub use integer::Encoding;

use crate::{
    kb::{AtomOrigin, KnowledgeBase},
    misc::log::targets,
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    symbols::{Comparison, Expr, Sort},
    types::err::{ErrorKind, TypeMismatch},
};

impl KnowledgeBase {
    /// The clause of a disjunction of expressions, with any required definitional clauses stored.
    pub(crate) fn compile_clause(&mut self, expressions: &[Expr]) -> Result<CClause, ErrorKind> {
        for expression in expressions {
            match expression.sort()? {
                Sort::Boolean => {}
                Sort::Integer => {
                    log::error!(target: targets::COMPILE, "Integer expression {expression} as a disjunct");
                    return Err(ErrorKind::from(TypeMismatch::ExpectedBoolean));
                }
            }
        }

        let mut clause = Vec::with_capacity(expressions.len());
        for expression in expressions {
            clause.push(self.literal_of(expression)?);
        }
        Ok(clause)
    }

    /// The literal of a boolean expression.
    pub(crate) fn literal_of(&mut self, expression: &Expr) -> Result<CLiteral, ErrorKind> {
        match expression {
            Expr::Symbol(symbol) => match symbol.is_boolean() {
                true => Ok(CLiteral::new(self.boolean_atom(symbol)?, true)),
                false => Err(ErrorKind::from(TypeMismatch::ExpectedBoolean)),
            },

            Expr::Not(inner) => Ok(-self.literal_of(inner)?),

            Expr::Compare(comparison, left, right) => {
                if let Some(atom) = self.comparisons.get(expression) {
                    return Ok(CLiteral::new(*atom, true));
                }
                let atom = self.compile_comparison(*comparison, left, right)?;
                self.cache_comparison(expression, atom);
                log::debug!(target: targets::COMPILE, "Compiled {expression} to atom {atom}");
                Ok(CLiteral::new(atom, true))
            }

            Expr::Constant(_) | Expr::Sum(_, _) => Err(ErrorKind::from(TypeMismatch::ExpectedBoolean)),
        }
    }

    /// A result atom for `left comparison right`, with defining clauses stored.
    fn compile_comparison(
        &mut self,
        comparison: Comparison,
        left: &Expr,
        right: &Expr,
    ) -> Result<crate::structures::atom::Atom, ErrorKind> {
        let left = self.encoding_of(left)?;
        let right = self.encoding_of(right)?;

        let result = CLiteral::new(self.fresh_atom(AtomOrigin::Auxiliary)?, true);

        for (a, left_indicator) in left.domain.values().zip(&left.indicators) {
            for (b, right_indicator) in right.domain.values().zip(&right.indicators) {
                let conclusion = match comparison.holds(a, b) {
                    true => result,
                    false => -result,
                };
                self.store_clause(vec![-*left_indicator, -*right_indicator, conclusion]);
            }
        }

        Ok(result.atom())
    }
}

#[cfg(test)]
mod compile_tests {
    use super::*;
    use crate::{config::Config, symbols::Session};

    #[test]
    fn negation_cancels() {
        let session = Session::default();
        let p = session.boolean("p").unwrap();
        let mut kb = KnowledgeBase::from_config(Config::default());

        let plain = kb.literal_of(&p.expr()).unwrap();
        let twice = kb.literal_of(&!!&p).unwrap();
        let once = kb.literal_of(&!&p).unwrap();

        assert_eq!(plain, twice);
        assert_eq!(plain, -once);
    }

    #[test]
    fn comparisons_are_cached() {
        let session = Session::default();
        let x = session
            .integer("x", Some(crate::symbols::Domain::new(0, 2)))
            .unwrap();
        let mut kb = KnowledgeBase::from_config(Config::default());

        let first = kb.literal_of(&x.lt(1)).unwrap();
        let atoms = kb.atom_count();
        let second = kb.literal_of(&x.lt(1)).unwrap();

        assert_eq!(first, second);
        assert_eq!(kb.atom_count(), atoms);
        assert_ne!(first, kb.literal_of(&x.le(1)).unwrap());
    }

    #[test]
    fn integer_disjunct() {
        let session = Session::default();
        let x = session.integer("x", None).unwrap();
        let mut kb = KnowledgeBase::from_config(Config::default());

        assert_eq!(
            kb.compile_clause(&[x.expr()]),
            Err(ErrorKind::TypeMismatch(TypeMismatch::ExpectedBoolean))
        );
        assert_eq!(kb.atom_count(), 1);
    }
}
