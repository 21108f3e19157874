/*!
One-hot encodings of integer expressions.

An integer expression with a domain of *k* values is encoded by *k* indicator literals, where the *i*th indicator is true exactly when the expression takes the *i*th value of the domain.
That exactly one indicator is true is required by:
- A clause of every indicator (at least one).
- A clause of the negation of each pair of indicators (at most one).

The indicators of a constant are all the literal fixed to true, as the domain of a constant has a single value.

# Sums

The domain of a sum `A + B` is the closure of the domains of `A` and `B`, and the sum is given fresh indicators over that domain, related to the indicators of `A` and `B` by:
- `A = a ∧ B = b → S = a + b`, for each value `a` of `A` and `b` of `B`.
- `S = v ∧ A = a → B = v - a`, for each value `v` of `S` and `a` of `A`, or `¬(S = v ∧ A = a)` if `v - a` is not a value of `B`.
*/

use crate::{
    kb::{AtomOrigin, KnowledgeBase},
    misc::log::targets,
    structures::{
        atom::TOP_ATOM,
        literal::{CLiteral, Literal},
    },
    symbols::{Domain, Expr, Symbol},
    types::err::{self, ErrorKind, TypeMismatch},
};

/// The indicators of an integer expression.
#[derive(Clone, Debug)]
pub struct Encoding {
    /// The domain of the expression.
    pub domain: Domain,

    /// An indicator for each value of the domain, in increasing order of value.
    pub indicators: Vec<CLiteral>,
}

impl Encoding {
    /// The indicator of `value`, if `value` is in the domain.
    pub fn indicator(&self, value: i64) -> Option<CLiteral> {
        let index = self.domain.index_of(value)?;
        self.indicators.get(index).copied()
    }
}

impl KnowledgeBase {
    /// The encoding of an integer expression, compiled if not already cached.
    pub(crate) fn encoding_of(&mut self, expression: &Expr) -> Result<Encoding, ErrorKind> {
        if let Some(encoding) = self.encodings.get(expression) {
            return Ok(encoding.clone());
        }

        let encoding = match expression {
            Expr::Symbol(symbol) => self.encode_symbol(symbol)?,

            Expr::Constant(value) => Encoding {
                domain: Domain::singleton(*value),
                indicators: vec![CLiteral::new(TOP_ATOM, true)],
            },

            Expr::Sum(left, right) => self.encode_sum(left, right)?,

            Expr::Not(_) | Expr::Compare(_, _, _) => {
                return Err(ErrorKind::from(TypeMismatch::ExpectedInteger))
            }
        };

        log::debug!(target: targets::COMPILE, "Encoded {expression} over {}", encoding.domain);
        self.cache_encoding(expression, encoding.clone());
        Ok(encoding)
    }

    /// The domain of an integer symbol, falling back to the configured default.
    fn domain_of(&self, symbol: &Symbol) -> Result<Domain, ErrorKind> {
        if symbol.is_boolean() {
            return Err(ErrorKind::from(TypeMismatch::ExpectedInteger));
        }
        match symbol.domain().or(self.config.default_domain) {
            Some(domain) => Ok(domain),
            None => {
                log::error!(target: targets::COMPILE, "No domain for {symbol}");
                Err(ErrorKind::UnboundDomain(symbol.name().to_string()))
            }
        }
    }

    /// Ensures a domain is within the configured limit.
    fn check_domain(&self, domain: &Domain) -> Result<(), ErrorKind> {
        let limit = self.config.domain_limit.value;
        match domain.size() <= limit {
            true => Ok(()),
            false => {
                log::error!(target: targets::COMPILE, "Domain {domain} exceeds limit of {limit}");
                Err(ErrorKind::from(err::Capacity::Domain(limit)))
            }
        }
    }

    fn encode_symbol(&mut self, symbol: &Symbol) -> Result<Encoding, ErrorKind> {
        let domain = self.domain_of(symbol)?;
        self.check_domain(&domain)?;

        let mut indicators = Vec::with_capacity(domain.size());
        for value in domain.values() {
            let atom = self.fresh_atom(AtomOrigin::Indicator(symbol.clone(), value))?;
            indicators.push(CLiteral::new(atom, true));
        }
        self.exactly_one(&indicators);

        Ok(Encoding { domain, indicators })
    }

    fn encode_sum(&mut self, left: &Expr, right: &Expr) -> Result<Encoding, ErrorKind> {
        let left = self.encoding_of(left)?;
        let right = self.encoding_of(right)?;

        let Some(domain) = left.domain.sum(&right.domain) else {
            log::error!(target: targets::COMPILE, "Sum of {} and {} exceeds the range of i64", left.domain, right.domain);
            return Err(ErrorKind::from(err::Capacity::Range));
        };
        self.check_domain(&domain)?;

        let mut indicators = Vec::with_capacity(domain.size());
        for _ in domain.values() {
            let atom = self.fresh_atom(AtomOrigin::Auxiliary)?;
            indicators.push(CLiteral::new(atom, true));
        }
        self.exactly_one(&indicators);

        let sum = Encoding { domain, indicators };

        for (a, a_indicator) in left.domain.values().zip(&left.indicators) {
            for (b, b_indicator) in right.domain.values().zip(&right.indicators) {
                if let Some(s_indicator) = a.checked_add(b).and_then(|v| sum.indicator(v)) {
                    self.store_clause(vec![-*a_indicator, -*b_indicator, s_indicator]);
                }
            }
        }

        for (v, s_indicator) in sum.domain.values().zip(&sum.indicators) {
            for (a, a_indicator) in left.domain.values().zip(&left.indicators) {
                match v.checked_sub(a).and_then(|b| right.indicator(b)) {
                    Some(b_indicator) => {
                        self.store_clause(vec![-*s_indicator, -*a_indicator, b_indicator])
                    }
                    None => self.store_clause(vec![-*s_indicator, -*a_indicator]),
                };
            }
        }

        Ok(sum)
    }

    /// Stores clauses requiring exactly one of the given literals to be true.
    fn exactly_one(&mut self, literals: &[CLiteral]) {
        self.store_clause(literals.to_vec());
        for (index, first) in literals.iter().enumerate() {
            for second in &literals[index + 1..] {
                self.store_clause(vec![-*first, -*second]);
            }
        }
    }
}
