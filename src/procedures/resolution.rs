/*!
Determining satisfiability by resolution.

Given clauses *C* ∨ *l* and *D* ∨ ¬*l* the resolvent on *l* is *C* ∨ *D*.
A formula is unsatisfiable if and only if the empty clause is derivable by some sequence of resolution steps, and so a formula may be shown satisfiable by saturation: deriving every resolvent until no new clause follows.

Saturation is by the 'given clause' loop:
- Clauses are either *processed* or *unprocessed*, and at the start every clause is unprocessed.
- The shortest unprocessed clause is taken as the given clause.
  If some processed clause subsumes the given clause, the given clause is discarded.
- Otherwise, every resolvent of the given clause and a processed clause (or itself) is derived.
  Tautologies and clauses seen before are discarded, and the remainder are unprocessed.
- The given clause is then processed.

Saturation ends when either the empty clause is derived (so the formula is unsatisfiable) or no clause is unprocessed (so the formula is satisfiable).

As the count of clauses derived may be exponential in the count of atoms, the count of clauses retained is bounded by a [limit](crate::config::Config::resolution_limit).

```rust
# use propkb::kb::Counters;
# use propkb::procedures::resolution::saturate;
# use propkb::structures::literal::{CLiteral, Literal};
let p = CLiteral::new(1, true);
let q = CLiteral::new(2, true);

let clauses = vec![vec![p, q], vec![-p, q], vec![p, -q]];
let mut counters = Counters::default();
assert_eq!(saturate(&clauses, 100, &mut counters), Ok(true));

let clauses = vec![vec![p, q], vec![-p, q], vec![p, -q], vec![-p, -q]];
assert_eq!(saturate(&clauses, 100, &mut counters), Ok(false));
```
*/

use std::collections::HashSet;

use crate::{
    kb::Counters,
    misc::log::targets,
    structures::clause::{normalise, CClause},
    types::err,
};

/// The resolvent of two clauses on the literal `pivot` of `left`, if the resolvent is not a tautology.
///
/// Both clauses are assumed normalised.
pub fn resolve(left: &CClause, right: &CClause, pivot: usize) -> Option<CClause> {
    let literal = left[pivot];
    let mut resolvent = Vec::with_capacity(left.len() + right.len());
    resolvent.extend(left.iter().filter(|l| **l != literal));
    resolvent.extend(right.iter().filter(|l| **l != -literal));
    normalise(resolvent)
}

/// Whether every literal of `clause` is a literal of `other`.
///
/// Both clauses are assumed normalised.
pub fn subsumes(clause: &CClause, other: &CClause) -> bool {
    clause.len() <= other.len() && clause.iter().all(|literal| other.binary_search(literal).is_ok())
}

/// Whether the clauses are satisfiable, determined by saturation.
///
/// Clauses are assumed normalised.
pub fn saturate(
    clauses: &[CClause],
    limit: usize,
    counters: &mut Counters,
) -> Result<bool, err::Capacity> {
    if clauses.iter().any(|clause| clause.is_empty()) {
        return Ok(false);
    }

    let mut seen: HashSet<CClause> = clauses.iter().cloned().collect();
    let mut unprocessed: Vec<CClause> = seen.iter().cloned().collect();
    let mut processed: Vec<CClause> = Vec::default();

    while let Some(shortest) = unprocessed
        .iter()
        .enumerate()
        .min_by_key(|(_, clause)| clause.len())
        .map(|(index, _)| index)
    {
        let given = unprocessed.swap_remove(shortest);

        if processed.iter().any(|clause| subsumes(clause, &given)) {
            continue;
        }

        for partner in processed.iter().chain(std::iter::once(&given)) {
            for (pivot, literal) in given.iter().enumerate() {
                if partner.binary_search(&-*literal).is_err() {
                    continue;
                }

                let Some(resolvent) = resolve(&given, partner, pivot) else {
                    continue;
                };

                if resolvent.is_empty() {
                    counters.resolvents += 1;
                    log::debug!(target: targets::RESOLUTION, "Empty clause after {} resolvents", counters.resolvents);
                    return Ok(false);
                }

                if seen.insert(resolvent.clone()) {
                    counters.resolvents += 1;
                    log::trace!(target: targets::RESOLUTION, "Resolvent {resolvent:?}");
                    if seen.len() > limit {
                        log::error!(target: targets::RESOLUTION, "Limit of {limit} clauses exceeded");
                        return Err(err::Capacity::Resolution(limit));
                    }
                    unprocessed.push(resolvent);
                }
            }
        }

        processed.push(given);
    }

    log::debug!(target: targets::RESOLUTION, "Saturated with {} clauses", processed.len());
    Ok(true)
}
