use propkb::{
    config::{Config, Procedure},
    kb::KnowledgeBase,
    symbols::{Expr, Session, Symbol},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A random clause set, as (index, polarity) pairs, over `atoms` atoms.
fn random_formula(rng: &mut StdRng, atoms: usize, clauses: usize, width: usize) -> Vec<Vec<(usize, bool)>> {
    (0..clauses)
        .map(|_| {
            (0..width)
                .map(|_| (rng.gen_range(0..atoms), rng.gen_bool(0.5)))
                .collect()
        })
        .collect()
}

/// The count of valuations satisfying every clause, by exhaustion.
fn brute_force_count(atoms: usize, formula: &[Vec<(usize, bool)>]) -> usize {
    (0..1_usize << atoms)
        .filter(|valuation| {
            formula.iter().all(|clause| {
                clause
                    .iter()
                    .any(|(atom, polarity)| ((valuation >> atom) & 1 == 1) == *polarity)
            })
        })
        .count()
}

fn build(config: Config, symbols: &[Symbol], formula: &[Vec<(usize, bool)>]) -> KnowledgeBase {
    let mut kb = KnowledgeBase::from_config(config);
    for symbol in symbols {
        kb.declare(symbol).unwrap();
    }
    for clause in formula {
        let literals = clause
            .iter()
            .map(|(atom, polarity)| match polarity {
                true => symbols[*atom].expr(),
                false => !&symbols[*atom],
            })
            .collect::<Vec<Expr>>();
        kb.add_clause(literals).unwrap();
    }
    kb
}

const ATOMS: usize = 6;

mod procedures {
    use super::*;

    #[test]
    fn resolution_agrees_with_backtracking() {
        let mut rng = StdRng::seed_from_u64(7);

        for round in 0..60 {
            let session = Session::default();
            let symbols = (0..ATOMS)
                .map(|index| session.boolean(&format!("s{index}")).unwrap())
                .collect::<Vec<_>>();
            let formula = random_formula(&mut rng, ATOMS, 10 + round % 25, 3);

            let mut resolution = Config::default();
            resolution.procedure.set(Procedure::Resolution).unwrap();

            let by_search = build(Config::default(), &symbols, &formula).satisfiable();
            let by_resolution = build(resolution, &symbols, &formula).satisfiable();
            let expected = brute_force_count(ATOMS, &formula) > 0;

            assert_eq!(by_search, Ok(expected), "{formula:?}");
            assert_eq!(by_resolution, Ok(expected), "{formula:?}");
        }
    }

    #[test]
    fn pure_literals_agree() {
        let mut rng = StdRng::seed_from_u64(11);

        for round in 0..60 {
            let session = Session::default();
            let symbols = (0..ATOMS)
                .map(|index| session.boolean(&format!("s{index}")).unwrap())
                .collect::<Vec<_>>();
            let formula = random_formula(&mut rng, ATOMS, 5 + round % 30, 3);

            let mut without = Config::default();
            without.pure_literals.set(false).unwrap();

            assert_eq!(
                build(Config::default(), &symbols, &formula).satisfiable(),
                build(without, &symbols, &formula).satisfiable()
            );
        }
    }

    #[test]
    fn randomised_branching_agrees() {
        let mut rng = StdRng::seed_from_u64(13);

        for seed in 0..30 {
            let session = Session::default();
            let symbols = (0..ATOMS)
                .map(|index| session.boolean(&format!("s{index}")).unwrap())
                .collect::<Vec<_>>();
            let formula = random_formula(&mut rng, ATOMS, 20, 3);

            let mut randomised = Config::default();
            randomised.seed = seed;
            randomised.polarity_lean.set(0.5).unwrap();
            randomised.random_decision_bias.set(0.5).unwrap();

            let kb = build(randomised, &symbols, &formula);
            let expected = brute_force_count(ATOMS, &formula);
            assert_eq!(kb.satisfiable(), Ok(expected > 0));
            assert_eq!(kb.models().count(), expected);
        }
    }
}

mod enumeration {
    use super::*;

    #[test]
    fn model_count_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(17);

        for round in 0..60 {
            let session = Session::default();
            let symbols = (0..ATOMS)
                .map(|index| session.boolean(&format!("s{index}")).unwrap())
                .collect::<Vec<_>>();
            let formula = random_formula(&mut rng, ATOMS, 1 + round % 20, 1 + round % 3);

            let kb = build(Config::default(), &symbols, &formula);
            assert_eq!(kb.models().count(), brute_force_count(ATOMS, &formula));
        }
    }

    #[test]
    fn models_satisfy_the_formula() {
        let mut rng = StdRng::seed_from_u64(19);
        let session = Session::default();
        let symbols = (0..ATOMS)
            .map(|index| session.boolean(&format!("s{index}")).unwrap())
            .collect::<Vec<_>>();
        let formula = random_formula(&mut rng, ATOMS, 8, 3);

        let kb = build(Config::default(), &symbols, &formula);
        for model in kb.models() {
            assert!(formula.iter().all(|clause| {
                clause
                    .iter()
                    .any(|(atom, polarity)| model[&symbols[*atom]] == *polarity)
            }));
        }
    }
}
