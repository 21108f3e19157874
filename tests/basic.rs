use propkb::{
    config::{Config, Procedure},
    kb::{ClauseOk, KnowledgeBase},
    symbols::Session,
};

fn kb_with(procedure: Procedure) -> KnowledgeBase {
    let mut config = Config::default();
    config.procedure.set(procedure).unwrap();
    KnowledgeBase::from_config(config)
}

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let session = Session::default();
        let p = session.boolean("p").unwrap();
        let mut kb = KnowledgeBase::from_config(Config::default());

        assert_eq!(kb.add_clause([&p]), Ok(ClauseOk::Added));
        assert_eq!(kb.satisfiable(), Ok(true));

        let models = kb.models().collect::<Vec<_>>();
        assert_eq!(models.len(), 1);
        assert!(models[0][&p]);
    }

    #[test]
    fn conflict() {
        for procedure in [Procedure::Backtracking, Procedure::Resolution] {
            let session = Session::default();
            let p = session.boolean("p").unwrap();
            let mut kb = kb_with(procedure);

            kb.add_clause([&p]).unwrap();
            kb.add_clause([!&p]).unwrap();

            assert_eq!(kb.satisfiable(), Ok(false));
            assert_eq!(kb.models().count(), 0);
        }
    }

    #[test]
    fn empty_clause() {
        let mut kb = KnowledgeBase::from_config(Config::default());
        assert_eq!(
            kb.add_clause(Vec::<propkb::symbols::Expr>::new()),
            Ok(ClauseOk::Added)
        );
        assert_eq!(kb.satisfiable(), Ok(false));
    }

    #[test]
    fn tautology() {
        let session = Session::default();
        let p = session.boolean("p").unwrap();
        let q = session.boolean("q").unwrap();
        let mut kb = KnowledgeBase::from_config(Config::default());

        let clauses = kb.clause_count();
        assert_eq!(
            kb.add_clause([p.expr(), q.expr(), !&p]),
            Ok(ClauseOk::Tautology)
        );
        assert_eq!(kb.clause_count(), clauses);
    }

    #[test]
    fn duplicates_removed() {
        let session = Session::default();
        let p = session.boolean("p").unwrap();
        let mut kb = KnowledgeBase::from_config(Config::default());

        kb.add_clause([&p, &p, &p]).unwrap();
        assert_eq!(kb.clauses().last().map(|clause| clause.len()), Some(1));
    }
}

mod monotonicity {
    use super::*;

    #[test]
    fn unsatisfiable_stays_unsatisfiable() {
        let session = Session::default();
        let p = session.boolean("p").unwrap();
        let q = session.boolean("q").unwrap();
        let r = session.boolean("r").unwrap();

        let mut kb = KnowledgeBase::from_config(Config::default());
        kb.add_clause([&p, &q]).unwrap();
        kb.add_clause([!&p]).unwrap();
        kb.add_clause([!&q]).unwrap();
        assert_eq!(kb.satisfiable(), Ok(false));

        for extra in [p.expr(), !&q, r.expr(), !&r] {
            kb.add_clause([extra]).unwrap();
            assert_eq!(kb.satisfiable(), Ok(false));
        }
    }

    #[test]
    fn models_shrink() {
        let session = Session::default();
        let symbols = ["a", "b", "c"].map(|name| session.boolean(name).unwrap());

        let mut kb = KnowledgeBase::from_config(Config::default());
        for symbol in &symbols {
            kb.declare(symbol).unwrap();
        }

        let mut previous = kb.models().count();
        assert_eq!(previous, 8);

        let clauses = [
            vec![symbols[0].expr(), symbols[1].expr()],
            vec![!&symbols[1], symbols[2].expr()],
            vec![!&symbols[0]],
        ];
        for clause in clauses {
            kb.add_clause(clause).unwrap();
            let count = kb.models().count();
            assert!(count <= previous);
            previous = count;
        }
        // ¬a, so b, so c.
        assert_eq!(previous, 1);
    }
}

mod enumeration {
    use super::*;

    #[test]
    fn every_valuation() {
        for n in 0..=6 {
            let session = Session::default();
            let mut kb = KnowledgeBase::from_config(Config::default());
            for index in 0..n {
                let symbol = session.boolean(&format!("s{index}")).unwrap();
                kb.declare(&symbol).unwrap();
            }
            assert_eq!(kb.models().count(), 1 << n);
        }
    }

    #[test]
    fn distinct_models() {
        let session = Session::default();
        let symbols = (0..4)
            .map(|index| session.boolean(&format!("s{index}")).unwrap())
            .collect::<Vec<_>>();

        let mut kb = KnowledgeBase::from_config(Config::default());
        kb.add_clause(symbols.iter().map(|s| s.expr())).unwrap();

        let mut models = kb
            .models()
            .map(|model| symbols.iter().map(|s| model[s]).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(models.len(), 15);

        models.sort();
        models.dedup();
        assert_eq!(models.len(), 15);
        assert!(models.iter().all(|values| values.iter().any(|v| *v)));
    }

    #[test]
    fn counters() {
        let session = Session::default();
        let p = session.boolean("p").unwrap();
        let q = session.boolean("q").unwrap();

        let mut kb = KnowledgeBase::from_config(Config::default());
        kb.add_clause([!&p, q.expr()]).unwrap();

        let mut models = kb.models();
        assert!(models.next().is_some());
        assert_eq!(models.counters().models, 1);
        assert_eq!(models.count(), 2);
    }

    #[test]
    fn display() {
        let session = Session::default();
        let c7 = session.boolean("c7").unwrap();
        let x = session
            .integer("x", Some(propkb::symbols::Domain::new(2, 2)))
            .unwrap();

        let mut kb = KnowledgeBase::from_config(Config::default());
        kb.add_clause([&c7]).unwrap();
        kb.declare(&x).unwrap();

        let model = kb.models().next().unwrap();
        assert_eq!(model.to_string(), "{c7: true, x: 2}");
    }
}
