use propkb::{
    config::Config,
    kb::KnowledgeBase,
    symbols::{Domain, Session},
    types::err::{ErrorKind, ParseError},
};

fn read(dimacs: &str) -> Result<KnowledgeBase, ErrorKind> {
    let session = Session::default();
    let mut kb = KnowledgeBase::from_config(Config::default());
    kb.read_dimacs(&session, dimacs.as_bytes())?;
    Ok(kb)
}

mod reading {
    use super::*;

    #[test]
    fn symbols_by_integer() {
        let session = Session::default();
        let mut kb = KnowledgeBase::from_config(Config::default());
        let info = kb
            .read_dimacs(&session, "p cnf 3 2\n1 -3 0\n2 0\n".as_bytes())
            .unwrap();

        assert_eq!(info.expected, Some((3, 2)));
        assert_eq!(info.clauses, 2);

        let two = session.get("2").unwrap();
        assert_eq!(kb.entails(&two), Ok(true));
        assert_eq!(kb.models().count(), 3);
    }

    #[test]
    fn comments_and_blank_lines() {
        let kb = read("c a comment\n\np cnf 2 1\nc another\n  1 2 0\n").unwrap();
        assert_eq!(kb.models().count(), 3);
    }

    #[test]
    fn clauses_across_lines() {
        let kb = read("p cnf 3 2\n1 2\n3 0 -1\n0\n").unwrap();
        assert_eq!(kb.models().count(), 3);
    }

    #[test]
    fn percent_ends_input() {
        let kb = read("p cnf 1 1\n1 0\n%\n-1 0\n").unwrap();
        assert_eq!(kb.satisfiable(), Ok(true));
    }

    #[test]
    fn unterminated_final_clause() {
        let kb = read("p cnf 1 2\n1 0\n-1").unwrap();
        assert_eq!(kb.satisfiable(), Ok(false));
    }

    #[test]
    fn failed_read_leaves_kb_unchanged() {
        let session = Session::default();
        let mut kb = KnowledgeBase::from_config(Config::default());
        kb.read_dimacs(&session, "p cnf 2 1\n1 2 0\n".as_bytes())
            .unwrap();

        let clauses = kb.clause_count();
        let atoms = kb.atom_count();

        assert_eq!(
            kb.read_dimacs(&session, "1 0\n-2 0\n2 x 0\n".as_bytes()),
            Err(ErrorKind::Parse(ParseError::Literal(3)))
        );
        assert_eq!(kb.clause_count(), clauses);
        assert_eq!(kb.atom_count(), atoms);
        assert_eq!(kb.models().count(), 3);
    }

    #[test]
    fn malformed() {
        assert_eq!(
            read("p cnf 2 1\n1 x 0\n").err(),
            Some(ErrorKind::Parse(ParseError::Literal(2)))
        );
        assert_eq!(
            read("p cnf 2 1\np cnf 2 1\n").err(),
            Some(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
    }
}

mod writing {
    use super::*;

    #[test]
    fn reread_agrees() {
        let session = Session::default();
        let p = session.boolean("p").unwrap();
        let q = session.boolean("q").unwrap();
        let x = session.integer("x", Some(Domain::new(0, 2))).unwrap();

        let mut kb = KnowledgeBase::from_config(Config::default());
        kb.add_clause([p.expr(), x.gt(0)]).unwrap();
        kb.add_clause([!&q, x.lt(2)]).unwrap();
        kb.add_clause([!&p, q.expr()]).unwrap();

        let written = kb.as_dimacs();
        let reread = read(&written).unwrap();

        assert_eq!(reread.satisfiable(), kb.satisfiable());
        assert_eq!(reread.models().count(), kb.models().count());
        assert!(written.lines().any(|line| line == "c 2 p"));
    }

    #[test]
    fn unsatisfiable() {
        let session = Session::default();
        let p = session.boolean("p").unwrap();

        let mut kb = KnowledgeBase::from_config(Config::default());
        kb.add_clause([&p]).unwrap();
        kb.add_clause([!&p]).unwrap();

        let reread = read(&kb.as_dimacs()).unwrap();
        assert_eq!(reread.satisfiable(), Ok(false));
    }
}
