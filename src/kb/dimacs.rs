/*!
Reading and writing knowledge bases in DIMACS form.

When reading, each DIMACS integer *n* is read as the boolean symbol named *n*, from a given [session](Session).
So, a formula read into a knowledge base may be queried in terms of symbols, and a formula read twice with the same session uses the same symbols.

When writing, atoms are shifted up by one (as 0 terminates a clause in DIMACS form), and the origin of each atom of a symbol is noted in a comment.

```rust
# use propkb::{config::Config, kb::KnowledgeBase, symbols::Session};
let session = Session::default();
let mut kb = KnowledgeBase::from_config(Config::default());

let dimacs = b"
c An unsatisfiable formula
p cnf 2 4
 1  2 0
 1 -2 0
-1  2 0
-1 -2 0
";

let info = kb.read_dimacs(&session, dimacs.as_slice()).unwrap();
assert_eq!(info.expected, Some((2, 4)));
assert_eq!(info.clauses, 4);
assert_eq!(kb.satisfiable(), Ok(false));
```
*/

use std::io::BufRead;

use crate::{
    misc::log::targets,
    structures::{clause::Clause, literal::Literal},
    symbols::{Expr, Session},
    types::err::{self, ErrorKind},
};

use super::{AtomOrigin, KnowledgeBase};

/// Details of a DIMACS formula read into a knowledge base.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms and clauses given by the problem line, if present.
    pub expected: Option<(usize, usize)>,

    /// The count of clauses read.
    pub clauses: usize,
}

impl KnowledgeBase {
    /// Reads a DIMACS formula into the knowledge base, with each DIMACS integer read as a boolean symbol of the session.
    ///
    /// The formula is read into a copy of the knowledge base, so if an error is returned the knowledge base is unchanged.
    ///
    /// ```rust,ignore
    /// kb.read_dimacs(&session, BufReader::new(&file))?;
    /// ```
    pub fn read_dimacs(
        &mut self,
        session: &Session,
        reader: impl BufRead,
    ) -> Result<ParserInfo, ErrorKind> {
        let mut staged = self.clone();
        let info = staged.read_clauses(session, reader)?;
        *self = staged;
        Ok(info)
    }

    fn read_clauses(
        &mut self,
        session: &Session,
        mut reader: impl BufRead,
    ) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: Vec<Expr> = Vec::default();
        let mut line_counter = 0;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue,

                Some('%') => break,

                Some('p') => {
                    if info.expected.is_some() || info.clauses > 0 || !clause_buffer.is_empty() {
                        return Err(ErrorKind::from(err::ParseError::ProblemSpecification));
                    }
                    info.expected = Some(problem_specification(&buffer)?);
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                info.clauses += 1;
                            }

                            _ => {
                                let parsed_int = match item.parse::<i64>() {
                                    Ok(int) => int,
                                    Err(_) => {
                                        log::error!(target: targets::PARSE, "Malformed literal '{item}' on line {line_counter}");
                                        return Err(ErrorKind::from(err::ParseError::Literal(line_counter)));
                                    }
                                };
                                let symbol = session.boolean(&parsed_int.unsigned_abs().to_string())?;
                                match parsed_int.is_positive() {
                                    true => clause_buffer.push(symbol.expr()),
                                    false => clause_buffer.push(!symbol),
                                }
                            }
                        }
                    }
                }
            }
        }

        // A final clause without a terminating zero.
        if !clause_buffer.is_empty() {
            self.add_clause(clause_buffer)?;
            info.clauses += 1;
        }

        if let Some((_, expected_clauses)) = info.expected {
            if expected_clauses != info.clauses {
                log::warn!(target: targets::PARSE, "Expected {expected_clauses} clauses, read {}", info.clauses);
            }
        }
        log::info!(target: targets::PARSE, "Read {} clauses from {line_counter} lines", info.clauses);

        Ok(info)
    }

    /// The knowledge base as a DIMACS formula.
    ///
    /// Each atom is shifted up by one, and the atom fixed to true is included.
    pub fn as_dimacs(&self) -> String {
        let mut dimacs = String::new();

        for (atom, origin) in self.atoms.iter().enumerate() {
            let note = match origin {
                AtomOrigin::Top => "true".to_string(),
                AtomOrigin::Boolean(symbol) => symbol.name().to_string(),
                AtomOrigin::Indicator(symbol, value) => format!("{symbol}={value}"),
                AtomOrigin::Auxiliary => continue,
            };
            dimacs.push_str(&format!("c {} {note}\n", atom + 1));
        }

        dimacs.push_str(&format!("p cnf {} {}\n", self.atoms.len(), self.clauses.len()));

        for clause in &self.clauses {
            let shifted = clause
                .literals()
                .map(|literal| -> String {
                    let int = literal.as_int();
                    match int.is_negative() {
                        true => (int - 1).to_string(),
                        false => (int + 1).to_string(),
                    }
                })
                .collect::<Vec<_>>();
            dimacs.push_str(&shifted.join(" "));
            if !shifted.is_empty() {
                dimacs.push(' ');
            }
            dimacs.push_str("0\n");
        }

        dimacs
    }
}

/// The count of atoms and clauses from a problem line.
fn problem_specification(line: &str) -> Result<(usize, usize), ErrorKind> {
    let mut details = line.split_whitespace();

    let (Some("p"), Some("cnf")) = (details.next(), details.next()) else {
        return Err(ErrorKind::from(err::ParseError::ProblemSpecification));
    };

    let atom_count = details.next().and_then(|string| string.parse::<usize>().ok());
    let clause_count = details.next().and_then(|string| string.parse::<usize>().ok());

    match (atom_count, clause_count) {
        (Some(atoms), Some(clauses)) => Ok((atoms, clauses)),
        _ => Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
    }
}

#[cfg(test)]
mod dimacs_tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn malformed_problem() {
        let session = Session::default();
        let mut kb = KnowledgeBase::from_config(Config::default());
        assert_eq!(
            kb.read_dimacs(&session, b"p cnf two 1\n1 0\n".as_slice()),
            Err(ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn malformed_literal() {
        let session = Session::default();
        let mut kb = KnowledgeBase::from_config(Config::default());
        assert_eq!(
            kb.read_dimacs(&session, b"p cnf 2 1\n\n1 x 0\n".as_slice()),
            Err(ErrorKind::Parse(err::ParseError::Literal(3)))
        );
    }

    #[test]
    fn written_form() {
        let session = Session::default();
        let p = session.boolean("p").unwrap();
        let q = session.boolean("q").unwrap();
        let mut kb = KnowledgeBase::from_config(Config::default());
        kb.add_clause([p.expr(), !&q]).unwrap();

        assert_eq!(
            kb.as_dimacs(),
            "c 1 true\nc 2 p\nc 3 q\np cnf 3 2\n1 0\n2 -3 0\n"
        );
    }
}
