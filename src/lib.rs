//! A propositional knowledge base over boolean and bounded integer symbols.
//!
//! propkb lets callers state facts and rules either as boolean literals or as comparisons over bounded integer expressions.
//! Everything is compiled to clauses in conjunctive normal form, over which satisfiability, entailment, and enumeration of models may be queried.
//!
//! The motivating use is proof-by-refutation: to decide whether some literal ℓ follows from a body of knowledge, add ¬ℓ and check whether the result is unsatisfiable.
//!
//! # Orientation
//!
//! The library is arranged leaf-first:
//! - [Symbols](crate::symbols) are interned by a [session](crate::symbols::Session), and combined into [expressions](crate::symbols::Expr).
//! - Expressions are compiled into [clauses](crate::structures::clause) by the [compiler](crate::compile), with fresh atoms introduced for comparisons and sums.
//! - A [knowledge base](crate::kb) accumulates clauses and answers queries.
//! - Queries are answered by [procedures](crate::procedures): a backtracking search with unit propagation, and resolution.
//!
//! Alongside these, [fuzzy] provides a numeric-confidence evaluator over named symbols, and [strategy] bundles facts and rules into named strategies which may be checked for forced moves.
//!
//! # Examples
//!
//! + Entailment by refutation.
//!
//! ```rust
//! # use propkb::{config::Config, kb::KnowledgeBase, symbols::Session};
//! let session = Session::default();
//! let a = session.boolean("a").unwrap();
//! let b = session.boolean("b").unwrap();
//! let c = session.boolean("c").unwrap();
//!
//! let mut kb = KnowledgeBase::from_config(Config::default());
//! // a ∧ b → c
//! kb.add_clause([!&a, !&b, c.expr()]).unwrap();
//! kb.add_clause([&a]).unwrap();
//! kb.add_clause([&b]).unwrap();
//!
//! assert_eq!(kb.entails(&c), Ok(true));
//!
//! let mut trial = kb.clone();
//! trial.add_clause([!&c]).unwrap();
//! assert_eq!(trial.satisfiable(), Ok(false));
//! ```
//!
//! + Enumerating models of a constraint over integers.
//!
//! ```rust
//! # use propkb::{config::Config, kb::KnowledgeBase, symbols::{Domain, Session}};
//! let session = Session::default();
//! let x = session.integer("x", Some(Domain::new(0, 3))).unwrap();
//! let y = session.integer("y", Some(Domain::new(0, 3))).unwrap();
//!
//! let mut kb = KnowledgeBase::from_config(Config::default());
//! kb.add_clause([(&x + &y).gt(2)]).unwrap();
//!
//! for model in kb.models() {
//!     let x_value = model.integer_value_of(&x).unwrap();
//!     let y_value = model.integer_value_of(&y).unwrap();
//!     assert!(x_value + y_value > 2);
//! }
//! assert_eq!(kb.models().count(), 10);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//! No logger is installed by the library.
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [compilation](crate::compile) can be filtered with `RUST_LOG=compile …` or,
//! - Logs of propagation during a search can be found with `RUST_LOG=propagation=trace …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod compile;
pub mod config;
pub mod fuzzy;
pub mod generic;
pub mod kb;
pub mod misc;
pub mod procedures;
pub mod strategy;
pub mod structures;
pub mod symbols;
pub mod types;
