//! Key structures of the propositional layer, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//! A formula 𝐅 is set of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals in some language).
//!
//! The clauses of a [knowledge base](crate::kb) are a formula, built by compiling [expressions](crate::symbols::Expr).
//!
//! ## Languages
//!
//! The language of a knowledge base is the set of [atoms](atom) it has allocated.
//! Some atoms stand for boolean symbols, some for an integer symbol taking a particular value, and the remainder are auxiliary atoms introduced during compilation.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
