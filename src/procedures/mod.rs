//! Procedures for determining satisfiability and enumerating models.
//!
//! For the most part these are methods of a [search](search::Search), and primarily placed in separate files for documentation.
//!
//! - [search] is a backtracking search through valuations, used both to determine satisfiability and to enumerate models.
//! - [bcp] and [decision] are the two ways a search extends a valuation.
//! - [pure] identifies pure literals, which may be assumed when only satisfiability is of interest.
//! - [resolution] saturates a formula under resolution, as an alternative way to determine satisfiability.

pub mod bcp;
pub mod decision;
pub mod pure;
pub mod resolution;
pub mod search;
