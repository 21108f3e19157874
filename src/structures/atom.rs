/*!
(The internal representation of) an atom (aka. a 'variable').

Atoms are local to a [knowledge base](crate::kb), and are allocated as symbols are compiled.
Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

That the atoms are [0..*m*) for some *m* allows atoms to be used as the indicies of a structure, e.g. `valuation[a]`.

The atom `0` is fixed with a value of true in every knowledge base.
It serves as the indicator of integer constants.

# Notes
- The [symbol](crate::symbols::Symbol) an atom stands for, if any, is recorded by the knowledge base.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom fixed internally with a value of true.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom.
///
/// Bounded by the largest positive i32 so atoms may be written in DIMACS form.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
