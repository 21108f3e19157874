//! Generic structures, not specific to knowledge bases.

pub mod minimal_pcg;
