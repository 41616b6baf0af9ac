//! Bit and string commitments from a one-way permutation and its hardcore
//! predicate, following the Blum-Blum-Shub construction.
#[macro_use]
extern crate quick_error;

pub mod utils;
pub mod parameters;
pub mod primitives;
pub mod commitments;
