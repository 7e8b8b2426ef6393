//! Numeric-analysis operations over matrices.
//! This module provides the norm and inner-product engine, structural
//! operators, row/column combinators, and approximate predicates.

mod combinators;
mod norm;
mod predicates;
mod structure;

pub use combinators::*;
pub use norm::*;
pub use predicates::*;
pub use structure::*;
