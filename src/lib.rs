//! Comparison adversaries: oracles that answer "is `a` before `b`?" so as to
//! force as many comparisons as possible out of a comparison-based algorithm,
//! while keeping every answer extendable to one consistent total order.

pub mod adversary;
pub mod basics;
pub mod closure;
pub mod dags;
pub mod error;

pub use adversary::*;
pub use basics::*;
pub use closure::*;
pub use dags::*;
pub use error::*;
