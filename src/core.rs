//! The structural contract of graphs and the primitives it is built from.
//!
//! Storage backends implement the traits in [`graph`](self) and algorithms
//! are generic over the minimal subset of them they need, with static
//! dispatch. There is no common base type.

mod edge;
mod graph;
mod weight;

pub use edge::*;
pub use graph::*;
pub use weight::*;
