//! Graph traversal.
//!
//! [`Bfs`] and [`Dfs`] are iterators yielding vertices in visit order;
//! [`breadth_first_search`] and [`depth_first_search`] drive them with a
//! visitor callback and hand the visitor back so accumulated state is
//! observable by the caller.
//!
//! Both traversals scan neighbors in ascending vertex id order, visit every
//! vertex reachable from the start exactly once and never touch unreachable
//! vertices. A start vertex outside the graph is not an error; the traversal
//! is simply empty.

pub mod bfs;
pub mod dfs;

#[doc(inline)]
pub use self::{
    bfs::{breadth_first_search, Bfs},
    dfs::{depth_first_search, Dfs},
};

use crate::core::{Neighbors, Vertex};

/// Collects the neighbors of `vertex` in ascending id order.
///
/// The sparse backend keeps neighbors in insertion order, so traversal code
/// sorts the collected list to make the scan order uniform across backends.
pub(crate) fn sorted_neighbors<G: Neighbors>(graph: &G, vertex: Vertex) -> Vec<Vertex> {
    let mut neighbors = graph.outgoing(vertex).collect::<Vec<_>>();
    neighbors.sort_unstable();
    neighbors
}
