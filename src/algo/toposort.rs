//! Topological sorting of acyclic graphs.
//!
//! Implements [Kahn's algorithm]. The algorithm consumes edges as it goes, so
//! it runs on a clone of the input graph and the caller's graph is never
//! modified.
//!
//! [Kahn's algorithm]: https://en.wikipedia.org/wiki/Topological_sorting#Kahn's_algorithm
//!
//! # Examples
//!
//! ```
//! use gravis::algo::topological_sort;
//! use gravis::storage::AdjList;
//!
//! let graph = AdjList::with_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
//! assert_eq!(topological_sort(&graph), Ok(vec![0, 1, 2, 3]));
//! ```

use std::collections::VecDeque;

use thiserror::Error;

use crate::core::{Edge, EdgeKind, GraphMut, Neighbors, Vertex};
use crate::visit::sorted_neighbors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("graph contains a cycle")]
    Cycle,
}

/// Orders the vertices so that every edge points from an earlier to a later
/// position.
///
/// Ties are broken towards lower vertex ids: vertices become ready in
/// ascending id order. Returns [`Error::Cycle`] and no partial order if the
/// graph contains a cycle; a self-loop counts as a cycle.
pub fn topological_sort<G>(graph: &G) -> Result<Vec<Vertex>, Error>
where
    G: GraphMut + Neighbors + Clone,
{
    let mut graph = graph.clone();
    let n = graph.size();

    let mut ready = graph
        .vertices()
        .filter(|&vertex| graph.count_incoming(vertex) == 0)
        .collect::<VecDeque<_>>();

    let mut order = Vec::with_capacity(n);

    while let Some(vertex) = ready.pop_front() {
        order.push(vertex);

        for successor in sorted_neighbors(&graph, vertex) {
            graph.remove(Edge::new(vertex, successor), EdgeKind::Uni);

            if graph.count_incoming(successor) == 0 {
                ready.push_back(successor);
            }
        }
    }

    // Any edge surviving the removal rounds sits on a cycle.
    if graph.count_edges() > 0 {
        return Err(Error::Cycle);
    }

    Ok(order)
}
