use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::core::{Neighbors, Vertex};
use crate::visit::sorted_neighbors;

/// Three-color breadth-first traversal.
///
/// White vertices are undiscovered, gray vertices sit in the FIFO queue,
/// black vertices have been yielded. Every vertex reachable from the start
/// goes white → gray → black exactly once; unreachable vertices stay white.
///
/// # Examples
///
/// ```
/// use gravis::storage::AdjList;
/// use gravis::visit::Bfs;
///
/// let graph = AdjList::with_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
/// let order = Bfs::new(&graph, 0).collect::<Vec<_>>();
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// ```
pub struct Bfs<'a, G> {
    graph: &'a G,
    queue: VecDeque<Vertex>,
    gray: FixedBitSet,
    black: FixedBitSet,
}

impl<'a, G: Neighbors> Bfs<'a, G> {
    /// Prepares a traversal from `start`. An out-of-range start yields an
    /// empty traversal.
    pub fn new(graph: &'a G, start: Vertex) -> Self {
        let n = graph.size();
        let mut queue = VecDeque::new();
        let mut gray = FixedBitSet::with_capacity(n);
        let black = FixedBitSet::with_capacity(n);

        if start < n {
            gray.insert(start);
            queue.push_back(start);
        }

        Self {
            graph,
            queue,
            gray,
            black,
        }
    }
}

impl<'a, G: Neighbors> Iterator for Bfs<'a, G> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;
        self.black.insert(vertex);

        for neighbor in sorted_neighbors(self.graph, vertex) {
            if !self.gray.contains(neighbor) && !self.black.contains(neighbor) {
                self.gray.insert(neighbor);
                self.queue.push_back(neighbor);
            }
        }

        Some(vertex)
    }
}

/// Runs a breadth-first search from `start`, calling `visitor` for every
/// visited vertex, and returns the visitor.
///
/// An out-of-range `start` is a silent no-op.
pub fn breadth_first_search<G, F>(graph: &G, start: Vertex, mut visitor: F) -> F
where
    G: Neighbors,
    F: FnMut(&G, Vertex),
{
    for vertex in Bfs::new(graph, start) {
        visitor(graph, vertex);
    }

    visitor
}
