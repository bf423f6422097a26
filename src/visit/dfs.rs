use fixedbitset::FixedBitSet;

use crate::core::{Neighbors, Vertex};
use crate::visit::sorted_neighbors;

struct Frame {
    neighbors: Vec<Vertex>,
    cursor: usize,
}

/// Depth-first traversal in preorder.
///
/// The traversal is driven by an explicit work stack instead of recursion, so
/// deep graphs cannot overflow the call stack. A vertex is yielded when it is
/// first discovered; the stack then descends into its lowest-id unvisited
/// neighbor before the remaining neighbors are considered.
///
/// # Examples
///
/// ```
/// use gravis::storage::AdjList;
/// use gravis::visit::Dfs;
///
/// let graph = AdjList::with_edges(4, [(0, 1), (0, 2), (1, 3)]);
/// let order = Dfs::new(&graph, 0).collect::<Vec<_>>();
/// assert_eq!(order, vec![0, 1, 3, 2]);
/// ```
pub struct Dfs<'a, G> {
    graph: &'a G,
    stack: Vec<Frame>,
    visited: FixedBitSet,
    start: Option<Vertex>,
}

impl<'a, G: Neighbors> Dfs<'a, G> {
    /// Prepares a traversal from `start`. An out-of-range start yields an
    /// empty traversal.
    pub fn new(graph: &'a G, start: Vertex) -> Self {
        let n = graph.size();

        Self {
            graph,
            stack: Vec::new(),
            visited: FixedBitSet::with_capacity(n),
            start: (start < n).then_some(start),
        }
    }

    fn discover(&mut self, vertex: Vertex) -> Vertex {
        self.visited.insert(vertex);
        self.stack.push(Frame {
            neighbors: sorted_neighbors(self.graph, vertex),
            cursor: 0,
        });
        vertex
    }
}

impl<'a, G: Neighbors> Iterator for Dfs<'a, G> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(self.discover(start));
        }

        while let Some(frame) = self.stack.last_mut() {
            let mut next = None;

            while frame.cursor < frame.neighbors.len() {
                let neighbor = frame.neighbors[frame.cursor];
                frame.cursor += 1;

                if !self.visited.contains(neighbor) {
                    next = Some(neighbor);
                    break;
                }
            }

            match next {
                Some(neighbor) => return Some(self.discover(neighbor)),
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

/// Runs a depth-first search from `start`, calling `visitor` for every
/// visited vertex, and returns the visitor.
///
/// An out-of-range `start` is a silent no-op.
pub fn depth_first_search<G, F>(graph: &G, start: Vertex, mut visitor: F) -> F
where
    G: Neighbors,
    F: FnMut(&G, Vertex),
{
    for vertex in Dfs::new(graph, start) {
        visitor(graph, vertex);
    }

    visitor
}
