use std::iter::Copied;
use std::ops::Range;
use std::slice;

use crate::core::{Edge, EdgeKind, Edges, GraphBase, GraphMut, Neighbors, Vertex};

/// Graph backend storing adjacency lists.
///
/// Every vertex owns a collection of distinct outgoing neighbors in insertion
/// order; duplicate insertions are no-ops. No edge values are stored, so this
/// backend serves unweighted traversal on its own and pairs with an
/// [`EdgePropertyMap`](crate::props::EdgePropertyMap) for the weighted
/// algorithms.
///
/// [`outgoing`](Neighbors::outgoing) borrows the stored collection directly;
/// `incoming` has no reverse index and scans all lists in O(n + e).
/// [`add`](GraphMut::add) and [`remove`](GraphMut::remove) scan the endpoint
/// list, O(degree).
#[derive(Debug, Clone)]
pub struct AdjList {
    adj: Vec<Vec<Vertex>>,
}

impl AdjList {
    /// Creates a graph with `n` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "graph must have at least one vertex");

        Self {
            adj: vec![Vec::new(); n],
        }
    }

    /// Creates a graph with `n` vertices, seeded with unidirectional edges.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn with_edges<I>(n: usize, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Self::new(n);

        for edge in edges {
            graph.add(edge.into(), EdgeKind::Uni);
        }

        graph
    }

    /// The stored neighbor collection of `from`, in insertion order. Empty
    /// for an out-of-range vertex.
    pub fn neighbors(&self, from: Vertex) -> &[Vertex] {
        self.adj.get(from).map_or(&[], Vec::as_slice)
    }

    fn insert(&mut self, from: Vertex, to: Vertex) {
        let list = &mut self.adj[from];

        if !list.contains(&to) {
            list.push(to);
        }
    }

    fn erase(&mut self, from: Vertex, to: Vertex) {
        let list = &mut self.adj[from];

        if let Some(position) = list.iter().position(|&v| v == to) {
            list.remove(position);
        }
    }
}

impl GraphBase for AdjList {
    type EdgeValue = bool;

    fn size(&self) -> usize {
        self.adj.len()
    }
}

impl Neighbors for AdjList {
    type OutgoingIter<'a> = Copied<slice::Iter<'a, Vertex>>
    where
        Self: 'a;

    type IncomingIter<'a> = IncomingIter<'a>
    where
        Self: 'a;

    fn outgoing(&self, from: Vertex) -> Self::OutgoingIter<'_> {
        self.neighbors(from).iter().copied()
    }

    fn incoming(&self, to: Vertex) -> Self::IncomingIter<'_> {
        let from = if to < self.adj.len() {
            0..self.adj.len()
        } else {
            0..0
        };

        IncomingIter {
            adj: &self.adj,
            to,
            from,
        }
    }

    fn count_outgoing(&self, from: Vertex) -> usize {
        self.neighbors(from).len()
    }
}

impl Edges for AdjList {
    type EdgesIter<'a> = EdgesIter<'a>
    where
        Self: 'a;

    fn at(&self, edge: Edge) -> bool {
        self.neighbors(edge.from).contains(&edge.to)
    }

    fn edges(&self) -> Self::EdgesIter<'_> {
        EdgesIter {
            adj: &self.adj,
            from: 0,
            cursor: 0,
        }
    }

    fn count_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }
}

impl GraphMut for AdjList {
    /// Adds `edge`. The value carries no information beyond presence here and
    /// is ignored.
    fn add_weighted(&mut self, edge: Edge, kind: EdgeKind, _value: bool) -> bool {
        if edge.from >= self.adj.len() || edge.to >= self.adj.len() {
            return false;
        }

        self.insert(edge.from, edge.to);

        if kind == EdgeKind::Bi {
            self.insert(edge.to, edge.from);
        }

        true
    }

    fn remove(&mut self, edge: Edge, kind: EdgeKind) -> bool {
        if edge.from >= self.adj.len() || edge.to >= self.adj.len() {
            return false;
        }

        self.erase(edge.from, edge.to);

        if kind == EdgeKind::Bi {
            self.erase(edge.to, edge.from);
        }

        true
    }
}

/// Iterator over the sources with an edge into a fixed vertex, ascending.
///
/// There is no reverse index; every adjacency list is scanned.
pub struct IncomingIter<'a> {
    adj: &'a [Vec<Vertex>],
    to: Vertex,
    from: Range<usize>,
}

impl<'a> Iterator for IncomingIter<'a> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        for from in self.from.by_ref() {
            if self.adj[from].contains(&self.to) {
                return Some(from);
            }
        }

        None
    }
}

/// Iterator over all edges, vertex-major, neighbors in insertion order.
pub struct EdgesIter<'a> {
    adj: &'a [Vec<Vertex>],
    from: usize,
    cursor: usize,
}

impl<'a> Iterator for EdgesIter<'a> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while self.from < self.adj.len() {
            match self.adj[self.from].get(self.cursor) {
                Some(&to) => {
                    self.cursor += 1;
                    return Some(Edge::new(self.from, to));
                }
                None => {
                    self.from += 1;
                    self.cursor = 0;
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::*;

    #[test]
    fn contract_add_remove() {
        test_add_remove(AdjList::new(5));
    }

    #[test]
    fn contract_bounds() {
        test_bounds(AdjList::new(5));
    }

    #[test]
    fn contract_bidirectional() {
        test_bidirectional(AdjList::new(5));
    }

    #[test]
    fn contract_neighbors() {
        test_neighbors(AdjList::new(5));
    }

    #[test]
    #[should_panic]
    fn zero_vertices() {
        AdjList::new(0);
    }

    #[test]
    fn duplicate_add_is_noop() {
        let mut graph = AdjList::new(3);

        assert!(graph.add(Edge::new(0, 1), EdgeKind::Uni));
        assert!(graph.add(Edge::new(0, 1), EdgeKind::Uni));

        assert_eq!(graph.count_edges(), 1);
        assert_eq!(graph.neighbors(0), &[1]);
    }

    #[test]
    fn edges_insertion_order() {
        let graph = AdjList::with_edges(4, [(1, 3), (1, 0), (0, 2), (3, 1)]);

        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![
                Edge::new(0, 2),
                Edge::new(1, 3),
                Edge::new(1, 0),
                Edge::new(3, 1),
            ]
        );
    }

    #[test]
    fn incoming_scans_all_lists() {
        let graph = AdjList::with_edges(4, [(0, 2), (1, 2), (3, 2), (2, 0)]);

        assert_eq!(graph.incoming(2).collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(graph.count_incoming(2), 3);
        assert_eq!(graph.count_incoming(1), 0);
    }
}
