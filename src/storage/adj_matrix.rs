use std::ops::Range;

use crate::core::{Edge, EdgeKind, EdgeValue, Edges, GraphBase, GraphMut, Neighbors, Vertex};

/// Graph backend storing an adjacency matrix.
///
/// The matrix holds an `n * n` table of edge values indexed `from + to * n`.
/// Edge lookup, insertion and removal are O(1); neighbor queries scan a row
/// or column in O(n) and [`edges`](Edges::edges) scans the whole table.
///
/// The size is fixed at construction and must be positive. Bidirectional
/// edges are a construction-time policy: [`EdgeKind::Bi`] writes the value at
/// both the forward and the reverse index, after which the two arcs are
/// independent.
#[derive(Debug, Clone)]
pub struct AdjMatrix<W = i32> {
    matrix: Vec<W>,
    n: usize,
}

impl<W: EdgeValue> AdjMatrix<W> {
    /// Creates a graph with `n` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "graph must have at least one vertex");

        Self {
            matrix: vec![W::default(); n * n],
            n,
        }
    }

    /// Creates a graph with `n` vertices, seeded with unidirectional
    /// unit-value edges.
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

    fn index(&self, from: Vertex, to: Vertex) -> usize {
        from + to * self.n
    }

    /// Direct read access to the stored value of `(from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is out of range. Use [`Edges::at`] for the
    /// checked lookup.
    pub fn get(&self, from: Vertex, to: Vertex) -> &W {
        &self.matrix[self.index(from, to)]
    }

    /// Direct write access to the stored value of `(from, to)`.
    ///
    /// Writing the unit value is equivalent to [`GraphMut::add`]; writing the
    /// default value is equivalent to [`GraphMut::remove`].
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is out of range.
    pub fn get_mut(&mut self, from: Vertex, to: Vertex) -> &mut W {
        let index = self.index(from, to);
        &mut self.matrix[index]
    }
}

impl<W: EdgeValue> GraphBase for AdjMatrix<W> {
    type EdgeValue = W;

    fn size(&self) -> usize {
        self.n
    }
}

impl<W: EdgeValue> Neighbors for AdjMatrix<W> {
    type OutgoingIter<'a> = RowIter<'a, W>
    where
        Self: 'a;

    type IncomingIter<'a> = ColumnIter<'a, W>
    where
        Self: 'a;

    fn outgoing(&self, from: Vertex) -> Self::OutgoingIter<'_> {
        let to = if from < self.n { 0..self.n } else { 0..0 };

        RowIter {
            matrix: &self.matrix,
            n: self.n,
            from,
            to,
        }
    }

    fn incoming(&self, to: Vertex) -> Self::IncomingIter<'_> {
        let from = if to < self.n { 0..self.n } else { 0..0 };

        ColumnIter {
            matrix: &self.matrix,
            n: self.n,
            to,
            from,
        }
    }
}

impl<W: EdgeValue> Edges for AdjMatrix<W> {
    type EdgesIter<'a> = EdgesIter<'a, W>
    where
        Self: 'a;

    fn at(&self, edge: Edge) -> W {
        if edge.from < self.n && edge.to < self.n {
            self.matrix[self.index(edge.from, edge.to)].clone()
        } else {
            W::default()
        }
    }

    fn edges(&self) -> Self::EdgesIter<'_> {
        EdgesIter {
            matrix: &self.matrix,
            n: self.n,
            from: 0,
            to: 0,
        }
    }

    fn count_edges(&self) -> usize {
        self.matrix.iter().filter(|value| value.is_present()).count()
    }
}

impl<W: EdgeValue> GraphMut for AdjMatrix<W> {
    fn add_weighted(&mut self, edge: Edge, kind: EdgeKind, value: W) -> bool {
        if edge.from >= self.n || edge.to >= self.n {
            return false;
        }

        *self.get_mut(edge.from, edge.to) = value.clone();

        if kind == EdgeKind::Bi {
            *self.get_mut(edge.to, edge.from) = value;
        }

        true
    }

    fn remove(&mut self, edge: Edge, kind: EdgeKind) -> bool {
        if edge.from >= self.n || edge.to >= self.n {
            return false;
        }

        *self.get_mut(edge.from, edge.to) = W::default();

        if kind == EdgeKind::Bi {
            *self.get_mut(edge.to, edge.from) = W::default();
        }

        true
    }
}

/// Iterator over the present targets in one matrix row, ascending.
pub struct RowIter<'a, W> {
    matrix: &'a [W],
    n: usize,
    from: Vertex,
    to: Range<usize>,
}

impl<'a, W: EdgeValue> Iterator for RowIter<'a, W> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        for to in self.to.by_ref() {
            if self.matrix[self.from + to * self.n].is_present() {
                return Some(to);
            }
        }

        None
    }
}

/// Iterator over the present sources in one matrix column, ascending.
pub struct ColumnIter<'a, W> {
    matrix: &'a [W],
    n: usize,
    to: Vertex,
    from: Range<usize>,
}

impl<'a, W: EdgeValue> Iterator for ColumnIter<'a, W> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        for from in self.from.by_ref() {
            if self.matrix[from + self.to * self.n].is_present() {
                return Some(from);
            }
        }

        None
    }
}

/// Iterator over all present edges in row-major order (`from` outer, `to`
/// inner).
pub struct EdgesIter<'a, W> {
    matrix: &'a [W],
    n: usize,
    from: usize,
    to: usize,
}

impl<'a, W: EdgeValue> Iterator for EdgesIter<'a, W> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while self.from < self.n {
            if self.to == self.n {
                self.to = 0;
                self.from += 1;
                continue;
            }

            let (from, to) = (self.from, self.to);
            self.to += 1;

            if self.matrix[from + to * self.n].is_present() {
                return Some(Edge::new(from, to));
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
        test_add_remove(AdjMatrix::<i32>::new(5));
    }

    #[test]
    fn contract_bounds() {
        test_bounds(AdjMatrix::<i32>::new(5));
    }

    #[test]
    fn contract_bidirectional() {
        test_bidirectional(AdjMatrix::<i32>::new(5));
    }

    #[test]
    fn contract_neighbors() {
        test_neighbors(AdjMatrix::<i32>::new(5));
    }

    #[test]
    #[should_panic]
    fn zero_vertices() {
        AdjMatrix::<i32>::new(0);
    }

    #[test]
    fn edges_row_major() {
        let graph = AdjMatrix::<i32>::with_edges(3, [(2, 0), (0, 2), (0, 1), (1, 2)]);

        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![
                Edge::new(0, 1),
                Edge::new(0, 2),
                Edge::new(1, 2),
                Edge::new(2, 0),
            ]
        );
    }

    #[test]
    fn weighted_add() {
        let mut graph = AdjMatrix::<u32>::new(3);

        assert!(graph.add_weighted(Edge::new(0, 1), EdgeKind::Uni, 7));
        assert_eq!(graph.at(Edge::new(0, 1)), 7);
        assert_eq!(graph.at(Edge::new(1, 0)), 0);

        assert!(graph.add_weighted(Edge::new(1, 2), EdgeKind::Bi, 3));
        assert_eq!(graph.at(Edge::new(1, 2)), 3);
        assert_eq!(graph.at(Edge::new(2, 1)), 3);
    }

    #[test]
    fn get_mut_is_add() {
        let mut graph = AdjMatrix::<i32>::new(3);

        *graph.get_mut(1, 2) = 1;
        assert!(graph.contains_edge(Edge::new(1, 2)));
        assert_eq!(graph.count_edges(), 1);

        *graph.get_mut(1, 2) = 0;
        assert!(!graph.contains_edge(Edge::new(1, 2)));
        assert_eq!(graph.count_edges(), 0);
    }

    #[test]
    fn out_of_range_reads_absent() {
        let graph = AdjMatrix::<i32>::with_edges(2, [(0, 1)]);
        assert_eq!(graph.at(Edge::new(0, 5)), 0);
        assert_eq!(graph.at(Edge::new(5, 0)), 0);
        assert_eq!(graph.outgoing(5).count(), 0);
        assert_eq!(graph.incoming(5).count(), 0);
    }
}
