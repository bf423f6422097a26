use std::ops::Range;

use crate::core::{Edge, EdgeKind, EdgeValue, Vertex};

/// Base of the structural contract: a fixed set of vertices `0..size()`.
///
/// The vertex count is fixed at construction; backends never grow or shrink.
pub trait GraphBase {
    /// The value stored per edge. For backends without weight storage this is
    /// `bool` (presence only).
    type EdgeValue: EdgeValue;

    /// Number of vertices in the graph.
    fn size(&self) -> usize;

    /// Ascending sequence of all vertex identifiers, `0..size()`.
    fn vertices(&self) -> VertexIds {
        VertexIds(0..self.size())
    }

    fn contains_vertex(&self, vertex: Vertex) -> bool {
        vertex < self.size()
    }
}

/// Iterator over the vertex identifiers of a graph.
#[derive(Debug, Clone)]
pub struct VertexIds(Range<usize>);

impl Iterator for VertexIds {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for VertexIds {}

impl DoubleEndedIterator for VertexIds {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

/// Neighbor access along edge direction.
///
/// An out-of-range vertex is not an error: the iterators are empty and the
/// counts are zero.
pub trait Neighbors: GraphBase {
    type OutgoingIter<'a>: Iterator<Item = Vertex>
    where
        Self: 'a;

    type IncomingIter<'a>: Iterator<Item = Vertex>
    where
        Self: 'a;

    /// Vertices reachable over one edge from `from`.
    fn outgoing(&self, from: Vertex) -> Self::OutgoingIter<'_>;

    /// Vertices with an edge ending in `to`.
    fn incoming(&self, to: Vertex) -> Self::IncomingIter<'_>;

    fn count_outgoing(&self, from: Vertex) -> usize {
        self.outgoing(from).count()
    }

    fn count_incoming(&self, to: Vertex) -> usize {
        self.incoming(to).count()
    }
}

/// Edge lookup and enumeration.
pub trait Edges: GraphBase {
    type EdgesIter<'a>: Iterator<Item = Edge>
    where
        Self: 'a;

    /// Returns the value stored for `edge`.
    ///
    /// The default value means the edge is absent (see
    /// [`EdgeValue::is_present`]). Out-of-range endpoints read as absent.
    fn at(&self, edge: Edge) -> Self::EdgeValue;

    fn contains_edge(&self, edge: Edge) -> bool {
        self.at(edge).is_present()
    }

    /// All present edges. The iteration order is fixed per backend: row-major
    /// for the dense backend, vertex-major in insertion order for the sparse
    /// backend.
    fn edges(&self) -> Self::EdgesIter<'_>;

    /// Total number of present edges.
    fn count_edges(&self) -> usize;
}

/// Edge insertion and removal.
///
/// Both operations report an out-of-range endpoint by returning `false` and
/// leaving the graph unchanged. No error type is involved.
pub trait GraphMut: Edges {
    /// Writes `value` for `edge` and, for [`EdgeKind::Bi`], for its reverse.
    fn add_weighted(&mut self, edge: Edge, kind: EdgeKind, value: Self::EdgeValue) -> bool;

    /// Adds `edge` with the unit value.
    fn add(&mut self, edge: Edge, kind: EdgeKind) -> bool {
        self.add_weighted(edge, kind, Self::EdgeValue::unit())
    }

    /// Removes `edge` and, for [`EdgeKind::Bi`], its reverse.
    fn remove(&mut self, edge: Edge, kind: EdgeKind) -> bool;
}
