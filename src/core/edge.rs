use std::fmt;

/// Vertex identifier. Also used as index into the backing storage of the
/// graph backends and of algorithm-local arrays.
pub type Vertex = usize;

/// Sentinel identifier meaning "no vertex".
///
/// Used where an absent predecessor or parent must be representable, e.g. in
/// the output of [Prim's algorithm](crate::algo::minimum_spanning_tree_prim).
pub const INVALID_VERTEX: Vertex = Vertex::MAX;

/// A directed arc between two vertices.
///
/// An edge is an immutable ordered pair. It carries no directionality flag of
/// its own; whether the reverse arc exists too is a construction-time policy
/// of the graph (see [`EdgeKind`]). The ordering is lexicographic by
/// `(from, to)` so that edges can key ordered collections, and edges hash so
/// that they can key [property maps](crate::props).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
}

impl Edge {
    pub const fn new(from: Vertex, to: Vertex) -> Self {
        Self { from, to }
    }

    /// Returns the edge with swapped endpoints.
    pub const fn reverse(&self) -> Self {
        Self::new(self.to, self.from)
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((from, to): (Vertex, Vertex)) -> Self {
        Self::new(from, to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Directionality policy applied when adding or removing an edge.
///
/// [`Bi`](EdgeKind::Bi) writes (or clears) both `(from, to)` and
/// `(to, from)`; the stored arcs are otherwise indistinguishable from two
/// unidirectional insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Unidirectional edge.
    Uni,
    /// Bidirectional edge.
    Bi,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_swaps_endpoints() {
        let e = Edge::new(2, 7);
        assert_eq!(e.reverse(), Edge::new(7, 2));
        assert_eq!(e.reverse().reverse(), e);
    }

    #[test]
    fn lexicographic_order() {
        let mut edges = vec![Edge::new(1, 0), Edge::new(0, 2), Edge::new(0, 1)];
        edges.sort();
        assert_eq!(
            edges,
            vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 0)]
        );
    }
}
