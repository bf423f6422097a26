//! Minimum spanning tree.
//!
//! Implements [Prim's algorithm] over the [`PriorityQueue`] with positional
//! updates standing in for decrease-key. Weights must be strictly positive;
//! on a bidirectionally connected graph the result is a spanning tree of
//! minimum total weight.
//!
//! [Prim's algorithm]: https://en.wikipedia.org/wiki/Prim%27s_algorithm

use fixedbitset::FixedBitSet;

use crate::common::PriorityQueue;
use crate::core::{
    Edge, Edges, EdgeValue, GetEdgeWeight, Neighbors, Vertex, Weight, Weighted, INVALID_VERTEX,
};

/// Computes a minimum spanning tree from the weights stored in the graph.
///
/// Returns one edge `(parent, vertex)` per vertex, in the order the vertices
/// were drawn into the tree. The start vertex and every vertex unreachable
/// from it carry [`INVALID_VERTEX`] as parent. An out-of-range `start`
/// returns an empty vector.
///
/// # Examples
///
/// ```
/// use gravis::algo::minimum_spanning_tree_prim;
/// use gravis::core::{Edge, EdgeKind, GraphMut, INVALID_VERTEX};
/// use gravis::storage::AdjMatrix;
///
/// let mut graph = AdjMatrix::<u32>::new(3);
/// graph.add_weighted(Edge::new(0, 1), EdgeKind::Bi, 4);
/// graph.add_weighted(Edge::new(1, 2), EdgeKind::Bi, 1);
/// graph.add_weighted(Edge::new(0, 2), EdgeKind::Bi, 2);
///
/// let tree = minimum_spanning_tree_prim(&graph, 0);
/// assert_eq!(tree[0], Edge::new(INVALID_VERTEX, 0));
/// assert_eq!(&tree[1..], &[Edge::new(0, 2), Edge::new(2, 1)]);
/// ```
pub fn minimum_spanning_tree_prim<G>(graph: &G, start: Vertex) -> Vec<Edge>
where
    G: Neighbors + Edges,
    G::EdgeValue: Weight,
{
    let weights = |edge: Edge| {
        let value = graph.at(edge);
        value.is_present().then_some(value)
    };

    minimum_spanning_tree_prim_with(graph, &weights, start)
}

/// Computes a minimum spanning tree with weights from an external provider.
///
/// Edges the provider knows no weight for are treated as absent. See
/// [`minimum_spanning_tree_prim`] for the output format.
pub fn minimum_spanning_tree_prim_with<G, W, P>(graph: &G, weights: &P, start: Vertex) -> Vec<Edge>
where
    G: Neighbors,
    W: Weight,
    P: GetEdgeWeight<W>,
{
    let n = graph.size();

    if start >= n {
        return Vec::new();
    }

    // cost[v] is the cheapest known edge connecting v to the growing tree,
    // infinite while no such edge is known; the queue elements carry a
    // snapshot of it as their priority.
    let mut cost = vec![W::inf(); n];
    cost[start] = W::zero();
    let mut parent = vec![INVALID_VERTEX; n];

    let mut in_queue = FixedBitSet::with_capacity(n);
    in_queue.insert_range(..);

    let mut queue = PriorityQueue::from_vec(
        min_cost_first::<W>,
        graph.vertices().map(|v| Weighted(v, cost[v])).collect(),
    );

    let mut tree = Vec::with_capacity(n);

    while let Some(Weighted(vertex, vertex_cost)) = queue.pop() {
        in_queue.set(vertex, false);
        tree.push(Edge::new(parent[vertex], vertex));

        // An infinite cost means the vertex is outside the start's component.
        // Its edges must not pull further vertices into the tree.
        if vertex_cost == W::inf() {
            continue;
        }

        for neighbor in graph.outgoing(vertex) {
            if !in_queue.contains(neighbor) {
                continue;
            }

            if let Some(weight) = weights.edge_weight(Edge::new(vertex, neighbor)) {
                if weight < cost[neighbor] {
                    cost[neighbor] = weight;
                    parent[neighbor] = vertex;

                    if let Some(slot) = queue.position(|&Weighted(queued, _)| queued == neighbor) {
                        queue.update(slot, Weighted(neighbor, weight));
                    }
                }
            }
        }
    }

    tree
}

/// Min-first ordering with ties broken towards the lower vertex id.
pub(crate) fn min_cost_first<W: Weight>(
    lhs: &Weighted<Vertex, W>,
    rhs: &Weighted<Vertex, W>,
) -> std::cmp::Ordering {
    rhs.1.cmp(&lhs.1).then_with(|| rhs.0.cmp(&lhs.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EdgeKind, GraphMut};
    use crate::props::EdgePropertyMap;
    use crate::storage::{AdjList, AdjMatrix};

    fn weighted_square() -> AdjMatrix<u32> {
        let mut graph = AdjMatrix::new(4);
        graph.add_weighted(Edge::new(0, 1), EdgeKind::Bi, 2);
        graph.add_weighted(Edge::new(0, 3), EdgeKind::Bi, 1);
        graph.add_weighted(Edge::new(1, 3), EdgeKind::Bi, 2);
        graph.add_weighted(Edge::new(2, 3), EdgeKind::Bi, 3);
        graph
    }

    fn tree_weight(graph: &AdjMatrix<u32>, tree: &[Edge]) -> u32 {
        tree.iter()
            .filter(|edge| edge.from != INVALID_VERTEX)
            .map(|&edge| graph.at(edge))
            .sum()
    }

    #[test]
    fn spanning_tree_weight() {
        let graph = weighted_square();
        let tree = minimum_spanning_tree_prim(&graph, 0);

        assert_eq!(tree.len(), 4);
        assert_eq!(tree_weight(&graph, &tree), 6);

        let roots = tree
            .iter()
            .filter(|edge| edge.from == INVALID_VERTEX)
            .count();
        assert_eq!(roots, 1);
        assert_eq!(tree[0], Edge::new(INVALID_VERTEX, 0));
    }

    #[test]
    fn start_elsewhere_same_weight() {
        let graph = weighted_square();
        let tree = minimum_spanning_tree_prim(&graph, 2);

        assert_eq!(tree_weight(&graph, &tree), 6);
        assert_eq!(tree[0], Edge::new(INVALID_VERTEX, 2));
    }

    #[test]
    fn disconnected_vertices_keep_invalid_parent() {
        let mut graph = AdjMatrix::<u32>::new(5);
        graph.add_weighted(Edge::new(0, 1), EdgeKind::Bi, 1);
        graph.add_weighted(Edge::new(1, 2), EdgeKind::Bi, 1);

        let tree = minimum_spanning_tree_prim(&graph, 0);
        assert_eq!(tree.len(), 5);

        let orphans = tree
            .iter()
            .filter(|edge| edge.from == INVALID_VERTEX)
            .map(|edge| edge.to)
            .collect::<Vec<_>>();
        assert_eq!(orphans, vec![0, 3, 4]);
    }

    #[test]
    fn edges_inside_unreached_component_ignored() {
        // The component {3, 4} has an internal edge; neither its vertices nor
        // its weight may leak into the tree grown from 0.
        let mut graph = AdjMatrix::<u32>::new(5);
        graph.add_weighted(Edge::new(0, 1), EdgeKind::Bi, 1);
        graph.add_weighted(Edge::new(1, 2), EdgeKind::Bi, 1);
        graph.add_weighted(Edge::new(3, 4), EdgeKind::Bi, 1);

        let tree = minimum_spanning_tree_prim(&graph, 0);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree_weight(&graph, &tree), 2);

        let orphans = tree
            .iter()
            .filter(|edge| edge.from == INVALID_VERTEX)
            .map(|edge| edge.to)
            .collect::<Vec<_>>();
        assert_eq!(orphans, vec![0, 3, 4]);
    }

    #[test]
    fn invalid_start_returns_empty() {
        let graph = weighted_square();
        assert!(minimum_spanning_tree_prim(&graph, 9).is_empty());
    }

    #[test]
    fn external_weights_on_sparse_graph() {
        let mut graph = AdjList::new(4);
        let mut weights = EdgePropertyMap::<u32>::for_graph(&graph);

        for (from, to, weight) in [(0, 1, 2), (0, 3, 1), (1, 3, 2), (2, 3, 3)] {
            graph.add(Edge::new(from, to), EdgeKind::Bi);
            weights.set(Edge::new(from, to), weight);
            weights.set(Edge::new(to, from), weight);
        }

        let tree = minimum_spanning_tree_prim_with(&graph, &weights, 0);

        let total: u32 = tree
            .iter()
            .filter(|edge| edge.from != INVALID_VERTEX)
            .map(|&edge| *weights.get(edge).unwrap())
            .sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn cheaper_edge_replaces_parent() {
        // Vertex 2 is first reached over the expensive edge from 0, then the
        // tree grows to 1 and the cheap edge 1 -> 2 takes over.
        let mut graph = AdjMatrix::<u32>::new(3);
        graph.add_weighted(Edge::new(0, 1), EdgeKind::Bi, 1);
        graph.add_weighted(Edge::new(0, 2), EdgeKind::Bi, 10);
        graph.add_weighted(Edge::new(1, 2), EdgeKind::Bi, 2);

        let tree = minimum_spanning_tree_prim(&graph, 0);
        assert_eq!(
            tree,
            vec![
                Edge::new(INVALID_VERTEX, 0),
                Edge::new(0, 1),
                Edge::new(1, 2),
            ]
        );
    }
}
