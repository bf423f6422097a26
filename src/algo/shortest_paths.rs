//! Single-pair shortest path.
//!
//! Implements [Dijkstra's algorithm] with the same queue discipline as the
//! [MST](crate::algo::mst) module: a [`PriorityQueue`] of vertices keyed by
//! their current distance, updated positionally when a relaxation improves a
//! distance. Weights must be strictly positive.
//!
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use gravis::algo::shortest_path_dijkstra;
//! use gravis::core::{Edge, EdgeKind, GraphMut};
//! use gravis::storage::AdjMatrix;
//!
//! let mut graph = AdjMatrix::<u32>::new(4);
//! graph.add_weighted(Edge::new(0, 1), EdgeKind::Uni, 7);
//! graph.add_weighted(Edge::new(0, 2), EdgeKind::Uni, 1);
//! graph.add_weighted(Edge::new(2, 1), EdgeKind::Uni, 2);
//! graph.add_weighted(Edge::new(1, 3), EdgeKind::Uni, 1);
//!
//! assert_eq!(shortest_path_dijkstra(&graph, 0, 3), Ok(vec![0, 2, 1, 3]));
//! ```

use fixedbitset::FixedBitSet;
use thiserror::Error;

use crate::algo::mst::min_cost_first;
use crate::common::PriorityQueue;
use crate::core::{
    Edge, Edges, EdgeValue, GetEdgeWeight, Neighbors, Vertex, Weight, Weighted, INVALID_VERTEX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("destination not reachable from start")]
    Unreachable,
}

/// Finds a minimum-weight path using the weights stored in the graph.
///
/// The path is returned as the vertex sequence from `start` to `destination`
/// inclusive; for `start == destination` it is the single-vertex path. An
/// unreachable destination, or an out-of-range endpoint, is
/// [`Error::Unreachable`] with no partial path.
pub fn shortest_path_dijkstra<G>(
    graph: &G,
    start: Vertex,
    destination: Vertex,
) -> Result<Vec<Vertex>, Error>
where
    G: Neighbors + Edges,
    G::EdgeValue: Weight,
{
    let weights = |edge: Edge| {
        let value = graph.at(edge);
        value.is_present().then_some(value)
    };

    shortest_path_dijkstra_with(graph, &weights, start, destination)
}

/// Finds a minimum-weight path with weights from an external provider.
///
/// Edges the provider knows no weight for are treated as absent. See
/// [`shortest_path_dijkstra`] for the path format.
pub fn shortest_path_dijkstra_with<G, W, P>(
    graph: &G,
    weights: &P,
    start: Vertex,
    destination: Vertex,
) -> Result<Vec<Vertex>, Error>
where
    G: Neighbors,
    W: Weight,
    P: GetEdgeWeight<W>,
{
    let n = graph.size();

    if start >= n || destination >= n {
        return Err(Error::Unreachable);
    }

    let mut distance = vec![W::inf(); n];
    distance[start] = W::zero();
    let mut predecessor = vec![INVALID_VERTEX; n];

    let mut in_queue = FixedBitSet::with_capacity(n);
    in_queue.insert_range(..);

    let mut queue = PriorityQueue::from_vec(
        min_cost_first::<W>,
        graph.vertices().map(|v| Weighted(v, distance[v])).collect(),
    );

    while let Some(Weighted(vertex, dist)) = queue.pop() {
        // Everything still queued is unreachable from here on.
        if dist == W::inf() {
            break;
        }

        in_queue.set(vertex, false);

        if vertex == destination {
            return Ok(reconstruct(&predecessor, start, destination));
        }

        for neighbor in graph.outgoing(vertex) {
            if !in_queue.contains(neighbor) {
                continue;
            }

            if let Some(weight) = weights.edge_weight(Edge::new(vertex, neighbor)) {
                let relaxed = dist + weight;

                if relaxed < distance[neighbor] {
                    distance[neighbor] = relaxed;
                    predecessor[neighbor] = vertex;

                    if let Some(slot) = queue.position(|&Weighted(queued, _)| queued == neighbor) {
                        queue.update(slot, Weighted(neighbor, relaxed));
                    }
                }
            }
        }
    }

    Err(Error::Unreachable)
}

fn reconstruct(predecessor: &[Vertex], start: Vertex, destination: Vertex) -> Vec<Vertex> {
    let mut path = vec![destination];
    let mut current = destination;

    while current != start {
        current = predecessor[current];
        path.push(current);
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::core::{EdgeKind, GraphMut};
    use crate::props::EdgePropertyMap;
    use crate::storage::{AdjList, AdjMatrix};

    fn weighted_dag() -> AdjMatrix<u32> {
        let mut graph = AdjMatrix::new(5);

        for (from, to, weight) in [
            (0, 1, 1),
            (0, 2, 2),
            (1, 2, 2),
            (1, 3, 3),
            (2, 3, 1),
            (2, 4, 5),
            (3, 4, 1),
        ] {
            graph.add_weighted(Edge::new(from, to), EdgeKind::Uni, weight);
        }

        graph
    }

    #[test]
    fn picks_the_cheapest_path() {
        let graph = weighted_dag();
        assert_eq!(shortest_path_dijkstra(&graph, 0, 4), Ok(vec![0, 2, 3, 4]));
    }

    #[test]
    fn intermediate_destination() {
        let graph = weighted_dag();
        assert_eq!(shortest_path_dijkstra(&graph, 0, 3), Ok(vec![0, 2, 3]));
    }

    #[test]
    fn start_is_destination() {
        let graph = weighted_dag();
        assert_eq!(shortest_path_dijkstra(&graph, 2, 2), Ok(vec![2]));
    }

    #[test]
    fn unreachable_destination() {
        let graph = AdjMatrix::<u32>::with_edges(4, [(0, 1), (1, 2)]);
        assert_matches!(
            shortest_path_dijkstra(&graph, 0, 3),
            Err(Error::Unreachable)
        );
    }

    #[test]
    fn out_of_range_endpoints() {
        let graph = weighted_dag();
        assert_matches!(shortest_path_dijkstra(&graph, 9, 4), Err(Error::Unreachable));
        assert_matches!(shortest_path_dijkstra(&graph, 0, 9), Err(Error::Unreachable));
    }

    #[test]
    fn external_weights_on_sparse_graph() {
        let mut graph = AdjList::new(5);
        let mut weights = EdgePropertyMap::<u32>::for_graph(&graph);

        for (from, to, weight) in [
            (0, 1, 1),
            (0, 2, 2),
            (1, 2, 2),
            (1, 3, 3),
            (2, 3, 1),
            (2, 4, 5),
            (3, 4, 1),
        ] {
            graph.add(Edge::new(from, to), EdgeKind::Uni);
            weights.set(Edge::new(from, to), weight);
        }

        assert_eq!(
            shortest_path_dijkstra_with(&graph, &weights, 0, 4),
            Ok(vec![0, 2, 3, 4])
        );
    }

    #[test]
    fn distances_match_floyd_warshall() {
        let mut rng = fastrand::Rng::with_seed(23);
        let n = 12;
        let mut graph = AdjMatrix::<u32>::new(n);

        for _ in 0..50 {
            let from = rng.usize(0..n);
            let to = rng.usize(0..n);
            if from != to {
                graph.add_weighted(Edge::new(from, to), EdgeKind::Uni, rng.u32(1..10));
            }
        }

        let mut dist = vec![vec![u32::MAX; n]; n];
        for v in 0..n {
            dist[v][v] = 0;
        }
        for edge in graph.edges() {
            dist[edge.from][edge.to] = dist[edge.from][edge.to].min(graph.at(edge));
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if dist[i][k] != u32::MAX && dist[k][j] != u32::MAX {
                        dist[i][j] = dist[i][j].min(dist[i][k] + dist[k][j]);
                    }
                }
            }
        }

        for start in 0..n {
            for destination in 0..n {
                match shortest_path_dijkstra(&graph, start, destination) {
                    Ok(path) => {
                        assert_eq!(path.first(), Some(&start));
                        assert_eq!(path.last(), Some(&destination));

                        let total: u32 = path
                            .windows(2)
                            .map(|pair| graph.at(Edge::new(pair[0], pair[1])))
                            .sum();
                        assert_eq!(total, dist[start][destination]);
                    }
                    Err(Error::Unreachable) => {
                        assert_eq!(dist[start][destination], u32::MAX);
                    }
                }
            }
        }
    }
}
