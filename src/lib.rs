//! Generic graph-algorithms engine.
//!
//! The crate is organized around a small structural contract
//! ([`core`](crate::core)) that interchangeable storage backends
//! ([`storage`](crate::storage)) implement and that the algorithms
//! ([`visit`](crate::visit), [`algo`](crate::algo)) are generic over. Values
//! attached to vertices or edges from the outside live in
//! [property maps](crate::props), and the weighted algorithms are driven by a
//! reusable [priority queue](crate::common::PriorityQueue).
//!
//! # Examples
//!
//! ```
//! use gravis::algo::shortest_path_dijkstra;
//! use gravis::core::{EdgeKind, GraphMut};
//! use gravis::storage::AdjMatrix;
//!
//! let mut graph = AdjMatrix::<u32>::new(5);
//!
//! graph.add_weighted((0, 1).into(), EdgeKind::Uni, 1);
//! graph.add_weighted((0, 2).into(), EdgeKind::Uni, 2);
//! graph.add_weighted((1, 3).into(), EdgeKind::Uni, 3);
//! graph.add_weighted((2, 3).into(), EdgeKind::Uni, 1);
//! graph.add_weighted((3, 4).into(), EdgeKind::Uni, 1);
//!
//! let path = shortest_path_dijkstra(&graph, 0, 4).unwrap();
//! assert_eq!(path, vec![0, 2, 3, 4]);
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod props;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{Edge, EdgeKind, Edges, GraphBase, GraphMut, Neighbors, Vertex, INVALID_VERTEX},
        storage::{AdjList, AdjMatrix},
    };
}
