//! Graph algorithms.
//!
//! The weighted algorithms come in two flavors: the plain functions read
//! weights stored in the graph itself, the `_with` variants take an external
//! [`GetEdgeWeight`](crate::core::GetEdgeWeight) provider such as an
//! [`EdgePropertyMap`](crate::props::EdgePropertyMap) or a closure.

pub mod mst;
pub mod shortest_paths;
pub mod toposort;

#[doc(inline)]
pub use self::{
    mst::{minimum_spanning_tree_prim, minimum_spanning_tree_prim_with},
    shortest_paths::{shortest_path_dijkstra, shortest_path_dijkstra_with},
    toposort::topological_sort,
};
