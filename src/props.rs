//! External property maps for vertices and edges.
//!
//! A property map attaches caller-chosen values to vertices or edges without
//! the graph storage knowing about them. The map captures only the vertex
//! count of the graph it was created for, never a reference to the graph
//! itself, so one map can outlive the graph or be reused across isomorphic
//! graphs.
//!
//! Two access modes exist on purpose and stay distinct: [`get`] fails on a
//! missing key, [`or_default`] silently creates a default entry.
//!
//! [`get`]: PropertyMap::get
//! [`or_default`]: PropertyMap::or_default
//!
//! # Examples
//!
//! ```
//! use gravis::props::EdgePropertyMap;
//! use gravis::storage::AdjList;
//!
//! let graph = AdjList::with_edges(3, [(0, 1), (1, 2)]);
//! let mut weights = EdgePropertyMap::<u32>::for_graph(&graph);
//!
//! weights.set((0, 1).into(), 4);
//! *weights.or_default((1, 2).into()) = 2;
//!
//! assert_eq!(weights.get((0, 1).into()), Ok(&4));
//! assert!(weights.get((2, 0).into()).is_err());
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{Edge, GetEdgeWeight, GraphBase, Vertex, Weight};

/// Error of a checked property lookup for a key without an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no property recorded for element")]
pub struct MissingProperty;

/// A key a property map can be indexed by.
pub trait PropertyKey: Copy + Eq + Hash + Ord {
    /// Whether the key refers into a graph with `size` vertices.
    fn in_bounds(&self, size: usize) -> bool;
}

impl PropertyKey for Vertex {
    fn in_bounds(&self, size: usize) -> bool {
        *self < size
    }
}

impl PropertyKey for Edge {
    fn in_bounds(&self, size: usize) -> bool {
        self.from < size && self.to < size
    }
}

/// External mapping from vertices or edges to caller-chosen values.
///
/// See the [module](self) documentation for details.
#[derive(Debug, Clone)]
pub struct PropertyMap<K, T> {
    size: usize,
    map: FxHashMap<K, T>,
}

/// Property map keyed by vertices.
pub type VertexPropertyMap<T> = PropertyMap<Vertex, T>;

/// Property map keyed by edges.
pub type EdgePropertyMap<T> = PropertyMap<Edge, T>;

impl<K: PropertyKey, T> PropertyMap<K, T> {
    /// Creates an empty map for graphs with `size` vertices.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            map: FxHashMap::default(),
        }
    }

    /// Creates an empty map sized for `graph`.
    pub fn for_graph<G: GraphBase>(graph: &G) -> Self {
        Self::new(graph.size())
    }

    /// The vertex count captured at construction.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether a property is recorded for `key`.
    pub fn contains(&self, key: K) -> bool {
        self.map.contains_key(&key)
    }

    /// Checked read access to an existing property.
    pub fn get(&self, key: K) -> Result<&T, MissingProperty> {
        self.map.get(&key).ok_or(MissingProperty)
    }

    /// Checked write access to an existing property.
    pub fn get_mut(&mut self, key: K) -> Result<&mut T, MissingProperty> {
        self.map.get_mut(&key).ok_or(MissingProperty)
    }

    /// Unchecked access: creates a default entry for `key` if there is none.
    pub fn or_default(&mut self, key: K) -> &mut T
    where
        T: Default,
    {
        self.map.entry(key).or_default()
    }

    /// Sets the property for `key`, checking the key against the captured
    /// vertex count. Returns `false` and stores nothing for an out-of-range
    /// key.
    pub fn set(&mut self, key: K, value: T) -> bool {
        if !key.in_bounds(self.size) {
            return false;
        }

        self.map.insert(key, value);
        true
    }

    /// Keys whose property satisfies `predicate`, sorted by key.
    pub fn collect_if<P>(&self, predicate: P) -> Vec<K>
    where
        P: Fn(&T) -> bool,
    {
        let mut keys = self
            .map
            .iter()
            .filter(|(_, value)| predicate(value))
            .map(|(&key, _)| key)
            .collect::<Vec<_>>();

        keys.sort_unstable();
        keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &T)> {
        self.map.iter()
    }
}

impl<W: Weight> GetEdgeWeight<W> for EdgePropertyMap<W> {
    fn edge_weight(&self, edge: Edge) -> Option<W> {
        self.map.get(&edge).copied()
    }
}
