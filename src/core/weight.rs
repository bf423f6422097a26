use std::cmp::Ordering;
use std::ops::Add;

use crate::core::Edge;

/// A value stored for an edge in a graph backend.
///
/// The default value means "no edge"; any other value means "edge present".
/// For numeric values this conflates "no edge" with "zero-weight edge", which
/// makes zero-weight edges unrepresentable. This is a known limitation of the
/// encoding, kept as is.
pub trait EdgeValue: Clone + PartialEq + Default {
    /// The value written by weight-less insertions ([`GraphMut::add`]).
    ///
    /// [`GraphMut::add`]: crate::core::GraphMut::add
    fn unit() -> Self;

    fn is_present(&self) -> bool {
        *self != Self::default()
    }
}

impl EdgeValue for bool {
    fn unit() -> Self {
        true
    }
}

/// An edge weight usable by the weighted algorithms.
///
/// Implemented for the integer primitives. [`inf`](Weight::inf) is the
/// unreachable-distance sentinel; real path costs must stay clear of it.
pub trait Weight: EdgeValue + Copy + Ord + Add<Output = Self> {
    fn zero() -> Self;
    fn inf() -> Self;
}

macro_rules! impl_weight {
    ($ty:ty) => {
        impl EdgeValue for $ty {
            fn unit() -> Self {
                1
            }
        }

        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }
        }
    };
}

impl_weight!(i8);
impl_weight!(i16);
impl_weight!(i32);
impl_weight!(i64);
impl_weight!(u8);
impl_weight!(u16);
impl_weight!(u32);
impl_weight!(u64);
impl_weight!(isize);
impl_weight!(usize);

/// A value paired with its priority, compared by the priority.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

/// External edge-weight provider for [Prim](crate::algo::mst) and
/// [Dijkstra](crate::algo::shortest_paths).
///
/// The weighted algorithms look edge weights up through this seam instead of
/// requiring the graph itself to store them. `None` means the provider knows
/// no weight for the edge; the algorithms then treat the edge as absent.
///
/// Implemented for closures and for
/// [`EdgePropertyMap`](crate::props::EdgePropertyMap).
pub trait GetEdgeWeight<W: Weight> {
    fn edge_weight(&self, edge: Edge) -> Option<W>;
}

impl<W, F> GetEdgeWeight<W> for F
where
    W: Weight,
    F: Fn(Edge) -> Option<W>,
{
    fn edge_weight(&self, edge: Edge) -> Option<W> {
        (self)(edge)
    }
}
