//! Implementations of the graph storage backends.
//!
//! A backend implements the traits from the [`core`](crate::core) module;
//! every algorithm in the crate works against those traits and accepts either
//! backend.
//!
//! |                 | **[AdjMatrix]** | **[AdjList]**  |
//! |-----------------|-----------------|----------------|
//! | add edge        | _O(1)_          | _O(d)_         |
//! | remove edge     | _O(1)_          | _O(d)_         |
//! | lookup edge     | _O(1)_          | _O(d)_         |
//! | outgoing        | _O(V)_          | _O(1)_         |
//! | incoming        | _O(V)_          | _O(V + E)_     |
//! | enumerate edges | _O(V²)_         | _O(V + E)_     |
//! | edge values     | YES             | NO             |
//! | space           | _O(V²)_         | _O(V + E)_     |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex degree

pub mod adj_list;
pub mod adj_matrix;

#[doc(inline)]
pub use self::{adj_list::AdjList, adj_matrix::AdjMatrix};
