//! Reusable containers that are not graphs themselves.

pub mod priority_queue;

#[doc(inline)]
pub use priority_queue::{Compare, NaturalOrder, PriorityQueue};
