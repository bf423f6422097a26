//! Array-backed binary heap with support for externally-driven
//! reheapification.
//!
//! The queue orders elements by a caller-supplied [comparator](Compare); the
//! element comparing greatest sits at the top. On top of the usual heap
//! operations it exposes what algorithms with *external* priority keys need:
//! read-only [iteration](PriorityQueue::iter) and a linear
//! [`position`](PriorityQueue::position) search to locate an element's
//! current slot, a positional [`update`](PriorityQueue::update) that writes a
//! slot and restores the heap property, and a public
//! [`rebuild`](PriorityQueue::rebuild) for comparators that read state
//! mutated behind the queue's back.
//!
//! `update` and `rebuild` re-heapify the whole array in O(n). An indexed heap
//! with O(log n) decrease-key would do better if the rebuild ever dominates a
//! profile.

use std::cmp::Ordering;

/// Comparison policy of a [`PriorityQueue`].
pub trait Compare<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self)(lhs, rhs)
    }
}

/// The [`Ord`]-based default comparison policy.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Binary max-heap over a `Vec`, ordered by a [`Compare`] policy.
///
/// The heap invariant holds after every mutating call. Slot positions are
/// *not* stable across mutating calls; a position obtained from
/// [`position`](PriorityQueue::position) is only valid until the next
/// mutation.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, C = NaturalOrder> {
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue ordered by `T`'s [`Ord`].
    pub fn new() -> Self {
        Self::with_compare(NaturalOrder)
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Creates an empty queue with the given comparison policy.
    pub fn with_compare(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Takes over `data` and heapifies it, O(n).
    pub fn from_vec(cmp: C, data: Vec<T>) -> Self {
        let mut queue = Self { data, cmp };
        queue.rebuild();
        queue
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The greatest element, O(1).
    pub fn top(&self) -> Option<&T> {
        self.data.first()
    }

    /// Read-only iteration over the backing array, in heap order, not sorted
    /// order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Linearly searches for the first element satisfying `predicate` and
    /// returns its current slot, O(n).
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.data.iter().position(predicate)
    }

    /// Inserts an element, amortized O(log n).
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the greatest element, O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        top
    }

    /// Overwrites the element at `position` and restores the heap property
    /// with a full [`rebuild`](PriorityQueue::rebuild), O(n). Out-of-range
    /// positions are ignored.
    pub fn update(&mut self, position: usize, value: T) {
        if position >= self.data.len() {
            return;
        }

        self.data[position] = value;
        self.rebuild();
    }

    /// Re-heapifies the whole array, O(n).
    ///
    /// Required after the keys the comparator reads have changed outside the
    /// queue; the queue cannot detect such changes on its own.
    pub fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;

            if self.cmp.compare(&self.data[index], &self.data[parent]) != Ordering::Greater {
                break;
            }

            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();

        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut greatest = index;

            if left < len
                && self.cmp.compare(&self.data[left], &self.data[greatest]) == Ordering::Greater
            {
                greatest = left;
            }

            if right < len
                && self.cmp.compare(&self.data[right], &self.data[greatest]) == Ordering::Greater
            {
                greatest = right;
            }

            if greatest == index {
                break;
            }

            self.data.swap(index, greatest);
            index = greatest;
        }
    }
}
