//! Persistent FIFO queue with O(1) snapshots.
//!
//! Every node keeps `DEPTH` back-pointers, `prev[k]` being the node pushed
//! `2^k` positions earlier. The head is never linked forward; `pop` finds the
//! new head by jumping back from the tail along the binary representation of
//! the distance. Nodes are immutable and shared between snapshots through
//! [`Rc`], so cloning a queue copies three words.
//!
//! The lifting table bounds the reachable distance: a queue holds at most
//! [`PersistentQueue::CAPACITY`] (`2^DEPTH`) elements.

use std::fmt;
use std::rc::Rc;

use bit::Bits;
use bounds::expect_ok;

type Link<T, const DEPTH: usize> = Option<Rc<Node<T, DEPTH>>>;

struct Node<T, const DEPTH: usize> {
    value: T,
    prev: [Link<T, DEPTH>; DEPTH],
}

impl<T, const DEPTH: usize> Drop for Node<T, DEPTH> {
    // Unlinks iteratively; a long history would otherwise drop recursively.
    fn drop(&mut self) {
        let mut stack = self
            .prev
            .iter_mut()
            .filter_map(Option::take)
            .collect::<Vec<_>>();
        while let Some(node) = stack.pop() {
            if let Ok(mut node) = Rc::try_unwrap(node) {
                stack.extend(node.prev.iter_mut().filter_map(Option::take));
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PersistentQueueError {
    #[error("queue is empty")]
    Empty,

    #[error("queue capacity of {capacity} elements exceeded")]
    CapacityExceeded { capacity: usize },
}

pub struct PersistentQueue<T, const DEPTH: usize = 20> {
    len: usize,
    head: Link<T, DEPTH>,
    tail: Link<T, DEPTH>,
}

impl<T, const DEPTH: usize> PersistentQueue<T, DEPTH> {
    pub const CAPACITY: usize = if DEPTH >= usize::BITS as usize {
        usize::MAX
    } else {
        1 << DEPTH
    };

    pub fn new() -> Self {
        Self {
            len: 0,
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    #[track_caller]
    pub fn front(&self) -> &T {
        expect_ok(self.try_front())
    }

    pub fn try_front(&self) -> Result<&T, PersistentQueueError> {
        self.head
            .as_ref()
            .map(|node| &node.value)
            .ok_or(PersistentQueueError::Empty)
    }

    pub fn front_or<'a>(&'a self, default: &'a T) -> &'a T {
        self.try_front().unwrap_or(default)
    }

    #[track_caller]
    pub fn back(&self) -> &T {
        expect_ok(self.try_back())
    }

    pub fn try_back(&self) -> Result<&T, PersistentQueueError> {
        self.tail
            .as_ref()
            .map(|node| &node.value)
            .ok_or(PersistentQueueError::Empty)
    }

    pub fn back_or<'a>(&'a self, default: &'a T) -> &'a T {
        self.try_back().unwrap_or(default)
    }

    #[track_caller]
    pub fn push(&mut self, value: T) {
        expect_ok(self.try_push(value))
    }

    pub fn try_push(&mut self, value: T) -> Result<(), PersistentQueueError> {
        const {
            assert!(DEPTH > 0, "persistent queue needs at least one back-pointer");
        }
        if self.len >= Self::CAPACITY {
            return Err(PersistentQueueError::CapacityExceeded {
                capacity: Self::CAPACITY,
            });
        }

        let mut prev: [Link<T, DEPTH>; DEPTH] = std::array::from_fn(|_| None);
        prev[0] = self.tail.clone();
        for k in 1..DEPTH {
            let lifted = match &prev[k - 1] {
                Some(node) => node.prev[k - 1].clone(),
                None => break,
            };
            prev[k] = lifted;
        }

        let node = Rc::new(Node { value, prev });
        if self.head.is_none() {
            self.head = Some(Rc::clone(&node));
        }
        self.tail = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Removes the front element.
    #[track_caller]
    pub fn pop(&mut self) {
        expect_ok(self.try_pop())
    }

    pub fn try_pop(&mut self) -> Result<(), PersistentQueueError> {
        if self.len == 0 {
            return Err(PersistentQueueError::Empty);
        }
        if self.len == 1 {
            self.clear();
            return Ok(());
        }

        let head = self.nth_back(self.len - 2).map(Rc::clone);
        debug_assert!(head.is_some());
        self.head = head;
        self.len -= 1;
        Ok(())
    }

    /// A snapshot with `value` pushed; `self` is unchanged.
    #[track_caller]
    pub fn pushed(&self, value: T) -> Self {
        let mut next = self.clone();
        next.push(value);
        next
    }

    /// A snapshot with the front removed; `self` is unchanged.
    #[track_caller]
    pub fn popped(&self) -> Self {
        let mut next = self.clone();
        next.pop();
        next
    }

    /// The node `steps` positions before the tail.
    fn nth_back(&self, mut steps: usize) -> Option<&Rc<Node<T, DEPTH>>> {
        let mut node = self.tail.as_ref()?;
        while steps > 0 {
            let k = steps.highest_bit_pos();
            steps -= 1 << k;
            node = node.prev[k as usize].as_ref()?;
        }
        Some(node)
    }

    /// Element `index` positions behind the front. O(log len).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.nth_back(self.len - 1 - index).map(|node| &node.value)
    }

    pub fn iter(&self) -> Iter<'_, T, DEPTH> {
        Iter {
            queue: self,
            front: 0,
            back: self.len,
        }
    }
}

impl<T, const DEPTH: usize> Clone for PersistentQueue<T, DEPTH> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            head: self.head.clone(),
            tail: self.tail.clone(),
        }
    }
}

impl<T, const DEPTH: usize> Default for PersistentQueue<T, DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const DEPTH: usize> fmt::Debug for PersistentQueue<T, DEPTH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const DEPTH: usize> PartialEq for PersistentQueue<T, DEPTH> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const DEPTH: usize> Eq for PersistentQueue<T, DEPTH> {}

impl<T, const DEPTH: usize> Extend<T> for PersistentQueue<T, DEPTH> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, const DEPTH: usize> FromIterator<T> for PersistentQueue<T, DEPTH> {
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Front-to-back iterator. O(log len) per element.
pub struct Iter<'a, T, const DEPTH: usize> {
    queue: &'a PersistentQueue<T, DEPTH>,
    front: usize,
    back: usize,
}

impl<'a, T, const DEPTH: usize> Iterator for Iter<'a, T, DEPTH> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.queue.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = self.back - self.front;
        (remain, Some(remain))
    }
}

impl<T, const DEPTH: usize> DoubleEndedIterator for Iter<'_, T, DEPTH> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.queue.get(self.back)
    }
}

impl<T, const DEPTH: usize> ExactSizeIterator for Iter<'_, T, DEPTH> {}

impl<'a, T, const DEPTH: usize> IntoIterator for &'a PersistentQueue<T, DEPTH> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, DEPTH>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{PersistentQueue, PersistentQueueError};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;

    #[test]
    fn push_pop_clone_scenario() {
        let mut q = PersistentQueue::<i32>::new();
        for x in 1..=5 {
            q.push(x);
        }
        assert_eq!(*q.front(), 1);
        assert_eq!(*q.back(), 5);
        assert_eq!(q.len(), 5);

        let snapshot = q.clone();
        q.pop();
        q.pop();
        q.pop();
        assert_eq!(*q.front(), 4);
        assert_eq!(q.len(), 2);

        assert_eq!(*snapshot.front(), 1);
        assert_eq!(*snapshot.back(), 5);
        assert_eq!(snapshot.len(), 5);
        assert_eq!(snapshot.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn fifo_order_for_all_lengths() {
        for n in 0..300 {
            let mut q = (0..n).collect::<PersistentQueue<usize>>();
            for expected in 0..n {
                assert_eq!(*q.front(), expected);
                assert_eq!(*q.back(), n - 1);
                q.pop();
            }
            assert!(q.is_empty());
        }
    }

    #[test]
    fn branches_evolve_independently() {
        let base = (0..10).collect::<PersistentQueue<i32>>();
        let left = base.popped().popped().pushed(100);
        let right = base.pushed(-1).popped();

        assert_eq!(base.iter().copied().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
        assert_eq!(
            left.iter().copied().collect::<Vec<_>>(),
            (2..10).chain([100]).collect::<Vec<_>>()
        );
        assert_eq!(
            right.iter().copied().collect::<Vec<_>>(),
            (1..10).chain([-1]).collect::<Vec<_>>()
        );
        assert_eq!(right.iter().rev().next(), Some(&-1));
    }

    #[test]
    fn random_snapshots_match_vecdeque() {
        let mut rng = StdRng::seed_from_u64(0x9E25_15E7);
        let mut versions: Vec<(PersistentQueue<u32>, VecDeque<u32>)> =
            vec![(PersistentQueue::new(), VecDeque::new())];

        for step in 0..3_000 {
            let base = rng.random_range(0..versions.len());
            let (mut q, mut model) = versions[base].clone();
            if model.is_empty() || rng.random_bool(0.6) {
                let x = rng.random::<u32>();
                q.push(x);
                model.push_back(x);
            } else {
                q.pop();
                model.pop_front();
            }
            assert_eq!(q.len(), model.len(), "step={step}");
            assert_eq!(q.try_front().ok(), model.front());
            assert_eq!(q.try_back().ok(), model.back());
            if !model.is_empty() {
                let i = rng.random_range(0..model.len());
                assert_eq!(q.get(i), model.get(i));
            }
            versions.push((q, model));
        }

        for (q, model) in &versions {
            assert!(q.iter().eq(model.iter()));
        }
    }

    #[test]
    fn empty_access_is_reported() {
        let mut q = PersistentQueue::<i32>::new();
        assert_eq!(q.try_front(), Err(PersistentQueueError::Empty));
        assert_eq!(q.try_back(), Err(PersistentQueueError::Empty));
        assert_eq!(q.try_pop(), Err(PersistentQueueError::Empty));
        assert_eq!(*q.front_or(&7), 7);
        assert_eq!(*q.back_or(&8), 8);
        q.push(1);
        assert_eq!(*q.front_or(&7), 1);
        assert_eq!(q.get(1), None);
    }

    #[test]
    #[should_panic(expected = "queue is empty")]
    fn pop_on_empty_panics() {
        let mut q = PersistentQueue::<i32>::new();
        q.pop();
    }

    #[test]
    fn capacity_is_bounded_by_depth() {
        assert_eq!(PersistentQueue::<u8, 3>::CAPACITY, 8);
        let mut q = (0..8).collect::<PersistentQueue<u8, 3>>();
        assert_eq!(
            q.try_push(8),
            Err(PersistentQueueError::CapacityExceeded { capacity: 8 })
        );
        for expected in 0..8 {
            assert_eq!(*q.front(), expected);
            q.pop();
        }
        q.push(42);
        assert_eq!(*q.front(), 42);
    }

    #[test]
    fn long_history_drops_without_recursion() {
        let mut q = PersistentQueue::<u64>::new();
        for x in 0..200_000 {
            q.push(x);
        }
        let snapshot = q.clone();
        for _ in 0..100_000 {
            q.pop();
        }
        assert_eq!(*q.front(), 100_000);
        drop(snapshot);
        drop(q);
    }

    #[test]
    fn debug_lists_elements() {
        let q = [3, 1, 4].into_iter().collect::<PersistentQueue<i32>>();
        assert_eq!(format!("{q:?}"), "[3, 1, 4]");
        assert_eq!(q, [3, 1, 4].into_iter().collect::<PersistentQueue<i32>>());
    }
}
