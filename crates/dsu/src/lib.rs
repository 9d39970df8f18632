//! Disjoint-set union with union by size and path compression.
//!
//! Queries take `&self`; path compression is an internal cache kept in
//! per-slot [`Cell`]s.

use std::cell::Cell;
use std::fmt;

#[derive(Clone)]
pub struct Dsu {
    group_count: usize,
    // root: -(component size), otherwise: parent
    parent_or_size: Vec<Cell<isize>>,
}

impl Dsu {
    pub fn new(n: usize) -> Self {
        Self {
            group_count: n,
            parent_or_size: (0..n).map(|_| Cell::new(-1)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent_or_size.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent_or_size.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    #[track_caller]
    fn check(&self, a: usize) {
        assert!(
            a < self.len(),
            "element {a} out of range for dsu of size {}",
            self.len()
        );
    }

    /// Unites the components of `a` and `b` and returns the new leader.
    ///
    /// The smaller component is attached under the larger one. Merging two
    /// elements that already share a leader changes nothing.
    #[track_caller]
    pub fn merge(&mut self, a: usize, b: usize) -> usize {
        self.check(a);
        self.check(b);
        let mut x = self.leader(a);
        let mut y = self.leader(b);
        if x == y {
            return x;
        }
        self.group_count -= 1;
        if self.parent_or_size[x].get() > self.parent_or_size[y].get() {
            std::mem::swap(&mut x, &mut y);
        }
        let merged = self.parent_or_size[x].get() + self.parent_or_size[y].get();
        self.parent_or_size[x].set(merged);
        self.parent_or_size[y].set(x as isize);
        x
    }

    #[track_caller]
    pub fn same(&self, a: usize, b: usize) -> bool {
        self.check(a);
        self.check(b);
        self.leader(a) == self.leader(b)
    }

    #[track_caller]
    pub fn leader(&self, a: usize) -> usize {
        self.check(a);
        let mut root = a;
        while self.parent_or_size[root].get() >= 0 {
            root = self.parent_or_size[root].get() as usize;
        }
        let mut cur = a;
        while cur != root {
            let next = self.parent_or_size[cur].get() as usize;
            self.parent_or_size[cur].set(root as isize);
            cur = next;
        }
        root
    }

    /// Size of the component containing `a`.
    #[track_caller]
    pub fn size(&self, a: usize) -> usize {
        let root = self.leader(a);
        (-self.parent_or_size[root].get()) as usize
    }

    /// Members of every component, each list ascending, lists ordered by
    /// their smallest member.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let n = self.len();
        let mut leader_buf = vec![0_usize; n];
        let mut group_size = vec![0_usize; n];
        for (i, leader) in leader_buf.iter_mut().enumerate() {
            *leader = self.leader(i);
            group_size[*leader] += 1;
        }

        let mut slot = vec![usize::MAX; n];
        let mut result: Vec<Vec<usize>> = Vec::with_capacity(self.group_count);
        for (i, &leader) in leader_buf.iter().enumerate() {
            if slot[leader] == usize::MAX {
                slot[leader] = result.len();
                result.push(Vec::with_capacity(group_size[leader]));
            }
            result[slot[leader]].push(i);
        }
        result
    }
}

impl fmt::Debug for Dsu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dsu")
            .field("len", &self.len())
            .field("group_count", &self.group_count)
            .finish()
    }
}
