use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::VecDeque;

use algebraic::Integer;

use crate::graph::Graph;

impl<C: Integer> Graph<C> {
    /// Single-source shortest path costs by Dijkstra; `None` marks
    /// unreachable vertices.
    ///
    /// Costs must be non-negative.
    #[track_caller]
    pub fn distances(&self, source: usize) -> Vec<Option<C>> {
        let n = self.vertices();
        assert!(
            source < n,
            "vertex {source} out of range for graph with {n} vertices"
        );
        let mut dist = vec![None; n];
        let mut heap = BinaryHeap::new();
        dist[source] = Some(C::ZERO);
        heap.push(Reverse((C::ZERO, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if dist[u] != Some(d) {
                continue;
            }

            for edge in &self[u] {
                debug_assert!(edge.cost >= C::ZERO, "negative edge cost {:?}", edge.cost);
                let cand = d.wrapping_add(edge.cost);
                if dist[edge.to].is_none_or(|cur| cand < cur) {
                    dist[edge.to] = Some(cand);
                    heap.push(Reverse((cand, edge.to)));
                }
            }
        }

        dist
    }
}

impl<C: Copy> Graph<C> {
    /// Hop counts from `source` by breadth-first search, ignoring costs.
    #[track_caller]
    pub fn distances_without_cost(&self, source: usize) -> Vec<Option<usize>> {
        let n = self.vertices();
        assert!(
            source < n,
            "vertex {source} out of range for graph with {n} vertices"
        );
        let mut dist = vec![None; n];
        let mut queue = VecDeque::from([source]);
        dist[source] = Some(0);

        while let Some(u) = queue.pop_front() {
            let next = dist[u].map_or(0, |d| d + 1);
            for edge in &self[u] {
                if dist[edge.to].is_none() {
                    dist[edge.to] = Some(next);
                    queue.push_back(edge.to);
                }
            }
        }

        dist
    }
}
