use std::cmp::Reverse;

use algebraic::Integer;
use dsu::Dsu;

use crate::graph::Graph;

impl<C: Integer> Graph<C> {
    /// Kruskal over the edge list; returns the total cost and the chosen
    /// edges as an undirected graph. A disconnected graph yields a minimum
    /// spanning forest.
    ///
    /// Edges are taken in cost order, ties broken by id.
    pub fn minimum_spanning_tree(&self) -> (C, Graph<C>) {
        let mut order = (0..self.edges().len()).collect::<Vec<_>>();
        order.sort_unstable_by_key(|&i| (self.edges()[i].cost, i));
        self.kruskal(&order)
    }

    pub fn maximum_spanning_tree(&self) -> (C, Graph<C>) {
        let mut order = (0..self.edges().len()).collect::<Vec<_>>();
        order.sort_unstable_by_key(|&i| (Reverse(self.edges()[i].cost), i));
        self.kruskal(&order)
    }

    fn kruskal(&self, order: &[usize]) -> (C, Graph<C>) {
        let mut dsu = Dsu::new(self.vertices());
        let mut tree = Graph::new(self.vertices());
        let mut total = C::ZERO;
        for &i in order {
            let edge = self.edges()[i];
            if dsu.same(edge.from, edge.to) {
                continue;
            }
            dsu.merge(edge.from, edge.to);
            tree.add_edge_bidirectionally(edge.from, edge.to, edge.cost);
            total = total.wrapping_add(edge.cost);
        }
        tracing::debug!(
            vertices = self.vertices(),
            edges = self.edges().len(),
            picked = tree.edges().len(),
            components = dsu.group_count(),
            "kruskal finished"
        );
        (total, tree)
    }
}

impl<C: Copy> Graph<C> {
    /// Connectivity ignoring edge direction.
    pub fn components(&self) -> Dsu {
        let mut dsu = Dsu::new(self.vertices());
        for edge in self.edges() {
            dsu.merge(edge.from, edge.to);
        }
        dsu
    }
}
