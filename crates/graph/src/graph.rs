use std::ops::Index;

/// A directed edge. Both halves of an undirected edge share one `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge<C> {
    pub id: usize,
    pub from: usize,
    pub to: usize,
    pub cost: C,
}

#[derive(Clone, Debug)]
pub struct Graph<C = i64> {
    adjacency: Vec<Vec<Edge<C>>>,
    edges: Vec<Edge<C>>,
    directed_edge_count: usize,
}

impl<C: Copy> Graph<C> {
    pub fn new(vertices: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertices],
            edges: Vec::new(),
            directed_edge_count: 0,
        }
    }

    #[inline]
    pub fn vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Edges in insertion order, one entry per `add_edge*` call.
    #[inline]
    pub fn edges(&self) -> &[Edge<C>] {
        &self.edges
    }

    /// Adjacency entries; an undirected edge counts twice.
    #[inline]
    pub fn directed_edge_count(&self) -> usize {
        self.directed_edge_count
    }

    #[inline]
    #[track_caller]
    pub fn neighbors(&self, v: usize) -> &[Edge<C>] {
        &self.adjacency[v]
    }

    /// Removes every edge, keeping the vertex count.
    pub fn clear(&mut self) {
        self.adjacency.iter_mut().for_each(Vec::clear);
        self.edges.clear();
        self.directed_edge_count = 0;
    }

    #[track_caller]
    fn check(&self, v: usize) {
        assert!(
            v < self.vertices(),
            "vertex {v} out of range for graph with {} vertices",
            self.vertices()
        );
    }

    fn link(&mut self, id: usize, from: usize, to: usize, cost: C) {
        self.adjacency[from].push(Edge { id, from, to, cost });
        self.directed_edge_count += 1;
    }

    /// Adds `u -> v` and returns the edge id.
    #[track_caller]
    pub fn add_edge(&mut self, u: usize, v: usize, cost: C) -> usize {
        self.check(u);
        self.check(v);
        let id = self.edges.len();
        self.edges.push(Edge {
            id,
            from: u,
            to: v,
            cost,
        });
        self.link(id, u, v, cost);
        id
    }

    /// Adds `u -> v` and `v -> u` under a single id.
    #[track_caller]
    pub fn add_edge_bidirectionally(&mut self, u: usize, v: usize, cost: C) -> usize {
        let id = self.add_edge(u, v, cost);
        self.link(id, v, u, cost);
        id
    }
}

impl<C> Index<usize> for Graph<C> {
    type Output = [Edge<C>];

    #[track_caller]
    fn index(&self, v: usize) -> &Self::Output {
        &self.adjacency[v]
    }
}
