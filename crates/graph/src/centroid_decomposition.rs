use crate::graph::Graph;

/// Centroid decomposition of a forest, one component at a time.
///
/// Each [`decompose`](Self::decompose) call marks one centroid as used and
/// returns the roots of the pieces left around it. Used vertices are treated
/// as removed by every later call.
pub struct CentroidDecomposition<'g, C> {
    graph: &'g Graph<C>,
    centroids: Vec<usize>,
    size: Vec<usize>,
    parent: Vec<Option<usize>>,
    used: Vec<bool>,
    order: Vec<usize>,
}

impl<'g, C: Copy> CentroidDecomposition<'g, C> {
    pub fn new(graph: &'g Graph<C>) -> Self {
        let n = graph.vertices();
        Self {
            graph,
            centroids: Vec::new(),
            size: vec![0; n],
            parent: vec![None; n],
            used: vec![false; n],
            order: Vec::new(),
        }
    }

    /// Subtree sizes from the last search, rooted where it started.
    pub fn sizes(&self) -> &[usize] {
        &self.size
    }

    pub fn parents(&self) -> &[Option<usize>] {
        &self.parent
    }

    pub fn used(&self) -> &[bool] {
        &self.used
    }

    pub fn is_used(&self, v: usize) -> bool {
        self.used[v]
    }

    /// Centroids found by the last [`find`](Self::find).
    pub fn centroids(&self) -> &[usize] {
        &self.centroids
    }

    /// Finds the one or two centroids of the unused component containing
    /// `root`, recording subtree sizes and parents rooted at `root`.
    #[track_caller]
    pub fn find(&mut self, root: usize) -> &[usize] {
        assert!(!self.used[root], "vertex {root} is already a centroid");
        let graph = self.graph;

        self.order.clear();
        self.parent[root] = None;
        let mut stack = vec![root];
        while let Some(v) = stack.pop() {
            assert!(self.order.len() < graph.vertices(), "graph is not a forest");
            self.order.push(v);
            self.size[v] = 1;
            for edge in graph.neighbors(v) {
                if Some(edge.to) == self.parent[v] || self.used[edge.to] {
                    continue;
                }
                self.parent[edge.to] = Some(v);
                stack.push(edge.to);
            }
        }
        for &v in self.order.iter().rev() {
            if let Some(p) = self.parent[v] {
                self.size[p] += self.size[v];
            }
        }

        let total = self.size[root];
        self.centroids.clear();
        for &v in self.order.iter().rev() {
            let mut heaviest = total - self.size[v];
            for edge in graph.neighbors(v) {
                if Some(edge.to) != self.parent[v] && !self.used[edge.to] {
                    heaviest = heaviest.max(self.size[edge.to]);
                }
            }
            if heaviest <= total / 2 {
                self.centroids.push(v);
            }
        }
        &self.centroids
    }

    /// Removes the centroid of `root`'s component and returns it along with
    /// `(root, size)` for every remaining piece adjacent to it.
    #[track_caller]
    pub fn decompose(&mut self, root: usize) -> (usize, Vec<(usize, usize)>) {
        let centroid = self.find(root)[0];
        let total = self.size[root];
        self.used[centroid] = true;

        let subtrees = self
            .graph
            .neighbors(centroid)
            .iter()
            .filter(|edge| !self.used[edge.to])
            .map(|edge| {
                if Some(edge.to) == self.parent[centroid] {
                    (edge.to, total - self.size[centroid])
                } else {
                    (edge.to, self.size[edge.to])
                }
            })
            .collect::<Vec<_>>();
        tracing::trace!(centroid, component = total, pieces = subtrees.len(), "centroid removed");
        (centroid, subtrees)
    }

    /// Decomposes every unused vertex and returns each centroid's parent in
    /// the centroid tree.
    pub fn centroid_tree(&mut self) -> Vec<Option<usize>> {
        let n = self.graph.vertices();
        let mut up = vec![None; n];
        let mut stack = Vec::new();
        for start in 0..n {
            if self.used[start] {
                continue;
            }
            stack.push((start, None));
            while let Some((root, parent)) = stack.pop() {
                let (centroid, pieces) = self.decompose(root);
                up[centroid] = parent;
                stack.extend(pieces.into_iter().map(|(v, _)| (v, Some(centroid))));
            }
        }
        tracing::debug!(vertices = n, "centroid tree built");
        up
    }
}
