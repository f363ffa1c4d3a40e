//! Dense sentence-similarity graph
//!
//! The sentence count is known as soon as the text is split, so the complete
//! graph is stored as a flat `n * n` weight matrix indexed by `i * n + j`.
//! Diagonal entries are always zero (no self-loops).

/// A complete weighted graph over sentence indices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityGraph {
    /// Number of nodes (sentences)
    pub num_nodes: usize,
    /// Row-major weight matrix
    weights: Vec<f64>,
}

impl SimilarityGraph {
    /// Create a graph with `num_nodes` nodes and all weights zero
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            weights: vec![0.0; num_nodes * num_nodes],
        }
    }

    #[inline]
    fn offset(&self, from: usize, to: usize) -> usize {
        from * self.num_nodes + to
    }

    /// Weight of the edge `from -> to` (0.0 for self-loops)
    #[inline]
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        self.weights[self.offset(from, to)]
    }

    /// Set the weight of the edge `from -> to`
    ///
    /// Self-loops are ignored, and negative or non-finite weights are stored
    /// as 0.0.
    pub fn set_weight(&mut self, from: usize, to: usize, weight: f64) {
        if from == to {
            return;
        }
        let offset = self.offset(from, to);
        self.weights[offset] = sanitize(weight);
    }

    /// Set the weight in both directions
    pub fn set_undirected(&mut self, a: usize, b: usize, weight: f64) {
        self.set_weight(a, b, weight);
        self.set_weight(b, a, weight);
    }

    /// Iterate over all other nodes and the weight of the edge to each.
    ///
    /// The graph is complete, so zero-weight edges are yielded too.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let row = &self.weights[node * self.num_nodes..(node + 1) * self.num_nodes];
        row.iter()
            .enumerate()
            .filter(move |&(j, _)| j != node)
            .map(|(j, &w)| (j, w))
    }

    /// Out-degree of a node: every other node, regardless of weight
    #[inline]
    pub fn degree(&self, _node: usize) -> usize {
        self.num_nodes.saturating_sub(1)
    }

    /// Number of undirected edges in the complete graph
    pub fn num_edges(&self) -> usize {
        self.num_nodes * self.num_nodes.saturating_sub(1) / 2
    }

    /// Number of ordered pairs carrying a positive weight
    pub fn num_weighted_edges(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0.0).count()
    }

    /// Check `weight(i, j) == weight(j, i)` for every pair
    pub fn is_symmetric(&self) -> bool {
        (0..self.num_nodes).all(|i| {
            ((i + 1)..self.num_nodes).all(|j| self.weight(i, j) == self.weight(j, i))
        })
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }
}

#[inline]
fn sanitize(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}
