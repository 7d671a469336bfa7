//! Memory-efficient native graph representation

use serde::{Serialize, Deserialize};

use crate::graph::view::GraphView;

/// Compressed sparse representation of a social graph.
///
/// Covers all four variants the metric engines accept: directed or
/// undirected, weighted or unweighted. Adjacency rows are kept sorted and
/// deduplicated by [`GraphBuilder`](crate::graph::GraphBuilder), which is the
/// supported way to construct one.
///
/// Undirected graphs store each edge in both endpoints' rows; the reverse
/// arrays stay empty and in-neighbor queries fall back to the forward rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressedGraph {
    /// Number of nodes in the graph
    pub node_count: usize,

    /// Whether edges are directed
    pub directed: bool,

    /// Offset array: offsets[i] to offsets[i+1] delimits node i's edge range
    pub offsets: Vec<u32>,

    /// Edge array: concatenated sorted lists of target nodes
    pub edges: Vec<u32>,

    /// Edge weights aligned with `edges`; `None` for unweighted graphs
    pub weights: Option<Vec<f64>>,

    /// Reverse offset array for directed graphs (empty when undirected)
    pub in_offsets: Vec<u32>,

    /// Reverse edge array: concatenated sorted lists of source nodes
    pub in_edges: Vec<u32>,

    /// Reverse edge weights aligned with `in_edges`
    pub in_weights: Option<Vec<f64>>,

    /// Optional mapping from internal node IDs to original string IDs
    pub node_ids: Option<Vec<String>>,
}

impl CompressedGraph {
    /// Outgoing edge targets for a node
    pub fn outgoing_edges(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    /// Incoming edge sources for a node
    pub fn incoming_edges(&self, node: usize) -> &[u32] {
        if !self.directed {
            return self.outgoing_edges(node);
        }
        let start = self.in_offsets[node] as usize;
        let end = self.in_offsets[node + 1] as usize;
        &self.in_edges[start..end]
    }

    /// Get out-degree of a node (self-loop included if stored)
    pub fn out_degree(&self, node: usize) -> usize {
        self.outgoing_edges(node).len()
    }

    /// Weight of the edge from `src` to `dst`, 0.0 if absent
    pub fn edge_weight(&self, src: usize, dst: u32) -> f64 {
        let start = self.offsets[src] as usize;
        let row = self.outgoing_edges(src);
        match row.binary_search(&dst) {
            Ok(pos) => match &self.weights {
                Some(weights) => weights[start + pos],
                None => 1.0,
            },
            Err(_) => 0.0,
        }
    }
}

impl GraphView for CompressedGraph {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn out_neighbors(&self, vertex: usize) -> Vec<usize> {
        self.outgoing_edges(vertex)
            .iter()
            .map(|&dst| dst as usize)
            .filter(|&dst| dst != vertex)
            .collect()
    }

    fn in_neighbors(&self, vertex: usize) -> Vec<usize> {
        self.incoming_edges(vertex)
            .iter()
            .map(|&src| src as usize)
            .filter(|&src| src != vertex)
            .collect()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).binary_search(&(to as u32)).is_ok()
    }

    fn weight(&self, from: usize, to: usize) -> f64 {
        self.edge_weight(from, to as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn directed_reverse_rows_track_sources() {
        let mut builder = GraphBuilder::directed();
        builder.add_edge("a", "b");
        builder.add_edge("c", "b");
        let g = builder.build();

        assert_eq!(g.out_neighbors(0), vec![1]);
        assert_eq!(g.in_neighbors(1), vec![0, 2]);
        assert_eq!(g.in_neighbors(0), Vec::<usize>::new());
    }

    #[test]
    fn undirected_edges_visible_from_both_endpoints() {
        let mut builder = GraphBuilder::undirected();
        builder.add_weighted_edge("a", "b", 3.0);
        let g = builder.build();

        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(1, 0));
        assert_eq!(GraphView::weight(&g, 1, 0), 3.0);
    }

    #[test]
    fn self_loop_stored_but_not_a_neighbor() {
        let mut builder = GraphBuilder::directed();
        builder.add_edge("a", "a");
        builder.add_edge("a", "b");
        let g = builder.build();

        assert!(g.has_edge(0, 0));
        assert_eq!(g.out_neighbors(0), vec![1]);
    }

    #[test]
    fn duplicate_edges_sum_weights() {
        let mut builder = GraphBuilder::directed();
        builder.add_weighted_edge("a", "b", 1.5);
        builder.add_weighted_edge("a", "b", 2.0);
        let g = builder.build();

        assert_eq!(g.edge_weight(0, 1), 3.5);
        assert_eq!(g.out_degree(0), 1);
    }
}
