//! Graph construction module

use std::collections::HashMap;

use crate::graph::CompressedGraph;

/// Builder for incrementally constructing a [`CompressedGraph`]
pub struct GraphBuilder {
    /// Whether the graph under construction is directed
    directed: bool,

    /// Whether any explicitly weighted edge has been added
    weighted: bool,

    /// Number of nodes
    node_count: usize,

    /// Mapping from string IDs to node indices
    id_to_index: HashMap<String, u32>,

    /// Node string IDs
    node_ids: Vec<String>,

    /// Forward adjacency lists: (target, weight)
    adjacency_lists: Vec<Vec<(u32, f64)>>,

    /// Reverse adjacency lists, maintained for directed graphs only
    reverse_lists: Vec<Vec<(u32, f64)>>,
}

impl GraphBuilder {
    /// Create a builder for a directed graph
    pub fn directed() -> Self {
        Self::new(true, 0)
    }

    /// Create a builder for an undirected graph
    pub fn undirected() -> Self {
        Self::new(false, 0)
    }

    /// Create a builder with pre-allocated node capacity
    pub fn with_capacity(directed: bool, capacity: usize) -> Self {
        Self::new(directed, capacity)
    }

    fn new(directed: bool, capacity: usize) -> Self {
        Self {
            directed,
            weighted: false,
            node_count: 0,
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
            reverse_lists: Vec::with_capacity(capacity),
        }
    }

    /// Get or create a node index for the given string ID
    pub fn get_or_create_node(&mut self, id: &str) -> u32 {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.node_count as u32;
        self.id_to_index.insert(id.to_string(), idx);
        self.node_ids.push(id.to_string());
        self.adjacency_lists.push(Vec::new());
        self.reverse_lists.push(Vec::new());
        self.node_count += 1;

        idx
    }

    /// Add an unweighted edge (tie strength 1)
    pub fn add_edge(&mut self, src_id: &str, dst_id: &str) {
        self.insert(src_id, dst_id, 1.0);
    }

    /// Add a weighted edge; repeated edges between the same pair sum their weights
    pub fn add_weighted_edge(&mut self, src_id: &str, dst_id: &str, weight: f64) {
        self.weighted = true;
        self.insert(src_id, dst_id, weight);
    }

    fn insert(&mut self, src_id: &str, dst_id: &str, weight: f64) {
        let src = self.get_or_create_node(src_id);
        let dst = self.get_or_create_node(dst_id);

        self.adjacency_lists[src as usize].push((dst, weight));

        if self.directed {
            self.reverse_lists[dst as usize].push((src, weight));
        } else if src != dst {
            // Undirected edges are stored in both endpoints' rows;
            // self-loops only once
            self.adjacency_lists[dst as usize].push((src, weight));
        }
    }

    /// Build the compressed graph
    pub fn build(self) -> CompressedGraph {
        let (offsets, edges, weights) = Self::compress(self.adjacency_lists);

        let (in_offsets, in_edges, in_weights) = if self.directed {
            Self::compress(self.reverse_lists)
        } else {
            (Vec::new(), Vec::new(), Vec::new())
        };

        CompressedGraph {
            node_count: self.node_count,
            directed: self.directed,
            offsets,
            edges,
            weights: if self.weighted { Some(weights) } else { None },
            in_offsets,
            in_edges,
            in_weights: if self.weighted && self.directed {
                Some(in_weights)
            } else {
                None
            },
            node_ids: Some(self.node_ids),
        }
    }

    /// Flatten adjacency lists into sorted, duplicate-merged CSR arrays
    fn compress(lists: Vec<Vec<(u32, f64)>>) -> (Vec<u32>, Vec<u32>, Vec<f64>) {
        let edge_count: usize = lists.iter().map(|list| list.len()).sum();

        let mut offsets = Vec::with_capacity(lists.len() + 1);
        let mut edges = Vec::with_capacity(edge_count);
        let mut weights = Vec::with_capacity(edge_count);

        offsets.push(0);
        for mut list in lists {
            // Sort for binary search, then merge duplicates by summing weights
            list.sort_unstable_by_key(|&(target, _)| target);

            for (target, weight) in list {
                if edges.len() > offsets.last().copied().unwrap_or(0) as usize
                    && edges.last() == Some(&target)
                {
                    let last = weights.len() - 1;
                    weights[last] += weight;
                } else {
                    edges.push(target);
                    weights.push(weight);
                }
            }
            offsets.push(edges.len() as u32);
        }

        (offsets, edges, weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::view::GraphView;

    #[test]
    fn interns_string_ids_in_first_seen_order() {
        let mut builder = GraphBuilder::directed();
        builder.add_edge("carol", "dan");
        builder.add_edge("alice", "carol");
        let g = builder.build();

        let ids = g.node_ids.as_ref().unwrap();
        assert_eq!(ids, &["carol", "dan", "alice"]);
        assert!(g.has_edge(2, 0));
    }

    #[test]
    fn unweighted_build_carries_no_weight_array() {
        let mut builder = GraphBuilder::undirected();
        builder.add_edge("a", "b");
        let g = builder.build();

        assert!(g.weights.is_none());
        assert_eq!(g.edge_weight(0, 1), 1.0);
    }

    #[test]
    fn undirected_self_loop_stored_once() {
        let mut builder = GraphBuilder::undirected();
        builder.add_edge("a", "a");
        builder.add_edge("a", "b");
        let g = builder.build();

        assert_eq!(g.outgoing_edges(0), &[0, 1]);
    }
}
