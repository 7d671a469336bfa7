//! Uniform read-only view over host graph representations

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::{Direction, EdgeType};

use itertools::Itertools;

use crate::error::{MetricError, Result};

/// Converts an edge payload into a tie strength.
///
/// Unweighted graphs carry `()` payloads, which count as strength 1; numeric
/// payloads pass through. Implement this for custom edge types to expose them
/// to the metric engines.
pub trait TieStrength {
    fn strength(&self) -> f64;
}

impl TieStrength for () {
    fn strength(&self) -> f64 {
        1.0
    }
}

macro_rules! numeric_tie_strength {
    ($($ty:ty),*) => {
        $(impl TieStrength for $ty {
            fn strength(&self) -> f64 {
                *self as f64
            }
        })*
    };
}

numeric_tie_strength!(f32, f64, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Read-only adapter the metric engines use to traverse any host graph.
///
/// Vertices are `0..node_count()`. Implementations must uphold two contracts:
///
/// - Neighbor sets never contain the vertex itself, even when the underlying
///   graph stores a self-loop edge. Some representations report a vertex as
///   its own neighbor for self-loops; the adapter filters those out.
/// - `weight` returns 0 for an absent edge and 1 for a present edge in an
///   unweighted graph.
///
/// Callers are expected to validate vertex indices before traversal; the
/// public metric entry points do this and return
/// [`MetricError::VertexOutOfRange`] up front.
pub trait GraphView {
    /// Number of vertices in the graph
    fn node_count(&self) -> usize;

    /// Whether edges are directed
    fn is_directed(&self) -> bool;

    /// Out-neighbors of a vertex, excluding the vertex itself.
    /// For undirected graphs this is the full neighbor set.
    fn out_neighbors(&self, vertex: usize) -> Vec<usize>;

    /// In-neighbors of a vertex, excluding the vertex itself.
    /// For undirected graphs this equals `out_neighbors`.
    fn in_neighbors(&self, vertex: usize) -> Vec<usize>;

    /// Whether an edge exists from `from` to `to`
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Tie strength from `from` to `to`: 0 if absent, 1 if present but
    /// unweighted, the stored weight otherwise
    fn weight(&self, from: usize, to: usize) -> f64;
}

/// Validate a vertex index against the graph's vertex range
pub(crate) fn ensure_vertex<G: GraphView + ?Sized>(graph: &G, vertex: usize) -> Result<()> {
    let node_count = graph.node_count();
    if vertex >= node_count {
        return Err(MetricError::VertexOutOfRange { vertex, node_count });
    }
    Ok(())
}

/// Anything that can stand in for an ordered `(from, to)` vertex pair.
///
/// Lets the dyadic-constraint entry point accept either a raw pair or a
/// petgraph edge reference.
pub trait EdgeEndpoints {
    fn endpoints(&self) -> (usize, usize);
}

impl EdgeEndpoints for (usize, usize) {
    fn endpoints(&self) -> (usize, usize) {
        *self
    }
}

impl<'a, E, Ix> EdgeEndpoints for petgraph::graph::EdgeReference<'a, E, Ix>
where
    Ix: petgraph::graph::IndexType,
{
    fn endpoints(&self) -> (usize, usize) {
        (self.source().index(), self.target().index())
    }
}

impl<N, E, Ty, Ix> GraphView for petgraph::Graph<N, E, Ty, Ix>
where
    E: TieStrength,
    Ty: EdgeType,
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        petgraph::Graph::node_count(self)
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn out_neighbors(&self, vertex: usize) -> Vec<usize> {
        self.neighbors_directed(NodeIndex::<Ix>::new(vertex), Direction::Outgoing)
            .map(|n| n.index())
            .filter(|&n| n != vertex)
            .sorted()
            .dedup()
            .collect()
    }

    fn in_neighbors(&self, vertex: usize) -> Vec<usize> {
        self.neighbors_directed(NodeIndex::<Ix>::new(vertex), Direction::Incoming)
            .map(|n| n.index())
            .filter(|&n| n != vertex)
            .sorted()
            .dedup()
            .collect()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.find_edge(NodeIndex::<Ix>::new(from), NodeIndex::<Ix>::new(to))
            .is_some()
    }

    fn weight(&self, from: usize, to: usize) -> f64 {
        // Parallel edges sum their strengths
        self.edges_connecting(NodeIndex::<Ix>::new(from), NodeIndex::<Ix>::new(to))
            .map(|e| e.weight().strength())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::{DiGraph, UnGraph};

    #[test]
    fn petgraph_directed_neighbors_exclude_self_loops() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, b, ());
        g.add_edge(a, a, ());

        assert_eq!(g.out_neighbors(a.index()), vec![b.index()]);
        assert_eq!(g.in_neighbors(a.index()), Vec::<usize>::new());
        assert_eq!(g.in_neighbors(b.index()), vec![a.index()]);
    }

    #[test]
    fn petgraph_undirected_neighbors_are_symmetric() {
        let mut g: UnGraph<(), f64> = UnGraph::new_undirected();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, b, 2.5);

        assert_eq!(g.out_neighbors(b.index()), vec![a.index()]);
        assert_eq!(g.in_neighbors(b.index()), vec![a.index()]);
        assert_eq!(GraphView::weight(&g, a.index(), b.index()), 2.5);
        assert_eq!(GraphView::weight(&g, b.index(), a.index()), 2.5);
    }

    #[test]
    fn absent_edge_has_zero_weight() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, b, ());

        assert_eq!(GraphView::weight(&g, a.index(), b.index()), 1.0);
        assert_eq!(GraphView::weight(&g, b.index(), a.index()), 0.0);
        assert!(GraphView::has_edge(&g, a.index(), b.index()));
        assert!(!GraphView::has_edge(&g, b.index(), a.index()));
    }
}
