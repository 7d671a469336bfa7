//! Investment proportion calculator with per-call memoization

use std::collections::HashMap;

use itertools::Itertools;

use crate::constraint::Mode;
use crate::graph::GraphView;

/// Neighbors of a vertex under a directionality mode, sorted and self-free
pub(crate) fn mode_neighbors<G: GraphView + ?Sized>(
    graph: &G,
    vertex: usize,
    mode: Mode,
) -> Vec<usize> {
    match mode {
        Mode::Out => graph.out_neighbors(vertex),
        Mode::In => graph.in_neighbors(vertex),
        Mode::Both => graph
            .out_neighbors(vertex)
            .into_iter()
            .chain(graph.in_neighbors(vertex))
            .sorted()
            .dedup()
            .collect(),
    }
}

/// Tie strength between `v` and `u` under a mode
fn tie<G: GraphView + ?Sized>(graph: &G, v: usize, u: usize, mode: Mode) -> f64 {
    match mode {
        Mode::Both => graph.weight(v, u) + graph.weight(u, v),
        Mode::Out => graph.weight(v, u),
        Mode::In => graph.weight(u, v),
    }
}

/// One memoized row of investment proportions: alter -> p_v,alter.
///
/// Absent alters have proportion 0, including every alter of an isolated
/// vertex (denominator 0 yields an empty row, never a division error).
fn compute_row<G: GraphView + ?Sized>(
    graph: &G,
    vertex: usize,
    mode: Mode,
) -> HashMap<usize, f64> {
    let neighbors = mode_neighbors(graph, vertex, mode);

    let denominator: f64 = neighbors
        .iter()
        .map(|&u| tie(graph, vertex, u, mode))
        .sum();

    if denominator <= 0.0 {
        return HashMap::new();
    }

    neighbors
        .into_iter()
        .map(|u| (u, tie(graph, vertex, u, mode) / denominator))
        .collect()
}

/// Memoization cache for investment rows, scoped to one top-level call.
///
/// `constraint` computes the indirect sum for every neighbor of the ego, and
/// each indirect sum revisits the same `p_q.` rows; caching each row the
/// first time it is needed keeps the aggregate at O(deg²) instead of O(deg³).
/// The cache is dropped when the top-level call returns, so there is no
/// cross-call staleness.
pub(crate) struct InvestmentCache {
    mode: Mode,
    rows: HashMap<usize, HashMap<usize, f64>>,
}

impl InvestmentCache {
    pub(crate) fn new(mode: Mode) -> Self {
        Self {
            mode,
            rows: HashMap::new(),
        }
    }

    /// Investment proportion p_vu, computing and caching v's row on first use
    pub(crate) fn proportion<G: GraphView + ?Sized>(
        &mut self,
        graph: &G,
        v: usize,
        u: usize,
    ) -> f64 {
        if v == u {
            return 0.0;
        }
        let mode = self.mode;
        self.rows
            .entry(v)
            .or_insert_with(|| compute_row(graph, v, mode))
            .get(&u)
            .copied()
            .unwrap_or(0.0)
    }

    /// Indirect-path sum Σ_q p_vq · p_qu over v's mode-neighborhood,
    /// excluding q == u
    pub(crate) fn indirect_sum<G: GraphView + ?Sized>(
        &mut self,
        graph: &G,
        v: usize,
        u: usize,
    ) -> f64 {
        let neighbors = mode_neighbors(graph, v, self.mode);
        let mut sum = 0.0;
        for q in neighbors {
            if q == u {
                continue;
            }
            let p_vq = self.proportion(graph, v, q);
            if p_vq == 0.0 {
                continue;
            }
            sum += p_vq * self.proportion(graph, q, u);
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::DiGraph;

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn row_proportions_sum_to_one() {
        let mut g: DiGraph<(), f64> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 3.0);
        g.add_edge(a, c, 1.0);

        let mut cache = InvestmentCache::new(Mode::Out);
        close(cache.proportion(&g, a.index(), b.index()), 0.75);
        close(cache.proportion(&g, a.index(), c.index()), 0.25);
    }

    #[test]
    fn isolated_vertex_row_is_all_zero() {
        let mut g: DiGraph<(), ()> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_node(());
        g.add_edge(a, b, ());

        let mut cache = InvestmentCache::new(Mode::Both);
        close(cache.proportion(&g, 2, 0), 0.0);
        close(cache.proportion(&g, 2, 1), 0.0);
    }

    #[test]
    fn both_mode_counts_each_direction() {
        let mut g: DiGraph<(), f64> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 2.0);
        g.add_edge(b, a, 1.0);
        g.add_edge(a, c, 1.0);

        // ties from a: b = 2 + 1 = 3, c = 1
        let mut cache = InvestmentCache::new(Mode::Both);
        close(cache.proportion(&g, a.index(), b.index()), 0.75);
        close(cache.proportion(&g, a.index(), c.index()), 0.25);
    }

    #[test]
    fn in_mode_uses_reverse_ties() {
        let mut g: DiGraph<(), f64> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(b, a, 1.0);
        g.add_edge(c, a, 3.0);

        let mut cache = InvestmentCache::new(Mode::In);
        close(cache.proportion(&g, a.index(), b.index()), 0.25);
        close(cache.proportion(&g, a.index(), c.index()), 0.75);
    }
}
