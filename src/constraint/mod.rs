//! Burt's structural-holes constraint

pub mod investment;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::view::ensure_vertex;
use crate::graph::{EdgeEndpoints, GraphView};
use investment::{mode_neighbors, InvestmentCache};

/// Directionality policy governing which edges count toward investment.
///
/// Fixed for the duration of one computation; never stored on the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Both directions: ties are w(i,j) + w(j,i)
    #[default]
    Both,
    /// Outgoing ties only
    Out,
    /// Incoming ties only
    In,
}

/// Investment proportion p_ij: the share of i's total tie strength directed
/// at j under the given mode.
///
/// Returns a value in [0, 1]. An isolated vertex (denominator 0) invests 0 in
/// every alter, and `i == j` is 0 by convention.
pub fn investment<G: GraphView + ?Sized>(
    graph: &G,
    i: usize,
    j: usize,
    mode: Mode,
) -> Result<f64> {
    ensure_vertex(graph, i)?;
    ensure_vertex(graph, j)?;

    let mut cache = InvestmentCache::new(mode);
    Ok(cache.proportion(graph, i, j))
}

/// Indirect-path sum Σ_q p_iq · p_qj over shared contacts q of i and j.
///
/// Only i's mode-neighborhood is iterated, since p_iq is 0 for non-neighbors;
/// cost is proportional to deg(i), not the vertex count.
pub fn investment_sum<G: GraphView + ?Sized>(
    graph: &G,
    i: usize,
    j: usize,
    mode: Mode,
) -> Result<f64> {
    ensure_vertex(graph, i)?;
    ensure_vertex(graph, j)?;

    let mut cache = InvestmentCache::new(mode);
    Ok(cache.indirect_sum(graph, i, j))
}

/// Dyadic constraint c_ij = (p_ij + Σ_q p_iq · p_qj)², in [0, 1]
pub fn dyad_constraint<G: GraphView + ?Sized>(
    graph: &G,
    i: usize,
    j: usize,
    mode: Mode,
) -> Result<f64> {
    ensure_vertex(graph, i)?;
    ensure_vertex(graph, j)?;

    let mut cache = InvestmentCache::new(mode);
    Ok(dyad_term(graph, &mut cache, i, j))
}

/// Dyadic constraint for an edge object instead of an `(i, j)` pair
pub fn dyad_constraint_edge<G, E>(graph: &G, edge: &E, mode: Mode) -> Result<f64>
where
    G: GraphView + ?Sized,
    E: EdgeEndpoints,
{
    let (i, j) = edge.endpoints();
    dyad_constraint(graph, i, j, mode)
}

/// Aggregate constraint C_i = Σ_j c_ij over i's mode-neighborhood, in
/// [0, deg(i)].
///
/// All dyadic terms share one investment cache, so every `p_q.` row is
/// computed once per call and the aggregate stays O(deg(i)²). An isolated
/// vertex has constraint 0.
pub fn constraint<G: GraphView + ?Sized>(graph: &G, i: usize, mode: Mode) -> Result<f64> {
    ensure_vertex(graph, i)?;

    let mut cache = InvestmentCache::new(mode);
    let total = mode_neighbors(graph, i, mode)
        .into_iter()
        .map(|j| dyad_term(graph, &mut cache, i, j))
        .sum();
    Ok(total)
}

fn dyad_term<G: GraphView + ?Sized>(
    graph: &G,
    cache: &mut InvestmentCache,
    i: usize,
    j: usize,
) -> f64 {
    let direct = cache.proportion(graph, i, j);
    let indirect = cache.indirect_sum(graph, i, j);
    (direct + indirect) * (direct + indirect)
}
