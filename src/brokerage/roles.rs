//! Triad enumeration and five-role classification

use rayon::prelude::*;

use crate::brokerage::{BrokerageResult, EgoBrokerage, GroupAssignment};
use crate::error::{MetricError, Result};
use crate::graph::view::ensure_vertex;
use crate::graph::GraphView;

/// Gould-Fernandez brokerage roles.
///
/// For a mediated path i -> ego -> j, the role is a pure function of three
/// group-equality comparisons; the five patterns are mutually exclusive and
/// exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// All three in the same group
    Coordinator = 0,
    /// Ego and target share a group, source is outside
    Gatekeeper = 1,
    /// Ego and source share a group, target is outside
    Representative = 2,
    /// Source and target share a group, ego is outside
    Liaison = 3,
    /// All three groups distinct
    Cosmopolitan = 4,
}

impl Role {
    /// Classify a mediated path by its endpoint and ego group labels
    pub fn classify<T: Eq>(ego: &T, source: &T, target: &T) -> Role {
        match (source == ego, target == ego, source == target) {
            (true, true, _) => Role::Coordinator,
            (false, true, _) => Role::Gatekeeper,
            (true, false, _) => Role::Representative,
            (false, false, true) => Role::Liaison,
            (false, false, false) => Role::Cosmopolitan,
        }
    }
}

/// Raw role counts for one ego.
///
/// Enumerates ordered pairs (i, j) over in-neighbors × out-neighbors of the
/// ego, skipping i == j and pairs the ego does not mediate. The direct-edge
/// check is only ever i -> j; a reverse edge j -> i does not disqualify the
/// triad even in a directed graph.
///
/// Undirected graphs see each unordered triad twice, once per orientation,
/// so every counter is floor-halved before returning.
fn ego_counts<G, T>(graph: &G, groups: &GroupAssignment<T>, ego: usize) -> [usize; 5]
where
    G: GraphView + ?Sized,
    T: Eq,
{
    let sources = graph.in_neighbors(ego);
    let targets = graph.out_neighbors(ego);
    let ego_group = groups.label(ego);

    let mut counts = [0usize; 5];
    for &i in &sources {
        for &j in &targets {
            if i == j {
                continue;
            }
            if graph.has_edge(i, j) {
                continue;
            }
            let role = Role::classify(ego_group, groups.label(i), groups.label(j));
            counts[role as usize] += 1;
        }
    }

    if !graph.is_directed() {
        for count in &mut counts {
            *count /= 2;
        }
    }

    counts
}

fn validate_groups<G, T>(graph: &G, groups: &GroupAssignment<T>) -> Result<()>
where
    G: GraphView + ?Sized,
    T: Eq,
{
    if groups.len() != graph.node_count() {
        return Err(MetricError::GroupLengthMismatch {
            expected: graph.node_count(),
            actual: groups.len(),
        });
    }
    Ok(())
}

/// Brokerage role counts for every vertex in the graph.
///
/// O(n·d²) where d is the average degree: each ego enumerates only its own
/// predecessor × successor pairs, and no global triple set is materialized.
/// Egos are independent, so large graphs are processed in parallel.
pub fn brokerage<G, T>(graph: &G, groups: &GroupAssignment<T>) -> Result<BrokerageResult<T>>
where
    G: GraphView + Sync + ?Sized,
    T: Eq + Clone + Sync,
{
    validate_groups(graph, groups)?;

    let node_count = graph.node_count();
    log::debug!("Computing brokerage roles for {} nodes", node_count);

    // Sequential for small graphs, parallel over egos otherwise
    let per_ego: Vec<[usize; 5]> = if node_count < 1000 {
        (0..node_count).map(|ego| ego_counts(graph, groups, ego)).collect()
    } else {
        (0..node_count)
            .into_par_iter()
            .map(|ego| ego_counts(graph, groups, ego))
            .collect()
    };

    Ok(BrokerageResult::from_counts(per_ego, groups.clone()))
}

/// Brokerage role counts for a single ego, in O(deg(ego)²).
///
/// Returns the lightweight per-ego aggregate instead of a full result table.
pub fn ego_brokerage<G, T>(
    graph: &G,
    groups: &GroupAssignment<T>,
    ego: usize,
) -> Result<EgoBrokerage>
where
    G: GraphView + ?Sized,
    T: Eq,
{
    validate_groups(graph, groups)?;
    ensure_vertex(graph, ego)?;

    let counts = ego_counts(graph, groups, ego);
    Ok(EgoBrokerage::from_counts(counts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_table_is_exhaustive() {
        // (ego, source, target) -> role, over every equality configuration
        assert_eq!(Role::classify(&0, &0, &0), Role::Coordinator);
        assert_eq!(Role::classify(&0, &1, &0), Role::Gatekeeper);
        assert_eq!(Role::classify(&0, &0, &1), Role::Representative);
        assert_eq!(Role::classify(&0, &1, &1), Role::Liaison);
        assert_eq!(Role::classify(&0, &1, &2), Role::Cosmopolitan);
    }

    #[test]
    fn labels_only_need_equality() {
        assert_eq!(
            Role::classify(&"core", &"edge", &"core"),
            Role::Gatekeeper
        );
    }
}
