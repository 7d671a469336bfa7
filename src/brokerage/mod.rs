//! Gould-Fernandez brokerage analysis module

pub mod groups;
pub mod roles;

use serde::{Deserialize, Serialize};

use crate::error::{MetricError, Result};

pub use groups::GroupAssignment;
pub use roles::{brokerage, ego_brokerage, Role};

/// Per-node brokerage role counts for a full-graph computation.
///
/// Five parallel counter arrays plus a derived total, indexed by vertex, and
/// a copy of the resolved group assignment the counts were computed under.
/// Accessors are O(1) and bounds-checked at access time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerageResult<T> {
    /// Per-node coordinator counts (all three in ego's group)
    coordinator: Vec<usize>,

    /// Per-node gatekeeper counts (ego guards entry into its group)
    gatekeeper: Vec<usize>,

    /// Per-node representative counts (ego carries its group outward)
    representative: Vec<usize>,

    /// Per-node liaison counts (ego bridges within a foreign group)
    liaison: Vec<usize>,

    /// Per-node cosmopolitan counts (three distinct groups)
    cosmopolitan: Vec<usize>,

    /// Per-node totals: always the sum of the five role counts
    total: Vec<usize>,

    /// The group assignment the counts were computed under
    groups: GroupAssignment<T>,
}

impl<T> BrokerageResult<T> {
    pub(crate) fn from_counts(per_ego: Vec<[usize; 5]>, groups: GroupAssignment<T>) -> Self {
        let n = per_ego.len();
        let mut result = Self {
            coordinator: Vec::with_capacity(n),
            gatekeeper: Vec::with_capacity(n),
            representative: Vec::with_capacity(n),
            liaison: Vec::with_capacity(n),
            cosmopolitan: Vec::with_capacity(n),
            total: Vec::with_capacity(n),
            groups,
        };
        for counts in per_ego {
            result.coordinator.push(counts[0]);
            result.gatekeeper.push(counts[1]);
            result.representative.push(counts[2]);
            result.liaison.push(counts[3]);
            result.cosmopolitan.push(counts[4]);
            result.total.push(counts.iter().sum());
        }
        result
    }

    /// Number of nodes covered by this result
    pub fn node_count(&self) -> usize {
        self.total.len()
    }

    /// The group assignment the counts were computed under
    pub fn groups(&self) -> &GroupAssignment<T> {
        &self.groups
    }

    fn checked(&self, counts: &[usize], index: usize) -> Result<usize> {
        counts
            .get(index)
            .copied()
            .ok_or(MetricError::IndexOutOfBounds {
                index,
                node_count: self.node_count(),
            })
    }

    /// Coordinator count for a node
    pub fn coordinator(&self, index: usize) -> Result<usize> {
        self.checked(&self.coordinator, index)
    }

    /// Gatekeeper count for a node
    pub fn gatekeeper(&self, index: usize) -> Result<usize> {
        self.checked(&self.gatekeeper, index)
    }

    /// Representative count for a node
    pub fn representative(&self, index: usize) -> Result<usize> {
        self.checked(&self.representative, index)
    }

    /// Liaison count for a node
    pub fn liaison(&self, index: usize) -> Result<usize> {
        self.checked(&self.liaison, index)
    }

    /// Cosmopolitan count for a node
    pub fn cosmopolitan(&self, index: usize) -> Result<usize> {
        self.checked(&self.cosmopolitan, index)
    }

    /// Total brokerage for a node: sum of the five role counts
    pub fn total_brokerage(&self, index: usize) -> Result<usize> {
        self.checked(&self.total, index)
    }
}

/// Brokerage role counts for a single queried ego
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EgoBrokerage {
    pub coordinator: usize,
    pub gatekeeper: usize,
    pub representative: usize,
    pub liaison: usize,
    pub cosmopolitan: usize,

    /// Sum of the five role counts
    pub total: usize,
}

impl EgoBrokerage {
    pub(crate) fn from_counts(counts: [usize; 5]) -> Self {
        Self {
            coordinator: counts[0],
            gatekeeper: counts[1],
            representative: counts[2],
            liaison: counts[3],
            cosmopolitan: counts[4],
            total: counts.iter().sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_are_bounds_checked() {
        let groups = GroupAssignment::from_sequence(vec![1, 1], 2).unwrap();
        let result = BrokerageResult::from_counts(vec![[1, 0, 0, 0, 0]; 2], groups);

        assert_eq!(result.coordinator(1).unwrap(), 1);
        assert_eq!(
            result.total_brokerage(2).unwrap_err(),
            MetricError::IndexOutOfBounds {
                index: 2,
                node_count: 2
            }
        );
    }

    #[test]
    fn total_is_sum_of_roles() {
        let groups = GroupAssignment::from_sequence(vec![0], 1).unwrap();
        let result = BrokerageResult::from_counts(vec![[1, 2, 3, 4, 5]], groups);
        assert_eq!(result.total_brokerage(0).unwrap(), 15);
    }
}
