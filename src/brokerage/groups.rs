//! Group assignment resolution and validation

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{MetricError, Result};

/// A validated, order-preserving mapping from every vertex to a group label.
///
/// Labels only need equality; integers, strings, or any other `Eq` type work.
/// Construction fails unless the assignment covers the vertex set `0..n`
/// exactly, so downstream engines never observe a partial labeling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAssignment<T> {
    labels: Vec<T>,
}

impl<T: Eq> GroupAssignment<T> {
    /// Resolve a dense ordered sequence of labels.
    ///
    /// The sequence length must equal the vertex count exactly.
    pub fn from_sequence(labels: impl Into<Vec<T>>, node_count: usize) -> Result<Self> {
        let labels = labels.into();
        if labels.len() != node_count {
            return Err(MetricError::GroupLengthMismatch {
                expected: node_count,
                actual: labels.len(),
            });
        }
        Ok(Self { labels })
    }

    /// Number of labeled vertices
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of a vertex, `None` if out of range
    pub fn group(&self, vertex: usize) -> Option<&T> {
        self.labels.get(vertex)
    }

    /// Label of a vertex the engines have already range-checked
    pub(crate) fn label(&self, vertex: usize) -> &T {
        &self.labels[vertex]
    }
}

impl<T: Eq + Clone> GroupAssignment<T> {
    /// Resolve a sparse mapping keyed by vertex id.
    ///
    /// Every vertex in `0..node_count` must be present; keys outside that
    /// range are ignored.
    pub fn from_map<S>(map: &HashMap<usize, T, S>, node_count: usize) -> Result<Self>
    where
        S: std::hash::BuildHasher,
    {
        let mut labels = Vec::with_capacity(node_count);
        for vertex in 0..node_count {
            match map.get(&vertex) {
                Some(label) => labels.push(label.clone()),
                None => return Err(MetricError::GroupMissingVertex { vertex }),
            }
        }
        Ok(Self { labels })
    }
}

impl<T: Eq + Hash> GroupAssignment<T> {
    /// Number of distinct groups in the assignment
    pub fn group_count(&self) -> usize {
        self.labels.iter().collect::<std::collections::HashSet<_>>().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_length_mismatch_is_rejected() {
        let err = GroupAssignment::from_sequence(vec!["a", "b"], 3).unwrap_err();
        assert_eq!(
            err,
            MetricError::GroupLengthMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn sparse_missing_vertex_is_rejected() {
        let mut map = HashMap::new();
        map.insert(0, 'x');
        map.insert(2, 'y');
        let err = GroupAssignment::from_map(&map, 3).unwrap_err();
        assert_eq!(err, MetricError::GroupMissingVertex { vertex: 1 });
    }

    #[test]
    fn sparse_resolves_in_vertex_order() {
        let mut map = HashMap::new();
        map.insert(1, "blue");
        map.insert(0, "red");
        let groups = GroupAssignment::from_map(&map, 2).unwrap();
        assert_eq!(groups.group(0), Some(&"red"));
        assert_eq!(groups.group(1), Some(&"blue"));
        assert_eq!(groups.group(2), None);
        assert_eq!(groups.group_count(), 2);
    }
}
