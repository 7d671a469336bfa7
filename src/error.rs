//! Error types for metric computations

use thiserror::Error;

/// Errors surfaced by the constraint and brokerage engines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    /// A vertex index was outside the graph's vertex range
    #[error("vertex {vertex} is out of range for a graph with {node_count} nodes")]
    VertexOutOfRange { vertex: usize, node_count: usize },

    /// A dense group assignment did not cover the vertex set exactly
    #[error("group assignment has {actual} labels but the graph has {expected} nodes")]
    GroupLengthMismatch { expected: usize, actual: usize },

    /// A sparse group assignment left a vertex without a label
    #[error("group assignment is missing a label for vertex {vertex}")]
    GroupMissingVertex { vertex: usize },

    /// A result container was indexed outside its node range
    #[error("index {index} is out of bounds for a result over {node_count} nodes")]
    IndexOutOfBounds { index: usize, node_count: usize },
}

pub type Result<T> = std::result::Result<T, MetricError>;
