//! Structural-holes constraint and Gould-Fernandez brokerage roles over
//! social network graphs.
//!
//! Both metric families run against any graph exposed through the
//! [`GraphView`] adapter: directed or undirected, weighted or unweighted.
//! Adapters ship for `petgraph::Graph` and for the native [`CompressedGraph`]
//! CSR representation. All computations are pure functions of their graph,
//! mode, and group inputs; nothing is cached across calls.

pub mod brokerage;
pub mod constraint;
pub mod error;
pub mod graph;

pub use brokerage::{brokerage, ego_brokerage, BrokerageResult, EgoBrokerage, GroupAssignment, Role};
pub use constraint::{
    constraint, dyad_constraint, dyad_constraint_edge, investment, investment_sum, Mode,
};
pub use error::{MetricError, Result};
pub use graph::{CompressedGraph, EdgeEndpoints, GraphBuilder, GraphView, TieStrength};
