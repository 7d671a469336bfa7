//! Graph representations and the adapter layer

pub mod builder;
pub mod compressed;
pub mod view;

pub use builder::GraphBuilder;
pub use compressed::CompressedGraph;
pub use view::{EdgeEndpoints, GraphView, TieStrength};
