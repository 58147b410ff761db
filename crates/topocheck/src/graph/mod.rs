//! Planar topology graph of one geometry argument.
//!
//! Purpose
//! - Decompose a geometry into labelled `Edge`s and coordinate-keyed `Node`s
//!   (`GeometryGraph`), self-node it with exhaustive segment enumeration
//!   (`edge_set` + `SegmentIntersector`), and expose the resulting topology
//!   to the validity ops.
//! - Provide the node-star view (`star::StarGraph`): edges split at their
//!   intersections into `EdgeEnd`s, bundled by direction and ordered
//!   counter-clockwise around each node (`Quadrant` + orientation).
//!
//! Layout
//! - Arena + index: edges and nodes live in `Vec`s and refer to each other by
//!   `EdgeId` / `NodeId`; no reference cycles.
//! - A graph borrows its geometry and lives for one validation call.
//!
//! Cross-refs: `algorithm::{classify, orientation_index, locate_point}`,
//! `topology::{Label, BoundaryNodeRule}`, `ops::{simple, consistent_area}`.

mod build;
pub mod edge;
pub mod edge_set;
pub mod node;
mod quadrant;
pub mod segment_intersector;
pub mod star;
mod types;

pub use build::GeometryGraph;
pub use edge::{Edge, EdgeIntersection, EdgeIntersectionList};
pub use edge_set::EdgeSetStrategy;
pub use node::{Node, NodeMap};
pub use quadrant::Quadrant;
pub use segment_intersector::SegmentIntersector;
pub use star::{EdgeEnd, EdgeEndBundle, StarGraph, StarNode};
pub use types::{ComponentId, EdgeId, GraphCfg, NodeId};

#[cfg(test)]
mod tests;
