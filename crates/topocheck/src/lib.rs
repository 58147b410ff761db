//! Planar topology graph and robust validity predicates for 2D linear geometry.
//!
//! Layers (leaves first)
//! - `geom`: coordinates, envelopes and the exhaustive `Geometry` enum.
//! - `algorithm`: exact orientation, segment intersection classification and
//!   point location.
//! - `topology`: locations, labels and the boundary node rule.
//! - `graph`: the per-argument `GeometryGraph` (edges, coordinate-keyed nodes,
//!   self-noding) and its node-star view.
//! - `ops`: `is_simple` and `is_consistent_area`.
//!
//! Conventions
//! - Coordinates are compared exactly; there is no snapping or tolerance.
//! - Degenerate input is reported as data (flags, invalid points), never as a
//!   panic or an error.
//! - Iteration orders are deterministic: nodes in coordinate order, edges in
//!   insertion order.

pub mod algorithm;
pub mod api;
pub mod geom;
pub mod graph;
pub mod ops;
pub mod topology;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Coord, Geometry, LineSegment, LineString, Polygon};
pub use graph::GraphCfg;
pub use ops::{is_consistent_area, is_simple, AreaConsistency, SimpleResult};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{Coord, Envelope, Geometry, LineSegment, LineString, Polygon};
    pub use crate::graph::{EdgeSetStrategy, GeometryGraph, GraphCfg};
    pub use crate::ops::{
        is_consistent_area, is_consistent_area_with, is_simple, is_simple_with, AreaConsistency,
        SimpleResult,
    };
    pub use crate::topology::{BoundaryNodeRule, Location};
}
