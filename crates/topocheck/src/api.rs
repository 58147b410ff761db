//! Curated surface for callers that want one import path.
//!
//! Groups the types a validation driver needs: geometry input, per-call
//! configuration, the two predicates and the graph for callers that inspect
//! topology directly.

// Geometry input
pub use crate::geom::{Coord, Geometry, LineSegment, LineString, Polygon};
// Configuration
pub use crate::graph::{EdgeSetStrategy, GraphCfg};
pub use crate::topology::BoundaryNodeRule;
// Predicates
pub use crate::ops::{
    is_consistent_area, is_consistent_area_with, is_simple, is_simple_with, AreaConsistency,
    ConsistentAreaTester, SimpleResult,
};
// Topology inspection
pub use crate::graph::{GeometryGraph, SegmentIntersector, StarGraph};
pub use crate::topology::{Label, Location};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_surface_runs_both_predicates() {
        let cfg = GraphCfg {
            boundary_rule: BoundaryNodeRule::AtMostOne,
            strategy: EdgeSetStrategy::Simple,
            ..GraphCfg::default()
        };
        let ring = LineString::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
        let area = Geometry::Polygon(Polygon::new(ring.clone(), vec![]));
        assert!(is_simple_with(&Geometry::LineString(ring), cfg).is_simple);
        assert!(is_consistent_area_with(&area, cfg).is_consistent);
        assert_eq!(
            GeometryGraph::new(0, &area, cfg).locate(Coord::new(2.0, 2.0)),
            Location::Interior
        );
    }
}
