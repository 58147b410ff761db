//! Node-level consistency of polygonal ring arrangements.
//!
//! A polygonal geometry is consistent when its rings never cross properly,
//! the side labels around every node alternate coherently (walking the node
//! star counter-clockwise, each edge's right side matches the previous
//! edge's left side) and no two rings share a directed segment.

use crate::geom::{Coord, Geometry, LineSegment};
use crate::graph::{GeometryGraph, GraphCfg, StarGraph};

/// Outcome of `is_consistent_area`.
///
/// `invalid_points` carries proper crossings or inconsistent nodes;
/// `invalid_segments` carries one segment per duplicated-ring bundle.
/// Both are empty iff `is_consistent`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaConsistency {
    pub is_consistent: bool,
    pub invalid_points: Vec<Coord>,
    pub invalid_segments: Vec<LineSegment>,
}

impl AreaConsistency {
    fn consistent() -> Self {
        Self {
            is_consistent: true,
            ..Self::default()
        }
    }
}

/// Two-step tester over a graph it self-nodes on first use.
#[derive(Debug)]
pub struct ConsistentAreaTester<'g, 'a> {
    graph: &'g mut GeometryGraph<'a>,
    star: Option<StarGraph>,
    node_consistent: bool,
    invalid_points: Vec<Coord>,
    invalid_segments: Vec<LineSegment>,
}

impl<'g, 'a> ConsistentAreaTester<'g, 'a> {
    pub fn new(graph: &'g mut GeometryGraph<'a>) -> Self {
        Self {
            graph,
            star: None,
            node_consistent: false,
            invalid_points: Vec::new(),
            invalid_segments: Vec::new(),
        }
    }

    /// Self-node (ring self-intersections included), reject proper crossings,
    /// then check the side labels around every node. All failing nodes are
    /// collected.
    pub fn is_node_consistent_area(&mut self) -> bool {
        let si = self.graph.compute_self_nodes(true);
        if si.has_proper_intersection() {
            self.invalid_points = si.proper_intersections().to_vec();
            self.star = None;
            self.node_consistent = false;
            tracing::debug!(points = self.invalid_points.len(), "rings cross properly");
            return false;
        }
        let star = StarGraph::build(self.graph);
        let arg = self.graph.arg_index();
        self.invalid_points = star
            .nodes()
            .filter(|n| !n.is_area_labels_consistent(arg))
            .map(|n| n.coord())
            .collect();
        self.node_consistent = self.invalid_points.is_empty();
        if !self.node_consistent {
            tracing::debug!(nodes = self.invalid_points.len(), "inconsistent node labels");
        }
        self.star = Some(star);
        self.node_consistent
    }

    /// Rings sharing a directed segment. Only answers after
    /// `is_node_consistent_area` returned `true`; `false` otherwise.
    pub fn has_duplicate_rings(&mut self) -> bool {
        let Some(star) = self.star.as_ref().filter(|_| self.node_consistent) else {
            return false;
        };
        self.invalid_segments = star
            .nodes()
            .flat_map(|n| n.bundles())
            .filter(|b| b.ends().len() > 1)
            .map(|b| b.first().segment())
            .collect();
        !self.invalid_segments.is_empty()
    }

    #[inline]
    pub fn invalid_points(&self) -> &[Coord] {
        &self.invalid_points
    }
    #[inline]
    pub fn invalid_segments(&self) -> &[LineSegment] {
        &self.invalid_segments
    }
}

/// `is_consistent_area_with` under the default configuration.
pub fn is_consistent_area(geom: &Geometry) -> AreaConsistency {
    is_consistent_area_with(geom, GraphCfg::default())
}

/// Node consistency, then duplicate rings. Non-polygonal input is trivially
/// consistent.
pub fn is_consistent_area_with(geom: &Geometry, cfg: GraphCfg) -> AreaConsistency {
    if !geom.is_polygonal() || geom.is_empty() {
        return AreaConsistency::consistent();
    }
    let mut graph = GeometryGraph::new(0, geom, cfg);
    let mut tester = ConsistentAreaTester::new(&mut graph);
    if !tester.is_node_consistent_area() {
        return AreaConsistency {
            is_consistent: false,
            invalid_points: tester.invalid_points,
            invalid_segments: Vec::new(),
        };
    }
    if tester.has_duplicate_rings() {
        return AreaConsistency {
            is_consistent: false,
            invalid_points: Vec::new(),
            invalid_segments: tester.invalid_segments,
        };
    }
    AreaConsistency::consistent()
}
