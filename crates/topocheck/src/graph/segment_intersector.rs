//! Accumulates segment intersections found while enumerating candidate pairs.

use std::collections::BTreeSet;

use crate::algorithm::{classify, IntersectionRecord};
use crate::geom::{Coord, CoordKey};

use super::edge::Edge;

/// Per-pair intersection recorder with aggregate flags.
///
/// Invariants:
/// - Trivial hits (one point shared by adjacent segments of the same edge,
///   including the closing pair of a closed edge) are never recorded.
/// - `proper_intersections` keeps discovery order.
#[derive(Clone, Debug)]
pub struct SegmentIntersector {
    include_proper: bool,
    record_isolated: bool,
    boundary_nodes: BTreeSet<CoordKey>,
    has_intersection: bool,
    has_proper: bool,
    has_proper_interior: bool,
    proper_intersections: Vec<Coord>,
    num_tests: usize,
}

impl SegmentIntersector {
    /// `include_proper`: also add proper crossings to the edges' intersection
    /// lists (non-proper hits are always added). `record_isolated`: clear the
    /// `is_isolated` flag of edges that take part in a hit.
    pub fn new(include_proper: bool, record_isolated: bool) -> Self {
        Self {
            include_proper,
            record_isolated,
            boundary_nodes: BTreeSet::new(),
            has_intersection: false,
            has_proper: false,
            has_proper_interior: false,
            proper_intersections: Vec::new(),
            num_tests: 0,
        }
    }

    /// Known boundary-node coordinates; proper hits on them are not "interior".
    pub fn with_boundary_nodes(mut self, nodes: impl IntoIterator<Item = Coord>) -> Self {
        self.boundary_nodes = nodes.into_iter().map(CoordKey::new).collect();
        self
    }

    #[inline]
    pub fn has_intersection(&self) -> bool {
        self.has_intersection
    }
    #[inline]
    pub fn has_proper_intersection(&self) -> bool {
        self.has_proper
    }
    #[inline]
    pub fn has_proper_interior_intersection(&self) -> bool {
        self.has_proper_interior
    }
    #[inline]
    pub fn proper_intersections(&self) -> &[Coord] {
        &self.proper_intersections
    }
    /// Segment pairs handed to the intersector.
    #[inline]
    pub fn num_tests(&self) -> usize {
        self.num_tests
    }

    /// Test segment `s0` of `edges[e0]` against segment `s1` of `edges[e1]`.
    pub fn add_intersections(&mut self, edges: &mut [Edge], e0: usize, s0: usize, e1: usize, s1: usize) {
        if e0 == e1 && s0 == s1 {
            return;
        }
        let Some(hit) = self.evaluate(&edges[e0], s0, &edges[e1], s1, e0 == e1) else {
            return;
        };
        self.apply(&mut edges[e0], s0, &hit);
        self.apply(&mut edges[e1], s1, &hit);
    }

    /// Same as `add_intersections` for edges taken from two different sets.
    pub fn add_intersections_between(
        &mut self,
        edges0: &mut [Edge],
        e0: usize,
        s0: usize,
        edges1: &mut [Edge],
        e1: usize,
        s1: usize,
    ) {
        let Some(hit) = self.evaluate(&edges0[e0], s0, &edges1[e1], s1, false) else {
            return;
        };
        self.apply(&mut edges0[e0], s0, &hit);
        self.apply(&mut edges1[e1], s1, &hit);
    }

    fn evaluate(&mut self, a: &Edge, s0: usize, b: &Edge, s1: usize, same_edge: bool) -> Option<Hit> {
        self.num_tests += 1;
        let (p00, p01) = a.segment(s0);
        let (p10, p11) = b.segment(s1);
        let record = classify(p00, p01, p10, p11);
        if !record.has_intersection() {
            return None;
        }
        if same_edge && is_trivial(a, s0, s1, &record) {
            return None;
        }
        self.has_intersection = true;

        // Roundoff can land a proper crossing on a boundary node; such a
        // point must still become a node, so it is recorded like a touch.
        let is_boundary_pt = record
            .points()
            .any(|p| self.boundary_nodes.contains(&CoordKey::new(p)));
        let is_not_proper = !record.is_proper() || is_boundary_pt;
        if record.is_proper() {
            if let Some(pt) = record.points().next() {
                self.proper_intersections.push(pt);
            }
            self.has_proper = true;
            if !is_boundary_pt {
                self.has_proper_interior = true;
            }
        }
        Some(Hit {
            record,
            add_to_edges: self.include_proper || is_not_proper,
        })
    }

    fn apply(&self, edge: &mut Edge, segment_index: usize, hit: &Hit) {
        if self.record_isolated {
            edge.is_isolated = false;
        }
        if hit.add_to_edges {
            edge.add_intersections(&hit.record, segment_index);
        }
    }
}

struct Hit {
    record: IntersectionRecord,
    add_to_edges: bool,
}

/// Single shared vertex of adjacent segments of one edge.
fn is_trivial(edge: &Edge, s0: usize, s1: usize, record: &IntersectionRecord) -> bool {
    if record.num_points() != 1 {
        return false;
    }
    if s0.abs_diff(s1) == 1 {
        return true;
    }
    if edge.is_closed() {
        let last_seg = edge.num_points() - 2;
        if (s0 == 0 && s1 == last_seg) || (s1 == 0 && s0 == last_seg) {
            return true;
        }
    }
    false
}
