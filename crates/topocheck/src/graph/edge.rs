//! Edges and their ordered intersection lists.

use std::cmp::Ordering;

use crate::algorithm::{edge_distance, IntersectionRecord};
use crate::geom::{Coord, Envelope};
use crate::topology::Label;

use super::types::{ComponentId, NodeId};

/// A point where an edge is intersected: vertex-normalized segment index plus
/// the ordering distance along that segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeIntersection {
    pub coord: Coord,
    pub segment_index: usize,
    pub dist: f64,
}

impl EdgeIntersection {
    #[inline]
    fn cmp_key(&self, segment_index: usize, dist: f64) -> Ordering {
        self.segment_index
            .cmp(&segment_index)
            .then_with(|| self.dist.total_cmp(&dist))
    }

    /// First or last vertex of an edge whose last vertex index is `max_segment_index`.
    #[inline]
    pub fn is_endpoint(&self, max_segment_index: usize) -> bool {
        (self.segment_index == 0 && self.dist == 0.0) || self.segment_index == max_segment_index
    }
}

/// Intersections of one edge, sorted by `(segment_index, dist)`, unique per key.
///
/// Edge splitting walks this list in order, so the sort is an invariant, not a
/// convenience.
#[derive(Clone, Debug, Default)]
pub struct EdgeIntersectionList {
    items: Vec<EdgeIntersection>,
}

impl EdgeIntersectionList {
    /// Insert in order; returns `false` if the key was already present.
    pub fn add(&mut self, coord: Coord, segment_index: usize, dist: f64) -> bool {
        match self
            .items
            .binary_search_by(|ei| ei.cmp_key(segment_index, dist))
        {
            Ok(_) => false,
            Err(pos) => {
                self.items.insert(
                    pos,
                    EdgeIntersection {
                        coord,
                        segment_index,
                        dist,
                    },
                );
                true
            }
        }
    }

    /// Ensure the first and last vertex of `coords` are present.
    pub fn add_endpoints(&mut self, coords: &[Coord]) {
        let Some(max) = coords.len().checked_sub(1) else {
            return;
        };
        self.add(coords[0], 0, 0.0);
        self.add(coords[max], max, 0.0);
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, EdgeIntersection> {
        self.items.iter()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a EdgeIntersectionList {
    type Item = &'a EdgeIntersection;
    type IntoIter = std::slice::Iter<'a, EdgeIntersection>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Labelled polyline of ≥2 distinct consecutive vertices.
#[derive(Clone, Debug)]
pub struct Edge {
    pub(crate) coords: Vec<Coord>,
    pub(crate) label: Label,
    pub(crate) intersections: EdgeIntersectionList,
    pub(crate) is_isolated: bool,
    pub(crate) env: Envelope,
    pub(crate) component: ComponentId,
    pub(crate) nodes: [NodeId; 2],
}

impl Edge {
    pub(crate) fn new(coords: Vec<Coord>, label: Label, component: ComponentId) -> Self {
        debug_assert!(coords.len() >= 2, "edge needs at least two vertices");
        let env = Envelope::of_points(&coords);
        Self {
            coords,
            label,
            intersections: EdgeIntersectionList::default(),
            is_isolated: true,
            env,
            component,
            nodes: [NodeId(usize::MAX); 2],
        }
    }

    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }
    #[inline]
    pub fn intersections(&self) -> &EdgeIntersectionList {
        &self.intersections
    }
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.is_isolated
    }
    #[inline]
    pub fn envelope(&self) -> Envelope {
        self.env
    }
    #[inline]
    pub fn component(&self) -> ComponentId {
        self.component
    }
    /// Start and end node.
    #[inline]
    pub fn nodes(&self) -> [NodeId; 2] {
        self.nodes
    }
    #[inline]
    pub fn num_points(&self) -> usize {
        self.coords.len()
    }
    /// Index of the last vertex (segment indices run below it).
    #[inline]
    pub fn max_segment_index(&self) -> usize {
        self.coords.len() - 1
    }
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.coords.first() == self.coords.last()
    }
    #[inline]
    pub fn segment(&self, i: usize) -> (Coord, Coord) {
        (self.coords[i], self.coords[i + 1])
    }

    /// Record every point of `rec` as lying on segment `segment_index`.
    pub(crate) fn add_intersections(&mut self, rec: &IntersectionRecord, segment_index: usize) {
        for pt in rec.points() {
            self.add_intersection(pt, segment_index);
        }
    }

    fn add_intersection(&mut self, pt: Coord, segment_index: usize) {
        let (p0, p1) = self.segment(segment_index);
        let mut seg = segment_index;
        let mut dist = edge_distance(pt, p0, p1);
        // a point on the next vertex belongs to the next segment at distance 0
        let next = segment_index + 1;
        if next < self.coords.len() && pt == self.coords[next] {
            seg = next;
            dist = 0.0;
        }
        self.intersections.add(pt, seg, dist);
    }
}
