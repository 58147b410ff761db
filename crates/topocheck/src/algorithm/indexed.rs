//! R-tree accelerated point-in-area location.
//!
//! All ring segments of a polygonal geometry are bulk-loaded into an `rstar`
//! tree once. A query only feeds the segments whose envelope meets the ray
//! `p → max_x` into a `RayCrossingCounter`; parity over all rings gives the
//! location (valid polygonal input has non-crossing rings).

use rstar::primitives::Line;
use rstar::{RTree, AABB};

use crate::geom::{Coord, Envelope, Geometry, Polygon};
use crate::topology::Location;

use super::locate::RayCrossingCounter;

#[derive(Debug)]
pub struct IndexedPointInArea {
    tree: RTree<Line<[f64; 2]>>,
    env: Envelope,
}

impl IndexedPointInArea {
    /// Index every ring of the polygonal parts of `geom`.
    pub fn new(geom: &Geometry) -> Self {
        let mut segments = Vec::new();
        collect_ring_segments(geom, &mut segments);
        tracing::trace!(segments = segments.len(), "built point-in-area index");
        Self {
            tree: RTree::bulk_load(segments),
            env: geom.envelope(),
        }
    }

    pub fn locate(&self, p: Coord) -> Location {
        if self.env.is_empty() || !self.env.contains(p) {
            return Location::Exterior;
        }
        let ray = AABB::from_corners([p.x, p.y], [self.env.max.x, p.y]);
        let mut counter = RayCrossingCounter::new(p);
        for seg in self.tree.locate_in_envelope_intersecting(&ray) {
            counter.count_segment(Coord::from(seg.from), Coord::from(seg.to));
            if counter.is_on_segment() {
                break;
            }
        }
        counter.location()
    }
}

fn collect_ring_segments(geom: &Geometry, out: &mut Vec<Line<[f64; 2]>>) {
    match geom {
        Geometry::Polygon(poly) => push_polygon(poly, out),
        Geometry::MultiPolygon(polys) => polys.iter().for_each(|p| push_polygon(p, out)),
        Geometry::GeometryCollection(gs) => gs.iter().for_each(|g| collect_ring_segments(g, out)),
        _ => {}
    }
}

fn push_polygon(poly: &Polygon, out: &mut Vec<Line<[f64; 2]>>) {
    for ring in poly.rings() {
        for w in ring.coords.windows(2) {
            if w[0] != w[1] {
                out.push(Line::new([w[0].x, w[0].y], [w[1].x, w[1].y]));
            }
        }
    }
}
