//! Point location by ray crossing.
//!
//! Rings and polygons are located with a `RayCrossingCounter` (exact on-segment
//! detection through `orientation_index`). Other geometry kinds combine the
//! per-component results: interior hits, plus a count of boundary (endpoint)
//! occurrences that the `BoundaryNodeRule` turns into a location.

use crate::geom::{Coord, Envelope, Geometry, LineString, Polygon};
use crate::topology::{BoundaryNodeRule, Location};

use super::orientation::orientation_index;

/// Counts crossings of the ray `p → +x` with a sequence of segments.
#[derive(Clone, Copy, Debug)]
pub struct RayCrossingCounter {
    p: Coord,
    crossings: usize,
    on_segment: bool,
}

impl RayCrossingCounter {
    pub fn new(p: Coord) -> Self {
        Self {
            p,
            crossings: 0,
            on_segment: false,
        }
    }

    /// Feed one segment. Segments may arrive in any order.
    pub fn count_segment(&mut self, p1: Coord, p2: Coord) {
        let p = self.p;
        // strictly left of the ray origin
        if p1.x < p.x && p2.x < p.x {
            return;
        }
        if p == p2 {
            self.on_segment = true;
            return;
        }
        if p1.y == p.y && p2.y == p.y {
            let (lo, hi) = (p1.x.min(p2.x), p1.x.max(p2.x));
            if p.x >= lo && p.x <= hi {
                self.on_segment = true;
            }
            return;
        }
        // half-open rule on y avoids double counting at vertices
        if (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y) {
            let mut orient = orientation_index(p1, p2, p);
            if orient == 0 {
                self.on_segment = true;
                return;
            }
            if p2.y < p1.y {
                orient = -orient;
            }
            if orient > 0 {
                self.crossings += 1;
            }
        }
    }

    #[inline]
    pub fn is_on_segment(&self) -> bool {
        self.on_segment
    }

    pub fn location(&self) -> Location {
        if self.on_segment {
            Location::Boundary
        } else if self.crossings % 2 == 1 {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}

/// Location of `p` relative to the area bounded by a closed ring.
pub fn locate_in_ring(p: Coord, ring: &[Coord]) -> Location {
    let mut counter = RayCrossingCounter::new(p);
    for w in ring.windows(2) {
        counter.count_segment(w[1], w[0]);
        if counter.is_on_segment() {
            break;
        }
    }
    counter.location()
}

pub fn locate_in_polygon(p: Coord, poly: &Polygon) -> Location {
    if poly.is_empty() || !Envelope::of_points(&poly.exterior.coords).contains(p) {
        return Location::Exterior;
    }
    match locate_in_ring(p, &poly.exterior.coords) {
        Location::Interior => {}
        loc => return loc,
    }
    for hole in &poly.interiors {
        match locate_in_ring(p, &hole.coords) {
            Location::Boundary => return Location::Boundary,
            Location::Interior => return Location::Exterior,
            _ => {}
        }
    }
    Location::Interior
}

/// Location of `p` relative to `geom`.
///
/// Polygonal geometries are located directly (boundary wins, then interior).
/// Everything else accumulates interior hits and boundary occurrences (line
/// endpoints, polygon boundaries inside collections) and applies `rule`.
pub fn locate_point(p: Coord, geom: &Geometry, rule: BoundaryNodeRule) -> Location {
    if geom.is_empty() {
        return Location::Exterior;
    }
    match geom {
        Geometry::Polygon(poly) => locate_in_polygon(p, poly),
        Geometry::MultiPolygon(polys) => {
            let mut inside = false;
            for poly in polys {
                match locate_in_polygon(p, poly) {
                    Location::Boundary => return Location::Boundary,
                    Location::Interior => inside = true,
                    _ => {}
                }
            }
            if inside {
                Location::Interior
            } else {
                Location::Exterior
            }
        }
        _ => {
            let mut acc = LocationAcc::default();
            acc.visit(p, geom);
            acc.resolve(rule)
        }
    }
}

#[derive(Default)]
struct LocationAcc {
    is_in: bool,
    boundaries: usize,
}

impl LocationAcc {
    fn visit(&mut self, p: Coord, geom: &Geometry) {
        match geom {
            Geometry::Point(c) => {
                if *c == p {
                    self.is_in = true;
                }
            }
            Geometry::MultiPoint(pts) => {
                if pts.contains(&p) {
                    self.is_in = true;
                }
            }
            Geometry::LineString(l) | Geometry::LinearRing(l) => self.visit_line(p, l),
            Geometry::MultiLineString(ls) => ls.iter().for_each(|l| self.visit_line(p, l)),
            Geometry::Polygon(poly) => self.update(locate_in_polygon(p, poly)),
            Geometry::MultiPolygon(polys) => polys
                .iter()
                .for_each(|poly| self.update(locate_in_polygon(p, poly))),
            Geometry::GeometryCollection(gs) => gs.iter().for_each(|g| self.visit(p, g)),
        }
    }

    fn visit_line(&mut self, p: Coord, line: &LineString) {
        let (Some(first), Some(last)) = (line.coords.first(), line.coords.last()) else {
            return;
        };
        let endpoint_hits = usize::from(*first == p) + usize::from(*last == p);
        if endpoint_hits > 0 {
            self.boundaries += endpoint_hits;
        } else if is_on_line(p, &line.coords) {
            self.is_in = true;
        }
    }

    fn update(&mut self, loc: Location) {
        match loc {
            Location::Interior => self.is_in = true,
            Location::Boundary => self.boundaries += 1,
            _ => {}
        }
    }

    fn resolve(&self, rule: BoundaryNodeRule) -> Location {
        if self.boundaries > 0 {
            let loc = rule.location(self.boundaries);
            if loc == Location::Boundary || !self.is_in {
                return loc;
            }
        }
        if self.is_in {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}

/// `p` lies on some segment of the polyline (exact).
pub fn is_on_line(p: Coord, pts: &[Coord]) -> bool {
    pts.windows(2).any(|w| {
        Envelope::of_segment(w[0], w[1]).contains(p) && orientation_index(w[0], w[1], p) == 0
    })
}
