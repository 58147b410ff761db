//! Coordinates, envelopes and the geometry enum.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// 2D coordinate (x, y).
pub type Coord = Vector2<f64>;

/// Exact, totally ordered coordinate key (x first, then y).
///
/// Invariants:
/// - `-0.0` and `0.0` compare equal (both normalized to `0.0`).
/// - Ordering uses `f64::total_cmp`, so NaN coordinates still have a slot.
#[derive(Clone, Copy, Debug)]
pub struct CoordKey {
    x: f64,
    y: f64,
}

impl CoordKey {
    #[inline]
    pub fn new(c: Coord) -> Self {
        // adding 0.0 maps -0.0 to 0.0 and leaves everything else untouched
        Self {
            x: c.x + 0.0,
            y: c.y + 0.0,
        }
    }
    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

impl From<Coord> for CoordKey {
    #[inline]
    fn from(c: Coord) -> Self {
        CoordKey::new(c)
    }
}

impl Ord for CoordKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}
impl PartialOrd for CoordKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for CoordKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for CoordKey {}

/// Axis-aligned bounding box. `Envelope::default()` is the empty box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub min: Coord,
    pub max: Coord,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            min: Coord::new(f64::INFINITY, f64::INFINITY),
            max: Coord::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }
}

impl Envelope {
    #[inline]
    pub fn of_segment(p: Coord, q: Coord) -> Self {
        Self {
            min: Coord::new(p.x.min(q.x), p.y.min(q.y)),
            max: Coord::new(p.x.max(q.x), p.y.max(q.y)),
        }
    }
    pub fn of_points(pts: &[Coord]) -> Self {
        let mut env = Envelope::default();
        for p in pts {
            env.expand_to_include(*p);
        }
        env
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }
    #[inline]
    pub fn expand_to_include(&mut self, p: Coord) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }
    #[inline]
    pub fn intersects(&self, other: &Envelope) -> bool {
        !(other.min.x > self.max.x
            || other.max.x < self.min.x
            || other.min.y > self.max.y
            || other.max.y < self.min.y)
    }
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Directed segment `p0 → p1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub p0: Coord,
    pub p1: Coord,
}

impl LineSegment {
    #[inline]
    pub fn new(p0: Coord, p1: Coord) -> Self {
        Self { p0, p1 }
    }
}

/// Ordered vertex sequence. May be empty; may contain repeated vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString {
    pub coords: Vec<Coord>,
}

impl LineString {
    #[inline]
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }
    /// Convenience constructor from `(x, y)` tuples.
    pub fn from_xy(pts: &[(f64, f64)]) -> Self {
        Self {
            coords: pts.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
        }
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!((self.coords.first(), self.coords.last()), (Some(a), Some(b)) if a == b)
    }
}

/// Polygon: one shell and zero or more holes, all closed rings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub exterior: LineString,
    pub interiors: Vec<LineString>,
}

impl Polygon {
    #[inline]
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }
    /// Shell followed by holes.
    pub fn rings(&self) -> impl Iterator<Item = &LineString> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }
}

/// Every geometry kind the graph understands.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Coord),
    LineString(LineString),
    LinearRing(LineString),
    Polygon(Polygon),
    MultiPoint(Vec<Coord>),
    MultiLineString(Vec<LineString>),
    MultiPolygon(Vec<Polygon>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            Geometry::LineString(l) | Geometry::LinearRing(l) => l.is_empty(),
            Geometry::Polygon(p) => p.is_empty(),
            Geometry::MultiPoint(pts) => pts.is_empty(),
            Geometry::MultiLineString(ls) => ls.iter().all(LineString::is_empty),
            Geometry::MultiPolygon(ps) => ps.iter().all(Polygon::is_empty),
            Geometry::GeometryCollection(gs) => gs.iter().all(Geometry::is_empty),
        }
    }

    /// `Polygon` or `MultiPolygon`.
    #[inline]
    pub fn is_polygonal(&self) -> bool {
        matches!(self, Geometry::Polygon(_) | Geometry::MultiPolygon(_))
    }

    /// Number of rings over all polygon components (0 for non-areal kinds).
    pub fn num_rings(&self) -> usize {
        match self {
            Geometry::Polygon(p) => usize::from(!p.is_empty()) + p.interiors.len(),
            Geometry::MultiPolygon(ps) => ps
                .iter()
                .map(|p| usize::from(!p.is_empty()) + p.interiors.len())
                .sum(),
            Geometry::GeometryCollection(gs) => gs.iter().map(Geometry::num_rings).sum(),
            _ => 0,
        }
    }

    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::default();
        self.for_each_coord(&mut |c| env.expand_to_include(c));
        env
    }

    fn for_each_coord(&self, f: &mut impl FnMut(Coord)) {
        match self {
            Geometry::Point(c) => f(*c),
            Geometry::LineString(l) | Geometry::LinearRing(l) => l.coords.iter().for_each(|c| f(*c)),
            Geometry::Polygon(p) => p.rings().flat_map(|r| r.coords.iter()).for_each(|c| f(*c)),
            Geometry::MultiPoint(pts) => pts.iter().for_each(|c| f(*c)),
            Geometry::MultiLineString(ls) => ls.iter().flat_map(|l| l.coords.iter()).for_each(|c| f(*c)),
            Geometry::MultiPolygon(ps) => ps
                .iter()
                .flat_map(|p| p.rings())
                .flat_map(|r| r.coords.iter())
                .for_each(|c| f(*c)),
            Geometry::GeometryCollection(gs) => gs.iter().for_each(|g| g.for_each_coord(f)),
        }
    }
}
