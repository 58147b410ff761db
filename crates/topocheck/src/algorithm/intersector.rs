//! Segment/segment intersection classification.
//!
//! `classify(p1, p2, q1, q2)` never panics and always returns one of the three
//! `IntersectionRecord` shapes. Side tests use the exact orientation predicate;
//! only the coordinates of a proper crossing are computed in floating point.

use crate::geom::{Coord, Envelope};

use super::orientation::orientation_index;

/// Outcome of intersecting two segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IntersectionRecord {
    None,
    /// Single intersection point. `is_proper` iff it is interior to both
    /// segments (all four orientations non-zero).
    Point { pt: Coord, is_proper: bool },
    /// Collinear overlap from the first to the second coordinate.
    Collinear(Coord, Coord),
}

impl IntersectionRecord {
    #[inline]
    pub fn has_intersection(&self) -> bool {
        !matches!(self, IntersectionRecord::None)
    }
    #[inline]
    pub fn is_proper(&self) -> bool {
        matches!(self, IntersectionRecord::Point { is_proper: true, .. })
    }
    #[inline]
    pub fn num_points(&self) -> usize {
        match self {
            IntersectionRecord::None => 0,
            IntersectionRecord::Point { .. } => 1,
            IntersectionRecord::Collinear(..) => 2,
        }
    }
    /// Intersection coordinates in record order.
    pub fn points(&self) -> impl Iterator<Item = Coord> {
        let pts = match *self {
            IntersectionRecord::None => [None, None],
            IntersectionRecord::Point { pt, .. } => [Some(pt), None],
            IntersectionRecord::Collinear(a, b) => [Some(a), Some(b)],
        };
        pts.into_iter().flatten()
    }
    /// Some intersection point is not an endpoint of `p1–p2` or `q1–q2`.
    pub fn is_interior_intersection(&self, p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> bool {
        self.points().any(|pt| pt != p1 && pt != p2 && pt != q1 && pt != q2)
    }
}

/// Classify the intersection of segments `p1–p2` and `q1–q2`.
pub fn classify(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> IntersectionRecord {
    if p1 == p2 || q1 == q2 {
        return IntersectionRecord::None;
    }
    if !Envelope::of_segment(p1, p2).intersects(&Envelope::of_segment(q1, q2)) {
        return IntersectionRecord::None;
    }

    let pq1 = orientation_index(p1, p2, q1);
    let pq2 = orientation_index(p1, p2, q2);
    if (pq1 > 0 && pq2 > 0) || (pq1 < 0 && pq2 < 0) {
        return IntersectionRecord::None;
    }
    let qp1 = orientation_index(q1, q2, p1);
    let qp2 = orientation_index(q1, q2, p2);
    if (qp1 > 0 && qp2 > 0) || (qp1 < 0 && qp2 < 0) {
        return IntersectionRecord::None;
    }

    if pq1 == 0 && pq2 == 0 && qp1 == 0 && qp2 == 0 {
        return collinear_intersection(p1, p2, q1, q2);
    }

    // Exactly one intersection point from here on.
    if pq1 == 0 || pq2 == 0 || qp1 == 0 || qp2 == 0 {
        // shared endpoints first, then an endpoint on the other segment
        let pt = if p1 == q1 || p1 == q2 {
            p1
        } else if p2 == q1 || p2 == q2 {
            p2
        } else if pq1 == 0 {
            q1
        } else if pq2 == 0 {
            q2
        } else if qp1 == 0 {
            p1
        } else {
            p2
        };
        return IntersectionRecord::Point {
            pt,
            is_proper: false,
        };
    }
    IntersectionRecord::Point {
        pt: intersection_point(p1, p2, q1, q2),
        is_proper: true,
    }
}

fn collinear_intersection(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> IntersectionRecord {
    let p_env = Envelope::of_segment(p1, p2);
    let q_env = Envelope::of_segment(q1, q2);
    let q1_in_p = p_env.contains(q1);
    let q2_in_p = p_env.contains(q2);
    let p1_in_q = q_env.contains(p1);
    let p2_in_q = q_env.contains(p2);

    if q1_in_p && q2_in_p {
        return IntersectionRecord::Collinear(q1, q2);
    }
    if p1_in_q && p2_in_q {
        return IntersectionRecord::Collinear(p1, p2);
    }
    // partial overlaps; a single shared endpoint degenerates to a point
    let pair = if q1_in_p && p1_in_q {
        Some((q1, p1))
    } else if q1_in_p && p2_in_q {
        Some((q1, p2))
    } else if q2_in_p && p1_in_q {
        Some((q2, p1))
    } else if q2_in_p && p2_in_q {
        Some((q2, p2))
    } else {
        None
    };
    match pair {
        Some((a, b)) if a == b => IntersectionRecord::Point {
            pt: a,
            is_proper: false,
        },
        Some((a, b)) => IntersectionRecord::Collinear(a, b),
        None => IntersectionRecord::None,
    }
}

/// Crossing point of two properly intersecting segments.
///
/// Computed in a frame centred on the overlap of the two envelopes to keep
/// the magnitudes small; a non-finite result or one outside both segment
/// envelopes is replaced by the endpoint closest to the other segment.
fn intersection_point(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Coord {
    let mid = overlap_midpoint(p1, p2, q1, q2);
    let (a1, a2, b1, b2) = (p1 - mid, p2 - mid, q1 - mid, q2 - mid);

    // homogeneous line coefficients
    let (px, py, pw) = (a1.y - a2.y, a2.x - a1.x, a1.x * a2.y - a2.x * a1.y);
    let (qx, qy, qw) = (b1.y - b2.y, b2.x - b1.x, b1.x * b2.y - b2.x * b1.y);
    let w = px * qy - qx * py;
    let x = (py * qw - qy * pw) / w;
    let y = (qx * pw - px * qw) / w;

    let candidate = Coord::new(x, y) + mid;
    let in_envelopes = Envelope::of_segment(p1, p2).contains(candidate)
        && Envelope::of_segment(q1, q2).contains(candidate);
    if x.is_finite() && y.is_finite() && in_envelopes {
        candidate
    } else {
        nearest_endpoint(p1, p2, q1, q2)
    }
}

fn overlap_midpoint(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Coord {
    let pe = Envelope::of_segment(p1, p2);
    let qe = Envelope::of_segment(q1, q2);
    let min_x = pe.min.x.max(qe.min.x);
    let max_x = pe.max.x.min(qe.max.x);
    let min_y = pe.min.y.max(qe.min.y);
    let max_y = pe.max.y.min(qe.max.y);
    Coord::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
}

fn nearest_endpoint(p1: Coord, p2: Coord, q1: Coord, q2: Coord) -> Coord {
    let candidates = [
        (p1, distance_point_segment(p1, q1, q2)),
        (p2, distance_point_segment(p2, q1, q2)),
        (q1, distance_point_segment(q1, p1, p2)),
        (q2, distance_point_segment(q2, p1, p2)),
    ];
    let mut best = candidates[0];
    for c in &candidates[1..] {
        if c.1 < best.1 {
            best = *c;
        }
    }
    best.0
}

fn distance_point_segment(p: Coord, a: Coord, b: Coord) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Ordering key of `p` along segment `p0 → p1`.
///
/// Distance along the dominant axis of the segment: `0.0` at `p0`, strictly
/// positive anywhere else, monotone along the segment. Only meaningful for
/// points on the segment.
pub fn edge_distance(p: Coord, p0: Coord, p1: Coord) -> f64 {
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();
    if p == p0 {
        return 0.0;
    }
    if p == p1 {
        return dx.max(dy);
    }
    let pdx = (p.x - p0.x).abs();
    let pdy = (p.y - p0.y).abs();
    let dist = if dx > dy { pdx } else { pdy };
    // off-axis roundoff can make the dominant delta vanish for a distinct point
    if dist == 0.0 {
        pdx.max(pdy)
    } else {
        dist
    }
}
