//! Sign-exact 2D orientation predicate.
//!
//! `orientation_index(p1, p2, q)` returns `1` if `q` lies to the left of the
//! directed line `p1 → p2` (counter-clockwise turn), `-1` if to the right and
//! `0` if collinear. The fast path evaluates the determinant in floating point
//! and accepts its sign when it exceeds a forward error bound; otherwise the
//! determinant is summed exactly as a non-overlapping expansion.

use crate::geom::Coord;

/// Half an ulp of 1.0 (unit roundoff).
const HALF_EPS: f64 = f64::EPSILON * 0.5;
/// Relative error bound of the floating determinant.
const CCW_ERR_BOUND: f64 = (3.0 + 16.0 * HALF_EPS) * HALF_EPS;

#[inline]
fn signum(x: f64) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Orientation of `q` relative to the directed line `p1 → p2`.
pub fn orientation_index(p1: Coord, p2: Coord, q: Coord) -> i32 {
    let det_left = (p1.x - q.x) * (p2.y - q.y);
    let det_right = (p1.y - q.y) * (p2.x - q.x);
    let det = det_left - det_right;

    let det_sum = if det_left > 0.0 {
        if det_right <= 0.0 {
            return signum(det);
        }
        det_left + det_right
    } else if det_left < 0.0 {
        if det_right >= 0.0 {
            return signum(det);
        }
        -det_left - det_right
    } else {
        return signum(det);
    };

    let bound = CCW_ERR_BOUND * det_sum;
    if det >= bound || -det >= bound {
        return signum(det);
    }
    orientation_exact(p1, p2, q)
}

/// Exact sign of the orientation determinant via expansion arithmetic.
///
/// Expands `(p1-q) x (p2-q)` into six products, each split exactly into
/// `hi + lo` with an FMA, and accumulates all twelve terms into a
/// non-overlapping expansion. The most significant non-zero component carries
/// the sign. Exact unless a product overflows or underflows.
fn orientation_exact(p1: Coord, p2: Coord, q: Coord) -> i32 {
    let terms = [
        (p1.x, p2.y),
        (-p1.x, q.y),
        (-q.x, p2.y),
        (-p1.y, p2.x),
        (p1.y, q.x),
        (q.y, p2.x),
    ];
    let mut expansion: Vec<f64> = Vec::with_capacity(16);
    for (a, b) in terms {
        let (hi, lo) = two_product(a, b);
        grow_expansion(&mut expansion, lo);
        grow_expansion(&mut expansion, hi);
    }
    expansion
        .iter()
        .rev()
        .find(|c| **c != 0.0)
        .map_or(0, |c| signum(*c))
}

#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let b_virt = x - a;
    let a_virt = x - b_virt;
    let b_round = b - b_virt;
    let a_round = a - a_virt;
    (x, a_round + b_round)
}

#[inline]
fn two_product(a: f64, b: f64) -> (f64, f64) {
    let x = a * b;
    (x, a.mul_add(b, -x))
}

/// Add `b` to a non-overlapping expansion (increasing magnitude), dropping zeros.
fn grow_expansion(e: &mut Vec<f64>, b: f64) {
    let mut q = b;
    let mut out = Vec::with_capacity(e.len() + 1);
    for &ei in e.iter() {
        let (sum, err) = two_sum(q, ei);
        if err != 0.0 {
            out.push(err);
        }
        q = sum;
    }
    if q != 0.0 || out.is_empty() {
        out.push(q);
    }
    *e = out;
}
