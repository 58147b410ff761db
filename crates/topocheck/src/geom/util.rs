use super::types::Coord;
use crate::algorithm::orientation::orientation_index;

/// Collapse runs of equal consecutive vertices (exact equality).
pub fn remove_repeated_points(coords: &[Coord]) -> Vec<Coord> {
    let mut out: Vec<Coord> = Vec::with_capacity(coords.len());
    for c in coords {
        if out.last() != Some(c) {
            out.push(*c);
        }
    }
    out
}

/// Counter-clockwise test for a closed ring (first == last).
///
/// Uses the orientation at the highest vertex, so it stays exact for rings
/// with tiny or zero area. Rings with fewer than 3 distinct vertices or a
/// degenerate apex report `false`.
pub fn is_ccw(ring: &[Coord]) -> bool {
    if ring.len() < 4 {
        return false;
    }
    let n = ring.len() - 1;
    let mut hi = 0usize;
    for i in 1..=n {
        if ring[i].y > ring[hi].y {
            hi = i;
        }
    }
    let hi_pt = ring[hi];
    // distinct neighbours of the apex
    let mut prev = hi;
    loop {
        prev = if prev == 0 { n } else { prev - 1 };
        if ring[prev] != hi_pt || prev == hi {
            break;
        }
    }
    let mut next = hi;
    loop {
        next = (next + 1) % n;
        if ring[next] != hi_pt || next == hi {
            break;
        }
    }
    let (p, q) = (ring[prev], ring[next]);
    if p == hi_pt || q == hi_pt || p == q {
        return false;
    }
    match orientation_index(p, hi_pt, q) {
        // flat apex: the ring runs right-to-left along the top
        0 => p.x > q.x,
        o => o > 0,
    }
}
