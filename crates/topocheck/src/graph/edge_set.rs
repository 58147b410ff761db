//! Candidate segment-pair enumeration over one or two edge sets.
//!
//! Both strategies are exhaustive (every pair of segments whose envelopes
//! meet is tested exactly once) and deterministic (fixed visiting order for
//! identical input).
//! - `Simple`: all edge pairs, envelope-culled per edge, then all segment pairs.
//! - `Sweep`: sort-and-sweep over segment envelopes by `min.x`; a pair is
//!   tested when the later segment starts before the earlier one ends.

use std::cmp::Ordering;

use crate::geom::Envelope;

use super::edge::Edge;
use super::segment_intersector::SegmentIntersector;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeSetStrategy {
    Simple,
    #[default]
    Sweep,
}

/// Intersect the edges of one set with each other.
///
/// `compute_all_segments = false` skips pairs taken from the same edge.
pub fn compute_self(
    edges: &mut [Edge],
    si: &mut SegmentIntersector,
    compute_all_segments: bool,
    strategy: EdgeSetStrategy,
) {
    match strategy {
        EdgeSetStrategy::Simple => simple_self(edges, si, compute_all_segments),
        EdgeSetStrategy::Sweep => {
            let items = sweep_items(edges, 0);
            sweep(&items, |a, b| {
                if a.edge == b.edge && !compute_all_segments {
                    return;
                }
                si.add_intersections(edges, a.edge, a.seg, b.edge, b.seg);
            });
        }
    }
}

/// Intersect every edge of `edges0` with every edge of `edges1`.
pub fn compute_between(
    edges0: &mut [Edge],
    edges1: &mut [Edge],
    si: &mut SegmentIntersector,
    strategy: EdgeSetStrategy,
) {
    match strategy {
        EdgeSetStrategy::Simple => {
            for i in 0..edges0.len() {
                for j in 0..edges1.len() {
                    if !edges0[i].env.intersects(&edges1[j].env) {
                        continue;
                    }
                    for s0 in 0..edges0[i].num_points() - 1 {
                        for s1 in 0..edges1[j].num_points() - 1 {
                            si.add_intersections_between(edges0, i, s0, edges1, j, s1);
                        }
                    }
                }
            }
        }
        EdgeSetStrategy::Sweep => {
            let mut items = sweep_items(edges0, 0);
            items.extend(sweep_items(edges1, 1));
            sweep(&items, |a, b| {
                if a.set == b.set {
                    return;
                }
                let (a, b) = if a.set == 0 { (a, b) } else { (b, a) };
                si.add_intersections_between(edges0, a.edge, a.seg, edges1, b.edge, b.seg);
            });
        }
    }
}

fn simple_self(edges: &mut [Edge], si: &mut SegmentIntersector, compute_all_segments: bool) {
    for i in 0..edges.len() {
        for j in i..edges.len() {
            if i == j && !compute_all_segments {
                continue;
            }
            if !edges[i].env.intersects(&edges[j].env) {
                continue;
            }
            let n0 = edges[i].num_points() - 1;
            let n1 = edges[j].num_points() - 1;
            for s0 in 0..n0 {
                // unordered pairs inside one edge
                let start = if i == j { s0 + 1 } else { 0 };
                for s1 in start..n1 {
                    si.add_intersections(edges, i, s0, j, s1);
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct SweepItem {
    set: u8,
    edge: usize,
    seg: usize,
    env: Envelope,
}

fn sweep_items(edges: &[Edge], set: u8) -> Vec<SweepItem> {
    let mut items = Vec::new();
    for (edge, e) in edges.iter().enumerate() {
        for seg in 0..e.num_points() - 1 {
            let (p, q) = e.segment(seg);
            items.push(SweepItem {
                set,
                edge,
                seg,
                env: Envelope::of_segment(p, q),
            });
        }
    }
    items
}

fn sweep(items: &[SweepItem], mut visit: impl FnMut(&SweepItem, &SweepItem)) {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        let (ia, ib) = (&items[a], &items[b]);
        match ia.env.min.x.total_cmp(&ib.env.min.x) {
            Ordering::Equal => (ia.set, ia.edge, ia.seg).cmp(&(ib.set, ib.edge, ib.seg)),
            o => o,
        }
    });
    for (k, &a) in order.iter().enumerate() {
        let ia = &items[a];
        for &b in &order[k + 1..] {
            let ib = &items[b];
            if ib.env.min.x > ia.env.max.x {
                break;
            }
            if ib.env.min.y > ia.env.max.y || ib.env.max.y < ia.env.min.y {
                continue;
            }
            // lower (set, edge, seg) first, matching the simple strategy
            if (ia.set, ia.edge, ia.seg) <= (ib.set, ib.edge, ib.seg) {
                visit(ia, ib);
            } else {
                visit(ib, ia);
            }
        }
    }
}
