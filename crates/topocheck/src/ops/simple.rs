use std::collections::{BTreeMap, BTreeSet};

use crate::geom::{Coord, CoordKey, Geometry};
use crate::graph::{GeometryGraph, GraphCfg};

/// Outcome of `is_simple`. `non_simple_points` is empty iff `is_simple`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimpleResult {
    pub is_simple: bool,
    pub non_simple_points: Vec<Coord>,
}

impl SimpleResult {
    fn simple() -> Self {
        Self {
            is_simple: true,
            non_simple_points: Vec::new(),
        }
    }

    fn non_simple(points: Vec<Coord>) -> Self {
        debug_assert!(!points.is_empty());
        Self {
            is_simple: false,
            non_simple_points: points,
        }
    }
}

/// `is_simple_with` under the default configuration.
pub fn is_simple(geom: &Geometry) -> SimpleResult {
    is_simple_with(geom, GraphCfg::default())
}

/// Simplicity test.
///
/// - Empty geometries are simple.
/// - Linear geometries are simple unless they self-intersect anywhere other
///   than at line endpoints, or a closed line's endpoint is touched by
///   anything else.
/// - A point set is simple iff no coordinate repeats.
/// - Points, rings, areas and collections are simple by definition.
pub fn is_simple_with(geom: &Geometry, cfg: GraphCfg) -> SimpleResult {
    if geom.is_empty() {
        return SimpleResult::simple();
    }
    let res = match geom {
        Geometry::LineString(_) | Geometry::MultiLineString(_) => linear(geom, cfg),
        Geometry::MultiPoint(pts) => multi_point(pts),
        _ => SimpleResult::simple(),
    };
    if !res.is_simple {
        tracing::debug!(points = res.non_simple_points.len(), "geometry is not simple");
    }
    res
}

fn linear(geom: &Geometry, cfg: GraphCfg) -> SimpleResult {
    let mut graph = GeometryGraph::new(0, geom, cfg);
    let si = graph.compute_self_nodes(true);
    if !si.has_intersection() {
        return SimpleResult::simple();
    }
    if si.has_proper_intersection() {
        return SimpleResult::non_simple(si.proper_intersections().to_vec());
    }
    if let Some(p) = non_endpoint_intersection(&graph) {
        return SimpleResult::non_simple(vec![p]);
    }
    if let Some(p) = closed_endpoint_intersection(&graph) {
        return SimpleResult::non_simple(vec![p]);
    }
    SimpleResult::simple()
}

/// First intersection strictly inside some edge.
fn non_endpoint_intersection(graph: &GeometryGraph<'_>) -> Option<Coord> {
    graph.edges().iter().find_map(|e| {
        let max = e.max_segment_index();
        e.intersections()
            .iter()
            .find(|ei| !ei.is_endpoint(max))
            .map(|ei| ei.coord)
    })
}

#[derive(Default)]
struct EndpointInfo {
    is_closed: bool,
    degree: usize,
}

/// First endpoint of a closed edge that is not touched exactly twice.
fn closed_endpoint_intersection(graph: &GeometryGraph<'_>) -> Option<Coord> {
    let mut endpoints: BTreeMap<CoordKey, EndpointInfo> = BTreeMap::new();
    for e in graph.edges() {
        let is_closed = e.is_closed();
        let coords = e.coords();
        for p in [coords[0], coords[coords.len() - 1]] {
            let info = endpoints.entry(CoordKey::new(p)).or_default();
            info.degree += 1;
            info.is_closed |= is_closed;
        }
    }
    endpoints
        .iter()
        .find(|(_, info)| info.is_closed && info.degree != 2)
        .map(|(k, _)| k.coord())
}

/// Repeated coordinates, each reported once in order of first repetition.
fn multi_point(pts: &[Coord]) -> SimpleResult {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    let mut dups = Vec::new();
    for p in pts {
        let key = CoordKey::new(*p);
        if !seen.insert(key) && reported.insert(key) {
            dups.push(*p);
        }
    }
    if dups.is_empty() {
        SimpleResult::simple()
    } else {
        SimpleResult::non_simple(dups)
    }
}
