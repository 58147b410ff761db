//! Runs both predicates on a handful of classic shapes and prints the verdicts.
//!
//! Purpose
//! - Show the library surface end to end: build geometries, pick a boundary
//!   rule, read `SimpleResult` / `AreaConsistency`.
//!
//! Run: `cargo run -p topocheck --example validate_demo`

use topocheck::prelude::*;

fn ring(pts: &[(f64, f64)]) -> LineString {
    LineString::from_xy(pts)
}

fn main() {
    let square = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
    let bow_tie = ring(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0), (0.0, 0.0)]);
    let shapes = [
        ("square ring", Geometry::LineString(square.clone())),
        ("bow-tie line", Geometry::LineString(bow_tie.clone())),
        (
            "figure eight",
            Geometry::MultiLineString(vec![
                ring(&[(0.0, 0.0), (2.0, 1.0), (2.0, -1.0), (0.0, 0.0)]),
                ring(&[(0.0, 0.0), (-2.0, 1.0), (-2.0, -1.0), (0.0, 0.0)]),
            ]),
        ),
        ("square polygon", Geometry::Polygon(Polygon::new(square.clone(), vec![]))),
        ("bow-tie polygon", Geometry::Polygon(Polygon::new(bow_tie, vec![]))),
        (
            "duplicate rings",
            Geometry::MultiPolygon(vec![
                Polygon::new(square.clone(), vec![]),
                Polygon::new(square, vec![]),
            ]),
        ),
    ];

    for (name, geom) in &shapes {
        let simple = is_simple(geom);
        let area = is_consistent_area(geom);
        println!(
            "{name:>16}: simple={} {:?} | consistent={} {:?} {:?}",
            simple.is_simple,
            simple.non_simple_points,
            area.is_consistent,
            area.invalid_points,
            area.invalid_segments,
        );
    }

    // the boundary rule decides where two joined lines meet
    let joined = Geometry::MultiLineString(vec![
        ring(&[(0.0, 0.0), (1.0, 1.0)]),
        ring(&[(1.0, 1.0), (2.0, 0.0)]),
    ]);
    for rule in [BoundaryNodeRule::Mod2, BoundaryNodeRule::AtMostOne] {
        let cfg = GraphCfg {
            boundary_rule: rule,
            ..GraphCfg::default()
        };
        let g = GeometryGraph::new(0, &joined, cfg);
        println!("{rule:?}: (1,1) is {:?}", g.locate(Coord::new(1.0, 1.0)));
    }
}
