use super::*;
use crate::geom::{Coord, Geometry, LineString, Polygon};
use crate::topology::{BoundaryNodeRule, Location, Position};
use std::cmp::Ordering;

fn c(x: f64, y: f64) -> Coord {
    Coord::new(x, y)
}

fn line(pts: &[(f64, f64)]) -> LineString {
    LineString::from_xy(pts)
}

fn square(x0: f64, y0: f64, side: f64) -> LineString {
    line(&[
        (x0, y0),
        (x0 + side, y0),
        (x0 + side, y0 + side),
        (x0, y0 + side),
        (x0, y0),
    ])
}

fn cfg_with(rule: BoundaryNodeRule, strategy: EdgeSetStrategy) -> GraphCfg {
    GraphCfg {
        boundary_rule: rule,
        strategy,
        ..GraphCfg::default()
    }
}

fn sorted_points(pts: &[Coord]) -> Vec<(f64, f64)> {
    let mut v: Vec<(f64, f64)> = pts.iter().map(|p| (p.x, p.y)).collect();
    v.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    v
}

fn intersection_lists(g: &GeometryGraph<'_>) -> Vec<Vec<(usize, f64, f64, f64)>> {
    g.edges()
        .iter()
        .map(|e| {
            e.intersections()
                .iter()
                .map(|ei| (ei.segment_index, ei.dist, ei.coord.x, ei.coord.y))
                .collect()
        })
        .collect()
}

#[test]
fn polygon_ring_labels_follow_orientation() {
    // counter-clockwise shell: interior on the left
    let ccw = Geometry::Polygon(Polygon::new(square(0.0, 0.0, 10.0), vec![]));
    let g = GeometryGraph::new(0, &ccw, GraphCfg::default());
    assert_eq!(g.edges().len(), 1);
    let label = g.edges()[0].label();
    assert_eq!(label.location(0), Location::Boundary);
    assert_eq!(label.side(0, Position::Left), Location::Interior);
    assert_eq!(label.side(0, Position::Right), Location::Exterior);
    assert!(g.nodes().is_boundary(0, c(0.0, 0.0)));

    // clockwise shell with a clockwise hole
    let mut shell = square(0.0, 0.0, 10.0);
    shell.coords.reverse();
    let mut hole = square(4.0, 4.0, 2.0);
    hole.coords.reverse();
    let cw = Geometry::Polygon(Polygon::new(shell, vec![hole]));
    let g = GeometryGraph::new(0, &cw, GraphCfg::default());
    let shell_label = g.find_edge(ComponentId(0)).expect("shell").label();
    let hole_label = g.find_edge(ComponentId(1)).expect("hole").label();
    assert_eq!(shell_label.side(0, Position::Left), Location::Exterior);
    assert_eq!(shell_label.side(0, Position::Right), Location::Interior);
    assert_eq!(hole_label.side(0, Position::Left), Location::Interior);
    assert_eq!(hole_label.side(0, Position::Right), Location::Exterior);
}

#[test]
fn shared_line_endpoint_depends_on_rule() {
    let geom = Geometry::MultiLineString(vec![
        line(&[(0.0, 0.0), (1.0, 1.0)]),
        line(&[(1.0, 1.0), (2.0, 0.0)]),
    ]);
    let mod2 = GeometryGraph::new(0, &geom, cfg_with(BoundaryNodeRule::Mod2, EdgeSetStrategy::Sweep));
    let at_most_one = GeometryGraph::new(
        0,
        &geom,
        cfg_with(BoundaryNodeRule::AtMostOne, EdgeSetStrategy::Sweep),
    );
    let shared = c(1.0, 1.0);
    let n = mod2.node_at(shared).expect("node");
    assert_eq!(n.boundary_count(0), 2);
    assert_eq!(n.label().location(0), Location::Interior);
    assert_eq!(
        at_most_one.node_at(shared).expect("node").label().location(0),
        Location::Exterior
    );
    // free ends stay Boundary under both
    for g in [&mod2, &at_most_one] {
        assert_eq!(
            g.node_at(c(0.0, 0.0)).expect("node").label().location(0),
            Location::Boundary
        );
    }
    assert_eq!(mod2.boundary_nodes().count(), 2);
    let e = mod2.find_edge(ComponentId(1)).expect("second line");
    assert_eq!(mod2.node(e.nodes()[0]).coord(), shared);
}

#[test]
fn degenerate_components_are_flagged_and_skipped() {
    let geom = Geometry::GeometryCollection(vec![
        Geometry::Polygon(Polygon::new(
            line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 0.0)]),
            vec![],
        )),
        Geometry::LineString(line(&[(3.0, 3.0), (3.0, 3.0)])),
        Geometry::LineString(line(&[(5.0, 5.0), (6.0, 5.0)])),
    ]);
    let g = GeometryGraph::new(0, &geom, GraphCfg::default());
    assert!(g.has_too_few_points());
    assert_eq!(g.invalid_point(), Some(c(0.0, 0.0)));
    assert_eq!(g.component_count(), 3);
    assert!(g.find_edge(ComponentId(0)).is_none());
    assert!(g.find_edge(ComponentId(1)).is_none());
    assert_eq!(g.find_edge(ComponentId(2)).expect("line").num_points(), 2);
    assert_eq!(g.edges().len(), 1);
}

#[test]
fn points_become_interior_nodes() {
    let geom = Geometry::MultiPoint(vec![c(1.0, 1.0), c(2.0, 2.0), c(1.0, 1.0)]);
    let g = GeometryGraph::new(0, &geom, GraphCfg::default());
    assert_eq!(g.nodes().len(), 2);
    assert!(g.edges().is_empty());
    assert_eq!(
        g.node_at(c(2.0, 2.0)).expect("node").label().location(0),
        Location::Interior
    );
}

#[test]
fn ring_self_nodes_only_when_requested() {
    let bow_tie = Geometry::Polygon(Polygon::new(
        line(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0), (0.0, 0.0)]),
        vec![],
    ));
    let mut g = GeometryGraph::new(0, &bow_tie, GraphCfg::default());
    let si = g.compute_self_nodes(false);
    assert!(!si.has_intersection());
    assert_eq!(si.num_tests(), 0);

    let si = g.compute_self_nodes(true);
    assert!(si.has_proper_intersection());
    assert!(si.has_proper_interior_intersection());
    assert_eq!(si.proper_intersections(), &[c(5.0, 5.0)]);
    assert!(g.node_at(c(5.0, 5.0)).is_some());
}

#[test]
fn adjacent_segments_and_closing_pair_are_trivial() {
    let zigzag = Geometry::LineString(line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)]));
    let mut g = GeometryGraph::new(0, &zigzag, GraphCfg::default());
    assert!(!g.compute_self_nodes(true).has_intersection());

    let closed = Geometry::LineString(square(0.0, 0.0, 1.0));
    for strategy in [EdgeSetStrategy::Simple, EdgeSetStrategy::Sweep] {
        let mut g = GeometryGraph::new(0, &closed, cfg_with(BoundaryNodeRule::Mod2, strategy));
        let si = g.compute_self_nodes(true);
        assert!(!si.has_intersection(), "{strategy:?}");
        assert!(g.edges()[0].intersections().is_empty());
    }
}

#[test]
fn self_noding_is_idempotent() {
    let geom = Geometry::MultiLineString(vec![
        line(&[(0.0, 0.0), (10.0, 10.0)]),
        line(&[(0.0, 10.0), (10.0, 0.0)]),
        line(&[(5.0, 0.0), (5.0, 5.0), (8.0, 5.0)]),
    ]);
    let mut g = GeometryGraph::new(0, &geom, GraphCfg::default());
    let first = g.compute_self_nodes(true);
    let nodes_after_first: Vec<_> = g
        .nodes()
        .iter()
        .map(|(_, n)| (n.coord(), n.label()))
        .collect();
    let eis_after_first = intersection_lists(&g);

    g.compute_self_nodes(true);
    let nodes_after_second: Vec<_> = g
        .nodes()
        .iter()
        .map(|(_, n)| (n.coord(), n.label()))
        .collect();
    assert_eq!(nodes_after_first, nodes_after_second);
    assert_eq!(eis_after_first, intersection_lists(&g));

    assert!(first.has_proper_intersection());
    // (5,5) is where all three lines meet
    assert_eq!(
        g.node_at(c(5.0, 5.0)).expect("node").label().location(0),
        Location::Interior
    );
    // the diagonal is split at (5,5) on vertex-normalized keys
    let diag = &g.edges()[0];
    assert_eq!(diag.intersections().len(), 1);
    let ei = diag.intersections().iter().next().expect("ei");
    assert_eq!(ei.segment_index, 0);
    assert!(!ei.is_endpoint(diag.max_segment_index()));
}

#[test]
fn intersection_on_next_vertex_is_normalized() {
    // second line touches the first exactly at its middle vertex
    let geom = Geometry::MultiLineString(vec![
        line(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]),
        line(&[(5.0, 0.0), (5.0, 5.0)]),
    ]);
    let mut g = GeometryGraph::new(0, &geom, GraphCfg::default());
    g.compute_self_nodes(true);
    let keys: Vec<(usize, f64)> = g.edges()[0]
        .intersections()
        .iter()
        .map(|ei| (ei.segment_index, ei.dist))
        .collect();
    assert_eq!(keys, vec![(1, 0.0)]);
}

#[test]
fn strategies_agree() {
    let geom = Geometry::MultiLineString(vec![
        line(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]),
        line(&[(0.0, 5.0), (20.0, 5.0)]),
        line(&[(3.0, -1.0), (3.0, 11.0), (17.0, 11.0), (17.0, -1.0)]),
        line(&[(10.0, 10.0), (10.0, 0.0)]),
    ]);
    let mut simple = GeometryGraph::new(0, &geom, cfg_with(BoundaryNodeRule::Mod2, EdgeSetStrategy::Simple));
    let mut sweep = GeometryGraph::new(0, &geom, cfg_with(BoundaryNodeRule::Mod2, EdgeSetStrategy::Sweep));
    let a = simple.compute_self_nodes(true);
    let b = sweep.compute_self_nodes(true);
    assert_eq!(
        sorted_points(a.proper_intersections()),
        sorted_points(b.proper_intersections())
    );
    assert_eq!(intersection_lists(&simple), intersection_lists(&sweep));
    assert!(b.num_tests() <= a.num_tests());
}

#[test]
fn edge_intersections_between_graphs() {
    let area = Geometry::Polygon(Polygon::new(square(0.0, 0.0, 10.0), vec![]));
    let cut = Geometry::LineString(line(&[(-5.0, 5.0), (15.0, 5.0)]));
    let far = Geometry::LineString(line(&[(20.0, 20.0), (30.0, 20.0)]));
    let mut ga = GeometryGraph::new(0, &area, GraphCfg::default());
    let mut gb = GeometryGraph::new(1, &cut, GraphCfg::default());
    let mut gc = GeometryGraph::new(1, &far, GraphCfg::default());

    let si = ga.compute_edge_intersections(&mut gb, true);
    assert!(si.has_proper_interior_intersection());
    assert_eq!(
        sorted_points(si.proper_intersections()),
        vec![(0.0, 5.0), (10.0, 5.0)]
    );
    assert!(!ga.edges()[0].is_isolated());
    assert!(!gb.edges()[0].is_isolated());
    assert_eq!(gb.edges()[0].intersections().len(), 2);

    let si = ga.compute_edge_intersections(&mut gc, true);
    assert!(!si.has_intersection());
    assert!(gc.edges()[0].is_isolated());
}

#[test]
fn locate_builds_index_lazily_for_many_rings() {
    let polys: Vec<Polygon> = (0..4)
        .map(|i| Polygon::new(square(12.0 * f64::from(i), 0.0, 10.0), vec![]))
        .collect();
    let geom = Geometry::MultiPolygon(polys);

    let direct = GeometryGraph::new(0, &geom, GraphCfg::default());
    assert_eq!(direct.locate(c(5.0, 5.0)), Location::Interior);
    assert!(!direct.has_area_index());

    let cfg = GraphCfg {
        indexed_locate_min_rings: 2,
        ..GraphCfg::default()
    };
    let indexed = GeometryGraph::new(0, &geom, cfg);
    assert!(!indexed.has_area_index());
    assert_eq!(indexed.locate(c(5.0, 5.0)), Location::Interior);
    assert_eq!(indexed.locate(c(11.0, 5.0)), Location::Exterior);
    assert_eq!(indexed.locate(c(12.0, 5.0)), Location::Boundary);
    assert!(indexed.has_area_index());
}

#[test]
fn edge_end_direction_order_is_counter_clockwise() {
    let o = c(0.0, 0.0);
    let end = |x: f64, y: f64| EdgeEnd::new(EdgeId(0), o, c(x, y), Default::default()).expect("end");
    let east = end(1.0, 0.0);
    let north_east = end(1.0, 1.0);
    let west = end(-1.0, 0.0);
    let south = end(0.0, -1.0);
    assert_eq!(east.compare_direction(&north_east), Ordering::Less);
    assert_eq!(north_east.compare_direction(&west), Ordering::Less);
    assert_eq!(west.compare_direction(&south), Ordering::Less);
    assert_eq!(south.compare_direction(&east), Ordering::Greater);
    // same direction, different length
    assert_eq!(end(2.0, 2.0).compare_direction(&north_east), Ordering::Equal);
    assert!(EdgeEnd::new(EdgeId(0), o, o, Default::default()).is_none());
}

#[test]
fn star_of_simple_polygon_is_consistent() {
    let geom = Geometry::Polygon(Polygon::new(
        square(0.0, 0.0, 10.0),
        vec![square(2.0, 2.0, 2.0)],
    ));
    let mut g = GeometryGraph::new(0, &geom, GraphCfg::default());
    g.compute_self_nodes(true);
    let star = StarGraph::build(&g);
    assert_eq!(star.len(), 2);
    for node in star.nodes() {
        assert_eq!(node.degree(), 2);
        assert_eq!(node.bundles().len(), 2);
        assert!(node.is_area_labels_consistent(0));
        assert_eq!(node.label().location(0), Location::Boundary);
    }
    let origin = star.node_at(c(0.0, 0.0)).expect("star node");
    // east end first, then north
    assert_eq!(origin.bundles()[0].first().p1(), c(10.0, 0.0));
    assert_eq!(origin.bundles()[1].first().p1(), c(0.0, 10.0));
}

#[test]
fn star_splits_edges_at_crossings() {
    let geom = Geometry::MultiLineString(vec![
        line(&[(0.0, 0.0), (10.0, 10.0)]),
        line(&[(0.0, 10.0), (10.0, 0.0)]),
    ]);
    let mut g = GeometryGraph::new(0, &geom, GraphCfg::default());
    g.compute_self_nodes(true);
    let star = StarGraph::build(&g);
    let mid = star.node_at(c(5.0, 5.0)).expect("crossing node");
    assert_eq!(mid.degree(), 4);
    assert_eq!(mid.bundles().len(), 4);
    for b in mid.bundles() {
        assert_eq!(b.label().location(0), Location::Interior);
    }
    assert_eq!(star.node_at(c(0.0, 0.0)).expect("end").degree(), 1);
}

#[test]
fn identical_rings_share_bundles() {
    let poly = Polygon::new(square(0.0, 0.0, 10.0), vec![]);
    let geom = Geometry::MultiPolygon(vec![poly.clone(), poly]);
    let mut g = GeometryGraph::new(0, &geom, GraphCfg::default());
    g.compute_self_nodes(true);
    let star = StarGraph::build(&g);
    let origin = star.node_at(c(0.0, 0.0)).expect("node");
    assert_eq!(origin.bundles().len(), 2);
    assert!(origin.bundles().iter().all(|b| b.ends().len() == 2));
}
