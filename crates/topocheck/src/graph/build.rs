//! Geometry decomposition into labelled edges and nodes, plus self-noding.

use std::cell::OnceCell;
use std::collections::{BTreeSet, HashMap};

use crate::algorithm::{locate_point, IndexedPointInArea};
use crate::geom::{is_ccw, remove_repeated_points, Coord, CoordKey, Geometry, LineString, Polygon};
use crate::topology::{Label, Location};

use super::edge::Edge;
use super::edge_set;
use super::node::{Node, NodeMap};
use super::segment_intersector::SegmentIntersector;
use super::types::{ComponentId, EdgeId, GraphCfg, NodeId};

/// Topology graph of one geometry argument.
///
/// Built once per validation call; borrows the geometry for `locate`.
#[derive(Debug)]
pub struct GeometryGraph<'a> {
    arg_index: usize,
    parent: &'a Geometry,
    cfg: GraphCfg,
    edges: Vec<Edge>,
    nodes: NodeMap,
    line_edge_map: HashMap<ComponentId, EdgeId>,
    next_component: usize,
    has_too_few_points: bool,
    invalid_point: Option<Coord>,
    // MultiPolygon shells may touch at points; those stay plain boundary nodes
    use_boundary_determination_rule: bool,
    self_noded: BTreeSet<CoordKey>,
    area_locator: OnceCell<IndexedPointInArea>,
}

impl<'a> GeometryGraph<'a> {
    /// Decompose `geom` as argument `arg_index` (0 or 1).
    pub fn new(arg_index: usize, geom: &'a Geometry, cfg: GraphCfg) -> Self {
        debug_assert!(arg_index < 2, "graphs carry two argument slots");
        let mut g = Self {
            arg_index,
            parent: geom,
            cfg,
            edges: Vec::new(),
            nodes: NodeMap::default(),
            line_edge_map: HashMap::new(),
            next_component: 0,
            has_too_few_points: false,
            invalid_point: None,
            use_boundary_determination_rule: true,
            self_noded: BTreeSet::new(),
            area_locator: OnceCell::new(),
        };
        g.add(geom);
        tracing::debug!(
            arg = arg_index,
            edges = g.edges.len(),
            nodes = g.nodes.len(),
            too_few_points = g.has_too_few_points,
            "built geometry graph"
        );
        g
    }

    fn add(&mut self, geom: &Geometry) {
        match geom {
            Geometry::Point(c) => self.add_point(*c),
            Geometry::LineString(l) | Geometry::LinearRing(l) => self.add_line_string(l),
            Geometry::Polygon(p) => self.add_polygon(p),
            Geometry::MultiPoint(pts) => pts.iter().for_each(|c| self.add_point(*c)),
            Geometry::MultiLineString(ls) => ls.iter().for_each(|l| self.add_line_string(l)),
            Geometry::MultiPolygon(ps) => {
                self.use_boundary_determination_rule = false;
                ps.iter().for_each(|p| self.add_polygon(p));
            }
            Geometry::GeometryCollection(gs) => gs.iter().for_each(|g| self.add(g)),
        }
    }

    fn add_point(&mut self, c: Coord) {
        self.nodes.insert_point(self.arg_index, c, Location::Interior);
    }

    fn add_polygon(&mut self, poly: &Polygon) {
        if poly.is_empty() {
            return;
        }
        self.add_polygon_ring(&poly.exterior, Location::Exterior, Location::Interior);
        for hole in &poly.interiors {
            // holes are mirrored: interior on the left of a clockwise hole
            self.add_polygon_ring(hole, Location::Interior, Location::Exterior);
        }
    }

    /// `cw_left` / `cw_right`: side locations if the ring runs clockwise.
    fn add_polygon_ring(&mut self, ring: &LineString, cw_left: Location, cw_right: Location) {
        let component = self.next_component_id();
        if ring.is_empty() {
            return;
        }
        let coords = remove_repeated_points(&ring.coords);
        if coords.len() < 4 {
            self.flag_too_few_points(coords[0], component);
            return;
        }
        let (left, right) = if is_ccw(&coords) {
            (cw_right, cw_left)
        } else {
            (cw_left, cw_right)
        };
        let start = coords[0];
        let label = Label::area(self.arg_index, Location::Boundary, left, right);
        let id = self.push_edge(coords, label, component);
        let node = self
            .nodes
            .insert_point(self.arg_index, start, Location::Boundary);
        self.edges[id.0].nodes = [node, node];
    }

    fn add_line_string(&mut self, line: &LineString) {
        let component = self.next_component_id();
        if line.is_empty() {
            return;
        }
        let coords = remove_repeated_points(&line.coords);
        if coords.len() < 2 {
            self.flag_too_few_points(coords[0], component);
            return;
        }
        let (first, last) = (coords[0], coords[coords.len() - 1]);
        let label = Label::on(self.arg_index, Location::Interior);
        let id = self.push_edge(coords, label, component);
        // a closed line touches its start node twice
        let rule = self.cfg.boundary_rule;
        let n0 = self.nodes.insert_boundary_point(self.arg_index, first, rule);
        let n1 = self.nodes.insert_boundary_point(self.arg_index, last, rule);
        self.edges[id.0].nodes = [n0, n1];
    }

    fn next_component_id(&mut self) -> ComponentId {
        let id = ComponentId(self.next_component);
        self.next_component += 1;
        id
    }

    fn flag_too_few_points(&mut self, at: Coord, component: ComponentId) {
        tracing::debug!(?component, x = at.x, y = at.y, "skipping component with too few points");
        self.has_too_few_points = true;
        if self.invalid_point.is_none() {
            self.invalid_point = Some(at);
        }
    }

    fn push_edge(&mut self, coords: Vec<Coord>, label: Label, component: ComponentId) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(coords, label, component));
        self.line_edge_map.insert(component, id);
        id
    }

    /// Intersect the graph's edges with each other and turn every intersection
    /// into a node.
    ///
    /// Ring-only geometries skip pairs inside one ring unless
    /// `compute_ring_self_nodes` is set. Calling this again adds nothing new.
    pub fn compute_self_nodes(&mut self, compute_ring_self_nodes: bool) -> SegmentIntersector {
        let mut si = SegmentIntersector::new(true, false);
        let is_rings = matches!(
            self.parent,
            Geometry::LinearRing(_) | Geometry::Polygon(_) | Geometry::MultiPolygon(_)
        );
        let compute_all_segments = compute_ring_self_nodes || !is_rings;
        edge_set::compute_self(&mut self.edges, &mut si, compute_all_segments, self.cfg.strategy);
        self.add_self_intersection_nodes();
        tracing::debug!(
            arg = self.arg_index,
            tests = si.num_tests(),
            proper = si.proper_intersections().len(),
            nodes = self.nodes.len(),
            "self-noded"
        );
        si
    }

    fn add_self_intersection_nodes(&mut self) {
        let arg = self.arg_index;
        let rule = self.cfg.boundary_rule;
        let use_rule = self.use_boundary_determination_rule;
        let Self {
            edges,
            nodes,
            self_noded,
            ..
        } = self;
        for edge in edges.iter() {
            let loc = edge.label.location(arg);
            for ei in &edge.intersections {
                // a boundary node is never demoted by a self-intersection
                if nodes.is_boundary(arg, ei.coord) {
                    continue;
                }
                if loc == Location::Boundary && use_rule {
                    if self_noded.insert(CoordKey::new(ei.coord)) {
                        nodes.insert_boundary_point(arg, ei.coord, rule);
                    }
                } else {
                    nodes.insert_point(arg, ei.coord, loc);
                }
            }
        }
    }

    /// Intersect this graph's edges with `other`'s. Both graphs' boundary
    /// nodes count as known nodes; participating edges lose `is_isolated`.
    pub fn compute_edge_intersections(
        &mut self,
        other: &mut GeometryGraph<'_>,
        include_proper: bool,
    ) -> SegmentIntersector {
        let known: Vec<Coord> = self
            .boundary_nodes()
            .chain(other.boundary_nodes())
            .collect();
        let mut si = SegmentIntersector::new(include_proper, true).with_boundary_nodes(known);
        edge_set::compute_between(&mut self.edges, &mut other.edges, &mut si, self.cfg.strategy);
        tracing::debug!(
            tests = si.num_tests(),
            hit = si.has_intersection(),
            "intersected graphs"
        );
        si
    }

    /// Location of `p` relative to the parent geometry.
    pub fn locate(&self, p: Coord) -> Location {
        if self.parent.is_polygonal()
            && self.parent.num_rings() >= self.cfg.indexed_locate_min_rings
        {
            return self
                .area_locator
                .get_or_init(|| IndexedPointInArea::new(self.parent))
                .locate(p);
        }
        locate_point(p, self.parent, self.cfg.boundary_rule)
    }

    /// The R-tree locator has been built (by an earlier `locate`).
    #[inline]
    pub fn has_area_index(&self) -> bool {
        self.area_locator.get().is_some()
    }

    /// Edge built from linear component `component`, if it was not skipped.
    pub fn find_edge(&self, component: ComponentId) -> Option<&Edge> {
        self.line_edge_map.get(&component).map(|id| &self.edges[id.0])
    }

    /// Coordinates of nodes labelled Boundary, in coordinate order.
    pub fn boundary_nodes(&self) -> impl Iterator<Item = Coord> + '_ {
        self.nodes
            .iter()
            .filter(move |(_, n)| n.label().location(self.arg_index) == Location::Boundary)
            .map(|(_, n)| n.coord())
    }

    pub fn node_at(&self, coord: Coord) -> Option<&Node> {
        self.nodes.find(coord).map(|id| self.nodes.get(id))
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id)
    }
    #[inline]
    pub fn arg_index(&self) -> usize {
        self.arg_index
    }
    #[inline]
    pub fn geometry(&self) -> &'a Geometry {
        self.parent
    }
    #[inline]
    pub fn cfg(&self) -> GraphCfg {
        self.cfg
    }
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }
    #[inline]
    pub fn nodes(&self) -> &NodeMap {
        &self.nodes
    }
    /// Some ring or line had too few distinct points and was skipped.
    #[inline]
    pub fn has_too_few_points(&self) -> bool {
        self.has_too_few_points
    }
    /// First vertex of the first skipped component.
    #[inline]
    pub fn invalid_point(&self) -> Option<Coord> {
        self.invalid_point
    }
    /// Linear components visited, skipped ones included.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.next_component
    }
}
