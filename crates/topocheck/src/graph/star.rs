//! Node stars: edges split at their intersections into directed ends,
//! grouped by direction and ordered counter-clockwise around each node.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::algorithm::orientation_index;
use crate::geom::{Coord, CoordKey, LineSegment};
use crate::topology::{BoundaryNodeRule, Label, Location, Position};

use super::build::GeometryGraph;
use super::edge::{Edge, EdgeIntersection, EdgeIntersectionList};
use super::quadrant::Quadrant;
use super::types::EdgeId;

/// Directed piece of an edge leaving node `p0` towards `p1`.
#[derive(Clone, Copy, Debug)]
pub struct EdgeEnd {
    edge: EdgeId,
    p0: Coord,
    p1: Coord,
    label: Label,
    quadrant: Quadrant,
    dx: f64,
    dy: f64,
}

impl EdgeEnd {
    /// `None` for a zero-length direction.
    pub fn new(edge: EdgeId, p0: Coord, p1: Coord, label: Label) -> Option<Self> {
        let (dx, dy) = (p1.x - p0.x, p1.y - p0.y);
        let quadrant = Quadrant::of(dx, dy)?;
        Some(Self {
            edge,
            p0,
            p1,
            label,
            quadrant,
            dx,
            dy,
        })
    }

    /// Counter-clockwise angular order from the positive x-axis. `Equal` for
    /// identical or collinear same-quadrant directions.
    pub fn compare_direction(&self, other: &EdgeEnd) -> Ordering {
        if self.dx == other.dx && self.dy == other.dy {
            return Ordering::Equal;
        }
        match self.quadrant.cmp(&other.quadrant) {
            Ordering::Equal => orientation_index(other.p0, other.p1, self.p1).cmp(&0),
            o => o,
        }
    }

    #[inline]
    pub fn edge(&self) -> EdgeId {
        self.edge
    }
    #[inline]
    pub fn p0(&self) -> Coord {
        self.p0
    }
    #[inline]
    pub fn p1(&self) -> Coord {
        self.p1
    }
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }
    #[inline]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }
    #[inline]
    pub fn segment(&self) -> LineSegment {
        LineSegment::new(self.p0, self.p1)
    }
}

/// Edge ends of one node sharing a direction.
#[derive(Clone, Debug)]
pub struct EdgeEndBundle {
    ends: Vec<EdgeEnd>,
    label: Label,
}

impl EdgeEndBundle {
    fn new(end: EdgeEnd) -> Self {
        Self {
            ends: vec![end],
            label: Label::default(),
        }
    }

    #[inline]
    pub fn ends(&self) -> &[EdgeEnd] {
        &self.ends
    }
    #[inline]
    pub fn first(&self) -> &EdgeEnd {
        &self.ends[0]
    }
    /// Combined label; meaningful after the star's labels were computed.
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }

    fn compute_label(&mut self, rule: BoundaryNodeRule) {
        let is_area = self.ends.iter().any(|e| e.label.is_area());
        let mut label = Label::default();
        for arg in 0..2 {
            label.set_location(arg, self.location_on(arg, rule));
            if is_area {
                for pos in [Position::Left, Position::Right] {
                    label.set_side(arg, pos, self.location_side(arg, pos));
                }
            }
        }
        self.label = label;
    }

    /// Boundary occurrences go through `rule`; otherwise any Interior end wins.
    fn location_on(&self, arg: usize, rule: BoundaryNodeRule) -> Location {
        let mut boundary_count = 0usize;
        let mut found_interior = false;
        for e in &self.ends {
            match e.label.location(arg) {
                Location::Boundary => boundary_count += 1,
                Location::Interior => found_interior = true,
                _ => {}
            }
        }
        if boundary_count > 0 {
            if rule.is_in_boundary(boundary_count) {
                Location::Boundary
            } else {
                Location::Interior
            }
        } else if found_interior {
            Location::Interior
        } else {
            Location::None
        }
    }

    /// Interior on any area end wins, then Exterior.
    fn location_side(&self, arg: usize, pos: Position) -> Location {
        let mut loc = Location::None;
        for e in self.ends.iter().filter(|e| e.label.is_area()) {
            match e.label.side(arg, pos) {
                Location::Interior => return Location::Interior,
                Location::Exterior => loc = Location::Exterior,
                _ => {}
            }
        }
        loc
    }
}

/// A node with its edge-end bundles in counter-clockwise order.
#[derive(Clone, Debug)]
pub struct StarNode {
    coord: Coord,
    label: Label,
    bundles: Vec<EdgeEndBundle>,
}

impl StarNode {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            label: Label::default(),
            bundles: Vec::new(),
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }
    #[inline]
    pub fn bundles(&self) -> &[EdgeEndBundle] {
        &self.bundles
    }
    /// Number of edge ends incident to the node.
    pub fn degree(&self) -> usize {
        self.bundles.iter().map(|b| b.ends.len()).sum()
    }

    fn insert(&mut self, end: EdgeEnd) {
        match self
            .bundles
            .binary_search_by(|b| b.first().compare_direction(&end))
        {
            Ok(i) => self.bundles[i].ends.push(end),
            Err(i) => self.bundles.insert(i, EdgeEndBundle::new(end)),
        }
    }

    fn compute_labels(&mut self, rule: BoundaryNodeRule) {
        self.bundles.iter_mut().for_each(|b| b.compute_label(rule));
    }

    /// Walking counter-clockwise, each area bundle's right side must equal
    /// the left side of the one before it, and no bundle may have the same
    /// location on both sides. Non-area bundles are ignored.
    pub fn is_area_labels_consistent(&self, arg: usize) -> bool {
        let area: Vec<&EdgeEndBundle> = self
            .bundles
            .iter()
            .filter(|b| has_sides(&b.label, arg))
            .collect();
        let Some(last) = area.last() else {
            return true;
        };
        let mut curr = last.label.side(arg, Position::Left);
        for b in area {
            let left = b.label.side(arg, Position::Left);
            let right = b.label.side(arg, Position::Right);
            if left == right || right != curr {
                return false;
            }
            curr = left;
        }
        true
    }
}

fn has_sides(label: &Label, arg: usize) -> bool {
    label.side(arg, Position::Left) != Location::None || label.side(arg, Position::Right) != Location::None
}

/// Node stars of one geometry graph, in coordinate order.
#[derive(Clone, Debug, Default)]
pub struct StarGraph {
    nodes: BTreeMap<CoordKey, StarNode>,
}

impl StarGraph {
    /// Split every edge of `graph` at its intersections and hang the pieces on
    /// their nodes. Bundle labels use the graph's boundary rule.
    pub fn build(graph: &GeometryGraph<'_>) -> Self {
        let arg = graph.arg_index();
        let mut star = StarGraph::default();
        for (_, node) in graph.nodes().iter() {
            star.node_mut(node.coord()).label = node.label();
        }
        for edge in graph.edges() {
            let loc = edge.label().location(arg);
            for ei in edge.intersections() {
                let node = star.node_mut(ei.coord);
                node.label = Label::merge(node.label, Label::on(arg, loc));
            }
        }
        for (i, edge) in graph.edges().iter().enumerate() {
            for end in edge_ends(EdgeId(i), edge) {
                star.node_mut(end.p0).insert(end);
            }
        }
        let rule = graph.cfg().boundary_rule;
        star.nodes.values_mut().for_each(|n| n.compute_labels(rule));
        tracing::trace!(nodes = star.nodes.len(), "built node stars");
        star
    }

    fn node_mut(&mut self, coord: Coord) -> &mut StarNode {
        self.nodes
            .entry(CoordKey::new(coord))
            .or_insert_with(|| StarNode::new(coord))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &StarNode> + '_ {
        self.nodes.values()
    }

    pub fn node_at(&self, coord: Coord) -> Option<&StarNode> {
        self.nodes.get(&CoordKey::new(coord))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Ends on both sides of every intersection of `edge` (endpoints included).
/// The end pointing back along the edge carries the flipped label.
fn edge_ends(id: EdgeId, edge: &Edge) -> Vec<EdgeEnd> {
    let mut list: EdgeIntersectionList = edge.intersections().clone();
    list.add_endpoints(edge.coords());
    let eis: Vec<&EdgeIntersection> = list.iter().collect();
    let mut out = Vec::with_capacity(eis.len() * 2);
    for (k, curr) in eis.iter().enumerate() {
        let prev = k.checked_sub(1).map(|j| eis[j]);
        let next = eis.get(k + 1).copied();
        if let Some(end) = end_for_prev(id, edge, curr, prev) {
            out.push(end);
        }
        if let Some(end) = end_for_next(id, edge, curr, next) {
            out.push(end);
        }
    }
    out
}

fn end_for_prev(
    id: EdgeId,
    edge: &Edge,
    curr: &EdgeIntersection,
    prev: Option<&EdgeIntersection>,
) -> Option<EdgeEnd> {
    let mut i_prev = curr.segment_index;
    if curr.dist == 0.0 {
        // at a vertex: the previous piece ends on the vertex before
        i_prev = i_prev.checked_sub(1)?;
    }
    let mut p_prev = edge.coords()[i_prev];
    if let Some(prev) = prev.filter(|p| p.segment_index >= i_prev) {
        p_prev = prev.coord;
    }
    EdgeEnd::new(id, curr.coord, p_prev, edge.label().flip())
}

fn end_for_next(
    id: EdgeId,
    edge: &Edge,
    curr: &EdgeIntersection,
    next: Option<&EdgeIntersection>,
) -> Option<EdgeEnd> {
    let i_next = curr.segment_index + 1;
    let mut p_next = *edge.coords().get(i_next)?;
    if let Some(next) = next.filter(|n| n.segment_index == curr.segment_index) {
        p_next = next.coord;
    }
    EdgeEnd::new(id, curr.coord, p_next, edge.label())
}
