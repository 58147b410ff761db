//! Coordinate-keyed node registry.

use std::collections::BTreeMap;

use crate::geom::{Coord, CoordKey};
use crate::topology::{BoundaryNodeRule, Label, Location};

use super::types::NodeId;

/// Graph node. One per distinct coordinate.
#[derive(Clone, Debug)]
pub struct Node {
    coord: Coord,
    label: Label,
    boundary_count: [usize; 2],
}

impl Node {
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }
    /// Boundary occurrences inserted for argument `arg` so far.
    #[inline]
    pub fn boundary_count(&self, arg: usize) -> usize {
        self.boundary_count[arg]
    }
}

/// Nodes indexed by exact coordinate; iteration is in coordinate order.
#[derive(Clone, Debug, Default)]
pub struct NodeMap {
    index: BTreeMap<CoordKey, NodeId>,
    nodes: Vec<Node>,
}

impl NodeMap {
    /// Existing node at `coord`, or a new unlabelled one.
    pub fn add_node(&mut self, coord: Coord) -> NodeId {
        let nodes = &mut self.nodes;
        *self.index.entry(CoordKey::new(coord)).or_insert_with(|| {
            nodes.push(Node {
                coord,
                label: Label::default(),
                boundary_count: [0; 2],
            });
            NodeId(nodes.len() - 1)
        })
    }

    #[inline]
    pub fn find(&self, coord: Coord) -> Option<NodeId> {
        self.index.get(&CoordKey::new(coord)).copied()
    }
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.index.values().map(|id| (*id, &self.nodes[id.0]))
    }

    pub fn is_boundary(&self, arg: usize, coord: Coord) -> bool {
        self.find(coord)
            .is_some_and(|id| self.get(id).label.location(arg) == Location::Boundary)
    }

    /// Insert with a known location; merges into an existing label.
    pub(crate) fn insert_point(&mut self, arg: usize, coord: Coord, loc: Location) -> NodeId {
        let id = self.add_node(coord);
        let node = &mut self.nodes[id.0];
        node.label = Label::merge(node.label, Label::on(arg, loc));
        id
    }

    /// Insert a boundary candidate: bump the touch count and relabel from `rule`.
    pub(crate) fn insert_boundary_point(
        &mut self,
        arg: usize,
        coord: Coord,
        rule: BoundaryNodeRule,
    ) -> NodeId {
        let id = self.add_node(coord);
        let node = &mut self.nodes[id.0];
        node.boundary_count[arg] += 1;
        node.label
            .set_location(arg, rule.location(node.boundary_count[arg]));
        id
    }
}
