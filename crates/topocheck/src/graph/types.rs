//! Identifiers and build configuration for the topology graph.

use crate::topology::BoundaryNodeRule;

use super::edge_set::EdgeSetStrategy;

/// Index of an edge in `GeometryGraph::edges()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);
/// Index of a node in its `NodeMap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);
/// Linear component (ring or line) of the source geometry, numbered in
/// traversal order: polygon shell, then its holes; members of multi kinds
/// and collections in sequence. Skipped components keep their number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub usize);

/// Graph build configuration (every tunable is passed explicitly).
#[derive(Clone, Copy, Debug)]
pub struct GraphCfg {
    /// Boundary determination for linear endpoints and boundary self-nodes.
    pub boundary_rule: BoundaryNodeRule,
    /// Candidate segment-pair enumeration.
    pub strategy: EdgeSetStrategy,
    /// Polygonal geometries with at least this many rings locate points
    /// through a cached R-tree instead of scanning every ring.
    pub indexed_locate_min_rings: usize,
}

impl Default for GraphCfg {
    fn default() -> Self {
        Self {
            boundary_rule: BoundaryNodeRule::Mod2,
            strategy: EdgeSetStrategy::Sweep,
            indexed_locate_min_rings: 50,
        }
    }
}
