use super::Location;

/// Policy deciding whether a point touched by `count` linear endpoints lies
/// on the boundary.
///
/// Chosen once per validation call (`GraphCfg::boundary_rule`) and applied at
/// every boundary-candidate insertion of that graph build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryNodeRule {
    /// Odd count ⇒ Boundary, even ⇒ Interior (OGC SFS rule).
    #[default]
    Mod2,
    /// Exactly one ⇒ Boundary; shared endpoints are dropped (Exterior).
    AtMostOne,
    /// Any endpoint ⇒ Boundary.
    EndPoint,
    /// Only endpoints shared by two or more components ⇒ Boundary.
    Multivalent,
}

impl BoundaryNodeRule {
    /// Location of a node with `count` boundary occurrences (0 ⇒ Exterior).
    pub fn location(self, count: usize) -> Location {
        if count == 0 {
            return Location::Exterior;
        }
        match self {
            BoundaryNodeRule::Mod2 if count % 2 == 1 => Location::Boundary,
            BoundaryNodeRule::Mod2 => Location::Interior,
            BoundaryNodeRule::AtMostOne if count == 1 => Location::Boundary,
            BoundaryNodeRule::AtMostOne => Location::Exterior,
            BoundaryNodeRule::EndPoint => Location::Boundary,
            BoundaryNodeRule::Multivalent if count > 1 => Location::Boundary,
            BoundaryNodeRule::Multivalent => Location::Interior,
        }
    }

    #[inline]
    pub fn is_in_boundary(self, count: usize) -> bool {
        self.location(count) == Location::Boundary
    }
}
