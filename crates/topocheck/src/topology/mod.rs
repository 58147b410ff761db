//! Topological vocabulary: locations, labels and the boundary node rule.
//!
//! - `Location` / `Position`: where a point sits relative to one geometry
//!   argument, and which side of an edge a location refers to.
//! - `Label`: per-argument (`0`, `1`) `TopologyLocation`s. A pure value type;
//!   insertion sites combine labels with `Label::merge`.
//! - `BoundaryNodeRule`: maps the number of boundary occurrences at a node to
//!   its location.

mod boundary_rule;
mod label;

pub use boundary_rule::BoundaryNodeRule;
pub use label::{Label, Location, Position, TopologyLocation};

#[cfg(test)]
mod tests;
