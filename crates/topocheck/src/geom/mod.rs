//! Planar geometry model consumed by the topology graph.
//!
//! Purpose
//! - Provide the small coordinate/geometry vocabulary the graph builder and the
//!   validity ops work on: coordinates, line strings, polygons and the multi
//!   kinds, as one exhaustively matched enum.
//! - Keep coordinate comparison exact. Nodes are identified by bitwise-equal
//!   coordinates (`CoordKey`), never by tolerance.
//!
//! Conventions
//! - Rings are closed (first == last). Orientation is decided with the exact
//!   orientation predicate (`algorithm::orientation`).
//! - Repeated consecutive vertices are allowed in input and collapsed by the
//!   graph builder.

mod types;
mod util;

pub use types::{Coord, CoordKey, Envelope, Geometry, LineSegment, LineString, Polygon};
pub use util::{is_ccw, remove_repeated_points};
