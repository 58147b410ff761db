//! Robust primitives: orientation, segment intersection, point location.
//!
//! Purpose
//! - `orientation`: sign-exact orientation of three points (floating filter
//!   with an exact expansion fallback).
//! - `intersector`: classify a pair of segments as none / point / collinear
//!   overlap, flagging proper crossings.
//! - `locate`: ray-crossing point location for rings, polygons and the other
//!   geometry kinds; `indexed` adds an R-tree backed variant for large areas.
//!
//! Why exact signs
//! - A wrong orientation sign silently corrupts the graph (missed or phantom
//!   nodes) instead of failing loudly, so every topological decision in this
//!   crate goes through `orientation_index`.

pub mod indexed;
pub mod intersector;
pub mod locate;
pub mod orientation;

pub use indexed::IndexedPointInArea;
pub use intersector::{classify, edge_distance, IntersectionRecord};
pub use locate::{locate_in_polygon, locate_in_ring, locate_point, RayCrossingCounter};
pub use orientation::orientation_index;
