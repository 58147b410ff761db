//! Validity predicates built on the topology graph.
//!
//! - `simple`: OGC simplicity of linear geometries and point sets.
//! - `consistent_area`: ring arrangements whose node stars carry consistent
//!   side labels and no duplicated rings.
//!
//! Both entry points take a `GraphCfg` variant (`*_with`) so the boundary
//! rule and enumeration strategy stay explicit per call.

mod consistent_area;
mod simple;

pub use consistent_area::{is_consistent_area, is_consistent_area_with, AreaConsistency, ConsistentAreaTester};
pub use simple::{is_simple, is_simple_with, SimpleResult};
