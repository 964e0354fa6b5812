//! Deterministic triangle-mesh repair: vertex welding, degenerate/duplicate
//! triangle filtering, non-manifold edge resolution, boundary loop
//! discovery, and centroid-fan hole filling, so that procedurally
//! generated meshes become watertight and safe to slice for fabrication.
//!
//! The pipeline is a pure, single-threaded-per-mesh function of its input
//! ([`driver::repair_object`]); [`driver::repair_all`] applies it across a
//! batch of independent objects in parallel with `rayon`, since each
//! repair shares no mutable state with any other.

pub mod adapters;
pub mod boundary;
pub mod compact;
pub mod config;
pub mod diagnosis;
pub mod driver;
pub mod error;
pub mod fill;
pub mod filter;
pub mod loops;
pub mod mesh;
pub mod nonmanifold;
pub mod progress;
pub mod report;
pub mod topology;
pub mod weld;

pub use config::RepairConfig;
pub use diagnosis::{diagnose, Diagnosis};
pub use driver::{repair_all, repair_all_with_sink, repair_mesh, repair_object, repair_object_with_sink, RepairAllResult};
pub use mesh::{Mesh, Object, RepairedObject};
pub use report::Report;
