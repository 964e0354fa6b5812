//! Mesh ingest/emit collaborators. Out of scope as a *specification* — no
//! wire format is specified by the core — but a complete repo benefits
//! from one worked, real implementation of the adapter traits so the
//! pipeline is exercisable end to end. Grounded in the teacher's
//! `exchange` module (`MeshFormat`, the OBJ line-oriented parser), trimmed
//! to positions-and-faces only: no UV/normal/material/color handling.

mod obj;

pub use obj::ObjAdapter;

use crate::error::MeshIngestError;
use crate::mesh::{Mesh, Object, RepairedObject};

/// One ingested batch: the objects to repair, plus an opaque token the
/// driver returns unchanged to the emit adapter.
pub struct IngestedScene {
    pub objects: Vec<Object>,
    pub passthrough: Option<String>,
}

/// Produces `(objects, passthrough)` from a container format.
pub trait MeshIngestAdapter {
    fn ingest(&self, data: &[u8]) -> Result<IngestedScene, MeshIngestError>;
}

/// Accepts repaired objects plus the ingest adapter's passthrough token and
/// emits a container. Bit layout is not part of this crate's specification.
pub trait MeshEmitAdapter {
    fn emit(&self, objects: &[RepairedObject], passthrough: Option<&str>) -> Vec<u8>;
}

/// Validate the numeric input constraints the core assumes but does not
/// itself check: finite coordinates, in-range triangle indices.
pub fn validate(mesh: &Mesh) -> Result<(), MeshIngestError> {
    for (index, v) in mesh.vertices.iter().enumerate() {
        if !v.x.is_finite() || !v.y.is_finite() || !v.z.is_finite() {
            return Err(MeshIngestError::NonFiniteCoordinate {
                index,
                value: [v.x, v.y, v.z].into_iter().find(|c| !c.is_finite()).unwrap_or(f64::NAN),
            });
        }
    }

    for (face, &(a, b, c)) in mesh.triangles.iter().enumerate() {
        for index in [a, b, c] {
            if index >= mesh.vertices.len() {
                return Err(MeshIngestError::IndexOutOfRange { face, index, vertex_count: mesh.vertices.len() });
            }
        }
    }

    Ok(())
}
