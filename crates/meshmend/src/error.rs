//! Error types for the system boundary. The repair core itself never
//! returns `Result` from `repair_object`/`diagnose`/`repair_mesh` — per the
//! error handling design, there is no fatal error intrinsic to repair. This
//! type exists for the ingest adapters in [`crate::adapters`], which sit at
//! the actual boundary where malformed input can arrive.

use thiserror::Error;

/// Something wrong with mesh data on its way in, surfaced by an ingest
/// adapter before the core ever sees it.
#[derive(Debug, Error)]
pub enum MeshIngestError {
    #[error("vertex line has wrong arity: expected 3 coordinates, got {found}")]
    VertexArity { found: usize },

    #[error("face line has wrong arity: expected 3 indices, got {found}")]
    FaceArity { found: usize },

    #[error("non-finite coordinate in vertex {index}: {value}")]
    NonFiniteCoordinate { index: usize, value: f64 },

    #[error("face {face} references vertex index {index}, out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("failed to parse numeric field {field:?}: {source}")]
    Parse {
        field: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("failed to parse index field {field:?}: {source}")]
    ParseIndex {
        field: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("i/o error reading mesh data: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input while reading {what}")]
    Truncated { what: &'static str },
}
