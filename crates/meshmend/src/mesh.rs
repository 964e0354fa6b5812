use nalgebra::Point3;

use crate::topology::Triangle;

/// An indexed triangle soup: the `(V, T)` pair the whole pipeline operates
/// on. Vertices have no identity beyond their position in `vertices`;
/// triangles reference them by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Point3<f64>>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(vertices: Vec<Point3<f64>>, triangles: Vec<Triangle>) -> Self {
        Self { vertices, triangles }
    }

    /// Build a mesh from flat coordinate/index slices, the way meshes
    /// typically arrive off the wire.
    pub fn from_flat(vertices: &[f64], triangles: &[usize]) -> Self {
        let vertices = vertices
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        let triangles = triangles
            .chunks_exact(3)
            .map(|c| (c[0], c[1], c[2]))
            .collect();
        Self { vertices, triangles }
    }
}

/// One named mesh in a batch submitted to [`crate::driver::repair_all`].
#[derive(Debug, Clone)]
pub struct Object {
    pub id: String,
    pub mesh: Mesh,
}

/// The repaired counterpart of an [`Object`], with its report and diagnosis.
#[derive(Debug, Clone)]
pub struct RepairedObject {
    pub id: String,
    pub mesh: Mesh,
    pub report: crate::report::Report,
    pub diagnosis: crate::diagnosis::Diagnosis,
}
