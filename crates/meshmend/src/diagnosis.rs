//! Topological health measurement. `diagnose` is pure and performs no
//! mutation; internally it reuses the teacher's lazy-cache pattern
//! (`InnerCache` + `#[cache_access]`) so that a caller who asks for several
//! stats off the same snapshot only pays for each underlying computation
//! once.

use std::sync::RwLock;

use meshmend_macro::cache_access;
use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;
use crate::topology::{boundary_half_edges, edge_incidence, HalfEdge};

#[derive(Default, Debug, Clone)]
pub struct InnerCache {
    boundary: Option<Vec<HalfEdge>>,
    non_manifold_count: Option<usize>,
}

/// A read-only view over a [`Mesh`] snapshot, used to compute [`Diagnosis`]
/// without recomputing shared incidence data twice.
#[derive(Debug)]
pub struct MeshStats<'m> {
    mesh: &'m Mesh,
    _cache: RwLock<InnerCache>,
}

impl<'m> MeshStats<'m> {
    pub fn new(mesh: &'m Mesh) -> Self {
        MeshStats { mesh, _cache: RwLock::new(InnerCache::default()) }
    }

    #[cache_access]
    pub fn boundary(&self) -> Vec<HalfEdge> {
        boundary_half_edges(&self.mesh.triangles)
    }

    #[cache_access]
    pub fn non_manifold_count(&self) -> usize {
        edge_incidence(&self.mesh.triangles)
            .values()
            .filter(|tris| tris.len() > 2)
            .count()
    }
}

/// Topological health of a `(V, T)` snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub boundary_edge_count: usize,
    pub non_manifold_edge_count: usize,
    pub is_watertight: bool,
}

/// Measure a mesh's topological health. Pure: does not mutate `mesh`.
pub fn diagnose(mesh: &Mesh) -> Diagnosis {
    let stats = MeshStats::new(mesh);
    let boundary_edge_count = stats.boundary().len();
    let non_manifold_edge_count = stats.non_manifold_count();

    Diagnosis {
        vertex_count: mesh.vertices.len(),
        triangle_count: mesh.triangles.len(),
        boundary_edge_count,
        non_manifold_edge_count,
        is_watertight: boundary_edge_count == 0 && non_manifold_edge_count == 0,
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Point3;

    use super::*;

    fn tetrahedron() -> Mesh {
        Mesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            vec![(0, 1, 2), (0, 1, 3), (1, 2, 3), (0, 2, 3)],
        )
    }

    #[test]
    fn tetrahedron_is_watertight() {
        let d = diagnose(&tetrahedron());
        assert_eq!(d.boundary_edge_count, 0);
        assert_eq!(d.non_manifold_edge_count, 0);
        assert!(d.is_watertight);
    }

    #[test]
    fn single_triangle_has_three_boundary_edges() {
        let mesh = Mesh::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
            vec![(0, 1, 2)],
        );
        let d = diagnose(&mesh);
        assert_eq!(d.boundary_edge_count, 3);
        assert!(!d.is_watertight);
    }

    #[test]
    fn fin_triangle_reports_non_manifold_edge() {
        let mesh = Mesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, -1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            vec![(0, 1, 2), (0, 1, 3), (0, 1, 4)],
        );
        let d = diagnose(&mesh);
        assert_eq!(d.non_manifold_edge_count, 1);
        assert!(!d.is_watertight);
    }

    #[test]
    fn mesh_stats_caches_boundary_across_calls() {
        let mesh = tetrahedron();
        let stats = MeshStats::new(&mesh);
        assert_eq!(stats.boundary(), stats.boundary());
    }

    #[test]
    fn mesh_stats_caches_non_manifold_count_across_calls() {
        let mesh = tetrahedron();
        let stats = MeshStats::new(&mesh);
        assert_eq!(stats.non_manifold_count(), stats.non_manifold_count());
    }
}
