//! Boundary extraction: thin driver-facing wrapper over
//! [`crate::topology::boundary_half_edges`].

use crate::topology::{HalfEdge, Triangle};

/// The directed boundary half-edge set for the current triangle list.
pub fn extract_boundary(triangles: &[Triangle]) -> Vec<HalfEdge> {
    crate::topology::boundary_half_edges(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_triangle_has_full_boundary() {
        let triangles: Vec<Triangle> = vec![(0, 1, 2)];
        assert_eq!(extract_boundary(&triangles).len(), 3);
    }

    #[test]
    fn watertight_mesh_has_no_boundary() {
        let triangles: Vec<Triangle> = vec![(0, 1, 2), (0, 1, 3), (1, 2, 3), (0, 2, 3)];
        assert!(extract_boundary(&triangles).is_empty());
    }
}
