//! Iterative non-manifold edge resolution: repeatedly delete excess
//! triangles on any edge incident to more than two faces.

use ahash::AHashSet;

use crate::config::RepairConfig;
use crate::topology::{edge_incidence, Index, Triangle};

/// Resolve non-manifold edges by repeated deletion passes. Returns the
/// resolved triangle list and the cumulative count of deleted triangles.
///
/// "First two" incident triangles (kept) are the two with the lowest index
/// in the current array — this makes the resolver a pure function of input
/// ordering. Iterates until no edge has incidence >2 or
/// `config.nm_iteration_cap` passes have run; the cap only guards against a
/// theoretical non-terminating implementation bug, since deleting a
/// triangle cannot create new non-manifoldness.
pub fn resolve_non_manifold(triangles: &[Triangle], config: &RepairConfig) -> (Vec<Triangle>, usize) {
    let mut current = triangles.to_vec();
    let mut fixed = 0usize;

    for _ in 0..config.nm_iteration_cap {
        let incidence = edge_incidence(&current);
        let mut to_delete: AHashSet<Index> = AHashSet::default();

        for tris in incidence.values() {
            if tris.len() > 2 {
                for &ti in &tris[2..] {
                    to_delete.insert(ti);
                }
            }
        }

        if to_delete.is_empty() {
            break;
        }

        fixed += to_delete.len();
        current = current
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !to_delete.contains(i))
            .map(|(_, t)| t)
            .collect();
    }

    (current, fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fin_edge_drops_last_triangle() {
        let triangles = vec![(0, 1, 2), (0, 1, 3), (0, 1, 4)];
        let config = RepairConfig::default();
        let (resolved, fixed) = resolve_non_manifold(&triangles, &config);
        assert_eq!(fixed, 1);
        assert_eq!(resolved, vec![(0, 1, 2), (0, 1, 3)]);
    }

    #[test]
    fn manifold_input_is_unchanged() {
        let triangles: Vec<Triangle> = vec![(0, 1, 2), (0, 1, 3), (1, 2, 3), (0, 2, 3)];
        let config = RepairConfig::default();
        let (resolved, fixed) = resolve_non_manifold(&triangles, &config);
        assert_eq!(fixed, 0);
        assert_eq!(resolved, triangles);
    }

    #[test]
    fn cascading_deletions_converge_without_hitting_cap() {
        // Two fins sharing no triangles: each should lose exactly one face.
        let triangles = vec![(0, 1, 2), (0, 1, 3), (0, 1, 4), (5, 6, 7), (5, 6, 8), (5, 6, 9)];
        let config = RepairConfig::default();
        let (resolved, fixed) = resolve_non_manifold(&triangles, &config);
        assert_eq!(fixed, 2);
        assert_eq!(resolved.len(), 4);
    }
}
