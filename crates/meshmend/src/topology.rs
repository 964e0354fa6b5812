//! Shared topology primitives: undirected edge keys, directed half-edges,
//! and the incidence maps the other stages are built on top of.
//!
//! Incidence maps are always rebuilt from the current triangle list rather
//! than maintained incrementally — stages change topology wholesale, so
//! incremental maintenance would add complexity without changing the
//! asymptotics.

use ahash::AHashMap;

/// A vertex or triangle index into the mesh's current arrays.
pub type Index = usize;

/// A triangle as an ordered triple of vertex indices. Winding is
/// informational; the pipeline preserves it where convenient but never
/// enforces global consistency.
pub type Triangle = (Index, Index, Index);

/// Canonical (unordered) edge key, used for incidence counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(pub Index, pub Index);

impl EdgeKey {
    pub fn new(a: Index, b: Index) -> Self {
        if a < b { EdgeKey(a, b) } else { EdgeKey(b, a) }
    }
}

/// A directed half-edge, oriented by the triangle winding that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfEdge {
    pub from: Index,
    pub to: Index,
}

impl HalfEdge {
    pub fn new(from: Index, to: Index) -> Self {
        HalfEdge { from, to }
    }

    pub fn undirected(&self) -> EdgeKey {
        EdgeKey::new(self.from, self.to)
    }
}

/// The three directed half-edges of a triangle, in winding order.
pub fn triangle_half_edges(t: &Triangle) -> [HalfEdge; 3] {
    [
        HalfEdge::new(t.0, t.1),
        HalfEdge::new(t.1, t.2),
        HalfEdge::new(t.2, t.0),
    ]
}

/// Map from undirected edge to the indices (into `triangles`) of every
/// triangle that contains it.
pub fn edge_incidence(triangles: &[Triangle]) -> AHashMap<EdgeKey, Vec<Index>> {
    let mut map: AHashMap<EdgeKey, Vec<Index>> = AHashMap::default();
    for (ti, t) in triangles.iter().enumerate() {
        for he in triangle_half_edges(t) {
            map.entry(he.undirected()).or_default().push(ti);
        }
    }
    map
}

/// The directed boundary half-edge set: one directed half-edge per
/// undirected edge that belongs to exactly one triangle, oriented the
/// way that triangle winds it.
///
/// There is no separate orientation flag tracked per edge — for a
/// boundary edge there is exactly one contributing triangle, so whichever
/// direction is last written is also the only one ever written.
///
/// Sorted by `(from, to)` before returning: the scratch map is an
/// `AHashMap`, whose iteration order depends on a per-process random seed,
/// and the loop finder's result depends on the order half-edges are
/// offered to it — sorting keeps the whole pipeline a pure function of its
/// input, independent of hash-seed randomization between runs.
pub fn boundary_half_edges(triangles: &[Triangle]) -> Vec<HalfEdge> {
    let mut counts: AHashMap<EdgeKey, (usize, HalfEdge)> = AHashMap::default();
    for t in triangles {
        for he in triangle_half_edges(t) {
            let entry = counts
                .entry(he.undirected())
                .or_insert((0, he));
            entry.0 += 1;
            entry.1 = he;
        }
    }
    let mut boundary: Vec<HalfEdge> = counts
        .into_values()
        .filter(|(count, _)| *count == 1)
        .map(|(_, he)| he)
        .collect();
    boundary.sort_by_key(|he| (he.from, he.to));
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_key_is_order_independent() {
        assert_eq!(EdgeKey::new(1, 3), EdgeKey::new(3, 1));
    }

    #[test]
    fn tetrahedron_has_no_boundary() {
        let triangles: Vec<Triangle> = vec![(0, 1, 2), (0, 1, 3), (1, 2, 3), (0, 2, 3)];
        let incidence = edge_incidence(&triangles);
        assert!(incidence.values().all(|tris| tris.len() == 2));
        assert!(boundary_half_edges(&triangles).is_empty());
    }

    #[test]
    fn single_triangle_has_three_boundary_half_edges() {
        let triangles: Vec<Triangle> = vec![(0, 1, 2)];
        let boundary = boundary_half_edges(&triangles);
        assert_eq!(boundary.len(), 3);
        let mut seen: Vec<(Index, Index)> = boundary.iter().map(|he| (he.from, he.to)).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn fin_edge_has_incidence_three() {
        let triangles: Vec<Triangle> = vec![(0, 1, 2), (0, 1, 3), (0, 1, 4)];
        let incidence = edge_incidence(&triangles);
        let shared = incidence.get(&EdgeKey::new(0, 1)).unwrap();
        assert_eq!(shared.len(), 3);
    }
}
