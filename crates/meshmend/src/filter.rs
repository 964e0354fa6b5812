//! Degenerate and duplicate triangle filtering. Run after welding, so
//! coincident-but-differently-indexed faces are recognised as duplicates.

use ahash::AHashSet;

use crate::topology::Triangle;

fn is_degenerate(t: &Triangle) -> bool {
    t.0 == t.1 || t.1 == t.2 || t.0 == t.2
}

fn sorted_key(t: &Triangle) -> Triangle {
    let mut idx = [t.0, t.1, t.2];
    idx.sort_unstable();
    (idx[0], idx[1], idx[2])
}

/// Drop degenerate triangles (a repeated index) and duplicate triangles
/// (same unordered vertex set), keeping the first occurrence of each
/// unordered triple.
pub fn filter_triangles(triangles: &[Triangle]) -> Vec<Triangle> {
    let mut seen: AHashSet<Triangle> = AHashSet::default();
    triangles
        .iter()
        .filter(|t| !is_degenerate(t))
        .filter(|t| seen.insert(sorted_key(t)))
        .copied()
        .collect()
}
