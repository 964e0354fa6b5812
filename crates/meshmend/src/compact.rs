//! Vertex compaction: drop vertices no triangle references and renumber
//! the survivors, remapping triangle indices accordingly.

use ahash::AHashMap;
use nalgebra::Point3;

use crate::topology::{Index, Triangle};

/// Compact `vertices` down to those referenced by `triangles`, preserving
/// original relative order, and remap `triangles` to the new indices.
pub fn compact(vertices: &[Point3<f64>], triangles: &[Triangle]) -> (Vec<Point3<f64>>, Vec<Triangle>) {
    let mut referenced: Vec<bool> = vec![false; vertices.len()];
    for &(a, b, c) in triangles {
        referenced[a] = true;
        referenced[b] = true;
        referenced[c] = true;
    }

    let mut remap: AHashMap<Index, Index> = AHashMap::default();
    let mut compacted_vertices: Vec<Point3<f64>> = Vec::new();
    for (i, v) in vertices.iter().enumerate() {
        if referenced[i] {
            remap.insert(i, compacted_vertices.len());
            compacted_vertices.push(*v);
        }
    }

    let compacted_triangles: Vec<Triangle> = triangles
        .iter()
        .map(|&(a, b, c)| (remap[&a], remap[&b], remap[&c]))
        .collect();

    (compacted_vertices, compacted_triangles)
}
