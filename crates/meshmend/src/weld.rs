//! Vertex welding: collapse spatially-coincident vertices under a
//! fixed-precision quantisation and rewrite triangle indices to match.

use ahash::AHashMap;
use nalgebra::Point3;

use crate::config::RepairConfig;
use crate::topology::{Index, Triangle};

/// Quantised key for a vertex position. Two positions collide iff their
/// coordinates agree once rounded to `config.weld_scale` precision.
type QuantKey = (i64, i64, i64);

fn quantize(p: &Point3<f64>, scale: f64) -> QuantKey {
    (
        (p.x * scale).round() as i64,
        (p.y * scale).round() as i64,
        (p.z * scale).round() as i64,
    )
}

/// Weld coincident vertices. Returns the welded `(vertices, triangles)` and
/// the count of vertices removed (`|V| - |V'|`).
///
/// `vertices'` keeps the order of first-seen originals. Triangles that
/// become degenerate (two indices collapsing to the same representative)
/// are left in place — the filter stage removes them next.
pub fn weld(vertices: &[Point3<f64>], triangles: &[Triangle], config: &RepairConfig) -> (Vec<Point3<f64>>, Vec<Triangle>, usize) {
    let mut first_seen: AHashMap<QuantKey, Index> = AHashMap::default();
    let mut remap: Vec<Index> = Vec::with_capacity(vertices.len());
    let mut welded_vertices: Vec<Point3<f64>> = Vec::with_capacity(vertices.len());

    for v in vertices {
        let key = quantize(v, config.weld_scale);
        let representative = *first_seen.entry(key).or_insert_with(|| {
            let idx = welded_vertices.len();
            welded_vertices.push(*v);
            idx
        });
        remap.push(representative);
    }

    let merged = vertices.len() - welded_vertices.len();

    let welded_triangles: Vec<Triangle> = triangles
        .iter()
        .map(|&(a, b, c)| (remap[a], remap[b], remap[c]))
        .collect();

    (welded_vertices, welded_triangles, merged)
}
