//! Hole filling: centroid-fan triangulation of a closed loop, with a
//! T-junction fallback splice when no loop can be closed.

use nalgebra::Point3;

use crate::loops::Loop;
use crate::topology::{HalfEdge, Index, Triangle};

/// Fill a single loop. For a triangle loop (`n == 3`), emits the triangle
/// directly. Otherwise appends a centroid vertex to `vertices` and emits
/// the fan `{(l_i, l_{i+1}, c)}`.
///
/// Returns the new triangles to add; `vertices` is extended in place if a
/// centroid vertex was needed.
pub fn fill_loop(vertices: &mut Vec<Point3<f64>>, loop_: &Loop) -> Vec<Triangle> {
    let n = loop_.len();
    debug_assert!(n >= 3, "loops must have length >= 3");

    if n == 3 {
        return vec![(loop_[0], loop_[1], loop_[2])];
    }

    let sum = loop_
        .iter()
        .fold(nalgebra::Vector3::zeros(), |acc, &idx| acc + vertices[idx].coords);
    let centroid = Point3::from(sum / n as f64);
    let centroid_index = vertices.len();
    vertices.push(centroid);

    (0..n)
        .map(|i| (loop_[i], loop_[(i + 1) % n], centroid_index))
        .collect()
}

/// Attempt the T-junction fallback: find a vertex with >= 2 outgoing
/// boundary half-edges and splice two of them into a triangle; failing
/// that, the same for incoming half-edges. Returns `None` if no such
/// vertex exists ("no fill possible").
///
/// The resulting triangle's winding may be inconsistent with the
/// surrounding surface — this is accepted, not corrected.
pub fn t_junction_fill(half_edges: &[HalfEdge]) -> Option<Triangle> {
    let mut outgoing: std::collections::BTreeMap<Index, Vec<Index>> = std::collections::BTreeMap::new();
    let mut incoming: std::collections::BTreeMap<Index, Vec<Index>> = std::collections::BTreeMap::new();

    for he in half_edges {
        outgoing.entry(he.from).or_default().push(he.to);
        incoming.entry(he.to).or_default().push(he.from);
    }

    for (&v, outs) in &outgoing {
        if outs.len() >= 2 {
            return Some((v, outs[1], outs[0]));
        }
    }

    for (&v, ins) in &incoming {
        if ins.len() >= 2 {
            return Some((v, ins[0], ins[1]));
        }
    }

    None
}
