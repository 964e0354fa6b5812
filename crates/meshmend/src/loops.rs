//! Boundary loop discovery: simple directed cycles in the boundary
//! half-edge graph, found by an explicit-stack depth-first search so the
//! worst-case 300-deep search costs one heap-allocated frame vector, not
//! 300 call frames.

use ahash::AHashMap;

use crate::config::RepairConfig;
use crate::topology::{HalfEdge, Index};

/// A simple cycle: an ordered sequence of `>= 3` vertex indices such that
/// consecutive pairs (and last -> first) are boundary half-edges.
pub type Loop = Vec<Index>;

/// A DFS stack frame: the vertex currently being explored from, and the
/// index of the next outgoing neighbor to try.
struct Frame {
    vertex: Index,
    cursor: usize,
}

/// Find simple loops in a set of directed boundary half-edges. Loops are
/// returned sorted by ascending length — shortest first tends to close
/// pockets before disturbing larger boundaries.
///
/// This is a heuristic, not a complete cycle decomposition: the search
/// marks a half-edge used before exploring from it, and marks outgoing
/// edges used as they are pushed onto the search stack. A branch that
/// fails to close a cycle does **not** unmark those edges, which can
/// strand half-edges that a fuller backtracking search would have
/// recovered. This is intentional: do not "fix" it by adding unmarking.
pub fn find_loops(half_edges: &[HalfEdge], config: &RepairConfig) -> Vec<Loop> {
    let mut adjacency: AHashMap<Index, Vec<(Index, usize)>> = AHashMap::default();
    for (i, he) in half_edges.iter().enumerate() {
        adjacency.entry(he.from).or_default().push((he.to, i));
    }

    let mut used = vec![false; half_edges.len()];
    let mut loops: Vec<Loop> = Vec::new();

    for start_idx in 0..half_edges.len() {
        if used[start_idx] {
            continue;
        }
        used[start_idx] = true;

        let he = half_edges[start_idx];
        let start = he.from;
        let mut path: Vec<Index> = vec![he.from, he.to];
        let mut stack: Vec<Frame> = vec![Frame { vertex: he.to, cursor: 0 }];
        let mut found: Option<Loop> = None;

        while let Some(top_idx) = stack.len().checked_sub(1) {
            if path.len() > config.loop_search_cap {
                break;
            }

            let vertex = stack[top_idx].vertex;
            let cursor = stack[top_idx].cursor;
            let neighbors = adjacency.get(&vertex);

            let candidate = neighbors.and_then(|n| n.get(cursor)).copied();
            match candidate {
                None => {
                    // No more neighbors to try from here: backtrack.
                    stack.pop();
                    path.pop();
                }
                Some((next_vertex, edge_idx)) => {
                    stack[top_idx].cursor += 1;
                    if used[edge_idx] {
                        continue;
                    }
                    used[edge_idx] = true;

                    if next_vertex == start && path.len() >= 3 {
                        found = Some(path.clone());
                        break;
                    }

                    stack.push(Frame { vertex: next_vertex, cursor: 0 });
                    path.push(next_vertex);
                }
            }
        }

        if let Some(loop_path) = found {
            loops.push(loop_path);
        }
    }

    loops.sort_by_key(|l| l.len());
    loops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn he(from: Index, to: Index) -> HalfEdge {
        HalfEdge::new(from, to)
    }

    #[test]
    fn finds_single_triangular_loop() {
        let half_edges = vec![he(0, 1), he(1, 2), he(2, 0)];
        let config = RepairConfig::default();
        let loops = find_loops(&half_edges, &config);
        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].len(), 3);
    }

    #[test]
    fn finds_square_loop() {
        let half_edges = vec![he(0, 1), he(1, 2), he(2, 3), he(3, 0)];
        let config = RepairConfig::default();
        let loops = find_loops(&half_edges, &config);
        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].len(), 4);
    }

    #[test]
    fn two_disjoint_triangles_find_two_loops_shortest_first() {
        let half_edges = vec![
            he(0, 1), he(1, 2), he(2, 3), he(3, 0),
            he(4, 5), he(5, 6), he(6, 4),
        ];
        let config = RepairConfig::default();
        let loops = find_loops(&half_edges, &config);
        assert_eq!(loops.len(), 2);
        assert!(loops[0].len() <= loops[1].len());
        assert_eq!(loops[0].len(), 3);
        assert_eq!(loops[1].len(), 4);
    }

    #[test]
    fn no_cycle_yields_no_loop() {
        let half_edges = vec![he(0, 1), he(2, 3)];
        let config = RepairConfig::default();
        assert!(find_loops(&half_edges, &config).is_empty());
    }
}
