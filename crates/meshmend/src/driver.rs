//! Orchestrates the repair stages in a fixed sequence: weld, filter,
//! resolve non-manifold edges, fill holes to convergence, filter again (a
//! filled loop can coincide with an existing face), resolve non-manifold
//! edges again (hole filling can introduce new ones), then compact.

use nalgebra::Point3;
use rayon::prelude::*;

use crate::boundary::extract_boundary;
use crate::compact::compact;
use crate::config::RepairConfig;
use crate::diagnosis::{diagnose, Diagnosis};
use crate::filter::filter_triangles;
use crate::fill::{fill_loop, t_junction_fill};
use crate::loops::find_loops;
use crate::mesh::{Mesh, Object, RepairedObject};
use crate::nonmanifold::resolve_non_manifold;
use crate::progress::{NullSink, ObjectToken, ProgressSink, ProgressToken, StageToken};
use crate::report::Report;
use crate::topology::Triangle;
use crate::weld::weld;

/// Run the hole-fill convergence loop in place against `vertices`/`triangles`.
/// Returns the count of successful fills (loop fills plus T-junction fills).
fn fill_holes(
    vertices: &mut Vec<Point3<f64>>,
    triangles: &mut Vec<Triangle>,
    config: &RepairConfig,
    sink: &mut dyn ProgressSink,
) -> usize {
    let mut filled_count = 0usize;
    let mut stuck = 0usize;
    let mut prev_boundary_len: Option<usize> = None;

    for iter in 0..config.hole_fill_iteration_cap {
        let boundary = extract_boundary(triangles);
        if boundary.is_empty() {
            tracing::debug!(iter, "hole-fill converged: no boundary remaining");
            break;
        }

        if iter % config.progress_interval == 0 {
            sink.emit(ProgressToken::Stage(StageToken::FillingHolesProgress {
                done: iter,
                remaining: config.hole_fill_iteration_cap - iter,
            }));
            sink.yield_point();
        }

        if let Some(prev) = prev_boundary_len {
            stuck = if boundary.len() >= prev { stuck + 1 } else { 0 };
        }
        prev_boundary_len = Some(boundary.len());

        if stuck > config.stuck_cap {
            tracing::warn!(
                iter,
                boundary_edges = boundary.len(),
                "hole-fill stuck counter exceeded; stopping with boundary remaining"
            );
            break;
        }

        let loops = find_loops(&boundary, config);
        let filled = if let Some(shortest) = loops.first() {
            let new_triangles = fill_loop(vertices, shortest);
            triangles.extend(new_triangles);
            true
        } else if let Some(tri) = t_junction_fill(&boundary) {
            triangles.push(tri);
            true
        } else {
            false
        };

        if filled {
            filled_count += 1;
        } else {
            tracing::warn!(iter, "no fill possible; stopping hole-fill loop with boundary remaining");
            break;
        }

        if iter + 1 == config.hole_fill_iteration_cap {
            tracing::warn!(iter, "hole-fill iteration cap reached; stopping with boundary remaining");
        }
    }

    filled_count
}

/// Repair one mesh end to end. Input is left unchanged; the returned
/// `(V', T')` satisfies the pipeline's exit invariants.
pub fn repair_object(
    vertices: &[Point3<f64>],
    triangles: &[Triangle],
    config: &RepairConfig,
) -> (Vec<Point3<f64>>, Vec<Triangle>, Report) {
    repair_object_with_sink(vertices, triangles, config, &mut NullSink)
}

/// As [`repair_object`], but emits [`ProgressToken`]s to `sink` at each
/// stage boundary.
pub fn repair_object_with_sink(
    vertices: &[Point3<f64>],
    triangles: &[Triangle],
    config: &RepairConfig,
    sink: &mut dyn ProgressSink,
) -> (Vec<Point3<f64>>, Vec<Triangle>, Report) {
    let mut report = Report::default();

    sink.emit(ProgressToken::Stage(StageToken::Welding));
    tracing::debug!(vertex_count = vertices.len(), "welding vertices");
    let (mut vertices, mut triangles, merged) = weld(vertices, triangles, config);
    report.merged = merged;

    sink.emit(ProgressToken::Stage(StageToken::Filtering));
    tracing::debug!(triangle_count = triangles.len(), "filtering degenerate/duplicate triangles");
    triangles = filter_triangles(&triangles);

    sink.emit(ProgressToken::Stage(StageToken::FixingNonManifold));
    tracing::debug!("resolving non-manifold edges (first pass)");
    let (resolved, fixed) = resolve_non_manifold(&triangles, config);
    triangles = resolved;
    report.nm_fixed += fixed;

    sink.emit(ProgressToken::Stage(StageToken::FillingHoles));
    tracing::debug!("filling holes");
    report.holes_filled += fill_holes(&mut vertices, &mut triangles, config, sink);

    // A filled loop that coincides with an existing face (the degenerate
    // case of a single free-floating triangle, whose own boundary is a
    // 3-cycle) re-emits that triangle. Re-run the dedup pass so the
    // no-duplicate-triangle invariant holds regardless of what hole
    // filling introduced; this can leave a boundary open in that
    // degenerate case rather than fabricate a second coincident face.
    triangles = filter_triangles(&triangles);

    sink.emit(ProgressToken::Stage(StageToken::FixingNonManifold));
    tracing::debug!("resolving non-manifold edges (post hole-fill pass)");
    let (resolved, fixed) = resolve_non_manifold(&triangles, config);
    triangles = resolved;
    report.nm_fixed += fixed;

    sink.emit(ProgressToken::Stage(StageToken::FinalCheck));

    sink.emit(ProgressToken::Stage(StageToken::Compacting));
    let (vertices, triangles) = compact(&vertices, &triangles);

    tracing::info!(
        merged = report.merged,
        nm_fixed = report.nm_fixed,
        holes_filled = report.holes_filled,
        "repair complete"
    );

    (vertices, triangles, report)
}

/// Convenience: `repair_object` followed by `diagnose`.
pub fn repair_mesh(
    vertices: &[Point3<f64>],
    triangles: &[Triangle],
    config: &RepairConfig,
) -> (Vec<Point3<f64>>, Vec<Triangle>, Report, Diagnosis) {
    let (v, t, report) = repair_object(vertices, triangles, config);
    let diagnosis = diagnose(&Mesh::new(v.clone(), t.clone()));
    (v, t, report, diagnosis)
}

/// Batch result of [`repair_all`]: each input object's repaired
/// counterpart, plus the sum of every per-object report.
pub struct RepairAllResult {
    pub objects: Vec<RepairedObject>,
    pub total_report: Report,
}

/// Repair every object in `objects` independently and fold the results.
/// Each object's repair is a pure function of its own input, so this is
/// implemented as a `rayon` parallel map: there is no shared mutable state
/// to serialize on.
pub fn repair_all(objects: &[Object], config: &RepairConfig) -> RepairAllResult {
    let total = objects.len();

    let repaired: Vec<RepairedObject> = objects
        .par_iter()
        .enumerate()
        .map(|(index, object)| {
            tracing::info!(index, total, object_id = %object.id, "repairing object");
            let (v, t, report) = repair_object(&object.mesh.vertices, &object.mesh.triangles, config);
            let mesh = Mesh::new(v, t);
            let diagnosis = diagnose(&mesh);
            RepairedObject { id: object.id.clone(), mesh, report, diagnosis }
        })
        .collect();

    let total_report: Report = repaired.iter().map(|r| r.report).sum();

    RepairAllResult { objects: repaired, total_report }
}

/// Emit the batch lifecycle tokens (`start`/`progress`/`done`) for
/// `repair_all`, then return its result. Split out from `repair_all` so the
/// (inherently sequential) progress emission doesn't force the underlying
/// work to be sequential too: the repairs themselves still run in parallel.
pub fn repair_all_with_sink(objects: &[Object], config: &RepairConfig, sink: &mut dyn ProgressSink) -> RepairAllResult {
    let total = objects.len();

    for (index, object) in objects.iter().enumerate() {
        sink.emit(ProgressToken::Object(ObjectToken::Start {
            index,
            object_id: object.id.clone(),
            total,
        }));
    }

    let result = repair_all(objects, config);

    for (index, repaired) in result.objects.iter().enumerate() {
        sink.emit(ProgressToken::Object(ObjectToken::Progress {
            index,
            object_id: repaired.id.clone(),
            total,
        }));
        sink.emit(ProgressToken::Object(ObjectToken::Done {
            index,
            object_id: repaired.id.clone(),
            total,
            report: repaired.report,
            diagnosis: repaired.diagnosis,
        }));
    }

    result
}
