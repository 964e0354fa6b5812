//! A trimmed Wavefront OBJ adapter: `v`/`f` lines only. Normals, UVs,
//! materials, and groups are out of scope (positions-and-faces only per
//! the pipeline's non-goals) and are silently ignored rather than parsed.
//! A direct descendant of the teacher's `ObjLine` line-oriented parser.

use crate::adapters::{validate, IngestedScene, MeshEmitAdapter, MeshIngestAdapter};
use crate::error::MeshIngestError;
use crate::mesh::{Mesh, Object, RepairedObject};
use nalgebra::Point3;

/// A single parsed OBJ line, trimmed to the subset this adapter handles.
#[derive(Debug, PartialEq)]
enum ObjLine {
    V(Point3<f64>),
    F(Vec<usize>),
    O(String),
    Ignore,
}

fn parse_line(line: &str, line_no: usize) -> Result<ObjLine, MeshIngestError> {
    let parts: Vec<&str> = line.split('#').next().unwrap_or_default().split_whitespace().collect();

    match parts.as_slice() {
        ["v", x, y, z] => {
            let coords = [x, y, z]
                .iter()
                .map(|s| {
                    s.parse::<f64>().map_err(|source| MeshIngestError::Parse {
                        field: format!("v:{line_no}"),
                        source,
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            Ok(ObjLine::V(Point3::new(coords[0], coords[1], coords[2])))
        }
        ["v", rest @ ..] => Err(MeshIngestError::VertexArity { found: rest.len() }),
        ["f", blob @ ..] => {
            if blob.len() < 3 {
                return Err(MeshIngestError::FaceArity { found: blob.len() });
            }
            // OBJ face references may carry `/normal`/`/uv` suffixes; this
            // adapter keeps only the leading vertex index.
            let indices = blob
                .iter()
                .map(|token| {
                    let first = token.split('/').next().unwrap_or(token);
                    first
                        .parse::<usize>()
                        .map(|one_based| one_based.saturating_sub(1))
                        .map_err(|source| MeshIngestError::ParseIndex { field: format!("f:{line_no}"), source })
                })
                .collect::<Result<Vec<usize>, _>>()?;
            Ok(ObjLine::F(indices))
        }
        ["o", name @ ..] => Ok(ObjLine::O(name.join(" "))),
        _ => Ok(ObjLine::Ignore),
    }
}

/// Fan-triangulate a polygon face referencing more than 3 vertices, the
/// same way the teacher's parser does for faces it can't otherwise split.
fn triangulate_fan(indices: &[usize]) -> Vec<(usize, usize, usize)> {
    (1..indices.len() - 1).map(|i| (indices[0], indices[i], indices[i + 1])).collect()
}

/// Reads/writes the `v`/`f` subset of Wavefront OBJ. Each `o` directive
/// starts a new [`Object`]; a file with no `o` directive is one object
/// named `"object"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjAdapter;

impl MeshIngestAdapter for ObjAdapter {
    fn ingest(&self, data: &[u8]) -> Result<IngestedScene, MeshIngestError> {
        let text = String::from_utf8_lossy(data);

        let mut objects: Vec<Object> = Vec::new();
        let mut vertices: Vec<Point3<f64>> = Vec::new();
        let mut triangles: Vec<(usize, usize, usize)> = Vec::new();
        let mut current_name = "object".to_string();

        let flush = |objects: &mut Vec<Object>, name: &str, vertices: &[Point3<f64>], triangles: &[(usize, usize, usize)]| {
            if !vertices.is_empty() || !triangles.is_empty() {
                objects.push(Object { id: name.to_string(), mesh: Mesh::new(vertices.to_vec(), triangles.to_vec()) });
            }
        };

        for (line_no, line) in text.lines().enumerate() {
            match parse_line(line, line_no)? {
                ObjLine::V(p) => vertices.push(p),
                ObjLine::F(indices) => {
                    if indices.len() == 3 {
                        triangles.push((indices[0], indices[1], indices[2]));
                    } else {
                        triangles.extend(triangulate_fan(&indices));
                    }
                }
                ObjLine::O(name) => {
                    flush(&mut objects, &current_name, &vertices, &triangles);
                    vertices.clear();
                    triangles.clear();
                    current_name = name;
                }
                ObjLine::Ignore => {}
            }
        }
        flush(&mut objects, &current_name, &vertices, &triangles);

        for object in &objects {
            validate(&object.mesh)?;
        }

        Ok(IngestedScene { objects, passthrough: None })
    }
}

impl MeshEmitAdapter for ObjAdapter {
    fn emit(&self, objects: &[RepairedObject], _passthrough: Option<&str>) -> Vec<u8> {
        let mut out = String::new();
        for object in objects {
            out.push_str(&format!("o {}\n", object.id));
            for v in &object.mesh.vertices {
                out.push_str(&format!("v {} {} {}\n", v.x, v.y, v.z));
            }
            for &(a, b, c) in &object.mesh.triangles {
                out.push_str(&format!("f {} {} {}\n", a + 1, b + 1, c + 1));
            }
        }
        out.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingests_single_triangle() {
        let data = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let scene = ObjAdapter.ingest(data).unwrap();
        assert_eq!(scene.objects.len(), 1);
        assert_eq!(scene.objects[0].mesh.vertices.len(), 3);
        assert_eq!(scene.objects[0].mesh.triangles, vec![(0, 1, 2)]);
    }

    #[test]
    fn splits_multiple_objects_on_o_directive() {
        let data = b"o first\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\no second\nv 2 0 0\nv 3 0 0\nv 2 1 0\nf 1 2 3\n";
        let scene = ObjAdapter.ingest(data).unwrap();
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.objects[0].id, "first");
        assert_eq!(scene.objects[1].id, "second");
    }

    #[test]
    fn ignores_face_vertex_texture_normal_suffixes() {
        let data = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1 2/2/2 3/3/3\n";
        let scene = ObjAdapter.ingest(data).unwrap();
        assert_eq!(scene.objects[0].mesh.triangles, vec![(0, 1, 2)]);
    }

    #[test]
    fn fan_triangulates_quad_face() {
        let data = b"v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let scene = ObjAdapter.ingest(data).unwrap();
        assert_eq!(scene.objects[0].mesh.triangles, vec![(0, 1, 2), (0, 2, 3)]);
    }

    #[test]
    fn rejects_face_with_fewer_than_three_indices() {
        let data = b"v 0 0 0\nv 1 0 0\nf 1 2\n";
        assert!(matches!(ObjAdapter.ingest(data), Err(MeshIngestError::FaceArity { found: 2 })));
    }

    #[test]
    fn rejects_out_of_range_face_index() {
        let data = b"v 0 0 0\nf 1 2 3\n";
        assert!(matches!(ObjAdapter.ingest(data), Err(MeshIngestError::IndexOutOfRange { .. })));
    }

    #[test]
    fn round_trips_through_emit() {
        let data = b"o solo\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let scene = ObjAdapter.ingest(data).unwrap();
        let repaired = RepairedObject {
            id: scene.objects[0].id.clone(),
            mesh: scene.objects[0].mesh.clone(),
            report: crate::report::Report::default(),
            diagnosis: crate::diagnosis::diagnose(&scene.objects[0].mesh),
        };
        let bytes = ObjAdapter.emit(&[repaired], None);
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("o solo"));
        assert!(text.contains("f 1 2 3"));
    }
}
