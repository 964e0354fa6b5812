//! `meshmend` CLI: wires `ObjAdapter` ingest -> `repair_mesh` -> `ObjAdapter`
//! emit, for interactive use and manual QA. Not part of the repair core —
//! one worked example of the adapter traits.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use meshmend::adapters::{MeshEmitAdapter, MeshIngestAdapter, ObjAdapter};
use meshmend::{repair_mesh, RepairConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "meshmend")]
#[command(about = "Repair a triangle mesh to watertightness", long_about = None)]
struct Cli {
    /// Input OBJ file
    input: PathBuf,

    /// Output OBJ file for the repaired mesh
    #[arg(short, long)]
    output: PathBuf,

    /// Optional TOML file overriding the default RepairConfig
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print each object's Diagnosis as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Verbose (debug-level) logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => RepairConfig::default(),
    };

    let data = std::fs::read(&cli.input).with_context(|| format!("reading {}", cli.input.display()))?;
    let scene = ObjAdapter.ingest(&data).with_context(|| format!("parsing {}", cli.input.display()))?;

    let mut repaired = Vec::with_capacity(scene.objects.len());
    for object in &scene.objects {
        let (vertices, triangles, report, diagnosis) =
            repair_mesh(&object.mesh.vertices, &object.mesh.triangles, &config);
        tracing::info!(object = %object.id, ?report, "repaired object");

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&diagnosis).context("serializing diagnosis")?
            );
        }

        repaired.push(meshmend::RepairedObject {
            id: object.id.clone(),
            mesh: meshmend::Mesh::new(vertices, triangles),
            report,
            diagnosis,
        });
    }

    let out_bytes = ObjAdapter.emit(&repaired, scene.passthrough.as_deref());
    std::fs::write(&cli.output, out_bytes).with_context(|| format!("writing {}", cli.output.display()))?;

    for object in &repaired {
        println!(
            "{}: watertight={} boundary_edges={}",
            object.id, object.diagnosis.is_watertight, object.diagnosis.boundary_edge_count
        );
    }

    Ok(())
}
