//! Reconstruction-error report across bit budgets.
//!
//! Generates a UV sphere with analytic normals and tangents, sweeps the
//! even normal bit budgets (and a tangent sweep at a fixed normal budget),
//! and prints mean/max angular error per budget. Optionally writes the same
//! numbers as JSON for plotting.
//!
//! Run: `cargo run -p octapack --features report-tools --bin error_report -- [json-path]`

use std::env;
use std::f32::consts::TAU;
use std::fs;

use glam::{Vec3, Vec4};
use octapack::{MeshBuffers, PackParams, pack_mesh_parallel};

const RINGS: usize = 64;
const SEGMENTS: usize = 128;

fn main() {
    let args: Vec<String> = env::args().collect();
    let json_path = args.get(1);

    let mesh = uv_sphere();
    println!(
        "UV sphere: {} vertices ({RINGS} rings x {SEGMENTS} segments)\n",
        mesh.vertex_count()
    );

    println!("=== Normal budget sweep (tangent fixed at 12 bits) ===");
    println!("{:>12} {:>14} {:>14} {:>14} {:>14}", "normal bits", "mean n (rad)", "max n (rad)", "mean t (rad)", "max t (rad)");
    let mut normal_rows = Vec::new();
    for bits in (2..=32_u32).step_by(2) {
        let stats = measure(&mesh, PackParams::new(bits, 12).expect("even budget in range"));
        println!(
            "{bits:>12} {:>14.6} {:>14.6} {:>14.6} {:>14.6}",
            stats.mean_normal, stats.max_normal, stats.mean_tangent, stats.max_tangent
        );
        normal_rows.push((bits, stats));
    }

    println!("\n=== Tangent budget sweep (normal fixed at 16 bits) ===");
    println!("{:>12} {:>14} {:>14}", "tangent bits", "mean t (rad)", "max t (rad)");
    let mut tangent_rows = Vec::new();
    for bits in 1..=32_u32 {
        let stats = measure(&mesh, PackParams::new(16, bits).expect("budget in range"));
        println!(
            "{bits:>12} {:>14.6} {:>14.6}",
            stats.mean_tangent, stats.max_tangent
        );
        tangent_rows.push((bits, stats));
    }

    if let Some(path) = json_path {
        let report = serde_json::json!({
            "vertices": mesh.vertex_count(),
            "normal_sweep": normal_rows
                .iter()
                .map(|(bits, s)| {
                    serde_json::json!({
                        "normal_bits": bits,
                        "mean_normal": s.mean_normal,
                        "max_normal": s.max_normal,
                        "mean_tangent": s.mean_tangent,
                        "max_tangent": s.max_tangent,
                    })
                })
                .collect::<Vec<_>>(),
            "tangent_sweep": tangent_rows
                .iter()
                .map(|(bits, s)| {
                    serde_json::json!({
                        "tangent_bits": bits,
                        "mean_tangent": s.mean_tangent,
                        "max_tangent": s.max_tangent,
                    })
                })
                .collect::<Vec<_>>(),
        });
        match fs::write(path, serde_json::to_string_pretty(&report).expect("serializable report")) {
            Ok(()) => println!("\nWrote {path}"),
            Err(e) => {
                eprintln!("Failed to write {path}: {e}");
                std::process::exit(1);
            }
        }
    }
}

struct ErrorStats {
    mean_normal: f32,
    max_normal: f32,
    mean_tangent: f32,
    max_tangent: f32,
}

/// Pack the mesh and measure angular reconstruction error per attribute.
#[allow(clippy::cast_precision_loss)]
fn measure(mesh: &MeshBuffers, params: PackParams) -> ErrorStats {
    let (out_normals, out_tangents) = pack_mesh_parallel(mesh, params).expect("validated params");

    let mut normal_sum = 0.0_f32;
    let mut normal_max = 0.0_f32;
    let mut tangent_sum = 0.0_f32;
    let mut tangent_max = 0.0_f32;
    for i in 0..mesh.vertex_count() {
        let n_err = angle_between(mesh.normals[i], out_normals[i]);
        normal_sum += n_err;
        normal_max = normal_max.max(n_err);
        let t_err = angle_between(mesh.tangents[i].truncate(), out_tangents[i].truncate());
        tangent_sum += t_err;
        tangent_max = tangent_max.max(t_err);
    }

    let count = mesh.vertex_count() as f32;
    ErrorStats {
        mean_normal: normal_sum / count,
        max_normal: normal_max,
        mean_tangent: tangent_sum / count,
        max_tangent: tangent_max,
    }
}

fn angle_between(a: Vec3, b: Vec3) -> f32 {
    2.0 * ((a - b).length() * 0.5).min(1.0).asin()
}

/// UV sphere with analytic surface orientation: the normal is the radial
/// direction, the tangent follows the longitude circles (w = +1).
#[allow(clippy::cast_precision_loss)]
fn uv_sphere() -> MeshBuffers {
    let mut mesh = MeshBuffers::default();
    for ring in 1..RINGS {
        let theta = ring as f32 / RINGS as f32 * (TAU / 2.0);
        for segment in 0..SEGMENTS {
            let phi = segment as f32 / SEGMENTS as f32 * TAU;
            let normal = Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            );
            let tangent = Vec3::new(-phi.sin(), 0.0, phi.cos());
            mesh.positions.push(normal);
            mesh.normals.push(normal.normalize());
            mesh.tangents.push(tangent.extend(1.0));
        }
    }
    mesh
}
