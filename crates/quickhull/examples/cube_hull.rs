//! Example: build the convex hull of a jittered cube point cloud.
//!
//! Demonstrates the full engine workflow:
//! 1. Seed a point cloud (cube corners plus interior noise)
//! 2. `initialize` and `build` the hull
//! 3. Print the resulting faces and confirm the interior points were dropped

use quickhull::Engine;
use quickhull_math::Point3;

fn main() {
    let points = make_cloud(10.0, 40);

    println!("{} input points", points.len());

    let mut engine = Engine::new();
    engine.initialize(&points).expect("cube cloud has >= 4 points");
    let iterations = engine.build().expect("engine was just initialized");

    let faces = engine.hull();
    println!("{iterations} iterations, {} hull faces", faces.len());

    for face in faces.iter().take(5) {
        println!("  ({}, {}, {})", face.a, face.b, face.c);
    }

    let hull_vertices: std::collections::HashSet<u32> = faces
        .iter()
        .flat_map(|f| [f.a, f.b, f.c])
        .collect();
    println!("{} of {} points are on the hull", hull_vertices.len(), points.len());
}

/// The eight corners of a `size`-cube, plus `interior` points scattered
/// strictly inside it (a tiny deterministic LCG, so the example is
/// reproducible without a dependency).
fn make_cloud(size: f64, interior: usize) -> Vec<Point3> {
    let mut points = Vec::new();
    for &x in &[0.0, size] {
        for &y in &[0.0, size] {
            for &z in &[0.0, size] {
                points.push(Point3::new(x, y, z));
            }
        }
    }

    let mut state = 0x2545F4914F6CDD1Du64;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 11) as f64) / ((1u64 << 53) as f64)
    };

    let margin = size * 0.1;
    for _ in 0..interior {
        points.push(Point3::new(
            margin + next() * (size - 2.0 * margin),
            margin + next() * (size - 2.0 * margin),
            margin + next() * (size - 2.0 * margin),
        ));
    }

    points
}
