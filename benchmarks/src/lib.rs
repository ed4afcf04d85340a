//! Shared setup helpers for glidemesh benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- broadphase

use glam::Vec3;
use glidemesh::{CollisionBody, CollisionConfig, CollisionMesh, MeshLibrary};

/// Id under which [`setup_body`] registers its mesh.
pub const TERRAIN_ID: &str = "bench/terrain";

/// Bumpy terrain of `cells * cells * 2` triangles around the origin, with a
/// ring of walls along its border.
pub fn terrain_mesh(cells: usize) -> CollisionMesh {
    let size = 1.0;
    let half = cells as f32 * size * 0.5;
    let height = |x: usize, z: usize| ((x as f32 * 0.7).sin() + (z as f32 * 0.4).cos()) * 0.2;

    let mut triangles = Vec::with_capacity(cells * cells * 2 + cells * 8);
    for z in 0..cells {
        for x in 0..cells {
            let p = |dx: usize, dz: usize| {
                Vec3::new(
                    (x + dx) as f32 * size - half,
                    height(x + dx, z + dz),
                    (z + dz) as f32 * size - half,
                )
            };
            // Counter-clockwise seen from above.
            triangles.push([p(0, 0), p(1, 1), p(1, 0)]);
            triangles.push([p(0, 0), p(0, 1), p(1, 1)]);
        }
    }

    // Border walls facing inward.
    for i in 0..cells {
        let a = i as f32 * size - half;
        let b = a + size;
        let (lo, hi) = (0.0, 2.0);
        // -z border, facing +z
        triangles.push([Vec3::new(a, lo, -half), Vec3::new(b, lo, -half), Vec3::new(a, hi, -half)]);
        triangles.push([Vec3::new(b, lo, -half), Vec3::new(b, hi, -half), Vec3::new(a, hi, -half)]);
        // +z border, facing -z
        triangles.push([Vec3::new(a, lo, half), Vec3::new(a, hi, half), Vec3::new(b, lo, half)]);
        triangles.push([Vec3::new(b, lo, half), Vec3::new(a, hi, half), Vec3::new(b, hi, half)]);
    }

    CollisionMesh::from_triangles(&triangles).expect("terrain triangles are non-degenerate")
}

/// An initialized body over a terrain of `cells * cells` quads.
pub fn setup_body(cells: usize) -> CollisionBody {
    let mut library = MeshLibrary::new();
    library.insert(TERRAIN_ID, terrain_mesh(cells));

    let mut body = CollisionBody::new(CollisionConfig {
        wall_glide_speed: 2.0,
        ..CollisionConfig::default()
    });
    body.initialize(&library, TERRAIN_ID)
        .expect("terrain mesh was just registered");
    body
}
