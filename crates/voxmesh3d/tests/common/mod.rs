//! Meshes shared by the integration tests.

use na::Point3;
use voxmesh3d::shape::TriMesh;

/// Appends to `vertices`/`indices` the 12 triangles of the box `[mins, maxs]`.
///
/// Every face is split along the diagonal joining its lowest corner to its highest corner.
pub fn push_cuboid(
    vertices: &mut Vec<Point3<f32>>,
    indices: &mut Vec<u32>,
    mins: Point3<f32>,
    maxs: Point3<f32>,
) {
    let base = vertices.len() as u32;

    for i in 0..8 {
        vertices.push(Point3::new(
            if i & 1 == 0 { mins.x } else { maxs.x },
            if i & 2 == 0 { mins.y } else { maxs.y },
            if i & 4 == 0 { mins.z } else { maxs.z },
        ));
    }

    // Faces as (lowest, u, highest, v) corner quadruplets.
    let faces = [
        [0, 4, 6, 2], // -x
        [1, 3, 7, 5], // +x
        [0, 1, 5, 4], // -y
        [2, 6, 7, 3], // +y
        [0, 2, 3, 1], // -z
        [4, 5, 7, 6], // +z
    ];

    for [a, b, c, d] in faces {
        indices.extend([a, b, c, a, c, d].iter().map(|i| base + i));
    }
}

pub fn cuboid(mins: Point3<f32>, maxs: Point3<f32>) -> TriMesh {
    let mut vertices = vec![];
    let mut indices = vec![];
    push_cuboid(&mut vertices, &mut indices, mins, maxs);
    TriMesh::from_flat_indices(vertices, &indices).unwrap()
}

pub fn unit_cube() -> TriMesh {
    cuboid(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
}

/// Two disjoint boxes of different heights, side by side along `x`.
pub fn two_boxes() -> TriMesh {
    let mut vertices = vec![];
    let mut indices = vec![];
    push_cuboid(
        &mut vertices,
        &mut indices,
        Point3::origin(),
        Point3::new(2.0, 1.0, 1.5),
    );
    push_cuboid(
        &mut vertices,
        &mut indices,
        Point3::new(2.5, 0.0, 0.0),
        Point3::new(4.0, 1.0, 1.2),
    );
    TriMesh::from_flat_indices(vertices, &indices).unwrap()
}

/// A closed approximation of the sphere of radius `radius` centered at the origin.
pub fn uv_sphere(radius: f32, num_stacks: u32, num_slices: u32) -> TriMesh {
    use core::f32::consts::PI;

    let mut vertices = vec![Point3::new(0.0, 0.0, radius)];

    for stack in 1..num_stacks {
        let theta = PI * stack as f32 / num_stacks as f32;
        for slice in 0..num_slices {
            let phi = 2.0 * PI * slice as f32 / num_slices as f32;
            vertices.push(Point3::new(
                radius * theta.sin() * phi.cos(),
                radius * theta.sin() * phi.sin(),
                radius * theta.cos(),
            ));
        }
    }

    vertices.push(Point3::new(0.0, 0.0, -radius));

    let south = vertices.len() as u32 - 1;
    let ring = |stack: u32, slice: u32| 1 + (stack - 1) * num_slices + slice % num_slices;
    let mut indices = vec![];

    for slice in 0..num_slices {
        indices.extend([0, ring(1, slice), ring(1, slice + 1)]);
        indices.extend([
            south,
            ring(num_stacks - 1, slice + 1),
            ring(num_stacks - 1, slice),
        ]);
    }

    for stack in 1..num_stacks - 1 {
        for slice in 0..num_slices {
            let (a, b) = (ring(stack, slice), ring(stack, slice + 1));
            let (c, d) = (ring(stack + 1, slice), ring(stack + 1, slice + 1));
            indices.extend([a, c, d, a, d, b]);
        }
    }

    TriMesh::from_flat_indices(vertices, &indices).unwrap()
}
