extern crate nalgebra as na;

use core::f32::consts::PI;
use na::Point3;
use voxmesh3d::{Representation, Voxelization, VoxelizationParameters};

const NUM_STACKS: u32 = 12;
const NUM_SLICES: u32 = 16;

fn main() {
    /*
     * A UV sphere of radius 1.
     */
    let mut vertices = vec![Point3::new(0.0, 0.0, 1.0)];
    for stack in 1..NUM_STACKS {
        let theta = PI * stack as f32 / NUM_STACKS as f32;
        for slice in 0..NUM_SLICES {
            let phi = 2.0 * PI * slice as f32 / NUM_SLICES as f32;
            vertices.push(Point3::new(
                theta.sin() * phi.cos(),
                theta.sin() * phi.sin(),
                theta.cos(),
            ));
        }
    }
    vertices.push(Point3::new(0.0, 0.0, -1.0));

    let south = vertices.len() as u32 - 1;
    let ring = |stack: u32, slice: u32| 1 + (stack - 1) * NUM_SLICES + slice % NUM_SLICES;
    let mut indices = vec![];
    for slice in 0..NUM_SLICES {
        indices.extend([0, ring(1, slice), ring(1, slice + 1)]);
        indices.extend([
            south,
            ring(NUM_STACKS - 1, slice + 1),
            ring(NUM_STACKS - 1, slice),
        ]);
    }
    for stack in 1..NUM_STACKS - 1 {
        for slice in 0..NUM_SLICES {
            let (a, b) = (ring(stack, slice), ring(stack, slice + 1));
            let (c, d) = (ring(stack + 1, slice), ring(stack + 1, slice + 1));
            indices.extend([a, c, d, a, d, b]);
        }
    }

    /*
     * Compare the octree with the uniform grid of the same finest resolution.
     */
    for representation in [Representation::UniformGrid, Representation::AdaptiveOctree] {
        let params = VoxelizationParameters {
            resolution: 16,
            representation,
            ..Default::default()
        };
        let voxelization = Voxelization::voxelize(&vertices, &indices, &params).unwrap();
        let surface = voxelization.extract_surface(params.closed_boundary);

        println!(
            "{:?}: {} voxels, {} active corners, {} reconstructed triangles.",
            representation,
            voxelization.voxels().len(),
            voxelization.active_corners().len(),
            surface.num_triangles()
        );

        if let Some(octree) = voxelization.as_octree() {
            println!(
                "Octree: {} nodes, {} leaves, depth {}.",
                octree.nodes().len(),
                octree.leaves().count(),
                octree.max_depth()
            );
        }
    }
}
