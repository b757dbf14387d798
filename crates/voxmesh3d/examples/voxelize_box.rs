extern crate nalgebra as na;

use na::Point3;
use voxmesh3d::{Voxelization, VoxelizationMethod, VoxelizationParameters};

fn main() {
    /*
     * A box of size 2 x 1 x 1.5, every face split into two triangles.
     */
    let vertices: Vec<_> = (0..8)
        .map(|i| {
            Point3::new(
                if i & 1 == 0 { 0.0 } else { 2.0 },
                if i & 2 == 0 { 0.0 } else { 1.0 },
                if i & 4 == 0 { 0.0 } else { 1.5 },
            )
        })
        .collect();
    let indices = [
        0, 4, 6, 0, 6, 2, // -x
        1, 3, 7, 1, 7, 5, // +x
        0, 1, 5, 0, 5, 4, // -y
        2, 6, 7, 2, 7, 3, // +y
        0, 2, 3, 0, 3, 1, // -z
        4, 5, 7, 4, 7, 6, // +z
    ];

    for method in [
        VoxelizationMethod::Simple,
        VoxelizationMethod::Optimized,
        VoxelizationMethod::Surface,
    ] {
        let params = VoxelizationParameters {
            resolution: 4,
            method,
            ..Default::default()
        };
        let voxelization = Voxelization::voxelize(&vertices, &indices, &params).unwrap();
        let grid = voxelization.as_uniform().unwrap();

        println!("{:?}: {} filled voxels", method, grid.num_filled());
        print!("{}", grid);

        let surface = voxelization.extract_surface(params.closed_boundary);
        println!(
            "Reconstructed surface: {} vertices, {} triangles.\n",
            surface.num_vertices(),
            surface.num_triangles()
        );
    }
}
