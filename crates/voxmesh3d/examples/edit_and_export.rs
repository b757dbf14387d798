extern crate nalgebra as na;

use na::Point3;
use voxmesh3d::transformation::voxelization::{Axis, EditCommand};
use voxmesh3d::{Voxelization, VoxelizationMethod, VoxelizationParameters};

fn main() {
    /*
     * A tetrahedron.
     */
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let indices = [0, 2, 1, 0, 1, 3, 0, 3, 2, 1, 2, 3];
    let params = VoxelizationParameters {
        resolution: 6,
        method: VoxelizationMethod::Optimized,
        ..Default::default()
    };

    let mut voxelization = Voxelization::voxelize(&vertices, &indices, &params).unwrap();
    let grid = voxelization.as_uniform_mut().unwrap();
    println!("Before edition: {} filled voxels.", grid.num_filled());

    /*
     * Walk along the diagonal of the grid, toggling every voxel on the way.
     */
    let mut commands = vec![EditCommand::SelectAt([0, 0, 0]), EditCommand::ToggleSelected];
    for _ in 0..5 {
        for axis in Axis::ALL {
            commands.push(EditCommand::Step {
                axis,
                forward: true,
            });
        }
        commands.push(EditCommand::ToggleSelected);
    }
    commands.push(EditCommand::ClearSelection);

    for command in commands {
        grid.apply(command).unwrap();
    }
    println!("After edition: {} filled voxels.", grid.num_filled());

    /*
     * Export the reconstructed surface.
     */
    let surface = voxelization.extract_surface(params.closed_boundary);
    let path = std::env::temp_dir().join("voxmesh_edit_and_export.off");
    surface.to_off_file(&path).unwrap();
    println!(
        "Wrote {} triangles to {}.",
        surface.num_triangles(),
        path.display()
    );
}
