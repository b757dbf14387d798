use crate::common;
use na::Point3;
use voxmesh3d::query::intersection_test_cube_triangle;
use voxmesh3d::shape::TriMesh;
use voxmesh3d::transformation::voxelization::{
    Occupancy, UniformVoxelGrid, VoxelizationError, VoxelizationMethod,
};

const METHODS: [VoxelizationMethod; 3] = [
    VoxelizationMethod::Simple,
    VoxelizationMethod::Optimized,
    VoxelizationMethod::Surface,
];

#[test]
fn voxel_count_matches_the_resolution() {
    let mesh = common::two_boxes();

    for method in METHODS {
        for resolution in [2, 3, 4, 7] {
            let grid = UniformVoxelGrid::from_mesh(&mesh, resolution, method).unwrap();
            let [rx, ry, rz] = grid.resolution();
            assert_eq!((rx * ry * rz) as usize, grid.voxels().len());
            assert_eq!(ry, resolution);
        }
    }
}

#[test]
fn unit_cube_surface_voxelization() {
    let mesh = common::unit_cube();
    let grid = UniformVoxelGrid::from_mesh(&mesh, 4, VoxelizationMethod::Surface).unwrap();

    assert_eq!(grid.resolution(), [4, 4, 4]);
    assert_eq!(grid.num_filled(), 56);

    for x in 0..4 {
        for y in 0..4 {
            for z in 0..4 {
                let interior = [x, y, z].iter().all(|e| *e == 1 || *e == 2);
                let voxel = grid.voxel(x, y, z).unwrap();
                assert_eq!(voxel.is_filled(), !interior, "voxel {:?}", [x, y, z]);
            }
        }
    }
}

#[test]
fn surface_voxels_are_exactly_those_touching_a_triangle() {
    let mesh = common::uv_sphere(1.0, 6, 8);
    let grid = UniformVoxelGrid::from_mesh(&mesh, 6, VoxelizationMethod::Surface).unwrap();
    assert!(grid.num_filled() > 0);

    for voxel in grid.voxels() {
        let touches = mesh
            .triangles()
            .any(|tri| intersection_test_cube_triangle(&voxel.center, voxel.half_size, &tri));
        assert_eq!(voxel.is_filled(), touches, "voxel at {:?}", voxel.center);
    }
}

#[test]
fn simple_and_optimized_agree_on_closed_meshes() {
    let mesh = common::two_boxes();
    let simple = UniformVoxelGrid::from_mesh(&mesh, 4, VoxelizationMethod::Simple).unwrap();
    let optimized =
        UniformVoxelGrid::from_mesh(&mesh, 4, VoxelizationMethod::Optimized).unwrap();

    assert_eq!(simple.resolution(), [16, 4, 6]);
    assert_eq!(simple.resolution(), optimized.resolution());

    for (a, b) in simple.voxels().iter().zip(optimized.voxels()) {
        assert_eq!(a.occupancy, b.occupancy, "voxel at {:?}", a.center);
    }

    // Columns 8..9 along x fall in the gap between the boxes.
    for y in 0..4 {
        for z in 0..6 {
            assert!(!simple.voxel(8, y, z).unwrap().is_filled());
            assert!(!simple.voxel(9, y, z).unwrap().is_filled());
        }
    }

    // Box 1: 8 x 4 x 6. Box 2: x in 10..16, z in 0..5 (only the center 1.125 < 1.2).
    assert_eq!(simple.num_filled(), 8 * 4 * 6 + 6 * 4 * 5);
}

#[test]
fn unit_cube_is_completely_filled() {
    // Many voxel centers lie on the planes of the face diagonals.
    let mesh = common::unit_cube();

    for method in [VoxelizationMethod::Simple, VoxelizationMethod::Optimized] {
        let grid = UniformVoxelGrid::from_mesh(&mesh, 4, method).unwrap();
        assert_eq!(grid.resolution(), [4, 4, 4]);
        assert_eq!(grid.num_filled(), 64, "{:?}", method);
    }
}

#[test]
fn simple_and_optimized_agree_on_a_sphere() {
    let mesh = common::uv_sphere(1.0, 6, 8);
    let simple = UniformVoxelGrid::from_mesh(&mesh, 6, VoxelizationMethod::Simple).unwrap();
    let optimized =
        UniformVoxelGrid::from_mesh(&mesh, 6, VoxelizationMethod::Optimized).unwrap();

    assert!(simple.num_filled() > 0);
    assert_eq!(simple.num_filled(), optimized.num_filled());

    for (a, b) in simple.voxels().iter().zip(optimized.voxels()) {
        assert_eq!(a.occupancy, b.occupancy, "voxel at {:?}", a.center);
    }
}

#[test]
fn a_single_triangle_encloses_nothing() {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 1.0),
    ];
    let mesh = TriMesh::from_flat_indices(vertices, &[0, 1, 2]).unwrap();

    for resolution in [2, 5, 9] {
        let grid = UniformVoxelGrid::from_mesh(&mesh, resolution, VoxelizationMethod::Simple)
            .unwrap();
        assert!(!grid.is_empty());
        assert!(grid.voxels().iter().all(|v| v.occupancy == Occupancy::Empty));
        assert!(grid.active_corners().is_empty());
    }
}

#[test]
fn failed_voxelization_keeps_the_previous_grid() {
    let mesh = common::unit_cube();
    let mut grid = UniformVoxelGrid::from_mesh(&mesh, 4, VoxelizationMethod::Surface).unwrap();

    let result = grid.voxelize_buffers(
        mesh.vertices(),
        &[0, 1, 2, 3],
        8,
        VoxelizationMethod::Optimized,
    );
    assert!(matches!(result, Err(VoxelizationError::InvalidMesh(_))));
    assert_eq!(grid.len(), 64);
    assert_eq!(grid.num_filled(), 56);
    assert_eq!(grid.method(), VoxelizationMethod::Surface);

    grid.voxelize_buffers(&[], &[], 8, VoxelizationMethod::Optimized).unwrap();
    assert_eq!(grid.len(), 64);

    let fresh = {
        let mut grid = UniformVoxelGrid::new();
        grid.voxelize_buffers(&[], &[], 8, VoxelizationMethod::Optimized).unwrap();
        grid
    };
    assert!(fresh.is_empty());
    assert_eq!(fresh.selected(), None);
}

#[test]
fn grid_dump() {
    let mesh = common::unit_cube();
    let grid = UniformVoxelGrid::from_mesh(&mesh, 2, VoxelizationMethod::Surface).unwrap();
    let dump = grid.to_string();
    let lines: Vec<_> = dump.lines().collect();

    assert_eq!(lines.len(), 1 + 2 * (1 + 2));
    assert_eq!(lines[1], "x = 0");
    assert_eq!(lines[2], "11");
    assert_eq!(lines[4], "x = 1");
}
