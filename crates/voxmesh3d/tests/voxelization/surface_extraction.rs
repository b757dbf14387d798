use crate::common;
use voxmesh3d::transformation::voxelization::{
    EditCommand, Representation, Voxelization, VoxelizationMethod, VoxelizationParameters,
};
use voxmesh3d::ReconstructedMesh;

fn voxelize(mesh: &voxmesh3d::shape::TriMesh, params: &VoxelizationParameters) -> Voxelization {
    let indices: Vec<u32> = mesh.indices().iter().flatten().copied().collect();
    Voxelization::voxelize(mesh.vertices(), &indices, params).unwrap()
}

fn off_header(mesh: &ReconstructedMesh) -> String {
    let mut out = Vec::new();
    mesh.write_off(&mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .nth(1)
        .unwrap()
        .to_string()
}

#[test]
fn closed_boundary_closes_the_grid_limits() {
    let mesh = common::unit_cube();
    let params = VoxelizationParameters {
        resolution: 4,
        method: VoxelizationMethod::Surface,
        ..Default::default()
    };
    let voxelization = voxelize(&mesh, &params);

    let closed = voxelization.extract_surface(true);
    let open = voxelization.extract_surface(false);
    assert!(closed.num_triangles() > open.num_triangles());

    // The surface lies within half a voxel of the grid.
    let aabb = closed.aabb().unwrap();
    let grid = voxelization.as_uniform().unwrap().grid_aabb();
    let half_size = voxelization.as_uniform().unwrap().half_size();
    assert_relative_eq!(aabb.mins, grid.mins.map(|e| e - half_size), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs, grid.maxs.map(|e| e + half_size), epsilon = 1.0e-5);
}

#[test]
fn extraction_is_idempotent_for_both_representations() {
    let mesh = common::uv_sphere(1.0, 8, 12);

    for representation in [Representation::UniformGrid, Representation::AdaptiveOctree] {
        let params = VoxelizationParameters {
            resolution: 8,
            method: VoxelizationMethod::Surface,
            representation,
            ..Default::default()
        };
        let voxelization = voxelize(&mesh, &params);
        let first = voxelization.extract_surface(true);
        let second = voxelization.extract_surface(true);

        assert!(!first.is_empty());
        assert_eq!(first.num_vertices(), 3 * first.num_triangles());
        assert_eq!(first.num_vertices(), second.num_vertices());
        assert_eq!(first.num_triangles(), second.num_triangles());
    }
}

#[test]
fn octree_and_grid_agree_on_the_cube_surface() {
    let mesh = common::unit_cube();
    let grid = voxelize(
        &mesh,
        &VoxelizationParameters {
            resolution: 4,
            method: VoxelizationMethod::Surface,
            ..Default::default()
        },
    );
    let octree = voxelize(
        &mesh,
        &VoxelizationParameters {
            resolution: 4,
            representation: Representation::AdaptiveOctree,
            ..Default::default()
        },
    );

    assert_eq!(grid.voxels().iter().filter(|v| v.is_filled()).count(), 56);
    assert_eq!(octree.voxels().len(), 56);
    assert_eq!(grid.active_corners().len(), octree.active_corners().len());
    assert_eq!(
        grid.extract_surface(true).num_triangles(),
        octree.extract_surface(true).num_triangles()
    );
}

#[test]
fn edits_change_the_extracted_surface() {
    let mesh = common::unit_cube();
    let params = VoxelizationParameters {
        resolution: 4,
        method: VoxelizationMethod::Surface,
        ..Default::default()
    };
    let mut voxelization = voxelize(&mesh, &params);
    let before = voxelization.extract_surface(true);

    let grid = voxelization.as_uniform_mut().unwrap();
    grid.apply(EditCommand::SelectAt([1, 1, 1])).unwrap();
    grid.apply(EditCommand::ToggleSelected).unwrap();
    assert!(grid.voxel(1, 1, 1).unwrap().is_filled());

    // The interior is now entirely active: the inner surface vanishes.
    let filled_interior = voxelization.extract_surface(true);
    assert_ne!(before.num_triangles(), filled_interior.num_triangles());

    let grid = voxelization.as_uniform_mut().unwrap();
    grid.apply(EditCommand::ToggleSelected).unwrap();
    let after = voxelization.extract_surface(true);
    assert_eq!(before, after);
}

#[test]
fn off_export_header() {
    let mesh = common::two_boxes();
    let voxelization = voxelize(&mesh, &VoxelizationParameters::default());
    let surface = voxelization.extract_surface(true);

    assert_eq!(
        off_header(&surface),
        format!("{} {} 0", surface.num_vertices(), surface.num_triangles())
    );
    assert_eq!(off_header(&ReconstructedMesh::new()), "0 0 0");
}
