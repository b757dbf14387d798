use crate::common;
use voxmesh3d::query::intersection_test_aabb_triangle;
use voxmesh3d::transformation::voxelization::{AdaptiveOctree, SamplingCells};

#[test]
fn unit_cube_octree() {
    let mesh = common::unit_cube();
    let octree = AdaptiveOctree::from_mesh(&mesh, 4).unwrap();

    assert_eq!(octree.max_depth(), 2);
    assert!(octree.is_well_formed());
    assert_eq!(octree.nodes().len(), 1 + 8 + 64);
    assert_eq!(octree.leaves().count(), 64);
    assert_eq!(octree.voxels().len(), 56);

    let root = octree.root().unwrap();
    assert!(root.aabb.mins.iter().all(|e| *e < 0.0));
    assert!(root.aabb.maxs.iter().all(|e| *e > 1.0));
}

#[test]
fn octree_is_refined_along_the_surface_only() {
    let mesh = common::uv_sphere(1.0, 8, 12);
    let octree = AdaptiveOctree::from_mesh(&mesh, 16).unwrap();

    assert_eq!(octree.max_depth(), 4);
    assert!(octree.is_well_formed());
    // A full subdivision would have 8^4 leaves.
    assert!(octree.leaves().count() < 4096);

    for node in octree.nodes() {
        let touches = mesh
            .triangles()
            .any(|tri| intersection_test_aabb_triangle(&node.aabb, &tri));

        if node.is_leaf() {
            assert_eq!(node.is_filled(), touches);
            assert!(!node.is_filled() || node.depth == octree.max_depth());
        } else {
            assert!(touches);
        }
    }
}

#[test]
fn closed_boundary_sampling_surrounds_the_filled_leaves() {
    let mesh = common::two_boxes();
    let octree = AdaptiveOctree::from_mesh(&mesh, 8).unwrap();
    let cells = octree.sampling_cells(true);
    let half_size = octree.finest_half_size();

    assert!(!cells.is_empty());
    for cell in &cells {
        assert_relative_eq!(cell.half_extents().x, half_size, max_relative = 1.0e-4);
    }

    for voxel in octree.voxels() {
        assert!(cells
            .iter()
            .any(|cell| (cell.center() - voxel.center).norm() < half_size * 0.1));
    }

    let open = octree.sampling_cells(false);
    assert_eq!(open.len(), octree.leaves().count());
}

#[test]
fn octree_dump() {
    let octree = AdaptiveOctree::from_mesh(&common::unit_cube(), 2).unwrap();
    let dump = octree.to_string();
    let lines: Vec<_> = dump.lines().collect();

    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("Node [Min: "));
    assert!(lines[0].ends_with("Is Leaf: No, Filled: No, Children: 8]"));
    assert!(lines[1].starts_with("  Node"));
    assert!(lines[1].ends_with("Is Leaf: Yes, Filled: Yes, Children: 0]"));

    assert_eq!(AdaptiveOctree::default().to_string(), "Empty octree\n");
}
