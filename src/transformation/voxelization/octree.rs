use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::consts::{CORNER_EPSILON_RATIO, OCTREE_LOOSENING_RATIO};
use crate::query::intersection_test_aabb_triangle;
use crate::shape::TriMesh;
use crate::transformation::voxelization::{
    ActiveCornerSet, Occupancy, SamplingCells, Voxel, VoxelizationError,
};
use crate::utils::hashset::HashSet;
use core::fmt;

/// The content of an octree node.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OctreeNodeKind {
    /// A node without children.
    Leaf(Occupancy),
    /// A node split into eight octants, given as indices into the node arena.
    ///
    /// The child `i` lies on the upper half of the `x` axis if `i & 1 != 0`, of the `y` axis
    /// if `i & 2 != 0`, and of the `z` axis if `i & 4 != 0`.
    Internal([u32; 8]),
}

/// A node of an [`AdaptiveOctree`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OctreeNode {
    /// The box covered by this node.
    pub aabb: Aabb,
    /// The depth of this node (the root has depth 0).
    pub depth: u32,
    /// Whether this node is a leaf or has children.
    pub kind: OctreeNodeKind,
}

impl OctreeNode {
    fn leaf(aabb: Aabb, depth: u32) -> Self {
        Self {
            aabb,
            depth,
            kind: OctreeNodeKind::Leaf(Occupancy::Empty),
        }
    }

    /// Does this node have no children?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, OctreeNodeKind::Leaf(_))
    }

    /// Is this node a leaf intersecting the mesh at the maximum depth?
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.kind == OctreeNodeKind::Leaf(Occupancy::Filled)
    }

    /// The indices of the children of this node, if it has any.
    #[inline]
    pub fn children(&self) -> Option<&[u32; 8]> {
        match &self.kind {
            OctreeNodeKind::Internal(children) => Some(children),
            OctreeNodeKind::Leaf(_) => None,
        }
    }
}

/// A sparse octree refined only where it intersects a triangle mesh.
///
/// A node intersecting no triangle is an empty leaf. A node intersecting a triangle is split
/// into eight octants until the maximum depth is reached, where it becomes a filled leaf.
/// The nodes are stored in an arena, the root being the first node.
///
/// The root is the smallest cube containing the mesh bounding box, slightly enlarged, so
/// that all the leaves of a given depth are cubes of the same size.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct AdaptiveOctree {
    nodes: Vec<OctreeNode>,
    max_depth: u32,
    voxels: Vec<Voxel>,
    corners: ActiveCornerSet,
}

impl AdaptiveOctree {
    /// Builds the octree of the given mesh with the depth matching `resolution`
    /// (`ceil(log2(resolution))`).
    pub fn from_mesh(mesh: &TriMesh, resolution: u32) -> Result<Self, VoxelizationError> {
        if resolution < 2 {
            log::error!("Cannot voxelize with a resolution of {}.", resolution);
            return Err(VoxelizationError::InvalidResolution(resolution));
        }

        let max_depth = u32::BITS - (resolution - 1).leading_zeros();
        Ok(Self::build(mesh, max_depth))
    }

    /// Builds the octree of the given mesh, subdividing at most `max_depth` times.
    ///
    /// An empty mesh, or a mesh reduced to a point, yields an octree without any node.
    pub fn build(mesh: &TriMesh, max_depth: u32) -> Self {
        let bounds = mesh.local_aabb();

        if mesh.is_empty() || bounds.extents().max() <= 0.0 {
            log::debug!("Octree of an empty mesh: nothing to do.");
            return Self::default();
        }

        let cube = bounds.bounding_cube();
        let root = cube.loosened(cube.extents().x * OCTREE_LOOSENING_RATIO);
        let mut nodes = vec![OctreeNode::leaf(root, 0)];
        let all_triangles: Vec<u32> = (0..mesh.num_triangles() as u32).collect();
        let mut stack = vec![(0u32, all_triangles)];

        while let Some((id, candidates)) = stack.pop() {
            let node = nodes[id as usize];

            // Only the triangles intersecting the parent can intersect its children.
            let hits: Vec<u32> = candidates
                .into_iter()
                .filter(|tri| intersection_test_aabb_triangle(&node.aabb, &mesh.triangle(*tri)))
                .collect();

            if hits.is_empty() {
                nodes[id as usize].kind = OctreeNodeKind::Leaf(Occupancy::Empty);
                continue;
            }

            if node.depth >= max_depth {
                nodes[id as usize].kind = OctreeNodeKind::Leaf(Occupancy::Filled);
                continue;
            }

            let first = nodes.len() as u32;
            let children = core::array::from_fn(|k| first + k as u32);

            for octant in node.aabb.split_at_center() {
                nodes.push(OctreeNode::leaf(octant, node.depth + 1));
            }

            nodes[id as usize].kind = OctreeNodeKind::Internal(children);

            for child in children.iter().rev() {
                stack.push((*child, hits.clone()));
            }
        }

        let mut result = Self {
            nodes,
            max_depth,
            voxels: Vec::new(),
            corners: ActiveCornerSet::default(),
        };
        result.flatten();

        log::debug!(
            "Built an octree of depth {}: {} nodes, {} leaves, {} filled leaves.",
            max_depth,
            result.nodes.len(),
            result.leaves().count(),
            result.voxels.len()
        );

        result
    }

    /// Collects the filled leaves into voxels, and their corners into the active-corner set.
    fn flatten(&mut self) {
        self.corners = ActiveCornerSet::new(CORNER_EPSILON_RATIO * self.finest_half_size());
        self.voxels = self
            .nodes
            .iter()
            .filter(|node| node.is_filled())
            .map(|node| {
                let mut voxel = Voxel::new(node.aabb.center(), node.aabb.half_extents().x);
                voxel.occupancy = Occupancy::Filled;
                voxel
            })
            .collect();

        for voxel in &self.voxels {
            self.corners.insert_cell(&voxel.aabb());
        }

        for voxel in &mut self.voxels {
            voxel.corner_activation = self.corners.cell_activation(&voxel.aabb());
        }
    }

    /// The nodes of this octree. The root, if any, is the first node.
    #[inline]
    pub fn nodes(&self) -> &[OctreeNode] {
        &self.nodes
    }

    /// The root of this octree, if it has been built from a non-empty mesh.
    #[inline]
    pub fn root(&self) -> Option<&OctreeNode> {
        self.nodes.first()
    }

    /// The maximum depth of the leaves.
    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// The half-size of the leaves at the maximum depth.
    pub fn finest_half_size(&self) -> Real {
        self.root()
            .map(|root| root.aabb.half_extents().x / (1u64 << self.max_depth.min(63)) as Real)
            .unwrap_or(0.0)
    }

    /// Iterates through the leaves of this octree.
    pub fn leaves(&self) -> impl Iterator<Item = &OctreeNode> {
        self.nodes.iter().filter(|node| node.is_leaf())
    }

    /// The filled leaves of this octree, as voxels.
    #[inline]
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// The corners of all the filled leaves.
    #[inline]
    pub fn active_corners(&self) -> &ActiveCornerSet {
        &self.corners
    }

    /// Checks the structural invariants of this octree.
    ///
    /// Every node must be either a leaf, or have exactly eight children partitioning its box
    /// along its three mid-planes. Every node except the root must have exactly one parent.
    pub fn is_well_formed(&self) -> bool {
        let mut parents = vec![0u32; self.nodes.len()];

        for (id, node) in self.nodes.iter().enumerate() {
            let Some(children) = node.children() else {
                continue;
            };

            let octants = node.aabb.split_at_center();

            for (child, octant) in children.iter().zip(octants.iter()) {
                let child = *child as usize;

                let Some(child_node) = self.nodes.get(child) else {
                    return false;
                };

                if child <= id || child_node.aabb != *octant || child_node.depth != node.depth + 1
                {
                    return false;
                }

                parents[child] += 1;
            }
        }

        parents
            .iter()
            .enumerate()
            .all(|(id, count)| if id == 0 { *count == 0 } else { *count == 1 })
    }

    /// The integer coordinates, on the lattice of the finest leaves, of the cell centered
    /// at `center`.
    fn finest_cell_key(&self, root_mins: &Point<Real>, center: &Point<Real>) -> [i64; 3] {
        let cell_size = self.finest_half_size() * 2.0;
        let local = (center - root_mins) / cell_size;
        [
            (local.x - 0.5).round() as i64,
            (local.y - 0.5).round() as i64,
            (local.z - 0.5).round() as i64,
        ]
    }
}

impl SamplingCells for AdaptiveOctree {
    fn sampling_cells(&self, closed_boundary: bool) -> Vec<Aabb> {
        let Some(root) = self.root() else {
            return Vec::new();
        };

        if !closed_boundary {
            return self.leaves().map(|leaf| leaf.aabb).collect();
        }

        // The filled leaves and their 26-neighborhood on the lattice of the finest leaves.
        let mut keys = HashSet::default();

        for voxel in &self.voxels {
            let key = self.finest_cell_key(&root.aabb.mins, &voxel.center);

            for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        let _ = keys.insert([key[0] + dx, key[1] + dy, key[2] + dz]);
                    }
                }
            }
        }

        let cell_size = self.finest_half_size() * 2.0;
        let mut keys: Vec<[i64; 3]> = keys.into_iter().collect();
        keys.sort_unstable();

        keys.into_iter()
            .map(|key| {
                let shift = Vector::new(key[0] as Real, key[1] as Real, key[2] as Real);
                let mins = root.aabb.mins + shift * cell_size;
                Aabb::new(mins, mins + Vector::repeat(cell_size))
            })
            .collect()
    }

    #[inline]
    fn is_corner_active(&self, point: &Point<Real>) -> bool {
        self.corners.contains(point)
    }
}

impl fmt::Display for AdaptiveOctree {
    /// Prints one line per node, in depth-first order, indented by depth.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.nodes.is_empty() {
            return writeln!(f, "Empty octree");
        }

        let mut stack = vec![0u32];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id as usize];
            let (mins, maxs) = (node.aabb.mins, node.aabb.maxs);
            let num_children = node.children().map(|c| c.len()).unwrap_or(0);

            writeln!(
                f,
                "{:indent$}Node [Min: ({}, {}, {}), Max: ({}, {}, {}), Is Leaf: {}, Filled: {}, Children: {}]",
                "",
                mins.x,
                mins.y,
                mins.z,
                maxs.x,
                maxs.y,
                maxs.z,
                if node.is_leaf() { "Yes" } else { "No" },
                if node.is_filled() { "Yes" } else { "No" },
                num_children,
                indent = node.depth as usize * 2
            )?;

            if let Some(children) = node.children() {
                stack.extend(children.iter().rev());
            }
        }

        Ok(())
    }
}
