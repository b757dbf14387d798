use crate::math::{Point, Real, Vector};
use crate::query::{intersection_test_cube_triangle, Ray};
use crate::shape::TriMesh;
use crate::transformation::voxelization::{
    Axis, AxisOccupancy, Occupancy, UniformVoxelGrid, VoxelizationMethod,
};

impl UniformVoxelGrid {
    /// Classifies every voxel of this grid with the given method.
    ///
    /// This resets the occupancy of all the voxels but does not update the active corners.
    pub(crate) fn classify(&mut self, mesh: &TriMesh, method: VoxelizationMethod) {
        for voxel in &mut self.voxels {
            voxel.occupancy = Occupancy::Empty;
            voxel.axis_occupancy = AxisOccupancy::empty();
        }

        match method {
            VoxelizationMethod::Simple => self.classify_simple(mesh),
            VoxelizationMethod::Optimized => self.classify_optimized(mesh),
            VoxelizationMethod::Surface => self.classify_surface(mesh),
        }
    }

    /// One parity ray per voxel, cast from its center along `+x`.
    fn classify_simple(&mut self, mesh: &TriMesh) {
        for voxel in &mut self.voxels {
            if is_inside_along(mesh, &voxel.center, Axis::X) {
                voxel.occupancy = Occupancy::Filled;
            }
        }
    }

    /// One parity ray per column of voxels, for each principal axis.
    fn classify_optimized(&mut self, mesh: &TriMesh) {
        for axis in Axis::ALL {
            let i = axis.index();
            let flag = AxisOccupancy::from(axis);

            for column in 0..self.num_columns(axis) {
                let Some(first) = self.column(axis, column).next() else {
                    continue;
                };

                let mut origin = self.voxels[first].center;
                origin[i] = self.bounds.mins[i] - self.voxel_size;
                let ray = Ray::new(origin, axis.direction());

                let hits = mesh.ray_crossings(&ray);

                // The column is not closed: nothing along it is inside.
                if hits.len() % 2 != 0 {
                    continue;
                }

                let ids: Vec<usize> = self.column(axis, column).collect();
                let mut inside = false;
                let mut next_hit = 0;

                for id in ids {
                    let voxel = &mut self.voxels[id];
                    let center_toi = voxel.center[i] - origin[i];

                    while next_hit < hits.len() && hits[next_hit] < center_toi {
                        inside = !inside;
                        next_hit += 1;
                    }

                    if inside {
                        voxel.axis_occupancy |= flag;
                    }
                }
            }
        }

        for voxel in &mut self.voxels {
            if voxel.axis_occupancy.is_all() {
                voxel.occupancy = Occupancy::Filled;
            }
        }
    }

    /// Fills every voxel intersecting a triangle.
    fn classify_surface(&mut self, mesh: &TriMesh) {
        if self.voxels.is_empty() {
            return;
        }

        let half_size = self.half_size();
        let max_coords = self.resolution.map(|r| r as i64 - 1);

        for triangle in mesh.triangles() {
            // Find the range of voxels potentially intersecting the triangle.
            let aabb = triangle.local_aabb();
            let lo = self.lattice_coords(&aabb.mins).map(|e| e - 1);
            let hi = self.lattice_coords(&aabb.maxs).map(|e| e + 1);
            let lo: [i64; 3] = core::array::from_fn(|k| lo[k].clamp(0, max_coords[k]));
            let hi: [i64; 3] = core::array::from_fn(|k| hi[k].clamp(0, max_coords[k]));

            // Determine exactly what voxel intersect the triangle.
            for x in lo[0]..=hi[0] {
                for y in lo[1]..=hi[1] {
                    for z in lo[2]..=hi[2] {
                        let Some(id) = self.voxel_index(x as u32, y as u32, z as u32) else {
                            continue;
                        };
                        let voxel = &mut self.voxels[id];

                        if !voxel.is_filled()
                            && intersection_test_cube_triangle(&voxel.center, half_size, &triangle)
                        {
                            voxel.occupancy = Occupancy::Filled;
                        }
                    }
                }
            }
        }
    }

    /// The integer coordinates of the lattice cell containing `pt`.
    fn lattice_coords(&self, pt: &Point<Real>) -> [i64; 3] {
        let local: Vector<Real> = (pt - self.bounds.mins) / self.voxel_size;
        [
            local.x.floor() as i64,
            local.y.floor() as i64,
            local.z.floor() as i64,
        ]
    }
}

/// Parity test of the point `pt` along the line parallel to `axis`.
///
/// The point is inside if the ray cast toward `+axis` crosses the mesh an odd number of
/// times. Hits on an edge or a vertex shared by several triangles count as one crossing. If the whole line crosses the mesh an odd number of times, the mesh is not closed
/// along that line and the point is considered outside.
pub fn is_inside_along(mesh: &TriMesh, pt: &Point<Real>, axis: Axis) -> bool {
    let ray = Ray::new(*pt, axis.direction());
    let forward = mesh.count_ray_crossings(&ray);
    let backward = mesh.count_ray_crossings(&ray.reversed());

    (forward + backward) % 2 == 0 && forward % 2 == 1
}

#[cfg(test)]
mod test {
    use super::is_inside_along;
    use crate::math::Point;
    use crate::shape::TriMesh;
    use crate::transformation::voxelization::Axis;

    fn tetrahedron() -> TriMesh {
        let vertices = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ];
        TriMesh::from_flat_indices(vertices, &[0, 2, 1, 0, 1, 3, 0, 3, 2, 1, 2, 3]).unwrap()
    }

    #[test]
    fn parity_inside_a_tetrahedron() {
        let mesh = tetrahedron();
        let inside = Point::new(0.15, 0.2, 0.25);
        let outside = Point::new(0.6, 0.6, 0.6);

        for axis in Axis::ALL {
            assert!(is_inside_along(&mesh, &inside, axis));
            assert!(!is_inside_along(&mesh, &outside, axis));
        }
    }

    #[test]
    fn parity_of_an_open_line_is_outside() {
        let vertices = vec![
            Point::new(1.0, -1.0, -1.0),
            Point::new(1.0, 2.0, -1.0),
            Point::new(1.0, 0.0, 2.0),
        ];
        let mesh = TriMesh::from_flat_indices(vertices, &[0, 1, 2]).unwrap();
        assert!(!is_inside_along(&mesh, &Point::origin(), Axis::X));
    }
}
