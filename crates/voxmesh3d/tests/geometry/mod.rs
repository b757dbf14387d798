mod trimesh_ray_parity;
mod voxel_triangle_sat;
