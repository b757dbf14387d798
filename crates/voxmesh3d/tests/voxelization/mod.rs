mod octree;
mod surface_extraction;
mod uniform_grid;
