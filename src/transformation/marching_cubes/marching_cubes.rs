use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::transformation::marching_cubes::tables::{EDGE_CORNERS, TRI_TABLE};
use crate::transformation::marching_cubes::ReconstructedMesh;
use crate::transformation::voxelization::SamplingCells;
use arrayvec::ArrayVec;

/// The triangles of the marching-cubes case `cube_index`, as triplets of edge indices.
///
/// The cases `0` and `255` have no triangle.
pub fn cube_triangles(cube_index: u8) -> ArrayVec<[usize; 3], 5> {
    TRI_TABLE[cube_index as usize]
        .chunks_exact(3)
        .take_while(|tri| tri[0] >= 0)
        .map(|tri| [tri[0] as usize, tri[1] as usize, tri[2] as usize])
        .collect()
}

/// Reconstructs a surface from the active corners of `cells`.
///
/// Every sampling cell emits the triangles of its marching-cubes case, with vertices at the
/// midpoints of the cut edges. Vertices are not shared between triangles nor between cells.
pub fn extract_surface<S: SamplingCells + ?Sized>(
    cells: &S,
    closed_boundary: bool,
) -> ReconstructedMesh {
    let mut result = ReconstructedMesh::new();
    let sampling_cells = cells.sampling_cells(closed_boundary);
    let mut num_crossed_cells = 0;

    for cell in &sampling_cells {
        let cube_index = cells.cube_index(cell);

        if cube_index == 0 || cube_index == 0xff {
            continue;
        }

        num_crossed_cells += 1;
        polygonize_cell(cell, cube_index, &mut result);
    }

    log::debug!(
        "Marching cubes: {} sampling cells, {} crossing the surface, {} triangles.",
        sampling_cells.len(),
        num_crossed_cells,
        result.num_triangles()
    );

    result
}

fn polygonize_cell(cell: &Aabb, cube_index: u8, out: &mut ReconstructedMesh) {
    let corners = cell.vertices();
    let midpoint = |edge: usize| -> Point<Real> {
        let [a, b] = EDGE_CORNERS[edge];
        na::center(&corners[a], &corners[b])
    };

    for [e1, e2, e3] in cube_triangles(cube_index) {
        out.push_triangle([midpoint(e1), midpoint(e2), midpoint(e3)]);
    }
}
