use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Triangle;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// The flat index buffer does not describe whole triangles.
    #[error("the index buffer contains {0} indices, which is not a multiple of 3.")]
    MalformedIndexCount(usize),
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The faulty triangle.
        triangle: u32,
        /// The vertex index it references.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
}

/// A triangle mesh given by a vertex buffer and an index buffer.
///
/// The orientation of the triangles is irrelevant to every algorithm of this crate.
/// A mesh with no vertex or no triangle is valid: it is simply empty.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    aabb: Aabb,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        for (tri_id, idx) in indices.iter().enumerate() {
            if let Some(bad) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: tri_id as u32,
                    index: *bad,
                    num_vertices: vertices.len(),
                });
            }
        }

        let aabb = if vertices.is_empty() {
            Aabb::default()
        } else {
            Aabb::from_points_ref(&vertices)
        };

        Ok(Self {
            vertices,
            indices,
            aabb,
        })
    }

    /// Creates a new triangle mesh from a flat index buffer, where each consecutive
    /// triplet of indices describes one triangle.
    pub fn from_flat_indices(
        vertices: Vec<Point<Real>>,
        flat_indices: &[u32],
    ) -> Result<Self, TriMeshBuilderError> {
        if flat_indices.len() % 3 != 0 {
            return Err(TriMeshBuilderError::MalformedIndexCount(flat_indices.len()));
        }

        let indices = flat_indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect();
        Self::new(vertices, indices)
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Does this mesh lack vertices or triangles?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// The bounding volume of the vertices of this mesh.
    ///
    /// This is a zero-sized box at the origin if the mesh has no vertex.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Get the `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len() as u32).map(move |i| self.triangle(i))
    }
}
