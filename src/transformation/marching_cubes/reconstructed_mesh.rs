use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Error raised while exporting a [`ReconstructedMesh`].
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// The output could not be written.
    #[error("failed to write the mesh: {0}")]
    Io(#[from] io::Error),
}

/// The triangle soup produced by the marching cubes.
///
/// Every triangle owns its three vertices: vertices are never shared between triangles.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReconstructedMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl ReconstructedMesh {
    /// An empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// The vertex buffer.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer, one triplet per triangle.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The index buffer flattened into three indices per triangle.
    pub fn flat_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().flatten().copied()
    }

    /// The number of vertices of this mesh.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of triangles of this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Does this mesh have no triangle?
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The bounding box of the vertices of this mesh.
    ///
    /// Returns `None` if the mesh is empty.
    pub fn aabb(&self) -> Option<Aabb> {
        (!self.vertices.is_empty()).then(|| Aabb::from_points_ref(&self.vertices))
    }

    /// Appends a triangle with its own three vertices.
    pub fn push_triangle(&mut self, triangle: [Point<Real>; 3]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(triangle);
        self.indices.push([base, base + 1, base + 2]);
    }

    /// Consumes this mesh, returning its vertex and index buffers.
    pub fn into_buffers(self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        (self.vertices, self.indices)
    }

    /// Writes this mesh in the Object File Format.
    ///
    /// The output starts with the `OFF` keyword, then the line `V F 0`, followed by one line
    /// per vertex and one `3 i j k` line per triangle.
    pub fn write_off<W: Write>(&self, mut out: W) -> Result<(), ExportError> {
        writeln!(out, "OFF")?;
        writeln!(out, "{} {} 0", self.vertices.len(), self.indices.len())?;

        for pt in &self.vertices {
            writeln!(out, "{} {} {}", pt.x, pt.y, pt.z)?;
        }

        for [i, j, k] in &self.indices {
            writeln!(out, "3 {} {} {}", i, j, k)?;
        }

        out.flush()?;
        Ok(())
    }

    /// Outputs an Object File Format (`.off`) file at the given path.
    pub fn to_off_file(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_off(BufWriter::new(file))?;
        log::debug!(
            "Exported {} vertices and {} triangles to {}.",
            self.num_vertices(),
            self.num_triangles(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::ReconstructedMesh;
    use crate::math::Point;

    fn two_triangles() -> ReconstructedMesh {
        let mut mesh = ReconstructedMesh::new();
        mesh.push_triangle([
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ]);
        mesh.push_triangle([
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.5),
        ]);
        mesh
    }

    #[test]
    fn triangles_do_not_share_vertices() {
        let mesh = two_triangles();
        assert_eq!(mesh.num_vertices(), 6);
        assert_eq!(mesh.indices(), &[[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mesh.flat_indices().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);

        let aabb = mesh.aabb().unwrap();
        assert_eq!(aabb.mins, Point::origin());
        assert_eq!(aabb.maxs, Point::new(1.0, 1.0, 0.5));
        assert_eq!(ReconstructedMesh::new().aabb(), None);
    }

    #[test]
    fn off_output() {
        let mut out = Vec::new();
        two_triangles().write_off(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2 + 6 + 2);
        assert_eq!(lines[0], "OFF");
        assert_eq!(lines[1], "6 2 0");
        assert_eq!(lines[2], "0 0 0");
        assert_eq!(lines[7], "0 1 0.5");
        assert_eq!(lines[8], "3 0 1 2");
        assert_eq!(lines[9], "3 3 4 5");
    }

    #[test]
    fn empty_off_output() {
        let mut out = Vec::new();
        ReconstructedMesh::new().write_off(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "OFF\n0 0 0\n");
    }
}
