use crate::transformation::marching_cubes::ReconstructedMesh;
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::path::Path;

impl ReconstructedMesh {
    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_file(&self, path: impl AsRef<Path>) -> Result<(), ObjError> {
        let mut file = std::fs::File::create(path)?;

        ObjData {
            #[allow(clippy::unnecessary_cast)]
            position: self
                .vertices()
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .indices()
                        .iter()
                        .map(|tri| {
                            SimplePolygon(
                                tri.iter()
                                    .map(|i| IndexTuple(*i as usize, None, None))
                                    .collect(),
                            )
                        })
                        .collect(),
                    name: "surface".to_string(),
                    index: 0,
                    material: None,
                }],
                name: "surface".to_string(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)
    }
}
