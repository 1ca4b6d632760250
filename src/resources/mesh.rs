use std::io::{BufReader, Cursor};

use cgmath::{InnerSpace, Vector3};

use crate::{
    data_structures::vertex::VertexNormal,
    geometry::{MeshData, uv_sphere},
    resources::load_string,
};

/// Load every model of an `.obj` file into one indexed mesh.
///
/// Faces are triangulated. Files without normals get smooth normals averaged
/// from the adjacent faces.
pub async fn load_obj(file_name: &str) -> anyhow::Result<MeshData> {
    let obj_text = load_string(file_name).await?;
    let mut obj_reader = BufReader::new(Cursor::new(obj_text));

    #[allow(deprecated)]
    let (models, _materials) = tobj::load_obj_buf_async(
        &mut obj_reader,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        |p| async move {
            match load_string(&p).await {
                Ok(mat_text) => tobj::load_mtl_buf(&mut BufReader::new(Cursor::new(mat_text))),
                Err(e) => {
                    log::warn!("Material library of {p} not found: {e}");
                    Err(tobj::LoadError::OpenFileFailed)
                }
            }
        },
    )
    .await?;

    let mut mesh = MeshData::default();
    for m in &models {
        let base = mesh.vertices.len() as u32;
        let has_normals = m.mesh.normals.len() == m.mesh.positions.len();
        mesh.vertices
            .extend((0..m.mesh.positions.len() / 3).map(|i| {
                let normal = if has_normals {
                    [
                        m.mesh.normals[i * 3],
                        m.mesh.normals[i * 3 + 1],
                        m.mesh.normals[i * 3 + 2],
                    ]
                } else {
                    [0.0; 3]
                };
                VertexNormal::new(
                    [
                        m.mesh.positions[i * 3],
                        m.mesh.positions[i * 3 + 1],
                        m.mesh.positions[i * 3 + 2],
                    ],
                    normal,
                )
            }));
        let start = mesh.indices.len();
        mesh.indices
            .extend(m.mesh.indices.iter().map(|index| index + base));
        if !has_normals {
            accumulate_normals(&mut mesh.vertices, &mesh.indices[start..]);
        }
    }

    if mesh.indices.is_empty() {
        anyhow::bail!("{file_name} contains no faces");
    }
    Ok(mesh)
}

/// Sum up the face normals of every triangle at its corners and normalize.
fn accumulate_normals(vertices: &mut [VertexNormal], indices: &[u32]) {
    for c in indices.chunks_exact(3) {
        let [a, b, d] = [c[0], c[1], c[2]].map(|i| Vector3::from(vertices[i as usize].position));
        let face = (b - a).cross(d - a);
        for i in c {
            let v = &mut vertices[*i as usize];
            v.normal = (Vector3::from(v.normal) + face).into();
        }
    }
    for v in vertices.iter_mut() {
        let normal = Vector3::from(v.normal);
        if normal.magnitude2() > 0.0 {
            v.normal = normal.normalize().into();
        }
    }
}

/// [`load_obj`], or a generated unit sphere if the file cannot be used.
pub async fn load_obj_or_sphere(file_name: &str) -> MeshData {
    match load_obj(file_name).await {
        Ok(mesh) => mesh,
        Err(e) => {
            log::warn!("Using a generated sphere instead of {file_name}: {e:#}");
            uv_sphere(1.0, 32, 16)
        }
    }
}
