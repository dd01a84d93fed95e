//! OBJ file loader for 3D models

use crate::render::{Mesh, Vertex};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading an OBJ model
#[derive(Error, Debug)]
pub enum ObjError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A record could not be parsed
    #[error("Parse error on line {line}: {message}")]
    ParseError {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },
    /// The file parsed but does not describe a usable mesh
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Loader for the subset of Wavefront OBJ the game needs
pub struct ObjLoader;

impl ObjLoader {
    /// Load an OBJ file and return a mesh
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh, ObjError> {
        let path = path.as_ref();
        let mesh = Self::parse(File::open(path)?)?;
        log::info!(
            "Loaded {} ({} vertices, {} indices)",
            path.display(),
            mesh.vertices.len(),
            mesh.indices.len()
        );
        Ok(mesh)
    }

    /// Parse OBJ text from any reader.
    ///
    /// Reads `v`, `vn`, `vt` and `f` records; faces are fan-triangulated.
    /// Other records (materials, groups, smoothing) are ignored.
    pub fn parse<R: Read>(reader: R) -> Result<Mesh, ObjError> {
        let reader = BufReader::new(reader);

        let mut positions = Vec::new();
        let mut normals = Vec::new();
        let mut tex_coords = Vec::new();
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = line_index + 1;
            let parts: Vec<&str> = line.split_whitespace().collect();

            match parts.first().copied() {
                Some("v") => positions.push(parse_floats::<3>(&parts[1..], line_number, "vertex")?),
                Some("vn") => normals.push(parse_floats::<3>(&parts[1..], line_number, "normal")?),
                Some("vt") => {
                    tex_coords.push(parse_floats::<2>(&parts[1..], line_number, "tex coord")?);
                }
                Some("f") => {
                    if parts.len() < 4 {
                        return Err(ObjError::ParseError {
                            line: line_number,
                            message: "face needs at least three vertices".to_string(),
                        });
                    }

                    let mut face_indices = Vec::with_capacity(parts.len() - 1);
                    for vertex_data in &parts[1..] {
                        let mut fields = vertex_data.split('/');
                        let position = fields
                            .next()
                            .and_then(|field| resolve_index(field, &positions))
                            .ok_or_else(|| ObjError::InvalidFormat(format!(
                                "position index '{vertex_data}' out of bounds on line {line_number}"
                            )))?;
                        let tex_coord = fields
                            .next()
                            .and_then(|field| resolve_index(field, &tex_coords))
                            .unwrap_or([0.0, 0.0]);
                        let normal = fields
                            .next()
                            .and_then(|field| resolve_index(field, &normals))
                            .unwrap_or([0.0, 1.0, 0.0]);

                        vertices.push(Vertex::new(position, normal, tex_coord));
                        face_indices.push(u32::try_from(vertices.len() - 1).map_err(|_| {
                            ObjError::InvalidFormat("too many vertices".to_string())
                        })?);
                    }

                    // Fan triangulation
                    for i in 1..(face_indices.len() - 1) {
                        indices.extend_from_slice(&[
                            face_indices[0],
                            face_indices[i],
                            face_indices[i + 1],
                        ]);
                    }
                }
                _ => {}
            }
        }

        if vertices.is_empty() {
            return Err(ObjError::InvalidFormat("No vertices found in OBJ file".to_string()));
        }

        Ok(Mesh::new(vertices, indices))
    }
}

fn parse_floats<const N: usize>(
    fields: &[&str],
    line: usize,
    what: &str,
) -> Result<[f32; N], ObjError> {
    if fields.len() < N {
        return Err(ObjError::ParseError {
            line,
            message: format!("{what} needs {N} components"),
        });
    }
    let mut values = [0.0; N];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = field.parse().map_err(|_| ObjError::ParseError {
            line,
            message: format!("invalid {what} component '{field}'"),
        })?;
    }
    Ok(values)
}

/// Resolve a 1-based OBJ index (empty field means "absent")
fn resolve_index<T: Copy>(field: &str, values: &[T]) -> Option<T> {
    let index: usize = field.parse().ok()?;
    values.get(index.checked_sub(1)?).copied()
}
