use std::fs;

use crate::geometry::models::{Polygon, Vertex};
use crate::geometry::vector3::Vector3;
use crate::io::traits::{MeshIOError, Model, ModelLoader};

/// Wavefront OBJ subset: vertices, vertex normals and faces. Faces accept
/// the `v`, `v/vt`, `v//vn` and `v/vt/vn` index forms; texture coordinates
/// are parsed past but not kept.
#[derive(Debug)]
pub struct ObjFile {
    polygons: Vec<Polygon>,
}

impl ObjFile {

    pub fn parse(source: &str) -> Result<Self, MeshIOError> {
        let mut vertices: Vec<Vector3> = Vec::new();
        let mut normals: Vec<Vector3> = Vec::new();
        let mut polygons = Vec::new();

        for (line_number, line) in source.lines().enumerate() {
            let mut tokens = line.split_whitespace();
            let keyword = match tokens.next() {
                Some(keyword) => keyword,
                None => continue,
            };

            match keyword {
                "#" => continue,
                "v" => vertices.push(parse_vector(&mut tokens, line_number)?),
                "vn" => normals.push(parse_vector(&mut tokens, line_number)?),
                "f" => {
                    polygons.push(parse_face(&mut tokens, &vertices, &normals, line_number)?)
                },
                "vt" | "g" | "o" | "s" | "usemtl" | "mtllib" => {
                    trace!("ignoring obj keyword {:?} on line {}", keyword, line_number + 1);
                },
                other if other.starts_with('#') => continue,
                other => {
                    return Err(MeshIOError::ParseError {
                        description: format!("unknown keyword {:?} on line {}", other, line_number + 1),
                    })
                },
            }
        }

        Ok(ObjFile { polygons })
    }
}

impl Model for ObjFile {

    fn polygons(&self) -> &Vec<Polygon> {
        &self.polygons
    }
}

pub struct ObjFileLoader {
}

impl ObjFileLoader {

    pub fn new() -> Self {
        ObjFileLoader {}
    }
}

impl ModelLoader for ObjFileLoader {

    fn load(&self, path: &str) -> Result<Box<dyn Model>, MeshIOError> {
        let source = fs::read_to_string(path).map_err(|err| MeshIOError::FailedToLoad {
            description: format!("{}: {}", path, err),
        })?;

        let model = ObjFile::parse(&source)?;
        info!("loaded obj model {} with {} polygons", path, model.polygons.len());
        Ok(Box::new(model))
    }
}

fn parse_vector<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line_number: usize,
) -> Result<Vector3, MeshIOError> {
    let mut components = [0.0; 3];
    for component in components.iter_mut() {
        let token = tokens.next().ok_or_else(|| MeshIOError::ParseError {
            description: format!("expected three components on line {}", line_number + 1),
        })?;
        *component = token.parse().map_err(|err| MeshIOError::ParseError {
            description: format!("bad number {:?} on line {}: {}", token, line_number + 1, err),
        })?;
    }

    Ok(Vector3::new(components[0], components[1], components[2]))
}

fn parse_face<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    vertices: &[Vector3],
    normals: &[Vector3],
    line_number: usize,
) -> Result<Polygon, MeshIOError> {
    let mut face_vertices = Vec::new();

    for token in tokens {
        let mut indices = token.split('/');

        let vertex_index = resolve_index(indices.next(), vertices.len(), line_number)?
            .ok_or_else(|| MeshIOError::ParseError {
                description: format!("face without vertex index on line {}", line_number + 1),
            })?;

        let _texture_index = indices.next();
        let normal_index = resolve_index(indices.next(), normals.len(), line_number)?;

        let normal = match normal_index {
            Some(index) => normals[index],
            None => Vector3::zero(),
        };

        face_vertices.push(Vertex::new(vertices[vertex_index], normal));
    }

    if face_vertices.len() < 3 {
        return Err(MeshIOError::ParseError {
            description: format!("face with fewer than three vertices on line {}", line_number + 1),
        });
    }

    Ok(Polygon::new(face_vertices))
}

/// OBJ indices are one-based; an empty slot (as in `v//vn`) is `None`.
fn resolve_index(
    token: Option<&str>,
    available: usize,
    line_number: usize,
) -> Result<Option<usize>, MeshIOError> {
    let token = match token {
        Some("") | None => return Ok(None),
        Some(token) => token,
    };

    let index: i64 = token.parse().map_err(|err| MeshIOError::ParseError {
        description: format!("bad index {:?} on line {}: {}", token, line_number + 1, err),
    })?;

    if index < 1 || index as usize > available {
        return Err(MeshIOError::ParseError {
            description: format!("index {} out of range on line {}", index, line_number + 1),
        });
    }

    Ok(Some(index as usize - 1))
}
