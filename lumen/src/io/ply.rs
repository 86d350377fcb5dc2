use std::fs;

use crate::geometry::models::{Polygon, Vertex};
use crate::geometry::vector3::Vector3;
use crate::io::traits::{MeshIOError, Model, ModelLoader};

/// ASCII PLY subset, enough for scanned meshes like the Stanford bunny:
/// a vertex element whose first three properties are x/y/z, and a face
/// element of vertex index lists.
#[derive(Debug)]
pub struct PlyFile {
    polygons: Vec<Polygon>,
}

impl PlyFile {

    pub fn parse(source: &str) -> Result<Self, MeshIOError> {
        let mut lines = source.lines();

        match lines.next() {
            Some(line) if line.trim() == "ply" => {},
            _ => {
                return Err(MeshIOError::ParseError {
                    description: "not a ply file: missing magic line".to_string(),
                })
            },
        }

        let mut vertex_count = 0usize;
        let mut face_count = 0usize;
        let mut is_ascii = false;

        // header
        loop {
            let line = lines.next().ok_or_else(|| MeshIOError::ParseError {
                description: "unexpected end of header".to_string(),
            })?;
            let line = line.trim();

            if line == "end_header" {
                break;
            } else if line.starts_with("format") {
                is_ascii = line.starts_with("format ascii");
            } else if line.starts_with("element vertex") {
                vertex_count = parse_count(line)?;
            } else if line.starts_with("element face") {
                face_count = parse_count(line)?;
            }
            // property declarations and comments are accepted as-is
        }

        if !is_ascii {
            return Err(MeshIOError::ParseError {
                description: "only ascii ply is supported".to_string(),
            });
        }

        let mut vertices = Vec::with_capacity(vertex_count);
        for _ in 0..vertex_count {
            let line = lines.next().ok_or_else(|| MeshIOError::ParseError {
                description: "unexpected end of vertex list".to_string(),
            })?;

            let mut components = line.split_whitespace();
            let mut point = [0.0; 3];
            for component in point.iter_mut() {
                let token = components.next().ok_or_else(|| MeshIOError::ParseError {
                    description: format!("vertex line with fewer than three values: {:?}", line),
                })?;
                *component = token.parse().map_err(|err| MeshIOError::ParseError {
                    description: format!("bad vertex value {:?}: {}", token, err),
                })?;
            }
            vertices.push(Vector3::new(point[0], point[1], point[2]));
        }

        let mut polygons = Vec::with_capacity(face_count);
        for _ in 0..face_count {
            let line = lines.next().ok_or_else(|| MeshIOError::ParseError {
                description: "unexpected end of face list".to_string(),
            })?;

            let mut tokens = line.split_whitespace();
            let arity: usize = tokens
                .next()
                .ok_or_else(|| MeshIOError::ParseError {
                    description: "empty face line".to_string(),
                })?
                .parse()
                .map_err(|err| MeshIOError::ParseError {
                    description: format!("bad face arity: {}", err),
                })?;

            if arity < 3 {
                warn!("skipping degenerate ply face: {:?}", line);
                continue;
            }

            let mut face_vertices = Vec::with_capacity(arity);
            for _ in 0..arity {
                let token = tokens.next().ok_or_else(|| MeshIOError::ParseError {
                    description: format!("face line shorter than its arity: {:?}", line),
                })?;
                let index: usize = token.parse().map_err(|err| MeshIOError::ParseError {
                    description: format!("bad face index {:?}: {}", token, err),
                })?;
                if index >= vertices.len() {
                    return Err(MeshIOError::ParseError {
                        description: format!("face index {} out of range", index),
                    });
                }
                face_vertices.push(Vertex::new(vertices[index], Vector3::zero()));
            }

            polygons.push(Polygon::new(face_vertices));
        }

        Ok(PlyFile { polygons })
    }
}

impl Model for PlyFile {

    fn polygons(&self) -> &Vec<Polygon> {
        &self.polygons
    }
}

pub struct PlyFileLoader {
}

impl PlyFileLoader {

    pub fn new() -> Self {
        PlyFileLoader {}
    }
}

impl ModelLoader for PlyFileLoader {

    fn load(&self, path: &str) -> Result<Box<dyn Model>, MeshIOError> {
        let source = fs::read_to_string(path).map_err(|err| MeshIOError::FailedToLoad {
            description: format!("{}: {}", path, err),
        })?;

        let model = PlyFile::parse(&source)?;
        info!("loaded ply model {} with {} polygons", path, model.polygons.len());
        Ok(Box::new(model))
    }
}

fn parse_count(line: &str) -> Result<usize, MeshIOError> {
    line.split_whitespace()
        .last()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| MeshIOError::ParseError {
            description: format!("bad element count line: {:?}", line),
        })
}
