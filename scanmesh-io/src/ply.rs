//! ASCII PLY support for colored scan meshes
//!
//! The writer reproduces the exact byte layout expected by the downstream
//! mesh consumers: six-decimal vertex coordinates, colors scaled to 0..255
//! and integer-truncated, and each face emitted with its first two vertex
//! indices swapped relative to the stored triple. The reader undoes the
//! swap so a write/read pair restores the stored triangles.

use ply_rs::{
    parser::Parser,
    ply::{DefaultElement, Property},
};
use scanmesh_core::{Error, Point3f, Result, Rgb, ScanMesh};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a colored mesh to an ASCII PLY file.
///
/// The mesh is validated first; inconsistent colors or out-of-range
/// triangle indices fail fast rather than producing a corrupt file.
pub fn write_ply<P: AsRef<Path>>(mesh: &ScanMesh, path: P) -> Result<()> {
    mesh.validate()?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "element vertex {}", mesh.vertex_count())?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    writeln!(writer, "property uchar red")?;
    writeln!(writer, "property uchar green")?;
    writeln!(writer, "property uchar blue")?;
    writeln!(writer, "element face {}", mesh.face_count())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    for (p, c) in mesh.points.iter().zip(&mesh.colors) {
        let [r, g, b] = scale_color(c);
        writeln!(
            writer,
            "{:.6} {:.6} {:.6} {} {} {}",
            p.x, p.y, p.z, r, g, b
        )?;
    }

    // Downstream consumers expect the first two indices of each stored
    // triple swapped; this fixes the face winding on export.
    for &[v0, v1, v2] in &mesh.triangles {
        writeln!(writer, "3 {} {} {}", v1, v0, v2)?;
    }

    writer.flush()?;
    Ok(())
}

/// Read a colored mesh from an ASCII PLY file written by [`write_ply`].
pub fn read_ply<P: AsRef<Path>>(path: P) -> Result<ScanMesh> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let parser = Parser::<DefaultElement>::new();
    let ply = parser.read_ply(&mut reader)?;

    let mut points = Vec::new();
    let mut colors = Vec::new();
    if let Some(vertex_element) = ply.payload.get("vertex") {
        for vertex in vertex_element {
            let x = extract_float(vertex, "x")?;
            let y = extract_float(vertex, "y")?;
            let z = extract_float(vertex, "z")?;
            points.push(Point3f::new(x, y, z));

            let r = extract_uchar(vertex, "red")?;
            let g = extract_uchar(vertex, "green")?;
            let b = extract_uchar(vertex, "blue")?;
            colors.push([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]);
        }
    }

    let mut triangles = Vec::new();
    if let Some(face_element) = ply.payload.get("face") {
        for face in face_element {
            let indices = extract_face_indices(face)?;
            if indices.len() != 3 {
                return Err(Error::InvalidData(format!(
                    "expected triangular faces, found a face with {} vertices",
                    indices.len()
                )));
            }
            // Undo the export swap to recover the stored triple.
            triangles.push([indices[1], indices[0], indices[2]]);
        }
    }

    let mesh = ScanMesh {
        points,
        colors,
        triangles,
    };
    mesh.validate()?;
    Ok(mesh)
}

/// Map a [0,1] float color to 0..255, integer-truncated
fn scale_color(c: &Rgb) -> [u8; 3] {
    [
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
    ]
}

/// Extract a property value as f32 from a PLY element
fn extract_float(element: &DefaultElement, name: &str) -> Result<f32> {
    match element.get(name) {
        Some(Property::Float(val)) => Ok(*val),
        Some(Property::Double(val)) => Ok(*val as f32),
        _ => Err(Error::InvalidData(format!(
            "Property '{}' not found or invalid type",
            name
        ))),
    }
}

/// Extract a property value as u8 from a PLY element
fn extract_uchar(element: &DefaultElement, name: &str) -> Result<u8> {
    match element.get(name) {
        Some(Property::UChar(val)) => Ok(*val),
        Some(Property::Char(val)) => Ok(*val as u8),
        _ => Err(Error::InvalidData(format!(
            "Property '{}' not found or invalid type",
            name
        ))),
    }
}

/// Extract face indices from a PLY face element
fn extract_face_indices(element: &DefaultElement) -> Result<Vec<usize>> {
    match element.get("vertex_indices").or_else(|| element.get("vertex_index")) {
        Some(Property::ListInt(indices)) => Ok(indices.iter().map(|&idx| idx as usize).collect()),
        Some(Property::ListUInt(indices)) => Ok(indices.iter().map(|&idx| idx as usize).collect()),
        _ => Err(Error::InvalidData("Face indices not found".to_string())),
    }
}
