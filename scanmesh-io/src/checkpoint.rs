//! JSON checkpointing of cleaned meshes
//!
//! A checkpoint stores the full mesh record (points, triangles, colors) so
//! a capture session can be cleaned once and re-exported later without
//! rerunning reconstruction. The format is internal, not a compatibility
//! surface.

use scanmesh_core::{Error, Result, ScanMesh};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Save a mesh checkpoint to `path`.
pub fn save_checkpoint<P: AsRef<Path>>(mesh: &ScanMesh, path: P) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer(writer, mesh)
        .map_err(|e| Error::Serialization(format!("failed to write mesh checkpoint: {}", e)))
}

/// Load a mesh checkpoint written by [`save_checkpoint`].
pub fn load_checkpoint<P: AsRef<Path>>(path: P) -> Result<ScanMesh> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mesh: ScanMesh = serde_json::from_reader(reader)
        .map_err(|e| Error::Serialization(format!("failed to read mesh checkpoint: {}", e)))?;
    mesh.validate()?;
    Ok(mesh)
}
