//! Export and checkpointing for scanmesh meshes
//!
//! Writes cleaned meshes to ASCII PLY for downstream consumers and
//! round-trips the full mesh record through a JSON checkpoint between
//! pipeline runs.

pub mod ply;
pub mod checkpoint;

pub use ply::{read_ply, write_ply};
pub use checkpoint::{load_checkpoint, save_checkpoint};
