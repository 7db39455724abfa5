//! # scanmesh-cleanup
//!
//! Mesh cleanup for structured-light scan reconstructions.
//!
//! This crate turns a noisy triangulated point cloud into a clean surface
//! mesh: bounding-box cropping, Delaunay triangulation of the 2D camera
//! projection, edge-length triangle pruning with dense vertex renumbering,
//! and iterative neighbor-average smoothing.

pub mod filter;
pub mod triangulate;
pub mod prune;
pub mod smooth;
pub mod pipeline;

// Re-export commonly used items
pub use filter::*;
pub use triangulate::*;
pub use prune::*;
pub use smooth::*;
pub use pipeline::*;
