//! Core data structures for scanmesh
//!
//! This crate provides the fundamental types for the scan cleanup pipeline:
//! index-aligned scan clouds, colored triangle meshes, and bounding volumes.

pub mod point;
pub mod cloud;
pub mod mesh;
pub mod bounds;
pub mod error;

pub use point::*;
pub use cloud::*;
pub use mesh::*;
pub use bounds::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3, Vector3};

/// Common result type for scanmesh operations
pub type Result<T> = std::result::Result<T, Error>;
