//! # scene_math
//!
//! Value types for the scene-graph utility workspace. Re-exports [`glam`]
//! for linear algebra and defines the spatial, patch, and colour types the
//! scene operations work over.

pub mod color;
pub mod patch;
pub mod spatial;

// Re-export glam types for convenience.
pub use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

pub use color::Color;
pub use patch::Vec3Patch;
pub use spatial::{SpatialOverrides, SpatialState};
