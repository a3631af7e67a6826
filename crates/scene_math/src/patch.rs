//! Sparse component overrides for vectors.
//!
//! A [`Vec3Patch`] names up to three component values to replace; applying
//! it copies unnamed components from the input unchanged. Contrast with
//! [`SpatialState::reset`](crate::spatial::SpatialState::reset), which
//! defaults unnamed fields instead of preserving them.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A sparse override of the components of a [`Vec3`].
///
/// Each component is independently optional. Applying the patch is pure:
/// the input vector is never mutated.
///
/// # Examples
///
/// ```rust
/// use scene_math::{Vec3, Vec3Patch};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// let patched = Vec3Patch::new().y(9.0).apply(v);
/// assert_eq!(patched, Vec3::new(1.0, 9.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec3Patch {
    /// Replacement x component, or `None` to keep the input's.
    pub x: Option<f32>,
    /// Replacement y component, or `None` to keep the input's.
    pub y: Option<f32>,
    /// Replacement z component, or `None` to keep the input's.
    pub z: Option<f32>,
}

impl Vec3Patch {
    /// Create an empty patch. Applying it returns the input unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the x component.
    #[must_use]
    pub fn x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }

    /// Override the y component.
    #[must_use]
    pub fn y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    /// Override the z component.
    #[must_use]
    pub fn z(mut self, z: f32) -> Self {
        self.z = Some(z);
        self
    }

    /// Returns `true` if the patch overrides no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }

    /// Apply the patch to a vector, returning a new vector.
    ///
    /// Each output component is the patch's value if present, else the
    /// corresponding component of `v`.
    #[must_use]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.x.unwrap_or(v.x),
            self.y.unwrap_or(v.y),
            self.z.unwrap_or(v.z),
        )
    }
}
