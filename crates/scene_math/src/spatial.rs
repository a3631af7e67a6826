//! Spatial placement state.
//!
//! [`SpatialState`] represents position, rotation, and scale in 3D space.
//! [`SpatialOverrides`] carries the optional per-field values for a reset:
//! a reset always writes all three fields, each to its override if supplied,
//! else to its identity default.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position, rotation, and scale describing a node's placement.
///
/// No invariant is enforced on rotation normalisation or scale magnitude;
/// callers are responsible for keeping quaternions unit-length, consistent
/// with the host engine's own contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpatialState {
    /// World-space position.
    pub position: Vec3,
    /// Rotation as a unit quaternion.
    pub rotation: Quat,
    /// Per-axis scale factor.
    pub scale: Vec3,
}

impl SpatialState {
    /// The identity placement: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Create a placement at the given position with default rotation/scale.
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Compute the 4×4 model matrix for this placement.
    #[must_use]
    pub fn to_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Reset this placement, with optional overrides.
    ///
    /// All three fields are written unconditionally: each takes its value
    /// from `overrides` if present, else its identity default. Supplying
    /// only a position still forces rotation and scale back to identity —
    /// this is a full reset, not a partial patch (for that, see
    /// [`Vec3Patch`](crate::patch::Vec3Patch)).
    pub fn reset(&mut self, overrides: &SpatialOverrides) {
        self.position = overrides.position.unwrap_or(Vec3::ZERO);
        self.rotation = overrides.rotation.unwrap_or(Quat::IDENTITY);
        self.scale = overrides.scale.unwrap_or(Vec3::ONE);
    }
}

impl Default for SpatialState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Optional per-field values for a spatial reset.
///
/// Each field is independently optional; a `None` field resets to its
/// identity default (zero position, identity rotation, unit scale).
///
/// # Examples
///
/// ```rust
/// use scene_math::{SpatialOverrides, SpatialState, Vec3};
///
/// let mut state = SpatialState::from_position(Vec3::splat(9.0));
/// state.reset(&SpatialOverrides::new().position(Vec3::new(1.0, 0.0, 0.0)));
/// assert_eq!(state.position, Vec3::new(1.0, 0.0, 0.0));
/// assert_eq!(state.scale, Vec3::ONE);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SpatialOverrides {
    /// Position to reset to, or `None` for the origin.
    pub position: Option<Vec3>,
    /// Rotation to reset to, or `None` for the identity rotation.
    pub rotation: Option<Quat>,
    /// Scale to reset to, or `None` for unit scale.
    pub scale: Option<Vec3>,
}

impl SpatialOverrides {
    /// Create an empty override set (full reset to identity).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the reset position.
    #[must_use]
    pub fn position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    /// Override the reset rotation.
    #[must_use]
    pub fn rotation(mut self, rotation: Quat) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Override the reset scale.
    #[must_use]
    pub fn scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }
}
