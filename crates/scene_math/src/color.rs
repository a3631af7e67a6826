//! RGBA colour value type.

use serde::{Deserialize, Serialize};

/// A four-channel colour with `f32` channels in [0, 1].
///
/// Channel ranges are by convention only; the one place this type clamps is
/// [`Color::set_alpha_clamped`], because opacity writes are specified as
/// best-effort and must never fail on out-of-range input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel (0 = fully transparent, 1 = fully opaque).
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create an opaque colour from red/green/blue channels.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Overwrite the alpha channel, clamping the input to [0, 1].
    ///
    /// Out-of-range input is clamped silently — no error is raised. The
    /// other channels are untouched.
    pub fn set_alpha_clamped(&mut self, alpha: f32) {
        self.a = alpha.clamp(0.0, 1.0);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
