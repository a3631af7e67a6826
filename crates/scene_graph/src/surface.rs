//! Renderable surface attachment and opacity writes.
//!
//! Opacity changes are cosmetic and best-effort: an absent surface is a
//! warning-level diagnostic and a no-op, never a hard failure. This is the
//! one deliberate exception to the hard [`NodeNotFound`](crate::SceneError)
//! contract the other node operations follow.

use tracing::warn;

use scene_attach::{Attachment, NodeId};
use scene_math::Color;

use crate::scene::Scene;

/// A renderable surface owned by a node: its colour and visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// The surface colour; opacity lives in the alpha channel.
    pub color: Color,
    /// Whether the surface is drawn at all.
    pub visible: bool,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            visible: true,
        }
    }
}

impl Attachment for Surface {
    fn type_name() -> &'static str {
        "Surface"
    }
}

/// Set a surface's opacity, clamping the value to [0, 1].
///
/// Only the alpha channel of the surface colour is written; red, green, and
/// blue are untouched. Out-of-range input is clamped silently.
///
/// If `surface` is `None` a warning is logged and nothing is mutated — no
/// error is raised.
pub fn set_opacity(surface: Option<&mut Surface>, opacity: f32) {
    match surface {
        Some(surface) => surface.color.set_alpha_clamped(opacity),
        None => warn!(opacity, "no surface to set opacity on, ignoring"),
    }
}

impl Scene {
    /// Set the opacity of a node's [`Surface`] attachment, best-effort.
    ///
    /// Both an absent node and a node without a `Surface` take the
    /// warn-and-return path; this operation never fails.
    pub fn set_opacity(&mut self, id: NodeId, opacity: f32) {
        match self.get_attachment_mut::<Surface>(id) {
            Ok(Some(surface)) => surface.color.set_alpha_clamped(opacity),
            Ok(None) => warn!(node = %id, opacity, "node has no surface, opacity change dropped"),
            Err(_) => warn!(node = %id, opacity, "node not found, opacity change dropped"),
        }
    }
}
