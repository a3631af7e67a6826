//! # scene_graph
//!
//! An in-process scene graph: [`Scene`] owns nodes keyed by
//! [`NodeId`](scene_attach::NodeId), each holding a spatial state and a set
//! of typed attachments. On top of that substrate it exposes the four
//! convenience operations host code actually reaches for:
//!
//! - [`Scene::get_or_attach`] — idempotent get-or-create typed attachment.
//! - [`Vec3Patch::apply`](scene_math::Vec3Patch::apply) — sparse vector
//!   override (re-exported from [`scene_math`]).
//! - [`Scene::reset_spatial`] — full spatial reset with optional overrides.
//! - [`set_opacity`] / [`Scene::set_opacity`] — best-effort clamped alpha
//!   write on a renderable surface.

pub mod error;
pub mod scene;
pub mod surface;

pub use error::SceneError;
pub use scene::Scene;
pub use surface::{Surface, set_opacity};

pub use scene_attach::{Attachment, NodeId};
pub use scene_math::{Color, SpatialOverrides, SpatialState, Vec3Patch};
