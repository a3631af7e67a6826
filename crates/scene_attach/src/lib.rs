//! # scene_attach
//!
//! The contract between a scene and the typed capabilities living on its
//! nodes.
//!
//! This crate provides:
//!
//! - [`Attachment`] trait — typed, default-constructible node capabilities.
//! - [`NodeId`] — opaque handles to scene-owned nodes.

pub mod attachment;
pub mod node;

pub use attachment::Attachment;
pub use node::NodeId;
