//! Core [`Attachment`] trait.
//!
//! An attachment is a typed capability object owned by exactly one node. The
//! scene stores attachments type-erased and keys them by the concrete Rust
//! type ([`TypeId`](std::any::TypeId)), so type identity is free and cannot
//! collide. The string name is for diagnostics only — it shows up in log
//! output, never in lookups.
//!
//! `Default` is the creation contract: when a node lacks an attachment of a
//! requested type, the resolver constructs the default instance and attaches
//! it.

use std::any::Any;

/// A typed capability that can live on a scene node.
///
/// The `Any + Send + Sync` bounds let the scene hold attachments behind
/// type-erased boxes; [`Default`] is what the get-or-attach resolver
/// constructs on the creation path.
///
/// # Examples
///
/// ```rust
/// use scene_attach::Attachment;
///
/// #[derive(Debug, Default)]
/// struct AudioSource {
///     volume: f32,
/// }
///
/// impl Attachment for AudioSource {
///     fn type_name() -> &'static str { "AudioSource" }
/// }
/// ```
pub trait Attachment: Any + Send + Sync + 'static + Default {
    /// A human-readable name for this attachment type, used in log output.
    ///
    /// Purely diagnostic: lookups go through the Rust type, so two
    /// attachment types may even share a name without colliding.
    fn type_name() -> &'static str;
}
