//! Node handles.
//!
//! A [`NodeId`] is an opaque handle into a scene's node storage. Handles are
//! minted by the scene when a node is spawned and stay unique for the scene's
//! lifetime. A handle whose node has since been despawned simply dangles:
//! lookups through it report the node as not found.

use serde::{Deserialize, Serialize};

/// Handle to a node owned by a scene.
///
/// Carries no data of its own — spatial state and attachments live in the
/// scene, keyed by this handle. Copyable, ordered, and serialisable so host
/// code can store it in whatever bookkeeping it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Reconstruct a handle from its raw value, e.g. one a host application
    /// persisted and read back.
    ///
    /// A fabricated handle that names no live node is harmless: every scene
    /// lookup treats it as a missing node.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value of this handle.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
