//! Scene-graph error types.

use scene_attach::NodeId;

/// Errors surfaced by scene operations that require an existing node.
///
/// Best-effort operations (surface opacity) never return these; they log a
/// warning and no-op instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SceneError {
    /// A required owning node does not exist in the scene.
    #[error("node {0} not found")]
    NodeNotFound(NodeId),
}
