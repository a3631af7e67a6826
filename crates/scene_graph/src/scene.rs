//! Scene storage and the node-level operations.
//!
//! The [`Scene`] is the single owner of node data. Nodes are created and
//! destroyed only through it; the convenience operations mutate fields of
//! nodes it already owns.
//!
//! Attachments are stored type-erased, keyed by the concrete Rust type via
//! [`TypeId`]. Only the typed accessors below ever insert into the map, each
//! under its own `T`, so a stored box always downcasts to the type it was
//! keyed by.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use tracing::debug;

use scene_attach::{Attachment, NodeId};
use scene_math::{SpatialOverrides, SpatialState};

use crate::error::SceneError;

/// A single node's data: spatial placement plus typed attachments.
///
/// Every node is spatial — the [`SpatialState`] is built in rather than being
/// an attachment, matching the host-engine model where placement always
/// exists. The attachment map holds at most one instance per type; the map
/// key is the type itself, so uniqueness is structural.
#[derive(Default)]
struct Node {
    spatial: SpatialState,
    attachments: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

/// The scene graph: node storage and the operations host code calls.
#[derive(Default)]
pub struct Scene {
    /// Last minted handle value; handles are never reused within a scene.
    last_id: u64,
    nodes: HashMap<NodeId, Node>,
}

impl Scene {
    /// Create a new empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Node lifecycle --

    /// Create a new node at the identity placement with no attachments.
    pub fn spawn(&mut self) -> NodeId {
        self.last_id += 1;
        let id = NodeId::from_raw(self.last_id);
        self.nodes.insert(id, Node::default());
        id
    }

    /// Destroy a node, dropping all its attachments.
    ///
    /// Returns `true` if the node existed and was removed.
    pub fn despawn(&mut self, id: NodeId) -> bool {
        self.nodes.remove(&id).is_some()
    }

    /// Check if a node exists.
    #[must_use]
    pub fn exists(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // -- Spatial state --

    /// Returns a node's spatial state.
    ///
    /// # Errors
    ///
    /// [`SceneError::NodeNotFound`] if the node does not exist.
    pub fn spatial(&self, id: NodeId) -> Result<&SpatialState, SceneError> {
        self.nodes
            .get(&id)
            .map(|node| &node.spatial)
            .ok_or(SceneError::NodeNotFound(id))
    }

    /// Returns a node's spatial state mutably.
    ///
    /// # Errors
    ///
    /// [`SceneError::NodeNotFound`] if the node does not exist.
    pub fn spatial_mut(&mut self, id: NodeId) -> Result<&mut SpatialState, SceneError> {
        self.nodes
            .get_mut(&id)
            .map(|node| &mut node.spatial)
            .ok_or(SceneError::NodeNotFound(id))
    }

    /// Reset a node's spatial state, with optional overrides.
    ///
    /// Writes all three fields unconditionally: each takes its override if
    /// supplied, else its identity default. Passing empty overrides resets
    /// the node fully to the identity placement.
    ///
    /// # Errors
    ///
    /// [`SceneError::NodeNotFound`] if the node does not exist. An absent
    /// owning node is a hard failure here, unlike the best-effort
    /// [`Scene::set_opacity`] path.
    pub fn reset_spatial(
        &mut self,
        id: NodeId,
        overrides: &SpatialOverrides,
    ) -> Result<(), SceneError> {
        self.spatial_mut(id)?.reset(overrides);
        Ok(())
    }

    // -- Typed attachments --

    /// Look up a node's attachment of type `T`.
    ///
    /// Returns `Ok(None)` if the node exists but has no `T` attachment.
    ///
    /// # Errors
    ///
    /// [`SceneError::NodeNotFound`] if the node does not exist.
    pub fn get_attachment<T: Attachment>(&self, id: NodeId) -> Result<Option<&T>, SceneError> {
        let node = self.nodes.get(&id).ok_or(SceneError::NodeNotFound(id))?;
        Ok(node.attachments.get(&TypeId::of::<T>()).map(|boxed| {
            boxed
                .downcast_ref::<T>()
                .expect("attachment stored under its own TypeId")
        }))
    }

    /// Look up a node's attachment of type `T` mutably.
    ///
    /// # Errors
    ///
    /// [`SceneError::NodeNotFound`] if the node does not exist.
    pub fn get_attachment_mut<T: Attachment>(
        &mut self,
        id: NodeId,
    ) -> Result<Option<&mut T>, SceneError> {
        let node = self.nodes.get_mut(&id).ok_or(SceneError::NodeNotFound(id))?;
        Ok(node.attachments.get_mut(&TypeId::of::<T>()).map(|boxed| {
            boxed
                .downcast_mut::<T>()
                .expect("attachment stored under its own TypeId")
        }))
    }

    /// Get a node's attachment of type `T`, creating it if absent.
    ///
    /// If the node already has a `T` attachment it is returned unchanged —
    /// no side effect. Otherwise a `T::default()` is constructed, attached,
    /// and returned. Idempotent with respect to attachment identity:
    /// repeated calls return the same stored instance and never create
    /// duplicates; the attachment set is mutated exactly once, only on the
    /// creation path.
    ///
    /// # Errors
    ///
    /// [`SceneError::NodeNotFound`] if the node does not exist.
    pub fn get_or_attach<T: Attachment>(&mut self, id: NodeId) -> Result<&mut T, SceneError> {
        let node = self.nodes.get_mut(&id).ok_or(SceneError::NodeNotFound(id))?;
        let boxed = node
            .attachments
            .entry(TypeId::of::<T>())
            .or_insert_with(|| {
                debug!(node = %id, attachment = T::type_name(), "attaching default instance");
                Box::new(T::default())
            });
        Ok(boxed
            .downcast_mut::<T>()
            .expect("attachment stored under its own TypeId"))
    }

    /// Check whether a node has an attachment of type `T`.
    ///
    /// Returns `false` for a missing node as well.
    #[must_use]
    pub fn has_attachment<T: Attachment>(&self, id: NodeId) -> bool {
        self.nodes
            .get(&id)
            .is_some_and(|node| node.attachments.contains_key(&TypeId::of::<T>()))
    }

    /// Returns the number of attachments on a node (0 for a missing node).
    #[must_use]
    pub fn attachment_count(&self, id: NodeId) -> usize {
        self.nodes
            .get(&id)
            .map_or(0, |node| node.attachments.len())
    }
}

#[cfg(test)]
mod tests {
    use scene_math::{Quat, Vec3};

    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Spin {
        speed: f32,
    }

    impl Attachment for Spin {
        fn type_name() -> &'static str {
            "Spin"
        }
    }

    #[test]
    fn test_spawn_and_despawn() {
        let mut scene = Scene::new();
        let id = scene.spawn();
        assert!(scene.exists(id));
        assert_eq!(scene.node_count(), 1);
        assert!(scene.despawn(id));
        assert!(!scene.exists(id));
        assert!(!scene.despawn(id));
    }

    #[test]
    fn test_spawned_node_starts_at_identity() {
        let mut scene = Scene::new();
        let id = scene.spawn();
        assert_eq!(*scene.spatial(id).unwrap(), SpatialState::IDENTITY);
    }

    #[test]
    fn test_get_or_attach_creates_default_on_first_call() {
        let mut scene = Scene::new();
        let id = scene.spawn();
        assert!(!scene.has_attachment::<Spin>(id));

        let spin = scene.get_or_attach::<Spin>(id).unwrap();
        assert_eq!(*spin, Spin::default());
        assert!(scene.has_attachment::<Spin>(id));
    }

    #[test]
    fn test_get_or_attach_is_idempotent() {
        let mut scene = Scene::new();
        let id = scene.spawn();

        // Mutate through the first resolution; the second must observe it,
        // proving both calls reach the same stored instance.
        scene.get_or_attach::<Spin>(id).unwrap().speed = 3.5;
        assert_eq!(scene.get_or_attach::<Spin>(id).unwrap().speed, 3.5);
        assert_eq!(scene.attachment_count(id), 1);
    }

    #[test]
    fn test_get_or_attach_missing_node_fails() {
        let mut scene = Scene::new();
        let err = scene.get_or_attach::<Spin>(NodeId::from_raw(99)).unwrap_err();
        assert_eq!(err, SceneError::NodeNotFound(NodeId::from_raw(99)));
    }

    #[test]
    fn test_same_named_attachment_types_stay_distinct() {
        // Storage is keyed by the Rust type, not the diagnostic name, so
        // two attachment types sharing a name never collide or shadow each
        // other.
        #[derive(Debug, Default)]
        struct TintA {
            value: f32,
        }
        #[derive(Debug, Default)]
        struct TintB {
            value: f32,
        }
        impl Attachment for TintA {
            fn type_name() -> &'static str {
                "Tint"
            }
        }
        impl Attachment for TintB {
            fn type_name() -> &'static str {
                "Tint"
            }
        }

        let mut scene = Scene::new();
        let id = scene.spawn();
        scene.get_or_attach::<TintA>(id).unwrap().value = 1.0;
        scene.get_or_attach::<TintB>(id).unwrap().value = 2.0;

        assert_eq!(scene.attachment_count(id), 2);
        assert_eq!(scene.get_attachment::<TintA>(id).unwrap().unwrap().value, 1.0);
        assert_eq!(scene.get_attachment::<TintB>(id).unwrap().unwrap().value, 2.0);
    }

    #[test]
    fn test_get_attachment_absent_is_none() {
        let mut scene = Scene::new();
        let id = scene.spawn();
        assert_eq!(scene.get_attachment::<Spin>(id).unwrap(), None);
    }

    #[test]
    fn test_get_attachment_missing_node_fails() {
        let scene = Scene::new();
        let err = scene.get_attachment::<Spin>(NodeId::from_raw(1)).unwrap_err();
        assert_eq!(err, SceneError::NodeNotFound(NodeId::from_raw(1)));
    }

    #[test]
    fn test_reset_spatial_to_full_identity() {
        let mut scene = Scene::new();
        let id = scene.spawn();
        *scene.spatial_mut(id).unwrap() = SpatialState {
            position: Vec3::new(5.0, 6.0, 7.0),
            rotation: Quat::from_rotation_x(0.8),
            scale: Vec3::splat(4.0),
        };

        scene.reset_spatial(id, &SpatialOverrides::new()).unwrap();
        assert_eq!(*scene.spatial(id).unwrap(), SpatialState::IDENTITY);
    }

    #[test]
    fn test_reset_spatial_with_scale_override() {
        let mut scene = Scene::new();
        let id = scene.spawn();
        scene.spatial_mut(id).unwrap().position = Vec3::splat(2.0);

        scene
            .reset_spatial(id, &SpatialOverrides::new().scale(Vec3::splat(0.5)))
            .unwrap();
        let spatial = scene.spatial(id).unwrap();
        // Position goes back to the origin even though only scale was given.
        assert_eq!(spatial.position, Vec3::ZERO);
        assert_eq!(spatial.rotation, Quat::IDENTITY);
        assert_eq!(spatial.scale, Vec3::splat(0.5));
    }

    #[test]
    fn test_reset_spatial_missing_node_fails() {
        let mut scene = Scene::new();
        let err = scene
            .reset_spatial(NodeId::from_raw(3), &SpatialOverrides::new())
            .unwrap_err();
        assert_eq!(err, SceneError::NodeNotFound(NodeId::from_raw(3)));
    }

    #[test]
    fn test_despawn_drops_attachments() {
        let mut scene = Scene::new();
        let id = scene.spawn();
        scene.get_or_attach::<Spin>(id).unwrap();
        scene.despawn(id);

        let id2 = scene.spawn();
        assert_ne!(id, id2); // handles are never reused
        assert!(!scene.has_attachment::<Spin>(id2));
    }
}
