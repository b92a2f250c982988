//! Scene nodes and their arena storage
//!
//! Nodes form a shallow tree: folders hold children, layers are leaves.
//! Every node owns a timeline from the moment it is created, so code that
//! fans change notifications out over keyed tracks never has to handle a
//! node without one.

use glam::Vec2;

use crate::math::SrtTransform;
use crate::timeline::TimeLine;
use crate::{FramelineError, FramelineResult};

/// Identifier of a node within its owning [`Scene`]
///
/// Ids are only issued by [`Scene::create_node`] and stay valid for the
/// scene's lifetime. Mixing ids across scenes is a logic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_raw(index: u32) -> Self {
        Self(index)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a node is allowed to contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// A grouping node that can hold children
    Folder,
    /// A drawable leaf node
    Layer,
}

/// One node of the scene tree
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    kind: NodeKind,
    transform: SrtTransform,
    pivot: Vec2,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    timeline: TimeLine,
}

impl Node {
    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node kind
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Whether this node may hold children
    pub fn can_hold_child(&self) -> bool {
        matches!(self.kind, NodeKind::Folder)
    }

    /// The node's editable local transform
    pub fn transform(&self) -> &SrtTransform {
        &self.transform
    }

    /// Mutable access to the local transform
    pub fn transform_mut(&mut self) -> &mut SrtTransform {
        &mut self.transform
    }

    /// Local-space rotation/scale pivot
    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    /// Replace the local-space pivot
    pub fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
    }

    /// Parent node, if any
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children, in creation order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The node's keyed timeline
    pub fn timeline(&self) -> &TimeLine {
        &self.timeline
    }

    /// Mutable access to the keyed timeline
    pub fn timeline_mut(&mut self) -> &mut TimeLine {
        &mut self.timeline
    }
}

/// Arena of scene nodes
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node, optionally attached under `parent`
    ///
    /// Fails with [`FramelineError::InvalidTarget`] when the parent does not
    /// exist or is a node kind that cannot hold children.
    pub fn create_node(
        &mut self,
        name: impl Into<String>,
        kind: NodeKind,
        parent: Option<NodeId>,
    ) -> FramelineResult<NodeId> {
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(FramelineError::invalid_target("parent node does not exist"));
            }
            if !self.node(parent).can_hold_child() {
                return Err(FramelineError::invalid_target(
                    "parent node cannot hold children",
                ));
            }
        }

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            name: name.into(),
            kind,
            transform: SrtTransform::default(),
            pivot: Vec2::ZERO,
            parent,
            children: Vec::new(),
            timeline: TimeLine::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        Ok(id)
    }

    /// Whether `id` refers to a node of this scene
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Borrow a node
    ///
    /// # Panics
    /// Panics if `id` was issued by a different scene.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Mutably borrow a node
    ///
    /// # Panics
    /// Panics if `id` was issued by a different scene.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Number of nodes in the scene
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::TrackType;

    #[test]
    fn test_folder_holds_children() {
        let mut scene = Scene::new();
        let root = scene.create_node("root", NodeKind::Folder, None).unwrap();
        let child = scene
            .create_node("child", NodeKind::Layer, Some(root))
            .unwrap();

        assert_eq!(scene.node(root).children(), &[child]);
        assert_eq!(scene.node(child).parent(), Some(root));
        assert_eq!(scene.node(root).name(), "root");
        assert_eq!(scene.node(child).kind(), NodeKind::Layer);
        assert!(scene.node(root).can_hold_child());
        assert!(!scene.node(child).can_hold_child());
    }

    #[test]
    fn test_layer_rejects_children() {
        let mut scene = Scene::new();
        let layer = scene.create_node("layer", NodeKind::Layer, None).unwrap();
        let result = scene.create_node("sub", NodeKind::Layer, Some(layer));
        assert!(matches!(
            result,
            Err(FramelineError::InvalidTarget { .. })
        ));
        // failed creation must not leave a dangling node behind
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_nodes_are_born_with_a_timeline() {
        let mut scene = Scene::new();
        let layer = scene.create_node("layer", NodeKind::Layer, None).unwrap();
        assert_eq!(scene.node(layer).timeline().key_count(TrackType::Transform), 0);

        scene
            .node_mut(layer)
            .timeline_mut()
            .add_key(TrackType::Transform, 12);
        assert!(scene.node(layer).timeline().has_key(TrackType::Transform, 12));
    }
}
