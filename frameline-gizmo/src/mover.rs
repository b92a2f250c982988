//! The mergeable pivot-move command

use std::any::Any;

use frameline::{Command, NodeId, Scene};
use glam::Vec2;

/// Moves a node's rotation/scale pivot between two local-space positions
///
/// One `PivotMover` represents an entire drag gesture: while it is still the
/// modifiable top of the history, each drag tick replaces `new_center` in
/// place through [`PivotMover::modify_value`] instead of growing the
/// history.
pub struct PivotMover {
    node: NodeId,
    old_center: Vec2,
    new_center: Vec2,
}

impl PivotMover {
    /// Create a mover that takes `node`'s pivot from `old_center` to `new_center`
    pub fn new(node: NodeId, old_center: Vec2, new_center: Vec2) -> Self {
        Self {
            node,
            old_center,
            new_center,
        }
    }

    /// The pivot value before the gesture began
    pub fn old_center(&self) -> Vec2 {
        self.old_center
    }

    /// The pivot value this command currently applies
    pub fn new_center(&self) -> Vec2 {
        self.new_center
    }

    /// Replace the target value and apply it immediately
    ///
    /// Only meaningful while the owning stack still reports this command as
    /// modifiable; the visible scene state reflects the new value before any
    /// later redo cycle.
    pub fn modify_value(&mut self, scene: &mut Scene, new_center: Vec2) {
        self.new_center = new_center;
        scene.node_mut(self.node).set_pivot(new_center);
    }
}

impl Command for PivotMover {
    fn name(&self) -> &str {
        "move pivot"
    }

    fn redo(&mut self, scene: &mut Scene) {
        scene.node_mut(self.node).set_pivot(self.new_center);
    }

    fn undo(&mut self, scene: &mut Scene) {
        scene.node_mut(self.node).set_pivot(self.old_center);
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
