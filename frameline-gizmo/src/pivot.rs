//! Drag-to-edit pivot tool
//!
//! Tracks pointer focus and the press/drag/release gesture over a node's
//! rotation/scale pivot, converting pointer positions through the node's
//! world matrix and committing the result through the project's command
//! stack. A whole gesture collapses into one undoable history entry: the
//! first drag tick opens a transaction, every later tick modifies the same
//! command in place.

use bitflags::bitflags;

use frameline::{
    CameraView, CommandHandle, NodeId, Notifier, Posture, Project, Scene, ScopedMacro,
    TimeLineEvent, TimeLineEventKind, TrackType, clamp_translation, frameline_debug, invert_world,
};
use glam::Vec2;

use crate::error::{GizmoError, GizmoResult};
use crate::input::{Cursor, CursorPhase};
use crate::marker::{CROSS_RADIUS, Marker, MarkerStyle};
use crate::mover::PivotMover;

bitflags! {
    /// What observably changed during one tool update
    ///
    /// Hosts use this for repaint scheduling; a non-empty value means the
    /// canvas should redraw even when no edit was produced.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct UpdateFlags: u32 {
        /// The focus highlight flipped
        const FOCUS_CHANGED = 1 << 0;
        /// A press, drag or release was handled
        const GESTURE_CHANGED = 1 << 1;
        /// The pivot value was edited this frame
        const VALUE_EDITED = 1 << 2;
    }
}

/// Interactive pivot editor for one target node
pub struct PivotTool {
    target: NodeId,
    posture: Posture,
    focusing: bool,
    moving: bool,
    base_vec: Vec2,
    base_local_center: Vec2,
    open_command: Option<CommandHandle>,
}

impl PivotTool {
    /// Create a tool editing `target`'s pivot
    ///
    /// Fails when `target` is not part of the project's scene. The posture
    /// starts from an identity parent chain; hosts animating the node set it
    /// through [`PivotTool::posture_mut`] each frame.
    pub fn new(project: &Project, target: NodeId) -> GizmoResult<Self> {
        if !project.scene().contains(target) {
            return Err(GizmoError::invalid_target(
                "node is not part of this scene",
            ));
        }
        let mut posture = Posture::default();
        posture.refresh(project.scene().node(target).transform());
        Ok(Self {
            target,
            posture,
            focusing: false,
            moving: false,
            base_vec: Vec2::ZERO,
            base_local_center: Vec2::ZERO,
            open_command: None,
        })
    }

    /// The node being edited
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The posture the tool converts pointer positions through
    pub fn posture(&self) -> &Posture {
        &self.posture
    }

    /// Mutable posture access for per-frame host updates
    pub fn posture_mut(&mut self) -> &mut Posture {
        &mut self.posture
    }

    /// Whether the cursor is within pick range of the pivot
    pub fn is_focusing(&self) -> bool {
        self.focusing
    }

    /// Whether a drag gesture is active
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// World-space position of the target's pivot
    pub fn pivot_world_position(&self, scene: &Scene) -> Vec2 {
        self.posture
            .pivot_world_position(scene.node(self.target).pivot())
    }

    /// Marker geometry for the current frame
    pub fn marker(&self, scene: &Scene, camera: &CameraView, style: &MarkerStyle) -> Marker {
        let center = camera.to_screen_pos(self.pivot_world_position(scene));
        Marker::build(center, self.focusing || self.moving, style)
    }

    /// Process one frame of pointer input
    ///
    /// Focus is recomputed every frame from the screen-space distance to the
    /// pivot, before any gesture handling. A non-invertible world matrix
    /// silently suppresses starting or updating the gesture for this frame;
    /// the host never sees it as an error.
    pub fn update_cursor(
        &mut self,
        project: &mut Project,
        camera: &CameraView,
        cursor: &Cursor,
    ) -> UpdateFlags {
        let world_inv = invert_world(self.posture.world()).ok();

        let cur_pos = cursor.world_pos();
        let center = self.pivot_world_position(project.scene());
        let prev_focus = self.focusing;
        self.focusing = camera.to_screen_length((center - cur_pos).length()) <= CROSS_RADIUS;

        let mut flags = UpdateFlags::empty();
        if prev_focus != self.focusing {
            flags |= UpdateFlags::FOCUS_CHANGED;
        }

        match cursor.phase() {
            CursorPhase::Pressed => {
                if self.focusing {
                    if let Some(inv) = world_inv {
                        frameline_debug!("pivot gesture started on node {:?}", self.target);
                        self.moving = true;
                        self.base_vec = center - cur_pos;
                        self.base_local_center = inv.transform_point2(center);
                        self.open_command = None;
                    }
                }
                flags |= UpdateFlags::GESTURE_CHANGED;
            }
            CursorPhase::Dragged => {
                if self.moving {
                    if let Some(inv) = world_inv {
                        let new_local = inv.transform_point2(cur_pos + self.base_vec);
                        self.move_pivot(project, new_local);
                        self.posture
                            .refresh(project.scene().node(self.target).transform());
                        flags |= UpdateFlags::VALUE_EDITED;
                    }
                }
                flags |= UpdateFlags::GESTURE_CHANGED;
            }
            CursorPhase::Released => {
                self.open_command = None;
                self.moving = false;
                flags |= UpdateFlags::GESTURE_CHANGED;
            }
            CursorPhase::None => {}
        }

        flags
    }

    /// Apply one proposed pivot position, coalescing into the open command
    /// when the stack still reports it modifiable
    ///
    /// Both paths share the same freshly-computed notification target set.
    /// The coalescing path only mutates an already-committed transaction, so
    /// it dispatches the change event directly; the fresh path installs the
    /// event as a notifier on the new transaction so undo/redo replays the
    /// fan-out without re-deriving targets.
    fn move_pivot(&mut self, project: &mut Project, new_center: Vec2) {
        let new_center = clamp_translation(new_center);
        let event = collect_change_targets(project.scene(), self.target);

        if let Some(handle) = self.open_command.take() {
            if try_modify(project, handle, new_center) {
                self.open_command = Some(handle);
                project.notify_time_line_modified(&event, false);
                project.notify_node_attribute_modified(self.target, false);
                return;
            }
        }

        let mut group = ScopedMacro::new(project, "move pivot");
        group.grab_notifier(Notifier::TimeLine(event));
        group.grab_notifier(Notifier::NodeAttribute(self.target));
        let handle = group.push(Box::new(PivotMover::new(
            self.target,
            self.base_local_center,
            new_center,
        )));
        group.end();
        self.open_command = Some(handle);
    }
}

/// Replace the value of a still-modifiable pivot command in place
fn try_modify(project: &mut Project, handle: CommandHandle, value: Vec2) -> bool {
    let (scene, stack) = project.parts_mut();
    match stack.command_mut(handle) {
        Some(command) => match command.as_any_mut().downcast_mut::<PivotMover>() {
            Some(mover) => {
                mover.modify_value(scene, value);
                true
            }
            None => false,
        },
        None => false,
    }
}

/// Enumerate every (node, track, key) a pivot change must be reported to
///
/// Covers the target's own transform keys plus, for container nodes, each
/// direct child's transform keys. Traversal deliberately stops at direct
/// children. Leaf nodes report their image keys instead, tagged under the
/// transform track their observers watch.
fn collect_change_targets(scene: &Scene, target: NodeId) -> TimeLineEvent {
    let mut event = TimeLineEvent::new(TimeLineEventKind::ChangeKeyValue);
    let node = scene.node(target);

    for frame in node.timeline().keys(TrackType::Transform) {
        event.push_target(target, TrackType::Transform, frame);
    }

    if node.can_hold_child() {
        for &child in node.children() {
            for frame in scene.node(child).timeline().keys(TrackType::Transform) {
                event.push_target(child, TrackType::Transform, frame);
            }
        }
    } else {
        for frame in node.timeline().keys(TrackType::Image) {
            event.push_target(target, TrackType::Transform, frame);
        }
    }

    event
}
