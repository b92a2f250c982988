//! Undo/redo history with scoped transaction grouping
//!
//! The [`Stack`] owns every committed command. Edits that belong to one user
//! action are grouped through a [`ScopedMacro`], an RAII guard that commits
//! the group as a single undoable entry when it goes out of scope and fires
//! the notifiers grabbed into it exactly once per commit, undo or redo.

use crate::command::{Command, CommandHandle};
use crate::frameline_debug;
use crate::node::{NodeId, Scene};
use crate::project::Project;
use crate::timeline::TimeLineEvent;

/// A deferred side effect owned by a committed history entry
///
/// The set of effects the engine fans out is closed, so notifiers are a sum
/// type rather than trait objects. Each one is fired in registration order
/// when its entry commits and again on every undo/redo replay of the entry.
#[derive(Debug, Clone)]
pub enum Notifier {
    /// Dispatch a keyed-value change event to timeline observers
    TimeLine(TimeLineEvent),
    /// Mark a node's attribute set as modified
    NodeAttribute(NodeId),
}

/// One committed history entry: a labeled group of commands plus notifiers
pub(crate) struct Entry {
    pub(crate) label: String,
    pub(crate) commands: Vec<Box<dyn Command>>,
    pub(crate) notifiers: Vec<Notifier>,
}

/// Linear undo/redo history of committed transactions
///
/// The cursor marks the boundary between undoable entries (below it) and
/// redoable entries (at or above it). Pushing truncates the redo tail.
#[derive(Default)]
pub struct Stack {
    history: Vec<Entry>,
    cursor: usize,
    serial: u64,
    open: Option<Entry>,
}

impl Stack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed entries
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the history is empty
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Number of entries the cursor has passed (i.e. currently applied)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Label of the entry the next undo would revert
    pub fn undo_label(&self) -> Option<&str> {
        self.cursor
            .checked_sub(1)
            .map(|i| self.history[i].label.as_str())
    }

    /// Label of the entry the next redo would reapply
    pub fn redo_label(&self) -> Option<&str> {
        self.history.get(self.cursor).map(|e| e.label.as_str())
    }

    /// Execute `command` and record it at the cursor
    ///
    /// The redo tail is truncated first. While a [`ScopedMacro`] group is
    /// open the command joins the group; otherwise it commits immediately as
    /// a single-command entry labeled with the command's own name.
    pub fn push(&mut self, mut command: Box<dyn Command>, scene: &mut Scene) -> CommandHandle {
        self.serial += 1;
        self.history.truncate(self.cursor);
        command.redo(scene);

        match &mut self.open {
            Some(group) => {
                group.commands.push(command);
                CommandHandle {
                    entry: self.history.len(),
                    slot: group.commands.len() - 1,
                    serial: self.serial,
                }
            }
            None => {
                let label = command.name().to_string();
                frameline_debug!("pushing single command '{}'", label);
                self.history.push(Entry {
                    label,
                    commands: vec![command],
                    notifiers: Vec::new(),
                });
                self.cursor = self.history.len();
                CommandHandle {
                    entry: self.cursor - 1,
                    slot: 0,
                    serial: self.serial,
                }
            }
        }
    }

    /// Whether `handle` still refers to the modifiable top of the history
    ///
    /// True only while the handled command's entry is the most recent one,
    /// no undo/redo has moved the cursor, and no other push has happened
    /// since the handle was issued. In-place value modification deliberately
    /// leaves the serial untouched, so a gesture can keep coalescing.
    pub fn is_modifiable(&self, handle: CommandHandle) -> bool {
        self.open.is_none()
            && handle.serial == self.serial
            && self.cursor == self.history.len()
            && handle.entry + 1 == self.cursor
    }

    /// Borrow the handled command for in-place modification
    ///
    /// Returns `None` whenever [`Stack::is_modifiable`] would be false.
    pub fn command_mut(&mut self, handle: CommandHandle) -> Option<&mut dyn Command> {
        if !self.is_modifiable(handle) {
            return None;
        }
        self.history
            .get_mut(handle.entry)?
            .commands
            .get_mut(handle.slot)
            .map(|command| &mut **command)
    }

    /// Revert the entry below the cursor; returns its notifiers for dispatch
    pub(crate) fn undo(&mut self, scene: &mut Scene) -> Option<&[Notifier]> {
        if self.open.is_some() || self.cursor == 0 {
            return None;
        }
        self.serial += 1;
        self.cursor -= 1;
        let entry = &mut self.history[self.cursor];
        frameline_debug!("undoing '{}'", entry.label);
        for command in entry.commands.iter_mut().rev() {
            command.undo(scene);
        }
        Some(&entry.notifiers)
    }

    /// Reapply the entry at the cursor; returns its notifiers for dispatch
    pub(crate) fn redo(&mut self, scene: &mut Scene) -> Option<&[Notifier]> {
        if self.open.is_some() || self.cursor == self.history.len() {
            return None;
        }
        self.serial += 1;
        let entry = &mut self.history[self.cursor];
        self.cursor += 1;
        frameline_debug!("redoing '{}'", entry.label);
        for command in entry.commands.iter_mut() {
            command.redo(scene);
        }
        Some(&entry.notifiers)
    }

    pub(crate) fn begin_group(&mut self, label: String) {
        assert!(self.open.is_none(), "command group already open");
        self.open = Some(Entry {
            label,
            commands: Vec::new(),
            notifiers: Vec::new(),
        });
    }

    pub(crate) fn grab_notifier(&mut self, notifier: Notifier) {
        let group = self
            .open
            .as_mut()
            .expect("no open command group to attach a notifier to");
        group.notifiers.push(notifier);
    }

    pub(crate) fn take_open_group(&mut self) -> Option<Entry> {
        self.open.take()
    }

    pub(crate) fn commit_entry(&mut self, entry: Entry) -> &[Notifier] {
        frameline_debug!(
            "committing '{}' ({} commands, {} notifiers)",
            entry.label,
            entry.commands.len(),
            entry.notifiers.len()
        );
        self.history.push(entry);
        self.cursor = self.history.len();
        &self.history[self.cursor - 1].notifiers
    }
}

/// RAII guard that groups pushed commands into one undoable transaction
///
/// Created with a label naming the user-facing action. Commands pushed while
/// the guard lives join the group; notifiers grabbed into it are fired when
/// the group commits on drop. A group that saw no commands is discarded
/// without firing anything.
#[must_use]
pub struct ScopedMacro<'p> {
    project: &'p mut Project,
}

impl<'p> ScopedMacro<'p> {
    /// Open a named transaction group on the project's stack
    pub fn new(project: &'p mut Project, label: impl Into<String>) -> Self {
        project.stack_mut().begin_group(label.into());
        Self { project }
    }

    /// Transfer ownership of a notifier to the group
    pub fn grab_notifier(&mut self, notifier: Notifier) {
        self.project.stack_mut().grab_notifier(notifier);
    }

    /// Execute `command` and record it in the group
    pub fn push(&mut self, command: Box<dyn Command>) -> CommandHandle {
        let (scene, stack) = self.project.parts_mut();
        stack.push(command, scene)
    }

    /// Commit the group now instead of waiting for the end of scope
    #[inline]
    pub fn end(self) {
        // left empty for drop
    }
}

impl Drop for ScopedMacro<'_> {
    fn drop(&mut self) {
        self.project.commit_open_group();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeKind, Scene};
    use glam::Vec2;
    use std::any::Any;

    struct SetPivot {
        node: NodeId,
        from: Vec2,
        to: Vec2,
    }

    impl Command for SetPivot {
        fn name(&self) -> &str {
            "set pivot"
        }

        fn redo(&mut self, scene: &mut Scene) {
            scene.node_mut(self.node).set_pivot(self.to);
        }

        fn undo(&mut self, scene: &mut Scene) {
            scene.node_mut(self.node).set_pivot(self.from);
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn scene_with_layer() -> (Scene, NodeId) {
        let mut scene = Scene::new();
        let layer = scene.create_node("layer", NodeKind::Layer, None).unwrap();
        (scene, layer)
    }

    fn set_pivot(node: NodeId, from: (f32, f32), to: (f32, f32)) -> Box<dyn Command> {
        Box::new(SetPivot {
            node,
            from: Vec2::new(from.0, from.1),
            to: Vec2::new(to.0, to.1),
        })
    }

    #[test]
    fn test_push_executes_immediately() {
        let (mut scene, layer) = scene_with_layer();
        let mut stack = Stack::new();
        assert!(stack.is_empty());

        stack.push(set_pivot(layer, (0.0, 0.0), (5.0, 5.0)), &mut scene);
        assert_eq!(scene.node(layer).pivot(), Vec2::new(5.0, 5.0));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.undo_label(), Some("set pivot"));
    }

    #[test]
    fn test_undo_redo_moves_cursor() {
        let (mut scene, layer) = scene_with_layer();
        let mut stack = Stack::new();

        stack.push(set_pivot(layer, (0.0, 0.0), (1.0, 0.0)), &mut scene);
        stack.push(set_pivot(layer, (1.0, 0.0), (2.0, 0.0)), &mut scene);

        assert!(stack.undo(&mut scene).is_some());
        assert_eq!(scene.node(layer).pivot(), Vec2::new(1.0, 0.0));
        assert_eq!(stack.cursor(), 1);
        assert_eq!(stack.redo_label(), Some("set pivot"));

        assert!(stack.redo(&mut scene).is_some());
        assert_eq!(scene.node(layer).pivot(), Vec2::new(2.0, 0.0));
        assert!(stack.redo(&mut scene).is_none());
    }

    #[test]
    fn test_push_truncates_redo_tail() {
        let (mut scene, layer) = scene_with_layer();
        let mut stack = Stack::new();

        stack.push(set_pivot(layer, (0.0, 0.0), (1.0, 0.0)), &mut scene);
        stack.push(set_pivot(layer, (1.0, 0.0), (2.0, 0.0)), &mut scene);
        stack.undo(&mut scene);

        stack.push(set_pivot(layer, (1.0, 0.0), (9.0, 0.0)), &mut scene);
        assert_eq!(stack.len(), 2);
        assert!(stack.redo(&mut scene).is_none());
        assert_eq!(scene.node(layer).pivot(), Vec2::new(9.0, 0.0));
    }

    #[test]
    fn test_handle_goes_stale_after_any_history_motion() {
        let (mut scene, layer) = scene_with_layer();
        let mut stack = Stack::new();

        let handle = stack.push(set_pivot(layer, (0.0, 0.0), (1.0, 0.0)), &mut scene);
        assert!(stack.is_modifiable(handle));

        // another push on top
        stack.push(set_pivot(layer, (1.0, 0.0), (2.0, 0.0)), &mut scene);
        assert!(!stack.is_modifiable(handle));
        assert!(stack.command_mut(handle).is_none());

        // undo invalidates the newest handle too
        let top = stack.push(set_pivot(layer, (2.0, 0.0), (3.0, 0.0)), &mut scene);
        stack.undo(&mut scene);
        assert!(!stack.is_modifiable(top));
    }

    #[test]
    fn test_command_mut_downcasts_to_concrete_command() {
        let (mut scene, layer) = scene_with_layer();
        let mut stack = Stack::new();

        let handle = stack.push(set_pivot(layer, (0.0, 0.0), (1.0, 0.0)), &mut scene);
        let command = stack.command_mut(handle).unwrap();
        let concrete = command.as_any_mut().downcast_mut::<SetPivot>().unwrap();
        concrete.to = Vec2::new(7.0, 7.0);

        // the handle stayed modifiable across the in-place edit
        assert!(stack.is_modifiable(handle));
    }
}
