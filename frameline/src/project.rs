//! The editing context: scene, history and change observers
//!
//! A [`Project`] is passed explicitly to every editing operation instead of
//! living in a global. It owns the scene being edited, the command stack
//! that records edits to it, and the observers that must hear about keyed
//! values changing, both when an edit commits and when it is replayed by
//! undo/redo.

use crate::frameline_trace;
use crate::node::{NodeId, Scene};
use crate::stack::{Notifier, Stack};
use crate::timeline::TimeLineEvent;

/// External observer of project-level change notifications
///
/// `is_undo` distinguishes a forward commit (or redo) from an undo replay.
/// Both methods default to no-ops so observers can implement only the hook
/// they care about.
pub trait ProjectObserver {
    /// Values stored under existing timeline keys changed
    fn on_time_line_modified(&mut self, event: &TimeLineEvent, is_undo: bool) {
        let _ = (event, is_undo);
    }

    /// A node's attribute set changed
    fn on_node_attribute_modified(&mut self, node: NodeId, is_undo: bool) {
        let _ = (node, is_undo);
    }
}

/// The context object threaded through every editing operation
pub struct Project {
    scene: Scene,
    stack: Stack,
    observers: Vec<Box<dyn ProjectObserver>>,
}

impl Project {
    /// Wrap a scene in a fresh editing context with empty history
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            stack: Stack::new(),
            observers: Vec::new(),
        }
    }

    /// The scene being edited
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene
    ///
    /// Direct mutation bypasses the history; interactive edits should go
    /// through commands instead.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The project-wide command stack
    pub fn command_stack(&self) -> &Stack {
        &self.stack
    }

    /// Mutable access to the command stack
    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    /// Split borrow used by code that executes commands against the scene
    pub fn parts_mut(&mut self) -> (&mut Scene, &mut Stack) {
        (&mut self.scene, &mut self.stack)
    }

    /// Register a change observer
    pub fn add_observer(&mut self, observer: Box<dyn ProjectObserver>) {
        self.observers.push(observer);
    }

    /// Revert the most recent history entry
    ///
    /// Returns false when there is nothing to undo. On success the entry's
    /// notifiers are re-fired with `is_undo = true`.
    pub fn undo(&mut self) -> bool {
        let Self {
            scene,
            stack,
            observers,
        } = self;
        match stack.undo(scene) {
            Some(notifiers) => {
                for notifier in notifiers {
                    Self::dispatch_to(observers, notifier, true);
                }
                true
            }
            None => false,
        }
    }

    /// Reapply the most recently undone history entry
    ///
    /// Returns false when there is nothing to redo. On success the entry's
    /// notifiers are re-fired with `is_undo = false`.
    pub fn redo(&mut self) -> bool {
        let Self {
            scene,
            stack,
            observers,
        } = self;
        match stack.redo(scene) {
            Some(notifiers) => {
                for notifier in notifiers {
                    Self::dispatch_to(observers, notifier, false);
                }
                true
            }
            None => false,
        }
    }

    /// Dispatch a timeline change event to every observer
    ///
    /// Used directly by tools coalescing into an already-committed entry,
    /// where no new transaction (and therefore no notifier) is created.
    pub fn notify_time_line_modified(&mut self, event: &TimeLineEvent, is_undo: bool) {
        frameline_trace!("timeline modified, {} targets", event.targets().len());
        for observer in &mut self.observers {
            observer.on_time_line_modified(event, is_undo);
        }
    }

    /// Dispatch a node attribute change to every observer
    pub fn notify_node_attribute_modified(&mut self, node: NodeId, is_undo: bool) {
        for observer in &mut self.observers {
            observer.on_node_attribute_modified(node, is_undo);
        }
    }

    /// Finalize the open transaction group, if any
    ///
    /// A group that saw no commands is discarded without firing notifiers
    /// or touching the history.
    pub(crate) fn commit_open_group(&mut self) {
        let Some(entry) = self.stack.take_open_group() else {
            return;
        };
        if entry.commands.is_empty() {
            frameline_trace!("discarding empty command group '{}'", entry.label);
            return;
        }
        let Self {
            stack, observers, ..
        } = self;
        let notifiers = stack.commit_entry(entry);
        for notifier in notifiers {
            Self::dispatch_to(observers, notifier, false);
        }
    }

    fn dispatch_to(
        observers: &mut [Box<dyn ProjectObserver>],
        notifier: &Notifier,
        is_undo: bool,
    ) {
        match notifier {
            Notifier::TimeLine(event) => {
                for observer in observers.iter_mut() {
                    observer.on_time_line_modified(event, is_undo);
                }
            }
            Notifier::NodeAttribute(node) => {
                for observer in observers.iter_mut() {
                    observer.on_node_attribute_modified(*node, is_undo);
                }
            }
        }
    }
}
