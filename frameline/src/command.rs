//! Atomic, reversible edit commands
//!
//! Every mutation of the scene that should participate in undo/redo is
//! expressed as a [`Command`]. Commands are constructed fully validated;
//! executing one is expected to succeed unconditionally.

use std::any::Any;

use crate::node::Scene;

/// An atomic, reversible unit of scene mutation
///
/// The stack executes a command the moment it is pushed and replays it on
/// every redo. Commands that support in-place value replacement while a
/// gesture is live expose their own `modify_value` method; callers reach it
/// through [`Command::as_any_mut`] after the stack has confirmed the command
/// is still the modifiable top entry.
pub trait Command: Any {
    /// Short human-readable name, used as the history label for bare pushes
    fn name(&self) -> &str;

    /// Apply the command's effect (first execution and every redo)
    fn redo(&mut self, scene: &mut Scene);

    /// Reverse the command's effect
    fn undo(&mut self, scene: &mut Scene);

    /// Downcast hook for in-place coalescing
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Generation-tagged reference to a command owned by the stack
///
/// The stack exclusively owns pushed commands; callers that want to coalesce
/// further edits into one keep this plain value instead of a borrow. The
/// `serial` snapshot makes stale handles inert: any push, undo or redo bumps
/// the stack's serial, so a handle taken before such an operation simply
/// stops validating instead of aliasing a different command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandHandle {
    pub(crate) entry: usize,
    pub(crate) slot: usize,
    pub(crate) serial: u64,
}
