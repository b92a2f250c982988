//! # frameline
//!
//! Scene model and transactional command engine for a 2D keyframe animation
//! editor. Interactive tools built on this crate turn continuous pointer
//! gestures into live scene edits that coalesce into a single undoable
//! history entry, with change notifications fanned out to every dependent
//! keyframe observer exactly once per commit, undo or redo.
//!
//! ## Features
//!
//! - Arena-backed scene tree with per-node keyed timelines
//! - Undo/redo stack with scoped transaction grouping and in-place command
//!   coalescing via generation-tagged handles
//! - Observer fan-out that replays correctly on undo/redo
//! - Explicit project context, no globals, fully testable headless
//!
//! ## Quick Start
//!
//! ```no_run
//! use frameline::{NodeKind, Project, Scene};
//!
//! let mut scene = Scene::new();
//! let root = scene.create_node("root", NodeKind::Folder, None).unwrap();
//! let _layer = scene.create_node("layer", NodeKind::Layer, Some(root)).unwrap();
//!
//! let mut project = Project::new(scene);
//! assert!(!project.undo());
//! ```

#![deny(rust_2018_idioms)]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub use self::camera::*;
pub use self::command::*;
pub use self::error::*;
pub use self::logging::*;
pub use self::math::*;
pub use self::node::*;
pub use self::project::*;
pub use self::stack::*;
pub use self::timeline::*;

mod camera;
mod command;
mod error;
mod logging;
mod math;
mod node;
mod project;
mod stack;
mod timeline;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
