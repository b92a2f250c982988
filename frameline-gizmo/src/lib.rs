//! # frameline-gizmo
//!
//! On-canvas manipulation tools for the frameline editor core. The pivot
//! tool in this crate turns a continuous press/drag/release gesture over a
//! node's rotation/scale pivot into live scene edits that coalesce into a
//! single undoable history entry, with keyframe observers notified exactly
//! once per commit, undo or redo.
//!
//! ## Quick Start
//!
//! ```no_run
//! use frameline::{CameraView, NodeKind, Project, Scene};
//! use frameline_gizmo::{Cursor, PivotTool};
//! use glam::Vec2;
//!
//! let mut scene = Scene::new();
//! let layer = scene.create_node("layer", NodeKind::Layer, None).unwrap();
//! let mut project = Project::new(scene);
//!
//! let mut tool = PivotTool::new(&project, layer).unwrap();
//! let camera = CameraView::default();
//!
//! // press on the pivot, then drag it ten units right
//! tool.update_cursor(&mut project, &camera, &Cursor::pressed(Vec2::ZERO));
//! let flags = tool.update_cursor(&mut project, &camera, &Cursor::dragged(Vec2::new(10.0, 0.0)));
//! assert!(!flags.is_empty());
//! ```

pub use self::error::*;
pub use self::input::*;
pub use self::marker::*;
pub use self::mover::*;
pub use self::pivot::*;

mod error;
mod input;
mod marker;
mod mover;
mod pivot;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
