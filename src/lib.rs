//! Geometry kernel for an interactive 2D vector illustration editor.
//!
//! The crate is built around three layers:
//! - [`Segment`]: an immutable cubic Bezier arc with evaluation, splitting, projection, and intersection math.
//! - [`PathNode`]: an editable vertex (anchor plus optional control handles) with pure copy-with-change edit operations.
//! - [`Path`]: an ordered list of nodes with lazily cached derived geometry, plus hit-testing and marquee queries.
//!
//! All coordinates are `f64` pairs ([`glam::DVec2`]). Tolerances are expressed in device pixels;
//! callers working in document space divide by the current view scale.

#[cfg(test)]
pub(crate) mod compare;

mod consts;
mod flatten;
mod node;
mod path;
mod pick;
mod segment;
mod shapes;
mod utils;

pub use consts::{DEFAULT_FLATNESS, DEFAULT_LENGTH_TOLERANCE, SELECTION_TOLERANCE};
pub use node::{ControlPointType, NodeTuple, PathNode, ReflectionMode};
pub use path::{Path, PathData, PathIter};
pub use pick::{PickResult, PickedElement, SnapFlags};
pub use segment::{ClosestPoint, ProjectionOptions, Segment};
pub use shapes::{line, oval, rectangle, regular_polygon, rounded_rectangle, spiral, star};
