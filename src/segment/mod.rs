mod core;
mod lookup;
mod solvers;
mod structs;
mod transform;
pub use structs::*;

use glam::DVec2;
use std::fmt::{Debug, Formatter, Result};

/// A cubic Bezier arc between two anchor points.
/// Straight sides are represented by handles collapsed onto their endpoints, so every segment carries four points.
#[derive(Copy, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
	/// Start anchor of the curve.
	pub start: DVec2,
	/// Control handle associated with the start anchor.
	pub handle_start: DVec2,
	/// Control handle associated with the end anchor.
	pub handle_end: DVec2,
	/// End anchor of the curve.
	pub end: DVec2,
}

impl Debug for Segment {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		write!(f, "Segment({}, {}, {}, {})", self.start, self.handle_start, self.handle_end, self.end)
	}
}
