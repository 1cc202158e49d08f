use crate::Segment;

use glam::{DAffine2, DVec2};

/// How moving one control handle affects its sibling across the anchor.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, serde::Serialize, serde::Deserialize)]
pub enum ReflectionMode {
	/// The sibling handle is mirrored through the anchor, matching both direction and length.
	#[default]
	Reflect,
	/// The sibling handle is left untouched.
	Independent,
	/// The sibling handle takes the mirrored direction but keeps its own length.
	ReflectIndependent,
}

/// Which sub-point of a node an edit or hit-test result addresses.
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub enum ControlPointType {
	Anchor,
	InHandle,
	OutHandle,
}

/// The persistent representation of a node: resolved points only, no selection state.
/// An absent handle is stored as the anchor itself, so deserializing old documents is lossless.
#[derive(Copy, Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub struct NodeTuple {
	pub anchor: DVec2,
	pub out_point: DVec2,
	pub in_point: DVec2,
}

/// An editable path vertex: an anchor point with up to two control handles.
/// A `None` handle is collapsed onto the anchor and contributes no curvature to its side.
/// All edit operations are copy-with-change and return a new node.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PathNode {
	pub anchor: DVec2,
	pub in_handle: Option<DVec2>,
	pub out_handle: Option<DVec2>,
	pub selected: bool,
}

impl PathNode {
	/// Create a corner node with no handles.
	pub fn new(anchor: DVec2) -> Self {
		PathNode {
			anchor,
			in_handle: None,
			out_handle: None,
			selected: false,
		}
	}

	/// Create a node with an outgoing handle only. A handle equal to the anchor collapses to `None`.
	pub fn with_out_handle(anchor: DVec2, out_handle: DVec2) -> Self {
		PathNode {
			anchor,
			in_handle: None,
			out_handle: (out_handle != anchor).then_some(out_handle),
			selected: false,
		}
	}

	/// Create a node with both handles. Handles equal to the anchor collapse to `None`.
	pub fn with_handles(anchor: DVec2, out_handle: DVec2, in_handle: DVec2) -> Self {
		PathNode {
			anchor,
			in_handle: (in_handle != anchor).then_some(in_handle),
			out_handle: (out_handle != anchor).then_some(out_handle),
			selected: false,
		}
	}

	/// The incoming handle position, resolved to the anchor when absent.
	pub fn in_point(&self) -> DVec2 {
		self.in_handle.unwrap_or(self.anchor)
	}

	/// The outgoing handle position, resolved to the anchor when absent.
	pub fn out_point(&self) -> DVec2 {
		self.out_handle.unwrap_or(self.anchor)
	}

	/// Returns true if the incoming handle exists and is not collapsed onto the anchor.
	pub fn has_in_point(&self) -> bool {
		self.in_handle.is_some_and(|handle| handle != self.anchor)
	}

	/// Returns true if the outgoing handle exists and is not collapsed onto the anchor.
	pub fn has_out_point(&self) -> bool {
		self.out_handle.is_some_and(|handle| handle != self.anchor)
	}

	/// Returns true if the node has no effective handles on either side.
	pub fn is_corner(&self) -> bool {
		!self.has_in_point() && !self.has_out_point()
	}

	/// Returns a copy with the selection flag set as given.
	pub fn with_selected(self, selected: bool) -> Self {
		PathNode { selected, ..self }
	}

	/// Returns a copy with the incoming handle replaced. A point equal to the anchor clears the handle.
	pub fn with_in_point(&self, in_point: DVec2) -> Self {
		PathNode {
			in_handle: (in_point != self.anchor).then_some(in_point),
			..*self
		}
	}

	/// Returns a copy with the outgoing handle replaced. A point equal to the anchor clears the handle.
	pub fn with_out_point(&self, out_point: DVec2) -> Self {
		PathNode {
			out_handle: (out_point != self.anchor).then_some(out_point),
			..*self
		}
	}

	/// Returns a copy with both handles removed, leaving a corner node.
	pub fn chop_handles(&self) -> Self {
		PathNode {
			in_handle: None,
			out_handle: None,
			..*self
		}
	}

	/// Returns a copy with the incoming handle removed.
	pub fn chop_in_handle(&self) -> Self {
		PathNode { in_handle: None, ..*self }
	}

	/// Returns a copy with the outgoing handle removed.
	pub fn chop_out_handle(&self) -> Self {
		PathNode { out_handle: None, ..*self }
	}

	/// Returns a copy with the anchor and both handles mapped through `transform`.
	pub fn with_transform(&self, transform: DAffine2) -> Self {
		PathNode {
			anchor: transform.transform_point2(self.anchor),
			in_handle: self.in_handle.map(|handle| transform.transform_point2(handle)),
			out_handle: self.out_handle.map(|handle| transform.transform_point2(handle)),
			selected: self.selected,
		}
	}

	/// Returns a copy with the incoming and outgoing handles swapped, for reversing path direction.
	pub fn flipped(&self) -> Self {
		PathNode {
			in_handle: self.out_handle,
			out_handle: self.in_handle,
			..*self
		}
	}

	/// Move one of the node's three points to `to`, applying the given reflection behavior to the
	/// sibling handle when a handle is moved. Moving the anchor translates all three points rigidly.
	pub fn move_control_handle(&self, point_type: ControlPointType, to: DVec2, mode: ReflectionMode) -> Self {
		match point_type {
			ControlPointType::Anchor => {
				let delta = to - self.anchor;
				PathNode {
					anchor: to,
					in_handle: self.in_handle.map(|handle| handle + delta),
					out_handle: self.out_handle.map(|handle| handle + delta),
					selected: self.selected,
				}
			}
			ControlPointType::OutHandle => {
				let moved = self.with_out_point(to);
				match mode {
					ReflectionMode::Independent => moved,
					ReflectionMode::Reflect => moved.with_in_point(2. * self.anchor - to),
					ReflectionMode::ReflectIndependent => moved.with_in_point(self.mirrored_sibling(to, self.in_point())),
				}
			}
			ControlPointType::InHandle => {
				let moved = self.with_in_point(to);
				match mode {
					ReflectionMode::Independent => moved,
					ReflectionMode::Reflect => moved.with_out_point(2. * self.anchor - to),
					ReflectionMode::ReflectIndependent => moved.with_out_point(self.mirrored_sibling(to, self.out_point())),
				}
			}
		}
	}

	/// The position for a sibling handle that takes the direction opposite `moved` but keeps its own length.
	/// When the moved handle coincides with the anchor there is no direction, so the sibling stays put.
	fn mirrored_sibling(&self, moved: DVec2, sibling: DVec2) -> DVec2 {
		let opposite_direction = self.anchor - moved;
		if opposite_direction.length_squared() == 0. {
			return sibling;
		}
		self.anchor + opposite_direction.normalize() * (sibling - self.anchor).length()
	}

	/// Build the cubic segment from this node to `next`, resolving absent handles to the anchors.
	pub fn to_segment(&self, next: &PathNode) -> Segment {
		Segment::new(self.anchor, self.out_point(), next.in_point(), next.anchor)
	}

	/// The persistent tuple form of this node. Selection state is not carried.
	pub fn to_tuple(&self) -> NodeTuple {
		NodeTuple {
			anchor: self.anchor,
			out_point: self.out_point(),
			in_point: self.in_point(),
		}
	}

	/// Rebuild a node from its persistent tuple form. Points equal to the anchor collapse to absent handles.
	pub fn from_tuple(tuple: NodeTuple) -> Self {
		PathNode::with_handles(tuple.anchor, tuple.out_point, tuple.in_point)
	}
}
