use crate::consts::SELECTION_TOLERANCE;
use crate::node::ControlPointType;
use crate::path::Path;

use glam::DVec2;

bitflags::bitflags! {
	/// Which categories of path elements a hit-test may snap to.
	#[derive(Copy, Clone, PartialEq, Eq, Debug)]
	pub struct SnapFlags: u32 {
		/// Anchor points of every node.
		const ANCHORS = 1 << 0;
		/// Control handles of currently selected nodes.
		const HANDLES = 1 << 1;
		/// Points along the traced curve itself.
		const EDGES = 1 << 2;
	}
}

impl Default for SnapFlags {
	fn default() -> Self {
		SnapFlags::all()
	}
}

/// The path element a hit-test resolved to.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum PickedElement {
	/// An anchor or control handle of the node at `node_index`.
	Point { node_index: usize, point_type: ControlPointType },
	/// A point on the segment at `segment_index`, at parameter `t`.
	Edge { segment_index: usize, t: f64 },
}

/// A successful hit-test: what was hit, where it is, and how far away the query point was.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PickResult {
	pub element: PickedElement,
	pub point: DVec2,
	pub distance: f64,
}

/// Functionality for resolving pointer positions to path elements.
impl Path {
	/// Find the path element under `point`, using a hit radius of [`SELECTION_TOLERANCE`] device
	/// pixels divided by `view_scale`.
	///
	/// Categories are tried in priority order: control handles of selected nodes first, then
	/// anchors, then the traced curve. The nearest candidate within the first category that
	/// produces any hit wins, so an anchor beats a closer edge point. Exact distance ties resolve
	/// to the lowest node or segment index.
	pub fn hit_test(&self, point: DVec2, view_scale: f64, flags: SnapFlags) -> Option<PickResult> {
		if !point.is_finite() {
			debug_assert!(false, "hit-test point must be finite, got {point}");
			log::warn!("Ignoring hit-test at non-finite point {point}");
			return None;
		}
		let view_scale = crate::path::checked_view_scale(view_scale);
		let tolerance = SELECTION_TOLERANCE / view_scale;

		if flags.contains(SnapFlags::HANDLES) {
			if let Some(result) = self.pick_handles(point, tolerance) {
				return Some(result);
			}
		}
		if flags.contains(SnapFlags::ANCHORS) {
			if let Some(result) = self.pick_anchors(point, tolerance) {
				return Some(result);
			}
		}
		if flags.contains(SnapFlags::EDGES) {
			if let Some(result) = self.pick_edge(point, tolerance) {
				return Some(result);
			}
		}
		None
	}

	/// The nearest in-tolerance control handle among selected nodes. Within one node the incoming
	/// handle is checked first, so it wins an exact tie against the outgoing one.
	fn pick_handles(&self, point: DVec2, tolerance: f64) -> Option<PickResult> {
		let mut best: Option<PickResult> = None;
		for (node_index, node) in self.nodes().iter().enumerate() {
			if !node.selected {
				continue;
			}
			let mut candidates = Vec::with_capacity(2);
			if node.has_in_point() {
				candidates.push((ControlPointType::InHandle, node.in_point()));
			}
			if node.has_out_point() {
				candidates.push((ControlPointType::OutHandle, node.out_point()));
			}
			for (point_type, handle) in candidates {
				let distance = handle.distance(point);
				if distance <= tolerance && best.map_or(true, |result| distance < result.distance) {
					best = Some(PickResult {
						element: PickedElement::Point { node_index, point_type },
						point: handle,
						distance,
					});
				}
			}
		}
		best
	}

	/// The nearest in-tolerance anchor over all nodes, selected or not.
	fn pick_anchors(&self, point: DVec2, tolerance: f64) -> Option<PickResult> {
		let mut best: Option<PickResult> = None;
		for (node_index, node) in self.nodes().iter().enumerate() {
			let distance = node.anchor.distance(point);
			if distance <= tolerance && best.map_or(true, |result| distance < result.distance) {
				best = Some(PickResult {
					element: PickedElement::Point {
						node_index,
						point_type: ControlPointType::Anchor,
					},
					point: node.anchor,
					distance,
				});
			}
		}
		best
	}

	/// The closest point on the traced curve, if it lies within tolerance.
	fn pick_edge(&self, point: DVec2, tolerance: f64) -> Option<PickResult> {
		let (segment_index, t) = self.project(point, None)?;
		let closest = self.segment(segment_index)?.evaluate(t);
		let distance = closest.distance(point);
		(distance <= tolerance).then_some(PickResult {
			element: PickedElement::Edge { segment_index, t },
			point: closest,
			distance,
		})
	}
}
