use super::*;
use crate::consts::{MAX_ABSOLUTE_DIFFERENCE, SELECTION_TOLERANCE, STRICT_MAX_ABSOLUTE_DIFFERENCE};

use glam::DVec2;

/// Functionality relating to mutating the node list. Every operation here invalidates the cached geometry.
impl Path {
	/// Append a node to the end of the path.
	pub fn push_node(&mut self, node: PathNode) {
		self.nodes.push(node);
		self.invalidate();
	}

	/// Insert a node before `index`. Out-of-range indices append.
	pub fn insert_node(&mut self, index: usize, node: PathNode) {
		self.nodes.insert(index.min(self.nodes.len()), node);
		self.invalidate();
	}

	/// Remove and return the node at `index`, if it exists. The neighbors keep their handles,
	/// so the surrounding curve relaxes toward them rather than collapsing.
	pub fn remove_node(&mut self, index: usize) -> Option<PathNode> {
		if index >= self.nodes.len() {
			return None;
		}
		let node = self.nodes.remove(index);
		self.invalidate();
		Some(node)
	}

	/// Replace the node at `index`. Out-of-range indices are ignored.
	pub fn replace_node(&mut self, index: usize, node: PathNode) {
		if let Some(slot) = self.nodes.get_mut(index) {
			*slot = node;
			self.invalidate();
		}
	}

	pub fn set_closed(&mut self, closed: bool) {
		self.closed = closed;
		self.invalidate();
	}

	pub fn set_reversed(&mut self, reversed: bool) {
		self.reversed = reversed;
		self.invalidate();
	}

	/// Set the selection flag on the node at `index`. Selection does not affect geometry,
	/// so the cached segments and bounds stay valid.
	pub fn set_node_selected(&mut self, index: usize, selected: bool) {
		if let Some(node) = self.nodes.get_mut(index) {
			node.selected = selected;
		}
	}

	/// Iterate the currently selected nodes in storage order.
	pub fn selected_nodes(&self) -> impl Iterator<Item = &PathNode> {
		self.nodes.iter().filter(|node| node.selected)
	}

	pub fn any_nodes_selected(&self) -> bool {
		self.nodes.iter().any(|node| node.selected)
	}

	pub fn all_nodes_selected(&self) -> bool {
		!self.nodes.is_empty() && self.nodes.iter().all(|node| node.selected)
	}

	/// Returns true if the path has enough nodes that one can be deleted while leaving a drawable path.
	pub fn can_delete_anchors(&self) -> bool {
		self.nodes.len() > 2
	}

	/// Remove the anchor at `index` if the path can spare it. Returns the removed node.
	pub fn delete_anchor(&mut self, index: usize) -> Option<PathNode> {
		if !self.can_delete_anchors() {
			return None;
		}
		self.remove_node(index)
	}

	/// Split the segment at `segment_index` at parameter `t` and insert a node at the split point,
	/// preserving the traced curve exactly. The neighbors' facing handles are trimmed to the split
	/// halves. Returns the index of the new node. A `t` at either end of the segment inserts
	/// nothing and returns the index of the existing node there.
	pub fn insert_node_at(&mut self, segment_index: usize, t: f64) -> Option<usize> {
		let segment = self.segment(segment_index)?;
		let t = t.clamp(0., 1.);
		if t <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
			return Some(segment_index);
		}
		if t >= 1. - STRICT_MAX_ABSOLUTE_DIFFERENCE {
			return Some((segment_index + 1) % self.nodes.len());
		}

		let next_index = (segment_index + 1) % self.nodes.len();
		let [first, second] = segment.split(t);

		if segment.is_line_segment() {
			// Splitting a straight side needs no handles anywhere
			self.nodes.insert(segment_index + 1, PathNode::new(first.end));
		} else {
			self.nodes[segment_index] = self.nodes[segment_index].with_out_point(first.handle_start);
			self.nodes[next_index] = self.nodes[next_index].with_in_point(second.handle_end);
			self.nodes.insert(segment_index + 1, PathNode::with_handles(first.end, second.handle_start, first.handle_end));
		}

		self.invalidate();
		Some(segment_index + 1)
	}

	/// Insert a node at the closest point on the path to `point`, preserving the curve's shape.
	/// Returns `None` when the path has no segments or the closest point is farther than the
	/// selection tolerance at the given view scale.
	pub fn add_anchor_at_point(&mut self, point: DVec2, view_scale: f64) -> Option<usize> {
		let view_scale = checked_view_scale(view_scale);
		let (segment_index, t) = self.project(point, None)?;
		let closest = self.segment(segment_index)?.evaluate(t);
		if closest.distance(point) > SELECTION_TOLERANCE / view_scale {
			return None;
		}
		self.insert_node_at(segment_index, t)
	}

	/// Append the nodes of `other` to this open path. When the seam anchors coincide, the two
	/// boundary nodes are merged into one carrying this path's incoming handle and the other
	/// path's outgoing handle.
	pub fn append_path(&mut self, other: &Path) {
		let mut other_nodes = other.nodes.iter();
		if let (Some(last), Some(first)) = (self.nodes.last_mut(), other.nodes.first()) {
			if last.anchor.abs_diff_eq(first.anchor, MAX_ABSOLUTE_DIFFERENCE) {
				*last = PathNode {
					out_handle: first.out_handle,
					..*last
				};
				other_nodes.next();
			}
		}
		self.nodes.extend(other_nodes.copied());
		self.invalidate();
	}
}

pub(crate) fn checked_view_scale(view_scale: f64) -> f64 {
	if view_scale.is_finite() && view_scale > 0. {
		view_scale
	} else {
		debug_assert!(false, "view scale must be finite and positive, got {view_scale}");
		log::warn!("Ignoring invalid view scale {view_scale}, using 1");
		1.
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::compare_vec_of_points;
	use crate::consts::DEFAULT_FLATNESS;

	fn arch() -> Path {
		Path::from_nodes(vec![
			PathNode::with_out_handle(DVec2::new(0., 0.), DVec2::new(0., 100.)),
			PathNode::with_handles(DVec2::new(100., 0.), DVec2::new(100., 0.), DVec2::new(100., 100.)),
		])
	}

	#[test]
	fn test_checked_view_scale_passes_valid_scales() {
		assert_eq!(checked_view_scale(1.), 1.);
		assert_eq!(checked_view_scale(0.25), 0.25);
		assert_eq!(checked_view_scale(4.), 4.);
	}

	#[cfg(not(debug_assertions))]
	#[test]
	fn test_checked_view_scale_falls_back_to_one() {
		assert_eq!(checked_view_scale(0.), 1.);
		assert_eq!(checked_view_scale(-2.), 1.);
		assert_eq!(checked_view_scale(f64::NAN), 1.);
		assert_eq!(checked_view_scale(f64::INFINITY), 1.);
	}

	#[cfg(debug_assertions)]
	#[test]
	#[should_panic(expected = "view scale must be finite and positive")]
	fn test_checked_view_scale_asserts_on_invalid_scale() {
		checked_view_scale(0.);
	}

	#[test]
	fn test_mutators_invalidate_cache() {
		let mut path = arch();
		assert_eq!(path.segments().len(), 1);
		path.push_node(PathNode::new(DVec2::new(200., 0.)));
		assert_eq!(path.segments().len(), 2);
		path.remove_node(2);
		assert_eq!(path.segments().len(), 1);
		path.set_closed(true);
		assert_eq!(path.segments().len(), 2);
	}

	#[test]
	fn test_selection_queries() {
		let mut path = arch();
		assert!(!path.any_nodes_selected());
		path.set_node_selected(0, true);
		assert!(path.any_nodes_selected());
		assert!(!path.all_nodes_selected());
		assert_eq!(path.selected_nodes().count(), 1);
		path.set_node_selected(1, true);
		assert!(path.all_nodes_selected());
	}

	#[test]
	fn test_insert_node_at_preserves_shape() {
		let mut path = arch();
		let before = path.flatten(DEFAULT_FLATNESS);

		let new_index = path.insert_node_at(0, 0.3).unwrap();
		assert_eq!(new_index, 1);
		assert_eq!(path.len(), 3);

		let after = path.flatten(DEFAULT_FLATNESS);
		// The polylines may differ in vertex placement but not beyond flattening tolerance;
		// comparing each against the same dense sampling keeps the check simple
		let original = arch();
		for t in [0.1, 0.35, 0.62, 0.9] {
			let expected = original.segment(0).unwrap().evaluate(t);
			let (segment_index, projected_t) = path.project(expected, None).unwrap();
			let actual = path.segment(segment_index).unwrap().evaluate(projected_t);
			assert!(expected.distance(actual) < 1e-2);
		}
		assert!(before.len() > 2 && after.len() > 2);
	}

	#[test]
	fn test_insert_node_at_line_stays_cornered() {
		let mut path = Path::from_nodes(vec![PathNode::new(DVec2::new(0., 0.)), PathNode::new(DVec2::new(100., 0.))]);
		let new_index = path.insert_node_at(0, 0.5).unwrap();
		let node = path.nodes()[new_index];
		assert!(node.is_corner());
		assert_eq!(node.anchor, DVec2::new(50., 0.));
		assert!(path.nodes()[0].is_corner());
		assert!(path.nodes()[2].is_corner());
	}

	#[test]
	fn test_insert_node_at_segment_ends_is_a_no_op() {
		let mut path = arch();
		assert_eq!(path.insert_node_at(0, 0.), Some(0));
		assert_eq!(path.insert_node_at(0, 1.), Some(1));
		assert_eq!(path.len(), 2);
	}

	#[test]
	fn test_add_anchor_at_point() {
		let mut path = arch();
		let on_curve = path.segment(0).unwrap().evaluate(0.4);
		let new_index = path.add_anchor_at_point(on_curve + DVec2::new(0., 2.), 1.).unwrap();
		assert_eq!(path.len(), 3);
		assert!(path.nodes()[new_index].anchor.distance(on_curve) < 3.);

		// A point far from the path is rejected
		assert!(path.add_anchor_at_point(DVec2::new(500., 500.), 1.).is_none());
	}

	#[test]
	fn test_delete_anchor_respects_minimum() {
		let mut path = arch();
		assert!(!path.can_delete_anchors());
		assert!(path.delete_anchor(0).is_none());

		path.push_node(PathNode::new(DVec2::new(200., 0.)));
		assert!(path.can_delete_anchors());
		assert!(path.delete_anchor(2).is_some());
		assert_eq!(path.len(), 2);
	}

	#[test]
	fn test_append_path_merges_coincident_seam() {
		let mut first = Path::from_nodes(vec![PathNode::new(DVec2::new(0., 0.)), PathNode::with_handles(DVec2::new(100., 0.), DVec2::new(100., 0.), DVec2::new(80., 20.))]);
		let second = Path::from_nodes(vec![PathNode::with_out_handle(DVec2::new(100., 0.), DVec2::new(120., -20.)), PathNode::new(DVec2::new(200., 0.))]);

		first.append_path(&second);
		assert_eq!(first.len(), 3);
		// The seam node carries the incoming handle from the left path and the outgoing handle from the right
		let seam = first.nodes()[1];
		assert_eq!(seam.in_point(), DVec2::new(80., 20.));
		assert_eq!(seam.out_point(), DVec2::new(120., -20.));
	}

	#[test]
	fn test_append_path_disjoint_concatenates() {
		let mut first = Path::from_nodes(vec![PathNode::new(DVec2::new(0., 0.)), PathNode::new(DVec2::new(50., 0.))]);
		let second = Path::from_nodes(vec![PathNode::new(DVec2::new(100., 0.)), PathNode::new(DVec2::new(150., 0.))]);
		first.append_path(&second);
		assert_eq!(first.len(), 4);
		let anchors: Vec<DVec2> = first.nodes().iter().map(|node| node.anchor).collect();
		assert!(compare_vec_of_points(
			&anchors,
			&[DVec2::new(0., 0.), DVec2::new(50., 0.), DVec2::new(100., 0.), DVec2::new(150., 0.)],
			MAX_ABSOLUTE_DIFFERENCE
		));
	}
}
