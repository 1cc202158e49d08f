use super::*;
use crate::consts::{SELECTION_TOLERANCE, STRICT_MAX_ABSOLUTE_DIFFERENCE};
use crate::path::manipulators::checked_view_scale;

use glam::{DAffine2, DVec2};

/// Functionality that transforms paths, such as affine maps, direction reversal, and scissor splits.
impl Path {
	/// Apply an affine transformation to every node in place.
	pub fn apply_transform(&mut self, transform: DAffine2) {
		for node in &mut self.nodes {
			*node = node.with_transform(transform);
		}
		self.invalidate();
	}

	/// Physically reverse the path: the node order flips and every node swaps its handles.
	/// The traced point set is unchanged. Applying this twice restores the original path.
	pub fn reverse_path_direction(&mut self) {
		self.nodes.reverse();
		for node in &mut self.nodes {
			*node = node.flipped();
		}
		self.invalidate();
	}

	/// Cut the path at the node at `index`.
	/// An open path yields two open paths sharing that anchor; either side may degenerate to a
	/// single node when cutting at an end. A closed path opens up into one path that starts and
	/// ends at the cut anchor. Handles facing the cut are removed; all others are untouched.
	pub fn split_at_node(&self, index: usize) -> Option<(Path, Option<Path>)> {
		if index >= self.nodes.len() || self.len_segments() == 0 {
			return None;
		}

		if self.closed {
			let mut nodes: Vec<PathNode> = (0..=self.nodes.len()).map(|offset| self.nodes[(index + offset) % self.nodes.len()]).collect();
			let last = nodes.len() - 1;
			nodes[0] = nodes[0].chop_in_handle();
			nodes[last] = nodes[last].chop_out_handle();
			return Some((Path::from_nodes(nodes), None));
		}

		let mut left: Vec<PathNode> = self.nodes[..=index].to_vec();
		let mut right: Vec<PathNode> = self.nodes[index..].to_vec();
		let left_last = left.len() - 1;
		left[left_last] = left[left_last].chop_out_handle();
		right[0] = right[0].chop_in_handle();
		Some((Path::from_nodes(left), Some(Path::from_nodes(right))))
	}

	/// Cut the path inside the segment at `segment_index`, at parameter `t`.
	/// The cut point becomes a new endpoint anchor on each resulting side, with handles taken from
	/// the split halves so both sides trace their portion of the original curve exactly.
	/// A `t` at either end of the segment falls back to cutting at the existing node there.
	pub fn split_at(&self, segment_index: usize, t: f64) -> Option<(Path, Option<Path>)> {
		let segment = self.segment(segment_index)?;
		let t = t.clamp(0., 1.);
		if t <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
			return self.split_at_node(segment_index);
		}
		if t >= 1. - STRICT_MAX_ABSOLUTE_DIFFERENCE {
			return self.split_at_node((segment_index + 1) % self.nodes.len());
		}

		let [first, second] = segment.split(t);
		let split_point = first.end;
		let (start_node, end_node) = if segment.is_line_segment() {
			(PathNode::new(split_point), PathNode::new(split_point))
		} else {
			(PathNode::with_out_handle(split_point, second.handle_start), PathNode::with_handles(split_point, split_point, first.handle_end))
		};

		if self.closed {
			// One open path running from the cut, all the way around, and back to the cut
			let mut nodes = vec![start_node];
			for offset in 1..=self.nodes.len() {
				nodes.push(self.nodes[(segment_index + offset) % self.nodes.len()]);
			}
			if !segment.is_line_segment() {
				nodes[1] = nodes[1].with_in_point(second.handle_end);
				let last = nodes.len() - 1;
				nodes[last] = nodes[last].with_out_point(first.handle_start);
			}
			nodes.push(end_node);
			return Some((Path::from_nodes(nodes), None));
		}

		let mut left: Vec<PathNode> = self.nodes[..=segment_index].to_vec();
		let mut right: Vec<PathNode> = self.nodes[segment_index + 1..].to_vec();
		if !segment.is_line_segment() {
			let left_last = left.len() - 1;
			left[left_last] = left[left_last].with_out_point(first.handle_start);
			right[0] = right[0].with_in_point(second.handle_end);
		}
		left.push(end_node);
		right.insert(0, start_node);
		Some((Path::from_nodes(left), Some(Path::from_nodes(right))))
	}

	/// Cut the path at the closest point on it to `point`, within the selection tolerance at the
	/// given view scale. See [`Path::split_at`] for the shape of the result.
	pub fn split_at_point(&self, point: DVec2, view_scale: f64) -> Option<(Path, Option<Path>)> {
		let view_scale = checked_view_scale(view_scale);
		let (segment_index, t) = self.project(point, None)?;
		let closest = self.segment(segment_index)?.evaluate(t);
		if closest.distance(point) > SELECTION_TOLERANCE / view_scale {
			return None;
		}
		self.split_at(segment_index, t)
	}
}
