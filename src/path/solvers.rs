use super::*;
use crate::consts::{DEFAULT_FLATNESS, DEFAULT_LENGTH_TOLERANCE};
use crate::utils::rectangle_contains_point;
use crate::ProjectionOptions;

use glam::DVec2;

/// Functionality that solves for properties of the whole path, such as bounds, projection, and marquee queries.
impl Path {
	/// The tight axis-aligned bounding box of the path as `[min_corner, max_corner]`, or `None` for
	/// an empty path. A path with a single node degenerates to that anchor's point box.
	/// Computed on first use and cached until the next mutation.
	pub fn bounding_box(&self) -> Option<[DVec2; 2]> {
		*self.cache.bounding_box.get_or_init(|| {
			if self.len_segments() == 0 {
				return self.nodes().iter().map(|node| node.anchor).fold(None, |bounds, anchor| {
					let [min_corner, max_corner] = bounds.unwrap_or([anchor, anchor]);
					Some([min_corner.min(anchor), max_corner.max(anchor)])
				});
			}
			self.segments().iter().map(|segment| segment.bounding_box()).reduce(|[min1, max1], [min2, max2]| [min1.min(min2), max1.max(max2)])
		})
	}

	/// The loose bounding box enclosing every anchor and handle, or `None` for an empty path.
	pub fn control_bounds(&self) -> Option<[DVec2; 2]> {
		if self.len_segments() == 0 {
			return self.bounding_box();
		}
		self.segments().iter().map(|segment| segment.control_bounds()).reduce(|[min1, max1], [min2, max2]| [min1.min(min2), max1.max(max2)])
	}

	/// Returns the segment index and `t` value of the closest point on the path to the provided point.
	/// Ties between segments resolve to the lowest segment index. Returns `None` for paths without segments.
	pub fn project(&self, point: DVec2, options: Option<ProjectionOptions>) -> Option<(usize, f64)> {
		let mut best: Option<(usize, f64, f64)> = None;
		for (index, segment) in self.segments().iter().enumerate() {
			let t = segment.project(point, options);
			let distance = segment.evaluate(t).distance(point);
			if best.map_or(true, |(_, _, best_distance)| distance < best_distance) {
				best = Some((index, t, distance));
			}
		}
		best.map(|(index, t, _)| (index, t))
	}

	/// Returns the indices of the nodes whose anchors fall inside `rectangle`, boundary included.
	/// Handles never count; a marquee catches anchors only.
	pub fn nodes_in_rect(&self, rectangle: [DVec2; 2]) -> Vec<usize> {
		self.nodes()
			.iter()
			.enumerate()
			.filter(|(_, node)| rectangle_contains_point(rectangle, node.anchor))
			.map(|(index, _)| index)
			.collect()
	}

	/// Returns true if any part of the path's traced curve touches `rectangle`, boundary included.
	/// A path without segments tests its lone anchor, if any.
	pub fn intersects_rect(&self, rectangle: [DVec2; 2]) -> bool {
		if self.len_segments() == 0 {
			return self.nodes().iter().any(|node| rectangle_contains_point(rectangle, node.anchor));
		}
		self.segments().iter().any(|segment| segment.intersects_rect(rectangle, DEFAULT_FLATNESS))
	}

	/// Approximate the whole path as a polyline within `tolerance` of the curve.
	/// A closed path's polyline ends where it starts; a reversed path's polyline runs back to front.
	pub fn flatten(&self, tolerance: f64) -> Vec<DVec2> {
		let Some(first) = self.first_node() else { return Vec::new() };

		let mut points = vec![first.anchor];
		for segment in self.segments() {
			let flattened = segment.flatten(tolerance);
			points.extend_from_slice(&flattened[1..]);
		}
		if self.reversed() {
			points.reverse();
		}
		points
	}

	/// The total arc length of the path, as the sum of its segments' approximate lengths.
	pub fn length(&self, tolerance: Option<f64>) -> f64 {
		let tolerance = tolerance.unwrap_or(DEFAULT_LENGTH_TOLERANCE);
		self.segments().iter().map(|segment| segment.length(Some(tolerance))).sum()
	}
}
