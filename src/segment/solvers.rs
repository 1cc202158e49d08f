use super::*;
use crate::consts::{MAX_ABSOLUTE_DIFFERENCE, MAX_SUBDIVISION_DEPTH, MIN_SEPARATION_VALUE, STRICT_MAX_ABSOLUTE_DIFFERENCE};
use crate::utils::{f64_approximately_in_range, line_segment_intersects_rectangle, rectangles_overlap_exclusive, rectangles_overlap_inclusive, solve_cubic, solve_quadratic};

use glam::{DMat2, DVec2};

/// Functionality that solve for various curve properties, such as bounds and intersections.
impl Segment {
	/// Returns the `t` values of the interior local extrema for each axis, found where the derivative's
	/// component crosses zero. Endpoints are excluded.
	pub fn local_extrema(&self) -> [Vec<f64>; 2] {
		let d0 = self.handle_start - self.start;
		let d1 = self.handle_end - self.handle_start;
		let d2 = self.end - self.handle_end;

		let a = d0 - 2. * d1 + d2;
		let b = 2. * (d1 - d0);
		let c = d0;

		let discriminant = b * b - 4. * a * c;
		let two_times_a = 2. * a;

		[
			solve_quadratic(discriminant.x, two_times_a.x, b.x, c.x),
			solve_quadratic(discriminant.y, two_times_a.y, b.y, c.y),
		]
		.map(|roots| roots.into_iter().flatten().filter(|&t| t > 0. && t < 1.).collect())
	}

	/// Return the tight axis-aligned bounding box of the curve as `[min_corner, max_corner]`.
	/// The box touches the curve at the endpoints and at interior axis extrema only.
	pub fn bounding_box(&self) -> [DVec2; 2] {
		let mut min_corner = self.start.min(self.end);
		let mut max_corner = self.start.max(self.end);
		for t in self.local_extrema().into_iter().flatten() {
			let point = self.evaluate(t);
			min_corner = min_corner.min(point);
			max_corner = max_corner.max(point);
		}
		[min_corner, max_corner]
	}

	/// Return the loose axis-aligned bounding box enclosing all four control points.
	/// Always contains [`Segment::bounding_box`], and is much cheaper to compute.
	pub fn control_bounds(&self) -> [DVec2; 2] {
		[
			self.start.min(self.handle_start).min(self.handle_end).min(self.end),
			self.start.max(self.handle_start).max(self.handle_end).max(self.end),
		]
	}

	/// Returns true if the control-point bounding box overlaps `rectangle` with positive area.
	/// A quick rejection test; edge-to-edge contact does not count.
	pub fn control_bounds_intersect_rect(&self, rectangle: [DVec2; 2]) -> bool {
		rectangles_overlap_exclusive(self.control_bounds(), rectangle)
	}

	/// Returns true if the tight curve bounding box overlaps `rectangle` with positive area.
	pub fn curve_bounds_intersect_rect(&self, rectangle: [DVec2; 2]) -> bool {
		rectangles_overlap_exclusive(self.bounding_box(), rectangle)
	}

	/// Returns true if the curve itself touches `rectangle`, boundary included.
	/// Subdivides down to flat pieces and tests each chord against the rectangle.
	pub fn intersects_rect(&self, rectangle: [DVec2; 2], tolerance: f64) -> bool {
		fn recurse(segment: &Segment, rectangle: [DVec2; 2], tolerance: f64, depth: usize) -> bool {
			if !rectangles_overlap_inclusive(segment.control_bounds(), rectangle) {
				return false;
			}
			if segment.is_flat(tolerance) || depth >= MAX_SUBDIVISION_DEPTH {
				return line_segment_intersects_rectangle(segment.start, segment.end, rectangle);
			}
			let [left, right] = segment.split(0.5);
			recurse(&left, rectangle, tolerance, depth + 1) || recurse(&right, rectangle, tolerance, depth + 1)
		}
		recurse(self, rectangle, tolerance, 0)
	}

	/// Returns the `t` values at which the curve crosses the line segment from `line_start` to `line_end`, sorted ascending.
	/// The curve is rotated so the line lies along the x-axis, reducing the problem to the roots of a cubic.
	pub fn line_intersections(&self, line_start: DVec2, line_end: DVec2) -> Vec<f64> {
		let direction = line_end - line_start;
		if direction.length_squared() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
			return Vec::new();
		}

		let rotation = DMat2::from_angle(-direction.y.atan2(direction.x));
		let rotated = self.apply_transformation(|point| rotation * (point - line_start));
		let line_length = direction.length();

		// In the rotated frame the line is y = 0 for x in [0, line_length]
		let [y0, y1, y2, y3] = [rotated.start.y, rotated.handle_start.y, rotated.handle_end.y, rotated.end.y];
		let a = -y0 + 3. * y1 - 3. * y2 + y3;
		let b = 3. * y0 - 6. * y1 + 3. * y2;
		let c = -3. * y0 + 3. * y1;
		let d = y0;

		let mut intersections: Vec<f64> = solve_cubic(a, b, c, d)
			.into_iter()
			.flatten()
			.filter(|&t| f64_approximately_in_range(t, 0., 1., MAX_ABSOLUTE_DIFFERENCE))
			.map(|t| t.clamp(0., 1.))
			.filter(|&t| f64_approximately_in_range(rotated.evaluate(t).x, 0., line_length, MAX_ABSOLUTE_DIFFERENCE))
			.collect();
		intersections.sort_by(|a, b| a.partial_cmp(b).unwrap());
		intersections.dedup_by(|a, b| (*a - *b).abs() < MIN_SEPARATION_VALUE);
		intersections
	}

	/// Returns the first crossing (smallest `t`) of the curve with the provided line segment, if any.
	pub fn line_intersection(&self, line_start: DVec2, line_end: DVec2) -> Option<f64> {
		self.line_intersections(line_start, line_end).into_iter().next()
	}
}
