use super::*;
use crate::consts::{MAX_ABSOLUTE_DIFFERENCE, STRICT_MAX_ABSOLUTE_DIFFERENCE};
use crate::utils::are_points_collinear;

use glam::DVec2;

/// Functionality relating to core `Segment` operations, such as constructors and classification.
impl Segment {
	/// Create a cubic segment from its four control points.
	pub fn new(start: DVec2, handle_start: DVec2, handle_end: DVec2, end: DVec2) -> Self {
		Segment { start, handle_start, handle_end, end }
	}

	/// Create a cubic segment from raw coordinates.
	pub fn from_coordinates(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) -> Self {
		Segment::new(DVec2::new(x1, y1), DVec2::new(x2, y2), DVec2::new(x3, y3), DVec2::new(x4, y4))
	}

	/// Create a straight segment between two points, with both handles collapsed onto their endpoints.
	pub fn from_line(start: DVec2, end: DVec2) -> Self {
		Segment::new(start, start, end, end)
	}

	/// Return the four control points as an array.
	pub fn get_points(&self) -> [DVec2; 4] {
		[self.start, self.handle_start, self.handle_end, self.end]
	}

	/// Returns true if both handles are collapsed exactly onto their endpoints.
	pub fn is_line_segment(&self) -> bool {
		self.handle_start == self.start && self.handle_end == self.end
	}

	/// Returns true if both handles are collinear with the chord between the endpoints.
	pub fn is_collinear(&self) -> bool {
		are_points_collinear(self.start, self.handle_start, self.end) && are_points_collinear(self.start, self.handle_end, self.end)
	}

	/// Returns true if both handles fall within the axis-aligned box spanned by the endpoints.
	pub fn is_contained(&self) -> bool {
		let min_corner = self.start.min(self.end);
		let max_corner = self.start.max(self.end);
		self.handle_start.cmpge(min_corner).all()
			&& self.handle_start.cmple(max_corner).all()
			&& self.handle_end.cmpge(min_corner).all()
			&& self.handle_end.cmple(max_corner).all()
	}

	/// Returns true if the curve traces the same point set as the straight line between its endpoints.
	/// Handles may be non-degenerate as long as they stay on the chord between the endpoints.
	pub fn is_line_segment_shape(&self) -> bool {
		self.is_line_segment() || (self.is_collinear() && self.is_contained())
	}

	/// Returns true if the maximum perpendicular deviation of either handle from the chord is within `tolerance`.
	/// This is monotone in `tolerance`: a segment flat at some tolerance is flat at every larger one.
	pub fn is_flat(&self, tolerance: f64) -> bool {
		if self.is_line_segment() {
			return true;
		}

		let chord = self.end - self.start;
		let chord_length_squared = chord.length_squared();
		if chord_length_squared <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
			// Degenerate chord, fall back to raw handle excursions from the start point
			return (self.handle_start - self.start).length() <= tolerance && (self.handle_end - self.start).length() <= tolerance;
		}

		let chord_length = chord_length_squared.sqrt();
		let deviation_start = chord.perp_dot(self.handle_start - self.start).abs() / chord_length;
		let deviation_end = chord.perp_dot(self.handle_end - self.start).abs() / chord_length;
		deviation_start <= tolerance && deviation_end <= tolerance
	}

	/// Returns true if the corresponding points of the two segments are within some absolute value difference.
	pub fn abs_diff_eq(&self, other: &Segment, max_abs_diff: f64) -> bool {
		self.get_points().iter().zip(other.get_points().iter()).all(|(a, b)| a.abs_diff_eq(*b, max_abs_diff))
	}

	/// Returns true if the segment is equivalent to a point, that is all four control points coincide.
	pub fn is_point(&self) -> bool {
		let start = self.start;
		self.get_points().iter().all(|point| point.abs_diff_eq(start, MAX_ABSOLUTE_DIFFERENCE))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_line() {
		let segment = Segment::from_line(DVec2::new(10., 10.), DVec2::new(50., 50.));
		assert!(segment.is_line_segment());
		assert!(segment.is_line_segment_shape());
	}

	#[test]
	fn test_is_line_segment_shape_with_collinear_handles() {
		// Handles on the chord but not on the endpoints still trace a straight line
		let segment = Segment::from_coordinates(0., 0., 25., 25., 75., 75., 100., 100.);
		assert!(!segment.is_line_segment());
		assert!(segment.is_line_segment_shape());

		// Collinear handles outside the endpoint box overshoot the chord
		let overshoot = Segment::from_coordinates(0., 0., 150., 150., 75., 75., 100., 100.);
		assert!(!overshoot.is_line_segment_shape());

		// A real curve is not a line shape
		let curve = Segment::from_coordinates(0., 0., 25., 80., 75., 80., 100., 0.);
		assert!(!curve.is_line_segment_shape());
	}

	#[test]
	fn test_is_flat_monotone_in_tolerance() {
		let segment = Segment::from_coordinates(0., 0., 30., 12., 70., 12., 100., 0.);
		assert!(!segment.is_flat(1.));
		assert!(segment.is_flat(12.5));
		assert!(segment.is_flat(100.));
	}

	#[test]
	fn test_is_flat_degenerate_chord() {
		// Coincident endpoints with a handle loop
		let segment = Segment::from_coordinates(10., 10., 40., 10., 10., 40., 10., 10.);
		assert!(!segment.is_flat(1.));
		assert!(segment.is_flat(50.));
	}

	#[test]
	fn test_is_point() {
		let point = DVec2::new(-11., 66.);
		assert!(Segment::new(point, point, point, point).is_point());
		assert!(!Segment::from_line(point, DVec2::new(0., 0.)).is_point());
	}
}
