use super::*;

use glam::DVec2;

/// Functionality that transforms segments, such as splitting and reversing.
impl Segment {
	/// Returns the pair of segments obtained by splitting the curve at `t`, computed with de Casteljau's algorithm.
	/// The two halves share the split point and together trace the original curve exactly.
	pub fn split(&self, t: f64) -> [Segment; 2] {
		let start_to_handle = self.start.lerp(self.handle_start, t);
		let handle_to_handle = self.handle_start.lerp(self.handle_end, t);
		let handle_to_end = self.handle_end.lerp(self.end, t);

		let first_inner = start_to_handle.lerp(handle_to_handle, t);
		let second_inner = handle_to_handle.lerp(handle_to_end, t);
		let split_point = first_inner.lerp(second_inner, t);

		[
			Segment::new(self.start, start_to_handle, first_inner, split_point),
			Segment::new(split_point, second_inner, handle_to_end, self.end),
		]
	}

	/// Returns the same curve traced in the opposite direction.
	pub fn reverse(&self) -> Segment {
		Segment::new(self.end, self.handle_end, self.handle_start, self.start)
	}

	/// Returns a segment with a transformation applied to each of its four points.
	pub fn apply_transformation(&self, transformation_function: impl Fn(DVec2) -> DVec2) -> Segment {
		Segment::new(
			transformation_function(self.start),
			transformation_function(self.handle_start),
			transformation_function(self.handle_end),
			transformation_function(self.end),
		)
	}

	/// Returns a copy of the segment translated by `translation`.
	pub fn translate(&self, translation: DVec2) -> Segment {
		self.apply_transformation(|point| point + translation)
	}
}
