//! Adaptive flattening of cubic segments into line pieces by recursive midpoint subdivision.
//!
//! The walker visits flat pieces in curve order and hands each one to a consumer along with the
//! parametric range it covers on the original segment. Arc length, distance walks, polyline
//! generation, and marquee intersection are all built on this single traversal.

use crate::consts::MAX_SUBDIVISION_DEPTH;
use crate::Segment;

use glam::DVec2;

/// Visit the flat pieces of `segment` in curve order.
/// The consumer receives each piece together with the `[t_start, t_end]` range it spans on the
/// original segment, and returns whether the walk should continue. Returns false if the consumer
/// stopped the walk early.
pub(crate) fn walk_flat(segment: &Segment, tolerance: f64, consumer: &mut impl FnMut(&Segment, f64, f64) -> bool) -> bool {
	walk_flat_recurse(segment, tolerance, 0., 1., 0, consumer)
}

fn walk_flat_recurse(segment: &Segment, tolerance: f64, t_start: f64, t_end: f64, depth: usize, consumer: &mut impl FnMut(&Segment, f64, f64) -> bool) -> bool {
	if segment.is_flat(tolerance) {
		return consumer(segment, t_start, t_end);
	}
	if depth >= MAX_SUBDIVISION_DEPTH {
		// Emit the piece as-is rather than recurse further
		log::trace!("Subdivision depth cap reached at t range [{t_start}, {t_end}]");
		return consumer(segment, t_start, t_end);
	}

	// A local split at t = 0.5 lands on the midpoint of the global parametric range
	let [left, right] = segment.split(0.5);
	let t_middle = (t_start + t_end) / 2.;
	walk_flat_recurse(&left, tolerance, t_start, t_middle, depth + 1, consumer) && walk_flat_recurse(&right, tolerance, t_middle, t_end, depth + 1, consumer)
}

impl Segment {
	/// Approximate the curve as a polyline whose chords deviate from the curve by at most `tolerance`.
	/// The returned points start at `start` and end at `end`; a straight segment yields exactly those two points.
	pub fn flatten(&self, tolerance: f64) -> Vec<DVec2> {
		let mut points = vec![self.start];
		walk_flat(self, tolerance, &mut |piece, _, _| {
			points.push(piece.end);
			true
		});
		points
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::compare_points;
	use crate::consts::DEFAULT_FLATNESS;

	#[test]
	fn test_flatten_line_is_two_points() {
		let segment = Segment::from_line(DVec2::new(0., 0.), DVec2::new(100., 35.));
		let points = segment.flatten(DEFAULT_FLATNESS);
		assert_eq!(points, vec![DVec2::new(0., 0.), DVec2::new(100., 35.)]);
	}

	#[test]
	fn test_flatten_endpoints_and_order() {
		let segment = Segment::from_coordinates(0., 0., 0., 100., 100., 100., 100., 0.);
		let points = segment.flatten(DEFAULT_FLATNESS);
		assert!(points.len() > 2);
		assert!(compare_points(points[0], segment.start));
		assert!(compare_points(*points.last().unwrap(), segment.end));
		// x is monotone for this curve, so the polyline must be too
		assert!(points.windows(2).all(|pair| pair[0].x <= pair[1].x));
	}

	#[test]
	fn test_flatten_points_lie_on_curve() {
		let segment = Segment::from_coordinates(10., 10., 50., 120., 90., -40., 140., 30.);
		let mut ranges = Vec::new();
		walk_flat(&segment, DEFAULT_FLATNESS, &mut |piece, t_start, t_end| {
			ranges.push((t_start, t_end, piece.start, piece.end));
			true
		});
		// Ranges tile [0, 1] and piece endpoints match curve evaluation
		assert_eq!(ranges.first().unwrap().0, 0.);
		assert_eq!(ranges.last().unwrap().1, 1.);
		for (t_start, t_end, piece_start, piece_end) in ranges {
			assert!(t_start < t_end);
			assert!(compare_points(segment.evaluate(t_start), piece_start));
			assert!(compare_points(segment.evaluate(t_end), piece_end));
		}
	}

	#[test]
	fn test_flatten_depth_cap_bounds_subdivision() {
		// A tolerance of zero is never satisfied by a curved piece, so the walk runs
		// straight into the depth cap and must still terminate
		let segment = Segment::from_coordinates(0., 0., 0., 100., 100., 100., 100., 0.);
		let mut pieces = 0;
		let mut narrowest = f64::INFINITY;
		walk_flat(&segment, 0., &mut |_, t_start, t_end| {
			pieces += 1;
			narrowest = narrowest.min(t_end - t_start);
			true
		});
		assert!(pieces <= 1 << MAX_SUBDIVISION_DEPTH);
		assert!(narrowest >= 1. / (1 << MAX_SUBDIVISION_DEPTH) as f64);

		let points = segment.flatten(0.);
		assert_eq!(points.len(), pieces + 1);
		assert_eq!(points[0], segment.start);
		assert_eq!(*points.last().unwrap(), segment.end);
	}

	#[test]
	fn test_walk_flat_early_stop() {
		let segment = Segment::from_coordinates(0., 0., 0., 100., 100., 100., 100., 0.);
		let mut visited = 0;
		let completed = walk_flat(&segment, DEFAULT_FLATNESS, &mut |_, _, _| {
			visited += 1;
			visited < 3
		});
		assert!(!completed);
		assert_eq!(visited, 3);
	}
}
