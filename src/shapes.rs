//! Generators for the stock editor shapes. Each returns a plain [`Path`]; generated shapes carry
//! no memory of the tool that made them and edit like any hand-drawn path.

use crate::node::PathNode;
use crate::path::Path;

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

/// The fraction of the radius that a cubic handle must extend to approximate a quarter circle.
/// Based on <https://pomax.github.io/bezierinfo/#circles_cubic>
const HANDLE_OFFSET_FACTOR: f64 = 0.551784777779014;

/// Radius decay applied per quarter turn of a spiral.
const SPIRAL_DECAY: f64 = 0.9;

/// An open two-node path tracing a straight line.
pub fn line(from: DVec2, to: DVec2) -> Path {
	Path::from_nodes(vec![PathNode::new(from), PathNode::new(to)])
}

/// A closed four-corner path covering the rectangle spanned by the two corners.
pub fn rectangle(corner1: DVec2, corner2: DVec2) -> Path {
	let min_corner = corner1.min(corner2);
	let max_corner = corner1.max(corner2);
	Path::new(
		vec![
			PathNode::new(min_corner),
			PathNode::new(DVec2::new(max_corner.x, min_corner.y)),
			PathNode::new(max_corner),
			PathNode::new(DVec2::new(min_corner.x, max_corner.y)),
		],
		true,
	)
}

/// A closed path covering the rectangle spanned by the two corners, with circular arcs of the
/// given radius replacing the corners. The radius is clamped to half the shorter side; a radius
/// of zero or less degenerates to a plain rectangle.
pub fn rounded_rectangle(corner1: DVec2, corner2: DVec2, radius: f64) -> Path {
	let min_corner = corner1.min(corner2);
	let max_corner = corner1.max(corner2);
	let size = max_corner - min_corner;
	let radius = radius.min(size.x / 2.).min(size.y / 2.);
	if radius <= 0. {
		return rectangle(corner1, corner2);
	}

	let handle_offset = radius * HANDLE_OFFSET_FACTOR;
	let (x1, y1) = (min_corner.x, min_corner.y);
	let (x2, y2) = (max_corner.x, max_corner.y);

	// Two nodes per corner, arc handles facing into the corner, straight sides between corners
	Path::new(
		vec![
			PathNode::with_handles(DVec2::new(x1 + radius, y1), DVec2::new(x1 + radius, y1), DVec2::new(x1 + radius - handle_offset, y1)),
			PathNode::with_handles(DVec2::new(x2 - radius, y1), DVec2::new(x2 - radius + handle_offset, y1), DVec2::new(x2 - radius, y1)),
			PathNode::with_handles(DVec2::new(x2, y1 + radius), DVec2::new(x2, y1 + radius), DVec2::new(x2, y1 + radius - handle_offset)),
			PathNode::with_handles(DVec2::new(x2, y2 - radius), DVec2::new(x2, y2 - radius + handle_offset), DVec2::new(x2, y2 - radius)),
			PathNode::with_handles(DVec2::new(x2 - radius, y2), DVec2::new(x2 - radius, y2), DVec2::new(x2 - radius + handle_offset, y2)),
			PathNode::with_handles(DVec2::new(x1 + radius, y2), DVec2::new(x1 + radius - handle_offset, y2), DVec2::new(x1 + radius, y2)),
			PathNode::with_handles(DVec2::new(x1, y2 - radius), DVec2::new(x1, y2 - radius), DVec2::new(x1, y2 - radius + handle_offset)),
			PathNode::with_handles(DVec2::new(x1, y1 + radius), DVec2::new(x1, y1 + radius - handle_offset), DVec2::new(x1, y1 + radius)),
		],
		true,
	)
}

/// A closed four-node path approximating the ellipse inscribed in the rectangle spanned by the two corners.
pub fn oval(corner1: DVec2, corner2: DVec2) -> Path {
	let min_corner = corner1.min(corner2);
	let max_corner = corner1.max(corner2);
	let center = (min_corner + max_corner) / 2.;
	let radii = (max_corner - min_corner) / 2.;
	let handle_offset = radii * HANDLE_OFFSET_FACTOR;

	Path::new(
		vec![
			PathNode::with_handles(
				DVec2::new(center.x, min_corner.y),
				DVec2::new(center.x + handle_offset.x, min_corner.y),
				DVec2::new(center.x - handle_offset.x, min_corner.y),
			),
			PathNode::with_handles(
				DVec2::new(max_corner.x, center.y),
				DVec2::new(max_corner.x, center.y + handle_offset.y),
				DVec2::new(max_corner.x, center.y - handle_offset.y),
			),
			PathNode::with_handles(
				DVec2::new(center.x, max_corner.y),
				DVec2::new(center.x - handle_offset.x, max_corner.y),
				DVec2::new(center.x + handle_offset.x, max_corner.y),
			),
			PathNode::with_handles(
				DVec2::new(min_corner.x, center.y),
				DVec2::new(min_corner.x, center.y - handle_offset.y),
				DVec2::new(min_corner.x, center.y + handle_offset.y),
			),
		],
		true,
	)
}

/// A closed polygon with `sides` corner nodes placed evenly on a circle, the first one pointing up.
/// Fewer than three sides are clamped to three.
pub fn regular_polygon(center: DVec2, sides: usize, radius: f64) -> Path {
	let sides = sides.max(3);
	let nodes = (0..sides)
		.map(|index| {
			let angle = -FRAC_PI_2 + index as f64 * TAU / sides as f64;
			PathNode::new(center + radius * DVec2::from_angle(angle))
		})
		.collect();
	Path::new(nodes, true)
}

/// A closed star with `points` tips: corner nodes alternating between the outer and inner radius,
/// the first tip pointing up. Fewer than three points are clamped to three.
pub fn star(center: DVec2, points: usize, outer_radius: f64, inner_radius: f64) -> Path {
	let points = points.max(3);
	let nodes = (0..points * 2)
		.map(|index| {
			let radius = if index % 2 == 0 { outer_radius } else { inner_radius };
			let angle = -FRAC_PI_2 + index as f64 * TAU / (points * 2) as f64;
			PathNode::new(center + radius * DVec2::from_angle(angle))
		})
		.collect();
	Path::new(nodes, true)
}

/// An open spiral winding inward from `radius`, one node per quarter turn over `segments` quarter
/// turns, with the radius decaying each step. Handles approximate circular arcs at each node's radius.
pub fn spiral(center: DVec2, radius: f64, segments: usize) -> Path {
	let nodes = (0..=segments)
		.map(|index| {
			let step_radius = radius * SPIRAL_DECAY.powi(index as i32);
			let radial = DVec2::from_angle(index as f64 * FRAC_PI_2);
			let anchor = center + step_radius * radial;
			let tangent = radial.perp() * step_radius * HANDLE_OFFSET_FACTOR;
			PathNode::with_handles(anchor, anchor + tangent, anchor - tangent)
		})
		.collect();
	Path::from_nodes(nodes)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::compare_f64s;
	use crate::consts::{DEFAULT_FLATNESS, MAX_ABSOLUTE_DIFFERENCE};

	#[test]
	fn test_line() {
		let path = line(DVec2::new(0., 0.), DVec2::new(30., 40.));
		assert!(!path.closed());
		assert_eq!(path.len_segments(), 1);
		assert!(compare_f64s(path.length(None), 50.));
	}

	#[test]
	fn test_rectangle_normalizes_corners() {
		let path = rectangle(DVec2::new(50., 40.), DVec2::new(10., 20.));
		assert!(path.closed());
		assert_eq!(path.len(), 4);
		assert!(path.nodes().iter().all(|node| node.is_corner()));
		assert_eq!(path.bounding_box(), Some([DVec2::new(10., 20.), DVec2::new(50., 40.)]));
	}

	#[test]
	fn test_rounded_rectangle() {
		let path = rounded_rectangle(DVec2::new(0., 0.), DVec2::new(100., 60.), 10.);
		assert!(path.closed());
		assert_eq!(path.len(), 8);
		let [min_corner, max_corner] = path.bounding_box().unwrap();
		assert!(min_corner.abs_diff_eq(DVec2::new(0., 0.), MAX_ABSOLUTE_DIFFERENCE));
		assert!(max_corner.abs_diff_eq(DVec2::new(100., 60.), MAX_ABSOLUTE_DIFFERENCE));

		// The corner point itself is outside the rounded outline
		assert!(!path.intersects_rect([DVec2::new(-1., -1.), DVec2::new(1., 1.)]));

		// An oversized radius clamps to half the shorter side, a zero radius degenerates to a rectangle
		assert_eq!(rounded_rectangle(DVec2::new(0., 0.), DVec2::new(100., 60.), 500.).len(), 8);
		assert_eq!(rounded_rectangle(DVec2::new(0., 0.), DVec2::new(100., 60.), 0.).len(), 4);
	}

	#[test]
	fn test_oval_fills_frame() {
		let path = oval(DVec2::new(0., 0.), DVec2::new(200., 100.));
		assert!(path.closed());
		assert_eq!(path.len(), 4);
		let [min_corner, max_corner] = path.bounding_box().unwrap();
		assert!(min_corner.abs_diff_eq(DVec2::new(0., 0.), MAX_ABSOLUTE_DIFFERENCE));
		assert!(max_corner.abs_diff_eq(DVec2::new(200., 100.), MAX_ABSOLUTE_DIFFERENCE));

		// Every flattened point lies close to the true ellipse
		let center = DVec2::new(100., 50.);
		for point in path.flatten(DEFAULT_FLATNESS) {
			let offset = (point - center) / DVec2::new(100., 50.);
			assert!((offset.length() - 1.).abs() < 5e-3);
		}
	}

	#[test]
	fn test_regular_polygon() {
		let path = regular_polygon(DVec2::new(0., 0.), 6, 10.);
		assert!(path.closed());
		assert_eq!(path.len(), 6);
		for node in path.nodes() {
			assert!(node.is_corner());
			assert!(compare_f64s(node.anchor.length(), 10.));
		}
		// The first corner points up
		assert!(path.nodes()[0].anchor.abs_diff_eq(DVec2::new(0., -10.), MAX_ABSOLUTE_DIFFERENCE));
		// Sides are clamped to at least three
		assert_eq!(regular_polygon(DVec2::ZERO, 1, 10.).len(), 3);
	}

	#[test]
	fn test_star_alternates_radii() {
		let path = star(DVec2::new(0., 0.), 5, 10., 4.);
		assert!(path.closed());
		assert_eq!(path.len(), 10);
		for (index, node) in path.nodes().iter().enumerate() {
			let expected = if index % 2 == 0 { 10. } else { 4. };
			assert!(compare_f64s(node.anchor.length(), expected));
		}
	}

	#[test]
	fn test_spiral_winds_inward() {
		let path = spiral(DVec2::new(0., 0.), 100., 8);
		assert!(!path.closed());
		assert_eq!(path.len(), 9);
		let radii: Vec<f64> = path.nodes().iter().map(|node| node.anchor.length()).collect();
		assert!(radii.windows(2).all(|pair| pair[1] < pair[0]));
		assert!(compare_f64s(radii[0], 100.));
	}
}
