use crate::consts::{MAX_ABSOLUTE_DIFFERENCE, STRICT_MAX_ABSOLUTE_DIFFERENCE};

use glam::{BVec2, DMat2, DVec2};

/// Find the roots of the linear equation `ax + b`.
pub fn solve_linear(a: f64, b: f64) -> [Option<f64>; 3] {
	// There exist roots when `a` is not 0
	if a.abs() > MAX_ABSOLUTE_DIFFERENCE {
		[Some(-b / a), None, None]
	} else {
		[None; 3]
	}
}

/// Find the roots of the quadratic equation `ax^2 + bx + c`.
/// Precompute the `discriminant` (`b^2 - 4ac`) and `two_times_a` arguments prior to calling this function for efficiency purposes.
pub fn solve_quadratic(discriminant: f64, two_times_a: f64, b: f64, c: f64) -> [Option<f64>; 3] {
	let mut roots = [None; 3];
	if two_times_a.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		roots = solve_linear(b, c);
	} else if discriminant.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		roots[0] = Some(-b / (two_times_a));
	} else if discriminant > 0. {
		let root_discriminant = discriminant.sqrt();
		roots[0] = Some((-b + root_discriminant) / (two_times_a));
		roots[1] = Some((-b - root_discriminant) / (two_times_a));
	}
	roots
}

/// Solve a cubic of the form `ax^3 + bx^2 + cx + d`.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> [Option<f64>; 3] {
	if a.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		if b.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
			// If both a and b are approximately 0, treat as a linear problem
			solve_linear(c, d)
		} else {
			// If a is approximately 0, treat as a quadratic problem
			let discriminant = c * c - 4. * b * d;
			solve_quadratic(discriminant, 2. * b, c, d)
		}
	} else {
		// https://momentsingraphics.de/CubicRoots.html
		let d_recip = a.recip();
		const ONETHIRD: f64 = 1. / 3.;
		let scaled_c2 = b * (ONETHIRD * d_recip);
		let scaled_c1 = c * (ONETHIRD * d_recip);
		let scaled_c0 = d * d_recip;
		if !(scaled_c0.is_finite() && scaled_c1.is_finite() && scaled_c2.is_finite()) {
			// Cubic coefficient is zero or nearly so
			return solve_quadratic(c * c - 4. * b * d, 2. * b, c, d);
		}
		let (c0, c1, c2) = (scaled_c0, scaled_c1, scaled_c2);
		let d0 = (-c2).mul_add(c2, c1);
		let d1 = (-c1).mul_add(c2, c0);
		let d2 = c2 * c0 - c1 * c1;
		let d = 4. * d0 * d2 - d1 * d1;
		let de = (-2. * c2).mul_add(d0, d1);
		if d < 0. {
			let sq = (-0.25 * d).sqrt();
			let r = -0.5 * de;
			let t1 = (r + sq).cbrt() + (r - sq).cbrt();
			[Some(t1 - c2), None, None]
		} else if d == 0. {
			let t1 = (-d0).sqrt().copysign(de);
			[Some(t1 - c2), Some(-2. * t1 - c2).filter(|&root| root != t1 - c2), None]
		} else {
			let th = d.sqrt().atan2(-de) * ONETHIRD;
			let (th_sin, th_cos) = th.sin_cos();
			let r0 = th_cos;
			let ss3 = th_sin * 3_f64.sqrt();
			let r1 = 0.5 * (-th_cos + ss3);
			let r2 = 0.5 * (-th_cos - ss3);
			let t = 2. * (-d0).sqrt();
			[Some(t.mul_add(r0, -c2)), Some(t.mul_add(r1, -c2)), Some(t.mul_add(r2, -c2))]
		}
	}
}

/// Determine if two rectangles overlap, counting shared edges and corners as overlap.
/// Rectangles are represented as `[min_corner, max_corner]`.
pub fn rectangles_overlap_inclusive(rectangle1: [DVec2; 2], rectangle2: [DVec2; 2]) -> bool {
	let [min1, max1] = rectangle1;
	let [min2, max2] = rectangle2;

	max1.x >= min2.x && max2.x >= min1.x && max1.y >= min2.y && max2.y >= min1.y
}

/// Determine if two rectangles overlap with positive area. Rectangles that merely touch along an edge or corner do not count.
pub fn rectangles_overlap_exclusive(rectangle1: [DVec2; 2], rectangle2: [DVec2; 2]) -> bool {
	let [min1, max1] = rectangle1;
	let [min2, max2] = rectangle2;

	max1.x > min2.x && max2.x > min1.x && max1.y > min2.y && max2.y > min1.y
}

/// Determine if a rectangle contains a point, counting points on the boundary as contained.
pub fn rectangle_contains_point(rectangle: [DVec2; 2], point: DVec2) -> bool {
	let [min_corner, max_corner] = rectangle;
	point.x >= min_corner.x && point.x <= max_corner.x && point.y >= min_corner.y && point.y <= max_corner.y
}

/// Determine if the line segment from `line_start` to `line_end` touches the rectangle, counting the rectangle's boundary.
pub fn line_segment_intersects_rectangle(line_start: DVec2, line_end: DVec2, rectangle: [DVec2; 2]) -> bool {
	if rectangle_contains_point(rectangle, line_start) || rectangle_contains_point(rectangle, line_end) {
		return true;
	}

	let [min_corner, max_corner] = rectangle;
	let top_right = DVec2::new(max_corner.x, min_corner.y);
	let bottom_left = DVec2::new(min_corner.x, max_corner.y);

	line_segments_intersect(line_start, line_end, min_corner, top_right)
		|| line_segments_intersect(line_start, line_end, top_right, max_corner)
		|| line_segments_intersect(line_start, line_end, max_corner, bottom_left)
		|| line_segments_intersect(line_start, line_end, bottom_left, min_corner)
}

/// Determine if the line segments `a1`-`a2` and `b1`-`b2` intersect, endpoints included.
pub fn line_segments_intersect(a1: DVec2, a2: DVec2, b1: DVec2, b2: DVec2) -> bool {
	let d1 = (b2 - b1).perp_dot(a1 - b1);
	let d2 = (b2 - b1).perp_dot(a2 - b1);
	let d3 = (a2 - a1).perp_dot(b1 - a1);
	let d4 = (a2 - a1).perp_dot(b2 - a1);

	if ((d1 > 0. && d2 < 0.) || (d1 < 0. && d2 > 0.)) && ((d3 > 0. && d4 < 0.) || (d3 < 0. && d4 > 0.)) {
		return true;
	}

	// Collinear or touching cases
	(d1 == 0. && point_on_segment(b1, b2, a1)) || (d2 == 0. && point_on_segment(b1, b2, a2)) || (d3 == 0. && point_on_segment(a1, a2, b1)) || (d4 == 0. && point_on_segment(a1, a2, b2))
}

fn point_on_segment(segment_start: DVec2, segment_end: DVec2, point: DVec2) -> bool {
	point.x >= segment_start.x.min(segment_end.x) && point.x <= segment_start.x.max(segment_end.x) && point.y >= segment_start.y.min(segment_end.y) && point.y <= segment_start.y.max(segment_end.y)
}

/// Check if 3 points are collinear.
pub fn are_points_collinear(p1: DVec2, p2: DVec2, p3: DVec2) -> bool {
	let matrix = DMat2::from_cols(p1 - p2, p2 - p3);
	f64_compare(matrix.determinant() / 2., 0., MAX_ABSOLUTE_DIFFERENCE)
}

/// Compare two `f64` numbers with a provided max absolute value difference.
pub fn f64_compare(a: f64, b: f64, max_abs_diff: f64) -> bool {
	(a - b).abs() < max_abs_diff
}

/// Determine if an `f64` number is within a given range by using a max absolute value difference comparison.
pub fn f64_approximately_in_range(value: f64, min: f64, max: f64, max_abs_diff: f64) -> bool {
	(min..=max).contains(&value) || f64_compare(value, min, max_abs_diff) || f64_compare(value, max, max_abs_diff)
}

/// Compare the two values in a `DVec2` independently with a provided max absolute value difference.
pub fn dvec2_compare(a: DVec2, b: DVec2, max_abs_diff: f64) -> BVec2 {
	BVec2::new((a.x - b.x).abs() < max_abs_diff, (a.y - b.y).abs() < max_abs_diff)
}
