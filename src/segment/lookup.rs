use super::*;
use crate::consts::{DEFAULT_LENGTH_TOLERANCE, MAX_ABSOLUTE_DIFFERENCE, STRICT_MAX_ABSOLUTE_DIFFERENCE};
use crate::flatten::walk_flat;

use glam::DVec2;

/// Functionality relating to looking up properties of the `Segment` or points along the `Segment`.
impl Segment {
	/// Calculate the point on the curve at parameter `t` using the Bernstein form of the cubic.
	/// Total over all finite `t`; values outside `[0, 1]` extrapolate along the polynomial.
	pub fn evaluate(&self, t: f64) -> DVec2 {
		let t_squared = t * t;
		let one_minus_t = 1. - t;
		let squared_one_minus_t = one_minus_t * one_minus_t;

		squared_one_minus_t * one_minus_t * self.start + 3. * squared_one_minus_t * t * self.handle_start + 3. * one_minus_t * t_squared * self.handle_end + t_squared * t * self.end
	}

	/// The derivative of the cubic at `t`, without normalization.
	pub(crate) fn non_normalized_tangent(&self, t: f64) -> DVec2 {
		let p0 = 3. * (self.handle_start - self.start);
		let p1 = 3. * (self.handle_end - self.handle_start);
		let p2 = 3. * (self.end - self.handle_end);

		let one_minus_t = 1. - t;
		one_minus_t * one_minus_t * p0 + 2. * one_minus_t * t * p1 + t * t * p2
	}

	/// Return a normalized unit vector representing the tangent at the point designated by `t`.
	/// When the derivative vanishes (a handle collapsed onto its endpoint at the ends of the curve),
	/// fall back to the direction toward the far control point, then to the chord.
	pub fn tangent(&self, t: f64) -> DVec2 {
		let mut tangent = self.non_normalized_tangent(t);
		if tangent.length_squared() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
			tangent = if t < 0.5 { self.handle_end - self.start } else { self.end - self.handle_start };
		}
		if tangent.length_squared() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
			tangent = self.end - self.start;
		}

		if tangent.length() > 0. {
			tangent.normalize()
		} else {
			tangent
		}
	}

	/// Return a normalized unit vector representing the direction of the normal at the point designated by `t`.
	pub fn normal(&self, t: f64) -> DVec2 {
		self.tangent(t).perp()
	}

	/// Returns the curvature, a scalar value for the derivative at the point `t` along the curve.
	/// Curvature is 1 over the radius of a circle with an equivalent derivative.
	pub fn curvature(&self, t: f64) -> f64 {
		let first_derivative = self.non_normalized_tangent(t);
		let second_derivative = 6. * ((self.handle_end - 2. * self.handle_start + self.start) * (1. - t) + (self.end - 2. * self.handle_end + self.handle_start) * t);

		let numerator = first_derivative.x * second_derivative.y - first_derivative.y * second_derivative.x;
		let denominator = first_derivative.length().powi(3);
		if denominator.abs() < MAX_ABSOLUTE_DIFFERENCE {
			0.
		} else {
			numerator / denominator
		}
	}

	/// Approximate the arc length of the curve by summing the chords of its flat pieces.
	/// A smaller `tolerance` means a closer approximation; the default is [`DEFAULT_LENGTH_TOLERANCE`].
	pub fn length(&self, tolerance: Option<f64>) -> f64 {
		let tolerance = tolerance.unwrap_or(DEFAULT_LENGTH_TOLERANCE);
		let mut total = 0.;
		walk_flat(self, tolerance, &mut |piece, _, _| {
			total += piece.start.distance(piece.end);
			true
		});
		total
	}

	/// Walk `distance` along the arc of the curve from its start and return the point reached, the unit
	/// tangent there, and the curvature there. The distance is clamped to `[0, length]`.
	pub fn point_and_tangent_at_distance(&self, distance: f64, tolerance: Option<f64>) -> (DVec2, DVec2, f64) {
		let tolerance = tolerance.unwrap_or(DEFAULT_LENGTH_TOLERANCE);

		let mut t = 1.;
		let mut point = self.end;
		if distance <= 0. {
			t = 0.;
			point = self.start;
		} else {
			let mut accumulated = 0.;
			walk_flat(self, tolerance, &mut |piece, t_start, t_end| {
				let chord_length = piece.start.distance(piece.end);
				if accumulated + chord_length >= distance && chord_length > 0. {
					// Interpolate on the flat chord itself so the walked distance is exact,
					// and map the fraction back to a parametric t for the tangent
					let fraction = (distance - accumulated) / chord_length;
					point = piece.start.lerp(piece.end, fraction);
					t = t_start + fraction * (t_end - t_start);
					return false;
				}
				accumulated += chord_length;
				true
			});
		}

		(point, self.tangent(t), self.curvature(t))
	}

	/// Returns the `t` value that corresponds to the closest point on the curve to the provided point.
	/// Uses a searching algorithm akin to binary search that can be customized using the [ProjectionOptions] structure.
	pub fn project(&self, point: DVec2, options: Option<ProjectionOptions>) -> f64 {
		let options = options.unwrap_or_default();
		let lut_size = options.lut_size.max(2);

		// Coarse pass over a uniform lookup table
		let mut best_t = 0.;
		let mut best_distance_squared = f64::INFINITY;
		for index in 0..=lut_size {
			let t = index as f64 / lut_size as f64;
			let distance_squared = self.evaluate(t).distance_squared(point);
			if distance_squared < best_distance_squared {
				best_distance_squared = distance_squared;
				best_t = t;
			}
		}

		// Refine around the best sample by repeatedly halving the step
		let mut step = 1. / lut_size as f64;
		let mut iterations = 0;
		let mut converged_iterations = 0;
		while iterations < options.iteration_limit && converged_iterations < options.convergence_limit {
			step /= 2.;
			let previous_best = best_distance_squared;
			for candidate_t in [(best_t - step).max(0.), (best_t + step).min(1.)] {
				let distance_squared = self.evaluate(candidate_t).distance_squared(point);
				if distance_squared < best_distance_squared {
					best_distance_squared = distance_squared;
					best_t = candidate_t;
				}
			}
			if (previous_best - best_distance_squared).abs() < options.convergence_epsilon {
				converged_iterations += 1;
			} else {
				converged_iterations = 0;
			}
			iterations += 1;
		}

		best_t
	}

	/// Project the provided point onto the curve and package the result as a [ClosestPoint].
	pub fn find_closest_point(&self, point: DVec2, options: Option<ProjectionOptions>) -> ClosestPoint {
		let t = self.project(point, options);
		let closest = self.evaluate(t);
		ClosestPoint {
			t,
			point: closest,
			distance: closest.distance(point),
		}
	}
}
