use glam::DVec2;

#[derive(Copy, Clone, PartialEq)]
/// Options for tuning the projection (closest point) search.
pub struct ProjectionOptions {
	/// Size of the lookup table for the initial passthrough. The default value is `20`.
	pub lut_size: usize,
	/// Difference used between floating point numbers to be considered as equal. The default value is `0.0001`.
	pub convergence_epsilon: f64,
	/// Controls the number of iterations needed to consider that minimum distance to have converged. The default value is `3`.
	pub convergence_limit: usize,
	/// Controls the maximum total number of iterations to be used. The default value is `10`.
	pub iteration_limit: usize,
}

impl Default for ProjectionOptions {
	fn default() -> Self {
		ProjectionOptions {
			lut_size: 20,
			convergence_epsilon: 1e-4,
			convergence_limit: 3,
			iteration_limit: 10,
		}
	}
}

/// The result of a closest point query against a single segment.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ClosestPoint {
	/// Parametric position of the closest point.
	pub t: f64,
	/// The closest point on the curve.
	pub point: DVec2,
	/// Distance from the queried point to `point`.
	pub distance: f64,
}
