//! Comparison helpers available to tests.

use crate::consts::MAX_ABSOLUTE_DIFFERENCE;
use crate::utils::{dvec2_compare, f64_compare};

use glam::DVec2;

pub fn compare_f64s(f1: f64, f2: f64) -> bool {
	f64_compare(f1, f2, MAX_ABSOLUTE_DIFFERENCE)
}

pub fn compare_points(p1: DVec2, p2: DVec2) -> bool {
	dvec2_compare(p1, p2, MAX_ABSOLUTE_DIFFERENCE).all()
}

pub fn compare_vec_of_points(vec1: &[DVec2], vec2: &[DVec2], max_abs_diff: f64) -> bool {
	vec1.len() == vec2.len() && vec1.iter().zip(vec2.iter()).all(|(&p1, &p2)| dvec2_compare(p1, p2, max_abs_diff).all())
}
