/// A stricter comparison used for equality checks where floating point error should be negligible.
pub const STRICT_MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-6;

/// A loose comparison used where accumulated floating point error is expected.
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;

/// Default chord deviation tolerance, in device pixels, used when flattening a curve into line pieces.
pub const DEFAULT_FLATNESS: f64 = 0.25;

/// Default flatness tolerance used for arc length approximation.
pub const DEFAULT_LENGTH_TOLERANCE: f64 = 1e-2;

/// Hit radius in device pixels for anchors, handles, and edges. Divide by the view scale before comparing document-space distances.
pub const SELECTION_TOLERANCE: f64 = 5.;

/// Recursion cap for adaptive subdivision. A piece that is still not flat at this depth is emitted as-is.
pub(crate) const MAX_SUBDIVISION_DEPTH: usize = 18;

/// Minimum spacing between parametric roots before they are deduplicated into one.
pub(crate) const MIN_SEPARATION_VALUE: f64 = 5e-3;
