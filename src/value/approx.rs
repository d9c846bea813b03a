//! Approximate equality for binary floating point values.
//!
//! Exact comparison is useless for computed results (`0.1 + 0.2 != 0.3`), so equality
//! and inequality over Float/Double operands go through [`nearly_equal_f32`] and
//! [`nearly_equal_f64`]. The test is relative, normalised by the sum of magnitudes, with
//! an absolute floor near zero.

/// Relative tolerance for single precision operands.
pub const F32_EPSILON: f32 = 1e-5;

/// Relative tolerance for double precision operands.
pub const F64_EPSILON: f64 = 1e-9;

macro_rules! nearly_equal_impl {
    ($name:ident, $ty:ty, $eps:expr) => {
        /// Approximate equality with a kind-appropriate tolerance.
        ///
        /// `+0.0` equals `-0.0`; NaN never equals anything; operands of opposite sign and
        /// similar magnitude are never equal.
        pub fn $name(a: $ty, b: $ty) -> bool {
            if a == b {
                return true;
            }
            let diff = (a - b).abs();
            if a == 0.0 || b == 0.0 || diff < <$ty>::MIN_POSITIVE {
                return diff < $eps * <$ty>::MIN_POSITIVE;
            }
            let norm = (a.abs() + b.abs()).min(<$ty>::MAX);
            diff / norm < $eps
        }
    };
}

nearly_equal_impl!(nearly_equal_f32, f32, F32_EPSILON);
nearly_equal_impl!(nearly_equal_f64, f64, F64_EPSILON);

#[cfg(test)]
#[path = "../../tests/unit/value/approx.rs"]
mod tests;
