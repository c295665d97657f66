//! Wrapping into a single turn.
//!
//! Both helpers use Euclidean remainder, so negative inputs land in the
//! positive range the same way a floored modulo would.

use crate::constants::{DEGREES_PER_CIRCLE, TWOPI};

/// Wraps radians into `[0, 2π)`.
#[inline]
pub fn wrap_0_2pi(angle: f64) -> f64 {
    angle.rem_euclid(TWOPI)
}

/// Wraps degrees into `[0, 360)`.
#[inline]
pub fn wrap_0_360(angle: f64) -> f64 {
    angle.rem_euclid(DEGREES_PER_CIRCLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;
    use approx::assert_abs_diff_eq;

    #[test]
    fn wrap_negative_radians() {
        assert_abs_diff_eq!(wrap_0_2pi(-PI / 2.0), 3.0 * PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn wrap_large_radians() {
        assert_abs_diff_eq!(wrap_0_2pi(5.0 * TWOPI + 1.0), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn wrap_degrees() {
        assert_abs_diff_eq!(wrap_0_360(370.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_0_360(-10.0), 350.0, epsilon = 1e-12);
        assert_eq!(wrap_0_360(0.0), 0.0);
    }
}
