use crate::constants::{
    ARCMIN_PER_DEGREE, ARCSEC_PER_DEGREE, DEGREES_PER_CIRCLE, HOURS_PER_DAY, TWOPI,
};

/// Combines degrees, arcminutes and arcseconds into decimal degrees.
///
/// The sign comes from `deg` alone; `arcmin` and `arcsec` are added as
/// magnitudes scaled by that sign. A zero `deg` is non-negative whatever its
/// sign bit, matching [`deg_to_dms`](super::deg_to_dms), which prints values
/// in `(-1, 0)` with an unsigned `0`.
pub fn dms_to_deg(deg: f64, arcmin: f64, arcsec: f64) -> f64 {
    let sign = if deg < 0.0 { -1.0 } else { 1.0 };
    sign * (deg.abs() + arcmin / ARCMIN_PER_DEGREE + arcsec / ARCSEC_PER_DEGREE)
}

/// Combines hours, minutes and seconds of right ascension into degrees.
pub fn hms_to_deg(hour: f64, min: f64, sec: f64) -> f64 {
    (dms_to_deg(hour, min, sec) / HOURS_PER_DAY) * DEGREES_PER_CIRCLE
}

pub fn deg_to_rad(degrees: f64) -> f64 {
    (degrees / DEGREES_PER_CIRCLE) * TWOPI
}

pub fn rad_to_deg(rad: f64) -> f64 {
    (rad / TWOPI) * DEGREES_PER_CIRCLE
}

pub fn deg_to_hours(degrees: f64) -> f64 {
    (degrees / DEGREES_PER_CIRCLE) * HOURS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dms_positive() {
        assert_abs_diff_eq!(dms_to_deg(34.0, 2.0, 43.0), 34.045277, epsilon = 1e-5);
    }

    #[test]
    fn dms_sign_only_from_degrees() {
        assert_abs_diff_eq!(dms_to_deg(-13.0, 48.0, 24.0), -13.806666, epsilon = 1e-5);
        assert_eq!(dms_to_deg(-13.0, 48.0, 24.0), -dms_to_deg(13.0, 48.0, 24.0));
    }

    #[test]
    fn dms_zero_degrees_is_non_negative() {
        assert_eq!(dms_to_deg(-0.0, 30.0, 0.0), 0.5);
        assert_eq!(dms_to_deg(0.0, 30.0, 0.0), 0.5);
    }

    #[test]
    fn zero_degree_text_settles_after_one_pass() {
        use crate::angle::{deg_to_dms, parse_sexagesimal, DisplayOptions};

        let opts = DisplayOptions::default();
        let [d, m, s] = parse_sexagesimal("-00 30 00").unwrap();
        let first = dms_to_deg(d, m, s);
        let printed = deg_to_dms(first, &opts);
        assert_eq!(printed, "0° 30' 0.00\"");

        let [d, m, s] = parse_sexagesimal(&printed.replace(['°', '\'', '"'], "")).unwrap();
        assert_eq!(dms_to_deg(d, m, s), first);
        assert_eq!(deg_to_dms(-0.5, &opts), printed);
    }

    #[test]
    fn hms_scales_to_degrees() {
        assert_abs_diff_eq!(hms_to_deg(6.0, 0.0, 0.0), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hms_to_deg(18.0, 18.0, 48.0), 274.7, epsilon = 1e-9);
    }

    #[test]
    fn radians_known_values() {
        assert_abs_diff_eq!(deg_to_rad(180.0), PI, epsilon = 1e-12);
        assert_eq!(deg_to_rad(0.0), 0.0);
        assert_abs_diff_eq!(rad_to_deg(PI / 2.0), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn radian_degree_inverse_over_range() {
        for i in 0..3600 {
            let x = i as f64 * 0.1 + 0.037;
            assert_abs_diff_eq!(rad_to_deg(deg_to_rad(x)), x, epsilon = 1e-3);
        }
        for i in 0..628 {
            let x = i as f64 * 0.01 + 0.0013;
            assert_abs_diff_eq!(deg_to_rad(rad_to_deg(x)), x, epsilon = 1e-3);
        }
    }

    #[test]
    fn hours_from_degrees() {
        assert_abs_diff_eq!(deg_to_hours(195.0), 13.0, epsilon = 1e-12);
    }
}
