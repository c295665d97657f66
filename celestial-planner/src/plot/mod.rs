//! Rendering of trajectories: terminal charts, SVG files and sample
//! listings.

pub mod svg;
pub mod terminal;

use crate::trajectory::Trajectory;
use crate::Result;
use celestial_core::angle::{deg_to_dms, deg_to_rad};
use celestial_core::DisplayOptions;
use celestial_time::{Instant, JulianDate};

/// Projects a horizontal position onto a polar sky chart: the radius is the
/// zenith distance, north is up and east is right.
pub fn polar_point(azimuth_deg: f64, elevation_deg: f64) -> (f64, f64) {
    let r = 90.0 - elevation_deg;
    let az = deg_to_rad(azimuth_deg);
    (r * libm::sin(az), r * libm::cos(az))
}

/// One line per sample with its civil time, clock hour and angles.
pub fn verbose_listing(trajectory: &Trajectory, opts: &DisplayOptions) -> Result<String> {
    let mut out = String::new();
    for (i, sample) in trajectory.iter().enumerate() {
        let time = Instant::from_julian_date(JulianDate::from_f64(sample.jd))?;
        out.push_str(&format!(
            "{i:>4}  {}  {:>5.2}h  ERA {:>8.4}  Az {:>16}  El {:>16}\n",
            time.to_iso8601(),
            sample.hour_of_day(),
            sample.era_deg,
            deg_to_dms(sample.azimuth_deg, opts),
            deg_to_dms(sample.elevation_deg, opts),
        ));
    }
    Ok(out)
}
