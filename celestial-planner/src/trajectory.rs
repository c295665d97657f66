use crate::configuration::Configuration;
use crate::{Error, Result};
use celestial_coords::compute_azimuth_elevation;
use celestial_time::hours_from_julian_day;

/// One point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub jd: f64,
    pub era_deg: f64,
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
}

impl TrajectorySample {
    /// Civil clock hour of this sample in `[0, 24)`.
    pub fn hour_of_day(&self) -> f64 {
        hours_from_julian_day(self.jd)
    }
}

/// Samples of one configuration in increasing Julian Day order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn from_samples(samples: Vec<TrajectorySample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectorySample> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<&TrajectorySample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    /// Highest elevation reached, or `None` for an empty sweep.
    pub fn max_elevation(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| s.elevation_deg)
            .reduce(f64::max)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectorySample;
    type IntoIter = std::slice::Iter<'a, TrajectorySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Runs the transform every `step_hours` from the configuration's instant
/// for `length_hours`.
///
/// The first sample sits exactly on the configuration's Julian Day and no
/// sample lands at or past the end, so a sweep yields
/// `ceil(length_hours / step_hours)` samples. Sample times are computed from
/// the index rather than accumulated, and the end test is done in hours
/// with a tolerance of a billionth of a step, so rounding never adds or
/// drops the final sample.
pub fn sample_trajectory(
    config: &Configuration,
    length_hours: f64,
    step_hours: f64,
) -> Result<Trajectory> {
    if !step_hours.is_finite() || step_hours <= 0.0 {
        return Err(Error::InvalidStep(step_hours));
    }
    if !length_hours.is_finite() {
        return Err(Error::Parse(format!(
            "sweep length must be finite, got {length_hours}"
        )));
    }

    let start = config.instant.julian_date();
    let ra = config.target.ra_deg();
    let dec = config.target.dec_deg();
    let lon = config.location.lon_deg();
    let lat = config.location.lat_deg();
    let limit = length_hours - step_hours * 1e-9;

    let mut samples = Vec::new();
    let mut index = 0u32;
    loop {
        let offset = index as f64 * step_hours;
        if offset >= limit {
            break;
        }
        let jd = start.add_hours(offset).to_f64();
        let pos = compute_azimuth_elevation(jd, ra, dec, lon, lat);
        samples.push(TrajectorySample {
            jd,
            era_deg: pos.era_deg,
            azimuth_deg: pos.azimuth_deg,
            elevation_deg: pos.elevation_deg,
        });
        index += 1;
    }

    tracing::debug!(
        samples = samples.len(),
        length_hours,
        step_hours,
        "sampled trajectory"
    );
    Ok(Trajectory::from_samples(samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::builtin_examples;

    fn m57() -> Configuration {
        builtin_examples().unwrap()["m57"]
    }

    #[test]
    fn full_day_at_tenth_hour_has_240_samples() {
        let config = m57();
        let traj = sample_trajectory(&config, 24.0, 0.1).unwrap();
        assert_eq!(traj.len(), 240);
        assert_eq!(traj.first().unwrap().jd, config.julian_day());
        for pair in traj.samples().windows(2) {
            assert!(pair[1].jd > pair[0].jd);
        }
        let end = config.julian_day() + 1.0;
        assert!(traj.last().unwrap().jd < end);
    }

    #[test]
    fn sample_count_is_ceiling_of_ratio() {
        let config = m57();
        for (length, step, expected) in [
            (24.0, 1.0, 24),
            (0.3, 0.1, 3),
            (0.7, 0.1, 7),
            (1.0, 0.3, 4),
            (2.5, 1.0, 3),
            (0.05, 0.1, 1),
        ] {
            let traj = sample_trajectory(&config, length, step).unwrap();
            assert_eq!(traj.len(), expected, "length {length} step {step}");
        }
    }

    #[test]
    fn non_positive_length_gives_empty_sweep() {
        let config = m57();
        assert!(sample_trajectory(&config, 0.0, 0.1).unwrap().is_empty());
        assert!(sample_trajectory(&config, -3.0, 0.1).unwrap().is_empty());
        assert_eq!(
            sample_trajectory(&config, 0.0, 0.1).unwrap().max_elevation(),
            None
        );
    }

    #[test]
    fn rejects_bad_step() {
        let config = m57();
        for step in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                sample_trajectory(&config, 24.0, step),
                Err(Error::InvalidStep(_))
            ));
        }
        assert!(matches!(
            sample_trajectory(&config, f64::INFINITY, 1.0),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn samples_agree_with_single_transform() {
        let config = m57();
        let traj = sample_trajectory(&config, 3.0, 1.0).unwrap();
        let first = traj.first().unwrap();
        let direct = config.transform();
        assert_eq!(first.azimuth_deg, direct.azimuth_deg);
        assert_eq!(first.elevation_deg, direct.elevation_deg);
        assert!((traj.samples()[2].hour_of_day() - 2.0).abs() < 1e-6);
    }
}
