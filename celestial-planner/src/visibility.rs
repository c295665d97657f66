//! Night-time visibility scan.
//!
//! Each candidate is swept over a full day and the samples are reduced to a
//! verdict: a sample qualifies when the object is above the elevation
//! threshold during the night window, and the object is viable when more
//! than `cutoff_hours / 24` of *all* samples qualify.

use crate::catalog::CatalogEntry;
use crate::configuration::Configuration;
use crate::trajectory::{sample_trajectory, Trajectory};
use crate::Result;
use celestial_coords::ObserverLocation;
use celestial_core::constants::HOURS_PER_DAY;
use celestial_time::Instant;

/// Parameters of the scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityCriteria {
    /// Night starts after this clock hour.
    pub start_hour: f64,
    /// Night ends before this clock hour.
    pub end_hour: f64,
    /// Required time above threshold, in hours of the full day.
    pub cutoff_hours: f64,
    pub min_elevation_deg: f64,
    pub sweep_length_hours: f64,
    pub sweep_step_hours: f64,
    /// Report every object whatever its verdict.
    pub show_all: bool,
}

impl Default for VisibilityCriteria {
    fn default() -> Self {
        Self {
            start_hour: 19.0,
            end_hour: 6.0,
            cutoff_hours: 2.0,
            min_elevation_deg: 30.0,
            sweep_length_hours: 24.0,
            sweep_step_hours: 0.1,
            show_all: false,
        }
    }
}

impl VisibilityCriteria {
    /// The window wraps past midnight: `hour > start || hour < end`.
    pub fn in_night_window(&self, hour: f64) -> bool {
        hour > self.start_hour || hour < self.end_hour
    }

    pub fn cutoff_fraction(&self) -> f64 {
        self.cutoff_hours / HOURS_PER_DAY
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityReport {
    pub max_elevation_deg: f64,
    pub qualifying_samples: usize,
    pub total_samples: usize,
    pub viable: bool,
}

/// Reduces a sweep to a verdict.
pub fn assess(trajectory: &Trajectory, criteria: &VisibilityCriteria) -> VisibilityReport {
    let mut max_elevation_deg = -90.0_f64;
    let mut qualifying_samples = 0usize;

    for sample in trajectory {
        max_elevation_deg = max_elevation_deg.max(sample.elevation_deg);
        if sample.elevation_deg > criteria.min_elevation_deg
            && criteria.in_night_window(sample.hour_of_day())
        {
            qualifying_samples += 1;
        }
    }

    let total_samples = trajectory.len();
    let viable = qualifying_samples as f64 > total_samples as f64 * criteria.cutoff_fraction();

    VisibilityReport {
        max_elevation_deg,
        qualifying_samples,
        total_samples,
        viable,
    }
}

/// A scanned object with the configuration it was swept from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedObject {
    pub name: String,
    pub configuration: Configuration,
    pub report: VisibilityReport,
}

/// Instant the built-in scan is referenced to: 2024-03-13T00:00 UTC.
pub fn scan_reference_instant() -> Result<Instant> {
    Ok(Instant::from_civil(2024, 3, 13, 0, 0, 0.0)?)
}

/// Sweeps every entry and keeps the viable ones, or all of them when
/// `criteria.show_all` is set.
pub fn scan_viable_objects(
    objects: &[CatalogEntry],
    observer: &ObserverLocation,
    reference: &Instant,
    criteria: &VisibilityCriteria,
) -> Result<Vec<ScannedObject>> {
    let mut result = Vec::new();

    for entry in objects {
        let configuration = Configuration::new(*reference, entry.target()?, *observer);
        let trajectory = sample_trajectory(
            &configuration,
            criteria.sweep_length_hours,
            criteria.sweep_step_hours,
        )?;
        let report = assess(&trajectory, criteria);
        tracing::debug!(
            name = %entry.name,
            qualifying = report.qualifying_samples,
            total = report.total_samples,
            max_elevation = report.max_elevation_deg,
            viable = report.viable,
            "assessed object"
        );

        if report.viable || criteria.show_all {
            result.push(ScannedObject {
                name: entry.name.clone(),
                configuration,
                report,
            });
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::TrajectorySample;

    /// JD whose civil hour is 22:00.
    const JD_AT_22H: f64 = 2460383.0 + 10.0 / 24.0;

    fn synthetic(qualifying: usize, total: usize) -> Trajectory {
        let samples = (0..total)
            .map(|i| TrajectorySample {
                jd: JD_AT_22H,
                era_deg: 0.0,
                azimuth_deg: 180.0,
                elevation_deg: if i < qualifying { 45.0 } else { 10.0 },
            })
            .collect();
        Trajectory::from_samples(samples)
    }

    #[test]
    fn night_window_wraps_midnight() {
        let c = VisibilityCriteria::default();
        assert!(c.in_night_window(23.5));
        assert!(c.in_night_window(0.0));
        assert!(c.in_night_window(5.9));
        assert!(!c.in_night_window(6.0));
        assert!(!c.in_night_window(12.0));
        assert!(!c.in_night_window(19.0));
        assert!(c.in_night_window(19.1));
    }

    #[test]
    fn cutoff_boundary_is_strict() {
        let criteria = VisibilityCriteria::default();
        assert_eq!(240.0 * criteria.cutoff_fraction(), 20.0);

        let at_cutoff = assess(&synthetic(20, 240), &criteria);
        assert_eq!(at_cutoff.qualifying_samples, 20);
        assert!(!at_cutoff.viable);

        let one_more = assess(&synthetic(21, 240), &criteria);
        assert_eq!(one_more.qualifying_samples, 21);
        assert!(one_more.viable);
    }

    #[test]
    fn daytime_samples_never_qualify() {
        let samples = (0..240)
            .map(|_| TrajectorySample {
                jd: 2460383.0, // noon
                era_deg: 0.0,
                azimuth_deg: 180.0,
                elevation_deg: 80.0,
            })
            .collect();
        let report = assess(&Trajectory::from_samples(samples), &VisibilityCriteria::default());
        assert_eq!(report.qualifying_samples, 0);
        assert_eq!(report.max_elevation_deg, 80.0);
        assert!(!report.viable);
    }

    #[test]
    fn threshold_is_strict() {
        let samples = vec![TrajectorySample {
            jd: JD_AT_22H,
            era_deg: 0.0,
            azimuth_deg: 0.0,
            elevation_deg: 30.0,
        }];
        let report = assess(&Trajectory::from_samples(samples), &VisibilityCriteria::default());
        assert_eq!(report.qualifying_samples, 0);
    }

    #[test]
    fn scan_filters_unless_show_all() {
        let reference = scan_reference_instant().unwrap();
        let observer = ObserverLocation::remeis();
        let objects = vec![
            CatalogEntry::new("M57", [18.0, 53.0, 35.097], [33.0, 1.0, 44.88]),
            CatalogEntry::new("southern", [6.0, 45.0, 0.0], [-70.0, 0.0, 0.0]),
        ];

        let criteria = VisibilityCriteria::default();
        let viable = scan_viable_objects(&objects, &observer, &reference, &criteria).unwrap();
        let names: Vec<&str> = viable.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["M57"]);
        assert_eq!(viable[0].report.total_samples, 240);

        let all = VisibilityCriteria {
            show_all: true,
            ..criteria
        };
        let everything = scan_viable_objects(&objects, &observer, &reference, &all).unwrap();
        assert_eq!(everything.len(), 2);
        assert!(!everything[1].report.viable);
        assert!(everything[1].report.max_elevation_deg < 0.0);
    }
}
