use super::polar_point;
use crate::trajectory::Trajectory;
use crate::visibility::VisibilityCriteria;
use textplots::{Chart, Plot, Shape};

const HORIZON_POINTS: usize = 72;

/// Azimuth and elevation against the clock hour. With `marks`, the
/// elevation threshold and the night-window edges are drawn as well.
pub fn altaz_terminal(
    trajectory: &Trajectory,
    title: &str,
    marks: Option<&VisibilityCriteria>,
) -> String {
    if trajectory.is_empty() {
        return format!("{title}\n  (no data)\n");
    }
    let azimuth: Vec<(f32, f32)> = trajectory
        .iter()
        .map(|s| (s.hour_of_day() as f32, s.azimuth_deg as f32))
        .collect();
    let elevation: Vec<(f32, f32)> = trajectory
        .iter()
        .map(|s| (s.hour_of_day() as f32, s.elevation_deg as f32))
        .collect();

    let criteria = marks.copied().unwrap_or_default();
    let threshold = criteria.min_elevation_deg as f32;
    let threshold_line = [(0.0, threshold), (24.0, threshold)];
    let end_line = [
        (criteria.end_hour as f32, -90.0),
        (criteria.end_hour as f32, 90.0),
    ];
    let start_line = [
        (criteria.start_hour as f32, -90.0),
        (criteria.start_hour as f32, 90.0),
    ];

    let az_shape = Shape::Points(&azimuth);
    let el_shape = Shape::Points(&elevation);
    let threshold_shape = Shape::Lines(&threshold_line);
    let end_shape = Shape::Lines(&end_line);
    let start_shape = Shape::Lines(&start_line);

    let mut chart = Chart::new(120, 40, 0.0, 24.0);
    let rendered = chart.lineplot(&az_shape).lineplot(&el_shape);
    let rendered = if marks.is_some() {
        rendered
            .lineplot(&threshold_shape)
            .lineplot(&end_shape)
            .lineplot(&start_shape)
    } else {
        rendered
    };
    rendered.axis();
    rendered.figures();
    format!("{title}\n  azimuth and elevation [deg] vs hour of day [h]\n{rendered}")
}

/// Track on a polar sky chart, horizon drawn as a ring of radius 90.
pub fn polar_terminal(trajectory: &Trajectory, title: &str, lines: bool) -> String {
    if trajectory.is_empty() {
        return format!("{title}\n  (no data)\n");
    }
    let track: Vec<(f32, f32)> = trajectory
        .iter()
        .map(|s| {
            let (x, y) = polar_point(s.azimuth_deg, s.elevation_deg);
            (x as f32, y as f32)
        })
        .collect();
    let horizon: Vec<(f32, f32)> = (0..=HORIZON_POINTS)
        .map(|i| {
            let (x, y) = polar_point(i as f64 * 360.0 / HORIZON_POINTS as f64, 0.0);
            (x as f32, y as f32)
        })
        .collect();

    let track_shape = if lines {
        Shape::Lines(&track)
    } else {
        Shape::Points(&track)
    };
    let horizon_shape = Shape::Lines(&horizon);
    let (xmin, xmax) = f32_extent(track.iter().chain(&horizon).map(|p| p.0));
    let mut chart = Chart::new(100, 100, xmin, xmax);
    let rendered = chart.lineplot(&horizon_shape).lineplot(&track_shape);
    rendered.axis();
    rendered.figures();
    format!("{title}\n  north up, east right, radius = zenith distance [deg]\n{rendered}")
}

fn f32_extent(iter: impl Iterator<Item = f32>) -> (f32, f32) {
    let (lo, hi) = iter.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if (hi - lo).abs() < 1e-6 {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}
