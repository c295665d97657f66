use super::polar_point;
use crate::trajectory::Trajectory;
use crate::visibility::VisibilityCriteria;
use plotters::prelude::*;
use std::path::Path;

pub type PlotResult = std::result::Result<(), Box<dyn std::error::Error>>;

const RING_STEP_DEG: f64 = 30.0;
const RING_COUNT: u32 = 6;
/// The ring at 90° zenith distance.
const HORIZON_RING: u32 = 3;
const RING_POINTS: usize = 180;

/// Azimuth and elevation against the clock hour, with the elevation
/// threshold and night-window edges when `marks` is given.
pub fn altaz_svg(
    trajectory: &Trajectory,
    path: &Path,
    title: &str,
    marks: Option<&VisibilityCriteria>,
) -> PlotResult {
    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..24.0, -90.0..360.0)?;
    chart
        .configure_mesh()
        .x_desc("Hour of day [h]")
        .y_desc("Angle [deg]")
        .draw()?;

    chart
        .draw_series(
            trajectory
                .iter()
                .map(|s| Circle::new((s.hour_of_day(), s.azimuth_deg), 3, GREEN.filled())),
        )?
        .label("Azimuth")
        .legend(|(x, y)| Circle::new((x, y), 3, GREEN.filled()));
    chart
        .draw_series(
            trajectory
                .iter()
                .map(|s| Circle::new((s.hour_of_day(), s.elevation_deg), 3, BLUE.filled())),
        )?
        .label("Elevation")
        .legend(|(x, y)| Circle::new((x, y), 3, BLUE.filled()));

    if let Some(criteria) = marks {
        let threshold = criteria.min_elevation_deg;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.0, threshold), (24.0, threshold)],
                RED,
            )))?
            .label(format!("{threshold}° threshold"))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
        for hour in [criteria.end_hour, criteria.start_hour] {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(hour, -90.0), (hour, 90.0)],
                BLACK.mix(0.5),
            )))?;
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Track on a polar sky chart. Rings mark every 30° of zenith distance;
/// the horizon ring is drawn black. Points darken with time.
pub fn polar_svg(trajectory: &Trajectory, path: &Path, title: &str, lines: bool) -> PlotResult {
    let root = SVGBackend::new(path, (700, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .build_cartesian_2d(-190.0..190.0, -190.0..190.0)?;

    for ring_index in 1..=RING_COUNT {
        let radius = ring_index as f64 * RING_STEP_DEG;
        let ring: Vec<(f64, f64)> = (0..=RING_POINTS)
            .map(|i| polar_point(i as f64 * 360.0 / RING_POINTS as f64, 90.0 - radius))
            .collect();
        let style: ShapeStyle = if ring_index == HORIZON_RING {
            BLACK.into()
        } else {
            RGBColor(200, 200, 200).into()
        };
        chart.draw_series(std::iter::once(PathElement::new(ring, style)))?;
    }
    for (label, azimuth) in [("N", 0.0), ("E", 90.0), ("S", 180.0), ("W", 270.0)] {
        chart.draw_series(std::iter::once(Text::new(
            label,
            polar_point(azimuth, -5.0),
            ("sans-serif", 16),
        )))?;
    }

    let points: Vec<(f64, f64)> = trajectory
        .iter()
        .map(|s| polar_point(s.azimuth_deg, s.elevation_deg))
        .collect();
    if lines {
        chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
    }
    let last = points.len().saturating_sub(1).max(1) as f64;
    chart.draw_series(points.iter().enumerate().map(|(i, &p)| {
        let shade = (200.0 * (1.0 - i as f64 / last)) as u8;
        Circle::new(p, 3, RGBColor(shade, shade, 255).filled())
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::builtin_examples;
    use crate::trajectory::sample_trajectory;
    use tempfile::TempDir;

    fn m57_day() -> Trajectory {
        let config = builtin_examples().unwrap()["m57"];
        sample_trajectory(&config, 24.0, 1.0).unwrap()
    }

    #[test]
    fn altaz_writes_svg() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("altaz.svg");
        altaz_svg(&m57_day(), &path, "m57", Some(&VisibilityCriteria::default())).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
    }

    #[test]
    fn polar_writes_svg_with_and_without_lines() {
        let dir = TempDir::new().unwrap();
        for lines in [false, true] {
            let path = dir.path().join(format!("polar_{lines}.svg"));
            polar_svg(&m57_day(), &path, "m57", lines).unwrap();
            assert!(std::fs::read_to_string(&path).unwrap().contains("<svg"));
        }
    }
}
