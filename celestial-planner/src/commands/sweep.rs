use super::{help, CommandOutput};
use crate::configuration::Configuration;
use crate::error::{Error, Result};
use crate::plot::{svg, terminal, verbose_listing};
use crate::session::Session;
use crate::trajectory::{sample_trajectory, Trajectory};
use crate::visibility::VisibilityCriteria;
use celestial_core::DisplayOptions;
use celestial_time::Instant;
use std::path::PathBuf;

pub const DEFAULT_PLOT_LENGTH_HOURS: f64 = 24.0;
pub const DEFAULT_PLOT_STEP_HOURS: f64 = 1.0;

/// Arguments of `plot`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    pub name: String,
    pub length_hours: f64,
    pub step_hours: f64,
    /// List every sample and draw the visibility marks.
    pub verbose: bool,
    pub polar: bool,
    /// Join polar samples with lines.
    pub lines: bool,
    /// Write an SVG here instead of drawing in the terminal.
    pub svg: Option<PathBuf>,
}

impl PlotRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length_hours: DEFAULT_PLOT_LENGTH_HOURS,
            step_hours: DEFAULT_PLOT_STEP_HOURS,
            verbose: false,
            polar: false,
            lines: false,
            svg: None,
        }
    }

    /// `config_name [length] [time_step] [-p] [-v] [-l] [-s FILE]`, flags in
    /// any position.
    pub fn parse(args: &[&str]) -> Result<Self> {
        let mut positional = Vec::new();
        let mut verbose = false;
        let mut polar = false;
        let mut lines = false;
        let mut svg = None;

        let mut iter = args.iter();
        while let Some(&arg) = iter.next() {
            match arg {
                "-v" => verbose = true,
                "-p" => polar = true,
                "-l" => lines = true,
                "-s" => {
                    let path = iter
                        .next()
                        .ok_or_else(|| Error::Parse("-s needs a file name".to_string()))?;
                    svg = Some(PathBuf::from(path));
                }
                _ => positional.push(arg),
            }
        }

        let (name, numbers) = match positional.split_first() {
            Some((name, numbers)) if numbers.len() <= 2 => (*name, numbers),
            _ => return Err(Error::Parse(format!("usage: {}", help::usage("plot")))),
        };
        let number = |text: &str, what: &str| -> Result<f64> {
            text.parse()
                .map_err(|_| Error::Parse(format!("invalid {what}: '{text}'")))
        };

        let mut request = Self::new(name);
        if let Some(length) = numbers.first() {
            request.length_hours = number(length, "length")?;
        }
        if let Some(step) = numbers.get(1) {
            request.step_hours = number(step, "time step")?;
        }
        request.verbose = verbose;
        request.polar = polar;
        request.lines = lines;
        request.svg = svg;
        Ok(request)
    }
}

pub fn plot(session: &Session, request: &PlotRequest) -> Result<CommandOutput> {
    let config = *session.get(&request.name)?;
    let trajectory = sample_trajectory(&config, request.length_hours, request.step_hours)?;
    let title = format!("Plotting {}", request.name);
    let marks = request.verbose.then_some(&session.criteria);

    let mut out = sweep_header(&config, request.length_hours)?;
    if request.verbose {
        out.push_str(&verbose_listing(&trajectory, &session.display)?);
    }

    match &request.svg {
        Some(path) => {
            let written = if request.polar {
                svg::polar_svg(&trajectory, path, &title, request.lines)
            } else {
                svg::altaz_svg(&trajectory, path, &title, marks)
            };
            written.map_err(|e| Error::Plot(e.to_string()))?;
            tracing::info!(path = %path.display(), samples = trajectory.len(), "wrote plot");
            out.push_str(&format!("Wrote {}", path.display()));
        }
        None => out.push_str(&render_terminal(&trajectory, &title, request, marks)),
    }
    Ok(CommandOutput::Text(out))
}

fn render_terminal(
    trajectory: &Trajectory,
    title: &str,
    request: &PlotRequest,
    marks: Option<&VisibilityCriteria>,
) -> String {
    if request.polar {
        terminal::polar_terminal(trajectory, title, request.lines)
    } else {
        terminal::altaz_terminal(trajectory, title, marks)
    }
}

fn sweep_header(config: &Configuration, length_hours: f64) -> Result<String> {
    let end = Instant::from_julian_date(config.instant.julian_date().add_hours(length_hours))?;
    Ok(format!(
        "from: {}  to: {}\n",
        config.instant.to_iso8601(),
        end.to_iso8601()
    ))
}

/// Full-day listing and detailed chart of one object, as shown by `av`
/// and `sr`.
pub fn object_report(
    name: &str,
    config: &Configuration,
    display: &DisplayOptions,
    criteria: &VisibilityCriteria,
) -> Result<String> {
    let trajectory = sample_trajectory(config, DEFAULT_PLOT_LENGTH_HOURS, DEFAULT_PLOT_STEP_HOURS)?;
    let mut out = sweep_header(config, DEFAULT_PLOT_LENGTH_HOURS)?;
    out.push_str(&verbose_listing(&trajectory, display)?);
    out.push_str(&terminal::altaz_terminal(
        &trajectory,
        &format!("Plotting {name}"),
        Some(criteria),
    ));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use tempfile::TempDir;

    fn session() -> Session {
        Session::with_catalog(Box::new(StaticCatalog::default())).unwrap()
    }

    fn text(output: CommandOutput) -> String {
        match output {
            CommandOutput::Text(text) => text,
            _ => panic!("expected Text output"),
        }
    }

    #[test]
    fn parse_defaults() {
        let req = PlotRequest::parse(&["m57"]).unwrap();
        assert_eq!(req, PlotRequest::new("m57"));
        assert_eq!(req.length_hours, 24.0);
        assert_eq!(req.step_hours, 1.0);
    }

    #[test]
    fn parse_flags_anywhere() {
        let req = PlotRequest::parse(&["-p", "veil", "12", "-s", "out.svg", "0.5", "-l", "-v"])
            .unwrap();
        assert_eq!(req.name, "veil");
        assert_eq!(req.length_hours, 12.0);
        assert_eq!(req.step_hours, 0.5);
        assert!(req.polar && req.lines && req.verbose);
        assert_eq!(req.svg, Some(PathBuf::from("out.svg")));
    }

    #[test]
    fn parse_errors() {
        assert!(PlotRequest::parse(&[]).is_err());
        assert!(PlotRequest::parse(&["m57", "-s"]).is_err());
        assert!(PlotRequest::parse(&["m57", "long"]).is_err());
        assert!(PlotRequest::parse(&["m57", "1", "2", "3"]).is_err());
    }

    #[test]
    fn plot_missing_configuration() {
        let s = session();
        assert!(matches!(
            plot(&s, &PlotRequest::new("nope")),
            Err(Error::MissingConfiguration(_))
        ));
    }

    #[test]
    fn plot_rejects_zero_step() {
        let s = session();
        let mut req = PlotRequest::new("m57");
        req.step_hours = 0.0;
        assert!(matches!(plot(&s, &req), Err(Error::InvalidStep(_))));
    }

    #[test]
    fn verbose_plot_lists_every_sample() {
        let s = session();
        let mut req = PlotRequest::new("m57");
        req.length_hours = 4.0;
        req.verbose = true;
        let out = text(plot(&s, &req).unwrap());
        assert!(out.starts_with("from: 2024-03-13T00:00:00.000  to: 2024-03-13T04:00:00.000"));
        assert!(out.contains("2024-03-13T03:00:00.000"));
        assert!(out.contains("Plotting m57"));
    }

    #[test]
    fn svg_plot_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("m57.svg");
        let s = session();
        let mut req = PlotRequest::new("m57");
        req.polar = true;
        req.svg = Some(path.clone());
        let out = text(plot(&s, &req).unwrap());
        assert!(out.ends_with(&format!("Wrote {}", path.display())));
        assert!(path.exists());
    }

    #[test]
    fn object_report_covers_full_day() {
        let s = session();
        let config = *s.get("veil").unwrap();
        let report = object_report("veil", &config, &s.display, &s.criteria).unwrap();
        assert!(report.contains("Plotting veil"));
        assert!(report.contains("  23  "));
    }
}
