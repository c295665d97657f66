use approx::assert_abs_diff_eq;
use celestial_time::{hours_from_julian_day, ClockSource, Instant, JulianDate, TimeError};

#[test]
fn reference_instant_matches_known_julian_day() {
    let t: Instant = "2020-12-23T07:34:34.5".parse().unwrap();
    assert_abs_diff_eq!(t.to_julian_day(), 2459206.8156770836, epsilon = 1e-9);
    assert_abs_diff_eq!(hours_from_julian_day(t.to_julian_day()), 7.57625, epsilon = 1e-6);
}

#[test]
fn hour_of_day_tracks_civil_clock_through_a_day() {
    let start = Instant::from_civil(2024, 3, 13, 0, 0, 0.0).unwrap();
    for hour in 0..24u8 {
        let jd = start.julian_date().add_hours(hour as f64).to_f64();
        assert_abs_diff_eq!(hours_from_julian_day(jd), hour as f64, epsilon = 1e-6);

        let t = Instant::from_julian_date(JulianDate::from_f64(jd)).unwrap();
        assert_eq!(t.hour(), hour);
    }
}

#[test]
fn malformed_civil_input_is_reported() {
    let err = Instant::from_civil(2021, 2, 29, 12, 0, 0.0).unwrap_err();
    assert!(matches!(err, TimeError::InvalidDate(_)));
    assert!(err.to_string().contains("day 29"));

    assert!(matches!(
        "not a date".parse::<Instant>(),
        Err(TimeError::ParseError(_))
    ));
}

#[test]
fn clock_source_resolution() {
    let pinned = Instant::from_civil(2023, 1, 2, 0, 0, 0.0).unwrap();
    assert_eq!(ClockSource::Fixed(pinned).resolve().unwrap().to_julian_day(), 2459946.5);
    assert!(ClockSource::Live.resolve().is_ok());
}
