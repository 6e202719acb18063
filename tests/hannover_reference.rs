//! Reference days computed with the aa.quae.nl approximation, fixed UTC offsets only.

use solar_transit::{CivilDate, SolarCalculator, TimeOfDay, UtcOffset, dms_to_degrees};

fn millis(hour: i64, minute: i64, second: i64, millisecond: i64) -> i64 {
    ((hour * 60 + minute) * 60 + second) * 1000 + millisecond
}

fn assert_near(label: &str, actual: Option<TimeOfDay>, expected: i64, tolerance_ms: i64) {
    let actual = actual.unwrap_or_else(|| panic!("{label}: expected a time, got None"));
    let diff = (actual.millis_of_day() - expected).abs();
    assert!(
        diff <= tolerance_ms,
        "{label}: got {actual} ({} ms), expected {expected} ms, off by {diff} ms",
        actual.millis_of_day()
    );
}

fn hannover() -> SolarCalculator {
    SolarCalculator::at_sea_level(
        dms_to_degrees(52.0, 23, 12.0),
        dms_to_degrees(9.0, 41, 52.0),
    )
}

#[test]
fn hannover_december_19_2014() {
    let calc = hannover();
    let cet = UtcOffset::new(3600).unwrap();

    assert_near(
        "sunrise",
        calc.sunrise(2014, 12, 19, &cet),
        millis(8, 29, 16, 849),
        1000,
    );
    assert_near(
        "noon",
        calc.noon(2014, 12, 19, &cet),
        millis(12, 19, 32, 413),
        1000,
    );
    assert_near(
        "sunset",
        calc.sunset(2014, 12, 19, &cet),
        millis(16, 9, 47, 976),
        1000,
    );
}

#[test]
fn hannover_december_19_2014_formats_like_a_clock() {
    let calc = SolarCalculator::at_sea_level(52.386667, 9.697778);
    let cet = UtcOffset::new(3600).unwrap();

    assert_eq!(calc.sunrise(2014, 12, 19, &cet).unwrap().to_string(), "08:29:16");
    assert_eq!(calc.noon(2014, 12, 19, &cet).unwrap().to_string(), "12:19:32");
    assert_eq!(calc.sunset(2014, 12, 19, &cet).unwrap().to_string(), "16:09:47");
}

#[test]
fn elevation_moves_sunrise_earlier_and_sunset_later() {
    let ground = SolarCalculator::new(52.386667, 9.697778, 0.0);
    let tower = SolarCalculator::new(52.386667, 9.697778, 100.0);
    let cet = UtcOffset::new(3600).unwrap();

    assert_eq!(
        ground.noon(2014, 12, 19, &cet),
        tower.noon(2014, 12, 19, &cet)
    );
    assert_near(
        "sunrise at 100 m",
        tower.sunrise(2014, 12, 19, &cet),
        millis(8, 26, 21, 898),
        1000,
    );
    assert_near(
        "sunset at 100 m",
        tower.sunset(2014, 12, 19, &cet),
        millis(16, 12, 42, 927),
        1000,
    );
}

#[test]
fn sunrise_and_sunset_are_symmetric_about_noon() {
    let calc = hannover();
    let cet = UtcOffset::new(3600).unwrap();

    for day in 1..=28 {
        for month in 1..=12 {
            let sunrise = calc.sunrise(2014, month, day, &cet).unwrap().millis_of_day();
            let noon = calc.noon(2014, month, day, &cet).unwrap().millis_of_day();
            let sunset = calc.sunset(2014, month, day, &cet).unwrap().millis_of_day();

            assert!(sunrise < noon && noon < sunset, "2014-{month}-{day}");
            // Each time is rounded to the millisecond independently
            assert!(
                ((noon - sunrise) - (sunset - noon)).abs() <= 2,
                "2014-{month}-{day}: {sunrise} {noon} {sunset}"
            );
        }
    }
}

#[test]
fn reference_locations() {
    // (name, latitude, longitude, date, offset hours, sunrise, noon, sunset)
    let cases = [
        (
            "Hannover midsummer",
            52.386667,
            9.697778,
            (2014, 6, 21),
            2,
            millis(4, 59, 55, 0),
            millis(13, 24, 13, 0),
            millis(21, 48, 31, 0),
        ),
        (
            "Sydney",
            -33.8688,
            151.2093,
            (2023, 12, 21),
            11,
            millis(5, 41, 51, 0),
            millis(12, 54, 6, 0),
            millis(20, 6, 20, 0),
        ),
        (
            "Null Island",
            0.0,
            0.0,
            (2000, 1, 1),
            0,
            millis(6, 0, 52, 919),
            millis(12, 4, 29, 393),
            millis(18, 8, 5, 868),
        ),
        (
            "San Francisco",
            37.7749,
            -122.4194,
            (2023, 6, 21),
            -7,
            millis(5, 49, 14, 0),
            millis(13, 12, 41, 0),
            millis(20, 36, 9, 0),
        ),
    ];

    for (name, latitude, longitude, (year, month, day), hours, sunrise, noon, sunset) in cases {
        let calc = SolarCalculator::at_sea_level(latitude, longitude);
        let clock = UtcOffset::new(hours * 3600).unwrap();

        assert_near(name, calc.sunrise(year, month, day, &clock), sunrise, 2000);
        assert_near(name, calc.noon(year, month, day, &clock), noon, 2000);
        assert_near(name, calc.sunset(year, month, day, &clock), sunset, 2000);
    }
}

#[test]
fn boa_vista_west_of_greenwich() {
    // Boa Vista, Cabo Verde (UTC-1)
    let calc = SolarCalculator::at_sea_level(16.141, -22.904);
    let cvt = UtcOffset::new(-3600).unwrap();
    let date = CivilDate::new(2014, 12, 19).unwrap();

    let day = calc.solar_day(date, &cvt).unwrap();
    assert!(day.is_regular_day());

    // 22.9° west puts solar noon about half an hour after 12:00 UTC-1
    let noon = day.transit();
    assert_eq!(noon.hour(), 12);
    assert!((20..=40).contains(&noon.minute()), "noon at {noon}");
}

#[test]
fn invalid_dates_yield_no_times() {
    let calc = hannover();
    let cet = UtcOffset::new(3600).unwrap();

    for (year, month, day) in [(2014, 2, 30), (2014, 13, 19), (2014, 12, 32), (2015, 2, 29)] {
        assert_eq!(calc.sunrise(year, month, day, &cet), None);
        assert_eq!(calc.noon(year, month, day, &cet), None);
        assert_eq!(calc.sunset(year, month, day, &cet), None);
    }

    // Leap day exists in 2016
    assert!(calc.noon(2016, 2, 29, &cet).is_some());
}

#[test]
fn same_day_in_utc_and_local_offsets() {
    let calc = hannover();
    let utc = calc.noon(2014, 12, 19, &UtcOffset::UTC).unwrap();
    let cet = calc.noon(2014, 12, 19, &UtcOffset::new(3600).unwrap()).unwrap();

    assert_eq!(cet.millis_of_day() - utc.millis_of_day(), 3_600_000);
}
