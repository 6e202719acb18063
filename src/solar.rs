//! Solar noon, sunrise and sunset approximation.
//!
//! Implements the first-order method described at
//! <http://aa.quae.nl/en/reken/zonpositie.html>: the Julian cycle since J2000.0
//! gives an approximate transit, the mean anomaly and equation of center give
//! the sun's ecliptic longitude, and one correction pass yields solar noon. The
//! hour angle at which the sun's centre is 0.83° below the horizon gives sunset;
//! sunrise is mirrored about noon.
//!
//! The method treats noon as the midpoint between sunrise and sunset, which is
//! a good approximation below about 60° latitude. Typical error is within a
//! minute or two of more rigorous algorithms.

#![allow(clippy::unreadable_literal)]

use log::{debug, trace};

use crate::math::{
    acos, asin, cos, degrees_to_radians, floor, normalize_degrees, radians_to_degrees, sin, sqrt,
};
use crate::time::{CivilDate, JulianDate, JulianDay, LocalClock};
use crate::types::{Location, PolarCondition, SunriseResult};

/// Julian date of J2000.0 (2000-01-01 12:00 TT).
const J2000: f64 = 2_451_545.0;

/// J2000.0 plus the mean transit offset at the Greenwich meridian.
const J2000_TRANSIT: f64 = 2_451_545.0009;

/// Mean anomaly at J2000.0 in degrees.
const MEAN_ANOMALY_EPOCH: f64 = 357.5291;

/// Daily motion of the mean anomaly in degrees.
const MEAN_ANOMALY_RATE: f64 = 0.98560028;

/// Longitude of perihelion in degrees.
const PERIHELION: f64 = 102.9372;

/// Obliquity of the ecliptic in degrees.
const OBLIQUITY: f64 = 23.45;

/// Sun altitude at apparent sunrise/sunset (refraction plus solar radius).
const SUNRISE_SUNSET_ANGLE: f64 = -0.83;

/// Horizon dip in arc minutes per square root metre of observer elevation.
const ELEVATION_DIP: f64 = -2.076;

/// Sunrise, solar noon and sunset calculator for one location.
///
/// The calculator is an immutable value: every query is a pure function of
/// the location and the requested date, so one instance can be shared freely
/// between threads.
///
/// # Example
/// ```
/// use solar_transit::{SolarCalculator, UtcOffset};
///
/// // Hannover, Germany (CET, UTC+1)
/// let hannover = SolarCalculator::at_sea_level(52.386667, 9.697778);
/// let cet = UtcOffset::new(3600).unwrap();
///
/// let noon = hannover.noon(2014, 12, 19, &cet).unwrap();
/// assert_eq!((noon.hour(), noon.minute()), (12, 19));
///
/// // Invalid dates yield no time
/// assert!(hannover.sunrise(2014, 4, 31, &cet).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCalculator {
    location: Location,
}

impl SolarCalculator {
    /// Creates a calculator.
    ///
    /// # Arguments
    /// * `latitude` - Degrees, north positive
    /// * `longitude` - Degrees, east positive
    /// * `elevation` - Metres above the surrounding ground
    ///
    /// Coordinates are not validated; out-of-range values produce meaningless
    /// but finite-or-undefined results rather than panics.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self::from_location(Location::new(latitude, longitude, elevation))
    }

    /// Creates a calculator for an observer at ground level.
    #[must_use]
    pub const fn at_sea_level(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }

    /// Creates a calculator for a location.
    #[must_use]
    pub const fn from_location(location: Location) -> Self {
        Self { location }
    }

    /// Gets the observer location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Local time of solar noon.
    ///
    /// Returns `None` if the date does not exist or cannot be represented by `clock`.
    pub fn noon<C: LocalClock>(
        &self,
        year: i32,
        month: u32,
        day: u32,
        clock: &C,
    ) -> Option<C::Time> {
        self.noon_on(checked_date(year, month, day)?, clock)
    }

    /// Local time of sunrise.
    ///
    /// Returns `None` if the date does not exist or the sun does not rise or
    /// set that day.
    pub fn sunrise<C: LocalClock>(
        &self,
        year: i32,
        month: u32,
        day: u32,
        clock: &C,
    ) -> Option<C::Time> {
        self.sunrise_on(checked_date(year, month, day)?, clock)
    }

    /// Local time of sunset.
    ///
    /// Returns `None` if the date does not exist or the sun does not rise or
    /// set that day.
    pub fn sunset<C: LocalClock>(
        &self,
        year: i32,
        month: u32,
        day: u32,
        clock: &C,
    ) -> Option<C::Time> {
        self.sunset_on(checked_date(year, month, day)?, clock)
    }

    /// Local time of solar noon on a validated date.
    pub fn noon_on<C: LocalClock>(&self, date: CivilDate, clock: &C) -> Option<C::Time> {
        let julian_day = clock.anchor_utc_date(date)?.julian_day();
        self.noon_julian(julian_day).to_local(clock)
    }

    /// Local time of sunrise on a validated date.
    pub fn sunrise_on<C: LocalClock>(&self, date: CivilDate, clock: &C) -> Option<C::Time> {
        let julian_day = clock.anchor_utc_date(date)?.julian_day();
        self.sunrise_julian(julian_day)?.to_local(clock)
    }

    /// Local time of sunset on a validated date.
    pub fn sunset_on<C: LocalClock>(&self, date: CivilDate, clock: &C) -> Option<C::Time> {
        let julian_day = clock.anchor_utc_date(date)?.julian_day();
        self.sunset_julian(julian_day)?.to_local(clock)
    }

    /// All solar events of a day, with polar day and polar night told apart.
    ///
    /// Returns `None` only if `clock` cannot represent the date or one of the times.
    ///
    /// # Example
    /// ```
    /// use solar_transit::{CivilDate, SolarCalculator, UtcOffset};
    ///
    /// // Longyearbyen, Svalbard in midwinter
    /// let longyearbyen = SolarCalculator::at_sea_level(78.22, 15.65);
    /// let date = CivilDate::new(2023, 12, 21).unwrap();
    /// let result = longyearbyen.solar_day(date, &UtcOffset::new(3600).unwrap()).unwrap();
    ///
    /// assert!(result.is_polar_night());
    /// assert!(result.sunrise().is_none());
    /// ```
    pub fn solar_day<C: LocalClock>(
        &self,
        date: CivilDate,
        clock: &C,
    ) -> Option<SunriseResult<C::Time>> {
        let julian_day = clock.anchor_utc_date(date)?.julian_day();
        self.events_julian(julian_day)
            .try_map(|julian| julian.to_local(clock))
    }

    /// Julian date of solar noon for the cycle containing `julian_day`.
    #[must_use]
    pub fn noon_julian(&self, julian_day: JulianDay) -> JulianDate {
        JulianDate::new(solar_transit(self.solar_noon_approx(julian_day)))
    }

    /// Julian date of sunset, or `None` during polar day or night.
    #[must_use]
    pub fn sunset_julian(&self, julian_day: JulianDay) -> Option<JulianDate> {
        self.sunset_or_polar(julian_day).ok()
    }

    /// Julian date of sunrise, or `None` during polar day or night.
    ///
    /// Mirrors sunset about solar noon.
    #[must_use]
    pub fn sunrise_julian(&self, julian_day: JulianDay) -> Option<JulianDate> {
        let sunset = self.sunset_julian(julian_day)?;
        Some(mirror(self.noon_julian(julian_day), sunset))
    }

    /// Julian dates of all solar events for the cycle containing `julian_day`.
    #[must_use]
    pub fn events_julian(&self, julian_day: JulianDay) -> SunriseResult<JulianDate> {
        let transit = self.noon_julian(julian_day);
        match self.sunset_or_polar(julian_day) {
            Ok(sunset) => SunriseResult::RegularDay {
                sunrise: mirror(transit, sunset),
                transit,
                sunset,
            },
            Err(condition) => SunriseResult::polar(condition, transit),
        }
    }

    /// Number of solar-noon cycles since J2000.0 at this longitude.
    fn julian_cycle(&self, julian_day: JulianDay) -> f64 {
        let n = julian_day.as_f64() - J2000_TRANSIT - self.location.west_longitude() / 360.0;
        floor(n + 0.5)
    }

    /// First estimate of the Julian date of local solar noon.
    fn solar_noon_approx(&self, julian_day: JulianDay) -> f64 {
        J2000_TRANSIT + self.location.west_longitude() / 360.0 + self.julian_cycle(julian_day)
    }

    /// Hour angle of sunset in degrees, i.e. half the sun's arc above the threshold.
    fn hour_angle(&self, noon: f64) -> Result<f64, PolarCondition> {
        let mean = solar_mean_anomaly(noon);
        let lambda = ecliptic_longitude(mean);
        let latitude = degrees_to_radians(self.location.latitude());

        let sin_declination = sin(degrees_to_radians(lambda)) * sin(degrees_to_radians(OBLIQUITY));
        let cos_declination = cos(asin(sin_declination));
        let threshold = SUNRISE_SUNSET_ANGLE + elevation_dip(self.location.elevation());

        let cos_hour_angle = (sin(degrees_to_radians(threshold))
            - sin(latitude) * sin_declination)
            / (cos(latitude) * cos_declination);

        if cos_hour_angle > 1.0 {
            trace!("sun stays below the horizon (cos H = {cos_hour_angle})");
            return Err(PolarCondition::AllNight);
        }
        if cos_hour_angle < -1.0 {
            trace!("sun stays above the horizon (cos H = {cos_hour_angle})");
            return Err(PolarCondition::AllDay);
        }
        Ok(radians_to_degrees(acos(cos_hour_angle)))
    }

    fn sunset_or_polar(&self, julian_day: JulianDay) -> Result<JulianDate, PolarCondition> {
        let noon = self.solar_noon_approx(julian_day);
        let mean = solar_mean_anomaly(noon);
        let lambda = ecliptic_longitude(mean);
        let hour_angle = self.hour_angle(noon)?;

        let offset = (hour_angle + self.location.west_longitude()) / 360.0;
        Ok(JulianDate::new(
            J2000_TRANSIT
                + offset
                + self.julian_cycle(julian_day)
                + transit_correction(mean, lambda),
        ))
    }
}

fn checked_date(year: i32, month: u32, day: u32) -> Option<CivilDate> {
    CivilDate::new(year, month, day)
        .inspect_err(|err| debug!("no solar events for {year}-{month}-{day}: {err}"))
        .ok()
}

/// Reflects `event` about `transit`.
fn mirror(transit: JulianDate, event: JulianDate) -> JulianDate {
    JulianDate::new(transit.value() - (event.value() - transit.value()))
}

/// Mean solar anomaly in degrees at Julian date `noon`.
fn solar_mean_anomaly(noon: f64) -> f64 {
    normalize_degrees(MEAN_ANOMALY_EPOCH + MEAN_ANOMALY_RATE * (noon - J2000))
}

/// Equation of center in degrees for mean anomaly `mean`.
fn equation_of_center(mean: f64) -> f64 {
    1.9148 * sin_degrees(mean)
        + 0.0200 * sin_degrees(2.0 * mean)
        + 0.0003 * sin_degrees(3.0 * mean)
}

/// Ecliptic longitude of the sun in degrees.
fn ecliptic_longitude(mean: f64) -> f64 {
    normalize_degrees(mean + PERIHELION + equation_of_center(mean) + 180.0)
}

/// Offset in days from the mean to the true transit.
fn transit_correction(mean: f64, lambda: f64) -> f64 {
    0.0053 * sin_degrees(mean) - 0.0069 * sin_degrees(2.0 * lambda)
}

/// Julian date of solar transit refined from the estimate `noon`.
fn solar_transit(noon: f64) -> f64 {
    let mean = solar_mean_anomaly(noon);
    let lambda = ecliptic_longitude(mean);
    noon + transit_correction(mean, lambda)
}

/// Threshold lowering in degrees for an observer above the surrounding ground.
fn elevation_dip(elevation: f64) -> f64 {
    if elevation > 0.0 {
        ELEVATION_DIP * sqrt(elevation) / 60.0
    } else {
        0.0
    }
}

/// Sine of an angle in degrees, reduced first.
fn sin_degrees(degrees: f64) -> f64 {
    sin(degrees_to_radians(normalize_degrees(degrees)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{TimeOfDay, UtcOffset};

    const EPSILON: f64 = 1e-9;

    fn hannover() -> SolarCalculator {
        SolarCalculator::at_sea_level(52.386667, 9.697778)
    }

    fn jd(year: i32, month: u32, day: u32) -> JulianDay {
        CivilDate::new(year, month, day).unwrap().julian_day()
    }

    #[test]
    fn test_julian_cycle_and_noon_estimate() {
        let calc = hannover();
        let julian_day = jd(2014, 12, 19);

        assert_eq!(calc.julian_cycle(julian_day), 5466.0);
        let estimate = calc.solar_noon_approx(julian_day);
        assert!((estimate - 2_457_010.9739617277).abs() < EPSILON);
    }

    #[test]
    fn test_mean_anomaly_and_ecliptic_longitude() {
        assert!((solar_mean_anomaly(J2000) - MEAN_ANOMALY_EPOCH).abs() < EPSILON);

        let mean = solar_mean_anomaly(2_457_010.9739617277);
        assert!((mean - 344.79456715152355).abs() < 1e-6);

        let lambda = ecliptic_longitude(mean);
        assert!(lambda > -360.0 && lambda < 360.0);
        // Two days before the December solstice
        assert!((lambda - 267.219).abs() < 1e-3, "lambda = {lambda}");
    }

    #[test]
    fn test_equation_of_center_bounds() {
        assert!(equation_of_center(0.0).abs() < EPSILON);
        assert!(equation_of_center(180.0).abs() < 1e-6);
        for step in 0..360 {
            let c = equation_of_center(f64::from(step));
            assert!(c.abs() < 1.9148 + 0.0200 + 0.0003 + EPSILON);
        }
    }

    #[test]
    fn test_elevation_dip() {
        assert_eq!(elevation_dip(0.0), 0.0);
        assert_eq!(elevation_dip(-50.0), 0.0);
        assert!((elevation_dip(100.0) - (-2.076 * 10.0 / 60.0)).abs() < EPSILON);
    }

    #[test]
    fn test_julian_dates_for_reference_day() {
        let calc = hannover();
        let julian_day = jd(2014, 12, 19);

        let noon = calc.noon_julian(julian_day).value();
        let sunset = calc.sunset_julian(julian_day).unwrap().value();
        let sunrise = calc.sunrise_julian(julian_day).unwrap().value();

        assert!((noon - 2_457_010.971902924).abs() < 1e-7);
        assert!((sunset - 2_457_011.1318052835).abs() < 1e-7);
        assert!((sunrise - 2_457_010.8120005648).abs() < 1e-7);
        assert!(((sunset - noon) - (noon - sunrise)).abs() < EPSILON);
    }

    #[test]
    fn test_hour_angle_polar_classification() {
        let north = SolarCalculator::at_sea_level(78.22, 15.65);

        let winter = north.solar_noon_approx(jd(2023, 12, 21));
        assert_eq!(north.hour_angle(winter), Err(PolarCondition::AllNight));

        let summer = north.solar_noon_approx(jd(2023, 6, 21));
        assert_eq!(north.hour_angle(summer), Err(PolarCondition::AllDay));

        let equator = SolarCalculator::at_sea_level(0.0, 0.0);
        let angle = equator.hour_angle(equator.solar_noon_approx(jd(2000, 1, 1))).unwrap();
        assert!(angle > 90.0 && angle < 92.0, "angle = {angle}");
    }

    #[test]
    fn test_elevation_widens_the_day() {
        let ground = hannover();
        let tower = SolarCalculator::new(52.386667, 9.697778, 100.0);
        let julian_day = jd(2014, 12, 19);

        assert_eq!(ground.noon_julian(julian_day), tower.noon_julian(julian_day));
        assert!(tower.sunset_julian(julian_day) > ground.sunset_julian(julian_day));
        assert!(tower.sunrise_julian(julian_day) < ground.sunrise_julian(julian_day));
    }

    #[test]
    fn test_events_julian_matches_individual_operations() {
        let calc = hannover();
        let julian_day = jd(2014, 6, 21);

        let events = calc.events_julian(julian_day);
        assert_eq!(*events.transit(), calc.noon_julian(julian_day));
        assert_eq!(events.sunrise().copied(), calc.sunrise_julian(julian_day));
        assert_eq!(events.sunset().copied(), calc.sunset_julian(julian_day));
    }

    #[test]
    fn test_public_operations_with_fixed_offset() {
        let calc = hannover();
        let cet = UtcOffset::new(3600).unwrap();

        let noon = calc.noon(2014, 12, 19, &cet).unwrap();
        let sunrise = calc.sunrise(2014, 12, 19, &cet).unwrap();
        let sunset = calc.sunset(2014, 12, 19, &cet).unwrap();

        assert_eq!(noon, TimeOfDay::new(12, 19, 32, 413).unwrap());
        assert!(sunrise < noon && noon < sunset);
    }

    #[test]
    fn test_invalid_dates_are_undefined() {
        let calc = hannover();
        let cet = UtcOffset::new(3600).unwrap();

        for (year, month, day) in [(2014, 13, 1), (2014, 4, 31), (2014, 2, 29), (2014, 0, 10)] {
            assert!(calc.noon(year, month, day, &cet).is_none());
            assert!(calc.sunrise(year, month, day, &cet).is_none());
            assert!(calc.sunset(year, month, day, &cet).is_none());
        }
    }

    #[test]
    fn test_out_of_range_coordinates_do_not_panic() {
        let cet = UtcOffset::new(3600).unwrap();
        let date = CivilDate::new(2014, 12, 19).unwrap();

        for calc in [
            SolarCalculator::new(120.0, 500.0, -20.0),
            SolarCalculator::new(f64::NAN, 0.0, 0.0),
            SolarCalculator::new(0.0, 1e300, 0.0),
            SolarCalculator::new(90.0, 0.0, 0.0),
        ] {
            let _ = calc.solar_day(date, &cet);
            let _ = calc.noon_on(date, &cet);
            let _ = calc.sunrise_on(date, &cet);
        }
    }
}
