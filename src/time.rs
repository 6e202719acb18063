//! Calendar and clock boundary for solar event calculations.
//!
//! The solar algorithm works on integer Julian day numbers and fractional Julian
//! dates. This module converts between those and civil calendar dates (proleptic
//! Gregorian), and defines [`LocalClock`], the narrow interface through which a
//! time-zone facility maps the algorithm's UTC results to local wall-clock time.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use core::fmt;

use crate::math::{floor, round};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, NaiveDate, NaiveTime, TimeZone};

/// Milliseconds per day (86,400,000)
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Seconds per day (86,400)
const SECONDS_PER_DAY: i64 = 86_400;

/// Milliseconds from midnight to 12:00:00, where Julian days begin.
const NOON_MILLIS: i64 = MILLIS_PER_DAY / 2;

/// Seconds from local midnight to 12:01:00, the instant used to pick the Julian day.
const ANCHOR_SECONDS: i64 = 12 * 3600 + 60;

/// A valid date in the proleptic Gregorian calendar.
///
/// # Example
/// ```
/// # use solar_transit::CivilDate;
/// let date = CivilDate::new(2014, 12, 19).unwrap();
/// assert_eq!(date.julian_day().value(), 2_457_011);
/// assert_eq!(date.to_string(), "2014-12-19");
///
/// assert!(CivilDate::new(2014, 4, 31).is_err());
/// assert!(CivilDate::new(2014, 13, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Creates a civil date, rejecting dates that do not exist.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day is outside the month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 {
            return Err(Error::invalid_date("day must be at least 1"));
        }
        if day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Year (astronomical numbering: 0 is 1 BCE).
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Julian day number of this date (the day that begins at noon UTC on it).
    #[must_use]
    pub fn julian_day(&self) -> JulianDay {
        // Fliegel & Van Flandern, with floor division so that years before
        // -4800 stay on the same calendar.
        let a = (14 - i64::from(self.month)) / 12;
        let y = i64::from(self.year) + 4800 - a;
        let m = i64::from(self.month) + 12 * a - 3;
        let jdn = i64::from(self.day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045;
        JulianDay(jdn)
    }

    /// Calendar date of a Julian day number.
    ///
    /// Returns `None` if the year does not fit into an `i32`.
    ///
    /// # Example
    /// ```
    /// # use solar_transit::{CivilDate, JulianDay};
    /// let date = CivilDate::from_julian_day(JulianDay::new(2_451_545)).unwrap();
    /// assert_eq!(date, CivilDate::new(2000, 1, 1).unwrap());
    /// ```
    #[must_use]
    pub fn from_julian_day(julian_day: JulianDay) -> Option<Self> {
        let a = i128::from(julian_day.0) + 32044;
        let b = (4 * a + 3).div_euclid(146_097);
        let c = a - (146_097 * b).div_euclid(4);
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);

        let day = u32::try_from(e - (153 * m + 2).div_euclid(5) + 1).ok()?;
        let month = u32::try_from(m + 3 - 12 * (m / 10)).ok()?;
        let year = i32::try_from(100 * b + d - 4800 + m / 10).ok()?;
        Some(Self { year, month, day })
    }

    /// Shifts the date by whole days.
    pub(crate) fn add_days(self, days: i64) -> Option<Self> {
        let shifted = self.julian_day().0.checked_add(days)?;
        Self::from_julian_day(JulianDay(shifted))
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(
                f,
                "-{:04}-{:02}-{:02}",
                self.year.unsigned_abs(),
                self.month,
                self.day
            )
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Integer Julian day number.
///
/// Day `n` starts at 12:00 UTC; J2000.0 (2000-01-01 12:00 UTC) begins day 2,451,545.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDay(i64);

impl JulianDay {
    /// Wraps a Julian day number.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Gets the day number.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Gets the day number as a float for the solar algorithm.
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

/// Fractional Julian date.
///
/// The integer part is the Julian day, the fraction the time elapsed since
/// 12:00 UTC that day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate(f64);

impl JulianDate {
    /// Wraps a fractional Julian date.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Gets the fractional Julian date.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Splits into the Julian day and the milliseconds elapsed since its noon.
    ///
    /// Milliseconds are rounded to nearest, half away from zero. Negative and
    /// non-finite dates have no calendar representation and yield `None`.
    ///
    /// # Example
    /// ```
    /// # use solar_transit::JulianDate;
    /// let (day, millis) = JulianDate::new(2_451_545.25).split().unwrap();
    /// assert_eq!(day.value(), 2_451_545);
    /// assert_eq!(millis, 6 * 3_600_000);
    /// ```
    #[must_use]
    pub fn split(&self) -> Option<(JulianDay, i64)> {
        if !self.0.is_finite() || self.0 < 0.0 {
            return None;
        }
        let day = floor(self.0);
        let millis = round((self.0 - day) * MILLIS_PER_DAY as f64) as i64;
        Some((JulianDay(day as i64), millis))
    }

    /// Converts to wall-clock time on `clock`.
    ///
    /// The integer part selects the calendar date, the fraction is added to
    /// 12:00 UTC on it and the resulting instant is handed to the clock.
    pub fn to_local<C: LocalClock>(&self, clock: &C) -> Option<C::Time> {
        let (day, millis) = self.split()?;
        clock.local_time(CivilDate::from_julian_day(day)?, millis)
    }
}

/// Wall-clock time of day with millisecond resolution.
///
/// Ordering is chronological. `Display` renders `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
}

impl TimeOfDay {
    /// Creates a time of day, or `None` if any component is out of range.
    #[must_use]
    pub const fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
            millisecond,
        })
    }

    /// Builds the time from milliseconds since midnight, wrapping into one day.
    #[must_use]
    pub const fn from_millis_of_day(millis: i64) -> Self {
        let millis = millis.rem_euclid(MILLIS_PER_DAY) as u32;
        Self {
            hour: millis / 3_600_000,
            minute: millis / 60_000 % 60,
            second: millis / 1000 % 60,
            millisecond: millis % 1000,
        }
    }

    /// Hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Second (0-59).
    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }

    /// Millisecond (0-999).
    #[must_use]
    pub const fn millisecond(&self) -> u32 {
        self.millisecond
    }

    /// Milliseconds since midnight.
    #[must_use]
    pub const fn millis_of_day(&self) -> i64 {
        ((self.hour as i64 * 60 + self.minute as i64) * 60 + self.second as i64) * 1000
            + self.millisecond as i64
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Maps civil dates and UTC instants to a local time convention.
///
/// This is the only contact point between the solar algorithm and time zones.
/// Implemented by [`UtcOffset`] for fixed offsets and, with the `chrono`
/// feature, by [`ChronoClock`] for any `chrono::TimeZone`.
pub trait LocalClock {
    /// Local wall-clock time type produced by this clock.
    type Time;

    /// UTC calendar date of the instant 12:01 local time on `date`.
    ///
    /// The Julian day number of this date seeds the solar algorithm. Returns
    /// `None` if the local time does not exist or the date is outside the
    /// clock's supported range.
    fn anchor_utc_date(&self, date: CivilDate) -> Option<CivilDate>;

    /// Local time of day at `millis_after_noon` milliseconds after 12:00 UTC on `date`.
    fn local_time(&self, date: CivilDate, millis_after_noon: i64) -> Option<Self::Time>;
}

/// Fixed offset from UTC, in seconds east of Greenwich.
///
/// # Example
/// ```
/// # use solar_transit::{LocalClock, CivilDate, UtcOffset};
/// let cet = UtcOffset::new(3600).unwrap();
/// let date = CivilDate::new(2014, 12, 19).unwrap();
/// let time = cet.local_time(date, 0).unwrap();
/// assert_eq!(time.to_string(), "13:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    /// Coordinated Universal Time.
    pub const UTC: Self = Self { seconds: 0 };

    /// Creates an offset of `seconds` east of UTC.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` unless the offset is strictly within ±24 hours.
    pub const fn new(seconds: i32) -> Result<Self> {
        if seconds <= -(SECONDS_PER_DAY as i32) || seconds >= SECONDS_PER_DAY as i32 {
            return Err(Error::invalid_utc_offset(seconds));
        }
        Ok(Self { seconds })
    }

    /// Gets the offset in seconds east of UTC.
    #[must_use]
    pub const fn seconds(&self) -> i32 {
        self.seconds
    }
}

impl LocalClock for UtcOffset {
    type Time = TimeOfDay;

    fn anchor_utc_date(&self, date: CivilDate) -> Option<CivilDate> {
        let utc_seconds = ANCHOR_SECONDS - i64::from(self.seconds);
        date.add_days(utc_seconds.div_euclid(SECONDS_PER_DAY))
    }

    fn local_time(&self, _date: CivilDate, millis_after_noon: i64) -> Option<TimeOfDay> {
        let local = NOON_MILLIS
            .checked_add(millis_after_noon)?
            .checked_add(i64::from(self.seconds) * 1000)?;
        Some(TimeOfDay::from_millis_of_day(local))
    }
}

/// [`LocalClock`] adapter over a `chrono` time zone.
///
/// # Example
/// ```
/// # use solar_transit::{ChronoClock, CivilDate, LocalClock};
/// use chrono::{FixedOffset, NaiveTime};
///
/// let clock = ChronoClock::new(FixedOffset::east_opt(3600).unwrap());
/// let date = CivilDate::new(2014, 12, 19).unwrap();
/// assert_eq!(
///     clock.local_time(date, 0),
///     NaiveTime::from_hms_opt(13, 0, 0)
/// );
/// ```
#[cfg(feature = "chrono")]
#[derive(Debug, Clone)]
pub struct ChronoClock<Tz>(Tz);

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> ChronoClock<Tz> {
    /// Wraps a time zone.
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self(timezone)
    }

    /// Gets the wrapped time zone.
    #[must_use]
    pub const fn timezone(&self) -> &Tz {
        &self.0
    }
}

#[cfg(all(feature = "chrono", feature = "std"))]
impl ChronoClock<chrono::Local> {
    /// Clock following the system's local time zone.
    #[must_use]
    pub const fn local() -> Self {
        Self(chrono::Local)
    }
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> LocalClock for ChronoClock<Tz> {
    type Time = NaiveTime;

    fn anchor_utc_date(&self, date: CivilDate) -> Option<CivilDate> {
        let anchor = NaiveDate::try_from(date).ok()?.and_hms_opt(12, 1, 0)?;
        let local = self.0.from_local_datetime(&anchor).earliest()?;
        Some(CivilDate::from(local.naive_utc().date()))
    }

    fn local_time(&self, date: CivilDate, millis_after_noon: i64) -> Option<NaiveTime> {
        let noon = NaiveDate::try_from(date).ok()?.and_hms_opt(12, 0, 0)?;
        let instant =
            noon.checked_add_signed(chrono::Duration::try_milliseconds(millis_after_noon)?)?;
        Some(self.0.from_utc_datetime(&instant).time())
    }
}

#[cfg(feature = "chrono")]
impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<CivilDate> for NaiveDate {
    type Error = Error;

    fn try_from(date: CivilDate) -> Result<Self> {
        Self::from_ymd_opt(date.year, date.month, date.day)
            .ok_or(Error::invalid_date("date is outside the supported chrono range"))
    }
}
