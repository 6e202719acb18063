//! # Solar Transit
//!
//! Solar noon, sunrise and sunset times for a location and a civil date.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The calculation follows the first-order approximation from
//! <http://aa.quae.nl/en/reken/zonpositie.html>: Julian cycle, mean anomaly,
//! equation of center, ecliptic longitude, one transit correction and the
//! sunset hour angle, with sunrise mirrored about solar noon. It is a compact,
//! deterministic method, accurate to a minute or two below about 60° latitude.
//!
//! ## Features
//!
//! - Pure numeric core: the algorithm only sees Julian day numbers
//! - Time zones enter through the [`LocalClock`] trait: fixed offsets
//!   ([`UtcOffset`]) or any `chrono` time zone ([`ChronoClock`])
//! - Polar day and polar night are explicit results, never sentinel values
//! - Thread-safe: the calculator is an immutable `Copy` value
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable the [`ChronoClock`] adapter
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `cli`: Build the `solar-transit` command-line tool
//!
//! ## Quick Start
//!
//! ### Fixed UTC offset
//! ```rust
//! use solar_transit::{SolarCalculator, UtcOffset};
//!
//! // Hannover, Germany: 52° 23' 12" N, 9° 41' 52" E
//! let hannover = SolarCalculator::at_sea_level(52.386667, 9.697778);
//! let cet = UtcOffset::new(3600).unwrap();
//!
//! let sunrise = hannover.sunrise(2014, 12, 19, &cet).unwrap();
//! let noon = hannover.noon(2014, 12, 19, &cet).unwrap();
//! let sunset = hannover.sunset(2014, 12, 19, &cet).unwrap();
//!
//! println!("sunrise: {sunrise}");
//! println!("noon:    {noon}");
//! println!("sunset:  {sunset}");
//! assert!(sunrise < noon && noon < sunset);
//! ```
//!
//! ### Time zones with chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{FixedOffset, NaiveDate};
//! use solar_transit::{ChronoClock, SolarCalculator, SunriseResult};
//!
//! let longyearbyen = SolarCalculator::at_sea_level(78.22, 15.65);
//! let clock = ChronoClock::new(FixedOffset::east_opt(3600).unwrap());
//! let date = NaiveDate::from_ymd_opt(2023, 12, 21).unwrap();
//!
//! match longyearbyen.solar_day(date.into(), &clock).unwrap() {
//!     SunriseResult::RegularDay { sunrise, sunset, .. } => {
//!         println!("{sunrise} - {sunset}");
//!     }
//!     SunriseResult::AllDay { transit } => println!("midnight sun, noon at {transit}"),
//!     SunriseResult::AllNight { transit } => println!("polar night, noon at {transit}"),
//! }
//! # }
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, north positive
//! - **Longitude**: degrees, east positive
//! - **Elevation**: metres above the surrounding ground; lowers the horizon
//! - **Julian day**: integer day starting at 12:00 UTC

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::math::{dms_to_degrees, normalize_degrees};
pub use crate::solar::SolarCalculator;
#[cfg(feature = "chrono")]
pub use crate::time::ChronoClock;
pub use crate::time::{CivilDate, JulianDate, JulianDay, LocalClock, TimeOfDay, UtcOffset};
pub use crate::types::{Location, PolarCondition, SunriseResult};

// Algorithm module
pub mod solar;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, NaiveTime, Timelike};

    #[test]
    fn test_clock_adapters_agree() {
        let calculator = SolarCalculator::at_sea_level(52.386667, 9.697778);
        let date = CivilDate::new(2014, 12, 19).unwrap();

        let fixed = UtcOffset::new(3600).unwrap();
        let chrono_clock = ChronoClock::new(FixedOffset::east_opt(3600).unwrap());

        let from_fixed = calculator.solar_day(date, &fixed).unwrap();
        let from_chrono = calculator.solar_day(date, &chrono_clock).unwrap();

        let to_naive = |time: &TimeOfDay| {
            NaiveTime::from_hms_milli_opt(
                time.hour(),
                time.minute(),
                time.second(),
                time.millisecond(),
            )
            .unwrap()
        };

        assert_eq!(to_naive(from_fixed.transit()), *from_chrono.transit());
        assert_eq!(
            from_fixed.sunrise().map(to_naive),
            from_chrono.sunrise().copied()
        );
        assert_eq!(
            from_fixed.sunset().map(to_naive),
            from_chrono.sunset().copied()
        );
    }

    #[test]
    fn test_naive_date_entry_point() {
        let calculator = SolarCalculator::at_sea_level(0.0, 0.0);
        let clock = ChronoClock::new(FixedOffset::east_opt(0).unwrap());
        let naive = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

        let noon = calculator.noon_on(naive.into(), &clock).unwrap();
        assert_eq!(noon, calculator.noon(2000, 1, 1, &clock).unwrap());
        assert_eq!((noon.hour(), noon.minute()), (12, 4));
    }
}
