//! Error types for the solar transit library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while preparing inputs for sunrise/sunset calculations.
///
/// A day without sunrise or sunset is not an error; see
/// [`PolarCondition`](crate::PolarCondition).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The requested civil date does not exist.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// UTC offset outside the open range of ±24 hours.
    InvalidUtcOffset {
        /// The invalid offset in seconds east of UTC.
        seconds: i32,
    },
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid observer elevation (must be finite and not negative).
    InvalidElevation {
        /// The invalid elevation value provided.
        value: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            Self::InvalidUtcOffset { seconds } => {
                write!(
                    f,
                    "invalid UTC offset {seconds}s (must be within ±86399 seconds)"
                )
            }
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevation { value } => {
                write!(f, "invalid elevation {value} m (must not be negative)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates an invalid UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(seconds: i32) -> Self {
        Self::InvalidUtcOffset { seconds }
    }

    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// [`SolarCalculator`](crate::SolarCalculator) itself accepts any value; this
/// is for callers that take coordinates from user input.
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates the observer elevation is finite and not below ground.
///
/// # Errors
/// Returns `InvalidElevation` for negative or non-finite values.
pub fn check_elevation(elevation: f64) -> Result<()> {
    if !elevation.is_finite() || elevation < 0.0 {
        return Err(Error::invalid_elevation(elevation));
    }
    Ok(())
}
