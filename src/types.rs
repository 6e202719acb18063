//! Core data types for sunrise/sunset calculations.

/// Observer position on the Earth's surface.
///
/// The public API uses east-positive longitude. The solar algorithm works with
/// west-positive longitude; the conversion happens once, in [`Location::new`].
///
/// # Example
/// ```
/// # use solar_transit::Location;
/// // Boa Vista, Cabo Verde: 16.141 N, 22.904 W
/// let boa_vista = Location::new(16.141, -22.904, 0.0);
/// assert_eq!(boa_vista.longitude(), -22.904);
/// assert_eq!(boa_vista.west_longitude(), 22.904);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Degrees, north positive
    latitude: f64,
    /// Degrees, west positive
    west_longitude: f64,
    /// Metres above the surrounding ground
    elevation: f64,
}

impl Location {
    /// Creates a location from latitude (north +), longitude (east +) and
    /// elevation in metres above ground.
    ///
    /// Values are not range-checked; see [`check_coordinates`](crate::error::check_coordinates).
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            west_longitude: -longitude,
            elevation,
        }
    }

    /// Gets the latitude in degrees (north positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (east positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        -self.west_longitude
    }

    /// Gets the longitude in degrees (west positive), as used by the solar algorithm.
    #[must_use]
    pub const fn west_longitude(&self) -> f64 {
        self.west_longitude
    }

    /// Gets the elevation in metres above ground.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }
}

/// Why a day has no sunrise and sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// Polar day: the sun stays above the sunrise/sunset threshold
    AllDay,
    /// Polar night: the sun stays below the sunrise/sunset threshold
    AllNight,
}

/// Result of sunrise/sunset calculations for a given day.
///
/// Solar events can vary significantly based on location and time of year,
/// especially at extreme latitudes where polar days and nights occur. Solar
/// noon is defined on every day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SunriseResult<T> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (when sun crosses meridian, solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay {
        /// Time of solar transit (closest approach to zenith)
        transit: T,
    },
    /// Polar night - sun remains below the horizon all day
    AllNight {
        /// Time of solar transit (when sun is highest, though still below horizon)
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Builds the result for a day without sunrise and sunset.
    pub fn polar(condition: PolarCondition, transit: T) -> Self {
        match condition {
            PolarCondition::AllDay => Self::AllDay { transit },
            PolarCondition::AllNight => Self::AllNight { transit },
        }
    }

    /// Gets the transit time (solar noon) for any sunrise result.
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets the polar condition, if any.
    pub const fn polar_condition(&self) -> Option<PolarCondition> {
        match self {
            Self::RegularDay { .. } => None,
            Self::AllDay { .. } => Some(PolarCondition::AllDay),
            Self::AllNight { .. } => Some(PolarCondition::AllNight),
        }
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Converts every time in the result, failing if any conversion fails.
    pub fn try_map<U, F>(self, mut f: F) -> Option<SunriseResult<U>>
    where
        F: FnMut(T) -> Option<U>,
    {
        Some(match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
            } => SunriseResult::RegularDay {
                sunrise: f(sunrise)?,
                transit: f(transit)?,
                sunset: f(sunset)?,
            },
            Self::AllDay { transit } => SunriseResult::AllDay {
                transit: f(transit)?,
            },
            Self::AllNight { transit } => SunriseResult::AllNight {
                transit: f(transit)?,
            },
        })
    }
}
