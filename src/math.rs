//! Mathematical utilities for the solar approximation.

#[cfg(not(feature = "std"))]
use libm;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Reduces an angle in degrees to the open interval (-360, 360).
///
/// The result keeps the sign of the input and is congruent to it modulo 360.
/// Non-finite input yields NaN.
///
/// # Example
/// ```
/// # use solar_transit::normalize_degrees;
/// assert_eq!(normalize_degrees(725.0), 5.0);
/// assert_eq!(normalize_degrees(-725.0), -5.0);
/// assert_eq!(normalize_degrees(359.5), 359.5);
/// ```
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees % 360.0
}

/// Converts a sexagesimal angle to decimal degrees.
///
/// The sign of `degrees` applies to the whole angle, so 22° 54' 14" W is
/// written `dms_to_degrees(-22.0, 54, 14.0)`. Angles between -1° and 0° use
/// negative zero: 0° 30' W is `dms_to_degrees(-0.0, 30, 0.0)`.
///
/// # Example
/// ```
/// # use solar_transit::dms_to_degrees;
/// // Hannover: 52° 23' 12" N
/// let latitude = dms_to_degrees(52.0, 23, 12.0);
/// assert!((latitude - 52.386667).abs() < 1e-6);
///
/// assert_eq!(dms_to_degrees(-0.0, 30, 0.0), -0.5);
/// ```
pub fn dms_to_degrees(degrees: f64, minutes: u32, seconds: f64) -> f64 {
    let fraction = (f64::from(minutes) + seconds / 60.0) / 60.0;
    if degrees.is_sign_negative() {
        degrees - fraction
    } else {
        degrees + fraction
    }
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Rounds half-way cases away from zero.
#[inline]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}
