//! Semantic unit types for dashboard quantities
//!
//! Newtype wrappers keep wind speed, rainfall and temperature from being
//! mixed up when they flow from the storm model into readouts and forecasts.
//!
//! # Design
//! - All quantities use f64 so model arithmetic matches the slider maths exactly
//! - Total ordering via `Ord` (NaN sorts above every other value)
//! - `Deref` to the raw value for arithmetic at call sites
//! - Serde support for config files and JSON snapshots
//!
//! # Usage
//! ```
//! use storm_sim_core::core_types::units::{KilometersPerHour, MillimetersPerHour};
//!
//! let wind = KilometersPerHour::new(12.0) + KilometersPerHour::new(80.0);
//! assert_eq!(*wind, 92.0);
//!
//! let rain = MillimetersPerHour::new(5.0);
//! assert_eq!(rain.to_string(), "5.0 mm/h");
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, DerefMut, Mul, Sub};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Celsius {
    /// Create a new Celsius temperature. Asserts value >= absolute zero (-273.15°C).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= -273.15,
            "Celsius::new: value is below absolute zero (-273.15°C)"
        );
        Celsius(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Offset by a whole number of degrees (forecast highs and lows)
    #[inline]
    #[must_use]
    pub fn offset(self, degrees: i32) -> Self {
        Celsius(self.0 + f64::from(degrees))
    }
}

impl From<i32> for Celsius {
    fn from(v: i32) -> Self {
        Celsius::new(f64::from(v))
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}°", self.0)
    }
}

// ============================================================================
// WIND
// ============================================================================

/// Wind speed in kilometers per hour
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilometersPerHour(f64);

impl Eq for KilometersPerHour {}

impl PartialOrd for KilometersPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilometersPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KilometersPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for KilometersPerHour {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl KilometersPerHour {
    /// Create a new `KilometersPerHour` value.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KilometersPerHour(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for KilometersPerHour {
    fn from(v: f64) -> Self {
        KilometersPerHour::new(v)
    }
}

impl From<u32> for KilometersPerHour {
    fn from(v: u32) -> Self {
        KilometersPerHour::new(f64::from(v))
    }
}

impl Add for KilometersPerHour {
    type Output = KilometersPerHour;
    fn add(self, rhs: KilometersPerHour) -> KilometersPerHour {
        KilometersPerHour(self.0 + rhs.0)
    }
}

impl AddAssign for KilometersPerHour {
    fn add_assign(&mut self, rhs: KilometersPerHour) {
        self.0 += rhs.0;
    }
}

impl Sub for KilometersPerHour {
    type Output = KilometersPerHour;
    fn sub(self, rhs: KilometersPerHour) -> KilometersPerHour {
        KilometersPerHour(self.0 - rhs.0)
    }
}

impl Mul<f64> for KilometersPerHour {
    type Output = KilometersPerHour;
    fn mul(self, rhs: f64) -> KilometersPerHour {
        KilometersPerHour(self.0 * rhs)
    }
}

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km/h", self.0)
    }
}

// ============================================================================
// RAINFALL
// ============================================================================

/// Rainfall rate in millimeters per hour
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MillimetersPerHour(f64);

impl Eq for MillimetersPerHour {}

impl PartialOrd for MillimetersPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MillimetersPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for MillimetersPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for MillimetersPerHour {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl MillimetersPerHour {
    /// No rain
    pub const ZERO: MillimetersPerHour = MillimetersPerHour(0.0);

    /// Create a new rainfall rate
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MillimetersPerHour(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Add for MillimetersPerHour {
    type Output = MillimetersPerHour;
    fn add(self, rhs: MillimetersPerHour) -> MillimetersPerHour {
        MillimetersPerHour(self.0 + rhs.0)
    }
}

impl AddAssign for MillimetersPerHour {
    fn add_assign(&mut self, rhs: MillimetersPerHour) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for MillimetersPerHour {
    type Output = MillimetersPerHour;
    fn mul(self, rhs: f64) -> MillimetersPerHour {
        MillimetersPerHour(self.0 * rhs)
    }
}

impl fmt::Display for MillimetersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mm/h", self.0)
    }
}
