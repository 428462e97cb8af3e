// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color types for light control.
//!
//! This module provides the bridge-native color temperature (mireds) and the
//! channel-level HSB color.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

use super::Percent;

/// Color temperature in mireds (153-500).
///
/// Lower values are cooler (bluer), higher values are warmer.
///
/// - 153 (6500K) - Cool daylight
/// - 500 (2000K) - Warm candlelight
///
/// # Examples
///
/// ```
/// use huelink_lib::types::ColorTemperature;
///
/// let ct = ColorTemperature::new(250).unwrap();
/// assert_eq!(ct.value(), 250);
/// assert_eq!(ColorTemperature::clamped(600), ColorTemperature::WARMEST);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ColorTemperature(u16);

impl ColorTemperature {
    /// Minimum color temperature in mireds.
    pub const MIN: u16 = 153;

    /// Maximum color temperature in mireds.
    pub const MAX: u16 = 500;

    /// Coolest supported temperature.
    pub const COOLEST: Self = Self(Self::MIN);

    /// Warmest supported temperature.
    pub const WARMEST: Self = Self(Self::MAX);

    /// Creates a new color temperature value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [153, 500].
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a color temperature, clamping to the valid range.
    #[must_use]
    pub fn clamped(value: i32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mireds = value.clamp(i32::from(Self::MIN), i32::from(Self::MAX)) as u16;
        Self(mireds)
    }

    /// Returns the color temperature value in mireds.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the approximate color temperature in Kelvin.
    #[must_use]
    pub fn to_kelvin(&self) -> u16 {
        #[allow(clippy::cast_possible_truncation)]
        let kelvin = (1_000_000 / u32::from(self.0)) as u16;
        kelvin
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mired", self.0)
    }
}

impl TryFrom<u16> for ColorTemperature {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColorTemperature> for u16 {
    fn from(value: ColorTemperature) -> Self {
        value.0
    }
}

/// HSB color representation (Hue, Saturation, Brightness).
///
/// This is the value carried by the color channel. Saturation and brightness
/// are percentages; hue is in degrees.
///
/// # Examples
///
/// ```
/// use huelink_lib::types::{HsbColor, Percent};
///
/// let red = HsbColor::new(0, Percent::HUNDRED, Percent::HUNDRED).unwrap();
/// assert_eq!(red.hue(), 0);
///
/// let dark = red.with_brightness(Percent::ZERO);
/// assert!(dark.brightness().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HsbColor {
    hue: u16,
    saturation: Percent,
    brightness: Percent,
}

impl HsbColor {
    /// Maximum hue value in degrees.
    pub const MAX_HUE: u16 = 360;

    /// Creates a new HSB color.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHue` if hue is greater than 360.
    pub fn new(hue: u16, saturation: Percent, brightness: Percent) -> Result<Self, ValueError> {
        if hue > Self::MAX_HUE {
            return Err(ValueError::InvalidHue(hue));
        }
        Ok(Self {
            hue,
            saturation,
            brightness,
        })
    }

    /// Creates an HSB color, clamping hue to 360.
    #[must_use]
    pub const fn clamped(hue: u16, saturation: Percent, brightness: Percent) -> Self {
        Self {
            hue: if hue > Self::MAX_HUE { Self::MAX_HUE } else { hue },
            saturation,
            brightness,
        }
    }

    /// Returns the hue value (0-360).
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Returns the saturation.
    #[must_use]
    pub const fn saturation(&self) -> Percent {
        self.saturation
    }

    /// Returns the brightness.
    #[must_use]
    pub const fn brightness(&self) -> Percent {
        self.brightness
    }

    /// Returns a copy with a different brightness.
    #[must_use]
    pub const fn with_brightness(&self, brightness: Percent) -> Self {
        Self {
            hue: self.hue,
            saturation: self.saturation,
            brightness,
        }
    }
}

impl fmt::Display for HsbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HSB({}, {}, {})",
            self.hue, self.saturation, self.brightness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_temperature_valid() {
        for v in 153..=500 {
            assert_eq!(ColorTemperature::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn color_temperature_invalid() {
        assert!(ColorTemperature::new(152).is_err());
        assert!(ColorTemperature::new(501).is_err());
    }

    #[test]
    fn color_temperature_clamped() {
        assert_eq!(ColorTemperature::clamped(100), ColorTemperature::COOLEST);
        assert_eq!(ColorTemperature::clamped(600), ColorTemperature::WARMEST);
        assert_eq!(ColorTemperature::clamped(300).value(), 300);
    }

    #[test]
    fn color_temperature_kelvin() {
        assert_eq!(ColorTemperature::WARMEST.to_kelvin(), 2000);
        assert!(ColorTemperature::COOLEST.to_kelvin() > 6000);
    }

    #[test]
    fn hsb_color_invalid_hue() {
        let result = HsbColor::new(361, Percent::ZERO, Percent::ZERO);
        assert!(matches!(result, Err(ValueError::InvalidHue(361))));
    }

    #[test]
    fn hsb_clamped_hue() {
        let color = HsbColor::clamped(400, Percent::ZERO, Percent::HUNDRED);
        assert_eq!(color.hue(), 360);
    }

    #[test]
    fn hsb_with_brightness_keeps_hue_and_saturation() {
        let color = HsbColor::new(120, Percent::new(80).unwrap(), Percent::HUNDRED).unwrap();
        let dimmed = color.with_brightness(Percent::ZERO);
        assert_eq!(dimmed.hue(), 120);
        assert_eq!(dimmed.saturation().value(), 80);
        assert!(dimmed.brightness().is_zero());
    }

    #[test]
    fn hsb_display() {
        let color = HsbColor::new(240, Percent::new(50).unwrap(), Percent::HUNDRED).unwrap();
        assert_eq!(color.to_string(), "HSB(240, 50%, 100%)");
    }
}
