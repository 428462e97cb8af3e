// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge-native brightness scale.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Brightness on the bridge's raw scale (0-254).
///
/// The bridge reports and accepts `bri` values in this range. A value of 0
/// is the dimmest level the bridge knows; whether the light is lit is a
/// separate `on` flag.
///
/// # Examples
///
/// ```
/// use huelink_lib::types::Brightness;
///
/// let bri = Brightness::new(127).unwrap();
/// assert_eq!(bri.value(), 127);
/// assert_eq!(Brightness::MAX.value(), 254);
/// assert!(Brightness::new(255).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Brightness(u8);

impl Brightness {
    /// Lowest raw brightness.
    pub const MIN: Self = Self(0);

    /// Highest raw brightness.
    pub const MAX: Self = Self(254);

    /// Creates a raw brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 254.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX.0 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: u16::from(Self::MAX.0),
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a brightness, clamping to [0, 254].
    #[must_use]
    pub fn clamped(value: i32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let raw = value.clamp(0, i32::from(Self::MAX.0)) as u8;
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` if the raw value is 0.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/254", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Brightness> for u8 {
    fn from(value: Brightness) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_bounds() {
        assert!(Brightness::new(0).is_ok());
        assert!(Brightness::new(254).is_ok());
        assert!(Brightness::new(255).is_err());
    }

    #[test]
    fn brightness_clamped() {
        assert_eq!(Brightness::clamped(-30), Brightness::MIN);
        assert_eq!(Brightness::clamped(100).value(), 100);
        assert_eq!(Brightness::clamped(284), Brightness::MAX);
    }

    #[test]
    fn brightness_display() {
        assert_eq!(Brightness::new(100).unwrap().to_string(), "100/254");
    }
}
