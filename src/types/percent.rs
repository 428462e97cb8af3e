// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Percentage type used by abstract light channels.
//!
//! Channels exchange brightness and color temperature as a normalized
//! percentage, independent of the bridge's native scales.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A percentage value (0-100).
///
/// # Examples
///
/// ```
/// use huelink_lib::types::Percent;
///
/// let half = Percent::new(50).unwrap();
/// assert_eq!(half.value(), 50);
///
/// assert_eq!(Percent::ZERO.value(), 0);
/// assert_eq!(Percent::HUNDRED.value(), 100);
///
/// assert!(Percent::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percent(u8);

impl Percent {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new percentage.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a percentage, clamping values above 100.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns `true` for 0%.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Percent {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(value: Percent) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_valid_values() {
        for v in 0..=100 {
            assert_eq!(Percent::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn percent_invalid_value() {
        assert!(matches!(
            Percent::new(101),
            Err(ValueError::OutOfRange { actual: 101, .. })
        ));
    }

    #[test]
    fn percent_clamped() {
        assert_eq!(Percent::clamped(42).value(), 42);
        assert_eq!(Percent::clamped(255).value(), 100);
    }

    #[test]
    fn percent_display() {
        assert_eq!(Percent::new(75).unwrap().to_string(), "75%");
    }

    #[test]
    fn percent_deserialize_rejects_out_of_range() {
        let ok: Percent = serde_json::from_str("30").unwrap();
        assert_eq!(ok.value(), 30);
        assert!(serde_json::from_str::<Percent>("130").is_err());
    }
}
