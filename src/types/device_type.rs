// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-type tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Model tags of the lights this library knows how to drive.
pub const SUPPORTED_DEVICE_TYPES: &[&str] = &[
    "LCT001",
    "LCT002",
    "LCT003",
    "LCT007",
    "LLC001",
    "LLC006",
    "LLC007",
    "LLC010",
    "LLC011",
    "LLC012",
    "LLC013",
    "LLC020",
    "LWL001",
    "LST001",
    "LST002",
    "LWB004",
    "LWB006",
    "LWB007",
    "Classic_A60_RGBW",
    "Surface_Light_TW",
    "ZLL_Light",
    DeviceType::OSRAM_PAR16_50_TW,
];

/// Tag identifying a light's model.
///
/// The tag selects vendor quirk adapters; see [`crate::quirk::QuirkRegistry`].
///
/// # Examples
///
/// ```
/// use huelink_lib::types::DeviceType;
///
/// let par16 = DeviceType::new(DeviceType::OSRAM_PAR16_50_TW);
/// assert!(par16.is_supported());
/// assert!(!DeviceType::new("XYZ").is_supported());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceType(String);

impl DeviceType {
    /// Osram Lightify PAR16 50 tunable white.
    pub const OSRAM_PAR16_50_TW: &'static str = "PAR16_50_TW";

    /// Tag used when the platform supplied none.
    pub const GENERIC: &'static str = "ZLL_Light";

    /// Creates a device-type tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the tag is one of [`SUPPORTED_DEVICE_TYPES`].
    #[must_use]
    pub fn is_supported(&self) -> bool {
        SUPPORTED_DEVICE_TYPES.contains(&self.0.as_str())
    }
}

impl Default for DeviceType {
    fn default() -> Self {
        Self::new(Self::GENERIC)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceType {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_generic_and_supported() {
        let ty = DeviceType::default();
        assert_eq!(ty.as_str(), "ZLL_Light");
        assert!(ty.is_supported());
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!(DeviceType::new("LCT001").is_supported());
        assert!(!DeviceType::new("lct001").is_supported());
    }
}
