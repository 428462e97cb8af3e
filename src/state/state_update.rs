// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State update requests submitted to the bridge.
//!
//! A [`StateUpdate`] only carries the fields it wants to change. Unset fields
//! are omitted when serialized, leaving the light's current values alone.
//!
//! # Examples
//!
//! ```
//! use huelink_lib::state::StateUpdate;
//! use huelink_lib::types::Brightness;
//!
//! let update = StateUpdate::new()
//!     .turn_on()
//!     .with_brightness(Brightness::new(127).unwrap());
//!
//! assert_eq!(
//!     serde_json::to_value(&update).unwrap(),
//!     serde_json::json!({ "on": true, "bri": 127 })
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Brightness, ColorTemperature};

/// Device-specific payload for a light state change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bri: Option<Brightness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ct: Option<ColorTemperature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sat: Option<u8>,
    #[serde(rename = "transitiontime", skip_serializing_if = "Option::is_none")]
    transition_time: Option<u16>,
}

impl StateUpdate {
    /// Maximum raw saturation.
    pub const MAX_SATURATION: u8 = 254;

    /// Creates an empty update.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            on: None,
            bri: None,
            ct: None,
            hue: None,
            sat: None,
            transition_time: None,
        }
    }

    /// Sets the power flag.
    #[must_use]
    pub const fn with_power(mut self, on: bool) -> Self {
        self.on = Some(on);
        self
    }

    /// Switches the light on.
    #[must_use]
    pub const fn turn_on(self) -> Self {
        self.with_power(true)
    }

    /// Switches the light off.
    #[must_use]
    pub const fn turn_off(self) -> Self {
        self.with_power(false)
    }

    /// Sets the raw brightness.
    #[must_use]
    pub const fn with_brightness(mut self, bri: Brightness) -> Self {
        self.bri = Some(bri);
        self
    }

    /// Sets the color temperature.
    #[must_use]
    pub const fn with_color_temperature(mut self, ct: ColorTemperature) -> Self {
        self.ct = Some(ct);
        self
    }

    /// Sets the raw hue (0-65535).
    #[must_use]
    pub const fn with_hue(mut self, hue: u16) -> Self {
        self.hue = Some(hue);
        self
    }

    /// Sets the raw saturation, clamped to 254.
    #[must_use]
    pub const fn with_saturation(mut self, sat: u8) -> Self {
        self.sat = Some(if sat > Self::MAX_SATURATION {
            Self::MAX_SATURATION
        } else {
            sat
        });
        self
    }

    /// Sets the transition time in multiples of 100 ms.
    #[must_use]
    pub const fn with_transition_time(mut self, deciseconds: u16) -> Self {
        self.transition_time = Some(deciseconds);
        self
    }

    /// Returns the power flag, if set.
    #[must_use]
    pub const fn on(&self) -> Option<bool> {
        self.on
    }

    /// Returns the raw brightness, if set.
    #[must_use]
    pub const fn brightness(&self) -> Option<Brightness> {
        self.bri
    }

    /// Returns the color temperature, if set.
    #[must_use]
    pub const fn color_temperature(&self) -> Option<ColorTemperature> {
        self.ct
    }

    /// Returns the raw hue, if set.
    #[must_use]
    pub const fn hue(&self) -> Option<u16> {
        self.hue
    }

    /// Returns the raw saturation, if set.
    #[must_use]
    pub const fn saturation(&self) -> Option<u8> {
        self.sat
    }

    /// Returns the transition time, if set.
    #[must_use]
    pub const fn transition_time(&self) -> Option<u16> {
        self.transition_time
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.on.is_none()
            && self.bri.is_none()
            && self.ct.is_none()
            && self.hue.is_none()
            && self.sat.is_none()
            && self.transition_time.is_none()
    }

    /// Returns `true` if only the power flag is set.
    #[must_use]
    pub const fn is_power_only(&self) -> bool {
        self.on.is_some()
            && self.bri.is_none()
            && self.ct.is_none()
            && self.hue.is_none()
            && self.sat.is_none()
            && self.transition_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_serializes_to_empty_object() {
        let update = StateUpdate::new();
        assert!(update.is_empty());
        assert_eq!(serde_json::to_string(&update).unwrap(), "{}");
    }

    #[test]
    fn transition_time_uses_bridge_field_name() {
        let update = StateUpdate::new().turn_off().with_transition_time(0);
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            serde_json::json!({ "on": false, "transitiontime": 0 })
        );
    }

    #[test]
    fn color_fields() {
        let update = StateUpdate::new()
            .with_hue(25500)
            .with_saturation(255)
            .with_color_temperature(ColorTemperature::WARMEST);
        assert_eq!(update.saturation(), Some(254));
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            serde_json::json!({ "ct": 500, "hue": 25500, "sat": 254 })
        );
    }

    #[test]
    fn power_only() {
        assert!(StateUpdate::new().turn_on().is_power_only());
        assert!(
            !StateUpdate::new()
                .turn_on()
                .with_brightness(Brightness::MAX)
                .is_power_only()
        );
        assert!(!StateUpdate::new().is_power_only());
    }
}
