// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge-reported light state.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{Brightness, ColorTemperature, LightId};

use super::StateUpdate;

/// Last known state of a light, as reported by the bridge.
///
/// Field names follow the bridge's JSON `state` object, so a `LightState` can
/// be deserialized directly from a bridge response. Out-of-range `bri` and
/// `ct` values are clamped rather than rejected.
///
/// # Examples
///
/// ```
/// use huelink_lib::state::LightState;
///
/// let state: LightState = serde_json::from_value(serde_json::json!({
///     "on": true,
///     "bri": 144,
///     "ct": 467,
///     "reachable": true
/// }))
/// .unwrap();
///
/// assert!(state.on);
/// assert_eq!(state.bri.value(), 144);
/// assert_eq!(state.ct.map(|ct| ct.value()), Some(467));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightState {
    /// Whether the light is switched on.
    #[serde(default)]
    pub on: bool,
    /// Raw brightness (0-254).
    #[serde(default, deserialize_with = "clamped_brightness")]
    pub bri: Brightness,
    /// Color temperature, absent for lights without white tuning.
    #[serde(
        default,
        deserialize_with = "clamped_color_temperature",
        skip_serializing_if = "Option::is_none"
    )]
    pub ct: Option<ColorTemperature>,
    /// Raw hue (0-65535), absent for lights without color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue: Option<u16>,
    /// Raw saturation (0-254), absent for lights without color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sat: Option<u8>,
    /// Whether the bridge can currently reach the light.
    #[serde(default = "reachable_by_default")]
    pub reachable: bool,
}

impl LightState {
    /// Creates a reachable, switched-off state with no color fields.
    #[must_use]
    pub fn new() -> Self {
        Self {
            on: false,
            bri: Brightness::MIN,
            ct: None,
            hue: None,
            sat: None,
            reachable: true,
        }
    }

    /// Applies the fields set in `update`, as the bridge would.
    ///
    /// Returns `true` if any field changed.
    pub fn apply(&mut self, update: &StateUpdate) -> bool {
        let before = self.clone();
        if let Some(on) = update.on() {
            self.on = on;
        }
        if let Some(bri) = update.brightness() {
            self.bri = bri;
        }
        if let Some(ct) = update.color_temperature() {
            self.ct = Some(ct);
        }
        if let Some(hue) = update.hue() {
            self.hue = Some(hue);
        }
        if let Some(sat) = update.saturation() {
            self.sat = Some(sat);
        }
        *self != before
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time report of a light from the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightSnapshot {
    /// The light's bridge identifier.
    pub id: LightId,
    /// User-assigned name.
    pub name: Option<String>,
    /// Model identifier (e.g. `LCT001`).
    pub model_id: Option<String>,
    /// Firmware version.
    pub software_version: Option<String>,
    /// Current state.
    pub state: LightState,
}

/// Shape of a light object in a bridge response. The id is the object's key
/// in the enclosing map, so it is not part of the body.
#[derive(Deserialize)]
struct RawLight {
    #[serde(default)]
    state: LightState,
    name: Option<String>,
    #[serde(rename = "modelid")]
    model_id: Option<String>,
    #[serde(rename = "swversion")]
    software_version: Option<String>,
}

impl LightSnapshot {
    /// Creates a snapshot with only an id and a state.
    #[must_use]
    pub fn new(id: LightId, state: LightState) -> Self {
        Self {
            id,
            name: None,
            model_id: None,
            software_version: None,
            state,
        }
    }

    /// Sets the firmware version.
    #[must_use]
    pub fn with_software_version(mut self, version: impl Into<String>) -> Self {
        self.software_version = Some(version.into());
        self
    }

    /// Decodes a light object from a bridge response.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a light object.
    ///
    /// # Examples
    ///
    /// ```
    /// use huelink_lib::state::LightSnapshot;
    /// use huelink_lib::types::LightId;
    ///
    /// let body = serde_json::json!({
    ///     "state": { "on": false, "bri": 200, "reachable": false },
    ///     "name": "Hallway",
    ///     "modelid": "LWB004",
    ///     "swversion": "66012040"
    /// });
    ///
    /// let light = LightSnapshot::from_json(LightId::new("5").unwrap(), body).unwrap();
    /// assert_eq!(light.software_version.as_deref(), Some("66012040"));
    /// assert!(!light.state.reachable);
    /// ```
    pub fn from_json(id: LightId, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let raw: RawLight = serde_json::from_value(value)?;
        Ok(Self {
            id,
            name: raw.name,
            model_id: raw.model_id,
            software_version: raw.software_version,
            state: raw.state,
        })
    }
}

fn reachable_by_default() -> bool {
    true
}

fn clamped_brightness<'de, D>(deserializer: D) -> Result<Brightness, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i32::deserialize(deserializer)?;
    Ok(Brightness::clamped(raw))
}

fn clamped_color_temperature<'de, D>(deserializer: D) -> Result<Option<ColorTemperature>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i32>::deserialize(deserializer)?;
    Ok(raw.map(ColorTemperature::clamped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_state() {
        let state: LightState = serde_json::from_value(serde_json::json!({
            "on": true,
            "bri": 254,
            "hue": 46920,
            "sat": 254,
            "ct": 153,
            "alert": "none",
            "effect": "none",
            "colormode": "hs",
            "reachable": true
        }))
        .unwrap();

        assert!(state.on);
        assert_eq!(state.bri, Brightness::MAX);
        assert_eq!(state.hue, Some(46920));
        assert_eq!(state.sat, Some(254));
        assert_eq!(state.ct, Some(ColorTemperature::COOLEST));
    }

    #[test]
    fn deserialize_clamps_out_of_range_values() {
        let state: LightState = serde_json::from_value(serde_json::json!({
            "on": true,
            "bri": 255,
            "ct": 0
        }))
        .unwrap();

        assert_eq!(state.bri, Brightness::MAX);
        assert_eq!(state.ct, Some(ColorTemperature::COOLEST));
        assert!(state.reachable);
    }

    #[test]
    fn deserialize_missing_fields() {
        let state: LightState = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(state, LightState::new());
    }

    #[test]
    fn apply_update() {
        let mut state = LightState::new();
        let update = StateUpdate::new()
            .turn_on()
            .with_brightness(Brightness::new(100).unwrap());

        assert!(state.apply(&update));
        assert!(state.on);
        assert_eq!(state.bri.value(), 100);
        assert_eq!(state.ct, None);

        assert!(!state.apply(&update));
    }

    #[test]
    fn snapshot_from_json_without_state() {
        let light = LightSnapshot::from_json(
            LightId::new("9").unwrap(),
            serde_json::json!({ "name": "Desk" }),
        )
        .unwrap();
        assert_eq!(light.name.as_deref(), Some("Desk"));
        assert_eq!(light.state, LightState::new());
    }
}
