// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light handler configuration.

use serde::{Deserialize, Serialize};

use crate::converter::AdjustmentSteps;
use crate::error::ConfigError;
use crate::types::{DeviceType, LightId};

/// Configuration of one light handler.
///
/// Deserializes from the platform's configuration map:
///
/// ```
/// use huelink_lib::handler::HandlerConfig;
///
/// let config = HandlerConfig::from_json(serde_json::json!({
///     "lightId": "3",
///     "deviceType": "PAR16_50_TW",
///     "steps": { "brightness": 25 }
/// }))
/// .unwrap();
///
/// assert_eq!(config.light_id.unwrap().as_str(), "3");
/// assert_eq!(config.steps.brightness, 25);
/// assert_eq!(config.steps.color_temperature, 30);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerConfig {
    /// The bridge's identifier of the light. Required to initialize.
    #[serde(default)]
    pub light_id: Option<LightId>,
    /// Model tag used to select vendor workarounds.
    #[serde(default)]
    pub device_type: DeviceType,
    /// Step sizes for relative adjustments.
    #[serde(default)]
    pub steps: AdjustmentSteps,
}

impl HandlerConfig {
    /// Creates a configuration for a light with default device type and steps.
    #[must_use]
    pub fn new(light_id: LightId) -> Self {
        Self {
            light_id: Some(light_id),
            ..Self::default()
        }
    }

    /// Sets the device type.
    #[must_use]
    pub fn with_device_type(mut self, device_type: impl Into<DeviceType>) -> Self {
        self.device_type = device_type.into();
        self
    }

    /// Sets the adjustment steps.
    #[must_use]
    pub fn with_steps(mut self, steps: AdjustmentSteps) -> Self {
        self.steps = steps;
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the value does not match the expected
    /// shape, including an empty `lightId`.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Returns the configured light id.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingLightId` if no light id is configured.
    pub fn require_light_id(&self) -> Result<&LightId, ConfigError> {
        self.light_id.as_ref().ok_or(ConfigError::MissingLightId)
    }
}
