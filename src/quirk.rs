// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor-specific corrections applied to outgoing state updates.
//!
//! Some lights misbehave when driven strictly by the bridge protocol. A
//! [`QuirkAdapter`] patches a converted [`StateUpdate`] before it is
//! submitted. Adapters only add or override the fields they are about; they
//! never remove fields.
//!
//! Adapters are selected by [`DeviceType`] through a [`QuirkRegistry`]. New
//! workarounds are registered there without touching the converter or the
//! handler.
//!
//! # Examples
//!
//! ```
//! use huelink_lib::command::DeviceCommand;
//! use huelink_lib::quirk::QuirkRegistry;
//! use huelink_lib::state::StateUpdate;
//! use huelink_lib::types::DeviceType;
//!
//! let registry = QuirkRegistry::with_defaults();
//! let quirk = registry
//!     .get(&DeviceType::new(DeviceType::OSRAM_PAR16_50_TW))
//!     .unwrap();
//!
//! let update = quirk.apply(StateUpdate::new().turn_off(), &DeviceCommand::OFF);
//! assert_eq!(update.transition_time(), Some(0));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::command::DeviceCommand;
use crate::state::StateUpdate;
use crate::types::{Brightness, DeviceType, PowerState};

/// A vendor-specific post-processing step for state updates.
pub trait QuirkAdapter: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns `update` with the vendor's corrections applied.
    ///
    /// `command` is the command the update was converted from.
    fn apply(&self, update: StateUpdate, command: &DeviceCommand) -> StateUpdate;
}

/// Workaround for Osram Lightify PAR16 50 TW firmware.
///
/// - A bare power-on leaves the bulb dark, so full brightness is sent with it.
/// - Power-off fades out slowly, so the transition time is forced to 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsramPar16Quirk;

impl QuirkAdapter for OsramPar16Quirk {
    fn name(&self) -> &'static str {
        "osram-par16"
    }

    fn apply(&self, update: StateUpdate, command: &DeviceCommand) -> StateUpdate {
        match command.as_power() {
            Some(PowerState::On) => update.with_brightness(Brightness::MAX),
            Some(PowerState::Off) => update.with_transition_time(0),
            None => update,
        }
    }
}

/// Lookup table from device type to quirk adapter.
#[derive(Debug, Clone, Default)]
pub struct QuirkRegistry {
    adapters: HashMap<DeviceType, Arc<dyn QuirkAdapter>>,
}

impl QuirkRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in workarounds.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            DeviceType::new(DeviceType::OSRAM_PAR16_50_TW),
            Arc::new(OsramPar16Quirk),
        );
        registry
    }

    /// Registers an adapter for a device type, replacing any previous one.
    pub fn register(&mut self, device_type: DeviceType, adapter: Arc<dyn QuirkAdapter>) {
        self.adapters.insert(device_type, adapter);
    }

    /// Returns the adapter registered for `device_type`.
    #[must_use]
    pub fn get(&self, device_type: &DeviceType) -> Option<Arc<dyn QuirkAdapter>> {
        self.adapters.get(device_type).cloned()
    }

    /// Returns the number of registered adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Returns `true` if no adapter is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Direction;
    use crate::types::{ColorTemperature, Percent};

    #[test]
    fn power_on_forces_full_brightness() {
        let update = OsramPar16Quirk.apply(StateUpdate::new().turn_on(), &DeviceCommand::ON);
        assert_eq!(
            update,
            StateUpdate::new().turn_on().with_brightness(Brightness::MAX)
        );
    }

    #[test]
    fn power_off_forces_instant_transition() {
        let update = OsramPar16Quirk.apply(StateUpdate::new().turn_off(), &DeviceCommand::OFF);
        assert_eq!(
            update,
            StateUpdate::new().turn_off().with_transition_time(0)
        );
    }

    #[test]
    fn unrelated_fields_are_preserved() {
        let base = StateUpdate::new()
            .turn_off()
            .with_color_temperature(ColorTemperature::WARMEST);
        let update = OsramPar16Quirk.apply(base, &DeviceCommand::OFF);
        assert_eq!(update.color_temperature(), Some(ColorTemperature::WARMEST));
        assert_eq!(update.on(), Some(false));
        assert_eq!(update.brightness(), None);
    }

    #[test]
    fn non_power_commands_pass_through() {
        let base = StateUpdate::new().with_color_temperature(ColorTemperature::COOLEST);
        for command in [
            DeviceCommand::Percent(Percent::ZERO),
            DeviceCommand::Adjust(Direction::Increase),
        ] {
            assert_eq!(OsramPar16Quirk.apply(base, &command), base);
        }
    }

    #[test]
    fn registry_lookup() {
        let registry = QuirkRegistry::with_defaults();
        assert_eq!(registry.len(), 1);
        let quirk = registry
            .get(&DeviceType::new(DeviceType::OSRAM_PAR16_50_TW))
            .unwrap();
        assert_eq!(quirk.name(), "osram-par16");
        assert!(registry.get(&DeviceType::new("LCT001")).is_none());
    }

    #[derive(Debug)]
    struct SlowFade;

    impl QuirkAdapter for SlowFade {
        fn name(&self) -> &'static str {
            "slow-fade"
        }

        fn apply(&self, update: StateUpdate, _command: &DeviceCommand) -> StateUpdate {
            update.with_transition_time(20)
        }
    }

    #[test]
    fn registry_is_open_for_new_adapters() {
        let mut registry = QuirkRegistry::with_defaults();
        registry.register(DeviceType::new("LWB004"), Arc::new(SlowFade));

        let quirk = registry.get(&DeviceType::new("LWB004")).unwrap();
        let update = quirk.apply(StateUpdate::new().turn_on(), &DeviceCommand::ON);
        assert_eq!(update.transition_time(), Some(20));
        assert_eq!(registry.len(), 2);
    }
}
