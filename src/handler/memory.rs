// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Last commanded values of a light.
//!
//! The bridge reports light state by polling, so a snapshot lags behind the
//! commands sent since. Relative commands issued in quick succession would
//! otherwise all step from the same stale value. The memory holds what was
//! last sent until the next snapshot arrives.

use crate::converter::CurrentValues;
use crate::state::{LightState, StateUpdate};
use crate::types::{Brightness, ColorTemperature};

/// Values sent to a light since its last snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingCommandMemory {
    brightness: Option<Brightness>,
    color_temperature: Option<ColorTemperature>,
}

impl PendingCommandMemory {
    /// Creates an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the current values, preferring remembered values over the
    /// snapshot.
    ///
    /// The snapshot's brightness counts as 0 while the light is off.
    #[must_use]
    pub fn current_values(&self, state: &LightState) -> CurrentValues {
        let snapshot_brightness = if state.on { state.bri } else { Brightness::MIN };
        let brightness = self.brightness.unwrap_or(snapshot_brightness);

        CurrentValues {
            brightness: Some(brightness),
            color_temperature: self.color_temperature.or(state.ct),
            on: Some(match self.brightness {
                Some(bri) => !bri.is_zero(),
                None => state.on,
            }),
        }
    }

    /// Remembers the values carried by an update about to be sent.
    ///
    /// A plain power-off is remembered as brightness 0. A power-on without
    /// brightness forgets the remembered brightness, since the light resumes
    /// a level only the next snapshot will tell.
    pub fn record(&mut self, update: &StateUpdate) {
        match (update.brightness(), update.on()) {
            (Some(bri), _) => self.brightness = Some(bri),
            (None, Some(false)) => self.brightness = Some(Brightness::MIN),
            (None, Some(true)) => self.brightness = None,
            (None, None) => {}
        }
        if let Some(ct) = update.color_temperature() {
            self.color_temperature = Some(ct);
        }
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if nothing is remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brightness.is_none() && self.color_temperature.is_none()
    }

    /// Remembered brightness, if any.
    #[must_use]
    pub fn brightness(&self) -> Option<Brightness> {
        self.brightness
    }

    /// Remembered color temperature, if any.
    #[must_use]
    pub fn color_temperature(&self) -> Option<ColorTemperature> {
        self.color_temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(on: bool, bri: u8, ct: Option<u16>) -> LightState {
        LightState {
            on,
            bri: Brightness::new(bri).unwrap(),
            ct: ct.map(|ct| ColorTemperature::new(ct).unwrap()),
            ..LightState::new()
        }
    }

    #[test]
    fn empty_memory_falls_back_to_snapshot() {
        let memory = PendingCommandMemory::new();
        let current = memory.current_values(&state(true, 144, Some(467)));

        assert_eq!(current.brightness, Some(Brightness::new(144).unwrap()));
        assert_eq!(current.color_temperature.map(|ct| ct.value()), Some(467));
        assert_eq!(current.on, Some(true));
    }

    #[test]
    fn snapshot_brightness_is_zero_when_off() {
        let memory = PendingCommandMemory::new();
        let current = memory.current_values(&state(false, 200, None));

        assert_eq!(current.brightness, Some(Brightness::MIN));
        assert_eq!(current.color_temperature, None);
        assert_eq!(current.on, Some(false));
    }

    #[test]
    fn remembered_values_take_precedence() {
        let mut memory = PendingCommandMemory::new();
        memory.record(
            &StateUpdate::new()
                .with_brightness(Brightness::new(230).unwrap())
                .with_color_temperature(ColorTemperature::new(200).unwrap()),
        );

        let current = memory.current_values(&state(false, 100, Some(400)));
        assert_eq!(current.brightness, Some(Brightness::new(230).unwrap()));
        assert_eq!(current.color_temperature.map(|ct| ct.value()), Some(200));
        assert_eq!(current.on, Some(true));
    }

    #[test]
    fn power_off_is_remembered_as_zero() {
        let mut memory = PendingCommandMemory::new();
        memory.record(&StateUpdate::new().turn_off());

        let current = memory.current_values(&state(true, 254, None));
        assert_eq!(current.brightness, Some(Brightness::MIN));
        assert_eq!(current.on, Some(false));
    }

    #[test]
    fn plain_power_on_forgets_brightness() {
        let mut memory = PendingCommandMemory::new();
        memory.record(&StateUpdate::new().turn_off());
        memory.record(&StateUpdate::new().turn_on());

        assert_eq!(memory.brightness(), None);
    }

    #[test]
    fn clear() {
        let mut memory = PendingCommandMemory::new();
        memory.record(&StateUpdate::new().with_color_temperature(ColorTemperature::COOLEST));
        assert!(!memory.is_empty());

        memory.clear();
        assert!(memory.is_empty());
    }
}
