// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translation between abstract channel values and bridge state.
//!
//! Everything here is a pure function. The outbound direction turns a
//! [`DeviceCommand`] into a [`StateUpdate`]; the inbound direction turns a
//! reported [`LightState`] into channel values.
//!
//! # Scales
//!
//! | Quantity | Channel | Bridge |
//! |----------|---------|--------|
//! | Brightness | 0-100 % | 0-254 |
//! | Color temperature | 0-100 % | 153-500 mireds |
//! | Hue | 0-360 ° | 0-65535 |
//! | Saturation | 0-100 % | 0-254 |
//!
//! # Examples
//!
//! ```
//! use huelink_lib::command::{ChannelKind, DeviceCommand, Direction};
//! use huelink_lib::converter::{self, AdjustmentSteps, CurrentValues};
//! use huelink_lib::types::Brightness;
//!
//! let current = CurrentValues {
//!     brightness: Some(Brightness::new(100).unwrap()),
//!     ..CurrentValues::default()
//! };
//!
//! let update = converter::convert(
//!     ChannelKind::Brightness,
//!     &DeviceCommand::Adjust(Direction::Increase),
//!     &current,
//!     AdjustmentSteps::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(update.brightness().map(|b| b.value()), Some(130));
//! ```

use serde::{Deserialize, Serialize};

use crate::command::{ChannelKind, DeviceCommand, Direction};
use crate::error::ConversionError;
use crate::state::{LightState, StateUpdate};
use crate::types::{Brightness, ColorTemperature, HsbColor, Percent, PowerState};

/// Default brightness step for relative commands, in raw units.
pub const DIM_STEP: u16 = 30;

/// Default color temperature step for relative commands, in mireds.
pub const COLOR_TEMPERATURE_STEP: u16 = 30;

const MAX_RAW_HUE: u32 = 65_535;

/// Step sizes used for relative adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdjustmentSteps {
    /// Brightness step in raw units (0-254 scale).
    pub brightness: u16,
    /// Color temperature step in mireds.
    pub color_temperature: u16,
}

impl Default for AdjustmentSteps {
    fn default() -> Self {
        Self {
            brightness: DIM_STEP,
            color_temperature: COLOR_TEMPERATURE_STEP,
        }
    }
}

/// Values a command may be resolved against.
///
/// The handler fills these from its pending command memory first and the
/// bridge snapshot second. A relative command whose value is `None` cannot be
/// converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrentValues {
    /// Current brightness; 0 when the light is off.
    pub brightness: Option<Brightness>,
    /// Current color temperature.
    pub color_temperature: Option<ColorTemperature>,
    /// Whether the light is currently on.
    pub on: Option<bool>,
}

/// Converts a command sent to `channel` into a state update.
///
/// # Errors
///
/// Returns [`ConversionError::Inapplicable`] for a color command on a
/// brightness or color temperature channel, and
/// [`ConversionError::NoCurrentValue`] for a relative command whose current
/// value is unknown.
pub fn convert(
    channel: ChannelKind,
    command: &DeviceCommand,
    current: &CurrentValues,
    steps: AdjustmentSteps,
) -> Result<StateUpdate, ConversionError> {
    match (channel, command) {
        (_, DeviceCommand::Power(state)) => Ok(to_on_off(*state)),

        (ChannelKind::ColorTemperature, DeviceCommand::Percent(percent)) => {
            Ok(to_color_temperature(*percent))
        }
        (ChannelKind::Color | ChannelKind::Brightness, DeviceCommand::Percent(percent)) => {
            Ok(to_brightness(*percent))
        }

        (ChannelKind::ColorTemperature, DeviceCommand::Adjust(direction)) => {
            let ct = current
                .color_temperature
                .ok_or(ConversionError::NoCurrentValue { channel })?;
            let adjusted = adjusted_color_temperature(*direction, ct, steps.color_temperature);
            Ok(StateUpdate::new().with_color_temperature(adjusted))
        }
        (ChannelKind::Color | ChannelKind::Brightness, DeviceCommand::Adjust(direction)) => {
            let bri = current
                .brightness
                .ok_or(ConversionError::NoCurrentValue { channel })?;
            let adjusted = adjusted_brightness(*direction, bri, steps.brightness);
            Ok(brightness_change(bri, adjusted))
        }

        (ChannelKind::Color, DeviceCommand::Color(color)) => Ok(to_color(*color, current.on)),
        (ChannelKind::ColorTemperature | ChannelKind::Brightness, DeviceCommand::Color(_)) => {
            Err(ConversionError::Inapplicable {
                channel,
                command: command.kind_name(),
            })
        }
    }
}

/// Pure on/off update.
#[must_use]
pub fn to_on_off(state: PowerState) -> StateUpdate {
    StateUpdate::new().with_power(state.is_on())
}

/// Absolute brightness. 0% switches the light off without touching `bri`.
#[must_use]
pub fn to_brightness(percent: Percent) -> StateUpdate {
    if percent.is_zero() {
        return StateUpdate::new().turn_off();
    }
    StateUpdate::new()
        .turn_on()
        .with_brightness(percent_to_brightness(percent))
}

/// Absolute color temperature.
#[must_use]
pub fn to_color_temperature(percent: Percent) -> StateUpdate {
    StateUpdate::new().with_color_temperature(percent_to_color_temperature(percent))
}

/// Color update. Zero brightness switches the light off instead.
///
/// `current_on` set to `Some(false)` adds an explicit power-on, since some
/// lights ignore color writes while off.
#[must_use]
pub fn to_color(color: HsbColor, current_on: Option<bool>) -> StateUpdate {
    if color.brightness().is_zero() {
        return StateUpdate::new().turn_off();
    }
    let update = StateUpdate::new()
        .with_hue(degrees_to_raw_hue(color.hue()))
        .with_saturation(percent_to_raw_saturation(color.saturation()))
        .with_brightness(percent_to_brightness(color.brightness()));
    if current_on == Some(false) {
        update.turn_on()
    } else {
        update
    }
}

/// Update moving brightness from `current` to `new`.
///
/// Reaching 0 only switches the light off. Leaving 0 also switches it on.
#[must_use]
pub fn brightness_change(current: Brightness, new: Brightness) -> StateUpdate {
    if new.is_zero() {
        return StateUpdate::new().turn_off();
    }
    let update = StateUpdate::new().with_brightness(new);
    if current.is_zero() {
        update.turn_on()
    } else {
        update
    }
}

/// Steps brightness, clamped to [0, 254].
#[must_use]
pub fn adjusted_brightness(direction: Direction, current: Brightness, step: u16) -> Brightness {
    Brightness::clamped(i32::from(current.value()) + direction.signed(step))
}

/// Steps color temperature, clamped to [153, 500].
#[must_use]
pub fn adjusted_color_temperature(
    direction: Direction,
    current: ColorTemperature,
    step: u16,
) -> ColorTemperature {
    ColorTemperature::clamped(i32::from(current.value()) + direction.signed(step))
}

/// Scales a percentage onto the raw brightness range.
#[must_use]
pub fn percent_to_brightness(percent: Percent) -> Brightness {
    let max = i32::from(Brightness::MAX.value());
    Brightness::clamped((i32::from(percent.value()) * max + 50) / 100)
}

/// Scales a percentage onto the mired range.
#[must_use]
pub fn percent_to_color_temperature(percent: Percent) -> ColorTemperature {
    let span = i32::from(ColorTemperature::MAX - ColorTemperature::MIN);
    let offset = (i32::from(percent.value()) * span + 50) / 100;
    ColorTemperature::clamped(i32::from(ColorTemperature::MIN) + offset)
}

fn degrees_to_raw_hue(degrees: u16) -> u16 {
    let raw = (u32::from(degrees) * MAX_RAW_HUE + 180) / u32::from(HsbColor::MAX_HUE);
    u16::try_from(raw).unwrap_or(u16::MAX)
}

fn percent_to_raw_saturation(percent: Percent) -> u8 {
    let raw = (u32::from(percent.value()) * u32::from(StateUpdate::MAX_SATURATION) + 50) / 100;
    u8::try_from(raw).unwrap_or(StateUpdate::MAX_SATURATION)
}

fn raw_to_percent(raw: u32, max: u32) -> Percent {
    let percent = (raw.min(max) * 100 + max / 2) / max;
    Percent::clamped(u8::try_from(percent).unwrap_or(100))
}

/// Reported brightness as a percentage, ignoring the power flag.
#[must_use]
pub fn to_brightness_percent(state: &LightState) -> Percent {
    raw_to_percent(
        u32::from(state.bri.value()),
        u32::from(Brightness::MAX.value()),
    )
}

/// Reported color temperature as a percentage, `None` for lights without one.
#[must_use]
pub fn to_color_temperature_percent(state: &LightState) -> Option<Percent> {
    let span = u32::from(ColorTemperature::MAX - ColorTemperature::MIN);
    state
        .ct
        .map(|ct| raw_to_percent(u32::from(ct.value() - ColorTemperature::MIN), span))
}

/// Reported color as HSB, ignoring the power flag.
///
/// Lights without color fields report hue and saturation 0.
#[must_use]
pub fn to_hsb(state: &LightState) -> HsbColor {
    let raw_hue = u32::from(state.hue.unwrap_or(0));
    let hue = (raw_hue * u32::from(HsbColor::MAX_HUE) + MAX_RAW_HUE / 2) / MAX_RAW_HUE;
    let saturation = raw_to_percent(
        u32::from(state.sat.unwrap_or(0)),
        u32::from(StateUpdate::MAX_SATURATION),
    );
    HsbColor::clamped(
        u16::try_from(hue).unwrap_or(HsbColor::MAX_HUE),
        saturation,
        to_brightness_percent(state),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent(value: u8) -> Percent {
        Percent::new(value).unwrap()
    }

    fn bri(value: u8) -> Brightness {
        Brightness::new(value).unwrap()
    }

    fn ct(value: u16) -> ColorTemperature {
        ColorTemperature::new(value).unwrap()
    }

    fn hsb(hue: u16, sat: u8, bri: u8) -> HsbColor {
        HsbColor::new(hue, percent(sat), percent(bri)).unwrap()
    }

    fn run(channel: ChannelKind, command: DeviceCommand, current: CurrentValues) -> StateUpdate {
        convert(channel, &command, &current, AdjustmentSteps::default()).unwrap()
    }

    #[test]
    fn brightness_scale_is_monotonic_and_in_range() {
        let mut previous = None;
        for p in 0..=100 {
            let value = percent_to_brightness(percent(p));
            assert!(value <= Brightness::MAX);
            if let Some(prev) = previous {
                assert!(value >= prev, "not monotonic at {p}%");
            }
            previous = Some(value);
        }
        assert_eq!(percent_to_brightness(Percent::HUNDRED), Brightness::MAX);
        assert_eq!(percent_to_brightness(percent(50)).value(), 127);
    }

    #[test]
    fn color_temperature_scale_is_monotonic_and_in_range() {
        let mut previous = ColorTemperature::COOLEST;
        for p in 0..=100 {
            let value = percent_to_color_temperature(percent(p));
            assert!(value >= previous, "not monotonic at {p}%");
            assert!((ColorTemperature::MIN..=ColorTemperature::MAX).contains(&value.value()));
            previous = value;
        }
        assert_eq!(
            percent_to_color_temperature(Percent::ZERO),
            ColorTemperature::COOLEST
        );
        assert_eq!(
            percent_to_color_temperature(Percent::HUNDRED),
            ColorTemperature::WARMEST
        );
    }

    #[test]
    fn zero_percent_brightness_switches_off_without_brightness() {
        for channel in [ChannelKind::Brightness, ChannelKind::Color] {
            let update = run(
                channel,
                DeviceCommand::Percent(Percent::ZERO),
                CurrentValues::default(),
            );
            assert_eq!(update, StateUpdate::new().turn_off());
            assert_eq!(update.brightness(), None);
        }
    }

    #[test]
    fn nonzero_percent_brightness_switches_on() {
        let update = run(
            ChannelKind::Brightness,
            DeviceCommand::Percent(percent(1)),
            CurrentValues::default(),
        );
        assert_eq!(update.on(), Some(true));
        assert!(update.brightness().is_some_and(|b| !b.is_zero()));
    }

    #[test]
    fn percent_on_color_temperature_channel_sets_ct_only() {
        let update = run(
            ChannelKind::ColorTemperature,
            DeviceCommand::Percent(Percent::HUNDRED),
            CurrentValues::default(),
        );
        assert_eq!(
            update,
            StateUpdate::new().with_color_temperature(ColorTemperature::WARMEST)
        );
    }

    #[test]
    fn power_commands_are_pure_on_off_on_every_channel() {
        for channel in ChannelKind::ALL {
            assert_eq!(
                run(channel, DeviceCommand::ON, CurrentValues::default()),
                StateUpdate::new().turn_on()
            );
            assert_eq!(
                run(channel, DeviceCommand::OFF, CurrentValues::default()),
                StateUpdate::new().turn_off()
            );
        }
    }

    #[test]
    fn relative_without_current_value_is_dropped() {
        for channel in ChannelKind::ALL {
            let result = convert(
                channel,
                &DeviceCommand::Adjust(Direction::Increase),
                &CurrentValues::default(),
                AdjustmentSteps::default(),
            );
            assert_eq!(result, Err(ConversionError::NoCurrentValue { channel }));
        }
    }

    #[test]
    fn repeated_increases_never_exceed_max() {
        let mut value = bri(200);
        for _ in 0..10 {
            value = adjusted_brightness(Direction::Increase, value, DIM_STEP);
            assert!(value <= Brightness::MAX);
        }
        assert_eq!(value, Brightness::MAX);

        let mut temp = ct(480);
        for _ in 0..10 {
            temp = adjusted_color_temperature(Direction::Increase, temp, COLOR_TEMPERATURE_STEP);
        }
        assert_eq!(temp, ColorTemperature::WARMEST);
    }

    #[test]
    fn repeated_decreases_never_go_below_min() {
        let mut value = bri(40);
        for _ in 0..10 {
            value = adjusted_brightness(Direction::Decrease, value, DIM_STEP);
        }
        assert_eq!(value, Brightness::MIN);

        let mut temp = ct(170);
        for _ in 0..10 {
            temp = adjusted_color_temperature(Direction::Decrease, temp, COLOR_TEMPERATURE_STEP);
        }
        assert_eq!(temp, ColorTemperature::COOLEST);
    }

    #[test]
    fn relative_color_temperature_uses_configured_step() {
        let current = CurrentValues {
            color_temperature: Some(ct(300)),
            ..CurrentValues::default()
        };
        let steps = AdjustmentSteps {
            brightness: DIM_STEP,
            color_temperature: 50,
        };
        let update = convert(
            ChannelKind::ColorTemperature,
            &DeviceCommand::Adjust(Direction::Decrease),
            &current,
            steps,
        )
        .unwrap();
        assert_eq!(update, StateUpdate::new().with_color_temperature(ct(250)));
    }

    #[test]
    fn brightness_from_zero_switches_on() {
        let update = brightness_change(Brightness::MIN, bri(30));
        assert_eq!(update, StateUpdate::new().turn_on().with_brightness(bri(30)));
    }

    #[test]
    fn brightness_to_zero_only_switches_off() {
        let update = brightness_change(bri(20), Brightness::MIN);
        assert_eq!(update, StateUpdate::new().turn_off());
    }

    #[test]
    fn brightness_between_nonzero_values_sets_brightness_only() {
        let update = brightness_change(bri(100), bri(130));
        assert_eq!(update, StateUpdate::new().with_brightness(bri(130)));
    }

    #[test]
    fn relative_decrease_to_zero_switches_off() {
        let current = CurrentValues {
            brightness: Some(bri(20)),
            ..CurrentValues::default()
        };
        let update = run(
            ChannelKind::Color,
            DeviceCommand::Adjust(Direction::Decrease),
            current,
        );
        assert_eq!(update, StateUpdate::new().turn_off());
    }

    #[test]
    fn color_with_zero_brightness_switches_off_regardless_of_hue() {
        for (hue, sat) in [(0, 0), (120, 100), (359, 50)] {
            let update = run(
                ChannelKind::Color,
                DeviceCommand::Color(hsb(hue, sat, 0)),
                CurrentValues::default(),
            );
            assert_eq!(update, StateUpdate::new().turn_off());
            assert_eq!(update.hue(), None);
            assert_eq!(update.saturation(), None);
        }
    }

    #[test]
    fn color_scales_to_raw_fields() {
        let update = run(
            ChannelKind::Color,
            DeviceCommand::Color(hsb(180, 100, 100)),
            CurrentValues::default(),
        );
        assert_eq!(update.hue(), Some(32768));
        assert_eq!(update.saturation(), Some(254));
        assert_eq!(update.brightness(), Some(Brightness::MAX));
        assert_eq!(update.on(), None);
    }

    #[test]
    fn color_switches_on_a_light_known_to_be_off() {
        let current = CurrentValues {
            on: Some(false),
            ..CurrentValues::default()
        };
        let update = run(
            ChannelKind::Color,
            DeviceCommand::Color(hsb(0, 100, 50)),
            current,
        );
        assert_eq!(update.on(), Some(true));
    }

    #[test]
    fn color_on_other_channels_is_inapplicable() {
        for channel in [ChannelKind::Brightness, ChannelKind::ColorTemperature] {
            let result = convert(
                channel,
                &DeviceCommand::Color(hsb(0, 100, 100)),
                &CurrentValues::default(),
                AdjustmentSteps::default(),
            );
            assert!(matches!(
                result,
                Err(ConversionError::Inapplicable { command: "color", .. })
            ));
        }
    }

    #[test]
    fn inbound_conversions() {
        let state = LightState {
            on: true,
            bri: Brightness::MAX,
            ct: Some(ColorTemperature::WARMEST),
            hue: Some(65535),
            sat: Some(127),
            reachable: true,
        };
        assert_eq!(to_brightness_percent(&state), Percent::HUNDRED);
        assert_eq!(to_color_temperature_percent(&state), Some(Percent::HUNDRED));

        let color = to_hsb(&state);
        assert_eq!(color.hue(), 360);
        assert_eq!(color.saturation().value(), 50);
        assert_eq!(color.brightness(), Percent::HUNDRED);
    }

    #[test]
    fn inbound_without_color_fields() {
        let state = LightState::new();
        assert_eq!(to_color_temperature_percent(&state), None);
        let color = to_hsb(&state);
        assert_eq!(color.hue(), 0);
        assert!(color.saturation().is_zero());
    }

    #[test]
    fn percent_round_trips_through_bridge_scale() {
        for p in [0, 25, 50, 75, 100] {
            let state = LightState {
                bri: percent_to_brightness(percent(p)),
                ..LightState::new()
            };
            assert_eq!(to_brightness_percent(&state).value(), p);
        }
    }
}
