// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Abstract light commands.
//!
//! The home-automation platform sends a [`DeviceCommand`] to one of a light's
//! channels. The channel determines how the command is interpreted:
//!
//! | Command | `color` | `color_temperature` | `brightness` |
//! |---------|---------|---------------------|--------------|
//! | [`DeviceCommand::Power`] | on/off | on/off | on/off |
//! | [`DeviceCommand::Percent`] | brightness | color temperature | brightness |
//! | [`DeviceCommand::Adjust`] | brightness step | color temperature step | brightness step |
//! | [`DeviceCommand::Color`] | hue/sat/bri | - | - |
//!
//! # Examples
//!
//! ```
//! use huelink_lib::command::{ChannelKind, DeviceCommand, Direction};
//!
//! let channel: ChannelKind = "hue:0210:bridge:3:brightness".parse().unwrap();
//! assert_eq!(channel, ChannelKind::Brightness);
//!
//! let cmd = DeviceCommand::Adjust(Direction::Increase);
//! assert_eq!(cmd.kind_name(), "increase/decrease");
//! ```

mod channel;

pub use channel::ChannelKind;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{HsbColor, Percent, PowerState};

/// Direction of a relative adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Step up.
    Increase,
    /// Step down.
    Decrease,
}

impl Direction {
    /// Returns `step` with the sign of this direction.
    #[must_use]
    pub fn signed(self, step: u16) -> i32 {
        match self {
            Self::Increase => i32::from(step),
            Self::Decrease => -i32::from(step),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increase => f.write_str("INCREASE"),
            Self::Decrease => f.write_str("DECREASE"),
        }
    }
}

/// A command received from the platform for one light channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceCommand {
    /// Switch the light on or off.
    Power(PowerState),
    /// Set the channel to an absolute percentage.
    Percent(Percent),
    /// Step the channel's current value up or down.
    Adjust(Direction),
    /// Set hue, saturation and brightness.
    Color(HsbColor),
}

impl DeviceCommand {
    /// Plain power-on command.
    pub const ON: Self = Self::Power(PowerState::On);

    /// Plain power-off command.
    pub const OFF: Self = Self::Power(PowerState::Off);

    /// Short name of the command kind, used in logs and errors.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Power(_) => "on/off",
            Self::Percent(_) => "percent",
            Self::Adjust(_) => "increase/decrease",
            Self::Color(_) => "color",
        }
    }

    /// Returns the power state if this is a plain on/off command.
    #[must_use]
    pub const fn as_power(&self) -> Option<PowerState> {
        match self {
            Self::Power(state) => Some(*state),
            _ => None,
        }
    }
}

impl From<PowerState> for DeviceCommand {
    fn from(state: PowerState) -> Self {
        Self::Power(state)
    }
}

impl From<Percent> for DeviceCommand {
    fn from(percent: Percent) -> Self {
        Self::Percent(percent)
    }
}

impl From<Direction> for DeviceCommand {
    fn from(direction: Direction) -> Self {
        Self::Adjust(direction)
    }
}

impl From<HsbColor> for DeviceCommand {
    fn from(color: HsbColor) -> Self {
        Self::Color(color)
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(state) => write!(f, "{state}"),
            Self::Percent(percent) => write!(f, "{percent}"),
            Self::Adjust(direction) => write!(f, "{direction}"),
            Self::Color(color) => write!(f, "{color}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_signed() {
        assert_eq!(Direction::Increase.signed(30), 30);
        assert_eq!(Direction::Decrease.signed(30), -30);
    }

    #[test]
    fn as_power_only_for_power_commands() {
        assert_eq!(DeviceCommand::ON.as_power(), Some(PowerState::On));
        assert_eq!(DeviceCommand::Percent(Percent::HUNDRED).as_power(), None);
    }

    #[test]
    fn conversions_into_command() {
        assert_eq!(
            DeviceCommand::from(PowerState::Off),
            DeviceCommand::OFF
        );
        assert_eq!(
            DeviceCommand::from(Direction::Decrease),
            DeviceCommand::Adjust(Direction::Decrease)
        );
    }

    #[test]
    fn display() {
        assert_eq!(DeviceCommand::ON.to_string(), "ON");
        assert_eq!(
            DeviceCommand::Percent(Percent::new(40).unwrap()).to_string(),
            "40%"
        );
        assert_eq!(
            DeviceCommand::Adjust(Direction::Increase).to_string(),
            "INCREASE"
        );
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(DeviceCommand::Adjust(Direction::Increase)).unwrap();
        assert_eq!(json, serde_json::json!({ "Adjust": "INCREASE" }));
    }
}
