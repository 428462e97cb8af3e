// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light channel kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// An addressable capability of a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// Full HSB color.
    Color,
    /// White color temperature.
    ColorTemperature,
    /// Brightness only.
    Brightness,
}

impl ChannelKind {
    /// All channel kinds, in publication order.
    pub const ALL: [Self; 3] = [Self::Color, Self::ColorTemperature, Self::Brightness];

    /// Returns the channel id suffix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::ColorTemperature => "color_temperature",
            Self::Brightness => "brightness",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelKind {
    type Err = ValueError;

    /// Parses either a bare channel id (`"brightness"`) or a full channel
    /// UID whose last `:`-separated segment is the channel id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.rsplit(':').next().unwrap_or(s);
        match id {
            "color" => Ok(Self::Color),
            "color_temperature" => Ok(Self::ColorTemperature),
            "brightness" => Ok(Self::Brightness),
            _ => Err(ValueError::UnknownChannel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_ids() {
        for kind in ChannelKind::ALL {
            assert_eq!(kind.as_str().parse::<ChannelKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parse_full_uid() {
        let kind: ChannelKind = "hue:LCT001:0017880a:1:color_temperature".parse().unwrap();
        assert_eq!(kind, ChannelKind::ColorTemperature);
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(
            "hue:LCT001:0017880a:1:alert".parse::<ChannelKind>(),
            Err(ValueError::UnknownChannel(_))
        ));
    }
}
