// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound side of a light handler.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::ChannelKind;
use crate::status::StatusInfo;
use crate::types::{HsbColor, Percent};

/// Thing property carrying the light's firmware version.
pub const PROPERTY_FIRMWARE_VERSION: &str = "firmwareVersion";

/// A value published on a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum ChannelValue {
    /// Value of the color channel.
    Color(HsbColor),
    /// Value of the brightness and color temperature channels.
    Percent(Percent),
}

impl fmt::Display for ChannelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => color.fmt(f),
            Self::Percent(percent) => percent.fmt(f),
        }
    }
}

/// Receives what a handler publishes to the platform.
///
/// `thing` is the platform identity of the handler (its thing UID).
pub trait ChannelPublisher: Send + Sync {
    /// A channel has a new value.
    fn state_updated(&self, thing: &str, channel: ChannelKind, value: ChannelValue);

    /// The thing's status changed.
    fn status_updated(&self, thing: &str, status: &StatusInfo);

    /// A thing property changed.
    fn property_updated(&self, thing: &str, name: &str, value: &str);
}
