// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Events emitted by light handlers.

use serde::{Deserialize, Serialize};

use crate::command::ChannelKind;
use crate::handler::ChannelValue;
use crate::status::StatusInfo;

/// Something a light handler published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum HandlerEvent {
    /// A channel has a new value.
    StateUpdated {
        /// Thing the channel belongs to.
        thing: String,
        /// The channel.
        channel: ChannelKind,
        /// The new value.
        value: ChannelValue,
    },

    /// A thing's status changed.
    StatusChanged {
        /// The thing.
        thing: String,
        /// The new status.
        status: StatusInfo,
    },

    /// A thing property changed.
    PropertyChanged {
        /// The thing.
        thing: String,
        /// Property name.
        name: String,
        /// Property value.
        value: String,
    },
}

impl HandlerEvent {
    /// Returns the thing this event is about.
    #[must_use]
    pub fn thing(&self) -> &str {
        match self {
            Self::StateUpdated { thing, .. }
            | Self::StatusChanged { thing, .. }
            | Self::PropertyChanged { thing, .. } => thing,
        }
    }

    /// Returns `true` if this is a channel state update.
    #[must_use]
    pub fn is_state_update(&self) -> bool {
        matches!(self, Self::StateUpdated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Percent;

    #[test]
    fn thing_accessor() {
        let event = HandlerEvent::PropertyChanged {
            thing: "hue:0100:bridge:1".to_string(),
            name: "firmwareVersion".to_string(),
            value: "1.0".to_string(),
        };
        assert_eq!(event.thing(), "hue:0100:bridge:1");
        assert!(!event.is_state_update());
    }

    #[test]
    fn serializes_with_tag() {
        let event = HandlerEvent::StateUpdated {
            thing: "t".to_string(),
            channel: ChannelKind::Brightness,
            value: ChannelValue::Percent(Percent::HUNDRED),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "stateUpdated");
        assert_eq!(json["value"]["type"], "percent");
        assert_eq!(json["value"]["value"], 100);
    }
}
