// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `HueLink` Lib - light command translation for Hue bridges.
//!
//! This library sits between a home-automation platform and a Hue bridge
//! connection. It turns channel commands into bridge state updates and bridge
//! reports into channel values.
//!
//! # Features
//!
//! - **Conversion**: percent, relative and HSB commands to raw bridge scales
//! - **Vendor quirks**: per-model corrections such as the Osram PAR16 power
//!   workaround, selected by device type
//! - **Command memory**: rapid relative commands step from the last sent value
//!   rather than a stale poll
//! - **Lifecycle**: lazy, connect-once bridge resolution and listener
//!   registration per light
//! - **Event stream**: handler output as a tokio broadcast stream
//!
//! Network I/O, discovery and polling are left to a
//! [`BridgeConnection`](bridge::BridgeConnection) implementation.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use huelink_lib::bridge::{BridgeConnection, InMemoryBridge};
//! use huelink_lib::command::{DeviceCommand, Direction};
//! use huelink_lib::event::EventBus;
//! use huelink_lib::handler::{HandlerConfig, LightHandler};
//! use huelink_lib::state::{LightSnapshot, LightState};
//! use huelink_lib::types::LightId;
//!
//! let bridge = Arc::new(InMemoryBridge::new());
//! let id = LightId::new("3").unwrap();
//! bridge.add_light(LightSnapshot::new(id.clone(), LightState::new()));
//!
//! let events = EventBus::new();
//! let mut rx = events.subscribe();
//!
//! let resolved = Arc::clone(&bridge);
//! let handler = LightHandler::new(
//!     "hue:0210:bridge:3",
//!     HandlerConfig::new(id.clone()),
//!     Arc::new(move || Some(Arc::clone(&resolved) as Arc<dyn BridgeConnection>)),
//!     Arc::new(events.clone()),
//! );
//! handler.initialize();
//!
//! // The light is off: stepping up from 0 also switches it on.
//! handler.handle_command(
//!     "hue:0210:bridge:3:brightness",
//!     DeviceCommand::Adjust(Direction::Increase),
//! );
//! let (_, update) = &bridge.submitted_updates()[0];
//! assert_eq!(update.on(), Some(true));
//! assert_eq!(update.brightness().map(|b| b.value()), Some(30));
//!
//! // The next poll is published to subscribers.
//! bridge.refresh(&id);
//! assert!(rx.try_recv().is_ok());
//!
//! handler.dispose();
//! ```

pub mod bridge;
pub mod command;
pub mod converter;
pub mod error;
pub mod event;
pub mod handler;
pub mod quirk;
pub mod state;
pub mod status;
pub mod types;

pub use bridge::{BridgeConnection, BridgeResolver, InMemoryBridge, LightStatusListener};
pub use command::{ChannelKind, DeviceCommand, Direction};
pub use error::{ConfigError, ConversionError, Error, Result, ValueError};
pub use event::{EventBus, HandlerEvent};
pub use handler::{CommandOutcome, HandlerConfig, HandlerState, LightHandler};
pub use quirk::{QuirkAdapter, QuirkRegistry};
pub use state::{LightSnapshot, LightState, StateUpdate};
pub use status::{StatusDetail, StatusInfo, ThingStatus};
pub use types::{Brightness, ColorTemperature, DeviceType, HsbColor, LightId, Percent, PowerState};
