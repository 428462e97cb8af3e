// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event stream of handler output.
//!
//! The [`EventBus`] uses tokio's broadcast channel to fan handler
//! publications out to any number of subscribers. It implements
//! [`ChannelPublisher`](crate::handler::ChannelPublisher), so applications
//! can pass it to handlers and consume channel values as a stream.
//!
//! # Examples
//!
//! ```
//! use huelink_lib::event::{EventBus, HandlerEvent};
//! use huelink_lib::status::StatusInfo;
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(HandlerEvent::StatusChanged {
//!     thing: "hue:0100:bridge:1".to_string(),
//!     status: StatusInfo::online(),
//! });
//! assert!(rx.try_recv().is_ok());
//! ```

mod event_bus;
mod handler_event;

pub use event_bus::EventBus;
pub use handler_event::HandlerEvent;
