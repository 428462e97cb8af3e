// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light handlers.
//!
//! A [`LightHandler`] owns everything stateful about one light:
//!
//! - its lifecycle ([`HandlerState`]) and last published status,
//! - the cached bridge connection, resolved once through a
//!   [`BridgeResolver`](crate::bridge::BridgeResolver),
//! - the [`PendingCommandMemory`] used to resolve relative commands,
//! - the vendor quirk adapter selected from its [`HandlerConfig`].
//!
//! Output goes to a [`ChannelPublisher`].
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --initialize--> Bound --bridge resolved--> Active
//!       ^                         ^                          |
//!       |                         +---invalidate_bridge------+
//!       +-- missing light id                                 |
//!                            Disposed <------dispose---------+
//! ```
//!
//! `dispose` is valid from every state.

mod config;
mod light_handler;
mod memory;
mod publisher;

pub use config::HandlerConfig;
pub use light_handler::{CommandOutcome, DropReason, HandlerState, LightHandler};
pub use memory::PendingCommandMemory;
pub use publisher::{ChannelPublisher, ChannelValue, PROPERTY_FIRMWARE_VERSION};
