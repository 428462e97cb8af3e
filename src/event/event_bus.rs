// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event bus for broadcasting handler events.

use tokio::sync::broadcast;

use crate::command::ChannelKind;
use crate::handler::{ChannelPublisher, ChannelValue};
use crate::status::StatusInfo;

use super::HandlerEvent;

/// Default channel capacity for the event bus.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Event bus for broadcasting handler events to multiple subscribers.
///
/// The `EventBus` uses tokio's broadcast channel to allow multiple
/// subscribers to receive the same events. Each subscriber gets their
/// own copy of each event.
///
/// `EventBus` implements [`ChannelPublisher`], so it can be handed to
/// light handlers directly.
///
/// # Capacity
///
/// The event bus has a fixed capacity (default 256). If the channel fills
/// up because a subscriber is slow, older events may be dropped for that
/// subscriber (they will receive a `RecvError::Lagged` error).
///
/// # Examples
///
/// ```
/// use huelink_lib::command::ChannelKind;
/// use huelink_lib::event::{EventBus, HandlerEvent};
/// use huelink_lib::handler::{ChannelPublisher, ChannelValue};
/// use huelink_lib::types::Percent;
///
/// let bus = EventBus::new();
/// let mut rx = bus.subscribe();
///
/// bus.state_updated(
///     "hue:0100:bridge:1",
///     ChannelKind::Brightness,
///     ChannelValue::Percent(Percent::HUNDRED),
/// );
///
/// let event = rx.try_recv().unwrap();
/// assert_eq!(event.thing(), "hue:0100:bridge:1");
/// ```
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<HandlerEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a new event bus with the specified capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of events that can be buffered
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to handler events.
    ///
    /// Returns a receiver that will receive all events published after
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<HandlerEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event to all subscribers.
    ///
    /// If there are no subscribers, the event is silently discarded.
    pub fn publish(&self, event: HandlerEvent) {
        // No subscribers is not an error
        let _ = self.sender.send(event);
    }

    /// Publishes an event and returns the number of receivers that received it.
    ///
    /// Returns 0 if there are no subscribers.
    #[must_use]
    pub fn publish_counted(&self, event: HandlerEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl ChannelPublisher for EventBus {
    fn state_updated(&self, thing: &str, channel: ChannelKind, value: ChannelValue) {
        self.publish(HandlerEvent::StateUpdated {
            thing: thing.to_string(),
            channel,
            value,
        });
    }

    fn status_updated(&self, thing: &str, status: &StatusInfo) {
        self.publish(HandlerEvent::StatusChanged {
            thing: thing.to_string(),
            status: status.clone(),
        });
    }

    fn property_updated(&self, thing: &str, name: &str, value: &str) {
        self.publish(HandlerEvent::PropertyChanged {
            thing: thing.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        });
    }
}
