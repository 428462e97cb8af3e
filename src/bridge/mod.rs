// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Contract between light handlers and the bridge connection.
//!
//! The bridge connection owns all network traffic: polling, retries and
//! backoff live behind [`BridgeConnection`]. Handlers only read snapshots,
//! hand over updates, and receive push notifications through
//! [`LightStatusListener`].
//!
//! # Notification order
//!
//! Implementations must deliver notifications for one light in the order they
//! were observed. No order is required across different lights.
//!
//! [`InMemoryBridge`] is an in-process implementation for tests and
//! simulations.

mod listener_id;
mod memory;

pub use listener_id::ListenerId;
pub use memory::InMemoryBridge;

use std::sync::Arc;

use crate::state::{LightSnapshot, StateUpdate};
use crate::status::StatusInfo;
use crate::types::LightId;

/// Receiver of light notifications from a bridge connection.
pub trait LightStatusListener: Send + Sync {
    /// Identity used to unregister the listener.
    fn listener_id(&self) -> ListenerId;

    /// A fresh snapshot of the light was observed.
    fn on_light_state_changed(&self, light: &LightSnapshot);

    /// The light appeared on the bridge.
    fn on_light_added(&self, light: &LightSnapshot);

    /// The light disappeared from the bridge.
    fn on_light_removed(&self, light_id: &LightId);
}

/// A connection to one bridge.
///
/// All methods are non-blocking from the caller's point of view.
/// [`submit_update`](Self::submit_update) is fire-and-forget: its outcome
/// surfaces later through a state-changed notification or a status change.
pub trait BridgeConnection: Send + Sync {
    /// Current status of the bridge connection.
    fn status(&self) -> StatusInfo;

    /// Last known snapshot of a light, `None` if the bridge does not know it.
    ///
    /// Must not wait on notification delivery: handlers call it while
    /// holding the lock their notification callbacks take.
    fn light(&self, light_id: &LightId) -> Option<LightSnapshot>;

    /// Hands an update over for delivery to the light.
    fn submit_update(&self, light_id: &LightId, update: StateUpdate);

    /// Subscribes `listener` to notifications for `light_id`.
    fn register_listener(&self, light_id: &LightId, listener: Arc<dyn LightStatusListener>);

    /// Removes a subscription. Unknown listeners are ignored.
    fn unregister_listener(&self, light_id: &LightId, listener: ListenerId);
}

/// Looks up the bridge connection a handler belongs to.
///
/// Returning `None` means the bridge is not available yet, e.g. still being
/// discovered or reconnecting.
pub trait BridgeResolver: Send + Sync {
    /// Resolves the bridge connection.
    fn resolve(&self) -> Option<Arc<dyn BridgeConnection>>;
}

impl<F> BridgeResolver for F
where
    F: Fn() -> Option<Arc<dyn BridgeConnection>> + Send + Sync,
{
    fn resolve(&self) -> Option<Arc<dyn BridgeConnection>> {
        self()
    }
}
