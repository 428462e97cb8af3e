// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-process bridge connection.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::state::{LightSnapshot, StateUpdate};
use crate::status::StatusInfo;
use crate::types::LightId;

use super::{BridgeConnection, LightStatusListener, ListenerId};

/// A bridge connection that keeps its lights in memory.
///
/// Submitted updates are recorded and applied to the stored light state, but
/// no notification is sent for them; call [`refresh`](Self::refresh) to
/// simulate the next poll.
///
/// Listeners are invoked on the thread that triggers the notification, after
/// all internal locks have been released. Notifications are serialized, so
/// listeners observe them in call order.
///
/// # Examples
///
/// ```
/// use huelink_lib::bridge::{BridgeConnection, InMemoryBridge};
/// use huelink_lib::state::{LightSnapshot, LightState, StateUpdate};
/// use huelink_lib::types::LightId;
///
/// let bridge = InMemoryBridge::new();
/// let id = LightId::new("1").unwrap();
/// bridge.add_light(LightSnapshot::new(id.clone(), LightState::new()));
///
/// bridge.submit_update(&id, StateUpdate::new().turn_on());
/// assert!(bridge.light(&id).unwrap().state.on);
/// assert_eq!(bridge.submitted_updates().len(), 1);
/// ```
pub struct InMemoryBridge {
    lights: RwLock<HashMap<LightId, LightSnapshot>>,
    listeners: RwLock<HashMap<LightId, Vec<Arc<dyn LightStatusListener>>>>,
    submitted: Mutex<Vec<(LightId, StateUpdate)>>,
    status: RwLock<StatusInfo>,
    dispatch: Mutex<()>,
}

impl InMemoryBridge {
    /// Creates an online bridge without lights.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lights: RwLock::new(HashMap::new()),
            listeners: RwLock::new(HashMap::new()),
            submitted: Mutex::new(Vec::new()),
            status: RwLock::new(StatusInfo::online()),
            dispatch: Mutex::new(()),
        }
    }

    /// Sets the reported bridge status.
    pub fn set_status(&self, status: StatusInfo) {
        *self.status.write() = status;
    }

    /// Stores a light and notifies its listeners that it was added.
    pub fn add_light(&self, light: LightSnapshot) {
        self.lights.write().insert(light.id.clone(), light.clone());
        self.dispatch(&light.id, |listener| listener.on_light_added(&light));
    }

    /// Replaces a light's snapshot and notifies its listeners.
    pub fn update_light(&self, light: LightSnapshot) {
        self.lights.write().insert(light.id.clone(), light.clone());
        self.dispatch(&light.id, |listener| listener.on_light_state_changed(&light));
    }

    /// Re-sends the stored snapshot of a light to its listeners.
    ///
    /// Returns `false` if the light is unknown.
    pub fn refresh(&self, light_id: &LightId) -> bool {
        let Some(light) = self.lights.read().get(light_id).cloned() else {
            return false;
        };
        self.dispatch(light_id, |listener| listener.on_light_state_changed(&light));
        true
    }

    /// Removes a light and notifies its listeners.
    ///
    /// Returns the removed snapshot.
    pub fn remove_light(&self, light_id: &LightId) -> Option<LightSnapshot> {
        let removed = self.lights.write().remove(light_id);
        if removed.is_some() {
            self.dispatch(light_id, |listener| listener.on_light_removed(light_id));
        }
        removed
    }

    /// Returns all updates submitted so far, oldest first.
    #[must_use]
    pub fn submitted_updates(&self) -> Vec<(LightId, StateUpdate)> {
        self.submitted.lock().clone()
    }

    /// Returns and clears the submitted updates.
    pub fn take_submitted(&self) -> Vec<(LightId, StateUpdate)> {
        std::mem::take(&mut *self.submitted.lock())
    }

    /// Returns the number of listeners registered for a light.
    #[must_use]
    pub fn listener_count(&self, light_id: &LightId) -> usize {
        self.listeners.read().get(light_id).map_or(0, Vec::len)
    }

    fn dispatch<F>(&self, light_id: &LightId, notify: F)
    where
        F: Fn(&dyn LightStatusListener),
    {
        let _ordered = self.dispatch.lock();
        // Clone so listeners may (un)register while being notified.
        let listeners = self
            .listeners
            .read()
            .get(light_id)
            .cloned()
            .unwrap_or_default();
        for listener in &listeners {
            notify(listener.as_ref());
        }
    }
}

impl Default for InMemoryBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBridge")
            .field("lights", &self.lights.read().len())
            .field("submitted", &self.submitted.lock().len())
            .field("status", &*self.status.read())
            .finish_non_exhaustive()
    }
}

impl BridgeConnection for InMemoryBridge {
    fn status(&self) -> StatusInfo {
        self.status.read().clone()
    }

    fn light(&self, light_id: &LightId) -> Option<LightSnapshot> {
        self.lights.read().get(light_id).cloned()
    }

    fn submit_update(&self, light_id: &LightId, update: StateUpdate) {
        if let Some(light) = self.lights.write().get_mut(light_id) {
            light.state.apply(&update);
        }
        self.submitted.lock().push((light_id.clone(), update));
    }

    fn register_listener(&self, light_id: &LightId, listener: Arc<dyn LightStatusListener>) {
        self.listeners
            .write()
            .entry(light_id.clone())
            .or_default()
            .push(listener);
    }

    fn unregister_listener(&self, light_id: &LightId, listener: ListenerId) {
        let mut listeners = self.listeners.write();
        if let Some(registered) = listeners.get_mut(light_id) {
            registered.retain(|l| l.listener_id() != listener);
            if registered.is_empty() {
                listeners.remove(light_id);
            }
        }
    }
}
