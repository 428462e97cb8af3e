// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-light handler.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace, warn};

use crate::bridge::{BridgeConnection, BridgeResolver, LightStatusListener, ListenerId};
use crate::command::{ChannelKind, DeviceCommand};
use crate::converter;
use crate::error::ConversionError;
use crate::quirk::{QuirkAdapter, QuirkRegistry};
use crate::state::{LightSnapshot, StateUpdate};
use crate::status::{StatusDetail, StatusInfo};
use crate::types::{DeviceType, LightId, Percent};

use super::config::HandlerConfig;
use super::memory::PendingCommandMemory;
use super::publisher::{ChannelPublisher, ChannelValue, PROPERTY_FIRMWARE_VERSION};

const UNREACHABLE_DESCRIPTION: &str = "Bridge reports light as not reachable";
const REMOVED_DESCRIPTION: &str = "Bridge reports light as removed";
const NO_BRIDGE_DESCRIPTION: &str = "Bridge connection is not available";
const NO_LIGHT_ID_DESCRIPTION: &str = "Light id is not configured";

/// Lifecycle of a [`LightHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerState {
    /// Created, or initialization failed on configuration.
    Uninitialized,
    /// Light id known, bridge not resolved yet.
    Bound,
    /// Bridge resolved and listener registered.
    Active,
    /// Disposed; commands are dropped.
    Disposed,
}

impl HandlerState {
    /// Returns `true` if commands are processed in this state.
    #[must_use]
    pub fn accepts_commands(self) -> bool {
        matches!(self, Self::Bound | Self::Active)
    }
}

/// Why a command produced no update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// The channel id does not name a light channel.
    UnknownChannel,
    /// The handler is not initialized or already disposed.
    NotActive,
    /// No bridge connection could be resolved.
    BridgeUnavailable,
    /// The bridge does not know the light.
    LightUnknown,
    /// The command could not be converted.
    Conversion(ConversionError),
}

/// Result of [`LightHandler::handle_command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The update was handed to the bridge.
    Submitted(StateUpdate),
    /// The command was dropped.
    Dropped(DropReason),
}

impl CommandOutcome {
    /// Returns the submitted update, if any.
    #[must_use]
    pub fn update(&self) -> Option<&StateUpdate> {
        match self {
            Self::Submitted(update) => Some(update),
            Self::Dropped(_) => None,
        }
    }

    /// Returns `true` if the command was dropped.
    #[must_use]
    pub fn is_dropped(&self) -> bool {
        matches!(self, Self::Dropped(_))
    }
}

struct Lifecycle {
    state: HandlerState,
    light_id: Option<LightId>,
    status: StatusInfo,
}

/// Adapter between one bridge light and the platform.
///
/// A handler translates platform commands into bridge updates and bridge
/// notifications into channel values. It is shared as `Arc<LightHandler>`;
/// every entry point takes `&self` and may be called from any thread.
///
/// The bridge connection is resolved on first use and cached until
/// [`dispose`](Self::dispose) or [`invalidate_bridge`](Self::invalidate_bridge).
/// While resolved, the bridge holds the handler as a listener, so
/// `dispose` must be called to release it.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use huelink_lib::bridge::{BridgeConnection, InMemoryBridge};
/// use huelink_lib::command::DeviceCommand;
/// use huelink_lib::event::EventBus;
/// use huelink_lib::handler::{HandlerConfig, HandlerState, LightHandler};
/// use huelink_lib::state::{LightSnapshot, LightState};
/// use huelink_lib::types::LightId;
///
/// let bridge = Arc::new(InMemoryBridge::new());
/// let id = LightId::new("1").unwrap();
/// bridge.add_light(LightSnapshot::new(id.clone(), LightState::new()));
///
/// let resolved = Arc::clone(&bridge);
/// let handler = LightHandler::new(
///     "hue:0100:bridge:1",
///     HandlerConfig::new(id),
///     Arc::new(move || Some(Arc::clone(&resolved) as Arc<dyn BridgeConnection>)),
///     Arc::new(EventBus::new()),
/// );
///
/// handler.initialize();
/// assert_eq!(handler.state(), HandlerState::Active);
///
/// let outcome = handler.handle_command("hue:0100:bridge:1:brightness", DeviceCommand::ON);
/// assert_eq!(outcome.update().and_then(|u| u.on()), Some(true));
///
/// handler.dispose();
/// ```
pub struct LightHandler {
    thing: String,
    config: HandlerConfig,
    listener_id: ListenerId,
    self_ref: Weak<LightHandler>,
    resolver: Arc<dyn BridgeResolver>,
    publisher: Arc<dyn ChannelPublisher>,
    quirk: Option<Arc<dyn QuirkAdapter>>,
    lifecycle: RwLock<Lifecycle>,
    bridge: Mutex<Option<Arc<dyn BridgeConnection>>>,
    memory: Mutex<PendingCommandMemory>,
    // Held from memory resolution through submission, so updates reach the
    // bridge in the order they were recorded. Notifications never take it.
    submit: Mutex<()>,
}

impl LightHandler {
    /// Creates a handler with the built-in quirk adapters.
    #[must_use]
    pub fn new(
        thing: impl Into<String>,
        config: HandlerConfig,
        resolver: Arc<dyn BridgeResolver>,
        publisher: Arc<dyn ChannelPublisher>,
    ) -> Arc<Self> {
        Self::with_quirks(
            thing,
            config,
            resolver,
            publisher,
            &QuirkRegistry::with_defaults(),
        )
    }

    /// Creates a handler selecting its quirk adapter from `quirks`.
    #[must_use]
    pub fn with_quirks(
        thing: impl Into<String>,
        config: HandlerConfig,
        resolver: Arc<dyn BridgeResolver>,
        publisher: Arc<dyn ChannelPublisher>,
        quirks: &QuirkRegistry,
    ) -> Arc<Self> {
        let quirk = quirks.get(&config.device_type);
        let thing = thing.into();
        if !config.device_type.is_supported() {
            debug!(thing = %thing, device_type = %config.device_type, "Unsupported device type");
        }
        Arc::new_cyclic(|self_ref| Self {
            thing,
            config,
            listener_id: ListenerId::new(),
            self_ref: self_ref.clone(),
            resolver,
            publisher,
            quirk,
            lifecycle: RwLock::new(Lifecycle {
                state: HandlerState::Uninitialized,
                light_id: None,
                status: StatusInfo::default(),
            }),
            bridge: Mutex::new(None),
            memory: Mutex::new(PendingCommandMemory::new()),
            submit: Mutex::new(()),
        })
    }

    /// Binds the handler to its configured light and tries to reach the
    /// bridge.
    pub fn initialize(&self) {
        debug!(thing = %self.thing, "Initializing light handler");

        let light_id = match self.config.require_light_id() {
            Ok(id) => id.clone(),
            Err(e) => {
                warn!(thing = %self.thing, error = %e, "Cannot initialize light handler");
                self.lifecycle.write().state = HandlerState::Uninitialized;
                self.set_status(StatusInfo::uninitialized(
                    StatusDetail::ConfigurationError,
                    NO_LIGHT_ID_DESCRIPTION,
                ));
                return;
            }
        };

        {
            let mut lifecycle = self.lifecycle.write();
            lifecycle.state = HandlerState::Bound;
            lifecycle.light_id = Some(light_id.clone());
        }

        match self.resolve_bridge(&light_id) {
            Some(bridge) => self.activate(&light_id, bridge.as_ref()),
            None => {
                debug!(light_id = %light_id, "Bridge not resolved during initialization");
                self.set_status(StatusInfo::offline(
                    StatusDetail::BridgeOffline,
                    NO_BRIDGE_DESCRIPTION,
                ));
            }
        }
    }

    /// Releases the bridge connection.
    ///
    /// Safe to call in any state and more than once.
    pub fn dispose(&self) {
        debug!(thing = %self.thing, "Handler disposes. Unregistering listener.");

        let light_id = {
            let mut lifecycle = self.lifecycle.write();
            lifecycle.state = HandlerState::Disposed;
            lifecycle.light_id.take()
        };
        let bridge = self.bridge.lock().take();
        if let (Some(bridge), Some(light_id)) = (bridge, light_id) {
            bridge.unregister_listener(&light_id, self.listener_id);
        }
        self.memory.lock().clear();
    }

    /// Forgets the cached bridge connection.
    ///
    /// The next command resolves the bridge again.
    pub fn invalidate_bridge(&self) {
        let Some(bridge) = self.bridge.lock().take() else {
            return;
        };

        let light_id = {
            let mut lifecycle = self.lifecycle.write();
            if lifecycle.state == HandlerState::Active {
                lifecycle.state = HandlerState::Bound;
            }
            lifecycle.light_id.clone()
        };
        if let Some(light_id) = &light_id {
            bridge.unregister_listener(light_id, self.listener_id);
        }
        self.memory.lock().clear();

        debug!(thing = %self.thing, "Bridge connection invalidated");
        self.set_status(StatusInfo::offline(
            StatusDetail::BridgeOffline,
            NO_BRIDGE_DESCRIPTION,
        ));
    }

    /// Handles a command sent to one of the light's channels.
    ///
    /// Never fails: commands that cannot be carried out are logged and
    /// reported as [`CommandOutcome::Dropped`].
    pub fn handle_command(&self, channel_id: &str, command: DeviceCommand) -> CommandOutcome {
        let channel = match channel_id.parse::<ChannelKind>() {
            Ok(channel) => channel,
            Err(e) => {
                warn!(thing = %self.thing, error = %e, "Command sent to an unknown channel");
                return CommandOutcome::Dropped(DropReason::UnknownChannel);
            }
        };

        let (state, light_id) = {
            let lifecycle = self.lifecycle.read();
            (lifecycle.state, lifecycle.light_id.clone())
        };
        let light_id = match light_id {
            Some(id) if state.accepts_commands() => id,
            _ => {
                debug!(thing = %self.thing, ?state, %command, "Handler not active, dropping command");
                return CommandOutcome::Dropped(DropReason::NotActive);
            }
        };

        let Some(bridge) = self.resolve_bridge(&light_id) else {
            warn!(light_id = %light_id, "Hue bridge handler not found. Cannot handle command without bridge.");
            return CommandOutcome::Dropped(DropReason::BridgeUnavailable);
        };
        // Re-checked here: the state read above may predate an invalidation.
        self.activate(&light_id, bridge.as_ref());

        let _ordered = self.submit.lock();
        let update = {
            let mut memory = self.memory.lock();
            // Read under the memory lock so a snapshot that clears the memory
            // is never older than the values it cleared.
            let Some(light) = bridge.light(&light_id) else {
                warn!(light_id = %light_id, "Hue light not known on bridge. Cannot handle command.");
                return CommandOutcome::Dropped(DropReason::LightUnknown);
            };
            let current = memory.current_values(&light.state);
            let update =
                match converter::convert(channel, &command, &current, self.config.steps) {
                    Ok(update) => update,
                    Err(e) => {
                        debug!(light_id = %light_id, channel = %channel, error = %e, "Dropping command");
                        return CommandOutcome::Dropped(DropReason::Conversion(e));
                    }
                };
            let update = match &self.quirk {
                Some(quirk) => {
                    trace!(light_id = %light_id, quirk = quirk.name(), "Applying quirk");
                    quirk.apply(update, &command)
                }
                None => update,
            };
            memory.record(&update);
            update
        };

        debug!(light_id = %light_id, channel = %channel, %command, ?update, "Submitting state update");
        bridge.submit_update(&light_id, update);
        CommandOutcome::Submitted(update)
    }

    /// Publishes a fresh snapshot of the light.
    ///
    /// Snapshots of other lights are ignored.
    pub fn on_light_state_changed(&self, light: &LightSnapshot) {
        if !self.is_bound_to(&light.id) {
            return;
        }
        self.memory.lock().clear();

        let state = &light.state;
        if state.reachable {
            self.set_status(StatusInfo::online());
        } else {
            self.set_status(StatusInfo::offline(
                StatusDetail::None,
                UNREACHABLE_DESCRIPTION,
            ));
        }

        let mut color = converter::to_hsb(state);
        if !state.on {
            color = color.with_brightness(Percent::ZERO);
        }
        self.publish(ChannelKind::Color, ChannelValue::Color(color));

        if let Some(ct) = converter::to_color_temperature_percent(state) {
            self.publish(ChannelKind::ColorTemperature, ChannelValue::Percent(ct));
        }

        let brightness = if state.on {
            converter::to_brightness_percent(state)
        } else {
            Percent::ZERO
        };
        self.publish(ChannelKind::Brightness, ChannelValue::Percent(brightness));
    }

    /// The light appeared on the bridge.
    pub fn on_light_added(&self, light: &LightSnapshot) {
        if !self.is_bound_to(&light.id) {
            return;
        }
        self.set_status(StatusInfo::online());
        self.on_light_state_changed(light);
    }

    /// The light disappeared from the bridge.
    pub fn on_light_removed(&self, light_id: &LightId) {
        if !self.is_bound_to(light_id) {
            return;
        }
        self.memory.lock().clear();
        self.set_status(StatusInfo::offline(StatusDetail::None, REMOVED_DESCRIPTION));
    }

    /// Platform identity of the handler.
    #[must_use]
    pub fn thing(&self) -> &str {
        &self.thing
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> HandlerState {
        self.lifecycle.read().state
    }

    /// Last published status.
    #[must_use]
    pub fn status(&self) -> StatusInfo {
        self.lifecycle.read().status.clone()
    }

    /// The bound light, `None` before initialization and after disposal.
    #[must_use]
    pub fn light_id(&self) -> Option<LightId> {
        self.lifecycle.read().light_id.clone()
    }

    /// Configured device type.
    #[must_use]
    pub fn device_type(&self) -> &DeviceType {
        &self.config.device_type
    }

    /// Name of the active quirk adapter, if any.
    #[must_use]
    pub fn quirk_name(&self) -> Option<&'static str> {
        self.quirk.as_ref().map(|quirk| quirk.name())
    }

    /// Returns the cached bridge or resolves and caches it, registering this
    /// handler as listener. Resolution and registration happen at most once
    /// per cached connection.
    fn resolve_bridge(&self, light_id: &LightId) -> Option<Arc<dyn BridgeConnection>> {
        let mut cached = self.bridge.lock();
        if let Some(bridge) = cached.as_ref() {
            return Some(Arc::clone(bridge));
        }

        // dispose() marks the state before taking this lock.
        if self.lifecycle.read().state == HandlerState::Disposed {
            return None;
        }
        let bridge = self.resolver.resolve()?;
        if let Some(listener) = self.self_ref.upgrade() {
            bridge.register_listener(light_id, listener);
        }
        debug!(light_id = %light_id, "Registered light status listener");
        *cached = Some(Arc::clone(&bridge));
        Some(bridge)
    }

    fn activate(&self, light_id: &LightId, bridge: &dyn BridgeConnection) {
        {
            let mut lifecycle = self.lifecycle.write();
            if lifecycle.state != HandlerState::Bound {
                return;
            }
            lifecycle.state = HandlerState::Active;
        }

        self.set_status(bridge.status());
        match bridge.light(light_id).and_then(|light| light.software_version) {
            Some(version) => {
                self.publisher
                    .property_updated(&self.thing, PROPERTY_FIRMWARE_VERSION, &version);
            }
            None => debug!(light_id = %light_id, "No firmware version known for light"),
        }
    }

    fn is_bound_to(&self, light_id: &LightId) -> bool {
        self.lifecycle.read().light_id.as_ref() == Some(light_id)
    }

    fn set_status(&self, status: StatusInfo) {
        self.lifecycle.write().status = status.clone();
        self.publisher.status_updated(&self.thing, &status);
    }

    fn publish(&self, channel: ChannelKind, value: ChannelValue) {
        trace!(thing = %self.thing, channel = %channel, %value, "Publishing channel state");
        self.publisher.state_updated(&self.thing, channel, value);
    }
}

impl fmt::Debug for LightHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lifecycle = self.lifecycle.read();
        f.debug_struct("LightHandler")
            .field("thing", &self.thing)
            .field("light_id", &lifecycle.light_id)
            .field("state", &lifecycle.state)
            .field("device_type", &self.config.device_type)
            .finish_non_exhaustive()
    }
}

impl LightStatusListener for LightHandler {
    fn listener_id(&self) -> ListenerId {
        self.listener_id
    }

    fn on_light_state_changed(&self, light: &LightSnapshot) {
        LightHandler::on_light_state_changed(self, light);
    }

    fn on_light_added(&self, light: &LightSnapshot) {
        LightHandler::on_light_added(self, light);
    }

    fn on_light_removed(&self, light_id: &LightId) {
        LightHandler::on_light_removed(self, light_id);
    }
}
