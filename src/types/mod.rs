// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for light control.
//!
//! Each type ensures values are within their valid ranges at construction
//! time, so converted state updates can never carry out-of-range values.
//!
//! # Types
//!
//! - [`Percent`] - Channel-level percentage (0-100)
//! - [`Brightness`] - Bridge-native brightness (0-254)
//! - [`ColorTemperature`] - Color temperature in mireds (153-500)
//! - [`HsbColor`] - Channel-level HSB color
//! - [`PowerState`] - On/Off
//! - [`LightId`] - Bridge-assigned light identifier
//! - [`DeviceType`] - Model tag used for quirk selection

mod brightness;
mod color;
mod device_type;
mod light_id;
mod percent;
mod power;

pub use brightness::Brightness;
pub use color::{ColorTemperature, HsbColor};
pub use device_type::{DeviceType, SUPPORTED_DEVICE_TYPES};
pub use light_id::LightId;
pub use percent::Percent;
pub use power::PowerState;
