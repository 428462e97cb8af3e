// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state types.
//!
//! [`LightSnapshot`] and [`LightState`] describe what the bridge reports about
//! a light. [`StateUpdate`] is what a handler sends back to change it.
//!
//! # Examples
//!
//! ```
//! use huelink_lib::state::{LightState, StateUpdate};
//!
//! let mut state = LightState::new();
//! state.apply(&StateUpdate::new().turn_on());
//! assert!(state.on);
//! ```

mod light_state;
mod state_update;

pub use light_state::{LightSnapshot, LightState};
pub use state_update::StateUpdate;
