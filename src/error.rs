// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `HueLink` library.
//!
//! Errors are split by concern: value validation, handler configuration, and
//! command conversion. None of them escape the handler's command or
//! notification entry points; they surface as log entries and status updates.

use thiserror::Error;

use crate::command::ChannelKind;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The handler configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A command could not be converted into a state update.
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// A hue value is outside the valid range (0-360).
    #[error("hue value {0} is out of range [0, 360]")]
    InvalidHue(u16),

    /// A light identifier was empty.
    #[error("light id must not be empty")]
    EmptyLightId,

    /// A channel identifier does not name a known light channel.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),
}

/// Errors related to handler configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration map could not be decoded.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// No light identifier was configured.
    #[error("light id is not configured")]
    MissingLightId,
}

/// Reasons a command produced no state update.
///
/// Both variants are expected during normal operation and lead to the
/// command being dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The command type makes no sense on this channel.
    #[error("{command} command is not applicable to the {channel} channel")]
    Inapplicable {
        /// The channel the command was sent to.
        channel: ChannelKind,
        /// Short name of the command kind.
        command: &'static str,
    },

    /// A relative command arrived but the current value is unknown.
    #[error("no current {channel} value known to adjust")]
    NoCurrentValue {
        /// The channel whose value is unknown.
        channel: ChannelKind,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
