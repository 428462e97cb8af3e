// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status reported to the platform for bridges and lights.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse availability of a thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThingStatus {
    /// Not initialized, or initialization failed.
    Uninitialized,
    /// Status not determined yet.
    Unknown,
    /// Reachable and operational.
    Online,
    /// Not reachable.
    Offline,
}

/// Why a thing has its current status.
///
/// [`StatusDetail::None`] is used when the status is an expected operating
/// condition rather than a fault, e.g. a light that is powered off at the
/// wall and therefore unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusDetail {
    /// No further detail.
    #[default]
    None,
    /// The handler configuration is incomplete or invalid.
    ConfigurationError,
    /// The bridge connection is unavailable.
    BridgeOffline,
    /// The platform has no handler for the thing.
    HandlerMissing,
}

/// A status together with its detail and an optional description.
///
/// # Examples
///
/// ```
/// use huelink_lib::status::{StatusDetail, StatusInfo, ThingStatus};
///
/// let info = StatusInfo::offline(StatusDetail::None, "Bridge reports light as not reachable");
/// assert_eq!(info.status, ThingStatus::Offline);
/// assert!(!info.is_fault());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInfo {
    /// The status.
    pub status: ThingStatus,
    /// Why the thing has this status.
    pub detail: StatusDetail,
    /// Human-readable explanation.
    pub description: Option<String>,
}

impl StatusInfo {
    /// Online without detail.
    #[must_use]
    pub fn online() -> Self {
        Self {
            status: ThingStatus::Online,
            detail: StatusDetail::None,
            description: None,
        }
    }

    /// Offline with a detail and description.
    #[must_use]
    pub fn offline(detail: StatusDetail, description: impl Into<String>) -> Self {
        Self {
            status: ThingStatus::Offline,
            detail,
            description: Some(description.into()),
        }
    }

    /// Uninitialized with a detail and description.
    #[must_use]
    pub fn uninitialized(detail: StatusDetail, description: impl Into<String>) -> Self {
        Self {
            status: ThingStatus::Uninitialized,
            detail,
            description: Some(description.into()),
        }
    }

    /// Unknown without detail.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            status: ThingStatus::Unknown,
            detail: StatusDetail::None,
            description: None,
        }
    }

    /// Returns `true` if the thing is online.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status == ThingStatus::Online
    }

    /// Returns `true` if the status reflects a fault rather than an
    /// expected condition.
    #[must_use]
    pub fn is_fault(&self) -> bool {
        self.status != ThingStatus::Online && self.detail != StatusDetail::None
    }
}

impl Default for StatusInfo {
    fn default() -> Self {
        Self {
            status: ThingStatus::Uninitialized,
            detail: StatusDetail::None,
            description: None,
        }
    }
}

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.status)?;
        if self.detail != StatusDetail::None {
            write!(f, " ({:?})", self.detail)?;
        }
        if let Some(description) = &self.description {
            write!(f, ": {description}")?;
        }
        Ok(())
    }
}
