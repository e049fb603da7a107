// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Component registry for `HyperHDR` processing components.
//!
//! [`ComponentKind`] is the closed set of toggleable components a `HyperHDR`
//! server reports. The registry maps each kind to its wire key (the
//! uppercase identifier used in server payloads) and its canonical display
//! label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A toggleable processing component of a `HyperHDR` server.
///
/// The set is closed and known at compile time. Servers may report kinds
/// outside this set in the future; those are rejected by [`from_key`] and
/// skipped during snapshot deserialization.
///
/// [`from_key`]: ComponentKind::from_key
///
/// # Examples
///
/// ```
/// use hyperhdr_lib::types::ComponentKind;
///
/// let kind = ComponentKind::Smoothing;
/// assert_eq!(kind.key(), "SMOOTHING");
/// assert_eq!(kind.label(), "Smoothing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentKind {
    /// Master toggle for the whole server.
    All,
    /// Temporal smoothing of LED output.
    Smoothing,
    /// Black-border detection.
    BlackBorder,
    /// Json/flatbuffer forwarder.
    Forwarder,
    /// Boblight protocol server.
    BoblightServer,
    /// System (desktop) capture.
    SystemGrabber,
    /// Physical LED device output.
    LedDevice,
    /// USB video capture.
    VideoGrabber,
    /// HDR tone mapping.
    Hdr,
}

/// The fixed set of components managed as toggle entities, in registration
/// order.
pub const MANAGED_COMPONENTS: [ComponentKind; 9] = [
    ComponentKind::All,
    ComponentKind::Smoothing,
    ComponentKind::BlackBorder,
    ComponentKind::Forwarder,
    ComponentKind::BoblightServer,
    ComponentKind::SystemGrabber,
    ComponentKind::LedDevice,
    ComponentKind::VideoGrabber,
    ComponentKind::Hdr,
];

impl ComponentKind {
    /// Returns the wire key used in server payloads.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Smoothing => "SMOOTHING",
            Self::BlackBorder => "BLACKBORDER",
            Self::Forwarder => "FORWARDER",
            Self::BoblightServer => "BOBLIGHTSERVER",
            Self::SystemGrabber => "SYSTEMGRABBER",
            Self::LedDevice => "LEDDEVICE",
            Self::VideoGrabber => "VIDEOGRABBER",
            Self::Hdr => "HDR",
        }
    }

    /// Returns the canonical display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Smoothing => "Smoothing",
            Self::BlackBorder => "Blackborder detection",
            Self::Forwarder => "Forwarder",
            Self::BoblightServer => "Boblight server",
            Self::SystemGrabber => "System capture",
            Self::LedDevice => "LED device",
            Self::VideoGrabber => "Video capture",
            Self::Hdr => "HDR tone mapping",
        }
    }

    /// Parses a wire key into a component kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownComponent`] for keys outside the fixed set.
    pub fn from_key(key: &str) -> Result<Self, Error> {
        match key.to_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "SMOOTHING" => Ok(Self::Smoothing),
            "BLACKBORDER" => Ok(Self::BlackBorder),
            "FORWARDER" => Ok(Self::Forwarder),
            "BOBLIGHTSERVER" => Ok(Self::BoblightServer),
            "SYSTEMGRABBER" => Ok(Self::SystemGrabber),
            "LEDDEVICE" => Ok(Self::LedDevice),
            "VIDEOGRABBER" => Ok(Self::VideoGrabber),
            "HDR" => Ok(Self::Hdr),
            _ => Err(Error::UnknownComponent(key.to_string())),
        }
    }

    /// Returns the display label for a wire key.
    ///
    /// Unknown keys fall back to the capitalized raw identifier. Not
    /// expected in practice, but keeps name derivation total.
    #[must_use]
    pub fn label_for_key(key: &str) -> String {
        match Self::from_key(key) {
            Ok(kind) => kind.label().to_string(),
            Err(_) => capitalize(key),
        }
    }
}

/// Capitalizes the first character and lowercases the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ComponentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips_through_from_key() {
        for kind in MANAGED_COMPONENTS {
            assert_eq!(ComponentKind::from_key(kind.key()).unwrap(), kind);
        }
    }

    #[test]
    fn from_key_is_case_insensitive() {
        assert_eq!(
            ComponentKind::from_key("smoothing").unwrap(),
            ComponentKind::Smoothing
        );
        assert_eq!(
            ComponentKind::from_key("LedDevice").unwrap(),
            ComponentKind::LedDevice
        );
    }

    #[test]
    fn from_key_rejects_unknown() {
        let result = ComponentKind::from_key("GRABBER2");
        assert!(matches!(result, Err(Error::UnknownComponent(key)) if key == "GRABBER2"));
    }

    #[test]
    fn labels_are_distinct() {
        use std::collections::HashSet;

        let labels: HashSet<&str> = MANAGED_COMPONENTS.iter().map(ComponentKind::label).collect();
        assert_eq!(labels.len(), MANAGED_COMPONENTS.len());
    }

    #[test]
    fn label_for_known_key() {
        assert_eq!(ComponentKind::label_for_key("BLACKBORDER"), "Blackborder detection");
    }

    #[test]
    fn label_for_unknown_key_capitalizes() {
        assert_eq!(ComponentKind::label_for_key("NEWGRABBER"), "Newgrabber");
        assert_eq!(ComponentKind::label_for_key(""), "");
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(ComponentKind::Hdr.to_string(), "HDR tone mapping");
    }

    #[test]
    fn serde_uses_uppercase_keys() {
        let json = serde_json::to_string(&ComponentKind::BoblightServer).unwrap();
        assert_eq!(json, "\"BOBLIGHTSERVER\"");

        let kind: ComponentKind = serde_json::from_str("\"VIDEOGRABBER\"").unwrap();
        assert_eq!(kind, ComponentKind::VideoGrabber);
    }

    #[test]
    fn managed_set_has_nine_components() {
        assert_eq!(MANAGED_COMPONENTS.len(), 9);
    }
}
