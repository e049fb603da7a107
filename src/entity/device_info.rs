// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device registration metadata for the host presentation layer.

/// Integration domain used in device identifiers.
pub const DOMAIN: &str = "hyperhdr";

/// Manufacturer reported for every registered device.
pub const MANUFACTURER_NAME: &str = "HyperHDR";

/// Model reported for every registered device.
pub const MODEL_NAME: &str = "HyperHDR";

/// Metadata grouping an instance's entities into one logical device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// (domain, device id) pair identifying the device.
    pub identifiers: (String, String),
    /// Device manufacturer.
    pub manufacturer: &'static str,
    /// Device model.
    pub model: &'static str,
    /// Human-readable device name (the instance name).
    pub name: String,
}

impl DeviceInfo {
    /// Creates device info for an instance.
    #[must_use]
    pub fn new(device_id: String, name: String) -> Self {
        Self {
            identifiers: (DOMAIN.to_string(), device_id),
            manufacturer: MANUFACTURER_NAME,
            model: MODEL_NAME,
            name,
        }
    }
}
