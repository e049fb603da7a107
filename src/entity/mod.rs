// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Toggle entities exposed to the host presentation layer.
//!
//! A [`ComponentSwitch`] represents one controllable component of one
//! server instance. Its on/off state is always derived from the owning
//! client's latest snapshot; identifiers are deterministic so external
//! state keyed by them survives instance re-adds.

mod component_switch;
mod device_info;
mod unique_id;

pub use component_switch::ComponentSwitch;
pub use device_info::{DOMAIN, DeviceInfo, MANUFACTURER_NAME, MODEL_NAME};
pub use unique_id::{UniqueId, switch_device_id, switch_display_name};
