// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Component state snapshots as reported by the server.
//!
//! # Examples
//!
//! ```
//! use hyperhdr_lib::state::{ComponentSnapshot, ComponentStates};
//! use hyperhdr_lib::types::ComponentKind;
//!
//! let mut states = ComponentStates::new();
//! states.apply(ComponentSnapshot::new(ComponentKind::LedDevice, true));
//!
//! assert!(states.is_enabled(ComponentKind::LedDevice));
//! ```

mod snapshot;

pub use snapshot::{ComponentSnapshot, ComponentStates};
