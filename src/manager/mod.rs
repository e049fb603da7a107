// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Instance lifecycle management.
//!
//! The [`InstanceManager`] reacts to instance added/removed events from the
//! external client-management layer. Each active instance owns one
//! [`ComponentSwitch`](crate::entity::ComponentSwitch) per managed
//! component; removal tears them down through per-entity signals so each
//! switch detaches itself exactly once.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use hyperhdr_lib::client::ComponentClient;
//! use hyperhdr_lib::manager::InstanceManager;
//!
//! fn on_instance_events<C: ComponentClient>(client: Arc<C>) {
//!     let mut manager = InstanceManager::new("f0ab");
//!
//!     // From the client layer's instance directory callbacks:
//!     let switches = manager.instance_added(0, "Living Room", &client);
//!     assert_eq!(switches.len(), 9);
//!
//!     manager.instance_removed(0);
//! }
//! ```

mod instance_manager;

pub use instance_manager::InstanceManager;
