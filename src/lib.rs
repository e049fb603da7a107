// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `HyperHDR` Lib - toggle entities for `HyperHDR` processing components.
//!
//! This library mirrors the component state of a `HyperHDR` server (LED
//! smoothing, black-border detection, forwarder, capture devices, HDR tone
//! mapping, ...) into per-instance switch entities for a home-automation
//! presentation layer, and forwards toggle actions back through an existing
//! client connection.
//!
//! The wire protocol is not implemented here: connection management and
//! state synchronization belong to an external client that implements the
//! [`ComponentClient`] trait. This crate owns the part worth reusing - the
//! component registry, the per-(instance, component) toggle entities, and
//! the lifecycle that keeps them in sync with instance add/remove events.
//!
//! # Design
//!
//! - **State is never cached.** Every [`ComponentSwitch::is_on`] read
//!   re-derives state from the client's current snapshot; a toggle request
//!   changes nothing locally until the next snapshot push confirms it.
//!   Unsolicited server-side changes are picked up the same way.
//! - **Symmetric attach/detach.** Entities connect to a shared
//!   [`Dispatcher`] when created and disconnect exactly once when their
//!   removal signal fires; no callback is cleaned up implicitly.
//! - **Deterministic identity.** Unique IDs derive from
//!   (server, instance, component), so re-adding an instance preserves any
//!   external state keyed by them.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use hyperhdr_lib::{
//!     ComponentClient, ComponentKind, ComponentStates, InstanceManager, TransportError,
//! };
//!
//! /// Stand-in for the real connection layer.
//! struct MyClient;
//!
//! impl ComponentClient for MyClient {
//!     fn component_states(&self) -> ComponentStates {
//!         ComponentStates::new()
//!     }
//!
//!     fn has_loaded_state(&self) -> bool {
//!         true
//!     }
//!
//!     async fn send_set_component(
//!         &self,
//!         _kind: ComponentKind,
//!         _enabled: bool,
//!     ) -> Result<(), TransportError> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> hyperhdr_lib::Result<()> {
//!     let client = Arc::new(MyClient);
//!     let mut manager = InstanceManager::new("f0ab");
//!
//!     // Watch entity lifecycle and refresh events
//!     let mut events = manager.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("Entity event: {event:?}");
//!         }
//!     });
//!
//!     // Instance directory reported a new instance
//!     let switches = manager.instance_added(0, "Living Room", &client);
//!     assert_eq!(switches.len(), 9);
//!
//!     // Request a change; confirmation arrives with the next snapshot
//!     switches[1].turn_on().await?;
//!     assert!(!switches[1].is_on());
//!
//!     manager.instance_removed(0);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dispatch;
pub mod entity;
pub mod error;
pub mod event;
pub mod manager;
pub mod state;
pub mod types;

pub use client::ComponentClient;
pub use dispatch::{Dispatcher, Signal, SubscriptionId};
pub use entity::{ComponentSwitch, DeviceInfo, UniqueId};
pub use error::{Error, Result, TransportError};
pub use event::{EntityEvent, EventBus};
pub use manager::InstanceManager;
pub use state::{ComponentSnapshot, ComponentStates};
pub use types::{ComponentKind, MANAGED_COMPONENTS};
