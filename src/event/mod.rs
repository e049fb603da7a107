// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for the host presentation layer.
//!
//! The [`EventBus`] broadcasts [`EntityEvent`] values so a presentation
//! layer can mirror entity lifecycle and re-read derived state without
//! polling.
//!
//! # Examples
//!
//! ```
//! use hyperhdr_lib::event::{EntityEvent, EventBus};
//! use hyperhdr_lib::entity::UniqueId;
//! use hyperhdr_lib::types::ComponentKind;
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! let id = UniqueId::for_switch("server", 0, ComponentKind::Smoothing);
//! bus.publish(EntityEvent::switch_updated(id.clone()));
//!
//! let event = rx.try_recv().unwrap();
//! assert_eq!(event.unique_id(), &id);
//! ```

mod entity_event;
mod event_bus;

pub use entity_event::EntityEvent;
pub use event_bus::EventBus;
