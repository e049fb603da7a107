// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Instance lifecycle manager.

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::ComponentClient;
use crate::dispatch::{Dispatcher, Signal};
use crate::entity::{ComponentSwitch, UniqueId};
use crate::event::{EntityEvent, EventBus};
use crate::types::MANAGED_COMPONENTS;

/// Creates and destroys toggle entities as server instances come and go.
///
/// The manager is the sole owner of the entities it creates: an
/// instance-added event produces one attached [`ComponentSwitch`] per
/// managed component, and an instance-removed event emits one removal
/// signal per entity, upon which each entity detaches itself exactly once.
///
/// Re-adding a removed instance number is a fresh episode with new entity
/// objects; unique identifiers are recomputed identically, so external
/// state keyed by them carries over.
pub struct InstanceManager<C: ComponentClient> {
    server_id: String,
    dispatcher: Arc<Dispatcher>,
    bus: EventBus,
    /// Live entities, keyed by owning instance number.
    instances: HashMap<u32, Vec<Arc<ComponentSwitch<C>>>>,
}

impl<C: ComponentClient> InstanceManager<C> {
    /// Creates a manager for one server, with its own dispatcher and bus.
    #[must_use]
    pub fn new(server_id: impl Into<String>) -> Self {
        Self::with_parts(server_id, Arc::new(Dispatcher::new()), EventBus::new())
    }

    /// Creates a manager sharing an existing dispatcher and event bus.
    ///
    /// Use this when the client layer already routes its snapshot refresh
    /// signals through a shared dispatcher.
    #[must_use]
    pub fn with_parts(
        server_id: impl Into<String>,
        dispatcher: Arc<Dispatcher>,
        bus: EventBus,
    ) -> Self {
        Self {
            server_id: server_id.into(),
            dispatcher,
            bus,
            instances: HashMap::new(),
        }
    }

    /// Returns the server identity unique ids are derived from.
    #[must_use]
    pub fn server_id(&self) -> &str {
        &self.server_id
    }

    /// Returns the shared dispatcher.
    ///
    /// The client layer sends [`Signal::ComponentsUpdated`] here after each
    /// snapshot push.
    #[must_use]
    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Subscribes to entity events for the presentation layer.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<EntityEvent> {
        self.bus.subscribe()
    }

    /// Handles an instance-added event.
    ///
    /// Creates one attached switch per managed component, bound to the
    /// instance's client handle, and publishes a `SwitchAdded` event per
    /// entity. Returns the new entities for the presentation layer.
    ///
    /// If the instance number is already active, the old episode is torn
    /// down first so that exactly one entity exists per component.
    pub fn instance_added(
        &mut self,
        instance_num: u32,
        instance_name: &str,
        client: &Arc<C>,
    ) -> Vec<Arc<ComponentSwitch<C>>> {
        if self.instances.contains_key(&instance_num) {
            tracing::warn!(instance_num, "Instance re-added while active; replacing entities");
            self.instance_removed(instance_num);
        }

        tracing::debug!(instance_num, instance_name, "Adding component switches");

        let switches: Vec<Arc<ComponentSwitch<C>>> = MANAGED_COMPONENTS
            .into_iter()
            .map(|kind| {
                let switch = Arc::new(ComponentSwitch::new(
                    &self.server_id,
                    instance_num,
                    instance_name,
                    kind,
                    Arc::clone(client),
                    Arc::clone(&self.dispatcher),
                    self.bus.clone(),
                ));
                switch.attach();
                self.bus.publish(EntityEvent::switch_added(
                    switch.unique_id().clone(),
                    instance_num,
                ));
                switch
            })
            .collect();

        self.instances.insert(instance_num, switches.clone());
        switches
    }

    /// Handles an instance-removed event.
    ///
    /// Emits one removal signal per managed entity's unique identifier and
    /// drops the stored entities. Each entity detaches itself upon
    /// observing its own signal.
    ///
    /// Returns `true` if the instance was active.
    pub fn instance_removed(&mut self, instance_num: u32) -> bool {
        let Some(switches) = self.instances.remove(&instance_num) else {
            return false;
        };

        tracing::debug!(instance_num, "Removing component switches");

        for switch in &switches {
            self.dispatcher
                .send(&Signal::entity_remove(switch.unique_id().clone()));
        }

        true
    }

    /// Returns the live entities for an instance, if active.
    #[must_use]
    pub fn switches(&self, instance_num: u32) -> Option<&[Arc<ComponentSwitch<C>>]> {
        self.instances.get(&instance_num).map(Vec::as_slice)
    }

    /// Returns `true` if the instance currently has live entities.
    #[must_use]
    pub fn is_active(&self, instance_num: u32) -> bool {
        self.instances.contains_key(&instance_num)
    }

    /// Returns the number of active instances.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Returns the total number of live entities.
    #[must_use]
    pub fn switch_count(&self) -> usize {
        self.instances.values().map(Vec::len).sum()
    }

    /// Returns the unique identifiers the manager would derive for an
    /// instance, in registration order.
    #[must_use]
    pub fn unique_ids_for(&self, instance_num: u32) -> Vec<UniqueId> {
        MANAGED_COMPONENTS
            .into_iter()
            .map(|kind| UniqueId::for_switch(&self.server_id, instance_num, kind))
            .collect()
    }
}

impl<C: ComponentClient> std::fmt::Debug for InstanceManager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceManager")
            .field("server_id", &self.server_id)
            .field("instance_count", &self.instance_count())
            .field("switch_count", &self.switch_count())
            .finish_non_exhaustive()
    }
}
