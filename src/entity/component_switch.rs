// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Toggle entity for one (instance, component) pair.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::client::ComponentClient;
use crate::dispatch::{Dispatcher, Signal, SubscriptionId};
use crate::entity::{DeviceInfo, UniqueId, switch_device_id, switch_display_name};
use crate::error::Error;
use crate::event::{EntityEvent, EventBus};
use crate::types::ComponentKind;

/// One controllable switch for one component of one server instance.
///
/// The switch never caches on/off state: every [`is_on`](Self::is_on) read
/// re-derives it from the owning client's current snapshot, and
/// [`set_component`](Self::set_component) only sends a request. The state
/// observed by readers changes only when the next snapshot push arrives,
/// which also covers changes made by other controllers or the server
/// itself.
///
/// The client handle is a shared back-reference; the switch never manages
/// the client's lifecycle.
pub struct ComponentSwitch<C: ComponentClient> {
    unique_id: UniqueId,
    device_id: String,
    name: String,
    instance_num: u32,
    instance_name: String,
    kind: ComponentKind,
    client: Arc<C>,
    dispatcher: Arc<Dispatcher>,
    bus: EventBus,
    /// Dispatcher subscriptions held while attached.
    subscriptions: Mutex<Vec<SubscriptionId>>,
    detached: AtomicBool,
}

impl<C: ComponentClient> ComponentSwitch<C> {
    /// Creates a switch for one component of one instance.
    ///
    /// The switch starts detached; call [`attach`](Self::attach) to connect
    /// it to the dispatcher.
    #[must_use]
    pub fn new(
        server_id: &str,
        instance_num: u32,
        instance_name: &str,
        kind: ComponentKind,
        client: Arc<C>,
        dispatcher: Arc<Dispatcher>,
        bus: EventBus,
    ) -> Self {
        Self {
            unique_id: UniqueId::for_switch(server_id, instance_num, kind),
            device_id: switch_device_id(server_id, instance_num),
            name: switch_display_name(instance_name, kind),
            instance_num,
            instance_name: instance_name.to_string(),
            kind,
            client,
            dispatcher,
            bus,
            subscriptions: Mutex::new(Vec::new()),
            detached: AtomicBool::new(false),
        }
    }

    /// Returns the stable unique identifier.
    #[must_use]
    pub fn unique_id(&self) -> &UniqueId {
        &self.unique_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier of the owning device instance.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the component this switch controls.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Returns the owning instance number.
    #[must_use]
    pub fn instance_num(&self) -> u32 {
        self.instance_num
    }

    /// Returns device registration metadata for the presentation layer.
    #[must_use]
    pub fn device_info(&self) -> DeviceInfo {
        DeviceInfo::new(self.device_id.clone(), self.instance_name.clone())
    }

    /// Whether the entity should be surfaced by default.
    ///
    /// Component controls are for advanced users and stay hidden unless
    /// explicitly enabled.
    #[must_use]
    pub fn enabled_by_default(&self) -> bool {
        false
    }

    /// Whether the presentation layer should poll this entity.
    ///
    /// Always `false`: updates are pushed via the event bus.
    #[must_use]
    pub fn should_poll(&self) -> bool {
        false
    }

    /// Returns `true` if the component is reported as enabled.
    ///
    /// Re-derived from the client's current snapshot on every call. A
    /// component absent from the snapshot is off. Total over any snapshot,
    /// including an empty one.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.client.component_states().is_enabled(self.kind)
    }

    /// Returns `true` once the client has loaded its initial state.
    #[must_use]
    pub fn available(&self) -> bool {
        self.client.has_loaded_state()
    }

    /// Requests that the server set this component's enabled flag.
    ///
    /// Fire-and-forget apart from error propagation: no local state is
    /// mutated, and [`is_on`](Self::is_on) changes only once the next
    /// snapshot push confirms the new state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the client rejects or cannot deliver
    /// the request.
    pub async fn set_component(&self, enabled: bool) -> Result<(), Error> {
        self.client
            .send_set_component(self.kind, enabled)
            .await
            .map_err(Error::Transport)
    }

    /// Turns the component on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the request cannot be delivered.
    pub async fn turn_on(&self) -> Result<(), Error> {
        self.set_component(true).await
    }

    /// Turns the component off.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the request cannot be delivered.
    pub async fn turn_off(&self) -> Result<(), Error> {
        self.set_component(false).await
    }

    /// Connects the switch to the dispatcher.
    ///
    /// Subscribes to the instance's components-updated signal and to this
    /// entity's own removal signal. Callbacks hold weak references so the
    /// dispatcher never keeps a detached switch alive.
    pub fn attach(self: &Arc<Self>) {
        let weak = Arc::downgrade(self);
        let update_id = self.dispatcher.connect(
            Signal::components_updated(self.instance_num),
            move || {
                if let Some(switch) = weak.upgrade() {
                    switch.refresh();
                }
            },
        );

        let weak = Arc::downgrade(self);
        let remove_id = self.dispatcher.connect(
            Signal::entity_remove(self.unique_id.clone()),
            move || {
                if let Some(switch) = weak.upgrade() {
                    switch.detach();
                }
            },
        );

        self.subscriptions.lock().extend([update_id, remove_id]);
    }

    /// Detaches the switch, exactly once.
    ///
    /// Disconnects every subscription made in [`attach`](Self::attach) and
    /// publishes a removal event for the presentation layer. Later removal
    /// signals and in-flight request results are discarded.
    pub fn detach(&self) {
        if self.detached.swap(true, Ordering::SeqCst) {
            return;
        }

        for id in self.subscriptions.lock().drain(..) {
            self.dispatcher.disconnect(id);
        }

        tracing::debug!(unique_id = %self.unique_id, "Component switch detached");
        self.bus
            .publish(EntityEvent::switch_removed(self.unique_id.clone()));
    }

    /// Returns `true` once the switch has detached.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached.load(Ordering::SeqCst)
    }

    /// Signals the presentation layer to re-read derived state.
    fn refresh(&self) {
        self.bus
            .publish(EntityEvent::switch_updated(self.unique_id.clone()));
    }
}

impl<C: ComponentClient> std::fmt::Debug for ComponentSwitch<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentSwitch")
            .field("unique_id", &self.unique_id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("detached", &self.is_detached())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::RwLock;
    use std::sync::atomic::AtomicBool;

    use crate::error::TransportError;
    use crate::state::{ComponentSnapshot, ComponentStates};

    /// In-memory client with injectable snapshots and failures.
    #[derive(Default)]
    struct MockClient {
        states: RwLock<ComponentStates>,
        loaded: AtomicBool,
        sent: Mutex<Vec<(ComponentKind, bool)>>,
        fail_with: Mutex<Option<TransportError>>,
    }

    impl MockClient {
        fn push_snapshot(&self, kind: ComponentKind, enabled: bool) {
            self.states.write().apply(ComponentSnapshot::new(kind, enabled));
        }

        fn mark_loaded(&self) {
            self.loaded.store(true, Ordering::SeqCst);
        }
    }

    impl ComponentClient for MockClient {
        fn component_states(&self) -> ComponentStates {
            self.states.read().clone()
        }

        fn has_loaded_state(&self) -> bool {
            self.loaded.load(Ordering::SeqCst)
        }

        async fn send_set_component(
            &self,
            kind: ComponentKind,
            enabled: bool,
        ) -> Result<(), TransportError> {
            if let Some(err) = self.fail_with.lock().clone() {
                return Err(err);
            }
            self.sent.lock().push((kind, enabled));
            Ok(())
        }
    }

    fn switch_for(
        kind: ComponentKind,
        client: &Arc<MockClient>,
        dispatcher: &Arc<Dispatcher>,
        bus: &EventBus,
    ) -> Arc<ComponentSwitch<MockClient>> {
        Arc::new(ComponentSwitch::new(
            "server",
            1,
            "Living Room",
            kind,
            Arc::clone(client),
            Arc::clone(dispatcher),
            bus.clone(),
        ))
    }

    fn setup() -> (Arc<MockClient>, Arc<Dispatcher>, EventBus) {
        (Arc::new(MockClient::default()), Arc::new(Dispatcher::new()), EventBus::new())
    }

    #[test]
    fn identity_and_metadata() {
        let (client, dispatcher, bus) = setup();
        let switch = switch_for(ComponentKind::Smoothing, &client, &dispatcher, &bus);

        assert_eq!(switch.unique_id().as_str(), "server_1_component_switch_smoothing");
        assert_eq!(switch.name(), "Living Room Component Smoothing");
        assert_eq!(switch.device_id(), "server_1");
        assert_eq!(switch.kind(), ComponentKind::Smoothing);
        assert_eq!(switch.instance_num(), 1);
        assert!(!switch.enabled_by_default());
        assert!(!switch.should_poll());

        let info = switch.device_info();
        assert_eq!(info.identifiers.1, "server_1");
        assert_eq!(info.name, "Living Room");
    }

    #[test]
    fn is_on_follows_snapshot() {
        let (client, dispatcher, bus) = setup();
        let smoothing = switch_for(ComponentKind::Smoothing, &client, &dispatcher, &bus);
        let forwarder = switch_for(ComponentKind::Forwarder, &client, &dispatcher, &bus);

        // Empty snapshot: everything off
        assert!(!smoothing.is_on());

        client.push_snapshot(ComponentKind::Smoothing, true);
        assert!(smoothing.is_on());
        assert!(!forwarder.is_on()); // absent entry

        client.push_snapshot(ComponentKind::Smoothing, false);
        assert!(!smoothing.is_on());
    }

    #[test]
    fn availability_tracks_loaded_state_only() {
        let (client, dispatcher, bus) = setup();
        let switch = switch_for(ComponentKind::All, &client, &dispatcher, &bus);

        assert!(!switch.available());

        // Snapshot contents do not matter for availability
        client.push_snapshot(ComponentKind::All, true);
        assert!(!switch.available());

        client.mark_loaded();
        assert!(switch.available());
    }

    #[tokio::test]
    async fn turn_on_sends_request_without_mutating_state() {
        let (client, dispatcher, bus) = setup();
        let switch = switch_for(ComponentKind::LedDevice, &client, &dispatcher, &bus);

        switch.turn_on().await.unwrap();
        assert_eq!(*client.sent.lock(), vec![(ComponentKind::LedDevice, true)]);

        // State is unchanged until a snapshot confirms it
        assert!(!switch.is_on());

        client.push_snapshot(ComponentKind::LedDevice, true);
        assert!(switch.is_on());
    }

    #[tokio::test]
    async fn turn_off_sends_disable_request() {
        let (client, dispatcher, bus) = setup();
        client.push_snapshot(ComponentKind::Hdr, true);
        let switch = switch_for(ComponentKind::Hdr, &client, &dispatcher, &bus);

        switch.turn_off().await.unwrap();
        assert_eq!(*client.sent.lock(), vec![(ComponentKind::Hdr, false)]);
        assert!(switch.is_on()); // still on until the next push
    }

    #[tokio::test]
    async fn transport_failure_is_surfaced() {
        let (client, dispatcher, bus) = setup();
        *client.fail_with.lock() = Some(TransportError::NotConnected);
        let switch = switch_for(ComponentKind::Forwarder, &client, &dispatcher, &bus);

        let err = switch.turn_on().await.unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::NotConnected)));
        assert!(client.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn components_updated_signal_publishes_refresh() {
        let (client, dispatcher, bus) = setup();
        let switch = switch_for(ComponentKind::Smoothing, &client, &dispatcher, &bus);
        switch.attach();

        let mut rx = bus.subscribe();
        dispatcher.send(&Signal::components_updated(1));

        let event = rx.recv().await.unwrap();
        assert_eq!(event, EntityEvent::switch_updated(switch.unique_id().clone()));

        // Another instance's refresh does not reach this switch
        dispatcher.send(&Signal::components_updated(2));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn removal_signal_detaches_exactly_once() {
        let (client, dispatcher, bus) = setup();
        let switch = switch_for(ComponentKind::Smoothing, &client, &dispatcher, &bus);
        switch.attach();
        assert_eq!(dispatcher.callback_count(), 2);

        let mut rx = bus.subscribe();
        let remove = Signal::entity_remove(switch.unique_id().clone());

        dispatcher.send(&remove);
        assert!(switch.is_detached());
        assert!(dispatcher.is_empty());

        let event = rx.recv().await.unwrap();
        assert!(event.is_removal());

        // Second signal is discarded: no further events
        dispatcher.send(&remove);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn detached_switch_ignores_refresh_signals() {
        let (client, dispatcher, bus) = setup();
        let switch = switch_for(ComponentKind::Smoothing, &client, &dispatcher, &bus);
        switch.attach();
        switch.detach();

        let mut rx = bus.subscribe();
        dispatcher.send(&Signal::components_updated(1));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn debug_output_names_entity() {
        let (client, dispatcher, bus) = setup();
        let switch = switch_for(ComponentKind::All, &client, &dispatcher, &bus);

        let debug = format!("{switch:?}");
        assert!(debug.contains("ComponentSwitch"));
        assert!(debug.contains("server_1_component_switch_all"));
    }
}
