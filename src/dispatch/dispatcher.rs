// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback dispatcher keyed by [`Signal`].
//!
//! The dispatcher is the notification bridge between the client layer, the
//! lifecycle manager, and the toggle entities. Subscriptions are paired
//! explicitly: whoever connects a callback must disconnect it when
//! detaching. Nothing is cleaned up automatically.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use super::Signal;

/// Unique identifier for a dispatcher subscription.
///
/// Returned by [`Dispatcher::connect`] and used to disconnect later. IDs
/// are unique within a dispatcher's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for signal callbacks.
type SignalCallback = Arc<dyn Fn() + Send + Sync>;

/// Registry for signal callbacks with symmetric connect/disconnect.
///
/// Thread-safe via `parking_lot::RwLock`. Callbacks are wrapped in `Arc` so
/// dispatch can clone them out of the registry and invoke them without
/// holding the lock.
pub struct Dispatcher {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Connected callbacks, grouped by signal key.
    callbacks: RwLock<HashMap<Signal, HashMap<SubscriptionId, SignalCallback>>>,
}

impl Dispatcher {
    /// Creates a new empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            callbacks: RwLock::new(HashMap::new()),
        }
    }

    /// Generates a new unique subscription ID.
    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Connects a callback to a signal key.
    ///
    /// The callback fires on every [`send`](Self::send) of an equal signal
    /// until it is disconnected.
    pub fn connect<F>(&self, signal: Signal, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.callbacks
            .write()
            .entry(signal)
            .or_default()
            .insert(id, Arc::new(callback));
        id
    }

    /// Disconnects a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn disconnect(&self, id: SubscriptionId) -> bool {
        let mut callbacks = self.callbacks.write();
        let mut found = false;

        callbacks.retain(|_, subscribers| {
            if subscribers.remove(&id).is_some() {
                found = true;
            }
            !subscribers.is_empty()
        });

        found
    }

    /// Sends a signal to every callback connected to an equal key.
    ///
    /// Signals with no subscribers are silently discarded. Callbacks are
    /// invoked outside the registry lock so a callback may disconnect
    /// subscriptions (including its own) while being dispatched.
    pub fn send(&self, signal: &Signal) {
        let targets: Vec<SignalCallback> = {
            let callbacks = self.callbacks.read();
            callbacks
                .get(signal)
                .map(|subscribers| subscribers.values().cloned().collect())
                .unwrap_or_default()
        };

        for callback in targets {
            callback();
        }
    }

    /// Returns the total number of connected callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.callbacks.read().values().map(HashMap::len).sum()
    }

    /// Returns `true` if there are no connected callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}
