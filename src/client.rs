// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client seam for the external `HyperHDR` connection layer.
//!
//! This library does not implement the wire protocol. Connection
//! management, reconnection, and state synchronization live in an external
//! client; this trait describes exactly what the toggle entities need from
//! it. Each server instance owns one client; entities hold a shared,
//! non-owning handle and never manage the client's lifecycle.

use crate::error::TransportError;
use crate::state::ComponentStates;
use crate::types::ComponentKind;

/// Interface to one instance's server connection.
///
/// Implementations are expected to refresh their snapshot from server
/// pushes and to signal
/// [`Signal::ComponentsUpdated`](crate::dispatch::Signal::ComponentsUpdated)
/// on the shared dispatcher after each refresh, so attached entities
/// re-derive their state.
#[allow(async_fn_in_trait)]
pub trait ComponentClient: Send + Sync + 'static {
    /// Returns a copy of the current known component state.
    ///
    /// Entities call this on every read; the returned snapshot must reflect
    /// the latest server push. This crate never caches the result.
    fn component_states(&self) -> ComponentStates;

    /// Returns `true` once the first full state load has completed.
    ///
    /// Entity availability is gated on this: toggle state is not to be
    /// trusted before the initial load.
    fn has_loaded_state(&self) -> bool;

    /// Requests that the server set a component's enabled flag.
    ///
    /// One outbound request per call. The eventual state change is observed
    /// only through the next snapshot push; implementations must not echo
    /// the request into their local snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request cannot be delivered or is
    /// rejected. The error is surfaced to the caller unretried.
    async fn send_set_component(
        &self,
        kind: ComponentKind,
        enabled: bool,
    ) -> Result<(), TransportError>;
}
