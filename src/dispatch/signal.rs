// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Signal keys for the dispatcher.

use crate::entity::UniqueId;

/// A keyed signal routed through the [`Dispatcher`](super::Dispatcher).
///
/// Two signal classes exist: a client-scoped refresh trigger sent after
/// every snapshot push, and a per-entity removal signal keyed by the
/// entity's unique identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The named instance's client refreshed its component snapshot.
    ///
    /// Carries no payload; receivers re-derive state from the client.
    ComponentsUpdated {
        /// The instance whose snapshot changed.
        instance_num: u32,
    },

    /// The entity with this unique identifier must detach itself.
    EntityRemove {
        /// The target entity's unique identifier.
        unique_id: UniqueId,
    },
}

impl Signal {
    /// Creates a components-updated signal for an instance.
    #[must_use]
    pub const fn components_updated(instance_num: u32) -> Self {
        Self::ComponentsUpdated { instance_num }
    }

    /// Creates a removal signal for an entity.
    #[must_use]
    pub const fn entity_remove(unique_id: UniqueId) -> Self {
        Self::EntityRemove { unique_id }
    }

    /// Returns `true` if this is a removal signal.
    #[must_use]
    pub const fn is_removal(&self) -> bool {
        matches!(self, Self::EntityRemove { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComponentKind;

    #[test]
    fn signal_equality_is_by_key() {
        assert_eq!(Signal::components_updated(1), Signal::components_updated(1));
        assert_ne!(Signal::components_updated(1), Signal::components_updated(2));

        let id = UniqueId::for_switch("server", 1, ComponentKind::Smoothing);
        assert_eq!(
            Signal::entity_remove(id.clone()),
            Signal::entity_remove(id.clone())
        );
        assert_ne!(
            Signal::entity_remove(id),
            Signal::entity_remove(UniqueId::for_switch("server", 2, ComponentKind::Smoothing))
        );
    }

    #[test]
    fn removal_check() {
        let id = UniqueId::for_switch("server", 1, ComponentKind::All);
        assert!(Signal::entity_remove(id).is_removal());
        assert!(!Signal::components_updated(1).is_removal());
    }
}
