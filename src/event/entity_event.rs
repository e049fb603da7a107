// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity event types.

use crate::entity::UniqueId;

/// Events published for the host presentation layer.
///
/// The presentation layer (platform adapter, UI) subscribes to these to
/// learn when switch entities appear, need a state re-read, or are gone.
/// Updates carry no component payload: state is always re-derived from the
/// owning client, never pushed through the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityEvent {
    /// A switch entity was created for an instance.
    SwitchAdded {
        /// The new entity's unique identifier.
        unique_id: UniqueId,
        /// The owning instance.
        instance_num: u32,
    },

    /// A switch entity's derived state may have changed; re-read it.
    SwitchUpdated {
        /// The entity whose state should be re-read.
        unique_id: UniqueId,
    },

    /// A switch entity detached and should be removed from presentation.
    SwitchRemoved {
        /// The removed entity's unique identifier.
        unique_id: UniqueId,
    },
}

impl EntityEvent {
    /// Returns the unique identifier associated with this event.
    #[must_use]
    pub fn unique_id(&self) -> &UniqueId {
        match self {
            Self::SwitchAdded { unique_id, .. }
            | Self::SwitchUpdated { unique_id }
            | Self::SwitchRemoved { unique_id } => unique_id,
        }
    }

    /// Returns `true` if this is a removal event.
    #[must_use]
    pub fn is_removal(&self) -> bool {
        matches!(self, Self::SwitchRemoved { .. })
    }

    /// Creates a switch-added event.
    #[must_use]
    pub fn switch_added(unique_id: UniqueId, instance_num: u32) -> Self {
        Self::SwitchAdded {
            unique_id,
            instance_num,
        }
    }

    /// Creates a switch-updated event.
    #[must_use]
    pub fn switch_updated(unique_id: UniqueId) -> Self {
        Self::SwitchUpdated { unique_id }
    }

    /// Creates a switch-removed event.
    #[must_use]
    pub fn switch_removed(unique_id: UniqueId) -> Self {
        Self::SwitchRemoved { unique_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComponentKind;

    fn sample_id() -> UniqueId {
        UniqueId::for_switch("server", 1, ComponentKind::Smoothing)
    }

    #[test]
    fn unique_id_extraction() {
        let id = sample_id();

        assert_eq!(EntityEvent::switch_added(id.clone(), 1).unique_id(), &id);
        assert_eq!(EntityEvent::switch_updated(id.clone()).unique_id(), &id);
        assert_eq!(EntityEvent::switch_removed(id.clone()).unique_id(), &id);
    }

    #[test]
    fn removal_check() {
        let id = sample_id();

        assert!(EntityEvent::switch_removed(id.clone()).is_removal());
        assert!(!EntityEvent::switch_added(id.clone(), 1).is_removal());
        assert!(!EntityEvent::switch_updated(id).is_removal());
    }
}
