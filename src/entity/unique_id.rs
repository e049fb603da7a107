// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Deterministic entity identifiers and display names.
//!
//! Unique identifiers are derived from server identity, instance number,
//! and component kind. The derivation is stable across restarts so any
//! external state keyed by the identifier survives an instance being
//! removed and re-added.

use std::fmt;

use crate::types::ComponentKind;

/// Base type name slugged into every switch unique ID.
const SWITCH_TYPE_BASE: &str = "component_switch";

/// Suffix inserted between instance name and component label.
const NAME_SUFFIX: &str = "Component";

/// Stable unique identifier for one toggle entity.
///
/// Used as the primary key by the host presentation layer and as the
/// routing key of per-entity removal signals.
///
/// # Examples
///
/// ```
/// use hyperhdr_lib::entity::UniqueId;
/// use hyperhdr_lib::types::ComponentKind;
///
/// let id = UniqueId::for_switch("f0ab", 0, ComponentKind::LedDevice);
/// assert_eq!(id.as_str(), "f0ab_0_component_switch_led_device");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniqueId(String);

impl UniqueId {
    /// Derives the unique identifier for one (server, instance, component)
    /// switch.
    ///
    /// Deterministic: equal inputs always yield an equal identifier, and
    /// distinct instance numbers or kinds never collide.
    #[must_use]
    pub fn for_switch(server_id: &str, instance_num: u32, kind: ComponentKind) -> Self {
        let slug = slugify(&format!("{SWITCH_TYPE_BASE} {}", kind.label()));
        Self(format!("{server_id}_{instance_num}_{slug}"))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UniqueId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derives the device identifier grouping all of an instance's entities.
#[must_use]
pub fn switch_device_id(server_id: &str, instance_num: u32) -> String {
    format!("{server_id}_{instance_num}")
}

/// Derives the display name for one component switch.
#[must_use]
pub fn switch_display_name(instance_name: &str, kind: ComponentKind) -> String {
    format!("{instance_name} {NAME_SUFFIX} {}", kind.label())
}

/// Lowercases and replaces every non-alphanumeric run with one underscore.
fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.ends_with('_') && !slug.is_empty() {
            slug.push('_');
        }
    }

    slug.trim_end_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_id_is_deterministic() {
        let a = UniqueId::for_switch("server", 1, ComponentKind::Smoothing);
        let b = UniqueId::for_switch("server", 1, ComponentKind::Smoothing);
        assert_eq!(a, b);
    }

    #[test]
    fn unique_ids_never_collide_across_tuples() {
        use std::collections::HashSet;

        let mut ids = HashSet::new();
        for server_id in ["alpha", "beta"] {
            for instance_num in 0..3 {
                for kind in crate::types::MANAGED_COMPONENTS {
                    assert!(ids.insert(UniqueId::for_switch(server_id, instance_num, kind)));
                }
            }
        }
        assert_eq!(ids.len(), 2 * 3 * 9);
    }

    #[test]
    fn unique_id_format() {
        let id = UniqueId::for_switch("f0ab", 2, ComponentKind::BlackBorder);
        assert_eq!(id.as_str(), "f0ab_2_component_switch_blackborder_detection");
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn device_id_groups_by_instance() {
        assert_eq!(switch_device_id("f0ab", 0), "f0ab_0");
        assert_ne!(switch_device_id("f0ab", 0), switch_device_id("f0ab", 1));
    }

    #[test]
    fn display_name_includes_instance_and_label() {
        let name = switch_display_name("Living Room", ComponentKind::LedDevice);
        assert_eq!(name, "Living Room Component LED device");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("LED  device"), "led_device");
        assert_eq!(slugify(" HDR tone-mapping "), "hdr_tone_mapping");
        assert_eq!(slugify(""), "");
    }
}
