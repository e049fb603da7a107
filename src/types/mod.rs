// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for `HyperHDR` component control.
//!
//! # Types
//!
//! - [`ComponentKind`] - The closed set of toggleable processing components
//! - [`MANAGED_COMPONENTS`] - The fixed set managed as toggle entities

mod component;

pub use component::{ComponentKind, MANAGED_COMPONENTS};
