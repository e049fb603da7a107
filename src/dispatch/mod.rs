// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Signal dispatch between the client layer, the lifecycle manager, and
//! toggle entities.
//!
//! The [`Dispatcher`] is an observer registry with explicit, symmetric
//! attach/detach: entities connect callbacks when attached and must
//! disconnect them when detaching. Two signal classes flow through it:
//!
//! - [`Signal::ComponentsUpdated`] - client-scoped refresh trigger
//! - [`Signal::EntityRemove`] - per-entity teardown, keyed by unique ID
//!
//! # Examples
//!
//! ```
//! use hyperhdr_lib::dispatch::{Dispatcher, Signal};
//!
//! let dispatcher = Dispatcher::new();
//!
//! let id = dispatcher.connect(Signal::components_updated(0), || {
//!     println!("instance 0 components refreshed");
//! });
//!
//! dispatcher.send(&Signal::components_updated(0));
//! dispatcher.disconnect(id);
//! ```

mod dispatcher;
mod signal;

pub use dispatcher::{Dispatcher, SubscriptionId};
pub use signal::Signal;
