// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # constlabel
//!
//! Human-readable labels for groups of symbolic constants, resolved by naming convention.
//!
//! A type declares related constants sharing an uppercase prefix, such as `STATUS_DELETED` and
//! `STATUS_ACTIVE`. Calling the accessor `constStatus` yields the whole group as a value to label
//! mapping (`0 => "Deleted"`, `100 => "Active"`), and calling it with a value yields that value's
//! label. Nobody has to maintain the label tables by hand.
//!
//! ## Features
//!
//! - **Convention-based dispatch** - accessor names map onto constant groups, with a configurable
//!   accessor prefix per type
//! - **Label derivation** - `TWO_WORDS` becomes `Two Words`, `camelCase` becomes `camel Case`
//! - **Overrides** - per-type label corrections and additions, from static data or a provider
//! - **Memoization** - finished mappings are cached per type and group for the process lifetime
//! - **Fallback chain** - accessors outside the convention go to handlers supplied by the embedder
//!
//! ## Quick Start
//!
//! ```rust
//! use constlabel::prelude::*;
//!
//! struct User;
//!
//! declare_constants! {
//!     impl User {
//!         const STATUS_DELETED: i64 = 0;
//!         const STATUS_ACTIVE: i64 = 100;
//!     }
//! }
//!
//! let dispatcher = Dispatcher::new();
//!
//! let statuses = dispatcher.labels_of::<User>("constStatus")?;
//! assert_eq!(statuses[&ConstValue::Integer(0)], "Deleted");
//!
//! let label = dispatcher.label_of::<User>("constStatus", User::STATUS_ACTIVE)?;
//! assert_eq!(label, "Active");
//! # Ok::<(), constlabel::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`] - Type descriptions: constants, members, label settings
//! - [`labels`] - The label pipeline: scanner, formatter, overrides, cache, dispatcher
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! ```rust
//! use constlabel::{labels::Dispatcher, metadata::TypeBuilder, Error};
//!
//! let user = TypeBuilder::new("User").constant("STATUS_ACTIVE", 100).build()?;
//!
//! match Dispatcher::new().resolve(&user, "fetchStatus", &[]) {
//!     Err(Error::UndefinedOperation { accessor, .. }) => assert_eq!(accessor, "fetchStatus"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! # Ok::<(), constlabel::Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (cache population, cache hits, fallback hand-offs) and
//! installs no subscriber of its own.

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types, traits and macros.
///
/// # Example
///
/// ```rust
/// use constlabel::prelude::*;
///
/// let order = TypeBuilder::new("Order").constant("STATE_OPEN", 1).build()?;
/// assert_eq!(Dispatcher::new().label(&order, "constState", 1)?, "Open");
/// # Ok::<(), constlabel::Error>(())
/// ```
pub mod prelude;

/// Descriptions of types and their declared constants.
///
/// # Key Types
///
/// - [`metadata::TypeDescriptor`] - What the label pipeline knows about a type
/// - [`metadata::TypeBuilder`] - Validating construction of descriptors
/// - [`metadata::Reflect`] - Rust types carrying their own descriptor
/// - [`metadata::LabelSettings`] - Accessor prefix and override lookup of a type
pub mod metadata;

/// Resolution of label accessors.
///
/// # Key Types
///
/// - [`labels::Dispatcher`] - The entry point: `resolve(owner, accessor, args)`
/// - [`labels::FallbackHandler`] - Handlers for accessors outside the convention
/// - [`labels::GroupCache`] - Memoized mappings, process-wide by default
pub mod labels;

/// `constlabel` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `constlabel` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;
