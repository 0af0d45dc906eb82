//! Type descriptions standing in for runtime reflection.
//!
//! The label pipeline needs to ask a type which constants it declares and which members it
//! exposes. Rust answers neither question at runtime, so types are described explicitly:
//!
//! - [`TypeDescriptor`] - Immutable description of one type, shared as [`TypeDescriptorRc`]
//! - [`TypeBuilder`] - Fluent, validating construction of descriptors
//! - [`Reflect`] - Rust types that carry their own descriptor, see [`crate::declare_constants`]
//! - [`ConstValue`] / [`ConstSymbol`] - Declared constants and their values
//! - [`StaticMember`] / [`Method`] - Members consulted for label overrides and introspection
//! - [`LabelSettings`] - Per-type configuration of accessor names and override lookup
//!
//! # Examples
//!
//! ```rust
//! use constlabel::metadata::{MemberFlags, TypeBuilder};
//!
//! let invoice = TypeBuilder::new("Invoice")
//!     .constant("STATE_OPEN", 1)
//!     .constant("STATE_SETTLED", 2)
//!     .method("settle", MemberFlags::PUBLIC)
//!     .build()?;
//!
//! assert_eq!(invoice.constants().len(), 2);
//! assert_eq!(invoice.methods(Some(MemberFlags::PUBLIC), None), vec!["settle"]);
//! # Ok::<(), constlabel::Error>(())
//! ```

mod builder;
mod members;
mod settings;
mod typedesc;
mod value;

pub use builder::TypeBuilder;
pub use members::{LabelMap, LabelTable, MemberFlags, MemberValue, Method, Provider, StaticMember};
pub use settings::{LabelSettings, OverrideSource, DEFAULT_ACCESSOR_PREFIX, DEFAULT_OVERRIDE_MEMBER};
pub use typedesc::{ConstSymbol, Reflect, TypeDescriptor, TypeDescriptorRc};
pub use value::{ConstKind, ConstValue};
