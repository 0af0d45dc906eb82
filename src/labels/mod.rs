//! The label pipeline.
//!
//! Labels flow through five stages, leaves first:
//!
//! - [`SymbolScanner`] - Finds the constants of a type sharing a group prefix
//! - [`format_labels`] - Derives a human-readable label from each constant name
//! - [`OverrideResolver`] - Merges the type's own label overrides
//! - [`GroupCache`] - Memoizes finished mappings per type and group
//! - [`Dispatcher`] - Maps accessor names to groups and drives the stages above
//!
//! Only the [`Dispatcher`] is needed to resolve labels; the other stages are public for callers
//! that want to reuse a single step, e.g. formatting names without a described type.

mod cache;
mod dispatcher;
mod formatter;
mod overrides;
mod scanner;

pub use cache::{GroupCache, GroupKey};
pub use dispatcher::{group_prefix, Dispatcher, FallbackHandler, Resolution};
pub use formatter::{format_label, format_labels};
pub use overrides::OverrideResolver;
pub use scanner::SymbolScanner;
