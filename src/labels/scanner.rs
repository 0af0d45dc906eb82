//! Discovery of the constants that make up a group.

use tracing::trace;

use crate::metadata::{ConstSymbol, TypeDescriptor};

/// Finds the constants of a type whose name starts with a group prefix
///
/// Only constants declared directly on the described type are considered. The scanner keeps no
/// state; memoization happens one layer up in [`crate::labels::GroupCache`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SymbolScanner;

impl SymbolScanner {
    /// Collect the constants of `owner` whose name starts with `prefix`
    ///
    /// The comparison is case-sensitive and the result keeps declaration order. An empty result
    /// is not an error here; the caller decides what a group without members means.
    ///
    /// ## Arguments
    /// * `owner`  - The type to scan
    /// * `prefix` - Leading part of the constant names, e.g. `STATUS_`
    #[must_use]
    pub fn scan(&self, owner: &TypeDescriptor, prefix: &str) -> Vec<ConstSymbol> {
        let symbols: Vec<ConstSymbol> = owner
            .constants()
            .iter()
            .filter(|symbol| symbol.name.starts_with(prefix))
            .cloned()
            .collect();

        trace!(
            type_name = %owner.name(),
            prefix = %prefix,
            found = symbols.len(),
            "scanned constants"
        );

        symbols
    }
}
