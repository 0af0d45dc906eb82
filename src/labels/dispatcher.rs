//! Convention-based dispatch of label accessors.
//!
//! The [`Dispatcher`] is the entry point of the label pipeline. It maps an accessor name such as
//! `constGroupTest` onto the constant group `GROUP_TEST_`, runs the group through the
//! [`SymbolScanner`], [`format_labels`] and the [`OverrideResolver`], memoizes the result in a
//! [`GroupCache`] and answers with either the full mapping or a single label.
//!
//! # Fallback Chain
//!
//! Accessors that do not follow the convention ([`Error::UnrecognizedAccessor`]) or name an empty
//! group ([`Error::NoConstantsFound`]) are handed to the registered [`FallbackHandler`]s, in
//! registration order. The first handler that resolves the call wins. A handler signals "not mine
//! either" by returning an error for which [`Error::is_convention_miss`] holds; any other error
//! ends the chain and reaches the caller untouched. When nobody resolves the call the dispatcher
//! reports [`Error::UndefinedOperation`].
//!
//! # Examples
//!
//! ```rust
//! use constlabel::{labels::Dispatcher, metadata::TypeBuilder};
//!
//! let simple = TypeBuilder::new("Simple")
//!     .constant("GROUP_TEST_ONEWORD", 1)
//!     .constant("GROUP_TEST_TWO_WORDS", 2)
//!     .build()?;
//!
//! let dispatcher = Dispatcher::new();
//! let labels = dispatcher.labels(&simple, "constGroupTest")?;
//! assert_eq!(labels.len(), 2);
//!
//! assert_eq!(dispatcher.label(&simple, "constGroupTest", 2)?, "Two Words");
//! # Ok::<(), constlabel::Error>(())
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::{
    labels::{format_labels, GroupCache, GroupKey, OverrideResolver, SymbolScanner},
    metadata::{ConstValue, LabelMap, Reflect, TypeDescriptor},
    Error::{self, InvalidLookupValue, NoConstantsFound, UndefinedOperation, UnrecognizedAccessor},
    Result,
};

/// Outcome of a resolved accessor
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The full value to label mapping of a group
    Labels(Arc<LabelMap>),
    /// The label of a single value
    Label(String),
}

impl Resolution {
    /// Take the full mapping, if this is one
    #[must_use]
    pub fn into_labels(self) -> Option<Arc<LabelMap>> {
        match self {
            Resolution::Labels(labels) => Some(labels),
            Resolution::Label(_) => None,
        }
    }

    /// Take the single label, if this is one
    #[must_use]
    pub fn into_label(self) -> Option<String> {
        match self {
            Resolution::Label(label) => Some(label),
            Resolution::Labels(_) => None,
        }
    }
}

/// A handler consulted for accessors the label convention cannot resolve
///
/// Closures with a matching signature are handlers as well.
pub trait FallbackHandler: Send + Sync {
    /// Try to resolve `accessor` on `owner`
    ///
    /// # Errors
    /// Return an error satisfying [`Error::is_convention_miss`] to pass the call on; any other
    /// error is reported to the caller as is.
    fn dispatch(
        &self,
        owner: &TypeDescriptor,
        accessor: &str,
        args: &[ConstValue],
    ) -> Result<Resolution>;
}

impl<F> FallbackHandler for F
where
    F: Fn(&TypeDescriptor, &str, &[ConstValue]) -> Result<Resolution> + Send + Sync,
{
    fn dispatch(
        &self,
        owner: &TypeDescriptor,
        accessor: &str,
        args: &[ConstValue],
    ) -> Result<Resolution> {
        self(owner, accessor, args)
    }
}

/// Derive the group prefix named by an accessor suffix
///
/// An underscore goes in front of every uppercase letter that does not follow another uppercase
/// letter; the result is uppercased, stripped of outer underscores and closed with `_`.
///
/// ```rust
/// use constlabel::labels::group_prefix;
///
/// assert_eq!(group_prefix("GroupTest"), "GROUP_TEST_");
/// assert_eq!(group_prefix("HTTPStatus"), "HTTPSTATUS_");
/// ```
#[must_use]
pub fn group_prefix(suffix: &str) -> String {
    let mut snake = String::with_capacity(suffix.len() + 4);
    let mut previous: Option<char> = None;
    for c in suffix.chars() {
        if c.is_ascii_uppercase() && !previous.is_some_and(|p| p.is_ascii_uppercase()) {
            snake.push('_');
        }
        snake.push(c);
        previous = Some(c);
    }

    let mut prefix = snake.trim_matches('_').to_ascii_uppercase();
    prefix.push('_');
    prefix
}

/// Resolves label accessors against described types
pub struct Dispatcher {
    scanner: SymbolScanner,
    overrides: OverrideResolver,
    cache: Arc<GroupCache>,
    fallbacks: Vec<Arc<dyn FallbackHandler>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::new()
    }
}

impl Dispatcher {
    /// Create a dispatcher backed by the process-wide [`GroupCache`]
    #[must_use]
    pub fn new() -> Self {
        Dispatcher::with_cache(GroupCache::global())
    }

    /// Create a dispatcher backed by its own cache
    ///
    /// ## Arguments
    /// * `cache` - The cache to memoize mappings in
    #[must_use]
    pub fn with_cache(cache: Arc<GroupCache>) -> Self {
        Dispatcher {
            scanner: SymbolScanner,
            overrides: OverrideResolver,
            cache,
            fallbacks: Vec::new(),
        }
    }

    /// Append a handler to the fallback chain
    #[must_use]
    pub fn with_fallback<H>(mut self, handler: H) -> Self
    where
        H: FallbackHandler + 'static,
    {
        self.fallbacks.push(Arc::new(handler));
        self
    }

    /// The cache this dispatcher memoizes mappings in
    #[must_use]
    pub fn cache(&self) -> &Arc<GroupCache> {
        &self.cache
    }

    /// Resolve `accessor` on `owner`
    ///
    /// Without arguments the full mapping of the group is returned, with one argument the label
    /// of that value. Arguments beyond the first are ignored.
    ///
    /// ## Arguments
    /// * `owner`    - The type declaring the constants
    /// * `accessor` - Accessor name, e.g. `constStatus`
    /// * `args`     - Zero or one constant value
    ///
    /// # Errors
    /// - [`Error::InvalidLookupValue`] if the value is not part of the group
    /// - [`Error::UndefinedOperation`] if neither the convention nor a fallback resolves the call
    /// - whatever non-convention error a fallback handler raises
    pub fn resolve(
        &self,
        owner: &TypeDescriptor,
        accessor: &str,
        args: &[ConstValue],
    ) -> Result<Resolution> {
        match self.convention(owner, accessor, args.first()) {
            Err(miss) if miss.is_convention_miss() => {
                debug!(
                    type_name = %owner.name(),
                    accessor = %accessor,
                    reason = %miss,
                    "accessor handed to fallback chain"
                );
                self.fallback(owner, accessor, args)
            }
            result => result,
        }
    }

    /// Resolve the full mapping of the group named by `accessor`
    ///
    /// # Errors
    /// See [`Dispatcher::resolve`]. A fallback answering with a single label is reported as
    /// [`Error::Unexpected`].
    pub fn labels(&self, owner: &TypeDescriptor, accessor: &str) -> Result<Arc<LabelMap>> {
        self.resolve(owner, accessor, &[])?.into_labels().ok_or_else(|| {
            Error::unexpected(format!(
                "{}::{}() resolved to a single label",
                owner.name(),
                accessor
            ))
        })
    }

    /// Resolve the label of `value` in the group named by `accessor`
    ///
    /// # Errors
    /// See [`Dispatcher::resolve`]. A fallback answering with a full mapping is reported as
    /// [`Error::Unexpected`].
    pub fn label(
        &self,
        owner: &TypeDescriptor,
        accessor: &str,
        value: impl Into<ConstValue>,
    ) -> Result<String> {
        let value = value.into();
        self.resolve(owner, accessor, std::slice::from_ref(&value))?
            .into_label()
            .ok_or_else(|| {
                Error::unexpected(format!(
                    "{}::{}({}) resolved to a full mapping",
                    owner.name(),
                    accessor,
                    value
                ))
            })
    }

    /// [`Dispatcher::labels`] for a type implementing [`Reflect`]
    ///
    /// # Errors
    /// See [`Dispatcher::labels`]. Errors describing `T` itself are returned as well.
    pub fn labels_of<T: Reflect>(&self, accessor: &str) -> Result<Arc<LabelMap>> {
        let owner = T::descriptor()?;
        self.labels(&owner, accessor)
    }

    /// [`Dispatcher::label`] for a type implementing [`Reflect`]
    ///
    /// # Errors
    /// See [`Dispatcher::label`]. Errors describing `T` itself are returned as well.
    pub fn label_of<T: Reflect>(
        &self,
        accessor: &str,
        value: impl Into<ConstValue>,
    ) -> Result<String> {
        let owner = T::descriptor()?;
        self.label(&owner, accessor, value)
    }

    /// Resolve through the label convention only
    fn convention(
        &self,
        owner: &TypeDescriptor,
        accessor: &str,
        value: Option<&ConstValue>,
    ) -> Result<Resolution> {
        let accessor_prefix = owner.settings().accessor_prefix();
        let Some(suffix) = accessor.strip_prefix(accessor_prefix) else {
            return Err(UnrecognizedAccessor {
                type_name: owner.name().to_string(),
                accessor: accessor.to_string(),
                prefix: accessor_prefix.to_string(),
            });
        };
        let prefix = group_prefix(suffix);

        let Some(value) = value else {
            let key = GroupKey::new(owner.id(), prefix.as_str());
            if let Some(labels) = self.cache.get(&key) {
                debug!(type_name = %owner.name(), prefix = %prefix, "label cache hit");
                return Ok(Resolution::Labels(labels));
            }

            let labels = self.build(owner, accessor, suffix, &prefix)?;
            debug!(
                type_name = %owner.name(),
                prefix = %prefix,
                labels = labels.len(),
                "label cache populated"
            );
            return Ok(Resolution::Labels(self.cache.insert(key, labels)));
        };

        let mut labels = self.build(owner, accessor, suffix, &prefix)?;
        labels
            .remove(value)
            .map(Resolution::Label)
            .ok_or_else(|| InvalidLookupValue {
                type_name: owner.name().to_string(),
                accessor: accessor.to_string(),
                value: value.clone(),
            })
    }

    /// Scan, format and override the labels of one group
    fn build(
        &self,
        owner: &TypeDescriptor,
        accessor: &str,
        suffix: &str,
        prefix: &str,
    ) -> Result<LabelMap> {
        let symbols = self.scanner.scan(owner, prefix);
        if symbols.is_empty() {
            return Err(NoConstantsFound {
                type_name: owner.name().to_string(),
                accessor: accessor.to_string(),
                prefix: prefix.to_string(),
            });
        }

        let derived = format_labels(prefix, &symbols);
        Ok(self.overrides.resolve(owner, suffix, derived))
    }

    /// Walk the fallback chain
    fn fallback(
        &self,
        owner: &TypeDescriptor,
        accessor: &str,
        args: &[ConstValue],
    ) -> Result<Resolution> {
        for handler in &self.fallbacks {
            match handler.dispatch(owner, accessor, args) {
                Err(miss) if miss.is_convention_miss() => {}
                result => return result,
            }
        }

        Err(UndefinedOperation {
            type_name: owner.name().to_string(),
            accessor: accessor.to_string(),
        })
    }
}
