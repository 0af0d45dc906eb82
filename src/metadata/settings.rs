//! Per-type label settings.
//!
//! Every [`crate::metadata::TypeDescriptor`] carries one [`LabelSettings`]. They decide which
//! accessor names the [`crate::labels::Dispatcher`] recognizes for the type, and where the
//! [`crate::labels::OverrideResolver`] looks for label overrides.

use strum::{Display, EnumString};

/// Default prefix of accessor names, as in `constStatus`
pub const DEFAULT_ACCESSOR_PREFIX: &str = "const";

/// Default name of the member holding label overrides
pub const DEFAULT_OVERRIDE_MEMBER: &str = "constMagicLabels";

/// Selects which kind of member supplies label overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
pub enum OverrideSource {
    /// A static data member holding a [`crate::metadata::LabelTable`]
    #[default]
    StaticData,
    /// A zero-argument method producing a [`crate::metadata::LabelTable`]
    Provider,
}

/// Label settings of a single type
///
/// ```rust
/// use constlabel::metadata::{LabelSettings, OverrideSource};
///
/// let settings = LabelSettings::default()
///     .with_accessor_prefix("get")
///     .with_override_member("customLabels")
///     .with_override_source(OverrideSource::Provider);
///
/// assert_eq!(settings.accessor_prefix(), "get");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSettings {
    accessor_prefix: String,
    override_member: String,
    override_source: OverrideSource,
}

impl Default for LabelSettings {
    fn default() -> Self {
        LabelSettings {
            accessor_prefix: DEFAULT_ACCESSOR_PREFIX.to_string(),
            override_member: DEFAULT_OVERRIDE_MEMBER.to_string(),
            override_source: OverrideSource::default(),
        }
    }
}

impl LabelSettings {
    /// Replace the accessor prefix
    ///
    /// ## Arguments
    /// * `prefix` - The new prefix, e.g. `get` for accessors like `getStatus`
    #[must_use]
    pub fn with_accessor_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.accessor_prefix = prefix.into();
        self
    }

    /// Replace the name of the member holding label overrides
    #[must_use]
    pub fn with_override_member(mut self, member: impl Into<String>) -> Self {
        self.override_member = member.into();
        self
    }

    /// Select the kind of member holding label overrides
    #[must_use]
    pub fn with_override_source(mut self, source: OverrideSource) -> Self {
        self.override_source = source;
        self
    }

    /// The prefix every accessor name must start with
    #[must_use]
    pub fn accessor_prefix(&self) -> &str {
        &self.accessor_prefix
    }

    /// The name of the member holding label overrides
    #[must_use]
    pub fn override_member(&self) -> &str {
        &self.override_member
    }

    /// The kind of member holding label overrides
    #[must_use]
    pub fn override_source(&self) -> OverrideSource {
        self.override_source
    }
}
