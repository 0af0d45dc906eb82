//! Per-type label overrides.
//!
//! A type can correct derived labels, or add labels for values it has no constant for, through a
//! member holding a [`crate::metadata::LabelTable`]. Its name and kind come from the type's
//! [`crate::metadata::LabelSettings`]: by default a static data member called
//! `constMagicLabels`, keyed by group suffix.

use tracing::debug;

use crate::metadata::{LabelMap, MemberValue, OverrideSource, TypeDescriptor};

/// Merges a type's label overrides into derived labels
#[derive(Debug, Default, Clone, Copy)]
pub struct OverrideResolver;

impl OverrideResolver {
    /// Apply the overrides `owner` declares for the group `suffix`
    ///
    /// Without an override member, with a member that does not hold a label table, or with a
    /// table lacking `suffix`, `derived` comes back unchanged. Otherwise every override entry
    /// replaces or extends the derived ones.
    ///
    /// ## Arguments
    /// * `owner`   - The type declaring the group
    /// * `suffix`  - The group's CamelCase name, e.g. `GroupTest`
    /// * `derived` - Labels produced by [`crate::labels::format_labels`]
    #[must_use]
    pub fn resolve(&self, owner: &TypeDescriptor, suffix: &str, mut derived: LabelMap) -> LabelMap {
        let Some(source) = Self::load(owner) else {
            return derived;
        };

        let Some(overrides) = source.as_labels().and_then(|table| table.get(suffix)) else {
            return derived;
        };

        debug!(
            type_name = %owner.name(),
            group = %suffix,
            overrides = overrides.len(),
            "applying label overrides"
        );

        derived.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        derived
    }

    /// Read the override member selected by the owner's settings
    fn load(owner: &TypeDescriptor) -> Option<MemberValue> {
        let settings = owner.settings();
        let member = settings.override_member();

        match settings.override_source() {
            OverrideSource::StaticData => owner
                .static_member(member)
                .map(|member| member.value.clone()),
            OverrideSource::Provider => owner.method(member).and_then(|method| method.invoke()),
        }
    }
}
