//! Builder for type descriptors.
//!
//! This module provides the [`TypeBuilder`] struct, which offers a fluent API for describing a
//! type: its constants, static data members, methods, and label settings. [`TypeBuilder::build`]
//! validates the description, so inconsistencies surface at setup time rather than on the first
//! label lookup.
//!
//! # Example
//!
//! ```rust
//! use constlabel::metadata::{ConstValue, LabelMap, LabelTable, TypeBuilder};
//!
//! let overrides = LabelTable::from([(
//!     "Status".to_string(),
//!     LabelMap::from([(ConstValue::Integer(0), "Removed".to_string())]),
//! )]);
//!
//! let user = TypeBuilder::new("User")
//!     .constant("STATUS_DELETED", 0)
//!     .constant("STATUS_ACTIVE", 100)
//!     .static_data("constMagicLabels", overrides)
//!     .build()?;
//!
//! assert_eq!(user.constants().len(), 2);
//! # Ok::<(), constlabel::Error>(())
//! ```

use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use crate::{
    metadata::{
        ConstSymbol, ConstValue, LabelSettings, MemberFlags, MemberValue, Method,
        OverrideSource, StaticMember, TypeDescriptor, TypeDescriptorRc,
    },
    Error::DuplicateSymbol,
    Result,
};

/// Source of descriptor ids, one per successful build
static NEXT_DESCRIPTOR_ID: AtomicU64 = AtomicU64::new(1);

/// Provides a fluent API for building type descriptors
pub struct TypeBuilder {
    /// Name of the described type
    name: String,
    /// Constants in declaration order
    constants: Vec<ConstSymbol>,
    /// Static data members
    statics: Vec<StaticMember>,
    /// Methods, with or without a body
    methods: Vec<Method>,
    /// Label settings, defaults unless replaced
    settings: LabelSettings,
}

impl TypeBuilder {
    /// Start describing a type
    ///
    /// ## Arguments
    /// * 'name' - Name of the type, as shown in errors and logs
    pub fn new(name: impl Into<String>) -> Self {
        TypeBuilder {
            name: name.into(),
            constants: Vec::new(),
            statics: Vec::new(),
            methods: Vec::new(),
            settings: LabelSettings::default(),
        }
    }

    /// Declare a constant
    ///
    /// ## Arguments
    /// * 'name'  - Symbolic name of the constant, e.g. `STATUS_ACTIVE`
    /// * 'value' - The constant's value
    #[must_use]
    pub fn constant(mut self, name: impl Into<String>, value: impl Into<ConstValue>) -> Self {
        self.constants.push(ConstSymbol::new(name, value));
        self
    }

    /// Declare several constants at once, keeping their order
    #[must_use]
    pub fn constants<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = ConstSymbol>,
    {
        self.constants.extend(symbols);
        self
    }

    /// Declare a public static data member
    ///
    /// ## Arguments
    /// * 'name'  - Member name
    /// * 'value' - Stored value, usually a [`crate::metadata::LabelTable`]
    #[must_use]
    pub fn static_data(mut self, name: impl Into<String>, value: impl Into<MemberValue>) -> Self {
        self.statics.push(StaticMember {
            name: name.into(),
            flags: MemberFlags::PUBLIC | MemberFlags::STATIC,
            value: value.into(),
        });
        self
    }

    /// Declare a static zero-argument method with a body
    ///
    /// ## Arguments
    /// * 'name'     - Method name
    /// * 'provider' - The method body
    #[must_use]
    pub fn provider<F>(mut self, name: impl Into<String>, provider: F) -> Self
    where
        F: Fn() -> MemberValue + Send + Sync + 'static,
    {
        self.methods.push(Method {
            name: name.into(),
            flags: MemberFlags::PUBLIC | MemberFlags::STATIC,
            provider: Some(Arc::new(provider)),
        });
        self
    }

    /// Declare a method without a body, for introspection only
    #[must_use]
    pub fn method(mut self, name: impl Into<String>, flags: MemberFlags) -> Self {
        self.methods.push(Method {
            name: name.into(),
            flags,
            provider: None,
        });
        self
    }

    /// Replace the label settings
    #[must_use]
    pub fn settings(mut self, settings: LabelSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Validate the description and produce the shared descriptor
    ///
    /// # Errors
    /// Returns [`crate::Error::DuplicateSymbol`] if a constant name is declared twice, and
    /// [`crate::Error::InvalidSettings`] if the label settings do not fit the declared members.
    pub fn build(self) -> Result<TypeDescriptorRc> {
        self.validate_symbols()?;
        self.validate_settings()?;

        Ok(Arc::new(TypeDescriptor {
            id: NEXT_DESCRIPTOR_ID.fetch_add(1, Ordering::Relaxed),
            name: self.name,
            constants: self.constants,
            statics: self.statics,
            methods: self.methods,
            settings: self.settings,
        }))
    }

    fn validate_symbols(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.constants.len());
        for symbol in &self.constants {
            if !seen.insert(symbol.name.as_str()) {
                return Err(DuplicateSymbol {
                    type_name: self.name.clone(),
                    name: symbol.name.clone(),
                });
            }
        }

        Ok(())
    }

    fn validate_settings(&self) -> Result<()> {
        if self.settings.accessor_prefix().is_empty() {
            return Err(settings_error!(
                "{} has an empty accessor prefix",
                self.name
            ));
        }

        let member = self.settings.override_member();
        let static_member = self.statics.iter().any(|s| s.name == member);
        let method = self.methods.iter().find(|m| m.name == member);

        match self.settings.override_source() {
            OverrideSource::StaticData => {
                if !static_member && method.is_some() {
                    return Err(settings_error!(
                        "{}::{} is a method, but overrides are read from static data",
                        self.name,
                        member
                    ));
                }
            }
            OverrideSource::Provider => match method {
                Some(method) if method.provider.is_none() => {
                    return Err(settings_error!(
                        "{}::{}() has no body to provide overrides",
                        self.name,
                        member
                    ));
                }
                None if static_member => {
                    return Err(settings_error!(
                        "{}::{} is static data, but overrides are read from a provider",
                        self.name,
                        member
                    ));
                }
                _ => {}
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        labels::{Dispatcher, GroupCache},
        metadata::{LabelMap, LabelTable},
        Error,
    };

    fn overrides() -> LabelTable {
        LabelTable::from([(
            "GroupTest".to_string(),
            LabelMap::from([(ConstValue::Integer(3), "COMP-lex-LaBEL".to_string())]),
        )])
    }

    #[test]
    fn build_keeps_declaration_order() {
        let simple = TypeBuilder::new("Simple")
            .constant("GROUP_TEST_ONEWORD", 1)
            .constants([
                ConstSymbol::new("GROUP_TEST_TWO_WORDS", 2),
                ConstSymbol::new("GROUP_TEST_COM_plex_LAbeL", 3),
            ])
            .build()
            .unwrap();

        let names: Vec<_> = simple.constants().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["GROUP_TEST_ONEWORD", "GROUP_TEST_TWO_WORDS", "GROUP_TEST_COM_plex_LAbeL"]
        );
        assert_eq!(simple.settings(), &LabelSettings::default());
    }

    #[test]
    fn build_duplicate_symbol() {
        let result = TypeBuilder::new("Simple")
            .constant("GROUP_TEST_ONEWORD", 1)
            .constant("GROUP_TEST_ONEWORD", 2)
            .build();

        assert!(matches!(result, Err(Error::DuplicateSymbol { name, .. }) if name == "GROUP_TEST_ONEWORD"));
    }

    #[test]
    fn build_assigns_distinct_ids() {
        let first = TypeBuilder::new("Widget").build().unwrap();
        let second = TypeBuilder::new("Widget").build().unwrap();

        assert_eq!(first.name(), second.name());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn build_static_members_are_static() {
        let simple = TypeBuilder::new("Simple")
            .static_data("constMagicLabels", overrides())
            .build()
            .unwrap();

        let member = simple.static_member("constMagicLabels").unwrap();
        assert!(member.flags.contains(MemberFlags::STATIC));
        assert_eq!(member.value.as_labels(), Some(&overrides()));
    }

    #[test]
    fn build_rejects_empty_accessor_prefix() {
        let result = TypeBuilder::new("Simple")
            .settings(LabelSettings::default().with_accessor_prefix(""))
            .build();

        assert!(matches!(result, Err(Error::InvalidSettings(_))));
    }

    #[test]
    fn build_rejects_mismatched_override_source() {
        let method_only = TypeBuilder::new("Simple")
            .provider("constMagicLabels", || MemberValue::Labels(overrides()))
            .build();
        assert!(matches!(method_only, Err(Error::InvalidSettings(_))));

        let static_only = TypeBuilder::new("Simple")
            .static_data("constMagicLabels", overrides())
            .settings(LabelSettings::default().with_override_source(OverrideSource::Provider))
            .build();
        assert!(matches!(static_only, Err(Error::InvalidSettings(_))));

        let no_body = TypeBuilder::new("Simple")
            .method("constMagicLabels", MemberFlags::STATIC)
            .settings(LabelSettings::default().with_override_source(OverrideSource::Provider))
            .build();
        assert!(matches!(no_body, Err(Error::InvalidSettings(_))));
    }

    #[test]
    fn build_accepts_matching_override_source() {
        let provider = TypeBuilder::new("Simple")
            .provider("constMagicLabels", || MemberValue::Labels(overrides()))
            .settings(LabelSettings::default().with_override_source(OverrideSource::Provider))
            .build();
        assert!(provider.is_ok());

        // both present: the selected kind is used, the other member is left alone
        let both = TypeBuilder::new("Simple")
            .constant("GROUP_TEST_COM_plex_LAbeL", 3)
            .static_data("constMagicLabels", overrides())
            .provider("constMagicLabels", || {
                MemberValue::Labels(LabelTable::from([(
                    "GroupTest".to_string(),
                    LabelMap::from([(ConstValue::Integer(3), "From provider".to_string())]),
                )]))
            })
            .build()
            .unwrap();
        assert_eq!(both.settings().override_source(), OverrideSource::StaticData);

        let labels = Dispatcher::with_cache(Arc::new(GroupCache::new()))
            .labels(&both, "constGroupTest")
            .unwrap();
        assert_eq!(labels[&ConstValue::Integer(3)], "COMP-lex-LaBEL");

        let none = TypeBuilder::new("Simple").build();
        assert!(none.is_ok());
    }
}
