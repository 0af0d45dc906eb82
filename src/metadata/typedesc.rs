//! Runtime description of a type and its declared constants.
//!
//! A [`TypeDescriptor`] is the introspection surface the label pipeline works against. It is
//! immutable once built, shared as [`TypeDescriptorRc`], and answers the questions a reflection
//! API would: which constants does the type declare, which static members and methods does it
//! have, and how are its labels configured.
//!
//! Descriptors come from a [`crate::metadata::TypeBuilder`], or from a Rust type implementing
//! [`Reflect`] (usually through [`crate::declare_constants`]).

use std::sync::Arc;

use crate::{
    metadata::{ConstValue, LabelSettings, MemberFlags, Method, StaticMember},
    Result,
};

/// A reference-counted [`TypeDescriptor`]
pub type TypeDescriptorRc = Arc<TypeDescriptor>;

/// A named constant declared on a type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstSymbol {
    /// Symbolic name, e.g. `STATUS_ACTIVE`
    pub name: String,
    /// Declared value
    pub value: ConstValue,
}

impl ConstSymbol {
    /// Create a new symbol
    ///
    /// ## Arguments
    /// * `name`  - The symbolic name of the constant
    /// * `value` - The constant's value
    pub fn new(name: impl Into<String>, value: impl Into<ConstValue>) -> Self {
        ConstSymbol {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Description of a type: its name, declared constants, members, and label settings
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) constants: Vec<ConstSymbol>,
    pub(crate) statics: Vec<StaticMember>,
    pub(crate) methods: Vec<Method>,
    pub(crate) settings: LabelSettings,
}

impl TypeDescriptor {
    /// Process-unique identity assigned by [`crate::metadata::TypeBuilder::build`]
    ///
    /// Cached label mappings are keyed by this id, so descriptors sharing a name never see
    /// each other's groups.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Name of the type, used in error messages and logs
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All constants declared directly on this type, in declaration order
    #[must_use]
    pub fn constants(&self) -> &[ConstSymbol] {
        &self.constants
    }

    /// Look up a declared constant by name
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<&ConstValue> {
        self.constants
            .iter()
            .find(|symbol| symbol.name == name)
            .map(|symbol| &symbol.value)
    }

    /// All static data members of this type
    #[must_use]
    pub fn statics(&self) -> &[StaticMember] {
        &self.statics
    }

    /// Look up a static data member by name
    #[must_use]
    pub fn static_member(&self, name: &str) -> Option<&StaticMember> {
        self.statics.iter().find(|member| member.name == name)
    }

    /// Look up a method by name
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// List method names, optionally filtered by attributes and name prefix
    ///
    /// ## Arguments
    /// * `filter` - Keep only methods having at least one of these attributes
    /// * `prefix` - Keep only methods whose name starts with this prefix
    #[must_use]
    pub fn methods(&self, filter: Option<MemberFlags>, prefix: Option<&str>) -> Vec<&str> {
        self.methods
            .iter()
            .filter(|method| filter.map_or(true, |flags| method.flags.intersects(flags)))
            .filter(|method| prefix.map_or(true, |prefix| method.name.starts_with(prefix)))
            .map(|method| method.name.as_str())
            .collect()
    }

    /// Label settings of this type
    #[must_use]
    pub fn settings(&self) -> &LabelSettings {
        &self.settings
    }
}

/// Rust types that can describe themselves
///
/// Implemented by [`crate::declare_constants`]; the descriptor should be built once and shared.
pub trait Reflect {
    /// Returns the shared descriptor of this type
    ///
    /// # Errors
    /// Returns the [`crate::metadata::TypeBuilder::build`] error if the type's description is
    /// invalid.
    fn descriptor() -> Result<TypeDescriptorRc>;
}
