//! Static data members and methods of a described type.
//!
//! Besides constants, a [`crate::metadata::TypeDescriptor`] records the static data members and
//! methods a type exposes. The label pipeline only reads one of them (the override member named
//! by [`crate::metadata::LabelSettings`]), the rest are available for introspection through
//! [`crate::metadata::TypeDescriptor::methods`] and friends.

use std::{collections::BTreeMap, fmt, sync::Arc};

use bitflags::bitflags;

use crate::metadata::ConstValue;

/// Mapping from constant value to its human-readable label
pub type LabelMap = BTreeMap<ConstValue, String>;

/// Two-level override table: group suffix (e.g. `Status`) to a partial [`LabelMap`]
pub type LabelTable = BTreeMap<String, LabelMap>;

/// A zero-argument method body producing a [`MemberValue`]
pub type Provider = Arc<dyn Fn() -> MemberValue + Send + Sync>;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Attributes of a static member or method
    pub struct MemberFlags: u32 {
        /// Visible outside of the type
        const PUBLIC = 0x0001;
        /// Belongs to the type rather than an instance
        const STATIC = 0x0002;
    }
}

/// Value held by a static data member, or returned by a [`Provider`]
#[derive(Debug, Clone, PartialEq)]
pub enum MemberValue {
    /// A single scalar
    Scalar(ConstValue),
    /// A label override table
    Labels(LabelTable),
}

impl MemberValue {
    /// Borrow the label table, if this value is one
    #[must_use]
    pub fn as_labels(&self) -> Option<&LabelTable> {
        match self {
            MemberValue::Labels(table) => Some(table),
            MemberValue::Scalar(_) => None,
        }
    }
}

impl From<LabelTable> for MemberValue {
    fn from(table: LabelTable) -> Self {
        MemberValue::Labels(table)
    }
}

impl From<ConstValue> for MemberValue {
    fn from(value: ConstValue) -> Self {
        MemberValue::Scalar(value)
    }
}

/// A static data member of a type
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMember {
    /// Member name
    pub name: String,
    /// Member attributes, always including [`MemberFlags::STATIC`]
    pub flags: MemberFlags,
    /// Stored value
    pub value: MemberValue,
}

/// A method of a type
#[derive(Clone)]
pub struct Method {
    /// Method name
    pub name: String,
    /// Method attributes
    pub flags: MemberFlags,
    /// Body of a zero-argument method, if the method can be invoked through the descriptor
    pub provider: Option<Provider>,
}

impl Method {
    /// Invoke the method body, if one is attached
    #[must_use]
    pub fn invoke(&self) -> Option<MemberValue> {
        self.provider.as_ref().map(|provider| provider())
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("flags", &self.flags)
            .field("provider", &self.provider.is_some())
            .finish()
    }
}
