//! # constlabel Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits and macros
//! of the constlabel library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all constlabel operations
pub use crate::Error;

/// The result type used throughout constlabel
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Accessor resolution and its outcome
pub use crate::labels::{Dispatcher, FallbackHandler, Resolution};

/// Declaring constants on Rust types
pub use crate::{declare_constants, label_table};

// ================================================================================================
// Type Descriptions
// ================================================================================================

/// Describing types and their constants
pub use crate::metadata::{
    ConstKind, ConstSymbol, ConstValue, LabelMap, LabelSettings, LabelTable, MemberFlags,
    MemberValue, OverrideSource, Reflect, TypeBuilder, TypeDescriptor, TypeDescriptorRc,
};
