use thiserror::Error;

use crate::metadata::ConstValue;

macro_rules! settings_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidSettings($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidSettings(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Convention Misses
/// - [`Error::UnrecognizedAccessor`] - The accessor name does not carry the configured prefix
/// - [`Error::NoConstantsFound`] - The accessor matched, but the derived group is empty
///
/// Both are recoverable: the [`crate::labels::Dispatcher`] hands them to its fallback chain
/// before anything reaches the caller. [`Error::is_convention_miss`] is the kind check used
/// to tell them apart from real failures.
///
/// ## Terminal Errors
/// - [`Error::InvalidLookupValue`] - A single-label lookup asked for a value outside the group
/// - [`Error::UndefinedOperation`] - Neither the convention nor any fallback resolved the call
/// - [`Error::Unexpected`] - A fallback handler failed for a reason of its own
///
/// ## Setup Errors
/// - [`Error::InvalidSettings`] - Label settings do not match the described type
/// - [`Error::DuplicateSymbol`] - A type declared the same constant name twice
///
/// # Examples
///
/// ```rust
/// use constlabel::{labels::Dispatcher, metadata::TypeBuilder, Error};
///
/// let order = TypeBuilder::new("Order").constant("STATUS_NEW", 1).build()?;
/// let dispatcher = Dispatcher::new();
///
/// match dispatcher.label(&order, "constStatus", 7) {
///     Err(Error::InvalidLookupValue { value, .. }) => println!("no label for {value}"),
///     Err(e) => println!("Other error: {e}"),
///     Ok(label) => println!("{label}"),
/// }
/// # Ok::<(), constlabel::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The accessor name does not start with the owner's accessor prefix.
    #[error("Invalid prefix (needed '{prefix}') while calling {type_name}::{accessor}()")]
    UnrecognizedAccessor {
        /// Name of the type the accessor was invoked on
        type_name: String,
        /// The accessor name as invoked
        accessor: String,
        /// The accessor prefix configured for the type
        prefix: String,
    },

    /// The accessor matched the convention, but no constant carries the derived group prefix.
    #[error("No constants found by prefix '{prefix}' while calling {type_name}::{accessor}()")]
    NoConstantsFound {
        /// Name of the type the accessor was invoked on
        type_name: String,
        /// The accessor name as invoked
        accessor: String,
        /// The derived group prefix, e.g. `STATUS_`
        prefix: String,
    },

    /// A single-label lookup was given a value that is not a key of the group's mapping.
    ///
    /// This error is never forwarded to a fallback handler.
    #[error("Invalid argument '{value}' while calling {type_name}::{accessor}({value})")]
    InvalidLookupValue {
        /// Name of the type the accessor was invoked on
        type_name: String,
        /// The accessor name as invoked
        accessor: String,
        /// The value that was looked up
        value: ConstValue,
    },

    /// No convention and no fallback handler could resolve the accessor.
    #[error("Call to undefined operation {type_name}::{accessor}()")]
    UndefinedOperation {
        /// Name of the type the accessor was invoked on
        type_name: String,
        /// The accessor name as invoked
        accessor: String,
    },

    /// A fallback handler failed with an error unrelated to a missing convention.
    ///
    /// The dispatcher hands these back exactly as the handler produced them.
    #[error("{0}")]
    Unexpected(Box<dyn std::error::Error + Send + Sync>),

    /// The label settings of a type are inconsistent with the members it declares.
    #[error("Invalid label settings - {0}")]
    InvalidSettings(String),

    /// A type declared two constants with the same name.
    #[error("Duplicate constant '{name}' on {type_name}")]
    DuplicateSymbol {
        /// Name of the type being described
        type_name: String,
        /// The constant name that was declared twice
        name: String,
    },
}

impl Error {
    /// Returns `true` for errors that mean "there is no such convention here".
    ///
    /// These are the only errors a [`crate::labels::Dispatcher`] forwards to its fallback
    /// chain, and the only errors a fallback handler may return to let the next handler try.
    #[must_use]
    pub fn is_convention_miss(&self) -> bool {
        matches!(
            self,
            Error::UnrecognizedAccessor { .. }
                | Error::NoConstantsFound { .. }
                | Error::UndefinedOperation { .. }
        )
    }

    /// Wrap an arbitrary error raised by a fallback handler.
    pub fn unexpected<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Unexpected(error.into())
    }
}
