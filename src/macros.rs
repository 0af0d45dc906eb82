/// Declare associated constants on a type and describe them for the label pipeline
///
/// The constants become ordinary `pub const` items of the type. The type also implements
/// [`crate::metadata::Reflect`], with a descriptor named after [`std::any::type_name`] that is
/// built once and shared afterwards.
///
/// Optional trailing clauses:
/// - `overrides = <expr>;` - a [`crate::metadata::LabelTable`], stored as the static override
///   member named by the settings
/// - `settings = <expr>;` - the type's [`crate::metadata::LabelSettings`]
///
/// ```rust
/// use constlabel::{declare_constants, label_table, labels::Dispatcher};
///
/// struct Simple;
///
/// declare_constants! {
///     impl Simple {
///         const GROUP_TEST_ONEWORD: i64 = 1;
///         const GROUP_TEST_TWO_WORDS: i64 = 2;
///         const GROUP_TEST_COM_plex_LAbeL: i64 = 3;
///     }
///     overrides = label_table! { "GroupTest" => { 3 => "COMP-lex-LaBEL", 0 => "Extra label" } };
/// }
///
/// let dispatcher = Dispatcher::new();
/// let labels = dispatcher.labels_of::<Simple>("constGroupTest")?;
/// assert_eq!(labels.len(), 4);
/// assert_eq!(
///     dispatcher.label_of::<Simple>("constGroupTest", Simple::GROUP_TEST_TWO_WORDS)?,
///     "Two Words"
/// );
/// # Ok::<(), constlabel::Error>(())
/// ```
///
/// The descriptor is validated when first requested. Invalid settings, e.g. an empty accessor
/// prefix or a provider override source (overrides declared here are static data), surface as
/// [`crate::Error::InvalidSettings`] from every lookup on the type and are never cached.
#[macro_export]
macro_rules! declare_constants {
    (
        impl $ty:ident {
            $( $(#[$meta:meta])* const $name:ident : $cty:ty = $value:expr ; )*
        }
        $( overrides = $overrides:expr ; )?
        $( settings = $settings:expr ; )?
    ) => {
        #[allow(non_upper_case_globals)]
        impl $ty {
            $( $(#[$meta])* pub const $name: $cty = $value; )*
        }

        impl $crate::metadata::Reflect for $ty {
            fn descriptor() -> $crate::Result<$crate::metadata::TypeDescriptorRc> {
                static DESCRIPTOR: ::std::sync::OnceLock<$crate::metadata::TypeDescriptorRc> =
                    ::std::sync::OnceLock::new();

                if let Some(descriptor) = DESCRIPTOR.get() {
                    return Ok(descriptor.clone());
                }

                let settings = {
                    let _settings = $crate::metadata::LabelSettings::default();
                    $( let _settings = $settings; )?
                    _settings
                };

                #[allow(unused_mut)]
                let mut builder =
                    $crate::metadata::TypeBuilder::new(::std::any::type_name::<$ty>())
                        $( .constant(stringify!($name), $ty::$name) )*;
                $(
                    builder = builder
                        .static_data(settings.override_member().to_string(), $overrides);
                )?

                let descriptor = builder.settings(settings).build()?;
                Ok(DESCRIPTOR.get_or_init(|| descriptor).clone())
            }
        }
    };
}

/// Build a [`crate::metadata::LabelTable`] from literals
///
/// ```rust
/// use constlabel::{label_table, metadata::ConstValue};
///
/// let table = label_table! {
///     "Status" => { 0 => "Removed", 100 => "Live" },
///     "Role" => { "admin" => "Administrator" },
/// };
///
/// assert_eq!(table["Status"][&ConstValue::Integer(100)], "Live");
/// assert_eq!(table["Role"][&ConstValue::from("admin")], "Administrator");
/// ```
#[macro_export]
macro_rules! label_table {
    ( $( $group:expr => { $( $value:expr => $label:expr ),* $(,)? } ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut table = $crate::metadata::LabelTable::new();
        $(
            #[allow(unused_mut)]
            let mut labels = $crate::metadata::LabelMap::new();
            $(
                labels.insert(
                    $crate::metadata::ConstValue::from($value),
                    ::std::string::String::from($label),
                );
            )*
            table.insert(::std::string::String::from($group), labels);
        )*
        table
    }};
}
