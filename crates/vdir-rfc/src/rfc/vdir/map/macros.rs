//! The `record!` declaration macro.

/// Declares a struct together with its [`Record`](crate::rfc::vdir::map::Record)
/// descriptor.
///
/// Every field may be followed by `=> spec`, where `spec` is one of:
///
/// - `"NAME"`: property name, option `value`
/// - `("NAME", option)`: name and option
/// - `(option)`: option, name taken from the field
/// - `-`: the field is not mapped
///
/// `option` is one of `value`, `profile`, `object`, `param` or `multiple`.
/// Without a spec the property name is the field name in uppercase. Mapped
/// fields must be `String`, `Vec<String>`, another record, or a `Vec` of
/// records.
///
/// ```rust
/// use vdir_rfc::record;
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct Phone {
///         pub kind: Vec<String> => ("TYPE", param),
///         pub number: String,
///     }
/// }
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct Contact {
///         pub profile: String => ("VCARD", profile),
///         pub fn_: String => "FN",
///         pub tel: Vec<Phone>,
///         pub cache: String => -,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(=> $spec:tt)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::rfc::vdir::map::Record for $name {
            fn descriptor(&self) -> &'static [$crate::rfc::vdir::map::FieldSpec] {
                const DESCRIPTOR: &[$crate::rfc::vdir::map::FieldSpec] = &[
                    $( $crate::__field_spec!($field $(, $spec)?), )*
                ];
                DESCRIPTOR
            }

            fn visit(
                &self,
                visitor: &mut dyn FnMut(
                    $crate::rfc::vdir::map::FieldSpec,
                    $crate::rfc::vdir::map::FieldRef<'_>,
                ) -> $crate::rfc::vdir::map::MapResult<()>,
            ) -> $crate::rfc::vdir::map::MapResult<()> {
                $( $crate::__field_visit!(visitor, field_ref, &self.$field, $field $(, $spec)?); )*
                Ok(())
            }

            fn visit_mut(
                &mut self,
                visitor: &mut dyn FnMut(
                    $crate::rfc::vdir::map::FieldSpec,
                    $crate::rfc::vdir::map::FieldMut<'_>,
                ) -> $crate::rfc::vdir::map::MapResult<()>,
            ) -> $crate::rfc::vdir::map::MapResult<()> {
                $( $crate::__field_visit!(visitor, field_mut, &mut self.$field, $field $(, $spec)?); )*
                Ok(())
            }
        }

        impl $crate::rfc::vdir::map::Field for $name {
            fn field_ref(&self) -> $crate::rfc::vdir::map::FieldRef<'_> {
                $crate::rfc::vdir::map::FieldRef::Record(self)
            }

            fn field_mut(&mut self) -> $crate::rfc::vdir::map::FieldMut<'_> {
                $crate::rfc::vdir::map::FieldMut::Record(self)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_spec {
    ($field:ident) => {
        $crate::__field_spec!($field, (value))
    };
    ($field:ident, -) => {
        $crate::rfc::vdir::map::FieldSpec::new(
            stringify!($field),
            "-",
            $crate::rfc::vdir::map::FieldOption::Value,
        )
    };
    ($field:ident, $name:literal) => {
        $crate::__field_spec!($field, ($name, value))
    };
    ($field:ident, ($option:ident)) => {
        $crate::rfc::vdir::map::FieldSpec::new(
            stringify!($field),
            $crate::__private::const_str::convert_ascii_case!(upper, stringify!($field)),
            $crate::__field_option!($option),
        )
    };
    ($field:ident, ($name:literal, $option:ident)) => {
        $crate::rfc::vdir::map::FieldSpec::new(
            stringify!($field),
            $crate::__private::const_str::convert_ascii_case!(upper, $name),
            $crate::__field_option!($option),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_option {
    (value) => {
        $crate::rfc::vdir::map::FieldOption::Value
    };
    (profile) => {
        $crate::rfc::vdir::map::FieldOption::Profile
    };
    (object) => {
        $crate::rfc::vdir::map::FieldOption::Object
    };
    (param) => {
        $crate::rfc::vdir::map::FieldOption::Param
    };
    (multiple) => {
        $crate::rfc::vdir::map::FieldOption::Multiple
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_visit {
    ($visitor:ident, $method:ident, $place:expr, $field:ident, -) => {};
    ($visitor:ident, $method:ident, $place:expr, $field:ident $(, $spec:tt)?) => {
        $visitor(
            $crate::__field_spec!($field $(, $spec)?),
            $crate::rfc::vdir::map::Field::$method($place),
        )?;
    };
}
