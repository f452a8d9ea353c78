//! Helper macro for implementing [`Inspect`](crate::Inspect) on plain
//! structs.

/// Implements [`Inspect`](crate::Inspect) for a struct with named fields.
///
/// Fields are listed in the order they should be shown. Capabilities the
/// type implements are listed after `with:` and wire up the matching
/// `as_*` query to return `Some(self)`.
///
/// ```rust,ignore
/// struct Bar { baz: i64, boo: String }
/// impl_inspect_struct!(Bar { baz, boo }, with: [summarizer]);
/// ```
#[macro_export]
macro_rules! impl_inspect_struct {
    (@capability inspector) => {
        fn as_inspector(&self) -> ::core::option::Option<&dyn $crate::Inspector> {
            ::core::option::Option::Some(self)
        }
    };
    (@capability summarizer) => {
        fn as_summarizer(&self) -> ::core::option::Option<&dyn $crate::Summarizer> {
            ::core::option::Option::Some(self)
        }
    };
    (@capability render) => {
        fn as_render(&self) -> ::core::option::Option<&dyn $crate::Render> {
            ::core::option::Option::Some(self)
        }
    };
    (
        $ty:ty { $($field:ident),* $(,)? }
        $(, with: [$($capability:ident),+ $(,)?])?
    ) => {
        impl $crate::Inspect for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Struct(::std::vec![
                    $($crate::Field::new(::core::stringify!($field), &self.$field)),*
                ])
            }

            $($($crate::impl_inspect_struct!(@capability $capability);)+)?
        }
    };
}
