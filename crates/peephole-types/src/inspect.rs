//! The value model every inspectable object is viewed through.
//!
//! A value describes itself by returning a [`Shape`] from
//! [`Inspect::shape`]. The shape is one of four closed variants, each
//! exposing a uniform accessor: named fields for structs, an optional
//! target for pointers, indexed elements for collections, and a literal
//! for scalars. Capability queries ([`Inspect::as_inspector`],
//! [`Inspect::as_summarizer`], [`Inspect::as_render`]) let a value opt
//! into custom rendering without the caller knowing its concrete type.

use std::borrow::Cow;
use std::fmt;

use crate::capability::{Inspector, Render, Summarizer};

/// A scalar that can be written both as display text and as a literal.
///
/// Blanket-implemented for every type that is both [`fmt::Display`] and
/// [`fmt::Debug`].
pub trait Literal: fmt::Display + fmt::Debug {}

impl<T: fmt::Display + fmt::Debug + ?Sized> Literal for T {}

/// One named field of a struct-shaped value.
pub struct Field<'a> {
    /// The field name used for path and template resolution.
    pub name: Cow<'a, str>,
    /// The field value.
    pub value: &'a dyn Inspect,
}

impl<'a> Field<'a> {
    /// Create a field view over `value`.
    pub fn new(name: impl Into<Cow<'a, str>>, value: &'a dyn Inspect) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("type_name", &self.value.type_name())
            .finish()
    }
}

/// The discovered shape of an inspectable value.
pub enum Shape<'a> {
    /// A value with named fields, in declaration order.
    Struct(Vec<Field<'a>>),
    /// An optional reference to another value. `None` is a nil pointer.
    Pointer(Option<&'a dyn Inspect>),
    /// An ordered sequence of elements addressable by index.
    Collection(Vec<&'a dyn Inspect>),
    /// A leaf value with no further structure.
    Scalar(&'a dyn Literal),
}

impl Shape<'_> {
    /// Short label for the variant, used in logs and error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Struct(_) => "struct",
            Self::Pointer(_) => "pointer",
            Self::Collection(_) => "collection",
            Self::Scalar(_) => "scalar",
        }
    }
}

/// Upcast helper so generic pointer impls can hand out `&dyn Inspect`
/// for targets that may themselves be trait objects.
///
/// Implemented automatically for every sized [`Inspect`] type.
pub trait AsInspect {
    /// View `self` as an [`Inspect`] trait object.
    fn as_inspect(&self) -> &dyn Inspect;
}

impl<T: Inspect> AsInspect for T {
    fn as_inspect(&self) -> &dyn Inspect {
        self
    }
}

/// An object that can be browsed.
///
/// Only [`shape`](Inspect::shape) is required. The capability queries
/// default to `None`; override them to hand back `Some(self)` when the
/// type also implements the corresponding trait.
///
/// The browser only ever reads through `&self`. When the graph is shared
/// between the browser and code that mutates it, synchronising those
/// reads is the owner's responsibility.
pub trait Inspect: AsInspect {
    /// Describe this value's shape.
    fn shape(&self) -> Shape<'_>;

    /// Human-readable type name, with module paths stripped.
    fn type_name(&self) -> String {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Return the [`Inspector`] capability if this value takes full
    /// control of its rendering and remaining path.
    fn as_inspector(&self) -> Option<&dyn Inspector> {
        None
    }

    /// Return the [`Summarizer`] capability if this value renders its
    /// own compact summary.
    fn as_summarizer(&self) -> Option<&dyn Summarizer> {
        None
    }

    /// Return the [`Render`] capability if this value is itself a unit
    /// of output (used by template dot-chains).
    fn as_render(&self) -> Option<&dyn Render> {
        None
    }
}

impl dyn Inspect + '_ {
    /// Resolve a field by exact name, if this value is struct-shaped.
    pub fn field(&self, name: &str) -> Option<&dyn Inspect> {
        match self.shape() {
            Shape::Struct(fields) => fields
                .into_iter()
                .find(|field| field.name == name)
                .map(|field| field.value),
            _ => None,
        }
    }
}

/// Strip module paths from a fully qualified type name.
///
/// `alloc::vec::Vec<core::option::Option<my_crate::Foo>>` becomes
/// `Vec<Option<Foo>>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut run = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            run.push(c);
        } else {
            out.push_str(run.rsplit("::").next().unwrap_or_default());
            run.clear();
            out.push(c);
        }
    }
    out.push_str(run.rsplit("::").next().unwrap_or_default());
    out
}
