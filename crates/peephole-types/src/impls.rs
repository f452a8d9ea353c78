//! [`Inspect`] implementations for standard library types.
//!
//! - Numbers, `bool`, `char`, and strings are scalars.
//! - `Box`, `Rc`, `Arc`, and `Option` are pointers. They forward
//!   capability queries to their target so a custom summary on `Bar`
//!   still applies when the field is an `Option<Box<Bar>>`.
//! - `Vec`, `VecDeque`, and arrays are collections.
//! - Maps with displayable keys are struct-shaped, one field per key.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

use crate::capability::{Inspector, Render, Summarizer};
use crate::inspect::{Field, Inspect, Shape};

macro_rules! impl_inspect_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(self)
                }
            }
        )*
    };
}

impl_inspect_scalar!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    Cow<'static, str>,
    std::net::IpAddr,
    std::net::SocketAddr,
);

/// Implements a forwarding pointer for a smart pointer type whose target
/// may be unsized.
macro_rules! impl_inspect_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $ptr<T> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Pointer(Some((**self).as_inspect()))
                }

                fn as_inspector(&self) -> Option<&dyn Inspector> {
                    (**self).as_inspector()
                }

                fn as_summarizer(&self) -> Option<&dyn Summarizer> {
                    (**self).as_summarizer()
                }

                fn as_render(&self) -> Option<&dyn Render> {
                    (**self).as_render()
                }
            }
        )*
    };
}

impl_inspect_pointer!(Box, Rc, Arc);

impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(self.as_ref().map(|target| target as &dyn Inspect))
    }

    fn as_inspector(&self) -> Option<&dyn Inspector> {
        self.as_ref().and_then(Inspect::as_inspector)
    }

    fn as_summarizer(&self) -> Option<&dyn Summarizer> {
        self.as_ref().and_then(Inspect::as_summarizer)
    }

    fn as_render(&self) -> Option<&dyn Render> {
        self.as_ref().and_then(Inspect::as_render)
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Collection(self.iter().map(|item| item as &dyn Inspect).collect())
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Collection(self.iter().map(|item| item as &dyn Inspect).collect())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Collection(self.iter().map(|item| item as &dyn Inspect).collect())
    }
}

impl<K: Display, V: Inspect> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Struct(
            self.iter()
                .map(|(key, value)| Field::new(key.to_string(), value))
                .collect(),
        )
    }
}

impl<K: Display, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        let mut fields: Vec<Field<'_>> = self
            .iter()
            .map(|(key, value)| Field::new(key.to_string(), value))
            .collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        Shape::Struct(fields)
    }
}
