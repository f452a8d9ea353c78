//! Parsed form of a template action.

use std::fmt;

/// A node of the action syntax tree.
///
/// Dot-chains are left-associative: `.X.Y` is a `FieldChain` for `Y`
/// whose base is the `FieldChain` for `X`, whose base is the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionNode {
    /// A field access on the result of `base`, or on the root value when
    /// `base` is `None`.
    FieldChain {
        /// The value the field is taken from. `None` means the root.
        base: Option<Box<Self>>,
        /// The field name.
        field: String,
    },
    /// A reference to a function in the funcmap.
    FunctionRef(String),
}

impl ActionNode {
    /// A field access on the root value.
    pub fn root_field(field: impl Into<String>) -> Self {
        Self::FieldChain {
            base: None,
            field: field.into(),
        }
    }

    /// A field access on the value produced by `self`.
    #[must_use]
    pub fn then_field(self, field: impl Into<String>) -> Self {
        Self::FieldChain {
            base: Some(Box::new(self)),
            field: field.into(),
        }
    }
}

impl fmt::Display for ActionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldChain { base, field } => {
                if let Some(base) = base {
                    write!(f, "{base}")?;
                }
                write!(f, ".{field}")
            }
            Self::FunctionRef(name) => f.write_str(name),
        }
    }
}
