//! Error taxonomy for traversal and template rendering.
//!
//! Every failure in the core is an ordinary value threaded back to the
//! request boundary as a [`RenderError`]. Nothing in parsing, evaluation,
//! or traversal aborts the render.

/// Errors raised while navigating a path through the object graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The segment does not name a field of the struct.
    #[error("no field `{field}` in `{type_name}` at {prefix}")]
    UnknownField {
        /// The requested field name.
        field: String,
        /// The struct's type name.
        type_name: String,
        /// Canonical path of the struct.
        prefix: String,
    },

    /// The segment addressing a collection is not a non-negative integer.
    #[error("cannot take `{segment}` from {prefix}: expected a non-negative integer index")]
    InvalidIndexFormat {
        /// The offending segment.
        segment: String,
        /// Canonical path of the collection.
        prefix: String,
    },

    /// The index is past the end of the collection.
    #[error("cannot take `{segment}` from {prefix}: collection contains only {len} elements")]
    IndexOutOfRange {
        /// The offending segment.
        segment: String,
        /// Number of elements in the collection.
        len: usize,
        /// Canonical path of the collection.
        prefix: String,
    },

    /// A path segment remains but the value has no further structure.
    #[error("cannot descend into `{segment}` from `{type_name}` at {prefix}")]
    CannotDescend {
        /// The segment that could not be consumed.
        segment: String,
        /// Type name of the value that cannot be descended into.
        type_name: String,
        /// Canonical path of the value.
        prefix: String,
    },
}

/// Errors raised while lexing or parsing the text of a template action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateSyntaxError {
    /// An opening `{{` has no matching `}}` before the end of the text.
    #[error("unterminated action starting at byte {offset}")]
    UnterminatedAction {
        /// Byte offset of the opening delimiter.
        offset: usize,
    },

    /// A complete section was parsed but tokens remain.
    #[error("unexpected trailing token `{token}` after end of section")]
    TrailingTokens {
        /// The first unconsumed token.
        token: String,
    },

    /// The action contains no tokens at all.
    #[error("empty action")]
    EmptyAction,

    /// A token appeared where the grammar expects something else.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: &'static str,
        /// What it found instead.
        found: String,
    },

    /// A character outside the action grammar.
    #[error("unexpected character `{character}` in action")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
}

/// Errors raised while evaluating a parsed action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateEvalError {
    /// The action names a function absent from the function map.
    #[error("no such function `{name}`")]
    UnknownFunction {
        /// The requested function name.
        name: String,
    },

    /// A dot-chain step names a field the struct does not have.
    #[error("no field `{field}` in `{type_name}`")]
    UnknownField {
        /// The requested field name.
        field: String,
        /// Type name of the struct.
        type_name: String,
    },

    /// A dot-chain step was applied to a value that is not a struct.
    #[error("cannot access field `{field}` on non-struct value of type `{type_name}`")]
    InvalidFieldAccess {
        /// The requested field name.
        field: String,
        /// Type name of the non-struct value.
        type_name: String,
    },
}

/// Any failure while rendering a view.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Path navigation failed.
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// A template action could not be parsed.
    #[error("template syntax error: {0}")]
    Syntax(#[from] TemplateSyntaxError),

    /// A template action could not be evaluated.
    #[error("template evaluation error: {0}")]
    Eval(#[from] TemplateEvalError),

    /// The output sink rejected a write.
    #[error("sink error: {0}")]
    Sink(#[from] std::io::Error),

    /// A user [`Inspector`](crate::Inspector) or
    /// [`Summarizer`](crate::Summarizer) reported a failure.
    #[error("capability error: {0}")]
    Capability(String),
}

impl RenderError {
    /// Build a [`RenderError::Capability`] from any message.
    pub fn capability(message: impl Into<String>) -> Self {
        Self::Capability(message.into())
    }
}
