//! Minimal template engine used to emit Peephole views.
//!
//! A template is literal text with embedded `{{ ... }}` actions. An action
//! is either a bare name, looked up in a [`Funcmap`] and invoked against
//! the output, or a dot-chain such as `.X.Y.Z`, resolved field by field
//! starting from the root value passed to [`Template::generate`].
//!
//! There are no loops, conditionals, or arithmetic. Repetition is done by
//! the caller inside a funcmap entry.
//!
//! # Grammar
//!
//! ```text
//! section   := name | dotchain
//! name      := (letter | '_') (letter | digit | '_')*
//! dotchain  := '.' name ('.' name)*
//! ```
//!
//! Actions are parsed afresh on every [`Template::generate`] call. Views
//! are rendered at human speed, so no parsed form is cached.

pub mod ast;
pub mod eval;
pub mod funcmap;
pub mod lexer;
pub mod parser;
pub mod template;

// Re-export primary types for convenience.
pub use ast::ActionNode;
pub use funcmap::Funcmap;
pub use parser::parse_section;
pub use template::Template;
