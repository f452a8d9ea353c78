//! Tokenizer for the text inside a `{{ ... }}` action.
//!
//! Whitespace between tokens is insignificant and discarded. Any
//! character outside the grammar is a syntax error.

use std::fmt;

use peephole_types::TemplateSyntaxError;

/// A lexical token of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// The field access operator `.`.
    Dot,
    /// An identifier: a field or function name.
    Name(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dot => f.write_str("."),
            Self::Name(name) => f.write_str(name),
        }
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split action text into tokens.
pub fn tokenize(text: &str) -> Result<Vec<Token>, TemplateSyntaxError> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c == '.' {
            tokens.push(Token::Dot);
            continue;
        }
        if is_name_start(c) {
            let mut name = String::from(c);
            while let Some(next) = chars.next_if(|next| is_name_continue(*next)) {
                name.push(next);
            }
            tokens.push(Token::Name(name));
            continue;
        }
        return Err(TemplateSyntaxError::UnexpectedCharacter { character: c });
    }
    Ok(tokens)
}
