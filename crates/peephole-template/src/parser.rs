//! Recursive-descent parser turning action text into an [`ActionNode`].

use std::iter::Peekable;
use std::vec::IntoIter;

use peephole_types::TemplateSyntaxError;

use crate::ast::ActionNode;
use crate::lexer::{tokenize, Token};

/// Parse the text of one action (the part between `{{` and `}}`).
///
/// # Errors
///
/// Returns a [`TemplateSyntaxError`] when the text is empty, contains a
/// character outside the grammar, is malformed, or has tokens left over
/// after a complete section.
pub fn parse_section(text: &str) -> Result<ActionNode, TemplateSyntaxError> {
    let mut parser = Parser {
        tokens: tokenize(text)?.into_iter().peekable(),
    };
    let node = parser.section()?;
    if let Some(token) = parser.tokens.next() {
        return Err(TemplateSyntaxError::TrailingTokens {
            token: token.to_string(),
        });
    }
    Ok(node)
}

struct Parser {
    tokens: Peekable<IntoIter<Token>>,
}

impl Parser {
    /// `section := name | dotchain`
    fn section(&mut self) -> Result<ActionNode, TemplateSyntaxError> {
        match self.tokens.next() {
            None => Err(TemplateSyntaxError::EmptyAction),
            Some(Token::Name(name)) => Ok(ActionNode::FunctionRef(name)),
            Some(Token::Dot) => self.dotchain(),
        }
    }

    /// `dotchain := '.' name ('.' name)*`, entered after the first dot.
    fn dotchain(&mut self) -> Result<ActionNode, TemplateSyntaxError> {
        let mut node = ActionNode::root_field(self.field_name()?);
        while self.tokens.next_if_eq(&Token::Dot).is_some() {
            node = node.then_field(self.field_name()?);
        }
        Ok(node)
    }

    fn field_name(&mut self) -> Result<String, TemplateSyntaxError> {
        match self.tokens.next() {
            Some(Token::Name(name)) => Ok(name),
            Some(other) => Err(TemplateSyntaxError::UnexpectedToken {
                expected: "a field name after `.`",
                found: format!("`{other}`"),
            }),
            None => Err(TemplateSyntaxError::UnexpectedToken {
                expected: "a field name after `.`",
                found: String::from("end of action"),
            }),
        }
    }
}
