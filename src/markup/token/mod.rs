//! Core token type and helpers shared across the scanner, parser, and tests.

pub mod formatting;

pub use formatting::{detokenize, ToMarkupString};

use crate::markup::style::Style;

/// Atomic lexical unit: a literal text run, a tag-open marker, or a
/// tag-close marker.
///
/// Tokens are produced by [`scan`](crate::markup::scanning::scan) in source
/// order and are never mutated, reordered, or deduplicated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Token {
    /// Literal text run with no markup meaning.
    Text(String),
    /// Opening tag for a style, e.g. `<b>`.
    OpeningTag(Style),
    /// Closing tag for a style, e.g. `</b>`.
    ClosingTag(Style),
}

impl Token {
    /// Returns the payload when this token is a text run.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` when this token is a literal text run.
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    /// Returns the style carried by tag tokens.
    pub fn style(&self) -> Option<Style> {
        match self {
            Token::OpeningTag(style) | Token::ClosingTag(style) => Some(*style),
            Token::Text(_) => None,
        }
    }
}
