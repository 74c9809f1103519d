//! Token stream formatting back to source text
//!
//!     This module converts a stream of tokens back into the string it was
//!     scanned from. It works at the token level, below any segment or
//!     rendering concern, and is useful for:
//!
//!     - Round-trip testing (source -> tokens -> source)
//!     - Debugging and visualization of token streams
//!
//!     The scanner consumes every character of its input into exactly one
//!     token, so detokenizing a scan reconstructs the source exactly.

use super::Token;

/// Trait for converting a token to its literal source representation.
pub trait ToMarkupString {
    fn to_markup_string(&self) -> String;
}

impl ToMarkupString for Token {
    fn to_markup_string(&self) -> String {
        match self {
            Token::Text(text) => text.clone(),
            Token::OpeningTag(style) => style.opening_literal(),
            Token::ClosingTag(style) => style.closing_literal(),
        }
    }
}

/// Detokenize a stream of tokens into source text.
///
/// For any input `text`, `detokenize(&scan(text)) == text`.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_markup_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::style::Style;

    #[test]
    fn tags_render_as_their_literal_forms() {
        assert_eq!(Token::OpeningTag(Style::Bold).to_markup_string(), "<b>");
        assert_eq!(Token::ClosingTag(Style::Bold).to_markup_string(), "</b>");
    }

    #[test]
    fn detokenize_concatenates_in_order() {
        let tokens = vec![
            Token::Text("a ".to_string()),
            Token::OpeningTag(Style::Bold),
            Token::Text("b".to_string()),
            Token::ClosingTag(Style::Bold),
        ];
        assert_eq!(detokenize(&tokens), "a <b>b</b>");
    }
}
