//! Markup style vocabulary
//!
//!     The closed set of inline styles the scanner recognizes and the parser
//!     tracks. Adding a member here is all a new style needs: the scanner
//!     derives its recognized tag table from [`Style::all`], and the parser
//!     never names styles, only compares them.

use std::fmt;

/// A markup-level formatting attribute applied to a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Style {
    /// Bold emphasis delimited by `<b>` and `</b>`.
    Bold,
}

impl Style {
    /// All recognized styles, in the order the scanner tries them.
    pub fn all() -> &'static [Style] {
        &[Style::Bold]
    }

    /// The name written inside tag delimiters (the `b` in `<b>`).
    pub fn tag_name(self) -> &'static str {
        match self {
            Style::Bold => "b",
        }
    }

    /// Literal opening form of this style's tag, e.g. `<b>`.
    pub fn opening_literal(self) -> String {
        format!("<{}>", self.tag_name())
    }

    /// Literal closing form of this style's tag, e.g. `</b>`.
    pub fn closing_literal(self) -> String {
        format!("</{}>", self.tag_name())
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Bold => write!(f, "bold"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_literals_wrap_the_tag_name() {
        assert_eq!(Style::Bold.opening_literal(), "<b>");
        assert_eq!(Style::Bold.closing_literal(), "</b>");
    }

    #[test]
    fn display_uses_the_human_name() {
        assert_eq!(Style::Bold.to_string(), "bold");
    }

    #[test]
    fn all_lists_every_style_once() {
        assert_eq!(Style::all(), &[Style::Bold]);
    }
}
