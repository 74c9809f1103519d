//! Style-annotated text segments produced by the parser
//!
//!     A segment is a contiguous run of text together with the styles active
//!     over it. The parser emits segments as an owned, ordered chain, left
//!     to right in source order; concatenating the chain's text reconstructs
//!     every text run of the input, while tags themselves contribute no
//!     text. The flat chain, rather than a nested tree, is the shape a
//!     renderer consumes directly.

use crate::markup::style::Style;

/// Ordered, owned chain of segments, left to right in source order.
pub type SegmentChain = Vec<Segment>;

/// A contiguous run of text annotated with the styles active over it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// The literal text of this run.
    pub text: String,
    /// Styles open at the moment the text was consumed, outermost first.
    pub styles: Vec<Style>,
}

impl Segment {
    /// Create a segment with no active styles.
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            styles: Vec::new(),
        }
    }

    /// Create a segment with the given active styles, outermost first.
    pub fn styled(text: &str, styles: Vec<Style>) -> Self {
        Self {
            text: text.to_string(),
            styles,
        }
    }

    /// Returns `true` when no styles apply to this segment.
    pub fn is_plain(&self) -> bool {
        self.styles.is_empty()
    }

    /// Returns `true` when `style` applies to this segment.
    pub fn has_style(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }
}

/// Concatenated text of a chain, in order.
pub fn chain_text(chain: &[Segment]) -> String {
    chain.iter().map(|segment| segment.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_segments_carry_no_styles() {
        let segment = Segment::plain("abc");
        assert!(segment.is_plain());
        assert!(!segment.has_style(Style::Bold));
    }

    #[test]
    fn styled_segments_answer_membership() {
        let segment = Segment::styled("abc", vec![Style::Bold]);
        assert!(!segment.is_plain());
        assert!(segment.has_style(Style::Bold));
    }

    #[test]
    fn chain_text_preserves_order() {
        let chain = vec![
            Segment::plain("one "),
            Segment::styled("two", vec![Style::Bold]),
            Segment::plain(" three"),
        ];
        assert_eq!(chain_text(&chain), "one two three");
    }

    #[test]
    fn segments_round_trip_through_json() {
        let chain = vec![
            Segment::plain("a"),
            Segment::styled("b", vec![Style::Bold]),
        ];
        let json = serde_json::to_string(&chain).unwrap();
        let back: SegmentChain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chain);
    }
}
