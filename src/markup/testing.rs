//! Testing utilities for token and segment assertions
//!
//!     Parser tests assert full structure, not just counts: the exact token
//!     sequence a scan produces, and the exact text and style set of every
//!     segment in a chain. Hand-writing `Token::Text("…".to_string())` at
//!     every call site buries the shape of the expectation, so tests build
//!     sequences with the [factories](factories) and verify chains with the
//!     fluent [`assert_segments`](assert_segments) builder.
//!
//!     The helpers panic with the failing index and the full value in the
//!     message, so a broken expectation reads without re-running under a
//!     debugger.

use crate::markup::segment::Segment;
use crate::markup::style::Style;

/// Token factories for building expected sequences in tests.
pub mod factories {
    use crate::markup::style::Style;
    use crate::markup::token::Token;

    /// Literal text token.
    pub fn text(value: &str) -> Token {
        Token::Text(value.to_string())
    }

    /// Opening tag token.
    pub fn open(style: Style) -> Token {
        Token::OpeningTag(style)
    }

    /// Closing tag token.
    pub fn close(style: Style) -> Token {
        Token::ClosingTag(style)
    }
}

/// Create an assertion builder for a segment chain.
pub fn assert_segments(chain: &[Segment]) -> SegmentChainAssertion<'_> {
    SegmentChainAssertion { chain }
}

pub struct SegmentChainAssertion<'a> {
    chain: &'a [Segment],
}

impl<'a> SegmentChainAssertion<'a> {
    /// Assert the number of segments in the chain.
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.chain.len(),
            expected,
            "Expected {} segments, found {}: {:?}",
            expected,
            self.chain.len(),
            self.chain
        );
        self
    }

    /// Run segment-specific assertions against the segment at `index`.
    pub fn segment(self, index: usize, check: impl FnOnce(SegmentAssertion<'a>)) -> Self {
        let segment = self
            .chain
            .get(index)
            .unwrap_or_else(|| panic!("No segment at index {} in chain {:?}", index, self.chain));
        check(SegmentAssertion { segment, index });
        self
    }
}

pub struct SegmentAssertion<'a> {
    segment: &'a Segment,
    index: usize,
}

impl SegmentAssertion<'_> {
    /// Assert the segment's text.
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.segment.text, expected,
            "Segment {}: expected text {:?}, found {:?}",
            self.index, expected, self.segment.text
        );
        self
    }

    /// Assert the segment's active styles, outermost first.
    pub fn styles(self, expected: &[Style]) -> Self {
        assert_eq!(
            self.segment.styles, expected,
            "Segment {}: expected styles {:?}, found {:?}",
            self.index, expected, self.segment.styles
        );
        self
    }

    /// Assert the segment carries no styles.
    pub fn plain(self) -> Self {
        assert!(
            self.segment.is_plain(),
            "Segment {}: expected no styles, found {:?}",
            self.index,
            self.segment.styles
        );
        self
    }
}
