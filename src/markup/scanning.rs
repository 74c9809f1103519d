//! Scanner
//!
//!     Turns raw markup text into an ordered token sequence. Scanning is
//!     total: any input, including the empty string, produces a (possibly
//!     empty) token stream. There is no lexical error channel at all;
//!     malformed tag-like input degrades to literal text.
//!
//! Tag Recognition
//!
//!     The scanner keeps two character-index cursors: `start` marks the
//!     beginning of the token under construction, `current` the scan
//!     position. At each position it first tries to match one of the
//!     recognized tag literals using bounded lookahead (at most the
//!     literal's length, nothing is consumed by a failed attempt); on a
//!     match the tag token is emitted and the cursor jumps past the
//!     literal. Otherwise characters accumulate into a text run that ends
//!     where the next recognized tag begins or the input ends.
//!
//!     Each position is tested once and no emitted token is ever revisited,
//!     so scanning is linear in the number of characters.
//!
//! Degrade To Literal Text
//!
//!     A lone `<`, a truncated tag (`<b`, `</`, `</b`), and an unrecognized
//!     name between angle brackets (`<%>`) never match a recognized
//!     literal, so they are consumed as ordinary text. This is a policy,
//!     not a fallback: tag-shaped input that fails to match is text.

use once_cell::sync::Lazy;

use crate::markup::style::Style;
use crate::markup::text::CharView;
use crate::markup::token::Token;

/// A recognized tag literal and the token it scans to.
struct TagPattern {
    literal: Vec<char>,
    token: Token,
}

impl TagPattern {
    fn new(literal: String, token: Token) -> Self {
        Self {
            literal: literal.chars().collect(),
            token,
        }
    }
}

/// Recognized tag table: the opening then the closing form of every style.
static TAG_PATTERNS: Lazy<Vec<TagPattern>> = Lazy::new(|| {
    let mut patterns = Vec::new();
    for style in Style::all() {
        patterns.push(TagPattern::new(
            style.opening_literal(),
            Token::OpeningTag(*style),
        ));
        patterns.push(TagPattern::new(
            style.closing_literal(),
            Token::ClosingTag(*style),
        ));
    }
    patterns
});

/// Scan raw markup text into an ordered token sequence.
///
/// Total and pure: accepts any string, never fails, and scanning the same
/// input twice yields the same tokens. Empty input yields an empty sequence.
///
/// # Example
///
/// ```rust,ignore
/// use tagspan::markup::scanning::scan;
///
/// let tokens = scan("test <b>toto</b> test.");
/// // [Text("test "), OpeningTag(Bold), Text("toto"), ClosingTag(Bold), Text(" test.")]
/// ```
pub fn scan(text: &str) -> Vec<Token> {
    Scanner::new(text).run()
}

/// Scanner state owned by a single `scan` invocation.
struct Scanner {
    view: CharView,
    start: usize,
    current: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    fn new(text: &str) -> Self {
        Self {
            view: CharView::new(text),
            start: 0,
            current: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while self.current < self.view.len() {
            self.start = self.current;
            match self.match_tag(self.current) {
                Some(pattern) => {
                    self.current += pattern.literal.len();
                    self.tokens.push(pattern.token.clone());
                }
                None => self.scan_text(),
            }
        }
        self.tokens
    }

    /// Try to match a recognized tag literal starting at `index`.
    ///
    /// One deterministic lookahead test per pattern, bounded by the
    /// pattern's length.
    fn match_tag(&self, index: usize) -> Option<&'static TagPattern> {
        // Every recognized literal starts with '<'.
        if self.view.char_at(index) != Some('<') {
            return None;
        }
        TAG_PATTERNS
            .iter()
            .find(|pattern| self.view.matches_at(index, &pattern.literal))
    }

    /// Accumulate a text run from `start` up to the next recognized tag or
    /// the end of input.
    fn scan_text(&mut self) {
        self.current += 1;
        while self.current < self.view.len() && self.match_tag(self.current).is_none() {
            self.current += 1;
        }
        let run = self.view.slice(self.start, self.current);
        self.tokens.push(Token::Text(run));
    }
}
