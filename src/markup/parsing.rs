//! Parser
//!
//!     Consumes the token sequence produced by scanning and builds the
//!     ordered segment chain, or reports the first well-formedness
//!     violation. Parsing fails fast: there is no recovery mode and no
//!     partial result.
//!
//! Grammar
//!
//!     document := part+
//!     part     := Text | OpeningTag(s) part ClosingTag(s)
//!
//!     Pure sequencing and nesting, no precedence. A tag's content is
//!     exactly one part: either a text run or one nested tag group. Text
//!     followed by a nested tag inside the same enclosing tag is not
//!     expressible here, even though the scanner tokenizes it fine. The
//!     grammar is intentionally this narrow and must not be widened.
//!
//! Style Tracking
//!
//!     Styles propagate through a stack rather than a tree: a segment's
//!     style set is whatever is open at the moment its text is consumed.
//!     This lets the parser skip building a nested tree and emit the flat,
//!     ordered chain a renderer wants directly. The stack is owned by one
//!     `parse` invocation; concurrent calls share nothing.

use std::fmt;

use crate::markup::segment::{Segment, SegmentChain};
use crate::markup::stack::Stack;
use crate::markup::style::Style;
use crate::markup::token::{ToMarkupString, Token};

/// Errors that can occur while parsing a token sequence.
///
/// Every failure kind is distinguishable; the scanner has no error channel,
/// so this taxonomy is the complete failure surface of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token sequence was empty.
    EmptyInput,
    /// A token appeared where a part must start (e.g. a bare closing tag).
    UnexpectedToken(Token),
    /// An opening tag had no tokens left to form its content.
    ExpectedText,
    /// An opening tag was immediately followed by its own matching close.
    EmptyTag(Style),
    /// Input ended, or a non-closing token appeared, before a matching close.
    ExpectedClosingTag(Style),
    /// A closing tag's style differed from the open tag it should match.
    WrongClosingTag { actual: Style, expected: Style },
    /// A style was opened while already open.
    AlreadyPresentTag(Style),
    /// Internal invariant violation: the style stack was not empty after a
    /// completed top-level parse. Indicates a parser defect, not bad input.
    Unexpected,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "Parse error: empty input"),
            ParseError::UnexpectedToken(token) => write!(
                f,
                "Parse error: unexpected `{}` where text or an opening tag must start",
                token.to_markup_string()
            ),
            ParseError::ExpectedText => {
                write!(f, "Parse error: expected tag content, found end of input")
            }
            ParseError::EmptyTag(style) => write!(
                f,
                "Parse error: {} tag closed immediately, tags must enclose content",
                style
            ),
            ParseError::ExpectedClosingTag(style) => {
                write!(f, "Parse error: expected a closing {} tag", style)
            }
            ParseError::WrongClosingTag { actual, expected } => write!(
                f,
                "Parse error: found a closing {} tag where a closing {} tag was expected",
                actual, expected
            ),
            ParseError::AlreadyPresentTag(style) => write!(
                f,
                "Parse error: the {} style is already open and cannot be opened again",
                style
            ),
            ParseError::Unexpected => {
                write!(f, "Internal parser error: style stack not empty after parsing")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for String {
    fn from(err: ParseError) -> Self {
        err.to_string()
    }
}

/// Type alias for parser results.
pub type ParseResult = Result<SegmentChain, ParseError>;

/// Parse a token sequence into a segment chain.
///
/// The chain preserves source order; concatenating its text reconstructs
/// every `Text` payload of the input. Parsing is pure and deterministic, so
/// re-parsing an equal sequence yields an equal chain or the identical
/// error.
///
/// # Errors
///
/// Returns the first well-formedness violation encountered; see
/// [`ParseError`] for the taxonomy.
pub fn parse(tokens: Vec<Token>) -> ParseResult {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let mut parser = Parser::new(tokens);
    let chain = parser.parse_inner_part()?;
    // The per-tag checks are designed to make this unreachable.
    if !parser.open_styles.is_empty() {
        return Err(ParseError::Unexpected);
    }
    Ok(chain)
}

/// Parser state owned by a single `parse` invocation.
struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    open_styles: Stack<Style>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            cursor: 0,
            open_styles: Stack::new(),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Parse one part, then link in the rest of the sequence at the same
    /// nesting level.
    fn parse_inner_part(&mut self) -> ParseResult {
        let mut chain = self.parse_single_part()?;
        if self.peek().is_some() {
            let rest = self.parse_inner_part()?;
            chain.extend(rest);
        }
        Ok(chain)
    }

    /// Parse exactly one part: a text run or one tag group.
    fn parse_single_part(&mut self) -> ParseResult {
        match self.advance() {
            Some(Token::Text(text)) => {
                let segment = self.make_segment(text);
                Ok(vec![segment])
            }
            Some(Token::OpeningTag(style)) => self.parse_opening_tag(style),
            Some(other) => Err(ParseError::UnexpectedToken(other)),
            None => Err(ParseError::ExpectedText),
        }
    }

    /// Parse the remainder of one `OpeningTag(style) part ClosingTag(style)`
    /// group; the opening tag itself has already been consumed.
    fn parse_opening_tag(&mut self, style: Style) -> ParseResult {
        if self.open_styles.contains(&style) {
            return Err(ParseError::AlreadyPresentTag(style));
        }
        self.open_styles.push(style);

        match self.peek() {
            None => return Err(ParseError::ExpectedText),
            Some(Token::ClosingTag(closing)) if *closing == style => {
                return Err(ParseError::EmptyTag(style));
            }
            _ => {}
        }

        let chain = self.parse_single_part()?;

        match self.advance() {
            Some(Token::ClosingTag(closing)) if closing == style => {}
            Some(Token::ClosingTag(closing)) => {
                return Err(ParseError::WrongClosingTag {
                    actual: closing,
                    expected: style,
                });
            }
            Some(_) | None => return Err(ParseError::ExpectedClosingTag(style)),
        }

        self.open_styles.pop();
        Ok(chain)
    }

    /// Build a segment carrying the styles open at this point, outermost
    /// first.
    fn make_segment(&self, text: String) -> Segment {
        Segment {
            text,
            styles: self.open_styles.iter().copied().collect(),
        }
    }
}
