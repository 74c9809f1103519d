//! End-to-end processing pipeline
//!
//!     The complete pipeline transforms a markup string into the segment
//!     chain a renderer consumes:
//!
//!         1. Scanning: tokenization of source text. See
//!            [scanning](crate::markup::scanning).
//!         2. Parsing: recursive descent over the token sequence, producing
//!            the ordered segment chain. See
//!            [parsing](crate::markup::parsing).
//!
//!     Both stages are pure, synchronous, in-memory computations; each
//!     invocation owns all of its state, so concurrent independent calls
//!     need no synchronization.

use crate::markup::parsing::{parse, ParseError};
use crate::markup::scanning::scan;
use crate::markup::segment::SegmentChain;

/// Process markup text through the complete pipeline: scan, then parse.
///
/// This is the primary entry point for consumers that start from raw text.
///
/// # Arguments
///
/// * `source` - The markup text to process
///
/// # Returns
///
/// The ordered segment chain, or the first parse failure.
///
/// # Example
///
/// ```rust,ignore
/// use tagspan::markup::pipeline::process_full;
///
/// let chain = process_full("test <b>toto</b> test.")?;
/// assert_eq!(chain.len(), 3);
/// ```
pub fn process_full(source: &str) -> Result<SegmentChain, ParseError> {
    parse(scan(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::segment::Segment;
    use crate::markup::style::Style;
    use crate::markup::token::Token;

    #[test]
    fn processes_markup_end_to_end() {
        let chain = process_full("test <b>toto</b> test.").unwrap();
        assert_eq!(
            chain,
            vec![
                Segment::plain("test "),
                Segment::styled("toto", vec![Style::Bold]),
                Segment::plain(" test."),
            ]
        );
    }

    #[test]
    fn propagates_parse_failures() {
        assert_eq!(
            process_full("</b>oops"),
            Err(ParseError::UnexpectedToken(Token::ClosingTag(Style::Bold)))
        );
    }

    #[test]
    fn empty_source_is_empty_input() {
        assert_eq!(process_full(""), Err(ParseError::EmptyInput));
    }
}
