//! # tagspan
//!
//! A scanner and parser for inline tag markup.
//!
//! The library turns a raw text string containing paired style tags
//! (currently `<b>` / `</b>`) into an ordered token stream, and the token
//! stream into a flat, ordered chain of style-annotated segments ready for a
//! renderer. See the [pipeline module](markup::pipeline) for the end-to-end
//! entry point.
//!
//! Scanning is total: malformed tag-like input (`<`, `<b`, `<%>`) degrades to
//! literal text and never fails. Parsing enforces well-formedness of the tag
//! structure and reports the first violation with a dedicated error variant.
//!
//! For testing helpers and guidelines, see the [testing module](markup::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod markup;
