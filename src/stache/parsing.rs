//! Parser module for stache templates
//!
//! The parser turns the flat token stream into a node forest by matching
//! iteration markers. It is a single pass over the tokens with an explicit
//! stack of open iterations: literal and symbol tokens append to the current
//! level, an opening marker pushes a level, and a closing marker pops one and
//! wraps the collected children in an Iter node.
//!
//! Marker mismatches are the only fatal errors in the pipeline: a closing
//! marker with no matching opener, an opener that is never closed, or nesting
//! past the depth cap. Everything the lexer degraded to literal text parses
//! fine.

pub mod parser_impl;

pub use parser_impl::{parse, parse_tokens, ParseError, MAX_ITER_DEPTH};
