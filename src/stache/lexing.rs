//! Lexer module for stache templates
//!
//! This module contains the tokenization logic for template text, split into
//! two passes in the usual layered-lexer shape:
//!
//! - The raw pass is a vanilla logos lexer. Marker forms are ordered regex
//!   patterns; everything else comes out as Text runs, including each stray
//!   `{` that opens no well-formed marker. Because some rule matches at every
//!   position, the raw pass is total: malformed markers degrade to text and
//!   the lexer never fails.
//! - The literal grouping transformation then merges adjacent Text tokens
//!   into single Literal tokens, so the public stream carries one Literal per
//!   maximal run of plain text.
//!
//! Keeping the grouping out of the logos pass isolates the "text up to the
//! next marker" logic in one small transformation instead of a lookahead rule.

pub mod lexer_impl;
pub mod literal_transform;

pub use crate::stache::token::Token;
pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use literal_transform::{group_literals, group_literals_with_spans};

/// Main lexer function that returns fully processed tokens (tokenize + literal grouping)
pub fn lex(source: &str) -> Vec<Token> {
    let raw_tokens = tokenize(source);
    group_literals(raw_tokens)
}

/// Lexing function that preserves source spans for the parser and round-trip checks.
/// Merged Literal tokens cover the combined span of the Text runs they group,
/// so concatenating the spanned slices reproduces the input exactly.
pub fn lex_with_spans(source: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    let raw_tokens_with_spans = tokenize_with_spans(source);
    group_literals_with_spans(raw_tokens_with_spans)
}
