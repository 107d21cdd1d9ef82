//! Literal grouping transformation for the stache lexer
//!
//! This module merges runs of consecutive raw Text tokens into single Literal
//! tokens. The raw pass emits one Text token per text run and one per stray
//! `{`, so a degraded marker like `{{oops` reaches the parser as the single
//! literal it reads as, not as three fragments.
//!
//! This transformation is applied AFTER raw tokenization and completes the
//! public token stream: downstream consumers see Literal, never Text.

use crate::stache::token::Token;

/// Merge consecutive Text tokens into Literal tokens
///
/// # Algorithm
///
/// 1. Iterate through the token stream
/// 2. When we encounter a Text token, collect the full run of consecutive Texts
/// 3. Emit one Literal holding the concatenated run
/// 4. Preserve all other tokens unchanged
///
/// # Example
///
/// Input tokens: `[Text("{"), Text("{"), Text("oops"), Symbol("x")]`
/// Output tokens: `[Literal("{{oops"), Symbol("x")]`
pub fn group_literals(tokens: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if let Token::Text(first) = &tokens[i] {
            let mut text = first.clone();
            let mut j = i + 1;
            while j < tokens.len() {
                match &tokens[j] {
                    Token::Text(next) => {
                        text.push_str(next);
                        j += 1;
                    }
                    _ => break,
                }
            }

            result.push(Token::Literal(text));
            i = j;
        } else {
            result.push(tokens[i].clone());
            i += 1;
        }
    }

    result
}

/// Group literals while preserving source spans.
/// A merged Literal covers the combined span of the Text run it replaces;
/// raw tokens are adjacent, so the merged spans still partition the source.
pub fn group_literals_with_spans(
    tokens_with_spans: Vec<(Token, std::ops::Range<usize>)>,
) -> Vec<(Token, std::ops::Range<usize>)> {
    let mut result = Vec::new();
    let mut i = 0;

    while i < tokens_with_spans.len() {
        if let (Token::Text(first), first_span) = &tokens_with_spans[i] {
            let mut text = first.clone();
            let mut span = first_span.clone();
            let mut j = i + 1;
            while j < tokens_with_spans.len() {
                match &tokens_with_spans[j] {
                    (Token::Text(next), next_span) => {
                        text.push_str(next);
                        span.end = next_span.end;
                        j += 1;
                    }
                    _ => break,
                }
            }

            result.push((Token::Literal(text), span));
            i = j;
        } else {
            result.push(tokens_with_spans[i].clone());
            i += 1;
        }
    }

    result
}
