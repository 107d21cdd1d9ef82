//! Implementation of the raw stache lexer
//!
//! This module provides convenience functions for tokenizing template text.
//! The actual tokenization is handled entirely by logos; every character of
//! the input is covered by some pattern, so no input is ever rejected here.

use crate::stache::token::Token;
use logos::Logos;

/// Convenience function to tokenize a string and collect all raw tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Convenience function to tokenize a string and collect raw tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
