//! Core token types shared across the lexer, parser, and tooling.
//!
//!     This module defines the tokens produced by the stache lexer. The tokens
//!     are defined using the logos derive macro: each marker form is one ordered
//!     regex pattern, and maximal munch picks the longest match at every position.
//!
//! Token Layers
//!
//!     Raw Tokens:
//!         Text runs and stray open braces, produced directly by the logos lexer.
//!         A lone `{` that does not start a well-formed marker is lexed as a
//!         one-character Text token, which is how malformed markers degrade to
//!         plain text instead of failing the lexer.
//!
//!     Grouped Tokens:
//!         Adjacent Text tokens are merged into single Literal tokens by the
//!         literal grouping transformation. The public token stream contains
//!         Literal, Symbol, IterInit, and IterEnd only. See
//!         [literal_transform](crate::stache::lexing::literal_transform).
//!
//! Marker Grammar
//!
//!     Identifiers are one or more of ASCII letters, digits, `-`, and `.`;
//!     the identifier `.` alone names the current iteration item. Markers
//!     allow space and tab padding inside the braces. A separator argument is
//!     single-quoted and may contain any character except a single quote,
//!     including newlines and braces.

pub mod formatting;

pub use formatting::{detokenize, ToTemplateString};

use logos::Logos;
use serde::{Deserialize, Serialize};

/// Separator text used when an iteration marker does not name one.
pub const DEFAULT_SEPARATOR: &str = ",";

/// Separator between rendered sequence elements.
///
/// `Default` is kept distinct from `Text(",")` so token and tree output
/// formats show whether the template spelled the separator out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Separator {
    Default,
    Text(String),
}

impl Separator {
    /// Resolve the separator to the text interposed between elements
    pub fn as_str(&self) -> &str {
        match self {
            Separator::Default => DEFAULT_SEPARATOR,
            Separator::Text(text) => text,
        }
    }

    /// Check if this is the implicit default separator
    pub fn is_default(&self) -> bool {
        matches!(self, Separator::Default)
    }
}

/// Payload of an iteration-opening marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterOpen {
    /// Key naming the sequence to iterate over
    pub name: String,
    /// Separator interposed between rendered elements
    pub separator: Separator,
}

impl IterOpen {
    /// Create an opener with the implicit default separator
    pub fn new(name: String) -> Self {
        Self {
            name,
            separator: Separator::Default,
        }
    }

    /// Create an opener with an explicit separator
    pub fn with_separator(name: String, separator: String) -> Self {
        Self {
            name,
            separator: Separator::Text(separator),
        }
    }
}

/// All possible tokens in a stache template
#[derive(Logos, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Plain template text (synthetic, produced by literal grouping)
    Literal(String),

    /// Substitution marker: `{{name}}`
    #[regex(r"\{\{[ \t]*[A-Za-z0-9.-]+[ \t]*\}\}", |lex| symbol_name(lex.slice()))]
    Symbol(String),

    /// Iteration opener: `{{#name}}` or `{{#name 'sep'}}`
    #[regex(r"\{\{[ \t]*#[ \t]*[A-Za-z0-9.-]+[ \t]*\}\}", |lex| iter_open(lex.slice()))]
    #[regex(r"\{\{[ \t]*#[ \t]*[A-Za-z0-9.-]+[ \t]+'[^']*'[ \t]*\}\}", |lex| iter_open(lex.slice()))]
    IterInit(IterOpen),

    /// Iteration closer: `{{/name}}`
    #[regex(r"\{\{[ \t]*/[ \t]*[A-Za-z0-9.-]+[ \t]*\}\}", |lex| iter_end_name(lex.slice()))]
    IterEnd(String),

    /// Raw text run, or a stray `{` that opens no marker
    #[regex(r"[^{]+", |lex| lex.slice().to_owned())]
    #[token("{", |lex| lex.slice().to_owned())]
    Text(String),
}

/// Strip the surrounding braces and padding from a matched marker slice
fn marker_body(slice: &str) -> &str {
    slice[2..slice.len() - 2].trim_matches(|c| c == ' ' || c == '\t')
}

fn symbol_name(slice: &str) -> String {
    marker_body(slice).to_string()
}

fn iter_end_name(slice: &str) -> String {
    marker_body(slice)
        .trim_start_matches('/')
        .trim_start_matches(|c| c == ' ' || c == '\t')
        .to_string()
}

/// Extract name and optional separator from an iteration opener slice.
/// The separator is everything between the first and last single quote;
/// the quote character itself cannot appear in a separator.
fn iter_open(slice: &str) -> IterOpen {
    let body = marker_body(slice)
        .trim_start_matches('#')
        .trim_start_matches(|c| c == ' ' || c == '\t');
    match body.split_once('\'') {
        Some((name_part, rest)) => {
            let name = name_part
                .trim_end_matches(|c| c == ' ' || c == '\t')
                .to_string();
            let separator = match rest.rsplit_once('\'') {
                Some((separator, _)) => separator.to_string(),
                None => String::new(),
            };
            IterOpen::with_separator(name, separator)
        }
        None => IterOpen::new(body.to_string()),
    }
}

impl Token {
    /// Check if this token is literal template text (grouped or raw)
    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_) | Token::Text(_))
    }

    /// Check if this token is a substitution marker
    pub fn is_symbol(&self) -> bool {
        matches!(self, Token::Symbol(_))
    }

    /// Check if this token opens an iteration
    pub fn is_iter_init(&self) -> bool {
        matches!(self, Token::IterInit(_))
    }

    /// Check if this token closes an iteration
    pub fn is_iter_end(&self) -> bool {
        matches!(self, Token::IterEnd(_))
    }

    /// Check if this token is any marker form
    pub fn is_marker(&self) -> bool {
        matches!(
            self,
            Token::Symbol(_) | Token::IterInit(_) | Token::IterEnd(_)
        )
    }
}
