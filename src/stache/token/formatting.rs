//! Token display and detokenization
//!
//! This module provides the `<kind:payload>` cell format used by the token
//! output formats, and the detokenizer that converts a token stream back into
//! template text. Detokenization emits the canonical marker spelling (no
//! padding inside braces, one space before a separator argument), so it is
//! byte-exact only for templates already written in canonical form. Exact
//! reconstruction of arbitrary input goes through spans instead; see
//! [lex_with_spans](crate::stache::lexing::lex_with_spans).

use std::fmt;

use crate::stache::token::{Separator, Token};

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => write!(f, "<literal:{}>", text),
            Token::Symbol(name) => write!(f, "<symbol:{}>", name),
            Token::IterInit(open) => match &open.separator {
                Separator::Default => write!(f, "<iter-init:{}>", open.name),
                Separator::Text(sep) => write!(f, "<iter-init:{} '{}'>", open.name, sep),
            },
            Token::IterEnd(name) => write!(f, "<iter-end:{}>", name),
            Token::Text(text) => write!(f, "<text:{}>", text),
        }
    }
}

/// Trait for converting a token back to template text
pub trait ToTemplateString {
    fn to_template_string(&self) -> String;
}

impl ToTemplateString for Token {
    fn to_template_string(&self) -> String {
        match self {
            Token::Literal(text) | Token::Text(text) => text.clone(),
            Token::Symbol(name) => format!("{{{{{}}}}}", name),
            Token::IterInit(open) => match &open.separator {
                Separator::Default => format!("{{{{#{}}}}}", open.name),
                Separator::Text(sep) => format!("{{{{#{} '{}'}}}}", open.name, sep),
            },
            Token::IterEnd(name) => format!("{{{{/{}}}}}", name),
        }
    }
}

/// Detokenize a stream of tokens into canonical template text
pub fn detokenize(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_template_string())
        .collect()
}
