//! Test factories for creating tokens and nodes succinctly

use crate::stache::ast::Node;
use crate::stache::token::{IterOpen, Token};

/// Make a literal token
pub fn lit(text: &str) -> Token {
    Token::Literal(text.to_string())
}

/// Make a symbol token
pub fn sym(name: &str) -> Token {
    Token::Symbol(name.to_string())
}

/// Make an iteration opening token with the default separator
pub fn iter_init(name: &str) -> Token {
    Token::IterInit(IterOpen::new(name.to_string()))
}

/// Make an iteration opening token with a custom separator
pub fn iter_init_sep(name: &str, separator: &str) -> Token {
    Token::IterInit(IterOpen::with_separator(
        name.to_string(),
        separator.to_string(),
    ))
}

/// Make an iteration closing token
pub fn iter_end(name: &str) -> Token {
    Token::IterEnd(name.to_string())
}

/// Make a literal node
pub fn nlit(text: &str) -> Node {
    Node::literal(text.to_string())
}

/// Make a symbol node
pub fn nsym(name: &str) -> Node {
    Node::symbol(name.to_string())
}

/// Make an iteration node with the default separator
pub fn niter(name: &str, children: Vec<Node>) -> Node {
    Node::iter(name.to_string(), children)
}

/// Make an iteration node with a custom separator
pub fn niter_sep(name: &str, separator: &str, children: Vec<Node>) -> Node {
    Node::iter_with_separator(name.to_string(), separator.to_string(), children)
}
