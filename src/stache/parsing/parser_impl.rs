//! Implementation of the stache parser
//!
//! Tree building follows the usual open/close stack scheme: each IterInit
//! pushes a frame saving the enclosing level, each IterEnd pops one and wraps
//! the nodes collected since the opener. The engine is iterative, so template
//! nesting depth never turns into parser recursion; the depth cap below is
//! what bounds the recursive evaluation of the finished tree.

use std::fmt;

use crate::stache::ast::Node;
use crate::stache::lexing::lex;
use crate::stache::token::{Separator, Token};

/// Maximum nesting depth of iteration blocks
pub const MAX_ITER_DEPTH: usize = 1024;

/// Errors produced while matching iteration markers
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A closing marker with no open iteration of that name at the current depth
    UnmatchedIterEnd { name: String },
    /// An opening marker that is never closed
    UnterminatedIterInit { name: String },
    /// Nesting beyond [MAX_ITER_DEPTH]
    IterDepthExceeded { limit: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnmatchedIterEnd { name } => {
                write!(f, "Unmatched iteration end marker: {{{{/{}}}}}", name)
            }
            ParseError::UnterminatedIterInit { name } => {
                write!(f, "Unterminated iteration: {{{{#{}}}}} is never closed", name)
            }
            ParseError::IterDepthExceeded { limit } => {
                write!(f, "Iteration nesting exceeds {} levels", limit)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// An open iteration awaiting its closing marker.
/// `parent` holds the nodes of the enclosing level, set aside until the
/// closing marker wraps the current level into an Iter node.
struct OpenIter {
    name: String,
    separator: Separator,
    parent: Vec<Node>,
}

/// Parse a template string into a node forest
pub fn parse(source: &str) -> Result<Vec<Node>, ParseError> {
    parse_tokens(lex(source))
}

/// Parse a token stream into a node forest
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Vec<Node>, ParseError> {
    let mut stack: Vec<OpenIter> = Vec::new();
    let mut current: Vec<Node> = Vec::new();

    for token in tokens {
        match token {
            // Raw Text parses like grouped Literal, so both stream shapes are accepted
            Token::Literal(text) | Token::Text(text) => current.push(Node::Literal(text)),
            Token::Symbol(name) => current.push(Node::Symbol(name)),
            Token::IterInit(open) => {
                if stack.len() >= MAX_ITER_DEPTH {
                    return Err(ParseError::IterDepthExceeded {
                        limit: MAX_ITER_DEPTH,
                    });
                }
                stack.push(OpenIter {
                    name: open.name,
                    separator: open.separator,
                    parent: std::mem::take(&mut current),
                });
            }
            Token::IterEnd(name) => match stack.pop() {
                Some(frame) if frame.name == name => {
                    let children = std::mem::replace(&mut current, frame.parent);
                    current.push(Node::Iter {
                        name: frame.name,
                        separator: frame.separator,
                        children,
                    });
                }
                _ => return Err(ParseError::UnmatchedIterEnd { name }),
            },
        }
    }

    // Report the innermost unclosed opener, the one nearest the missing end
    if let Some(frame) = stack.last() {
        return Err(ParseError::UnterminatedIterInit {
            name: frame.name.clone(),
        });
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stache::token::IterOpen;

    #[test]
    fn test_parse_empty_template() {
        assert_eq!(parse(""), Ok(vec![]));
    }

    #[test]
    fn test_parse_flat_template() {
        let nodes = parse("Hello {{name}}!").unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::Literal("Hello ".to_string()),
                Node::Symbol("name".to_string()),
                Node::Literal("!".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_iteration_block() {
        let nodes = parse("{{#items}}Number:{{.}}{{/items}}").unwrap();
        assert_eq!(
            nodes,
            vec![Node::Iter {
                name: "items".to_string(),
                separator: Separator::Default,
                children: vec![
                    Node::Literal("Number:".to_string()),
                    Node::Symbol(".".to_string()),
                ],
            }]
        );
    }

    #[test]
    fn test_parse_explicit_separator() {
        let nodes = parse("{{#items ';'}}{{.}}{{/items}}").unwrap();
        assert_eq!(
            nodes,
            vec![Node::Iter {
                name: "items".to_string(),
                separator: Separator::Text(";".to_string()),
                children: vec![Node::Symbol(".".to_string())],
            }]
        );
    }

    #[test]
    fn test_parse_nested_iterations() {
        let nodes = parse("{{#countries}}{{name}}:{{#cities}}{{.}}{{/cities}}{{/countries}}")
            .unwrap();
        assert_eq!(
            nodes,
            vec![Node::Iter {
                name: "countries".to_string(),
                separator: Separator::Default,
                children: vec![
                    Node::Symbol("name".to_string()),
                    Node::Literal(":".to_string()),
                    Node::Iter {
                        name: "cities".to_string(),
                        separator: Separator::Default,
                        children: vec![Node::Symbol(".".to_string())],
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_parse_siblings_after_block() {
        let nodes = parse("{{#a}}x{{/a}}tail").unwrap();
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].is_iter());
        assert_eq!(nodes[1].as_literal(), Some("tail"));
    }

    #[test]
    fn test_unmatched_end_without_opener() {
        assert_eq!(
            parse("{{/items}}"),
            Err(ParseError::UnmatchedIterEnd {
                name: "items".to_string()
            })
        );
    }

    #[test]
    fn test_unmatched_end_name_mismatch() {
        assert_eq!(
            parse("{{#a}}x{{/b}}"),
            Err(ParseError::UnmatchedIterEnd {
                name: "b".to_string()
            })
        );
    }

    #[test]
    fn test_unterminated_init() {
        assert_eq!(
            parse("{{#items}}x"),
            Err(ParseError::UnterminatedIterInit {
                name: "items".to_string()
            })
        );
    }

    #[test]
    fn test_unterminated_init_reports_innermost() {
        assert_eq!(
            parse("{{#outer}}{{#inner}}x"),
            Err(ParseError::UnterminatedIterInit {
                name: "inner".to_string()
            })
        );
    }

    #[test]
    fn test_degraded_markers_parse_as_literals() {
        let nodes = parse("{{oops").unwrap();
        assert_eq!(nodes, vec![Node::Literal("{{oops".to_string())]);
    }

    #[test]
    fn test_parse_tokens_accepts_raw_stream() {
        let tokens = vec![
            Token::Text("a".to_string()),
            Token::Text("{".to_string()),
            Token::Symbol("x".to_string()),
        ];
        let nodes = parse_tokens(tokens).unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::Literal("a".to_string()),
                Node::Literal("{".to_string()),
                Node::Symbol("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_depth_cap_exceeded() {
        let mut tokens = Vec::new();
        for _ in 0..(MAX_ITER_DEPTH + 1) {
            tokens.push(Token::IterInit(IterOpen::new("a".to_string())));
        }
        assert_eq!(
            parse_tokens(tokens),
            Err(ParseError::IterDepthExceeded {
                limit: MAX_ITER_DEPTH
            })
        );
    }

    #[test]
    fn test_depth_cap_boundary_is_allowed() {
        let mut source = String::new();
        for _ in 0..MAX_ITER_DEPTH {
            source.push_str("{{#a}}");
        }
        source.push('x');
        for _ in 0..MAX_ITER_DEPTH {
            source.push_str("{{/a}}");
        }

        let nodes = parse(&source).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].depth(), MAX_ITER_DEPTH);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::UnmatchedIterEnd {
                name: "cities".to_string()
            }
            .to_string(),
            "Unmatched iteration end marker: {{/cities}}"
        );
        assert_eq!(
            ParseError::UnterminatedIterInit {
                name: "rows".to_string()
            }
            .to_string(),
            "Unterminated iteration: {{#rows}} is never closed"
        );
        assert_eq!(
            ParseError::IterDepthExceeded { limit: 1024 }.to_string(),
            "Iteration nesting exceeds 1024 levels"
        );
    }
}
