//! Tree definitions for parsed stache templates
//!
//! This module defines the data structures that represent the parsed
//! structure of a template. A parsed template is a forest of nodes: literal
//! text, symbol substitutions, and iteration blocks whose children are the
//! sub-template between the opening and closing markers. The tree is
//! immutable once built; rendering walks it without modification.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::stache::token::{Separator, DEFAULT_SEPARATOR};

/// A single node of a parsed template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Plain text, rendered verbatim
    Literal(String),
    /// Substitution of a context value by key
    Symbol(String),
    /// Iteration over a sequence, rendering children once per element
    Iter {
        /// Key naming the sequence in the context
        name: String,
        /// Separator interposed between rendered elements
        separator: Separator,
        /// Sub-template between the opening and closing markers
        children: Vec<Node>,
    },
}

impl Node {
    /// Create a literal node
    pub fn literal(text: String) -> Self {
        Node::Literal(text)
    }

    /// Create a symbol node
    pub fn symbol(name: String) -> Self {
        Node::Symbol(name)
    }

    /// Create an iteration node with the implicit default separator
    pub fn iter(name: String, children: Vec<Node>) -> Self {
        Node::Iter {
            name,
            separator: Separator::Default,
            children,
        }
    }

    /// Create an iteration node with an explicit separator
    pub fn iter_with_separator(name: String, separator: String, children: Vec<Node>) -> Self {
        Node::Iter {
            name,
            separator: Separator::Text(separator),
            children,
        }
    }

    // ========================================================================
    // Type checking methods
    // ========================================================================

    /// Check if this node is a Literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// Check if this node is a Symbol
    pub fn is_symbol(&self) -> bool {
        matches!(self, Node::Symbol(_))
    }

    /// Check if this node is an Iter
    pub fn is_iter(&self) -> bool {
        matches!(self, Node::Iter { .. })
    }

    // ========================================================================
    // Safe extraction methods (Option-returning)
    // ========================================================================

    /// Get the text if this is a Literal node
    pub fn as_literal(&self) -> Option<&str> {
        if let Node::Literal(text) = self {
            Some(text)
        } else {
            None
        }
    }

    /// Get the key name if this is a Symbol node
    pub fn as_symbol(&self) -> Option<&str> {
        if let Node::Symbol(name) = self {
            Some(name)
        } else {
            None
        }
    }

    /// Get (name, separator, children) if this is an Iter node
    pub fn as_iter(&self) -> Option<(&str, &Separator, &[Node])> {
        if let Node::Iter {
            name,
            separator,
            children,
        } = self
        {
            Some((name, separator, children))
        } else {
            None
        }
    }

    /// Maximum marker nesting depth of this node (a leaf has depth 0)
    pub fn depth(&self) -> usize {
        match self {
            Node::Literal(_) | Node::Symbol(_) => 0,
            Node::Iter { children, .. } => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(text) => write!(f, "Literal({} chars)", text.len()),
            Node::Symbol(name) => write!(f, "Symbol('{}')", name),
            Node::Iter {
                name, children, ..
            } => write!(f, "Iter('{}', {} children)", name, children.len()),
        }
    }
}
