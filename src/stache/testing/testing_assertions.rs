//! Fluent assertion API for template node trees

use crate::stache::ast::{Node, Separator};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a node forest
pub fn assert_nodes(nodes: &[Node]) -> NodesAssertion<'_> {
    NodesAssertion { nodes }
}

// ============================================================================
// Forest Assertions
// ============================================================================

pub struct NodesAssertion<'a> {
    nodes: &'a [Node],
}

impl<'a> NodesAssertion<'a> {
    /// Assert the number of top-level nodes
    pub fn node_count(self, expected: usize) -> Self {
        let actual = self.nodes.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} nodes, found {} nodes: [{}]",
            expected,
            actual,
            summarize_nodes(self.nodes)
        );
        self
    }

    /// Assert on a specific node by index
    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.nodes.len(),
            "Node index {} out of bounds (forest has {} nodes)",
            index,
            self.nodes.len()
        );

        let node = &self.nodes[index];
        assertion(NodeAssertion {
            node,
            context: format!("nodes[{}]", index),
        });
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert this node is a Literal and return literal-specific assertions
    pub fn assert_literal(self) -> LiteralAssertion<'a> {
        match self.node {
            Node::Literal(text) => LiteralAssertion {
                text,
                context: self.context,
            },
            _ => panic!("{}: Expected Literal, found {}", self.context, self.node),
        }
    }

    /// Assert this node is a Symbol and return symbol-specific assertions
    pub fn assert_symbol(self) -> SymbolAssertion<'a> {
        match self.node {
            Node::Symbol(name) => SymbolAssertion {
                name,
                context: self.context,
            },
            _ => panic!("{}: Expected Symbol, found {}", self.context, self.node),
        }
    }

    /// Assert this node is an Iter and return iteration-specific assertions
    pub fn assert_iter(self) -> IterAssertion<'a> {
        match self.node {
            Node::Iter {
                name,
                separator,
                children,
            } => IterAssertion {
                name,
                separator,
                children,
                context: self.context,
            },
            _ => panic!("{}: Expected Iter, found {}", self.context, self.node),
        }
    }
}

// ============================================================================
// Literal Assertions
// ============================================================================

pub struct LiteralAssertion<'a> {
    text: &'a str,
    context: String,
}

impl LiteralAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.text, expected,
            "{}: Expected literal text '{}', but got '{}'",
            self.context, expected, self.text
        );
        self
    }
    pub fn text_contains(self, substring: &str) -> Self {
        assert!(
            self.text.contains(substring),
            "{}: Expected literal text to contain '{}', but got '{}'",
            self.context,
            substring,
            self.text
        );
        self
    }
}

// ============================================================================
// Symbol Assertions
// ============================================================================

pub struct SymbolAssertion<'a> {
    name: &'a str,
    context: String,
}

impl SymbolAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.name, expected,
            "{}: Expected symbol name '{}', but got '{}'",
            self.context, expected, self.name
        );
        self
    }
}

// ============================================================================
// Iteration Assertions
// ============================================================================

pub struct IterAssertion<'a> {
    name: &'a str,
    separator: &'a Separator,
    children: &'a [Node],
    context: String,
}

impl<'a> IterAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.name, expected,
            "{}: Expected iteration name '{}', but got '{}'",
            self.context, expected, self.name
        );
        self
    }
    pub fn separator_default(self) -> Self {
        assert!(
            self.separator.is_default(),
            "{}: Expected the default separator, but got {:?}",
            self.context,
            self.separator
        );
        self
    }
    pub fn separator_text(self, expected: &str) -> Self {
        match self.separator {
            Separator::Text(sep) => assert_eq!(
                sep, expected,
                "{}: Expected separator '{}', but got '{}'",
                self.context, expected, sep
            ),
            Separator::Default => panic!(
                "{}: Expected separator '{}', but got the default separator",
                self.context, expected
            ),
        }
        self
    }
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            actual,
            summarize_nodes(self.children)
        );
        self
    }
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.children.len(),
            "{}: Child index {} out of bounds (iteration has {} children)",
            self.context,
            index,
            self.children.len()
        );
        let child = &self.children[index];
        assertion(NodeAssertion {
            node: child,
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn summarize_nodes(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
