//! Testing utilities for node tree assertions
//!
//! # Template Testing Guidelines
//!
//! Testing the parser must follow strict rules to ensure reliability and maintainability.
//! This module provides two essential tools that **must** be used together:
//!
//! 1. **[TemplateSources](crate::stache::processor::template_sources::TemplateSources)** - For verified template content
//! 2. **[assert_nodes](fn@assert_nodes)** - For comprehensive tree verification
//!
//! ## Rule 1: Always Use TemplateSources for Test Content
//!
//! **Why this matters:**
//!
//! Marker spelling details (padding, separator quoting, nesting) are easy to get
//! subtly wrong when template content is written inline, leading to false
//! positives in tests. When the template grammar changes, we need to verify and
//! update all source files. If template content is scattered across many test
//! files, this becomes a maintenance nightmare.
//!
//! **The solution:**
//!
//! Use the `TemplateSources` library to access verified, curated sample files.
//! This ensures only vetted sources are used and makes writing tests much easier.
//!
//! ```rust,ignore
//! use crate::stache::processor::template_sources::TemplateSources;
//! use crate::stache::parsing::parse;
//!
//! // ✅ CORRECT: Use verified sample files
//! let source = TemplateSources::get_string("020-iteration.stache")?;
//! let nodes = parse(&source)?;
//!
//! // ❌ WRONG: Don't write template content directly in tests
//! let nodes = parse("{{#numbers}}Number:{{.}}{{/numbers}}\n")?;
//! ```
//!
//! **Available samples:**
//! - `000-literal.stache` - Plain text without markers
//! - `010-symbols.stache` - Symbol substitution
//! - `020-iteration.stache` - Basic iteration with the default separator
//! - `030-separators.stache` - Custom separators
//! - `040-nested.stache` - Nested iteration with context narrowing
//! - `050-missing.stache` - Missing keys and absent sequences
//!
//! ## Rule 2: Always Use assert_nodes for Tree Verification
//!
//! **Why this matters:**
//!
//! What we want for every parser test is to ensure that the tree shape is
//! correct per the grammar, that all attributes are correct (names, separators,
//! children). Asserting generalities like node counts is useless - it's not
//! informative. We want assurance on the tree shape and content.
//!
//! **The solution:**
//!
//! Use the `assert_nodes` fluent API. It allows testing entire hierarchies of
//! nodes at once with a fraction of the code:
//!
//! ```rust,ignore
//! use crate::stache::testing::assert_nodes;
//!
//! assert_nodes(&nodes)
//!     .node_count(2)
//!     .node(0, |node| {
//!         node.assert_literal().text("Hello ");
//!     })
//!     .node(1, |node| {
//!         node.assert_iter()
//!             .name("items")
//!             .separator_text("; ")
//!             .child_count(1)
//!             .child(0, |child| {
//!                 child.assert_symbol().name(".");
//!             });
//!     });
//! ```
//!
//! The structure mirrors the tree. Clear what's being tested.
//!
//! ## Complete Testing Example
//!
//! ```rust,ignore
//! use crate::stache::processor::template_sources::TemplateSources;
//! use crate::stache::parsing::parse;
//! use crate::stache::testing::assert_nodes;
//!
//! #[test]
//! fn test_nested_iteration() -> Result<(), Box<dyn std::error::Error>> {
//!     // Rule 1: Use verified template sources
//!     let source = TemplateSources::get_string("040-nested.stache")?;
//!     let nodes = parse(&source)?;
//!
//!     // Rule 2: Use assert_nodes for comprehensive verification
//!     assert_nodes(&nodes).node(0, |node| {
//!         node.assert_iter()
//!             .name("countries")
//!             .child(2, |child| {
//!                 child.assert_iter().name("cities").child_count(1);
//!             });
//!     });
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features of assert_nodes
//!
//! **Type-safe**: Compiler catches mismatched assertions. Can't call `.name()` on a literal.
//!
//! **Clear errors**: Shows exactly what failed with context:
//! ```text
//! nodes[1]:children[0]: Expected Symbol, found Literal(4 chars)
//! ```
//!
//! **Smart summaries**: Count mismatches show actual structure:
//! ```text
//! Expected 2 children, found 3: [Literal(8 chars), Symbol('.'), Iter('cities', 1 children)]
//! ```

mod testing_assertions;
mod testing_factories;

pub use testing_assertions::{
    assert_nodes, IterAssertion, LiteralAssertion, NodeAssertion, NodesAssertion, SymbolAssertion,
};

// Public submodule path: crate::stache::testing::factories
pub mod factories {
    pub use super::testing_factories::*;
}
