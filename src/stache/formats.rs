//! Output format implementations for AST serialization
//!
//! This module contains format implementations for serializing the parsed
//! template tree to inspection-oriented output formats.

pub mod tag;

pub use tag::serialize_nodes as serialize_ast_tag;
