//! # stache
//!
//! A Mustache-style template engine.
//!
//! Rendering is a three-stage pipeline: the lexer turns template text into a
//! flat token stream, the parser matches iteration markers into a node tree,
//! and the evaluator walks that tree against a context value to produce the
//! output string.
//!
//! ## Testing
//!
//! For comprehensive testing guidelines, see the [testing module](stache::testing).
//! Document-level tests must use verified template sources and node assertions.

pub mod stache;
