//! Evaluation module for stache templates
//!
//! Rendering walks a parsed node forest against a context value. The context
//! is a `serde_json::Value` tree: objects are the mappings symbols look up
//! in, arrays are the sequences iterations walk, and everything else renders
//! as scalar text. The walk is read-only and total: a missing key or a
//! non-sequence iteration target renders as nothing instead of failing, so
//! the only fatal errors in the pipeline stay in the parser.

pub mod eval_impl;

pub use eval_impl::{eval, render, value_to_string};
