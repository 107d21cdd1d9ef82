//! Implementation of the stache evaluator
//!
//! The evaluator recurses through Iter nodes, narrowing the context to one
//! sequence element per pass and interposing the separator strictly between
//! elements. Recursion depth is bounded by the parser's nesting cap, so the
//! walk needs no depth bookkeeping of its own.

use serde_json::Value;

use crate::stache::ast::Node;
use crate::stache::parsing::{parse, ParseError};

/// Evaluate a node forest against a context value
pub fn eval(nodes: &[Node], context: &Value) -> String {
    let mut output = String::new();
    for node in nodes {
        match node {
            Node::Literal(text) => output.push_str(text),
            Node::Symbol(name) => {
                if let Some(value) = lookup(name, context) {
                    output.push_str(&value_to_string(value));
                }
            }
            Node::Iter {
                name,
                separator,
                children,
            } => {
                let items = match lookup(name, context).and_then(Value::as_array) {
                    Some(items) => items,
                    None => continue,
                };
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        output.push_str(separator.as_str());
                    }
                    output.push_str(&eval(children, item));
                }
            }
        }
    }
    output
}

/// Parse and evaluate a template string in one call
pub fn render(template: &str, context: &Value) -> Result<String, ParseError> {
    let nodes = parse(template)?;
    Ok(eval(&nodes, context))
}

/// Resolve a key against the current context.
/// `.` names the context value itself; any other key is a single-level
/// lookup in the current mapping. Dots inside a key are ordinary characters,
/// not a path syntax.
fn lookup<'a>(name: &str, context: &'a Value) -> Option<&'a Value> {
    if name == "." {
        return Some(context);
    }
    match context {
        Value::Object(map) => map.get(name),
        _ => None,
    }
}

/// Convert a context value to its rendered text.
/// Strings render without quotes and null renders as nothing; any other
/// value renders as its compact JSON text, which keeps composite values
/// visible in the output instead of silently vanishing.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
